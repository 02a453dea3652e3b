//! Tests for the session lifecycle state machine.

use std::sync::Arc;
use std::time::Duration;

use rstest::rstest;

use super::*;
use crate::domain::auth::{Credentials, SignUpRequest};
use crate::domain::ports::{
    IdentityStoreError, MockIdentityStore, MockSessionStore, Notifier, SessionStoreError,
};
use crate::domain::user::{ProfileUpdate, Role};
use crate::outbound::{InMemoryIdentityStore, InMemorySessionStore, RecordingNotifier, Signal};
use crate::seed;

struct Harness {
    manager: SessionManager<InMemoryIdentityStore, InMemorySessionStore>,
    slot: Arc<InMemorySessionStore>,
    notifier: Arc<RecordingNotifier>,
}

fn harness() -> Harness {
    harness_with_slot(Arc::new(InMemorySessionStore::default()))
}

fn harness_with_slot(slot: Arc<InMemorySessionStore>) -> Harness {
    let identities = seed::builtin_identity_store().expect("demo identities load");
    let notifier = Arc::new(RecordingNotifier::default());
    let manager = SessionManager::restore(
        Arc::new(identities),
        Arc::clone(&slot),
        Arc::clone(&notifier) as Arc<dyn Notifier>,
        Duration::ZERO,
    );
    Harness {
        manager,
        slot,
        notifier,
    }
}

fn credentials(email: &str, password: &str) -> Credentials {
    Credentials::try_from_parts(email, password).expect("credentials shape")
}

#[rstest]
fn restore_starts_anonymous_with_an_empty_slot() {
    let harness = harness();
    assert!(!harness.manager.is_authenticated());
    assert!(harness.manager.current().is_none());
}

#[tokio::test]
async fn restore_resumes_a_persisted_session() {
    let slot = Arc::new(InMemorySessionStore::default());
    {
        let mut first = harness_with_slot(Arc::clone(&slot)).manager;
        first
            .sign_in(&credentials("admin@wandernepal.com", "password"))
            .await
            .expect("sign in succeeds");
    }

    let resumed = harness_with_slot(slot).manager;
    assert!(resumed.is_authenticated());
    let profile = resumed.current().expect("session restored");
    assert_eq!(profile.email().as_str(), "admin@wandernepal.com");
    assert!(resumed.is_admin());
}

#[rstest]
fn restore_falls_back_to_anonymous_when_the_slot_is_unreadable() {
    let mut slot = MockSessionStore::new();
    slot.expect_load()
        .times(1)
        .returning(|| Err(SessionStoreError::corrupt("unexpected token")));

    let manager: SessionManager<MockIdentityStore, MockSessionStore> = SessionManager::restore(
        Arc::new(MockIdentityStore::new()),
        Arc::new(slot),
        Arc::new(RecordingNotifier::default()),
        Duration::ZERO,
    );
    assert!(!manager.is_authenticated());
}

#[tokio::test]
async fn sign_in_with_the_demo_secret_authenticates_and_persists() {
    let mut harness = harness();

    let profile = harness
        .manager
        .sign_in(&credentials("admin@wandernepal.com", "password"))
        .await
        .expect("sign in succeeds");

    assert_eq!(profile.role(), Role::Admin);
    assert!(harness.manager.is_authenticated());
    assert!(harness.manager.is_admin());

    let persisted = harness.slot.load().expect("slot readable");
    assert_eq!(persisted.as_ref(), Some(&profile));
    assert_eq!(
        harness.notifier.signals(),
        vec![Signal::Success("Welcome back, Admin User!".to_owned())]
    );
}

#[rstest]
#[case("admin@wandernepal.com", "hunter2")]
#[case("nobody@wandernepal.com", "password")]
#[tokio::test]
async fn sign_in_failures_leave_the_session_anonymous(
    #[case] email: &str,
    #[case] password: &str,
) {
    let mut harness = harness();

    let err = harness
        .manager
        .sign_in(&credentials(email, password))
        .await
        .expect_err("sign in must fail");

    assert_eq!(err, AuthError::InvalidCredentials);
    assert!(!harness.manager.is_authenticated());
    assert_eq!(harness.slot.load().expect("slot readable"), None);
    assert_eq!(
        harness.notifier.signals(),
        vec![Signal::Error("Invalid email or password".to_owned())]
    );
}

#[tokio::test]
async fn sign_up_with_a_taken_email_changes_nothing() {
    let mut harness = harness();
    let request = SignUpRequest::try_from_parts("Someone Else", "user@example.com", "pw")
        .expect("request shape");

    let err = harness
        .manager
        .sign_up(&request)
        .await
        .expect_err("sign up must fail");

    assert_eq!(
        err,
        AuthError::EmailAlreadyRegistered {
            email: "user@example.com".to_owned(),
        }
    );
    assert!(!harness.manager.is_authenticated());
    assert_eq!(harness.slot.load().expect("slot readable"), None);
    assert_eq!(
        harness.notifier.signals(),
        vec![Signal::Error("Email already registered".to_owned())]
    );
}

#[tokio::test]
async fn sign_up_with_a_fresh_email_creates_a_user_role_identity() {
    let mut harness = harness();
    let request = SignUpRequest::try_from_parts("Asha Traveller", "asha@example.com", "trailmix")
        .expect("request shape");

    let profile = harness
        .manager
        .sign_up(&request)
        .await
        .expect("sign up succeeds");

    assert_eq!(profile.role(), Role::User);
    assert_ne!(profile.id(), "1");
    assert_ne!(profile.id(), "2");
    assert!(
        profile
            .avatar()
            .expect("generated avatar")
            .contains("Asha+Traveller")
    );
    assert!(harness.manager.is_authenticated());
    assert!(!harness.manager.is_admin());
    assert_eq!(
        harness.slot.load().expect("slot readable").as_ref(),
        Some(&profile)
    );
    assert_eq!(
        harness.notifier.signals(),
        vec![Signal::Success(
            "Registration successful! Welcome to WanderNepal.".to_owned()
        )]
    );
}

#[tokio::test]
async fn a_registered_identity_can_sign_back_in_with_its_own_password() {
    let mut harness = harness();
    let request = SignUpRequest::try_from_parts("Asha Traveller", "asha@example.com", "trailmix")
        .expect("request shape");
    harness
        .manager
        .sign_up(&request)
        .await
        .expect("sign up succeeds");
    harness.manager.sign_out();

    let profile = harness
        .manager
        .sign_in(&credentials("asha@example.com", "trailmix"))
        .await
        .expect("sign in succeeds");
    assert_eq!(profile.name(), "Asha Traveller");

    let err = harness
        .manager
        .sign_in(&credentials("asha@example.com", "password"))
        .await
        .expect_err("demo secret must not unlock registered identities");
    assert_eq!(err, AuthError::InvalidCredentials);
}

#[tokio::test]
async fn sign_out_always_ends_anonymous_and_clears_the_slot() {
    let mut harness = harness();
    harness
        .manager
        .sign_in(&credentials("user@example.com", "password"))
        .await
        .expect("sign in succeeds");

    harness.manager.sign_out();
    assert!(!harness.manager.is_authenticated());
    assert_eq!(harness.slot.load().expect("slot readable"), None);

    // Signing out while already anonymous is equally fine.
    harness.manager.sign_out();
    assert!(!harness.manager.is_authenticated());

    let signals = harness.notifier.signals();
    assert_eq!(
        signals.last(),
        Some(&Signal::Success("Logged out successfully".to_owned()))
    );
}

#[tokio::test]
async fn update_profile_merges_and_re_persists() {
    let mut harness = harness();
    harness
        .manager
        .sign_in(&credentials("user@example.com", "password"))
        .await
        .expect("sign in succeeds");

    harness.manager.update_profile(ProfileUpdate {
        name: Some("Demo Traveller".to_owned()),
        ..ProfileUpdate::default()
    });

    let current = harness.manager.current().expect("still authenticated");
    assert_eq!(current.name(), "Demo Traveller");

    let persisted = harness
        .slot
        .load()
        .expect("slot readable")
        .expect("slot populated");
    assert_eq!(persisted.name(), "Demo Traveller");
    assert_eq!(persisted.role(), Role::User);
}

#[rstest]
fn update_profile_is_a_silent_no_op_when_anonymous() {
    let mut harness = harness();

    harness.manager.update_profile(ProfileUpdate {
        name: Some("Ghost".to_owned()),
        ..ProfileUpdate::default()
    });

    assert!(!harness.manager.is_authenticated());
    assert_eq!(harness.slot.load().expect("slot readable"), None);
    assert!(harness.notifier.signals().is_empty());
}

#[tokio::test]
async fn a_failing_slot_write_fails_the_sign_in() {
    let identities = seed::builtin_identity_store().expect("demo identities load");
    let mut slot = MockSessionStore::new();
    slot.expect_load().returning(|| Ok(None));
    slot.expect_save()
        .returning(|_| Err(SessionStoreError::io("disk full")));

    let notifier = Arc::new(RecordingNotifier::default());
    let mut manager = SessionManager::restore(
        Arc::new(identities),
        Arc::new(slot),
        Arc::clone(&notifier) as Arc<dyn Notifier>,
        Duration::ZERO,
    );

    let err = manager
        .sign_in(&credentials("user@example.com", "password"))
        .await
        .expect_err("sign in must fail");
    assert!(matches!(err, AuthError::Persistence(_)));
    assert!(!manager.is_authenticated());
    assert_eq!(
        notifier.signals(),
        vec![Signal::Error("Something went wrong. Please try again.".to_owned())]
    );
}

#[tokio::test]
async fn an_identity_store_failure_surfaces_as_a_transient_error() {
    let mut identities = MockIdentityStore::new();
    identities
        .expect_find_by_email()
        .returning(|_| Err(IdentityStoreError::backend("directory offline")));

    let notifier = Arc::new(RecordingNotifier::default());
    let mut manager = SessionManager::restore(
        Arc::new(identities),
        Arc::new(InMemorySessionStore::default()),
        Arc::clone(&notifier) as Arc<dyn Notifier>,
        Duration::ZERO,
    );

    let err = manager
        .sign_in(&credentials("user@example.com", "password"))
        .await
        .expect_err("sign in must fail");
    assert!(matches!(err, AuthError::Identity(_)));
    assert_eq!(
        notifier.signals(),
        vec![Signal::Error("Something went wrong. Please try again.".to_owned())]
    );
}
