//! Session lifecycle state machine.
//!
//! A session is either anonymous or authenticated with one profile. The
//! manager is an explicit object owned by the application root rather than
//! ambient global state: it is constructed once from the persisted slot and
//! handed down to whatever needs it. Sign-in and sign-up suspend for a
//! configured latency to model the network round trip the demo flow stands
//! in for; sign-out and profile updates are synchronous.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use super::auth::{Credentials, SignUpRequest};
use super::ports::{
    IdentityStore, IdentityStoreError, Notifier, SessionStore, SessionStoreError, StoredIdentity,
};
use super::user::{ProfileUpdate, UserProfile};

const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
const EMAIL_TAKEN_MESSAGE: &str = "Email already registered";
const SIGN_UP_SUCCESS_MESSAGE: &str = "Registration successful! Welcome to WanderNepal.";
const SIGNED_OUT_MESSAGE: &str = "Logged out successfully";
const TRANSIENT_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Errors returned by sign-in and sign-up.
///
/// Every variant is recovered locally: the operation reports failure, a
/// signal reaches the notification surface, and the state machine stays
/// where it was. Nothing here propagates as a fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No identity matched the email, or the password was wrong. The two
    /// cases are deliberately indistinguishable to the caller.
    #[error("invalid email or password")]
    InvalidCredentials,
    /// Sign-up collided with an existing identity.
    #[error("email '{email}' is already registered")]
    EmailAlreadyRegistered { email: String },
    /// The identity store failed.
    #[error(transparent)]
    Identity(IdentityStoreError),
    /// The persisted slot could not be written.
    #[error(transparent)]
    Persistence(#[from] SessionStoreError),
}

/// The session state machine.
///
/// ```text
/// Anonymous --sign_in ok-->  Authenticated
/// Anonymous --sign_up ok-->  Authenticated
/// Authenticated --sign_out-> Anonymous
/// Authenticated --update_profile-> Authenticated (mutated payload)
/// ```
pub struct SessionManager<I, S> {
    identity_store: Arc<I>,
    session_store: Arc<S>,
    notifier: Arc<dyn Notifier>,
    latency: Duration,
    current: Option<UserProfile>,
}

impl<I, S> SessionManager<I, S>
where
    I: IdentityStore,
    S: SessionStore,
{
    /// Constructs the manager, restoring any persisted session.
    ///
    /// A present, decodable slot starts the session authenticated. An empty
    /// slot starts it anonymous. An unreadable slot also starts it
    /// anonymous: a corrupt slot must never take the whole application down,
    /// so the failure is logged and treated as "no session".
    pub fn restore(
        identity_store: Arc<I>,
        session_store: Arc<S>,
        notifier: Arc<dyn Notifier>,
        latency: Duration,
    ) -> Self {
        let current = match session_store.load() {
            Ok(current) => current,
            Err(err) => {
                warn!(error = %err, "persisted session unreadable, starting anonymous");
                None
            }
        };

        Self {
            identity_store,
            session_store,
            notifier,
            latency,
            current,
        }
    }

    /// The signed-in profile, if any.
    pub fn current(&self) -> Option<&UserProfile> {
        self.current.as_ref()
    }

    /// Whether a visitor is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Whether the signed-in visitor may open the admin dashboard.
    pub fn is_admin(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|profile| profile.role().is_admin())
    }

    /// Signs in with an email and password.
    ///
    /// Suspends for the configured latency, then resolves against the
    /// identity store. On success the session becomes authenticated and the
    /// profile is persisted; on any failure the state is unchanged and an
    /// error signal reaches the notification surface.
    pub async fn sign_in(&mut self, credentials: &Credentials) -> Result<UserProfile, AuthError> {
        tokio::time::sleep(self.latency).await;

        let found = self
            .identity_store
            .find_by_email(credentials.email())
            .await
            .map_err(|err| self.identity_failure(err))?;

        let Some(identity) = found else {
            self.notifier.error(INVALID_CREDENTIALS_MESSAGE);
            return Err(AuthError::InvalidCredentials);
        };
        if credentials.password() != identity.secret() {
            self.notifier.error(INVALID_CREDENTIALS_MESSAGE);
            return Err(AuthError::InvalidCredentials);
        }

        let profile = identity.into_profile();
        self.persist(&profile)?;
        self.current = Some(profile.clone());
        self.notifier
            .success(&format!("Welcome back, {}!", profile.name()));
        Ok(profile)
    }

    /// Registers a new identity and signs it in.
    ///
    /// Suspends for the same latency as sign-in. Fails if the email is
    /// already registered; otherwise a fresh identity is created with a
    /// generated id and avatar, the session becomes authenticated, and the
    /// profile is persisted.
    pub async fn sign_up(&mut self, request: &SignUpRequest) -> Result<UserProfile, AuthError> {
        tokio::time::sleep(self.latency).await;

        let existing = self
            .identity_store
            .find_by_email(request.email())
            .await
            .map_err(|err| self.identity_failure(err))?;
        if existing.is_some() {
            self.notifier.error(EMAIL_TAKEN_MESSAGE);
            return Err(AuthError::EmailAlreadyRegistered {
                email: request.email().to_string(),
            });
        }

        let profile = UserProfile::registered(request.name(), request.email().clone())
            .map_err(|err| AuthError::Identity(IdentityStoreError::backend(err.to_string())))?;

        let identity = StoredIdentity::new(profile.clone(), request.password());
        if let Err(err) = self.identity_store.create(identity).await {
            return Err(match err {
                IdentityStoreError::DuplicateEmail { email } => {
                    self.notifier.error(EMAIL_TAKEN_MESSAGE);
                    AuthError::EmailAlreadyRegistered { email }
                }
                other => self.identity_failure(other),
            });
        }

        self.persist(&profile)?;
        self.current = Some(profile.clone());
        self.notifier.success(SIGN_UP_SUCCESS_MESSAGE);
        Ok(profile)
    }

    /// Signs out and clears the persisted slot.
    ///
    /// Always ends anonymous, whatever the prior state. A slot that fails to
    /// clear is logged and otherwise ignored; the in-memory session is gone
    /// either way.
    pub fn sign_out(&mut self) {
        self.current = None;
        if let Err(err) = self.session_store.clear() {
            warn!(error = %err, "failed to clear the persisted session");
        }
        self.notifier.success(SIGNED_OUT_MESSAGE);
    }

    /// Merges a partial update into the signed-in profile and re-persists.
    ///
    /// A silent no-op when anonymous, so presentation code may call it
    /// speculatively without guarding.
    pub fn update_profile(&mut self, update: ProfileUpdate) {
        let Some(current) = self.current.as_mut() else {
            debug!("profile update ignored without an active session");
            return;
        };

        current.apply(update);
        if let Err(err) = self.session_store.save(current) {
            warn!(error = %err, "failed to re-persist the updated profile");
        }
    }

    fn persist(&self, profile: &UserProfile) -> Result<(), AuthError> {
        self.session_store.save(profile).map_err(|err| {
            self.notifier.error(TRANSIENT_FAILURE_MESSAGE);
            AuthError::Persistence(err)
        })
    }

    fn identity_failure(&self, error: IdentityStoreError) -> AuthError {
        self.notifier.error(TRANSIENT_FAILURE_MESSAGE);
        AuthError::Identity(error)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
