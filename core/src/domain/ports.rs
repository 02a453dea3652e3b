//! Domain ports for collaborators the core cannot own.
//!
//! Ports describe how the session and review flows expect to reach identity
//! lookup, durable session storage, review storage, and the user-facing
//! notification surface. Each trait exposes strongly typed errors so
//! adapters map their failures into predictable variants instead of
//! returning `anyhow::Result`.

use async_trait::async_trait;
use thiserror::Error;
use zeroize::Zeroizing;

use super::catalogue::Review;
use super::user::{EmailAddress, UserProfile};

/// An identity known to the sign-in flow: a profile plus the secret the
/// supplied password is compared against.
#[derive(Debug, Clone)]
pub struct StoredIdentity {
    profile: UserProfile,
    secret: Zeroizing<String>,
}

impl StoredIdentity {
    /// Couples a profile with its expected secret.
    pub fn new(profile: UserProfile, secret: impl Into<String>) -> Self {
        Self {
            profile,
            secret: Zeroizing::new(secret.into()),
        }
    }

    /// The identity's profile.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// The secret the sign-in flow compares against.
    pub fn secret(&self) -> &str {
        self.secret.as_str()
    }

    /// Consumes the identity, returning its profile.
    pub fn into_profile(self) -> UserProfile {
        self.profile
    }
}

/// Errors surfaced by identity store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityStoreError {
    /// The backing store is unavailable or failed mid-operation.
    #[error("identity store failure: {message}")]
    Backend { message: String },
    /// An identity with this email already exists.
    #[error("email '{email}' is already registered")]
    DuplicateEmail { email: String },
}

impl IdentityStoreError {
    /// Helper for backend-level adapter failures.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Helper for create collisions.
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
        }
    }
}

/// Port for identity lookup and creation.
///
/// The session manager only ever looks identities up by exact email and
/// creates new ones; swapping the demo store for a real identity service
/// changes nothing in the state machine.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Finds an identity by exact email match.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<StoredIdentity>, IdentityStoreError>;

    /// Adds a new identity.
    ///
    /// Returns [`IdentityStoreError::DuplicateEmail`] if the email is
    /// already taken, even if the caller checked first.
    async fn create(&self, identity: StoredIdentity) -> Result<(), IdentityStoreError>;
}

/// Errors surfaced by session slot adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionStoreError {
    /// Reading or writing the slot failed.
    #[error("session slot access failed: {message}")]
    Io { message: String },
    /// The slot holds data that cannot be decoded.
    #[error("session slot holds unreadable data: {message}")]
    Corrupt { message: String },
}

impl SessionStoreError {
    /// Helper for I/O failures.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Helper for decode failures.
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::Corrupt {
            message: message.into(),
        }
    }
}

/// Port for the single persisted session slot.
///
/// The slot either holds one serialised profile or nothing; absence means
/// "no session". All access happens from one logical thread, so adapters
/// need no coordination beyond their own interior mutability.
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore: Send + Sync {
    /// Reads the slot. `Ok(None)` means no session is persisted.
    fn load(&self) -> Result<Option<UserProfile>, SessionStoreError>;

    /// Writes `profile` to the slot, replacing any previous value.
    fn save(&self, profile: &UserProfile) -> Result<(), SessionStoreError>;

    /// Empties the slot. Clearing an already empty slot succeeds.
    fn clear(&self) -> Result<(), SessionStoreError>;
}

/// Port for the user-facing notification surface.
///
/// The presentation layer renders these as transient toasts; the core only
/// needs the three severities.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// A completed action the visitor asked for.
    fn success(&self, message: &str);
    /// A failed action the visitor should retry or correct.
    fn error(&self, message: &str);
    /// Neutral information.
    fn info(&self, message: &str);
}

/// Errors surfaced by review store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewStoreError {
    /// The backing store is unavailable or failed mid-operation.
    #[error("review store failure: {message}")]
    Backend { message: String },
}

impl ReviewStoreError {
    /// Helper for backend-level adapter failures.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

/// Port for submitted-review storage, keyed by destination id.
#[cfg_attr(test, mockall::automock)]
pub trait ReviewStore: Send + Sync {
    /// Appends a review to a destination's log.
    fn append(&self, destination_id: &str, review: Review) -> Result<(), ReviewStoreError>;

    /// Returns the submitted reviews for a destination, oldest first.
    fn for_destination(&self, destination_id: &str) -> Result<Vec<Review>, ReviewStoreError>;
}
