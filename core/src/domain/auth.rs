//! Authentication payload primitives.
//!
//! Keep inbound form parsing outside the session manager by exposing
//! constructors that validate string inputs before anything talks to the
//! identity store.

use std::fmt;

use zeroize::Zeroizing;

use super::user::{EmailAddress, UserValidationError};

/// Validation errors returned when sign-in or sign-up payloads are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthPayloadError {
    /// Email was missing or malformed.
    InvalidEmail { value: String },
    /// Password was blank.
    EmptyPassword,
    /// Display name was missing or blank once trimmed.
    EmptyName,
}

impl fmt::Display for AuthPayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail { value } => {
                write!(f, "'{value}' is not a valid email address")
            }
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::EmptyName => write!(f, "name must not be empty"),
        }
    }
}

impl std::error::Error for AuthPayloadError {}

fn validated_email(email: &str) -> Result<EmailAddress, AuthPayloadError> {
    EmailAddress::new(email).map_err(|err| match err {
        UserValidationError::InvalidEmail { value } => AuthPayloadError::InvalidEmail { value },
        _ => AuthPayloadError::InvalidEmail {
            value: email.to_owned(),
        },
    })
}

/// Validated sign-in credentials.
///
/// ## Invariants
/// - `email` is trimmed and shaped like an address.
/// - `password` is non-empty but otherwise kept exactly as supplied, so
///   credential comparisons never surprise the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl Credentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, AuthPayloadError> {
        let email = validated_email(email)?;
        if password.is_empty() {
            return Err(AuthPayloadError::EmptyPassword);
        }
        Ok(Self {
            email,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email address used for the identity lookup.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Password exactly as the caller supplied it.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated sign-up request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    name: String,
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl SignUpRequest {
    /// Construct a sign-up request from raw form inputs.
    pub fn try_from_parts(
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, AuthPayloadError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AuthPayloadError::EmptyName);
        }
        let email = validated_email(email)?;
        if password.is_empty() {
            return Err(AuthPayloadError::EmptyPassword);
        }
        Ok(Self {
            name: name.to_owned(),
            email,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Requested display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Requested sign-in email.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Chosen password.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
