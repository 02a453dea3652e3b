//! User identity data model.
//!
//! The types here describe the signed-in visitor: a stable string id, a
//! display name, an email address, a role, and an optional avatar reference.
//! `UserProfile` doubles as the persisted-slot payload, so its serde layout
//! is a wire contract.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// Validation errors returned by user type constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyId,
    EmptyName,
    InvalidEmail { value: String },
    UnknownRole { value: String },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::EmptyName => write!(f, "display name must not be empty"),
            Self::InvalidEmail { value } => {
                write!(f, "'{value}' is not a valid email address")
            }
            Self::UnknownRole { value } => {
                write!(f, "role must be 'user' or 'admin', got '{value}'")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Access role attached to a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular signed-in visitor.
    #[default]
    User,
    /// Content dashboard administrator.
    Admin,
}

impl Role {
    /// Stable lowercase key used on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Whether this role grants access to the admin dashboard.
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UserValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            other => Err(UserValidationError::UnknownRole {
                value: other.to_owned(),
            }),
        }
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Deliberately conservative: one '@', no whitespace on either side.
        let pattern = r"^[^@\s]+@[^@\s]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Email address used for exact-match identity lookups.
///
/// ## Invariants
/// - Trimmed of surrounding whitespace.
/// - Contains exactly one `@` with non-empty parts on both sides.
///
/// Comparisons are exact; no case folding is applied, matching the demo
/// identity set which stores addresses in their canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(value: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = value.as_ref().trim();
        if !email_regex().is_match(trimmed) {
            return Err(UserValidationError::InvalidEmail {
                value: value.as_ref().to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the address as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// The signed-in visitor's profile.
///
/// This is the exact payload written to the persisted session slot:
/// `{id, name, email, role, avatar?}` with lowercase role values and the
/// avatar omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct UserProfile {
    id: String,
    name: String,
    email: EmailAddress,
    role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
}

impl UserProfile {
    /// Validate and construct a profile.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: EmailAddress,
        role: Role,
        avatar: Option<String>,
    ) -> Result<Self, UserValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        let name = name.into();
        let name = name.trim().to_owned();
        if name.is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        Ok(Self {
            id,
            name,
            email,
            role,
            avatar,
        })
    }

    /// Construct the profile for a freshly registered visitor.
    ///
    /// The id is a new UUID, the role defaults to [`Role::User`], and the
    /// avatar is a generated placeholder reference derived from the name.
    pub fn registered(
        name: impl Into<String>,
        email: EmailAddress,
    ) -> Result<Self, UserValidationError> {
        let name = name.into();
        let avatar = generated_avatar(&name);
        Self::new(Uuid::new_v4().to_string(), name, email, Role::User, avatar)
    }

    /// Stable identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email address used for sign-in.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Assigned role.
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Avatar reference, when one is set.
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    /// Merge a partial update into this profile.
    ///
    /// Only the supplied fields change; the role is deliberately not part of
    /// the update surface.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            let name = name.trim().to_owned();
            if !name.is_empty() {
                self.name = name;
            }
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(avatar) = update.avatar {
            self.avatar = Some(avatar);
        }
    }
}

/// Partial profile change applied by the profile-update flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    /// Replacement display name; blank values are ignored.
    pub name: Option<String>,
    /// Replacement email address.
    pub email: Option<EmailAddress>,
    /// Replacement avatar reference.
    pub avatar: Option<String>,
}

/// Builds the placeholder avatar reference for a generated profile.
fn generated_avatar(name: &str) -> Option<String> {
    Url::parse_with_params(
        "https://ui-avatars.com/api/",
        &[("name", name), ("background", "EAE4D9"), ("color", "1C1C1C")],
    )
    .map(String::from)
    .ok()
}
