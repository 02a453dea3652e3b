//! Environment-driven core configuration.
//!
//! This module centralises the runtime toggles the core understands so they
//! are validated consistently and can be tested in isolation with a mock
//! environment.

use std::path::PathBuf;
use std::time::Duration;

use mockable::Env;

const SESSION_FILE_ENV: &str = "WANDERNEPAL_SESSION_FILE";
const AUTH_LATENCY_ENV: &str = "WANDERNEPAL_AUTH_LATENCY_MS";
const LATENCY_EXPECTED: &str = "a whole number of milliseconds";

/// Default file name for the persisted session slot.
pub const DEFAULT_SESSION_FILE: &str = "wandernepal_user.json";

/// Default simulated latency for sign-in and sign-up, modelling the network
/// round trip the demo flow stands in for.
pub const DEFAULT_AUTH_LATENCY: Duration = Duration::from_millis(800);

/// Errors raised while validating core configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Core settings derived from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Path of the persisted session slot.
    pub session_file: PathBuf,
    /// Simulated latency applied to sign-in and sign-up.
    pub auth_latency: Duration,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            auth_latency: DEFAULT_AUTH_LATENCY,
        }
    }
}

impl CoreConfig {
    /// Build core settings from environment variables.
    ///
    /// Absent variables fall back to the defaults; present but malformed
    /// values are rejected rather than silently ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use mockable::MockEnv;
    /// use wandernepal_core::config::CoreConfig;
    ///
    /// let mut env = MockEnv::new();
    /// env.expect_string().returning(|name| match name {
    ///     "WANDERNEPAL_AUTH_LATENCY_MS" => Some("0".to_string()),
    ///     _ => None,
    /// });
    ///
    /// let config = CoreConfig::from_env(&env).expect("valid config");
    /// assert!(config.auth_latency.is_zero());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] when a variable holds a value that
    /// cannot be parsed.
    pub fn from_env(env: &dyn Env) -> Result<Self, ConfigError> {
        let session_file = env
            .string(SESSION_FILE_ENV)
            .map_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE), PathBuf::from);

        let auth_latency = match env.string(AUTH_LATENCY_ENV) {
            None => DEFAULT_AUTH_LATENCY,
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidEnv {
                    name: AUTH_LATENCY_ENV,
                    value: raw,
                    expected: LATENCY_EXPECTED,
                })?,
        };

        Ok(Self {
            session_file,
            auth_latency,
        })
    }
}
