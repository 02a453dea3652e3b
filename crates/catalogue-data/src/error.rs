//! Error types for the catalogue-data crate.
//!
//! This module defines semantic error enums for registry parsing, validation,
//! and export, following the project's error handling conventions with
//! `thiserror`.

use std::path::PathBuf;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when parsing, validating, or exporting a content
/// registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry file could not be read.
    #[error("failed to read registry file at '{path}': {message}")]
    IoError {
        /// Path to the registry file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The registry JSON is malformed or missing required fields.
    #[error("invalid registry JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The registry version is not supported.
    #[error("unsupported registry version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the registry.
        actual: u32,
    },

    /// Two records in the same collection share an identifier.
    #[error("duplicate id '{id}' in {collection}")]
    DuplicateId {
        /// Collection name ("destinations", "blogPosts", ...).
        collection: &'static str,
        /// The identifier that appears more than once.
        id: String,
    },

    /// A rating value is outside its permitted range.
    #[error("invalid rating for {collection} record '{id}': {detail}")]
    InvalidRating {
        /// Collection name the record belongs to.
        collection: &'static str,
        /// Identifier of the offending record.
        id: String,
        /// Description of the violated range.
        detail: String,
    },

    /// A record identifier is empty or padded with whitespace.
    #[error("invalid id in {collection}: '{id}'")]
    InvalidId {
        /// Collection name the record belongs to.
        collection: &'static str,
        /// The rejected identifier.
        id: String,
    },

    /// Writing an exported registry file failed.
    #[error("failed to write registry file at '{path}': {message}")]
    WriteError {
        /// Path to the file that could not be written.
        path: Utf8PathBuf,
        /// Description of the write failure.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_formats_correctly() {
        let err = RegistryError::IoError {
            path: PathBuf::from("/tmp/content.json"),
            message: "file not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read registry file at '/tmp/content.json': file not found"
        );
    }

    #[test]
    fn parse_error_formats_correctly() {
        let err = RegistryError::ParseError {
            message: "unexpected token".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid registry JSON: unexpected token");
    }

    #[test]
    fn version_error_formats_correctly() {
        let err = RegistryError::UnsupportedVersion {
            expected: 1,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "unsupported registry version: expected 1, found 3"
        );
    }

    #[test]
    fn duplicate_id_formats_correctly() {
        let err = RegistryError::DuplicateId {
            collection: "destinations",
            id: "phewa-lake".to_owned(),
        };
        assert_eq!(err.to_string(), "duplicate id 'phewa-lake' in destinations");
    }

    #[test]
    fn invalid_rating_formats_correctly() {
        let err = RegistryError::InvalidRating {
            collection: "tourGuides",
            id: "pemba-sherpa".to_owned(),
            detail: "rating 5.4 is outside 0.0..=5.0".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid rating for tourGuides record 'pemba-sherpa': rating 5.4 is outside 0.0..=5.0"
        );
    }

    #[test]
    fn write_error_formats_correctly() {
        let err = RegistryError::WriteError {
            path: Utf8PathBuf::from("content.json"),
            message: "permission denied".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to write registry file at 'content.json': permission denied"
        );
    }
}
