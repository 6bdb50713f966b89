//! # Error Types
//!
//! Structured errors for identifier validation and wire (de)serialization,
//! built with `thiserror`. Each variant carries the offending input so a
//! caller can report it without guesswork.

use thiserror::Error;

/// Validation errors for identifier newtypes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// DID does not conform to W3C DID syntax (did:method:identifier).
    #[error("invalid DID format: \"{0}\" (expected did:<method>:<identifier>)")]
    InvalidDid(String),

    /// Profile ID is outside the allowed length or contains whitespace.
    #[error("invalid profile ID: \"{0}\" (expected 3-40 characters without whitespace)")]
    InvalidProfileId(String),

    /// Resource URI is not an `lc:` URI with a kind and an identifier.
    #[error("invalid LearnCard URI: \"{0}\" (expected lc:<namespace>:<location>:<kind>:<id>)")]
    InvalidUri(String),

    /// Signing authority name breaks the registration rules.
    #[error("invalid signing authority name: \"{0}\" (expected at most 15 of [a-z0-9-])")]
    InvalidSigningAuthorityName(String),
}

/// Errors while converting a model to or from JSON.
#[derive(Error, Debug)]
pub enum WireError {
    /// The input was not valid JSON or did not match the model's shape.
    #[error("failed to decode {model}: {source}")]
    Decode {
        /// Rust type name of the target model.
        model: &'static str,
        /// Underlying serde_json error.
        source: serde_json::Error,
    },

    /// The model could not be encoded.
    #[error("failed to encode {model}: {source}")]
    Encode {
        /// Rust type name of the source model.
        model: &'static str,
        /// Underlying serde_json error.
        source: serde_json::Error,
    },
}
