//! # Identity Newtypes
//!
//! Identifier newtypes used as operation parameters throughout the client.
//! Each identifier is a distinct type: you cannot pass a [`ProfileId`]
//! where a [`LcnUri`] is expected.
//!
//! ## Validation
//!
//! Every type validates its format at construction time and again on
//! deserialization (`#[serde(try_from = "String")]`). All of them serialize
//! as the bare string.
//!
//! - DID: W3C Decentralized Identifier (`did:method:identifier`)
//! - Profile ID: 3-40 characters, the bound the network enforces
//! - URI: LearnCard resource URI (`lc:network:<host>/trpc:boost:<id>`)
//! - Signing authority name: at most 15 of `[a-z0-9-]`

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! string_newtype_impls {
    ($ty:ident) => {
        impl $ty {
            /// Access the underlying string value.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }
    };
}

/// W3C Decentralized Identifier (DID).
///
/// Format: `did:<method>:<method-specific-id>`
/// where method is lowercase alphanumeric and method-specific-id is non-empty.
///
/// Reference: <https://www.w3.org/TR/did-core/#did-syntax>
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Did(String);

impl Did {
    /// Create a DID from a string, validating format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDid`] if the string does not
    /// match the `did:method:identifier` format.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        match split_did(&s) {
            Some((method, identifier))
                if !method.is_empty()
                    && method
                        .chars()
                        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
                    && !identifier.is_empty() =>
            {
                Ok(Self(s))
            }
            _ => Err(ValidationError::InvalidDid(s)),
        }
    }

    /// Return the DID method (the part between the first and second colons).
    pub fn method(&self) -> &str {
        split_did(&self.0).map(|(m, _)| m).unwrap_or_default()
    }

    /// Return the method-specific identifier (everything after `did:method:`).
    pub fn method_specific_id(&self) -> &str {
        split_did(&self.0).map(|(_, id)| id).unwrap_or_default()
    }
}

fn split_did(s: &str) -> Option<(&str, &str)> {
    s.strip_prefix("did:")?.split_once(':')
}

string_newtype_impls!(Did);

/// Unique, URL-safe handle of a LearnCard Network profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProfileId(String);

impl ProfileId {
    /// Minimum accepted length in characters.
    pub const MIN_LEN: usize = 3;
    /// Maximum accepted length in characters.
    pub const MAX_LEN: usize = 40;

    /// Create a profile ID, validating length and the absence of whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidProfileId`] on violation.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        let len = s.chars().count();
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&len) || s.chars().any(char::is_whitespace)
        {
            return Err(ValidationError::InvalidProfileId(s));
        }
        Ok(Self(s))
    }
}

string_newtype_impls!(ProfileId);

/// LearnCard resource URI.
///
/// Boosts, credentials, presentations, contracts and consent terms are all
/// addressed by URIs of the form `lc:<namespace>:<location>:<kind>:<id>`,
/// e.g. `lc:network:network.learncard.com/trpc:boost:3f2a`. The location
/// segment may itself contain a percent-encoded port.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LcnUri(String);

impl LcnUri {
    /// Create a URI, validating the `lc:` scheme and segment count.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidUri`] if the scheme is wrong or any
    /// of the namespace, location, kind or id segments is missing.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        let valid = s
            .strip_prefix("lc:")
            .map(|rest| {
                let segments: Vec<&str> = rest.split(':').collect();
                segments.len() >= 4 && segments.iter().all(|seg| !seg.is_empty())
            })
            .unwrap_or(false);
        if !valid {
            return Err(ValidationError::InvalidUri(s));
        }
        Ok(Self(s))
    }

    /// Namespace segment (`network`, `cloud`, ...).
    pub fn namespace(&self) -> &str {
        self.0.split(':').nth(1).unwrap_or_default()
    }

    /// Resource kind segment (`boost`, `credential`, `contract`, ...).
    pub fn kind(&self) -> &str {
        self.0.rsplit(':').nth(1).unwrap_or_default()
    }

    /// Trailing resource identifier.
    pub fn id(&self) -> &str {
        self.0.rsplit(':').next().unwrap_or_default()
    }
}

string_newtype_impls!(LcnUri);

/// Name under which a signing authority is registered for a profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SigningAuthorityName(String);

impl SigningAuthorityName {
    /// Maximum accepted length.
    pub const MAX_LEN: usize = 15;

    /// Create a signing authority name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSigningAuthorityName`] if the name
    /// is empty, longer than 15 characters, or uses characters outside
    /// lowercase letters, digits and hyphens.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.is_empty()
            || s.len() > Self::MAX_LEN
            || !s
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(ValidationError::InvalidSigningAuthorityName(s));
        }
        Ok(Self(s))
    }
}

string_newtype_impls!(SigningAuthorityName);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // -- DID --

    #[test]
    fn did_valid_examples() {
        assert!(Did::new("did:web:network.learncard.com:users:alice").is_ok());
        assert!(Did::new("did:key:z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK").is_ok());
        assert!(Did::new("did:pkh:eip155:1:0xb9c5714089478a327f09197987f16f9e5d936e8a").is_ok());
    }

    #[test]
    fn did_method_extraction() {
        let did = Did::new("did:web:network.learncard.com:users:alice").unwrap();
        assert_eq!(did.method(), "web");
        assert_eq!(did.method_specific_id(), "network.learncard.com:users:alice");
    }

    #[test]
    fn did_rejects_invalid() {
        assert!(Did::new("").is_err());
        assert!(Did::new("notadid").is_err());
        assert!(Did::new("did:").is_err());
        assert!(Did::new("did::something").is_err());
        assert!(Did::new("did:Web:id").is_err());
        assert!(Did::new("did:method:").is_err());
    }

    #[test]
    fn did_deserialization_validates() {
        let ok: Result<Did, _> = serde_json::from_str("\"did:key:z6Mk\"");
        assert!(ok.is_ok());
        let bad: Result<Did, _> = serde_json::from_str("\"key:z6Mk\"");
        assert!(bad.is_err());
    }

    #[test]
    fn did_serializes_as_bare_string() {
        let did = Did::new("did:key:z6Mk").unwrap();
        assert_eq!(serde_json::to_string(&did).unwrap(), "\"did:key:z6Mk\"");
    }

    // -- ProfileId --

    #[test]
    fn profile_id_length_bounds() {
        assert!(ProfileId::new("ab").is_err());
        assert!(ProfileId::new("abc").is_ok());
        assert!(ProfileId::new("a".repeat(40)).is_ok());
        assert!(ProfileId::new("a".repeat(41)).is_err());
        assert!(ProfileId::new("has space").is_err());
    }

    // -- LcnUri --

    #[test]
    fn uri_segments() {
        let uri = LcnUri::new("lc:network:network.learncard.com/trpc:boost:3f2a-91").unwrap();
        assert_eq!(uri.namespace(), "network");
        assert_eq!(uri.kind(), "boost");
        assert_eq!(uri.id(), "3f2a-91");
    }

    #[test]
    fn uri_with_encoded_port() {
        let uri = LcnUri::new("lc:network:localhost%3A3000/trpc:credential:abc").unwrap();
        assert_eq!(uri.kind(), "credential");
    }

    #[test]
    fn uri_rejects_invalid() {
        assert!(LcnUri::new("").is_err());
        assert!(LcnUri::new("https://example.com").is_err());
        assert!(LcnUri::new("lc:network:boost:").is_err());
        assert!(LcnUri::new("lc:network:boost").is_err());
    }

    // -- SigningAuthorityName --

    #[test]
    fn signing_authority_name_rules() {
        assert!(SigningAuthorityName::new("lca-sa").is_ok());
        assert!(SigningAuthorityName::new("a".repeat(15)).is_ok());
        assert!(SigningAuthorityName::new("a".repeat(16)).is_err());
        assert!(SigningAuthorityName::new("Upper").is_err());
        assert!(SigningAuthorityName::new("under_score").is_err());
        assert!(SigningAuthorityName::new("").is_err());
    }

    proptest! {
        #[test]
        fn did_accepts_generated_well_formed(
            method in "[a-z0-9]{1,10}",
            id in "[A-Za-z0-9.:_-]{1,40}",
        ) {
            let raw = format!("did:{method}:{id}");
            let did = Did::new(raw.clone()).unwrap();
            prop_assert_eq!(did.method(), method.as_str());
            prop_assert_eq!(did.as_str(), raw.as_str());
        }

        #[test]
        fn signing_authority_name_never_accepts_uppercase(s in "[A-Z]{1,15}") {
            prop_assert!(SigningAuthorityName::new(s).is_err());
        }
    }
}
