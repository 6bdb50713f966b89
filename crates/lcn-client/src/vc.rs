//! # Verifiable Credential data model
//!
//! W3C VC/VP envelopes and the JOSE JWE envelope used for encrypted
//! credentials, shaped the way the network API exchanges them.
//!
//! The envelopes are open: `credentialSubject`, issuer objects, proofs and
//! JWE headers all keep undeclared keys in their `additional_properties`
//! map, so a credential passes through this client byte-for-byte intact
//! (modulo key order).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::AdditionalProperties;

/// A value the data model allows either singly or as an array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// First element, if any.
    pub fn first(&self) -> Option<&T> {
        match self {
            Self::One(item) => Some(item),
            Self::Many(items) => items.first(),
        }
    }

    /// Iterate over the contained values.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Self::One(item) => std::slice::from_ref(item).iter(),
            Self::Many(items) => items.iter(),
        }
    }
}

/// Credential issuer: a bare DID/URL or an object with an `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Issuer {
    Id(String),
    Object(IssuerObject),
}

impl Issuer {
    /// The issuer's identifier regardless of representation.
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Object(obj) => &obj.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuerObject {
    pub id: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub issuer_type: Option<OneOrMany<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Value>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Subject of a credential. Everything but `id` is free-form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CredentialSubject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// A credential before signing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsignedCredential {
    /// JSON-LD contexts; entries are URLs or inline context objects.
    #[serde(rename = "@context")]
    pub context: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub credential_type: OneOrMany<String>,
    pub issuer: Issuer,
    pub credential_subject: OneOrMany<CredentialSubject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuance_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_status: Option<Value>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl UnsignedCredential {
    /// True if `credential_type` lists `t`.
    pub fn has_type(&self, t: &str) -> bool {
        self.credential_type.iter().any(|ty| ty == t)
    }
}

/// Linked-data or JWS proof attached to a credential or presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proof {
    #[serde(rename = "type")]
    pub proof_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_purpose: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jws: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// A signed credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiableCredential {
    #[serde(flatten)]
    pub credential: UnsignedCredential,
    pub proof: OneOrMany<Proof>,
}

/// A (possibly unsigned) presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiablePresentation {
    #[serde(rename = "@context")]
    pub context: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub presentation_type: OneOrMany<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verifiable_credential: Option<OneOrMany<VerifiableCredential>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof: Option<OneOrMany<Proof>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl VerifiablePresentation {
    /// Challenge bound into the first proof, if the presentation is signed.
    pub fn challenge(&self) -> Option<&str> {
        self.proof.as_ref()?.first()?.challenge.as_deref()
    }
}

/// Ephemeral public key carried in a JWE recipient header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphemeralKey {
    pub kty: String,
    pub crv: String,
    pub x: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Per-recipient unprotected header of a general-JSON JWE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JweRecipientHeader {
    pub alg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epk: Option<EphemeralKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apu: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// One recipient of a JWE. Keys follow RFC 7516 (`encrypted_key`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JweRecipient {
    pub header: JweRecipientHeader,
    pub encrypted_key: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// General-JSON serialized JWE envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Jwe {
    pub protected: String,
    pub iv: String,
    pub ciphertext: String,
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aad: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipients: Option<Vec<JweRecipient>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Jwe {
    /// Key IDs of every recipient that declared one.
    pub fn recipient_kids(&self) -> Vec<&str> {
        self.recipients
            .iter()
            .flatten()
            .filter_map(|r| r.header.kid.as_deref())
            .collect()
    }
}

/// Signed credential or an encrypted envelope around one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CredentialOrJwe {
    Credential(Box<VerifiableCredential>),
    Jwe(Jwe),
}

/// Anything a sender may transmit as a credential: signed, unsigned or
/// encrypted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CredentialPayload {
    Signed(Box<VerifiableCredential>),
    Unsigned(Box<UnsignedCredential>),
    Jwe(Jwe),
}

/// Presentation or an encrypted envelope around one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PresentationOrJwe {
    Presentation(Box<VerifiablePresentation>),
    Jwe(Jwe),
}

/// Item held by the storage endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredItem {
    Credential(Box<VerifiableCredential>),
    Presentation(Box<VerifiablePresentation>),
    Jwe(Jwe),
}

/// Outcome of a verification.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VerificationResult {
    #[serde(default)]
    pub checks: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl VerificationResult {
    /// No errors were reported.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The named check (e.g. `proof`, `expiration`) ran and passed.
    pub fn passed(&self, check: &str) -> bool {
        self.checks.iter().any(|c| c == check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_vc() -> Value {
        json!({
            "@context": [
                "https://www.w3.org/2018/credentials/v1",
                {"lc": "https://docs.learncard.com/definitions#"}
            ],
            "type": ["VerifiableCredential", "OpenBadgeCredential"],
            "issuer": {"id": "did:web:network.learncard.com:users:issuer", "name": "Issuer U"},
            "issuanceDate": "2024-03-01T10:00:00.000Z",
            "credentialSubject": {
                "id": "did:key:z6MkRecipient",
                "achievement": {"name": "Rust Basics", "criteria": {"narrative": "Pass"}}
            },
            "boostId": "lc:network:network.learncard.com/trpc:boost:1",
            "proof": {
                "type": "Ed25519Signature2020",
                "created": "2024-03-01T10:00:01Z",
                "proofPurpose": "assertionMethod",
                "verificationMethod": "did:web:network.learncard.com:users:issuer#owner",
                "proofValue": "z58DAdFfa9S"
            }
        })
    }

    #[test]
    fn signed_credential_round_trips() {
        let raw = sample_vc();
        let vc: VerifiableCredential = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(vc.credential.issuer.id(), "did:web:network.learncard.com:users:issuer");
        assert!(vc.credential.has_type("OpenBadgeCredential"));
        assert!(vc.credential.additional_properties.contains_key("boostId"));
        assert_eq!(serde_json::to_value(&vc).unwrap(), raw);
    }

    #[test]
    fn proof_is_not_captured_as_extra() {
        let vc: VerifiableCredential = serde_json::from_value(sample_vc()).unwrap();
        assert!(!vc.credential.additional_properties.contains_key("proof"));
        assert_eq!(vc.proof.first().unwrap().proof_type, "Ed25519Signature2020");
    }

    #[test]
    fn payload_distinguishes_signed_unsigned_and_jwe() {
        let signed: CredentialPayload = serde_json::from_value(sample_vc()).unwrap();
        assert!(matches!(signed, CredentialPayload::Signed(_)));

        let mut unsigned_raw = sample_vc();
        unsigned_raw.as_object_mut().unwrap().remove("proof");
        let unsigned: CredentialPayload = serde_json::from_value(unsigned_raw.clone()).unwrap();
        assert!(matches!(unsigned, CredentialPayload::Unsigned(_)));
        assert_eq!(serde_json::to_value(&unsigned).unwrap(), unsigned_raw);

        let jwe: CredentialPayload = serde_json::from_value(sample_jwe()).unwrap();
        assert!(matches!(jwe, CredentialPayload::Jwe(_)));
    }

    fn sample_jwe() -> Value {
        json!({
            "protected": "eyJlbmMiOiJYQzIwUCJ9",
            "iv": "i5AfZGeYB2C5DxVMXCqVRvjmgJMAWhVh",
            "ciphertext": "Yf1lX0lQ",
            "tag": "qtBzEOWv1u5HG5xY2W8ZaQ",
            "recipients": [{
                "header": {
                    "alg": "ECDH-ES+XC20PKW",
                    "iv": "MGtnDFB6K9XKLO4t",
                    "tag": "3ncS9_Q",
                    "epk": {"kty": "OKP", "crv": "X25519", "x": "sPzAP9tY"},
                    "kid": "did:key:z6Mk#z6LS"
                },
                "encrypted_key": "vD3Cjqg"
            }]
        })
    }

    #[test]
    fn jwe_round_trips_with_rfc_key_names() {
        let raw = sample_jwe();
        let jwe: Jwe = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(jwe.recipient_kids(), vec!["did:key:z6Mk#z6LS"]);
        assert_eq!(serde_json::to_value(&jwe).unwrap(), raw);
    }

    #[test]
    fn stored_item_variants() {
        let vp = json!({
            "@context": ["https://www.w3.org/2018/credentials/v1"],
            "type": "VerifiablePresentation",
            "holder": "did:key:z6MkHolder",
            "verifiableCredential": [sample_vc()],
            "proof": [{"type": "Ed25519Signature2018", "challenge": "abc", "jws": "e.."}]
        });
        let item: StoredItem = serde_json::from_value(vp.clone()).unwrap();
        match &item {
            StoredItem::Presentation(p) => assert_eq!(p.challenge(), Some("abc")),
            other => panic!("expected presentation, got {other:?}"),
        }
        assert_eq!(serde_json::to_value(&item).unwrap(), vp);

        let cred: StoredItem = serde_json::from_value(sample_vc()).unwrap();
        assert!(matches!(cred, StoredItem::Credential(_)));
        let jwe: StoredItem = serde_json::from_value(sample_jwe()).unwrap();
        assert!(matches!(jwe, StoredItem::Jwe(_)));
    }

    #[test]
    fn verification_result_helpers() {
        let result: VerificationResult = serde_json::from_value(json!({
            "checks": ["proof", "expiration"], "warnings": [], "errors": []
        }))
        .unwrap();
        assert!(result.is_valid());
        assert!(result.passed("proof"));
        assert!(!result.passed("status"));
    }
}
