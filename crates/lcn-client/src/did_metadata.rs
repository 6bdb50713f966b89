//! DID metadata: fragments the network merges into a profile's `did:web`
//! document (extra services, keys and verification relationships).
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/did-metadata/add` | Add fragment |
//! | GET    | `/did-metadata?id=` | Get fragment |
//! | GET    | `/did-metadata/mine` | List own fragments |
//! | POST   | `/did-metadata/update` | Update fragment |
//! | DELETE | `/did-metadata?id=` | Delete fragment |

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::LcnApiError;
use crate::http::Transport;
use crate::types::AdditionalProperties;

/// JSON Web Key embedded in a verification method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicKeyJwk {
    pub kty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidVerificationMethod {
    pub id: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub controller: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key_multibase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key_jwk: Option<PublicKeyJwk>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidService {
    pub id: String,
    #[serde(rename = "type")]
    pub type_: String,
    /// URL, map or set of URLs/maps.
    pub service_endpoint: Value,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Entry of a verification relationship: a method id or an embedded method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VerificationRelationship {
    Reference(String),
    Embedded(DidVerificationMethod),
}

/// Partial DID document. Every member is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidMetadata {
    #[serde(rename = "@context", default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub also_known_as: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<Vec<DidService>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_method: Option<Vec<DidVerificationMethod>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication: Option<Vec<VerificationRelationship>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assertion_method: Option<Vec<VerificationRelationship>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_agreement: Option<Vec<VerificationRelationship>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capability_invocation: Option<Vec<VerificationRelationship>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capability_delegation: Option<Vec<VerificationRelationship>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// A stored fragment with its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DidMetadataRecord {
    pub id: String,
    #[serde(flatten)]
    pub metadata: DidMetadata,
}

/// Client for the DID metadata routes.
#[derive(Debug, Clone)]
pub struct DidMetadataClient {
    transport: Transport,
}

impl DidMetadataClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub async fn add_did_metadata(&self, metadata: &DidMetadata) -> Result<bool, LcnApiError> {
        let endpoint = "POST /did-metadata/add";
        let url = self.transport.url(endpoint, &["did-metadata", "add"])?;
        self.transport
            .send_json(endpoint, || self.transport.http().post(url.clone()).json(metadata))
            .await
    }

    pub async fn get_did_metadata(&self, id: &str) -> Result<Option<DidMetadata>, LcnApiError> {
        let endpoint = "GET /did-metadata";
        let url = self
            .transport
            .url_with_query(endpoint, &["did-metadata"], &[("id", id.to_string())])?;
        self.transport
            .send_optional(endpoint, || self.transport.http().get(url.clone()))
            .await
    }

    pub async fn get_my_did_metadata(&self) -> Result<Vec<DidMetadataRecord>, LcnApiError> {
        let endpoint = "GET /did-metadata/mine";
        let url = self.transport.url(endpoint, &["did-metadata", "mine"])?;
        self.transport
            .send_json(endpoint, || self.transport.http().get(url.clone()))
            .await
    }

    /// Merge `updates` into the fragment `id`.
    pub async fn update_did_metadata(&self, id: &str, updates: &DidMetadata) -> Result<bool, LcnApiError> {
        let endpoint = "POST /did-metadata/update";
        let url = self.transport.url(endpoint, &["did-metadata", "update"])?;
        let body = json!({ "id": id, "updates": updates });
        self.transport
            .send_json(endpoint, || self.transport.http().post(url.clone()).json(&body))
            .await
    }

    pub async fn delete_did_metadata(&self, id: &str) -> Result<bool, LcnApiError> {
        let endpoint = "DELETE /did-metadata";
        let url = self
            .transport
            .url_with_query(endpoint, &["did-metadata"], &[("id", id.to_string())])?;
        self.transport
            .send_json(endpoint, || self.transport.http().delete(url.clone()))
            .await
    }
}
