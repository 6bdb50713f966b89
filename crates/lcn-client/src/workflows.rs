//! VC-API exchange participation.
//!
//! `POST /workflows/{localWorkflowId}/exchanges/{localExchangeId}`
//!
//! An empty body initiates an exchange: the service answers with a
//! [`VerifiablePresentationRequest`] carrying a challenge. Posting a
//! presentation signed over that challenge completes it, and the service
//! answers with a presentation of the issued credentials.
//!
//! The local exchange id of a claim exchange is an [`ExchangeId`]: the
//! base64url (unpadded) encoding of `{"boostUri", "challenge"}`.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::LcnApiError;
use crate::http::Transport;
use crate::types::AdditionalProperties;
use crate::vc::VerifiablePresentation;

/// Body of the exchange route. `None` initiates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipateInExchangeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verifiable_presentation: Option<VerifiablePresentation>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CredentialQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// One query of a presentation request, e.g. `DIDAuthentication` or
/// `QueryByExample`. Query-specific members such as `acceptedMethods`
/// land in `additional_properties`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationQuery {
    #[serde(rename = "type")]
    pub query_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_query: Option<Vec<CredentialQuery>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiablePresentationRequest {
    pub query: Vec<PresentationQuery>,
    pub challenge: String,
    pub domain: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipateInExchangeResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verifiable_presentation: Option<VerifiablePresentation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verifiable_presentation_request: Option<VerifiablePresentationRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Errors decoding an [`ExchangeId`].
#[derive(Debug, thiserror::Error)]
pub enum ExchangeIdError {
    #[error("exchange id is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("exchange id does not contain exchange info: {0}")]
    Json(#[from] serde_json::Error),
}

/// Boost and challenge identifying a claim exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeId {
    pub boost_uri: String,
    pub challenge: String,
}

impl ExchangeId {
    /// New exchange for `boost_uri` with a random UUIDv4 challenge.
    pub fn new(boost_uri: impl Into<String>) -> Self {
        Self {
            boost_uri: boost_uri.into(),
            challenge: uuid::Uuid::new_v4().to_string(),
        }
    }

    pub fn encode(&self) -> String {
        // Serializing two strings cannot fail.
        let json = serde_json::to_vec(self).unwrap_or_default();
        URL_SAFE_NO_PAD.encode(json)
    }

    pub fn decode(encoded: &str) -> Result<Self, ExchangeIdError> {
        let bytes = URL_SAFE_NO_PAD.decode(encoded.trim_end_matches('='))?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl std::fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}

impl std::str::FromStr for ExchangeId {
    type Err = ExchangeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

/// Client for the workflow routes.
#[derive(Debug, Clone)]
pub struct WorkflowClient {
    transport: Transport,
}

impl WorkflowClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Initiate (`presentation = None`) or complete an exchange.
    pub async fn participate_in_exchange(
        &self,
        local_workflow_id: &str,
        local_exchange_id: &str,
        presentation: Option<&VerifiablePresentation>,
    ) -> Result<ParticipateInExchangeResponse, LcnApiError> {
        let endpoint = "POST /workflows/{localWorkflowId}/exchanges/{localExchangeId}";
        let url = self.transport.url(
            endpoint,
            &["workflows", local_workflow_id, "exchanges", local_exchange_id],
        )?;
        let body = ParticipateInExchangeRequest {
            verifiable_presentation: presentation.cloned(),
        };
        tracing::debug!(
            workflow = local_workflow_id,
            initiation = presentation.is_none(),
            "participating in exchange"
        );
        self.transport
            .send_json(endpoint, || self.transport.http().post(url.clone()).json(&body))
            .await
    }
}
