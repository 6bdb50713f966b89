//! Typed client for the LearnCard Network credential routes.
//!
//! ## API Paths
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/credential/send/{profileId}` | Send credential |
//! | POST   | `/credential/accept` | Accept credential |
//! | GET    | `/credentials/received` | Received credentials |
//! | GET    | `/credentials/sent` | Sent credentials |
//! | GET    | `/credentials/incoming` | Pending incoming credentials |
//! | DELETE | `/credential?uri=` | Delete credential |
//! | POST   | `/credential/issue` | Issue via signing authority |
//! | POST   | `/credential/verify` | Verify credential |
//!
//! List routes take a page size in `1..100` (default 25). Out-of-range
//! values are clamped before the request is sent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LcnApiError;
use crate::http::Transport;
use crate::types::{list_limit, AdditionalProperties, LcnUri, ProfileId};
use crate::vc::{
    CredentialOrJwe, CredentialPayload, UnsignedCredential, VerifiableCredential,
    VerificationResult,
};

/// Delivery record of a credential or presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentCredentialInfo {
    pub uri: String,
    /// Recipient profile id.
    pub to: String,
    /// Sender profile id.
    pub from: String,
    /// ISO-8601 timestamp.
    pub sent: String,
    /// Set once the recipient accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AdditionalProperties>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl SentCredentialInfo {
    pub fn sent_at(&self) -> Result<DateTime<Utc>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(&self.sent).map(|dt| dt.with_timezone(&Utc))
    }

    /// `None` while the item is still pending.
    pub fn received_at(&self) -> Option<Result<DateTime<Utc>, chrono::ParseError>> {
        self.received
            .as_deref()
            .map(|raw| DateTime::parse_from_rfc3339(raw).map(|dt| dt.with_timezone(&Utc)))
    }

    pub fn is_accepted(&self) -> bool {
        self.received.is_some()
    }
}

/// Body of `POST /credential/send/{profileId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendCredentialRequest {
    pub credential: CredentialPayload,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AdditionalProperties>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_notification: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AdditionalProperties>,
}

/// Body of the accept routes for credentials and presentations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcceptCredentialRequest {
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<AcceptOptions>,
}

impl AcceptCredentialRequest {
    pub fn new(uri: &LcnUri) -> Self {
        Self {
            uri: uri.to_string(),
            options: None,
        }
    }
}

/// Registered signing authority to issue with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningAuthorityRef {
    pub endpoint: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IssueOptions {
    /// Return the credential wrapped in a JWE.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypt: Option<bool>,
}

/// Body of `POST /credential/issue`.
///
/// Without `signing_authority` the profile's primary one is used; the
/// service overwrites `issuer` with the authority's DID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCredentialRequest {
    pub credential: UnsignedCredential,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signing_authority: Option<SigningAuthorityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<IssueOptions>,
}

/// Body of `POST /credential/verify`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyCredentialRequest {
    pub credential: VerifiableCredential,
}

/// Which side of a delivery a list filter applies to.
pub(crate) enum Counterparty<'a> {
    From(Option<&'a str>),
    To(Option<&'a str>),
}

/// GET one of the `SentCredentialInfo` list routes.
pub(crate) async fn list_deliveries(
    transport: &Transport,
    endpoint: &str,
    segments: &[&str],
    limit: Option<u32>,
    counterparty: Counterparty<'_>,
) -> Result<Vec<SentCredentialInfo>, LcnApiError> {
    let mut query = vec![("limit", list_limit(limit).to_string())];
    match counterparty {
        Counterparty::From(Some(from)) => query.push(("from", from.to_string())),
        Counterparty::To(Some(to)) => query.push(("to", to.to_string())),
        Counterparty::From(None) | Counterparty::To(None) => {}
    }
    let url = transport.url_with_query(endpoint, segments, &query)?;
    transport
        .send_json(endpoint, || transport.http().get(url.clone()))
        .await
}

/// Client for the credential routes.
#[derive(Debug, Clone)]
pub struct CredentialClient {
    transport: Transport,
}

impl CredentialClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Send a signed, unsigned or encrypted credential. Returns its URI.
    pub async fn send_credential(
        &self,
        profile_id: &ProfileId,
        request: &SendCredentialRequest,
    ) -> Result<String, LcnApiError> {
        let endpoint = "POST /credential/send/{profileId}";
        let url = self
            .transport
            .url(endpoint, &["credential", "send", profile_id.as_str()])?;
        self.transport
            .send_json(endpoint, || self.transport.http().post(url.clone()).json(request))
            .await
    }

    pub async fn accept_credential(&self, request: &AcceptCredentialRequest) -> Result<bool, LcnApiError> {
        let endpoint = "POST /credential/accept";
        let url = self.transport.url(endpoint, &["credential", "accept"])?;
        self.transport
            .send_json(endpoint, || self.transport.http().post(url.clone()).json(request))
            .await
    }

    /// Accepted credentials, optionally only those from one profile.
    pub async fn received_credentials(
        &self,
        limit: Option<u32>,
        from: Option<&str>,
    ) -> Result<Vec<SentCredentialInfo>, LcnApiError> {
        list_deliveries(
            &self.transport,
            "GET /credentials/received",
            &["credentials", "received"],
            limit,
            Counterparty::From(from),
        )
        .await
    }

    pub async fn sent_credentials(
        &self,
        limit: Option<u32>,
        to: Option<&str>,
    ) -> Result<Vec<SentCredentialInfo>, LcnApiError> {
        list_deliveries(
            &self.transport,
            "GET /credentials/sent",
            &["credentials", "sent"],
            limit,
            Counterparty::To(to),
        )
        .await
    }

    /// Credentials sent to the caller and not yet accepted.
    pub async fn incoming_credentials(
        &self,
        limit: Option<u32>,
        from: Option<&str>,
    ) -> Result<Vec<SentCredentialInfo>, LcnApiError> {
        list_deliveries(
            &self.transport,
            "GET /credentials/incoming",
            &["credentials", "incoming"],
            limit,
            Counterparty::From(from),
        )
        .await
    }

    pub async fn delete_credential(&self, uri: &LcnUri) -> Result<bool, LcnApiError> {
        let endpoint = "DELETE /credential";
        let url = self
            .transport
            .url_with_query(endpoint, &["credential"], &[("uri", uri.to_string())])?;
        self.transport
            .send_json(endpoint, || self.transport.http().delete(url.clone()))
            .await
    }

    /// Sign a credential with one of the caller's signing authorities.
    pub async fn issue_credential(
        &self,
        request: &IssueCredentialRequest,
    ) -> Result<CredentialOrJwe, LcnApiError> {
        let endpoint = "POST /credential/issue";
        let url = self.transport.url(endpoint, &["credential", "issue"])?;
        self.transport
            .send_json(endpoint, || self.transport.http().post(url.clone()).json(request))
            .await
    }

    /// Verify a credential server-side. Needs no profile.
    pub async fn verify_credential(
        &self,
        credential: &VerifiableCredential,
    ) -> Result<VerificationResult, LcnApiError> {
        let endpoint = "POST /credential/verify";
        let url = self.transport.url(endpoint, &["credential", "verify"])?;
        let body = VerifyCredentialRequest {
            credential: credential.clone(),
        };
        self.transport
            .send_json(endpoint, || self.transport.http().post(url.clone()).json(&body))
            .await
    }
}
