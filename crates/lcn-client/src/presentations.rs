//! Typed client for the LearnCard Network presentation routes.
//!
//! Mirrors the credential routes: presentations are sent to a profile,
//! accepted by the recipient and listed with the same delivery records.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/presentation/send/{profileId}` | Send presentation |
//! | POST   | `/presentation/accept` | Accept presentation |
//! | GET    | `/presentations/received` | Received presentations |
//! | GET    | `/presentations/sent` | Sent presentations |
//! | GET    | `/presentations/incoming` | Pending incoming presentations |
//! | DELETE | `/presentation?uri=` | Delete presentation |

use serde::{Deserialize, Serialize};

use crate::credentials::{list_deliveries, AcceptCredentialRequest, Counterparty, SentCredentialInfo};
use crate::error::LcnApiError;
use crate::http::Transport;
use crate::types::{LcnUri, ProfileId};
use crate::vc::PresentationOrJwe;

/// Body of `POST /presentation/send/{profileId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendPresentationRequest {
    pub presentation: PresentationOrJwe,
}

/// Client for the presentation routes.
#[derive(Debug, Clone)]
pub struct PresentationClient {
    transport: Transport,
}

impl PresentationClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Send a presentation (plain or JWE-encrypted). Returns its URI.
    pub async fn send_presentation(
        &self,
        profile_id: &ProfileId,
        presentation: &PresentationOrJwe,
    ) -> Result<String, LcnApiError> {
        let endpoint = "POST /presentation/send/{profileId}";
        let url = self
            .transport
            .url(endpoint, &["presentation", "send", profile_id.as_str()])?;
        let body = SendPresentationRequest {
            presentation: presentation.clone(),
        };
        self.transport
            .send_json(endpoint, || self.transport.http().post(url.clone()).json(&body))
            .await
    }

    pub async fn accept_presentation(
        &self,
        request: &AcceptCredentialRequest,
    ) -> Result<bool, LcnApiError> {
        let endpoint = "POST /presentation/accept";
        let url = self.transport.url(endpoint, &["presentation", "accept"])?;
        self.transport
            .send_json(endpoint, || self.transport.http().post(url.clone()).json(request))
            .await
    }

    pub async fn received_presentations(
        &self,
        limit: Option<u32>,
        from: Option<&str>,
    ) -> Result<Vec<SentCredentialInfo>, LcnApiError> {
        list_deliveries(
            &self.transport,
            "GET /presentations/received",
            &["presentations", "received"],
            limit,
            Counterparty::From(from),
        )
        .await
    }

    pub async fn sent_presentations(
        &self,
        limit: Option<u32>,
        to: Option<&str>,
    ) -> Result<Vec<SentCredentialInfo>, LcnApiError> {
        list_deliveries(
            &self.transport,
            "GET /presentations/sent",
            &["presentations", "sent"],
            limit,
            Counterparty::To(to),
        )
        .await
    }

    pub async fn incoming_presentations(
        &self,
        limit: Option<u32>,
        from: Option<&str>,
    ) -> Result<Vec<SentCredentialInfo>, LcnApiError> {
        list_deliveries(
            &self.transport,
            "GET /presentations/incoming",
            &["presentations", "incoming"],
            limit,
            Counterparty::From(from),
        )
        .await
    }

    pub async fn delete_presentation(&self, uri: &LcnUri) -> Result<bool, LcnApiError> {
        let endpoint = "DELETE /presentation";
        let url = self
            .transport
            .url_with_query(endpoint, &["presentation"], &[("uri", uri.to_string())])?;
        self.transport
            .send_json(endpoint, || self.transport.http().delete(url.clone()))
            .await
    }
}
