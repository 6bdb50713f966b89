//! Claim hooks: side effects the network runs when a boost is claimed.
//!
//! A hook watches `claimUri` and acts on `targetUri` when a recipient
//! claims the watched boost: granting permissions, adding the claimer as
//! admin, or auto-connecting the claimer with the target's owner.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/claim-hook/create` | Create hook |
//! | POST   | `/claim-hook/get` | List hooks for a boost |
//! | DELETE | `/claim-hook?id=` | Delete hook |

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::boosts::{BoostPermissionsUpdate, StringQuery};
use crate::error::LcnApiError;
use crate::http::Transport;
use crate::types::{strip_nulls, AdditionalProperties, LcnUri, Paginated, PaginationOptions};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimHookType {
    GrantPermissions,
    AddAdmin,
    AutoConnect,
    #[serde(untagged)]
    Other(String),
}

/// Boost being watched and boost being acted on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookTarget {
    pub claim_uri: String,
    pub target_uri: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantPermissionsData {
    pub claim_uri: String,
    pub target_uri: String,
    /// Permissions granted on `target_uri` to whoever claims `claim_uri`.
    pub permissions: BoostPermissionsUpdate,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// A claim hook, discriminated by `type` with its payload under `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimHook {
    GrantPermissions(GrantPermissionsData),
    AddAdmin(HookTarget),
    AutoConnect(HookTarget),
}

impl ClaimHook {
    pub fn hook_type(&self) -> ClaimHookType {
        match self {
            Self::GrantPermissions(_) => ClaimHookType::GrantPermissions,
            Self::AddAdmin(_) => ClaimHookType::AddAdmin,
            Self::AutoConnect(_) => ClaimHookType::AutoConnect,
        }
    }

    /// URI of the boost whose claim fires the hook.
    pub fn claim_uri(&self) -> &str {
        match self {
            Self::GrantPermissions(data) => &data.claim_uri,
            Self::AddAdmin(target) | Self::AutoConnect(target) => &target.claim_uri,
        }
    }

    pub fn target_uri(&self) -> &str {
        match self {
            Self::GrantPermissions(data) => &data.target_uri,
            Self::AddAdmin(target) | Self::AutoConnect(target) => &target.target_uri,
        }
    }
}

/// A stored claim hook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullClaimHook {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(flatten)]
    pub hook: ClaimHook,
    // Must follow `hook`, which takes `type` and `data` first.
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimHookDataQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_uri: Option<StringQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_uri: Option<StringQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<AdditionalProperties>,
}

/// Filter for [`ClaimHookClient::get_claim_hooks_for_boost`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClaimHookQuery {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub hook_type: Option<StringQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ClaimHookDataQuery>,
}

/// Client for the claim hook routes.
#[derive(Debug, Clone)]
pub struct ClaimHookClient {
    transport: Transport,
}

impl ClaimHookClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Register a hook. Returns the hook id.
    pub async fn create_claim_hook(&self, hook: &ClaimHook) -> Result<String, LcnApiError> {
        let endpoint = "POST /claim-hook/create";
        let url = self.transport.url(endpoint, &["claim-hook", "create"])?;
        let body = json!({ "hook": hook });
        self.transport
            .send_json(endpoint, || self.transport.http().post(url.clone()).json(&body))
            .await
    }

    /// Hooks that watch `uri`.
    pub async fn get_claim_hooks_for_boost(
        &self,
        uri: &LcnUri,
        options: &PaginationOptions,
        query: Option<&ClaimHookQuery>,
    ) -> Result<Paginated<FullClaimHook>, LcnApiError> {
        let endpoint = "POST /claim-hook/get";
        let url = self.transport.url(endpoint, &["claim-hook", "get"])?;
        let body = strip_nulls(json!({
            "uri": uri,
            "limit": options.limit,
            "cursor": options.cursor,
            "query": query,
        }));
        self.transport
            .send_json(endpoint, || self.transport.http().post(url.clone()).json(&body))
            .await
    }

    pub async fn delete_claim_hook(&self, id: &str) -> Result<bool, LcnApiError> {
        let endpoint = "DELETE /claim-hook";
        let url = self
            .transport
            .url_with_query(endpoint, &["claim-hook"], &[("id", id.to_string())])?;
        self.transport
            .send_json(endpoint, || self.transport.http().delete(url.clone()))
            .await
    }
}
