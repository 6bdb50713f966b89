//! Typed client for the LearnCard Network profile routes.
//!
//! A profile is the network identity of a user or service: a unique
//! `profileId`, an auto-assigned `did:web`, display settings, connections
//! to other profiles and the signing authorities allowed to sign on its
//! behalf.
//!
//! ## API Paths
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/profile/create` | Create a profile |
//! | POST   | `/profile/create-service` | Create a service profile |
//! | POST   | `/profile/create-managed-service` | Create a service profile the caller manages |
//! | POST   | `/profile/available-profiles` | Profiles the caller manages |
//! | GET    | `/profile/managed-services` | Managed service profiles |
//! | GET    | `/profile` | Own profile |
//! | GET    | `/profile/{profileId}` | Another profile |
//! | POST   | `/profile` | Update own profile |
//! | DELETE | `/profile` | Delete own profile |
//! | GET    | `/search/profiles/{input}` | Search by profileId |
//! | POST   | `/profile/{profileId}/connect` | Request connection |
//! | POST   | `/profile/{profileId}/cancel-connection-request` | Cancel request |
//! | POST   | `/profile/{profileId}/accept-connection` | Accept request |
//! | POST   | `/profile/{profileId}/disconnect` | Disconnect |
//! | GET    | `/profile/connections/paginated` | List connections |
//! | GET    | `/profile/pending-connections/paginated` | Requests the caller sent |
//! | GET    | `/profile/connection-requests/paginated` | Requests the caller received |
//! | POST   | `/profile/{profileId}/block` | Block |
//! | POST   | `/profile/{profileId}/unblock` | Unblock |
//! | GET    | `/profile/blocked` | Blocked profiles |
//! | POST   | `/profile/generate-invite` | Create invite challenge |
//! | GET    | `/profile/invites` | Live invites |
//! | POST   | `/profile/invite/{challenge}/invalidate` | Invalidate invite |
//! | POST   | `/profile/{profileId}/connect/{challenge}` | Connect with invite |
//! | POST   | `/profile/signing-authority/register` | Register signing authority |
//! | GET    | `/profile/signing-authority/get/all` | List signing authorities |
//! | GET    | `/profile/signing-authority/get` | One signing authority |
//! | GET    | `/profile/signing-authority/get-primary` | Primary signing authority |
//! | POST   | `/profile/signing-authority/set-primary` | Set primary |

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::LcnApiError;
use crate::http::Transport;
use crate::types::{
    list_limit, strip_nulls, AdditionalProperties, Did, Paginated, PaginationOptions, ProfileId,
    SigningAuthorityName,
};
use lcn_core::ValidationError;

// -- Models -------------------------------------------------------------------

/// Visual settings for a profile card.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LcnProfileDisplay {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_background_image: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_background_image: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_font_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_background_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_id_background_image: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_id_background_image: Option<bool>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Editable profile fields shared by the profile, create and update shapes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    /// Deprecated by the service but still returned for older profiles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_link: Option<String>,
    /// e.g. `person`, `organization`, `service`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub profile_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications_webhook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<LcnProfileDisplay>,
    /// Up to five boost URIs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlighted_credentials: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// A network profile as the service returns it.
///
/// Identifiers stay plain strings so a record the service accepted never
/// fails to decode here; see [`LcnProfile::parsed_profile_id`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LcnProfile {
    pub profile_id: String,
    pub did: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_service_profile: Option<bool>,
    #[serde(flatten)]
    pub details: ProfileDetails,
}

impl LcnProfile {
    /// `profile_id` as a validated [`ProfileId`], for passing back to the
    /// profile operations.
    pub fn parsed_profile_id(&self) -> Result<ProfileId, ValidationError> {
        ProfileId::new(self.profile_id.as_str())
    }

    pub fn parsed_did(&self) -> Result<Did, ValidationError> {
        Did::new(self.did.as_str())
    }
}

/// Body of `POST /profile/create` and `POST /profile/create-service`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    pub profile_id: ProfileId,
    #[serde(flatten)]
    pub details: ProfileDetails,
}

impl CreateProfileRequest {
    pub fn new(profile_id: ProfileId) -> Self {
        Self {
            profile_id,
            details: ProfileDetails::default(),
        }
    }
}

/// Body of `POST /profile`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<ProfileId>,
    #[serde(flatten)]
    pub details: ProfileDetails,
}

/// Relationship between the caller and another profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionStatus {
    Connected,
    PendingRequestSent,
    PendingRequestReceived,
    NotConnected,
    /// Forward-compatible catch-all.
    #[serde(untagged)]
    Other(String),
}

/// Search hit: a profile plus, when requested, its connection status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSearchResult {
    #[serde(flatten)]
    pub profile: LcnProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_status: Option<ConnectionStatus>,
}

/// Query options for [`ProfileClient::search_profiles`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchProfilesOptions {
    /// Server default is 25; must be below 100.
    pub limit: Option<u32>,
    pub include_self: Option<bool>,
    pub include_connection_status: Option<bool>,
    pub include_service_profiles: Option<bool>,
}

impl SearchProfilesOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", list_limit(Some(limit)).to_string()));
        }
        let flags = [
            ("includeSelf", self.include_self),
            ("includeConnectionStatus", self.include_connection_status),
            ("includeServiceProfiles", self.include_service_profiles),
        ];
        for (key, flag) in flags {
            if let Some(flag) = flag {
                pairs.push((key, flag.to_string()));
            }
        }
        pairs
    }
}

/// Body of `POST /profile/generate-invite`.
///
/// `expiration` is in seconds (0 for none); `max_uses` of 0 means unlimited.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateInviteRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<u32>,
}

/// Connection invitation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invite {
    pub profile_id: String,
    pub challenge: String,
    /// Seconds until expiry; `None` for invites that never expire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// An invite the caller issued that can still be used.
///
/// `None` means unlimited for the use counters and never for `expires_in`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteSummary {
    pub challenge: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses_remaining: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<u64>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Manager through which the caller reaches a managed profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileManager {
    pub id: String,
    pub created: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub did: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// A profile the caller manages, directly or through a manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedProfile {
    pub profile: LcnProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<ProfileManager>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SigningAuthority {
    pub endpoint: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigningAuthorityRelationship {
    pub name: String,
    pub did: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_primary: Option<bool>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// A signing authority registered for the calling profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigningAuthorityForUser {
    pub signing_authority: SigningAuthority,
    pub relationship: SigningAuthorityRelationship,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl SigningAuthorityForUser {
    pub fn is_primary(&self) -> bool {
        self.relationship.is_primary.unwrap_or(false)
    }
}

/// Body of `POST /profile/signing-authority/register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterSigningAuthorityRequest {
    pub endpoint: String,
    pub name: SigningAuthorityName,
    pub did: Did,
}

#[derive(Serialize)]
struct SigningAuthorityKey<'a> {
    endpoint: &'a str,
    name: &'a str,
}

// -- Client -------------------------------------------------------------------

/// Client for the profile routes.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    transport: Transport,
}

impl ProfileClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Create a profile for the caller's DID. Returns the new `did:web`.
    pub async fn create_profile(&self, request: &CreateProfileRequest) -> Result<String, LcnApiError> {
        let endpoint = "POST /profile/create";
        let url = self.transport.url(endpoint, &["profile", "create"])?;
        self.transport
            .send_json(endpoint, || self.transport.http().post(url.clone()).json(request))
            .await
    }

    /// Create a service profile. Returns the new `did:web`.
    pub async fn create_service_profile(
        &self,
        request: &CreateProfileRequest,
    ) -> Result<String, LcnApiError> {
        let endpoint = "POST /profile/create-service";
        let url = self.transport.url(endpoint, &["profile", "create-service"])?;
        self.transport
            .send_json(endpoint, || self.transport.http().post(url.clone()).json(request))
            .await
    }

    /// Create a service profile with a fresh server-held key, managed by
    /// the caller. Returns the new `did:web`.
    pub async fn create_managed_service_profile(
        &self,
        request: &CreateProfileRequest,
    ) -> Result<String, LcnApiError> {
        let endpoint = "POST /profile/create-managed-service";
        let url = self
            .transport
            .url(endpoint, &["profile", "create-managed-service"])?;
        self.transport
            .send_json(endpoint, || self.transport.http().post(url.clone()).json(request))
            .await
    }

    /// Profiles the caller manages. `query` is passed through as-is.
    pub async fn available_profiles(
        &self,
        options: &PaginationOptions,
        query: Option<&AdditionalProperties>,
    ) -> Result<Paginated<ManagedProfile>, LcnApiError> {
        let endpoint = "POST /profile/available-profiles";
        let url = self.transport.url(endpoint, &["profile", "available-profiles"])?;
        let body = strip_nulls(json!({
            "limit": list_limit(options.limit),
            "cursor": options.cursor,
            "query": query,
        }));
        self.transport
            .send_json(endpoint, || self.transport.http().post(url.clone()).json(&body))
            .await
    }

    /// Service profiles the caller manages, optionally only those managed
    /// through the manager `id`.
    pub async fn managed_service_profiles(
        &self,
        options: &PaginationOptions,
        id: Option<&str>,
    ) -> Result<Paginated<LcnProfile>, LcnApiError> {
        let endpoint = "GET /profile/managed-services";
        let mut pairs = options.query_pairs();
        if let Some(id) = id {
            pairs.push(("id", id.to_string()));
        }
        let url = self
            .transport
            .url_with_query(endpoint, &["profile", "managed-services"], &pairs)?;
        self.transport
            .send_json(endpoint, || self.transport.http().get(url.clone()))
            .await
    }

    /// The caller's own profile, or `None` if it has not created one.
    pub async fn get_profile(&self) -> Result<Option<LcnProfile>, LcnApiError> {
        let endpoint = "GET /profile";
        let url = self.transport.url(endpoint, &["profile"])?;
        self.transport
            .send_optional(endpoint, || self.transport.http().get(url.clone()))
            .await
    }

    /// Another user's profile. Returns `None` on 404.
    pub async fn get_other_profile(
        &self,
        profile_id: &ProfileId,
    ) -> Result<Option<LcnProfile>, LcnApiError> {
        let endpoint = "GET /profile/{profileId}";
        let url = self.transport.url(endpoint, &["profile", profile_id.as_str()])?;
        self.transport
            .send_optional(endpoint, || self.transport.http().get(url.clone()))
            .await
    }

    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<bool, LcnApiError> {
        let endpoint = "POST /profile";
        let url = self.transport.url(endpoint, &["profile"])?;
        self.transport
            .send_json(endpoint, || self.transport.http().post(url.clone()).json(request))
            .await
    }

    pub async fn delete_profile(&self) -> Result<bool, LcnApiError> {
        let endpoint = "DELETE /profile";
        let url = self.transport.url(endpoint, &["profile"])?;
        self.transport
            .send_json(endpoint, || self.transport.http().delete(url.clone()))
            .await
    }

    /// Search profiles whose id matches `input`.
    pub async fn search_profiles(
        &self,
        input: &str,
        options: &SearchProfilesOptions,
    ) -> Result<Vec<ProfileSearchResult>, LcnApiError> {
        let endpoint = "GET /search/profiles/{input}";
        let url = self.transport.url_with_query(
            endpoint,
            &["search", "profiles", input],
            &options.query_pairs(),
        )?;
        self.transport
            .send_json(endpoint, || self.transport.http().get(url.clone()))
            .await
    }

    /// Send a connection request.
    pub async fn connect_with(&self, profile_id: &ProfileId) -> Result<bool, LcnApiError> {
        self.profile_action("POST /profile/{profileId}/connect", profile_id, "connect")
            .await
    }

    /// Withdraw a pending connection request.
    pub async fn cancel_connection_request(&self, profile_id: &ProfileId) -> Result<bool, LcnApiError> {
        self.profile_action(
            "POST /profile/{profileId}/cancel-connection-request",
            profile_id,
            "cancel-connection-request",
        )
        .await
    }

    pub async fn accept_connection_request(&self, profile_id: &ProfileId) -> Result<bool, LcnApiError> {
        self.profile_action(
            "POST /profile/{profileId}/accept-connection",
            profile_id,
            "accept-connection",
        )
        .await
    }

    pub async fn disconnect_with(&self, profile_id: &ProfileId) -> Result<bool, LcnApiError> {
        self.profile_action("POST /profile/{profileId}/disconnect", profile_id, "disconnect")
            .await
    }

    async fn profile_action(
        &self,
        endpoint: &str,
        profile_id: &ProfileId,
        action: &str,
    ) -> Result<bool, LcnApiError> {
        let url = self
            .transport
            .url(endpoint, &["profile", profile_id.as_str(), action])?;
        self.transport
            .send_json(endpoint, || {
                self.transport
                    .http()
                    .post(url.clone())
                    .json(&AdditionalProperties::new())
            })
            .await
    }

    /// One page of the caller's connections.
    pub async fn connections(
        &self,
        options: &PaginationOptions,
    ) -> Result<Paginated<LcnProfile>, LcnApiError> {
        self.profile_page(
            "GET /profile/connections/paginated",
            &["profile", "connections", "paginated"],
            options,
        )
        .await
    }

    /// Connection requests the caller sent that are still pending.
    pub async fn pending_connections(
        &self,
        options: &PaginationOptions,
    ) -> Result<Paginated<LcnProfile>, LcnApiError> {
        self.profile_page(
            "GET /profile/pending-connections/paginated",
            &["profile", "pending-connections", "paginated"],
            options,
        )
        .await
    }

    /// Connection requests waiting for the caller to accept.
    pub async fn connection_requests(
        &self,
        options: &PaginationOptions,
    ) -> Result<Paginated<LcnProfile>, LcnApiError> {
        self.profile_page(
            "GET /profile/connection-requests/paginated",
            &["profile", "connection-requests", "paginated"],
            options,
        )
        .await
    }

    async fn profile_page(
        &self,
        endpoint: &str,
        segments: &[&str],
        options: &PaginationOptions,
    ) -> Result<Paginated<LcnProfile>, LcnApiError> {
        let url = self
            .transport
            .url_with_query(endpoint, segments, &options.query_pairs())?;
        self.transport
            .send_json(endpoint, || self.transport.http().get(url.clone()))
            .await
    }

    /// Block a profile. Blocked profiles cannot see or contact the caller.
    pub async fn block_profile(&self, profile_id: &ProfileId) -> Result<bool, LcnApiError> {
        self.profile_action("POST /profile/{profileId}/block", profile_id, "block")
            .await
    }

    pub async fn unblock_profile(&self, profile_id: &ProfileId) -> Result<bool, LcnApiError> {
        self.profile_action("POST /profile/{profileId}/unblock", profile_id, "unblock")
            .await
    }

    pub async fn blocked_profiles(&self) -> Result<Vec<LcnProfile>, LcnApiError> {
        let endpoint = "GET /profile/blocked";
        let url = self.transport.url(endpoint, &["profile", "blocked"])?;
        self.transport
            .send_json(endpoint, || self.transport.http().get(url.clone()))
            .await
    }

    pub async fn generate_invite(&self, request: &GenerateInviteRequest) -> Result<Invite, LcnApiError> {
        let endpoint = "POST /profile/generate-invite";
        let url = self.transport.url(endpoint, &["profile", "generate-invite"])?;
        self.transport
            .send_json(endpoint, || self.transport.http().post(url.clone()).json(request))
            .await
    }

    /// Invites the caller issued that are neither expired nor used up.
    pub async fn invites(&self) -> Result<Vec<InviteSummary>, LcnApiError> {
        let endpoint = "GET /profile/invites";
        let url = self.transport.url(endpoint, &["profile", "invites"])?;
        self.transport
            .send_json(endpoint, || self.transport.http().get(url.clone()))
            .await
    }

    /// Invalidate one of the caller's invites. The service answers `true`
    /// even when the invite was already gone.
    pub async fn invalidate_invite(&self, challenge: &str) -> Result<bool, LcnApiError> {
        let endpoint = "POST /profile/invite/{challenge}/invalidate";
        let url = self
            .transport
            .url(endpoint, &["profile", "invite", challenge, "invalidate"])?;
        self.transport
            .send_json(endpoint, || {
                self.transport
                    .http()
                    .post(url.clone())
                    .json(&AdditionalProperties::new())
            })
            .await
    }

    /// Connect immediately using an invite challenge issued by `profile_id`.
    pub async fn connect_with_invite(
        &self,
        profile_id: &ProfileId,
        challenge: &str,
    ) -> Result<bool, LcnApiError> {
        let endpoint = "POST /profile/{profileId}/connect/{challenge}";
        let url = self
            .transport
            .url(endpoint, &["profile", profile_id.as_str(), "connect", challenge])?;
        self.transport
            .send_json(endpoint, || {
                self.transport
                    .http()
                    .post(url.clone())
                    .json(&AdditionalProperties::new())
            })
            .await
    }

    pub async fn register_signing_authority(
        &self,
        request: &RegisterSigningAuthorityRequest,
    ) -> Result<bool, LcnApiError> {
        let endpoint = "POST /profile/signing-authority/register";
        let url = self
            .transport
            .url(endpoint, &["profile", "signing-authority", "register"])?;
        self.transport
            .send_json(endpoint, || self.transport.http().post(url.clone()).json(request))
            .await
    }

    pub async fn signing_authorities(&self) -> Result<Vec<SigningAuthorityForUser>, LcnApiError> {
        let endpoint = "GET /profile/signing-authority/get/all";
        let url = self
            .transport
            .url(endpoint, &["profile", "signing-authority", "get", "all"])?;
        self.transport
            .send_json(endpoint, || self.transport.http().get(url.clone()))
            .await
    }

    /// Look up one signing authority by endpoint and name.
    pub async fn signing_authority(
        &self,
        sa_endpoint: &str,
        name: &str,
    ) -> Result<Option<SigningAuthorityForUser>, LcnApiError> {
        let endpoint = "GET /profile/signing-authority/get";
        let url = self.transport.url_with_query(
            endpoint,
            &["profile", "signing-authority", "get"],
            &[("endpoint", sa_endpoint.to_string()), ("name", name.to_string())],
        )?;
        self.transport
            .send_optional(endpoint, || self.transport.http().get(url.clone()))
            .await
    }

    pub async fn primary_signing_authority(
        &self,
    ) -> Result<Option<SigningAuthorityForUser>, LcnApiError> {
        let endpoint = "GET /profile/signing-authority/get-primary";
        let url = self
            .transport
            .url(endpoint, &["profile", "signing-authority", "get-primary"])?;
        self.transport
            .send_optional(endpoint, || self.transport.http().get(url.clone()))
            .await
    }

    pub async fn set_primary_signing_authority(
        &self,
        sa_endpoint: &str,
        name: &SigningAuthorityName,
    ) -> Result<bool, LcnApiError> {
        let endpoint = "POST /profile/signing-authority/set-primary";
        let url = self
            .transport
            .url(endpoint, &["profile", "signing-authority", "set-primary"])?;
        let body = SigningAuthorityKey {
            endpoint: sa_endpoint,
            name: name.as_str(),
        };
        self.transport
            .send_json(endpoint, || self.transport.http().post(url.clone()).json(&body))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn profile_round_trip_keeps_unknown_keys() {
        let raw = json!({
            "profileId": "ada",
            "did": "did:web:network.learncard.com:users:ada",
            "displayName": "Ada",
            "isServiceProfile": false,
            "type": "person",
            "display": {"fontColor": "#000", "sparkle": 3},
            "favouriteColour": "teal"
        });
        let profile: LcnProfile = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(profile.details.profile_type.as_deref(), Some("person"));
        assert_eq!(profile.details.additional_properties["favouriteColour"], "teal");
        assert_eq!(serde_json::to_value(&profile).unwrap(), raw);
    }

    #[test]
    fn search_result_reads_connection_status() {
        let hit: ProfileSearchResult = serde_json::from_value(json!({
            "profileId": "bob",
            "did": "did:web:network.learncard.com:users:bob",
            "connectionStatus": "PENDING_REQUEST_SENT"
        }))
        .unwrap();
        assert_eq!(hit.connection_status, Some(ConnectionStatus::PendingRequestSent));
        assert!(!hit.profile.details.additional_properties.contains_key("connectionStatus"));
    }

    #[test]
    fn unknown_connection_status_survives() {
        let status: ConnectionStatus = serde_json::from_value(json!("BLOCKED")).unwrap();
        assert_eq!(status, ConnectionStatus::Other("BLOCKED".into()));
        assert_eq!(serde_json::to_value(&status).unwrap(), json!("BLOCKED"));
    }

    #[test]
    fn update_request_emits_only_set_fields() {
        let mut update = UpdateProfileRequest::default();
        update.details.short_bio = Some("hi".into());
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({"shortBio": "hi"}));
    }

    #[test]
    fn search_limit_is_clamped() {
        let opts = SearchProfilesOptions {
            limit: Some(250),
            ..Default::default()
        };
        assert_eq!(opts.query_pairs(), vec![("limit", "99".to_string())]);
        assert!(SearchProfilesOptions::default().query_pairs().is_empty());
    }

    #[test]
    fn managed_profile_keeps_manager_extras() {
        let raw = json!({
            "profile": {"profileId": "acme-bot", "did": "did:web:x:acme-bot", "isServiceProfile": true},
            "manager": {"id": "m1", "created": "2024-01-01T00:00:00Z", "did": "did:web:x:manager:m1", "tier": 2}
        });
        let managed: ManagedProfile = serde_json::from_value(raw.clone()).unwrap();
        let manager = managed.manager.as_ref().unwrap();
        assert_eq!(manager.additional_properties["tier"], 2);
        assert_eq!(serde_json::to_value(&managed).unwrap(), raw);
    }

    #[test]
    fn search_options_render_camel_case_flags() {
        let opts = SearchProfilesOptions {
            limit: Some(5),
            include_connection_status: Some(true),
            ..Default::default()
        };
        assert_eq!(
            opts.query_pairs(),
            vec![
                ("limit", "5".to_string()),
                ("includeConnectionStatus", "true".to_string())
            ]
        );
    }
}
