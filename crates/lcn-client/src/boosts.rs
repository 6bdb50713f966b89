//! Typed client for the LearnCard Network boost routes.
//!
//! A boost is a credential template owned by a profile. It is sent to
//! recipients (profile, DID, email or phone), organised into parent/child
//! hierarchies, gated by per-profile permissions, and claimable through
//! links.
//!
//! ## API Paths
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/boost/create` | Create boost |
//! | POST   | `/boost/create/child` | Create child boost |
//! | GET    | `/boost?uri=` | Get boost |
//! | POST   | `/boosts/paginated` | List own boosts |
//! | POST   | `/boosts/count` | Count own boosts |
//! | POST   | `/boost` | Update boost |
//! | DELETE | `/boost?uri=` | Delete boost |
//! | POST   | `/boost/send` | Send boost |
//! | POST   | `/boost/recipients/paginated` | List recipients |
//! | POST   | `/boost/children/paginated` | List children |
//! | GET    | `/boost/permissions?uri=` | Own permissions |
//! | POST   | `/boost/permissions` | Update own permissions |
//! | POST   | `/boost/add-admin` | Add admin |
//! | POST   | `/boost/remove-admin` | Remove admin |
//! | POST   | `/boost/generate-claim-link` | Generate claim link |
//! | POST   | `/boost/claim` | Claim with link |

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::LcnApiError;
use crate::http::Transport;
use crate::profiles::LcnProfile;
use crate::types::{
    strip_nulls, AdditionalProperties, Count, LcnUri, Paginated, PaginationOptions, ProfileId,
};
use crate::vc::{CredentialPayload, VerifiableCredential};

// -- Enums --------------------------------------------------------------------

/// Lifecycle state of a boost.
///
/// `Draft` boosts are editable but cannot be sent; `Provisional` boosts can
/// be edited and sent; `Live` boosts only allow `meta` and default
/// permission edits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoostStatus {
    Draft,
    Provisional,
    Live,
    #[serde(untagged)]
    Other(String),
}

/// Delivery state of a send routed through the universal inbox.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InboxStatus {
    Pending,
    Issued,
    Expired,
    Delivered,
    Claimed,
    #[serde(untagged)]
    Other(String),
}

/// Discriminator of send requests and responses. Only boosts exist today.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SendType {
    #[default]
    Boost,
    #[serde(untagged)]
    Other(String),
}

// -- Models -------------------------------------------------------------------

/// What a profile may do with a boost and its children.
///
/// The `*_children` capabilities are strings (`"*"`, a boost URI pattern,
/// or empty) rather than booleans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoostPermissions {
    pub role: String,
    pub can_edit: bool,
    pub can_issue: bool,
    pub can_revoke: bool,
    pub can_manage_permissions: bool,
    pub can_issue_children: String,
    pub can_create_children: String,
    pub can_edit_children: String,
    pub can_revoke_children: String,
    pub can_manage_children_permissions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_manage_children_profiles: Option<bool>,
    pub can_view_analytics: bool,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Partial [`BoostPermissions`], for updates and claim hooks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoostPermissionsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_edit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_issue: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_revoke: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_manage_permissions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_issue_children: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_create_children: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_edit_children: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_revoke_children: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_manage_children_permissions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_manage_children_profiles: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_view_analytics: Option<bool>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// A boost as stored by the network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boost {
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub boost_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BoostStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_connect_recipients: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<AdditionalProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_permissions: Option<BoostPermissions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_permissions: Option<BoostPermissions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_anyone_to_create_children: Option<bool>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Reference to a skill inside a skill framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRef {
    pub framework_id: String,
    pub id: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Optional boost attributes supplied on creation, update or inline send.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoostMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub boost_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BoostStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_connect_recipients: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<AdditionalProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_permissions: Option<BoostPermissionsUpdate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_permissions: Option<BoostPermissions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_anyone_to_create_children: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<SkillRef>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Body of `POST /boost/create`: the template credential plus metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBoostRequest {
    pub credential: CredentialPayload,
    #[serde(flatten)]
    pub metadata: BoostMetadata,
}

/// Inline template accepted by `POST /boost/send`.
pub type BoostTemplate = CreateBoostRequest;

impl CreateBoostRequest {
    pub fn new(credential: CredentialPayload) -> Self {
        Self {
            credential,
            metadata: BoostMetadata::default(),
        }
    }
}

/// Body of `POST /boost/create/child`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChildBoostRequest {
    pub parent_uri: String,
    pub boost: CreateBoostRequest,
}

/// Fields of `POST /boost` updates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateBoostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<CredentialPayload>,
    #[serde(flatten)]
    pub metadata: BoostMetadata,
}

/// Match against a string field: exact value, `$in` set, or `$regex`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringQuery {
    Exact(String),
    In {
        #[serde(rename = "$in")]
        values: Vec<String>,
    },
    Regex {
        #[serde(rename = "$regex")]
        pattern: String,
    },
}

/// Filter for boost listings. `or` combines alternative filters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoostQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<StringQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<StringQuery>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub boost_type: Option<StringQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<StringQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StringQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_connect_recipients: Option<bool>,
    #[serde(rename = "$or", default, skip_serializing_if = "Option::is_none")]
    pub or: Option<Vec<BoostQuery>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// One recipient of a boost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoostRecipient {
    pub to: LcnProfile,
    pub from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Options for [`BoostClient::get_boost_recipients`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecipientOptions {
    pub page: PaginationOptions,
    /// Include recipients who have not accepted yet. Server default: true.
    pub include_unaccepted_boosts: Option<bool>,
    pub query: Option<AdditionalProperties>,
}

/// Options for [`BoostClient::get_boost_children`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChildrenOptions {
    pub page: PaginationOptions,
    pub query: Option<BoostQuery>,
    /// How many generations below the boost to include. Server default: 1.
    pub number_of_generations: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendBrandingOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
}

/// Delivery options; only used when the recipient is an email or phone.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    /// Return a claim URL instead of emailing/texting it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suppress_delivery: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branding: Option<SendBrandingOptions>,
}

/// Body of `POST /boost/send`.
///
/// Either `template_uri` (send an existing boost) or `template` (create
/// one inline) must be set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendBoostRequest {
    #[serde(rename = "type", default)]
    pub send_type: SendType,
    /// Profile ID, DID, email address or phone number.
    pub recipient: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<BoostTemplate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_credential: Option<VerifiableCredential>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<SendOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_data: Option<AdditionalProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_id: Option<String>,
}

impl SendBoostRequest {
    /// Send the existing boost at `template_uri` to `recipient`.
    pub fn from_template_uri(recipient: impl Into<String>, template_uri: impl Into<String>) -> Self {
        Self {
            send_type: SendType::Boost,
            recipient: recipient.into(),
            contract_uri: None,
            template_uri: Some(template_uri.into()),
            template: None,
            signed_credential: None,
            options: None,
            template_data: None,
            integration_id: None,
        }
    }

    /// Create a boost from `template` and send it to `recipient`.
    pub fn from_template(recipient: impl Into<String>, template: BoostTemplate) -> Self {
        Self {
            template_uri: None,
            template: Some(template),
            ..Self::from_template_uri(recipient, String::new())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendInboxResponse {
    pub issuance_id: String,
    pub status: InboxStatus,
    /// Present when delivery was suppressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_url: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendBoostResponse {
    #[serde(rename = "type")]
    pub send_type: SendType,
    pub credential_uri: String,
    pub uri: String,
    pub activity_id: String,
    /// Present for email/phone recipients.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inbox: Option<SendInboxResponse>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Signing authority that signs credentials claimed through a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimLinkSigningAuthority {
    pub endpoint: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub did: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl ClaimLinkSigningAuthority {
    pub fn new(endpoint: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            name: name.into(),
            did: None,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimLinkOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl_seconds: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_uses: Option<u64>,
}

/// Body of `POST /boost/generate-claim-link`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateClaimLinkRequest {
    pub boost_uri: String,
    #[serde(rename = "claimLinkSA")]
    pub claim_link_sa: ClaimLinkSigningAuthority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<ClaimLinkOptions>,
    /// Server generates a UUID when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimLink {
    pub boost_uri: String,
    pub challenge: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Answer of the count endpoints.
pub type CountResponse = Count;

// -- Client -------------------------------------------------------------------

/// Client for the boost routes.
#[derive(Debug, Clone)]
pub struct BoostClient {
    transport: Transport,
}

impl BoostClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    async fn post<B, T>(&self, endpoint: &str, segments: &[&str], body: &B) -> Result<T, LcnApiError>
    where
        B: Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let url = self.transport.url(endpoint, segments)?;
        self.transport
            .send_json(endpoint, || self.transport.http().post(url.clone()).json(body))
            .await
    }

    /// Create a boost. Returns its URI.
    pub async fn create_boost(&self, request: &CreateBoostRequest) -> Result<String, LcnApiError> {
        self.post("POST /boost/create", &["boost", "create"], request).await
    }

    /// Create a boost beneath `request.parent_uri`. Returns its URI.
    pub async fn create_child_boost(
        &self,
        request: &CreateChildBoostRequest,
    ) -> Result<String, LcnApiError> {
        self.post("POST /boost/create/child", &["boost", "create", "child"], request)
            .await
    }

    pub async fn get_boost(&self, uri: &LcnUri) -> Result<Option<Boost>, LcnApiError> {
        let endpoint = "GET /boost";
        let url = self
            .transport
            .url_with_query(endpoint, &["boost"], &[("uri", uri.to_string())])?;
        self.transport
            .send_optional(endpoint, || self.transport.http().get(url.clone()))
            .await
    }

    pub async fn get_paginated_boosts(
        &self,
        options: &PaginationOptions,
        query: Option<&BoostQuery>,
    ) -> Result<Paginated<Boost>, LcnApiError> {
        let body = json!({
            "limit": options.limit,
            "cursor": options.cursor,
            "query": query,
        });
        self.post("POST /boosts/paginated", &["boosts", "paginated"], &strip_nulls(body))
            .await
    }

    pub async fn count_boosts(&self, query: Option<&BoostQuery>) -> Result<CountResponse, LcnApiError> {
        let body = strip_nulls(json!({ "query": query }));
        self.post("POST /boosts/count", &["boosts", "count"], &body).await
    }

    pub async fn update_boost(
        &self,
        uri: &LcnUri,
        updates: &UpdateBoostRequest,
    ) -> Result<bool, LcnApiError> {
        let body = json!({ "uri": uri, "updates": updates });
        self.post("POST /boost", &["boost"], &body).await
    }

    pub async fn delete_boost(&self, uri: &LcnUri) -> Result<bool, LcnApiError> {
        let endpoint = "DELETE /boost";
        let url = self
            .transport
            .url_with_query(endpoint, &["boost"], &[("uri", uri.to_string())])?;
        self.transport
            .send_json(endpoint, || self.transport.http().delete(url.clone()))
            .await
    }

    /// Send a boost to a profile, DID, email address or phone number.
    ///
    /// # Errors
    ///
    /// Returns [`LcnApiError::InvalidRequest`] without any HTTP traffic if
    /// neither `template_uri` nor `template` is set.
    pub async fn send_boost(&self, request: &SendBoostRequest) -> Result<SendBoostResponse, LcnApiError> {
        let endpoint = "POST /boost/send";
        if request.template_uri.is_none() && request.template.is_none() {
            return Err(LcnApiError::InvalidRequest {
                endpoint: endpoint.into(),
                reason: "either templateUri or template must be provided".into(),
            });
        }
        self.post(endpoint, &["boost", "send"], request).await
    }

    pub async fn get_boost_recipients(
        &self,
        uri: &LcnUri,
        options: &RecipientOptions,
    ) -> Result<Paginated<BoostRecipient>, LcnApiError> {
        let body = json!({
            "uri": uri,
            "limit": options.page.limit,
            "cursor": options.page.cursor,
            "includeUnacceptedBoosts": options.include_unaccepted_boosts,
            "query": options.query,
        });
        self.post(
            "POST /boost/recipients/paginated",
            &["boost", "recipients", "paginated"],
            &strip_nulls(body),
        )
        .await
    }

    pub async fn get_boost_children(
        &self,
        uri: &LcnUri,
        options: &ChildrenOptions,
    ) -> Result<Paginated<Boost>, LcnApiError> {
        let body = json!({
            "uri": uri,
            "limit": options.page.limit,
            "cursor": options.page.cursor,
            "query": options.query,
            "numberOfGenerations": options.number_of_generations,
        });
        self.post(
            "POST /boost/children/paginated",
            &["boost", "children", "paginated"],
            &strip_nulls(body),
        )
        .await
    }

    /// The caller's permissions on `uri`.
    pub async fn get_boost_permissions(&self, uri: &LcnUri) -> Result<BoostPermissions, LcnApiError> {
        let endpoint = "GET /boost/permissions";
        let url = self.transport.url_with_query(
            endpoint,
            &["boost", "permissions"],
            &[("uri", uri.to_string())],
        )?;
        self.transport
            .send_json(endpoint, || self.transport.http().get(url.clone()))
            .await
    }

    pub async fn update_boost_permissions(
        &self,
        uri: &LcnUri,
        updates: &BoostPermissionsUpdate,
    ) -> Result<bool, LcnApiError> {
        let body = json!({ "uri": uri, "updates": updates });
        self.post("POST /boost/permissions", &["boost", "permissions"], &body)
            .await
    }

    pub async fn add_boost_admin(&self, uri: &LcnUri, profile_id: &ProfileId) -> Result<bool, LcnApiError> {
        let body = json!({ "uri": uri, "profileId": profile_id });
        self.post("POST /boost/add-admin", &["boost", "add-admin"], &body)
            .await
    }

    pub async fn remove_boost_admin(
        &self,
        uri: &LcnUri,
        profile_id: &ProfileId,
    ) -> Result<bool, LcnApiError> {
        let body = json!({ "uri": uri, "profileId": profile_id });
        self.post("POST /boost/remove-admin", &["boost", "remove-admin"], &body)
            .await
    }

    pub async fn generate_claim_link(
        &self,
        request: &GenerateClaimLinkRequest,
    ) -> Result<ClaimLink, LcnApiError> {
        self.post(
            "POST /boost/generate-claim-link",
            &["boost", "generate-claim-link"],
            request,
        )
        .await
    }

    /// Claim a boost through a link. Returns the issued credential's URI.
    pub async fn claim_boost_with_link(
        &self,
        boost_uri: &LcnUri,
        challenge: &str,
    ) -> Result<String, LcnApiError> {
        let body = json!({ "boostUri": boost_uri, "challenge": challenge });
        self.post("POST /boost/claim", &["boost", "claim"], &body).await
    }
}
