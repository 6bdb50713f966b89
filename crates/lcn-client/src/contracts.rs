//! Typed client for consent-flow contracts.
//!
//! A contract declares which credential categories and personal fields its
//! owner wants to read from, or write to, a consenting profile. Consenting
//! produces a set of terms with its own URI; every change to those terms is
//! recorded as a transaction.
//!
//! ## API Paths
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/consent-flow-contract` | Create contract |
//! | GET    | `/consent-flow-contract?uri=` | Get contract |
//! | POST   | `/consent-flow-contracts` | List own contracts |
//! | DELETE | `/consent-flow-contract?uri=` | Delete contract |
//! | POST   | `/consent-flow-contract/consent` | Consent to contract |
//! | POST   | `/consent-flow-contracts/consent` | List consented contracts |
//! | POST   | `/consent-flow-contract/consent/update` | Update terms |
//! | POST   | `/consent-flow-contract/consent/withdraw` | Withdraw consent |
//! | POST   | `/consent-flow-contract/consent/history` | Terms transactions |
//! | POST   | `/consent-flow-contract/data` | Consented data for a contract |
//! | POST   | `/consent-flow-contract/data-for-did` | Consented data for a DID |
//! | POST   | `/consent-flow-contract/write` | Write credential via contract |
//! | GET    | `/consent-flow-contract/verify?uri=&profileId=` | Verify consent |

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::LcnApiError;
use crate::http::Transport;
use crate::profiles::LcnProfile;
use crate::types::{strip_nulls, AdditionalProperties, Did, LcnUri, Paginated, ProfileId};
use crate::vc::CredentialOrJwe;

// -- Enums --------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentFlowTermsStatus {
    Live,
    Stale,
    Withdrawn,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentFlowTransactionAction {
    Consent,
    Update,
    Sync,
    Withdraw,
    Write,
    #[serde(untagged)]
    Other(String),
}

// -- Contract -----------------------------------------------------------------

/// One requested category or personal field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractField {
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_enabled: Option<bool>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl ContractField {
    pub fn required() -> Self {
        Self {
            required: true,
            default_enabled: None,
            additional_properties: AdditionalProperties::new(),
        }
    }

    pub fn optional() -> Self {
        Self {
            required: false,
            ..Self::required()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContractCredentials {
    #[serde(default)]
    pub categories: BTreeMap<String, ContractField>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// The read or write half of a contract. Absent halves decode as empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContractSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anonymize: Option<bool>,
    #[serde(default)]
    pub credentials: ContractCredentials,
    #[serde(default)]
    pub personal: BTreeMap<String, ContractField>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConsentFlowContract {
    #[serde(default)]
    pub read: ContractSection,
    #[serde(default)]
    pub write: ContractSection,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Boost issued automatically to every consenter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoBoostConfig {
    pub boost_uri: String,
    pub signing_authority: crate::credentials::SigningAuthorityRef,
}

/// Body of `POST /consent-flow-contract`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContractRequest {
    pub contract: ConsentFlowContract,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_for_accessing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needs_guardian_consent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_door_boost_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_boosts: Option<Vec<AutoBoostConfig>>,
    /// Profile ids allowed to write credentials through this contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writers: Option<Vec<String>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl CreateContractRequest {
    pub fn new(name: impl Into<String>, contract: ConsentFlowContract) -> Self {
        Self {
            contract,
            name: name.into(),
            subtitle: None,
            description: None,
            reason_for_accessing: None,
            image: None,
            expires_at: None,
            needs_guardian_consent: None,
            redirect_url: None,
            front_door_boost_uri: None,
            auto_boosts: None,
            writers: None,
            additional_properties: AdditionalProperties::new(),
        }
    }
}

/// A stored contract. `owner` is omitted in listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentFlowContractDetails {
    pub contract: ConsentFlowContract,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<LcnProfile>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_for_accessing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needs_guardian_consent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_door_boost_uri: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_boosts: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writers: Option<Vec<LcnProfile>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

// -- Terms --------------------------------------------------------------------

/// Consent given for one credential category.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentFlowTerm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharing: Option<bool>,
    /// URIs of the credentials shared so far.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_all: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_until: Option<String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermsReadCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_all: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharing: Option<bool>,
    #[serde(default)]
    pub categories: BTreeMap<String, ConsentFlowTerm>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TermsRead {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anonymize: Option<bool>,
    #[serde(default)]
    pub credentials: TermsReadCredentials,
    /// Personal field name to shared value.
    #[serde(default)]
    pub personal: BTreeMap<String, String>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TermsWriteCredentials {
    #[serde(default)]
    pub categories: BTreeMap<String, bool>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TermsWrite {
    #[serde(default)]
    pub credentials: TermsWriteCredentials,
    #[serde(default)]
    pub personal: BTreeMap<String, bool>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// What a consenter agreed to share and accept.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentFlowTerms {
    #[serde(default)]
    pub read: TermsRead,
    #[serde(default)]
    pub write: TermsWrite,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denied_writers: Option<Vec<String>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Terms plus their validity, as sent on consent and update.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentToContractRequest {
    pub terms: ConsentFlowTerms,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_time: Option<bool>,
}

/// A contract the caller consented to, with the terms it agreed on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentedContract {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_time: Option<bool>,
    pub terms: ConsentFlowTerms,
    pub contract: ConsentFlowContractDetails,
    /// URI of the terms.
    pub uri: String,
    pub consenter: LcnProfile,
    pub status: ConsentFlowTermsStatus,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentFlowTransaction {
    pub id: String,
    pub action: ConsentFlowTransactionAction,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_time: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms: Option<ConsentFlowTerms>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uris: Option<Vec<String>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

// -- Consented data -----------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SharedCategories {
    /// Category name to shared credential URIs.
    #[serde(default)]
    pub categories: BTreeMap<String, Vec<String>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Data one consenter shared with a contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsentFlowContractData {
    pub credentials: SharedCategories,
    #[serde(default)]
    pub personal: BTreeMap<String, String>,
    pub date: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedCredential {
    pub category: String,
    pub uri: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Data a given DID shared, across contracts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentFlowContractDataForDid {
    pub credentials: Vec<SharedCredential>,
    #[serde(default)]
    pub personal: BTreeMap<String, String>,
    pub date: String,
    pub contract_uri: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Credential written to a consenter through a contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractCredential {
    pub credential_uri: String,
    pub terms_uri: String,
    pub contract_uri: String,
    pub boost_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub date: String,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Body of `POST /consent-flow-contract/write`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteCredentialRequest {
    /// DID of the consenter to write to.
    pub did: Did,
    pub contract_uri: String,
    pub credential: CredentialOrJwe,
    pub boost_uri: String,
}

/// Page and filter for contract listings. `query` is passed through as-is.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContractListOptions {
    pub limit: Option<u32>,
    pub cursor: Option<String>,
    pub query: Option<AdditionalProperties>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConsentBody<'a> {
    contract_uri: &'a LcnUri,
    #[serde(flatten)]
    request: &'a ConsentToContractRequest,
}

#[derive(Serialize)]
struct UpdateTermsBody<'a> {
    uri: &'a LcnUri,
    #[serde(flatten)]
    request: &'a ConsentToContractRequest,
}

// -- Client -------------------------------------------------------------------

/// Client for the consent-flow contract routes.
#[derive(Debug, Clone)]
pub struct ContractClient {
    transport: Transport,
}

impl ContractClient {
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

    /// `options` as a request body, plus the subject key (`uri` or `did`).
    fn listing(
        subject: Option<(&str, serde_json::Value)>,
        options: &ContractListOptions,
    ) -> serde_json::Value {
        let mut body = json!({
            "limit": options.limit,
            "cursor": options.cursor,
            "query": options.query,
        });
        if let (Some((key, value)), Some(map)) = (subject, body.as_object_mut()) {
            map.insert(key.to_string(), value);
        }
        strip_nulls(body)
    }

    /// Create a contract. Returns its URI.
    pub async fn create_contract(&self, request: &CreateContractRequest) -> Result<String, LcnApiError> {
        self.post("POST /consent-flow-contract", &["consent-flow-contract"], request)
            .await
    }

    pub async fn get_contract(
        &self,
        uri: &LcnUri,
    ) -> Result<Option<ConsentFlowContractDetails>, LcnApiError> {
        let endpoint = "GET /consent-flow-contract";
        let url = self.transport.url_with_query(
            endpoint,
            &["consent-flow-contract"],
            &[("uri", uri.to_string())],
        )?;
        self.transport
            .send_optional(endpoint, || self.transport.http().get(url.clone()))
            .await
    }

    /// Contracts owned by the caller.
    pub async fn get_contracts(
        &self,
        options: &ContractListOptions,
    ) -> Result<Paginated<ConsentFlowContractDetails>, LcnApiError> {
        let body = Self::listing(None, options);
        self.post("POST /consent-flow-contracts", &["consent-flow-contracts"], &body)
            .await
    }

    pub async fn delete_contract(&self, uri: &LcnUri) -> Result<bool, LcnApiError> {
        let endpoint = "DELETE /consent-flow-contract";
        let url = self.transport.url_with_query(
            endpoint,
            &["consent-flow-contract"],
            &[("uri", uri.to_string())],
        )?;
        self.transport
            .send_json(endpoint, || self.transport.http().delete(url.clone()))
            .await
    }

    /// Consent to `contract_uri`. Returns the URI of the new terms.
    pub async fn consent_to_contract(
        &self,
        contract_uri: &LcnUri,
        request: &ConsentToContractRequest,
    ) -> Result<String, LcnApiError> {
        let body = ConsentBody {
            contract_uri,
            request,
        };
        self.post(
            "POST /consent-flow-contract/consent",
            &["consent-flow-contract", "consent"],
            &body,
        )
        .await
    }

    pub async fn get_consented_contracts(
        &self,
        options: &ContractListOptions,
    ) -> Result<Paginated<ConsentedContract>, LcnApiError> {
        let body = Self::listing(None, options);
        self.post(
            "POST /consent-flow-contracts/consent",
            &["consent-flow-contracts", "consent"],
            &body,
        )
        .await
    }

    /// Replace the terms at `terms_uri`.
    pub async fn update_contract_terms(
        &self,
        terms_uri: &LcnUri,
        request: &ConsentToContractRequest,
    ) -> Result<bool, LcnApiError> {
        let body = UpdateTermsBody {
            uri: terms_uri,
            request,
        };
        self.post(
            "POST /consent-flow-contract/consent/update",
            &["consent-flow-contract", "consent", "update"],
            &body,
        )
        .await
    }

    pub async fn withdraw_consent(&self, terms_uri: &LcnUri) -> Result<bool, LcnApiError> {
        self.post(
            "POST /consent-flow-contract/consent/withdraw",
            &["consent-flow-contract", "consent", "withdraw"],
            &json!({ "uri": terms_uri }),
        )
        .await
    }

    pub async fn get_terms_transaction_history(
        &self,
        terms_uri: &LcnUri,
        options: &ContractListOptions,
    ) -> Result<Paginated<ConsentFlowTransaction>, LcnApiError> {
        let body = Self::listing(Some(("uri", json!(terms_uri))), options);
        self.post(
            "POST /consent-flow-contract/consent/history",
            &["consent-flow-contract", "consent", "history"],
            &body,
        )
        .await
    }

    /// Data shared with the contract at `uri` by its consenters.
    pub async fn get_consented_data_for_contract(
        &self,
        uri: &LcnUri,
        options: &ContractListOptions,
    ) -> Result<Paginated<ConsentFlowContractData>, LcnApiError> {
        let body = Self::listing(Some(("uri", json!(uri))), options);
        self.post(
            "POST /consent-flow-contract/data",
            &["consent-flow-contract", "data"],
            &body,
        )
        .await
    }

    /// Data `did` shared with the caller's contracts.
    pub async fn get_consented_data_for_did(
        &self,
        did: &Did,
        options: &ContractListOptions,
    ) -> Result<Paginated<ConsentFlowContractDataForDid>, LcnApiError> {
        let body = Self::listing(Some(("did", json!(did))), options);
        self.post(
            "POST /consent-flow-contract/data-for-did",
            &["consent-flow-contract", "data-for-did"],
            &body,
        )
        .await
    }

    /// Write a credential to a consenter. Returns the credential URI.
    pub async fn write_credential_to_contract(
        &self,
        request: &WriteCredentialRequest,
    ) -> Result<String, LcnApiError> {
        self.post(
            "POST /consent-flow-contract/write",
            &["consent-flow-contract", "write"],
            request,
        )
        .await
    }

    /// Whether `profile_id` currently consents to the contract at `uri`.
    pub async fn verify_consent(&self, uri: &LcnUri, profile_id: &ProfileId) -> Result<bool, LcnApiError> {
        let endpoint = "GET /consent-flow-contract/verify";
        let url = self.transport.url_with_query(
            endpoint,
            &["consent-flow-contract", "verify"],
            &[("uri", uri.to_string()), ("profileId", profile_id.to_string())],
        )?;
        self.transport
            .send_json(endpoint, || self.transport.http().get(url.clone()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_decode_as_empty() {
        let contract: ConsentFlowContract = serde_json::from_value(json!({})).unwrap();
        assert!(contract.read.credentials.categories.is_empty());
        assert!(contract.write.personal.is_empty());
        assert_eq!(
            serde_json::to_value(&contract).unwrap(),
            json!({
                "read": {"credentials": {"categories": {}}, "personal": {}},
                "write": {"credentials": {"categories": {}}, "personal": {}}
            })
        );
    }

    #[test]
    fn full_contract_round_trips() {
        let raw = json!({
            "read": {
                "anonymize": true,
                "credentials": {"categories": {"Achievement": {"required": true, "defaultEnabled": true}}},
                "personal": {"name": {"required": false}}
            },
            "write": {
                "credentials": {"categories": {"ID": {"required": false}}},
                "personal": {}
            },
            "version": 2
        });
        let contract: ConsentFlowContract = serde_json::from_value(raw.clone()).unwrap();
        assert!(contract.read.credentials.categories["Achievement"].required);
        assert_eq!(contract.additional_properties["version"], 2);
        assert_eq!(serde_json::to_value(&contract).unwrap(), raw);
    }

    #[test]
    fn consent_body_flattens_terms() {
        let uri: LcnUri = "lc:network:network.learncard.com/trpc:contract:c1".parse().unwrap();
        let mut request = ConsentToContractRequest {
            one_time: Some(true),
            ..Default::default()
        };
        request
            .terms
            .read
            .personal
            .insert("name".into(), "Ada".into());
        let body = serde_json::to_value(ConsentBody {
            contract_uri: &uri,
            request: &request,
        })
        .unwrap();
        assert_eq!(body["contractUri"], "lc:network:network.learncard.com/trpc:contract:c1");
        assert_eq!(body["oneTime"], true);
        assert_eq!(body["terms"]["read"]["personal"]["name"], "Ada");
        assert!(body.get("expiresAt").is_none());
    }

    #[test]
    fn unknown_transaction_action_survives() {
        let tx: ConsentFlowTransaction = serde_json::from_value(json!({
            "id": "t1", "action": "archive", "date": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(tx.action, ConsentFlowTransactionAction::Other("archive".into()));
    }
}
