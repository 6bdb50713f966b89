//! # lcn-client -- Typed Rust client for the LearnCard Network API
//!
//! Provides typed access to every resource group of the network's
//! verifiable-credential API:
//! - **Profiles** -- identity, search, connections, blocks, invites, managed profiles, signing authorities
//! - **Boosts** -- credential templates, sending, recipients, permissions, claim links
//! - **Claim hooks** -- side effects triggered when a boost is claimed
//! - **Credentials** and **Presentations** -- peer-to-peer delivery, issuance, verification
//! - **Contracts** -- ConsentFlow contracts, consent terms, shared data
//! - **DID metadata** -- fragments merged into a profile's DID document
//! - **Storage** -- store and resolve credentials by URI
//! - **Workflows** -- VC-API exchanges
//! - **Utilities** -- network DID and reachability
//!
//! ## Wire Fidelity
//!
//! Models serialize in camelCase, omit absent optional members, and keep
//! undeclared keys in a flattened `additional_properties` map, so a value
//! read from the network and written back is unchanged.
//!
//! ## Example
//!
//! ```no_run
//! use lcn_client::{LcnApiConfig, LcnClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = LcnClient::new(LcnApiConfig::from_env()?)?;
//! if let Some(profile) = client.profiles().get_profile().await? {
//!     println!("{} ({})", profile.profile_id, profile.did);
//! }
//! # Ok(())
//! # }
//! ```

pub mod boosts;
pub mod claim_hooks;
pub mod config;
pub mod contracts;
pub mod credentials;
pub mod did_metadata;
pub mod error;
pub(crate) mod http;
pub mod presentations;
pub mod profiles;
pub mod retry;
pub mod storage;
pub mod types;
pub mod utilities;
pub mod vc;
pub mod workflows;

pub use config::LcnApiConfig;
pub use error::LcnApiError;
pub use retry::RetryPolicy;
pub use types::{Did, LcnUri, Paginated, PaginationOptions, ProfileId};

use std::time::Duration;

use http::Transport;

/// Top-level LearnCard Network client. Holds one sub-client per resource group.
#[derive(Debug, Clone)]
pub struct LcnClient {
    profiles: profiles::ProfileClient,
    boosts: boosts::BoostClient,
    claim_hooks: claim_hooks::ClaimHookClient,
    credentials: credentials::CredentialClient,
    presentations: presentations::PresentationClient,
    contracts: contracts::ContractClient,
    did_metadata: did_metadata::DidMetadataClient,
    storage: storage::StorageClient,
    workflows: workflows::WorkflowClient,
    utilities: utilities::UtilityClient,
}

impl LcnClient {
    /// Create a new client from configuration.
    pub fn new(config: LcnApiConfig) -> Result<Self, LcnApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                let mut auth =
                    reqwest::header::HeaderValue::from_str(&format!("Bearer {}", config.api_token.as_str()))
                        .map_err(|_| LcnApiError::Config(config::ConfigError::MissingToken))?;
                auth.set_sensitive(true);
                headers.insert(reqwest::header::AUTHORIZATION, auth);
                headers
            })
            .build()
            .map_err(|e| LcnApiError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        let transport = Transport::new(http, config.api_url, config.retry);
        Ok(Self {
            profiles: profiles::ProfileClient::new(transport.clone()),
            boosts: boosts::BoostClient::new(transport.clone()),
            claim_hooks: claim_hooks::ClaimHookClient::new(transport.clone()),
            credentials: credentials::CredentialClient::new(transport.clone()),
            presentations: presentations::PresentationClient::new(transport.clone()),
            contracts: contracts::ContractClient::new(transport.clone()),
            did_metadata: did_metadata::DidMetadataClient::new(transport.clone()),
            storage: storage::StorageClient::new(transport.clone()),
            workflows: workflows::WorkflowClient::new(transport.clone()),
            utilities: utilities::UtilityClient::new(transport),
        })
    }

    /// Access the profile, connection and signing-authority client.
    pub fn profiles(&self) -> &profiles::ProfileClient {
        &self.profiles
    }

    pub fn boosts(&self) -> &boosts::BoostClient {
        &self.boosts
    }

    pub fn claim_hooks(&self) -> &claim_hooks::ClaimHookClient {
        &self.claim_hooks
    }

    pub fn credentials(&self) -> &credentials::CredentialClient {
        &self.credentials
    }

    pub fn presentations(&self) -> &presentations::PresentationClient {
        &self.presentations
    }

    /// Access the ConsentFlow contract client.
    pub fn contracts(&self) -> &contracts::ContractClient {
        &self.contracts
    }

    pub fn did_metadata(&self) -> &did_metadata::DidMetadataClient {
        &self.did_metadata
    }

    pub fn storage(&self) -> &storage::StorageClient {
        &self.storage
    }

    /// Access the VC-API exchange client.
    pub fn workflows(&self) -> &workflows::WorkflowClient {
        &self.workflows
    }

    pub fn utilities(&self) -> &utilities::UtilityClient {
        &self.utilities
    }

    /// Check reachability. See [`utilities::UtilityClient::health_check`].
    pub async fn health_check(&self) -> utilities::HealthCheckResult {
        self.utilities.health_check().await
    }
}
