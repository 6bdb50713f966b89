//! # lcn-cli: Command-Line Client for the LearnCard Network
//!
//! Provides the `lcn` command. Every subcommand is a thin layer over
//! [`lcn_client::LcnClient`]: it reads request documents from disk, calls
//! one client operation and prints the answer as pretty JSON.
//!
//! ## Subcommands
//!
//! - `lcn profile`: own profile, search, connections, invites, signing authorities.
//! - `lcn boost`: get, list, create, send, recipients.
//! - `lcn credential`: send, accept, list, issue, verify.
//! - `lcn storage`: store and resolve by URI.
//! - `lcn did-metadata`: add, get, list, update, delete.
//! - `lcn exchange`: encode/decode exchange ids, participate in exchanges.
//! - `lcn health`: reachability and network DID.
//!
//! ## Connection
//!
//! ```bash
//! export LCN_API_TOKEN=...
//! lcn profile show
//! lcn --api-url http://localhost:4000/api storage resolve lc:network:...:credential:1
//! ```
//!
//! Request documents are JSON, or YAML when the file ends in `.yaml`/`.yml`.

pub mod boost;
pub mod credential;
pub mod did_metadata;
pub mod exchange;
pub mod health;
pub mod profile;
pub mod storage;

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use lcn_client::config::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use lcn_client::{LcnApiConfig, LcnClient};

/// Connection settings shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Base URL of the network API, including its path prefix.
    #[arg(long, env = "LCN_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: Url,

    /// Bearer token (API key or auth-grant token).
    #[arg(long, env = "LCN_API_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, env = "LCN_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,
}

impl ConnectionArgs {
    /// Client configuration. Fails without a token unless `require_token` is false.
    pub fn config(&self, require_token: bool) -> Result<LcnApiConfig> {
        let token = match self.token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => token.to_string(),
            _ if require_token => bail!("an API token is required: pass --token or set LCN_API_TOKEN"),
            _ => String::new(),
        };
        let mut config = LcnApiConfig::new(self.api_url.clone(), token);
        config.timeout_secs = self.timeout_secs;
        Ok(config)
    }

    /// Authenticated client.
    pub fn client(&self) -> Result<LcnClient> {
        let config = self.config(true)?;
        tracing::debug!(api_url = %config.api_url, "connecting to LearnCard Network");
        LcnClient::new(config).context("failed to build LearnCard Network client")
    }
}

/// Read a request document. YAML when the extension says so, JSON otherwise.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        bail!("file not found: {}", path.display());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read file: {}", path.display()))?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse YAML: {}", path.display())),
        _ => serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON: {}", path.display())),
    }
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render JSON")?;
    println!("{rendered}");
    Ok(())
}

/// Print an optional resource, or a NOT FOUND line. Returns the exit code.
pub fn print_optional<T: Serialize>(value: Option<&T>, what: &str) -> Result<u8> {
    match value {
        Some(value) => {
            print_json(value)?;
            Ok(0)
        }
        None => {
            println!("NOT FOUND: {what}");
            Ok(1)
        }
    }
}

/// Print a boolean outcome as `OK:`/`FAIL:`. Returns the exit code.
pub fn report(ok: bool, action: &str) -> u8 {
    if ok {
        println!("OK: {action}");
        0
    } else {
        println!("FAIL: {action}");
        1
    }
}
