//! Network utilities and reachability.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/utilities/did` | The network's own DID |
//! | GET    | `/health-check` | Reachability check |

use crate::error::LcnApiError;
use crate::http::Transport;

/// Name reported for the network service in [`HealthCheckResult`].
pub const NETWORK_SERVICE: &str = "learncard-network";

/// Outcome of [`UtilityClient::health_check`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthCheckResult {
    /// Services that answered with any HTTP status.
    pub reachable: Vec<String>,
    /// Services that could not be reached, with the transport error.
    pub unreachable: Vec<(String, String)>,
}

impl HealthCheckResult {
    pub fn all_healthy(&self) -> bool {
        self.unreachable.is_empty()
    }
}

/// Client for the utility routes.
#[derive(Debug, Clone)]
pub struct UtilityClient {
    transport: Transport,
}

impl UtilityClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// DID the network signs and resolves as.
    pub async fn get_did(&self) -> Result<String, LcnApiError> {
        let endpoint = "GET /utilities/did";
        let url = self.transport.url(endpoint, &["utilities", "did"])?;
        self.transport
            .send_json(endpoint, || self.transport.http().get(url.clone()))
            .await
    }

    /// Check the network once, without retries.
    ///
    /// A 401 or 404 still proves the service is alive, so any HTTP response
    /// counts as reachable. Only transport failures count as unreachable.
    pub async fn health_check(&self) -> HealthCheckResult {
        let mut result = HealthCheckResult::default();
        let url = match self.transport.url("GET /health-check", &["health-check"]) {
            Ok(url) => url,
            Err(e) => {
                result.unreachable.push((NETWORK_SERVICE.to_string(), e.to_string()));
                return result;
            }
        };

        match self.transport.http().get(url).send().await {
            Ok(resp) => {
                tracing::debug!(status = resp.status().as_u16(), "health check answered");
                result.reachable.push(NETWORK_SERVICE.to_string());
            }
            Err(e) => {
                tracing::warn!(error = %e, "LearnCard Network unreachable");
                result.unreachable.push((NETWORK_SERVICE.to_string(), e.to_string()));
            }
        }
        result
    }
}
