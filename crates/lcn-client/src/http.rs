//! Shared request plumbing for every resource-group client.
//!
//! Builds endpoint URLs from the configured base (percent-encoding path
//! segments and query values, since LearnCard URIs contain `/` and `:`),
//! sends requests under the configured [`RetryPolicy`], and maps the
//! response onto [`LcnApiError`] consistently.

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::LcnApiError;
use crate::retry::{execute_with_retry, RetryPolicy};

/// HTTP client, API base URL and retry policy, cloned into each
/// sub-client.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    http: reqwest::Client,
    base_url: Url,
    retry: RetryPolicy,
}

impl Transport {
    pub(crate) fn new(http: reqwest::Client, base_url: Url, retry: RetryPolicy) -> Self {
        Self {
            http,
            base_url,
            retry,
        }
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Append `segments` to the base URL path, encoding each one.
    pub(crate) fn url(&self, endpoint: &str, segments: &[&str]) -> Result<Url, LcnApiError> {
        self.url_with_query(endpoint, segments, &[])
    }

    /// Like [`Transport::url`], then append `query` pairs.
    pub(crate) fn url_with_query(
        &self,
        endpoint: &str,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<Url, LcnApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LcnApiError::InvalidRequest {
                endpoint: endpoint.into(),
                reason: format!("base URL {} cannot carry a path", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Send, resending under the retry policy, and return the response if
    /// its status is 2xx.
    async fn send_checked<F>(
        &self,
        endpoint: &str,
        build: F,
    ) -> Result<reqwest::Response, LcnApiError>
    where
        F: FnOnce() -> reqwest::RequestBuilder,
    {
        tracing::debug!(endpoint, "sending LCN API request");

        let http_error = |e: reqwest::Error| LcnApiError::Http {
            endpoint: endpoint.into(),
            source: e,
        };
        let request = build().build().map_err(http_error)?;
        let resp = execute_with_retry(&self.http, request, &self.retry)
            .await
            .map_err(http_error)?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::debug!(endpoint, status, "LCN API returned non-success status");
            return Err(LcnApiError::ApiError {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        Ok(resp)
    }

    async fn body_text(endpoint: &str, resp: reqwest::Response) -> Result<String, LcnApiError> {
        resp.text().await.map_err(|e| LcnApiError::Http {
            endpoint: endpoint.into(),
            source: e,
        })
    }

    /// Send and decode a JSON response body into `T`.
    pub(crate) async fn send_json<T, F>(&self, endpoint: &str, build: F) -> Result<T, LcnApiError>
    where
        T: DeserializeOwned,
        F: FnOnce() -> reqwest::RequestBuilder,
    {
        let resp = self.send_checked(endpoint, build).await?;
        let body = Self::body_text(endpoint, resp).await?;
        serde_json::from_str(&body).map_err(|e| LcnApiError::Deserialization {
            endpoint: endpoint.into(),
            source: e,
        })
    }

    /// Send and decode an optional resource.
    ///
    /// A 404 status, an empty body, or a JSON `null` all yield `None`.
    pub(crate) async fn send_optional<T, F>(
        &self,
        endpoint: &str,
        build: F,
    ) -> Result<Option<T>, LcnApiError>
    where
        T: DeserializeOwned,
        F: FnOnce() -> reqwest::RequestBuilder,
    {
        match self.send_checked(endpoint, build).await {
            Ok(resp) => {
                let body = Self::body_text(endpoint, resp).await?;
                if body.trim().is_empty() {
                    return Ok(None);
                }
                serde_json::from_str(&body).map_err(|e| LcnApiError::Deserialization {
                    endpoint: endpoint.into(),
                    source: e,
                })
            }
            Err(LcnApiError::ApiError { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
