//! Resending requests that failed before the service answered.
//!
//! A [`RetryPolicy`] lives on [`crate::LcnApiConfig`]. Only transport
//! failures (refused connection, reset, timeout) are resent, and only for
//! idempotent methods: a `POST` that timed out may already have sent a
//! credential, so it is attempted once and the error surfaces. Any HTTP
//! status, including 5xx, is returned to the caller as-is.

use std::time::Duration;

use reqwest::{Client, Method, Request, Response};

/// Attempts and backoff for transport failures.
///
/// The delay before resend `n` (counting from zero) is `base_delay * 2^n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Resends after the first attempt. Zero disables retrying.
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(200),
        }
    }
}

impl RetryPolicy {
    /// Never resend.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            base_delay: Duration::ZERO,
        }
    }

    /// Resends allowed for a request with `method`.
    pub fn retries_for(&self, method: &Method) -> u32 {
        if is_idempotent(method) {
            self.max_retries
        } else {
            0
        }
    }

    fn delay(&self, retry: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(retry))
    }
}

fn is_idempotent(method: &Method) -> bool {
    matches!(
        *method,
        Method::GET | Method::HEAD | Method::PUT | Method::DELETE | Method::OPTIONS
    )
}

/// Execute `request`, resending clones of it on transport errors as
/// `policy` allows.
///
/// A request whose body cannot be cloned is sent once.
pub(crate) async fn execute_with_retry(
    client: &Client,
    request: Request,
    policy: &RetryPolicy,
) -> Result<Response, reqwest::Error> {
    let retries = policy.retries_for(request.method());
    let mut retry = 0;
    loop {
        let spare = if retry < retries { request.try_clone() } else { None };
        let Some(next) = spare else {
            return client.execute(request).await;
        };
        match client.execute(next).await {
            Ok(resp) => return Ok(resp),
            Err(e) => {
                let delay = policy.delay(retry);
                retry += 1;
                tracing::warn!(
                    method = %request.method(),
                    retry,
                    max_retries = retries,
                    "LCN API request failed, resending in {delay:?}: {e}"
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}
