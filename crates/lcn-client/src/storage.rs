//! Network storage for credentials, presentations and JWE envelopes.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/storage/store` | Store item, returns its URI |
//! | GET    | `/storage/resolve?uri=` | Resolve URI to item |

use serde::Serialize;

use crate::error::LcnApiError;
use crate::http::Transport;
use crate::types::LcnUri;
use crate::vc::StoredItem;

#[derive(Serialize)]
struct StoreBody<'a> {
    item: &'a StoredItem,
}

/// Client for the storage routes.
#[derive(Debug, Clone)]
pub struct StorageClient {
    transport: Transport,
}

impl StorageClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Store `item`. Returns the URI it resolves from.
    pub async fn store(&self, item: &StoredItem) -> Result<String, LcnApiError> {
        let endpoint = "POST /storage/store";
        let url = self.transport.url(endpoint, &["storage", "store"])?;
        let body = StoreBody { item };
        self.transport
            .send_json(endpoint, || self.transport.http().post(url.clone()).json(&body))
            .await
    }

    pub async fn resolve(&self, uri: &LcnUri) -> Result<StoredItem, LcnApiError> {
        let endpoint = "GET /storage/resolve";
        let url = self.transport.url_with_query(
            endpoint,
            &["storage", "resolve"],
            &[("uri", uri.to_string())],
        )?;
        self.transport
            .send_json(endpoint, || self.transport.http().get(url.clone()))
            .await
    }
}
