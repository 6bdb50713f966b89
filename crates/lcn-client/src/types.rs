//! # Shared Types
//!
//! Re-exports the identifier newtypes and wire trait from [`lcn_core`] so
//! that consumers of `lcn-client` need only one import path, and defines
//! the pagination envelope every list endpoint shares.

use serde::{Deserialize, Serialize};

pub use lcn_core::{AdditionalProperties, Did, LcnUri, ProfileId, SigningAuthorityName, WireModel};

/// Cursor-paginated response envelope.
///
/// `cursor` is absent on the last page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    pub has_more: bool,
    // A bare `default` would require `T: Default`.
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl<T> Paginated<T> {
    /// Cursor to pass to the next call, if another page exists.
    pub fn next_cursor(&self) -> Option<&str> {
        if self.has_more {
            self.cursor.as_deref()
        } else {
            None
        }
    }
}

/// Page size and cursor for list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl PaginationOptions {
    /// First page with the given size.
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            cursor: None,
        }
    }

    /// Same page size, starting after `cursor`.
    pub fn after(&self, cursor: impl Into<String>) -> Self {
        Self {
            limit: self.limit,
            cursor: Some(cursor.into()),
        }
    }

    /// Render as query-string pairs for GET endpoints.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", list_limit(Some(limit)).to_string()));
        }
        if let Some(cursor) = &self.cursor {
            pairs.push(("cursor", cursor.clone()));
        }
        pairs
    }
}

/// Response of the `count` endpoints, which answer with a bare number.
pub type Count = u64;

/// Page size the list endpoints use when none is given.
pub const DEFAULT_LIST_LIMIT: u32 = 25;

/// Clamp a list page size into the `1..100` range the service accepts.
pub(crate) fn list_limit(limit: Option<u32>) -> u32 {
    limit.unwrap_or(DEFAULT_LIST_LIMIT).clamp(1, 99)
}

/// Drop top-level `null` members so unset options are omitted from a
/// request body assembled with `json!`.
pub(crate) fn strip_nulls(mut value: serde_json::Value) -> serde_json::Value {
    if let Some(map) = value.as_object_mut() {
        map.retain(|_, v| !v.is_null());
    }
    value
}
