//! # Wire Round-Trip
//!
//! Every request and response model of the network API is a serde type
//! whose JSON form is the contract. [`WireModel`] is implemented for all of
//! them through a blanket impl and provides the four conversions callers
//! need: from/to a JSON string and from/to a `serde_json::Value` tree.
//!
//! ## Overflow
//!
//! Extensible schemas flatten an [`AdditionalProperties`] map into
//! themselves:
//!
//! ```
//! use lcn_core::{AdditionalProperties, WireModel};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! struct Display {
//!     #[serde(default, skip_serializing_if = "Option::is_none")]
//!     font_color: Option<String>,
//!     #[serde(flatten)]
//!     additional_properties: AdditionalProperties,
//! }
//!
//! let raw = r##"{"fontColor":"#fff","glow":true}"##;
//! let display = Display::from_json(raw).unwrap();
//! assert_eq!(display.additional_properties["glow"], true);
//! assert_eq!(display.to_json().unwrap(), raw);
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::WireError;

/// Keys present on the wire but not declared by the model.
pub type AdditionalProperties = serde_json::Map<String, Value>;

/// JSON round-trip for API models.
pub trait WireModel: Serialize + DeserializeOwned {
    /// Decode from a JSON string.
    fn from_json(raw: &str) -> Result<Self, WireError> {
        serde_json::from_str(raw).map_err(|source| WireError::Decode {
            model: std::any::type_name::<Self>(),
            source,
        })
    }

    /// Encode to a compact JSON string.
    fn to_json(&self) -> Result<String, WireError> {
        serde_json::to_string(self).map_err(|source| WireError::Encode {
            model: std::any::type_name::<Self>(),
            source,
        })
    }

    /// Decode from a JSON value tree.
    fn from_value(value: Value) -> Result<Self, WireError> {
        serde_json::from_value(value).map_err(|source| WireError::Decode {
            model: std::any::type_name::<Self>(),
            source,
        })
    }

    /// Encode to a JSON value tree.
    fn to_value(&self) -> Result<Value, WireError> {
        serde_json::to_value(self).map_err(|source| WireError::Encode {
            model: std::any::type_name::<Self>(),
            source,
        })
    }
}

impl<T: Serialize + DeserializeOwned> WireModel for T {}
