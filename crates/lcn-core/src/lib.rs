//! # lcn-core: Foundational Types for the LearnCard Network Client
//!
//! Leaf crate of the workspace. It depends on no other `lcn-*` crate and
//! carries only what every other crate needs:
//!
//! 1. **Identifier newtypes.** [`Did`], [`ProfileId`], [`LcnUri`] and
//!    [`SigningAuthorityName`] validate their format at construction and
//!    serialize as plain strings.
//!
//! 2. **The wire round-trip trait.** [`WireModel`] gives every serde model
//!    `from_json` / `to_json` / `from_value` / `to_value`, and
//!    [`AdditionalProperties`] is the overflow map each extensible schema
//!    flattens into itself so undeclared keys survive a round trip.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod wire;

pub use error::{ValidationError, WireError};
pub use identity::{Did, LcnUri, ProfileId, SigningAuthorityName};
pub use wire::{AdditionalProperties, WireModel};
