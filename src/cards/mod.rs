//! Card attributes and decoded details.
//!
//! ## Key Types
//!
//! - `AttributeKey`: Attribute name (`rarity`, `firstEdition`, ...)
//! - `AttributeValue`: Text, flag or number
//! - `CardDetails`: Flat attribute map returned by the codec

pub mod attributes;
pub mod details;

pub use attributes::{AttributeKey, AttributeValue};
pub use details::CardDetails;
