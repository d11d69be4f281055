//! Card attribute keys and values.
//!
//! Decoded details are a flat map of attribute name to value. The codec
//! only ever writes `Text` and `Bool`; `Number` exists for the price and
//! quantity columns callers add before validating a stock entry.
//!
//! ## AttributeValue Types
//!
//! - `Text`: Strings (rarity name, language code, selection option)
//! - `Bool`: Flags (first edition, foil)
//! - `Number`: Prices and quantities

use serde::{Deserialize, Serialize};

/// Key for accessing card attributes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeKey(pub String);

impl AttributeKey {
    /// Create a new attribute key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AttributeKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AttributeKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::borrow::Borrow<str> for AttributeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Value for a card attribute.
///
/// Serialized untagged so a details map reads as plain JSON
/// (`{"rarity": "Ultra Rare", "firstEdition": true}`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Boolean flag (first edition, reverse holo).
    Bool(bool),
    /// Numeric value (price, quantity).
    Number(f64),
    /// Text value (rarity, language, selection option).
    Text(String),
}

impl AttributeValue {
    /// Get as bool if this is a Bool value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as a number, parsing text if needed.
    ///
    /// Prices typed into a form arrive as text, so `"4.50"` reads as `4.5`.
    /// NaN and infinities are not numbers here, parsed or stored.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            AttributeValue::Number(v) => *v,
            AttributeValue::Text(s) => s.trim().parse().ok()?,
            AttributeValue::Bool(_) => return None,
        };
        n.is_finite().then_some(n)
    }

    /// True for text that is empty or only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, AttributeValue::Text(s) if s.trim().is_empty())
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Bool(v)
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        AttributeValue::Number(v)
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        AttributeValue::Number(f64::from(v))
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Text(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_string())
    }
}
