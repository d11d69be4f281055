//! Variant field descriptors.
//!
//! A variant field is a game-specific attribute beyond the universal set
//! (first edition, foil, finish). The field kind decides how a raw value
//! decodes.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::code::CommentCode;
use crate::cards::AttributeValue;

/// Detail-string values that decode to `true` for a boolean field.
pub const TRUE_TOKENS: [&str; 3] = ["YE", "true", "1"];

/// Value written for a `true` boolean field.
pub const ENCODED_TRUE: &str = "YE";

/// Value written for a `false` boolean field.
pub const ENCODED_FALSE: &str = "NO";

/// Field type, with the option list carried by `Selection`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    /// Yes/no flag.
    Boolean,
    /// Free text.
    Text,
    /// Numeric value, kept as the raw string.
    Number,
    /// One of a fixed option list.
    Selection { options: Vec<String> },
}

impl FieldKind {
    /// Decode a raw detail-string value.
    ///
    /// Boolean fields read `YE`, `true` or `1` as `true` and anything else as
    /// `false`. Every other kind passes the raw string through.
    #[must_use]
    pub fn decode(&self, raw: &str) -> AttributeValue {
        match self {
            FieldKind::Boolean => AttributeValue::Bool(TRUE_TOKENS.contains(&raw)),
            FieldKind::Text | FieldKind::Number | FieldKind::Selection { .. } => {
                AttributeValue::Text(raw.to_string())
            }
        }
    }

    /// Options for a selection field; empty for other kinds.
    #[must_use]
    pub fn options(&self) -> &[String] {
        match self {
            FieldKind::Selection { options } => options,
            _ => &[],
        }
    }

    /// Short lowercase name, matching the serialized `type` tag.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Boolean => "boolean",
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Selection { .. } => "selection",
        }
    }
}

/// A game-specific attribute and how it is coded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantField {
    /// Attribute name in decoded details (`firstEdition`).
    pub name: String,

    /// Field type.
    #[serde(flatten)]
    pub kind: FieldKind,

    /// Code tagging this field in a detail string.
    pub comment_code: CommentCode,

    /// Price multipliers keyed by option name, or by `"true"`/`"false"`
    /// for boolean fields.
    #[serde(default, skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub modifiers: FxHashMap<String, f64>,
}

impl VariantField {
    /// Create a field of any kind.
    pub fn new(name: impl Into<String>, kind: FieldKind, comment_code: CommentCode) -> Self {
        Self {
            name: name.into(),
            kind,
            comment_code,
            modifiers: FxHashMap::default(),
        }
    }

    /// Create a boolean field.
    pub fn boolean(name: impl Into<String>, comment_code: CommentCode) -> Self {
        Self::new(name, FieldKind::Boolean, comment_code)
    }

    /// Create a text field.
    pub fn text(name: impl Into<String>, comment_code: CommentCode) -> Self {
        Self::new(name, FieldKind::Text, comment_code)
    }

    /// Create a number field.
    pub fn number(name: impl Into<String>, comment_code: CommentCode) -> Self {
        Self::new(name, FieldKind::Number, comment_code)
    }

    /// Create a selection field.
    pub fn selection<I, S>(name: impl Into<String>, comment_code: CommentCode, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = options.into_iter().map(Into::into).collect();
        Self::new(name, FieldKind::Selection { options }, comment_code)
    }

    /// Add a price modifier.
    #[must_use]
    pub fn with_modifier(mut self, key: impl Into<String>, multiplier: f64) -> Self {
        self.modifiers.insert(key.into(), multiplier);
        self
    }

    /// Decode a raw value for this field.
    #[must_use]
    pub fn decode(&self, raw: &str) -> AttributeValue {
        self.kind.decode(raw)
    }

    /// Modifier applying to a decoded value, if any.
    #[must_use]
    pub fn modifier_for(&self, value: &AttributeValue) -> Option<f64> {
        let key = match value {
            AttributeValue::Bool(true) => "true",
            AttributeValue::Bool(false) => "false",
            AttributeValue::Text(s) => s.as_str(),
            AttributeValue::Number(_) => return None,
        };
        self.modifiers.get(key).copied()
    }
}
