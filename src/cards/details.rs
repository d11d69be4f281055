//! Decoded card details.
//!
//! `CardDetails` is what the codec hands back: a flat, caller-owned map of
//! attribute name to value. Keys that never appeared in the detail string
//! are absent; nothing is default-filled.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::attributes::{AttributeKey, AttributeValue};

/// Flat attribute map produced by decoding a detail string.
///
/// ## Example
///
/// ```
/// use tcg_inventory::cards::CardDetails;
///
/// let details = CardDetails::new()
///     .with_attr("rarity", "Ultra Rare")
///     .with_attr("firstEdition", true);
///
/// assert_eq!(details.text("rarity"), Some("Ultra Rare"));
/// assert_eq!(details.flag("firstEdition"), Some(true));
/// assert!(details.get("language").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardDetails {
    attrs: FxHashMap<AttributeKey, AttributeValue>,
}

impl CardDetails {
    /// Create an empty details map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set an attribute.
    #[must_use]
    pub fn with_attr(
        mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.insert(key, value);
        self
    }

    /// Set an attribute, returning the previous value.
    pub fn insert(
        &mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        self.attrs.insert(key.into(), value.into())
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.attrs.get(key)
    }

    /// Get a text attribute.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttributeValue::as_text)
    }

    /// Get a boolean attribute.
    #[must_use]
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(AttributeValue::as_bool)
    }

    /// Get a numeric attribute (numeric text included).
    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(AttributeValue::as_number)
    }

    /// Check whether an attribute is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Check if no attributes are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Iterate over attributes in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&AttributeKey, &AttributeValue)> {
        self.attrs.iter()
    }

    /// Attribute names, sorted. Handy for stable display and test output.
    #[must_use]
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.attrs.keys().map(AttributeKey::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Copy every attribute of `other` into `self`, overwriting on conflict.
    pub fn merge(&mut self, other: CardDetails) {
        self.attrs.extend(other.attrs);
    }
}

impl<K, V> FromIterator<(K, V)> for CardDetails
where
    K: Into<AttributeKey>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            attrs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for CardDetails {
    type Item = (AttributeKey, AttributeValue);
    type IntoIter = std::collections::hash_map::IntoIter<AttributeKey, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.attrs.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut details = CardDetails::new();
        assert!(details.is_empty());

        details.insert("quality", "NM");
        details.insert("foil", true);

        assert_eq!(details.len(), 2);
        assert_eq!(details.text("quality"), Some("NM"));
        assert_eq!(details.flag("foil"), Some(true));
        assert_eq!(details.flag("quality"), None);
        assert!(!details.contains("rarity"));
    }

    #[test]
    fn test_insert_overwrites() {
        let mut details = CardDetails::new().with_attr("rarity", "Rare");
        let previous = details.insert("rarity", "Ultra Rare");

        assert_eq!(previous, Some(AttributeValue::Text("Rare".into())));
        assert_eq!(details.text("rarity"), Some("Ultra Rare"));
    }

    #[test]
    fn test_from_iter_and_sorted_keys() {
        let details: CardDetails = [("quality", "NM"), ("language", "EN"), ("rarity", "Rare")]
            .into_iter()
            .collect();
        assert_eq!(details.sorted_keys(), vec!["language", "quality", "rarity"]);
    }

    #[test]
    fn test_merge() {
        let mut base = CardDetails::new().with_attr("price", 2.0).with_attr("quality", "EX");
        base.merge(CardDetails::new().with_attr("quality", "NM"));

        assert_eq!(base.text("quality"), Some("NM"));
        assert_eq!(base.number("price"), Some(2.0));
    }

    #[test]
    fn test_serialization() {
        let details = CardDetails::new().with_attr("firstEdition", true);
        let json = serde_json::to_string(&details).unwrap();
        assert_eq!(json, r#"{"firstEdition":true}"#);

        let deserialized: CardDetails = serde_json::from_str(&json).unwrap();
        assert_eq!(details, deserialized);
    }
}
