//! Declarative game configuration.
//!
//! Each supported trading-card game is described by a `TcgConfig`:
//! - `variant_fields`: Game-specific attributes, in display order
//! - `rarity` / `language`: Option sets, coded `RA` / `LA`
//! - `collection_names` / `storage_folder`: Opaque metadata for the backend
//!
//! Configs are plain data. They are built in code with `with_*` methods or
//! deserialized from JSON, then compiled into a `TcgSchema` on registration.

use serde::{Deserialize, Serialize};

use super::code::CommentCode;
use super::field::VariantField;

/// Options for a universal attribute plus the code it travels under.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionSet {
    /// Accepted values, in display order.
    pub options: Vec<String>,

    /// Code tagging this attribute in a detail string.
    pub comment_code: CommentCode,
}

impl OptionSet {
    /// Create an option set.
    pub fn new<I, S>(comment_code: CommentCode, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            comment_code,
        }
    }

    /// Rarity option set (`RA`).
    pub fn rarity<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(CommentCode::RARITY, options)
    }

    /// Language option set (`LA`).
    pub fn language<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(CommentCode::LANGUAGE, options)
    }

    /// Check whether `value` is one of the options.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.options.iter().any(|o| o == value)
    }
}

/// Configuration for one trading-card game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TcgConfig {
    /// Canonical game key (`"pokemon"`, `"yu-gi-oh"`).
    pub key: String,

    /// Human-readable name (for display).
    #[serde(default)]
    pub display_name: String,

    /// Game-specific attributes.
    #[serde(default)]
    pub variant_fields: Vec<VariantField>,

    /// Rarity options.
    pub rarity: OptionSet,

    /// Language options.
    pub language: OptionSet,

    /// Backend collection names. Not interpreted here.
    #[serde(default)]
    pub collection_names: Vec<String>,

    /// Backend storage folder. Not interpreted here.
    #[serde(default)]
    pub storage_folder: Option<String>,
}

impl TcgConfig {
    /// Create a config with no variant fields and empty option sets.
    pub fn new(key: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            variant_fields: Vec::new(),
            rarity: OptionSet::rarity(Vec::<String>::new()),
            language: OptionSet::language(Vec::<String>::new()),
            collection_names: Vec::new(),
            storage_folder: None,
        }
    }

    /// Add a variant field.
    #[must_use]
    pub fn with_variant(mut self, field: VariantField) -> Self {
        self.variant_fields.push(field);
        self
    }

    /// Set the rarity options.
    #[must_use]
    pub fn with_rarities<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rarity = OptionSet::rarity(options);
        self
    }

    /// Set the language options.
    #[must_use]
    pub fn with_languages<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.language = OptionSet::language(options);
        self
    }

    /// Add a backend collection name.
    #[must_use]
    pub fn with_collection(mut self, name: impl Into<String>) -> Self {
        self.collection_names.push(name.into());
        self
    }

    /// Set the backend storage folder.
    #[must_use]
    pub fn with_storage_folder(mut self, folder: impl Into<String>) -> Self {
        self.storage_folder = Some(folder.into());
        self
    }

    /// Get a variant field by name.
    #[must_use]
    pub fn get_variant(&self, name: &str) -> Option<&VariantField> {
        self.variant_fields.iter().find(|f| f.name == name)
    }
}

/// A catalog document: every game a deployment supports.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Game configurations.
    pub games: Vec<TcgConfig>,
}
