//! Schema registry for game lookup.
//!
//! The `SchemaRegistry` stores every compiled game schema plus the fallback
//! schema. Lookups never fail: an unknown key resolves to the fallback, which
//! still decodes the four universal codes.

use rustc_hash::FxHashMap;

use super::config::{CatalogConfig, TcgConfig};
use super::tcg::{TcgSchema, DEFAULT_SCHEMA_KEY};
use crate::codec::normalize;
use crate::error::{Result, SchemaError};

/// Registry of game schemas.
///
/// ## Example
///
/// ```
/// use tcg_inventory::schema::{CommentCode, SchemaRegistry, TcgConfig, VariantField};
///
/// let mut registry = SchemaRegistry::new();
///
/// let foil = CommentCode::parse("FO").unwrap();
/// registry.register(
///     TcgConfig::new("mtg", "Magic: The Gathering")
///         .with_variant(VariantField::boolean("foil", foil)),
/// );
///
/// assert_eq!(registry.get("mtg").unwrap().variant_fields().len(), 1);
/// assert!(registry.get_or_default("chess").is_default());
/// ```
#[derive(Clone, Debug)]
pub struct SchemaRegistry {
    schemas: FxHashMap<String, TcgSchema>,
    fallback: TcgSchema,
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self {
            schemas: FxHashMap::default(),
            fallback: TcgSchema::fallback(),
        }
    }
}

impl SchemaRegistry {
    /// Create a registry holding only the fallback schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a registry from a JSON catalog document.
    ///
    /// The document has the shape `{"games": [TcgConfig, ...]}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: CatalogConfig = serde_json::from_str(json)?;
        Self::from_catalog(catalog)
    }

    /// Build a registry from a parsed catalog.
    pub fn from_catalog(catalog: CatalogConfig) -> Result<Self> {
        let mut registry = Self::new();
        for config in catalog.games {
            registry.try_register(config)?;
        }
        log::debug!("loaded catalog with {} game(s)", registry.len());
        Ok(registry)
    }

    /// Register a game config.
    ///
    /// Panics if the config is invalid or its key is already registered.
    /// Use for configuration written in code; see `try_register` for data
    /// loaded at runtime.
    pub fn register(&mut self, config: TcgConfig) {
        let key = config.key.clone();
        if let Err(err) = self.try_register(config) {
            panic!("invalid schema {key:?}: {err}");
        }
    }

    /// Register a game config, reporting invalid or duplicate configs.
    pub fn try_register(&mut self, config: TcgConfig) -> Result<()> {
        if config.key == DEFAULT_SCHEMA_KEY || self.schemas.contains_key(&config.key) {
            return Err(SchemaError::DuplicateGame(config.key));
        }
        let schema = TcgSchema::compile(config)?;
        self.schemas.insert(schema.key().to_string(), schema);
        Ok(())
    }

    /// Get a schema by canonical key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TcgSchema> {
        self.schemas.get(key)
    }

    /// Get a schema by canonical key, falling back to the default schema.
    #[must_use]
    pub fn get_or_default(&self, key: &str) -> &TcgSchema {
        self.get(key).unwrap_or(&self.fallback)
    }

    /// Resolve free-form game input.
    ///
    /// Tries the input as a canonical key, then its normalized alias, then
    /// falls back to the default schema.
    #[must_use]
    pub fn resolve_name(&self, input: &str) -> &TcgSchema {
        self.get(input)
            .or_else(|| normalize::normalize(input).and_then(|key| self.get(key)))
            .unwrap_or(&self.fallback)
    }

    /// The fallback schema.
    #[must_use]
    pub fn fallback(&self) -> &TcgSchema {
        &self.fallback
    }

    /// Check if a key is registered.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.schemas.contains_key(key)
    }

    /// Registered keys, sorted.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Number of registered games (the fallback is not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Check if no games are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Iterate over registered schemas.
    pub fn iter(&self) -> impl Iterator<Item = &TcgSchema> {
        self.schemas.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{CommentCode, VariantField};

    fn code(s: &str) -> CommentCode {
        CommentCode::parse(s).unwrap()
    }

    fn mtg() -> TcgConfig {
        TcgConfig::new("mtg", "Magic: The Gathering")
            .with_rarities(["Common", "Mythic Rare"])
            .with_variant(VariantField::boolean("foil", code("FO")))
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = SchemaRegistry::new();
        assert!(registry.is_empty());

        registry.register(mtg());

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("mtg"));
        assert_eq!(registry.get("mtg").unwrap().display_name(), "Magic: The Gathering");
        assert!(registry.get("pokemon").is_none());
    }

    #[test]
    fn test_get_or_default() {
        let mut registry = SchemaRegistry::new();
        registry.register(mtg());

        assert_eq!(registry.get_or_default("mtg").key(), "mtg");
        assert!(registry.get_or_default("nonexistent-game").is_default());
        assert!(registry.get_or_default("").is_default());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_key_panics() {
        let mut registry = SchemaRegistry::new();
        registry.register(mtg());
        registry.register(mtg());
    }

    #[test]
    fn test_try_register_errors() {
        let mut registry = SchemaRegistry::new();
        registry.try_register(mtg()).unwrap();

        assert_eq!(
            registry.try_register(mtg()),
            Err(SchemaError::DuplicateGame("mtg".into()))
        );
        assert_eq!(
            registry.try_register(TcgConfig::new("default", "Shadow")),
            Err(SchemaError::DuplicateGame("default".into()))
        );

        let broken = TcgConfig::new("broken", "Broken")
            .with_variant(VariantField::boolean("a", code("AA")))
            .with_variant(VariantField::boolean("b", code("AA")));
        assert!(matches!(
            registry.try_register(broken),
            Err(SchemaError::DuplicateCommentCode { .. })
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_resolve_name() {
        let mut registry = SchemaRegistry::new();
        registry.register(mtg());
        registry.register(TcgConfig::new("yu-gi-oh", "Yu-Gi-Oh!"));

        assert_eq!(registry.resolve_name("mtg").key(), "mtg");
        assert_eq!(registry.resolve_name("Magic: The Gathering").key(), "mtg");
        assert_eq!(registry.resolve_name("Yu-Gi-Oh!").key(), "yu-gi-oh");
        assert!(registry.resolve_name("Chess").is_default());
        // Known alias, but the game is not in this registry.
        assert!(registry.resolve_name("Pokémon").is_default());
    }

    #[test]
    fn test_keys_sorted() {
        let mut registry = SchemaRegistry::new();
        registry.register(TcgConfig::new("pokemon", "Pokémon"));
        registry.register(mtg());

        assert_eq!(registry.keys(), vec!["mtg", "pokemon"]);
        assert_eq!(registry.iter().count(), 2);
    }

    #[test]
    fn test_from_json() {
        let registry = SchemaRegistry::from_json(
            r#"{
                "games": [{
                    "key": "lorcana",
                    "displayName": "Disney Lorcana",
                    "variantFields": [
                        {"name": "foil", "type": "boolean", "commentCode": "FO",
                         "modifiers": {"true": 1.4}}
                    ],
                    "rarity": {"options": ["Common", "Enchanted"], "commentCode": "RA"},
                    "language": {"options": ["EN", "DE"], "commentCode": "LA"},
                    "collectionNames": ["lorcana_cards"],
                    "storageFolder": "lorcana"
                }]
            }"#,
        )
        .unwrap();

        let schema = registry.get("lorcana").unwrap();
        assert_eq!(schema.display_name(), "Disney Lorcana");
        assert_eq!(schema.variant_by_code(code("FO")).unwrap().name, "foil");
        assert_eq!(schema.config().storage_folder.as_deref(), Some("lorcana"));
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            SchemaRegistry::from_json("{not json"),
            Err(SchemaError::Parse(_))
        ));

        // Lower-case comment codes are rejected while parsing.
        assert!(matches!(
            SchemaRegistry::from_json(
                r#"{"games": [{"key": "x",
                    "variantFields": [{"name": "f", "type": "boolean", "commentCode": "fo"}],
                    "rarity": {"options": [], "commentCode": "RA"},
                    "language": {"options": [], "commentCode": "LA"}}]}"#
            ),
            Err(SchemaError::Parse(_))
        ));
    }
}
