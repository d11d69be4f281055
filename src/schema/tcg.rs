//! Compiled game schemas.
//!
//! A `TcgSchema` is a validated `TcgConfig` plus a lookup table from comment
//! code to the slot it fills. The decoder dispatches every token through
//! that table, so a duplicate code would silently overwrite another field.
//! Compilation rejects duplicates instead.

use rustc_hash::FxHashMap;

use super::code::CommentCode;
use super::common::LANGUAGES;
use super::config::{OptionSet, TcgConfig};
use super::field::{FieldKind, VariantField};
use crate::codec::vocabulary;
use crate::error::{Result, SchemaError};

/// Key of the fallback schema used for unknown games.
pub const DEFAULT_SCHEMA_KEY: &str = "default";

/// What a comment code decodes into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldSlot {
    /// `RA`, translated through the rarity vocabulary.
    Rarity,
    /// `LO`, translated through the location vocabulary.
    Location,
    /// `LA`, passed through.
    Language,
    /// `QU`, passed through.
    Quality,
    /// A variant field, by index into `variant_fields`.
    Variant(usize),
}

impl FieldSlot {
    /// Attribute name in decoded details for the universal slots.
    #[must_use]
    pub fn universal_name(self) -> Option<&'static str> {
        match self {
            FieldSlot::Rarity => Some("rarity"),
            FieldSlot::Location => Some("location"),
            FieldSlot::Language => Some("language"),
            FieldSlot::Quality => Some("quality"),
            FieldSlot::Variant(_) => None,
        }
    }
}

/// A game schema ready for decoding.
#[derive(Clone, Debug)]
pub struct TcgSchema {
    config: TcgConfig,
    slots: FxHashMap<CommentCode, FieldSlot>,
}

impl TcgSchema {
    /// Validate a config and build its code index.
    pub fn compile(config: TcgConfig) -> Result<Self> {
        if config.key.trim().is_empty() {
            return Err(SchemaError::EmptyKey);
        }

        check_reserved(&config.key, "rarity", &config.rarity, CommentCode::RARITY)?;
        check_reserved(&config.key, "language", &config.language, CommentCode::LANGUAGE)?;

        let mut slots = FxHashMap::default();
        slots.insert(CommentCode::RARITY, FieldSlot::Rarity);
        slots.insert(CommentCode::LOCATION, FieldSlot::Location);
        slots.insert(CommentCode::LANGUAGE, FieldSlot::Language);
        slots.insert(CommentCode::QUALITY, FieldSlot::Quality);

        for (index, field) in config.variant_fields.iter().enumerate() {
            check_field(&config.key, field)?;

            if let Some(existing) = slots.insert(field.comment_code, FieldSlot::Variant(index)) {
                let first = match existing {
                    FieldSlot::Variant(i) => config.variant_fields[i].name.clone(),
                    other => other.universal_name().unwrap_or_default().to_string(),
                };
                return Err(SchemaError::DuplicateCommentCode {
                    game: config.key.clone(),
                    code: field.comment_code.to_string(),
                    first,
                    second: field.name.clone(),
                });
            }
        }

        Ok(Self { config, slots })
    }

    /// The fallback schema: no variant fields, universal codes only.
    ///
    /// Accepts every rarity in the shared vocabulary and every language
    /// any built-in game prints in.
    #[must_use]
    pub fn fallback() -> Self {
        let config = TcgConfig::new(DEFAULT_SCHEMA_KEY, "Default")
            .with_rarities(vocabulary::rarity().names())
            .with_languages(LANGUAGES.iter().copied());
        let slots = [
            (CommentCode::RARITY, FieldSlot::Rarity),
            (CommentCode::LOCATION, FieldSlot::Location),
            (CommentCode::LANGUAGE, FieldSlot::Language),
            (CommentCode::QUALITY, FieldSlot::Quality),
        ]
        .into_iter()
        .collect();
        Self { config, slots }
    }

    /// Canonical game key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.config.key
    }

    /// Human-readable name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.config.display_name
    }

    /// Is this the fallback schema?
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.config.key == DEFAULT_SCHEMA_KEY
    }

    /// Variant fields, in configured order.
    #[must_use]
    pub fn variant_fields(&self) -> &[VariantField] {
        &self.config.variant_fields
    }

    /// Rarity option set.
    #[must_use]
    pub fn rarity(&self) -> &OptionSet {
        &self.config.rarity
    }

    /// Language option set.
    #[must_use]
    pub fn language(&self) -> &OptionSet {
        &self.config.language
    }

    /// The config this schema was compiled from.
    #[must_use]
    pub fn config(&self) -> &TcgConfig {
        &self.config
    }

    /// Look up the slot a code fills.
    #[must_use]
    pub fn slot(&self, code: CommentCode) -> Option<FieldSlot> {
        self.slots.get(&code).copied()
    }

    /// Get a variant field by slot index.
    #[must_use]
    pub fn variant(&self, index: usize) -> Option<&VariantField> {
        self.config.variant_fields.get(index)
    }

    /// Get a variant field by comment code.
    #[must_use]
    pub fn variant_by_code(&self, code: CommentCode) -> Option<&VariantField> {
        match self.slot(code)? {
            FieldSlot::Variant(i) => self.variant(i),
            _ => None,
        }
    }

    /// Get a variant field by attribute name.
    #[must_use]
    pub fn variant_by_name(&self, name: &str) -> Option<&VariantField> {
        self.config.get_variant(name)
    }

    /// Every comment code this schema claims, reserved codes included.
    pub fn codes(&self) -> impl Iterator<Item = CommentCode> + '_ {
        self.slots.keys().copied()
    }
}

fn check_reserved(
    game: &str,
    set: &'static str,
    options: &OptionSet,
    expected: CommentCode,
) -> Result<()> {
    if options.comment_code == expected {
        return Ok(());
    }
    Err(SchemaError::ReservedCodeMismatch {
        game: game.to_string(),
        set,
        expected: expected.to_string(),
        found: options.comment_code.to_string(),
    })
}

fn check_field(game: &str, field: &VariantField) -> Result<()> {
    if let FieldKind::Selection { options } = &field.kind {
        if options.is_empty() {
            return Err(SchemaError::EmptySelection {
                game: game.to_string(),
                field: field.name.clone(),
            });
        }
    }

    for (key, &value) in &field.modifiers {
        let applies = match &field.kind {
            FieldKind::Boolean => key == "true" || key == "false",
            FieldKind::Selection { options } => options.iter().any(|o| o == key),
            FieldKind::Text | FieldKind::Number => false,
        };
        if !applies {
            return Err(SchemaError::UnknownModifierKey {
                game: game.to_string(),
                field: field.name.clone(),
                key: key.clone(),
            });
        }
        if !value.is_finite() || value <= 0.0 {
            return Err(SchemaError::InvalidModifier {
                game: game.to_string(),
                field: field.name.clone(),
                key: key.clone(),
                value,
            });
        }
    }

    Ok(())
}
