//! Detail-string decoding.
//!
//! Decoding is best-effort by default: unknown games fall back to the
//! default schema, unmapped rarity/location codes pass through raw, and
//! unknown codes or malformed segments are dropped. Callers that want to
//! know what was dropped use `decode_report`; callers that want to refuse
//! such input opt into strict mode.

use super::tokenizer::{self, Segment, Token};
use super::vocabulary;
use crate::cards::CardDetails;
use crate::error::{DecodeError, DecodeIssue};
use crate::schema::common::{LANGUAGE, LOCATION, QUALITY, RARITY};
use crate::schema::{catalog, FieldSlot, SchemaRegistry, TcgSchema, DEFAULT_SCHEMA_KEY};

/// How `DetailCodec::decode_checked` treats problems.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecodeMode {
    /// Drop what cannot be decoded.
    #[default]
    Lenient,
    /// Reject the whole string on any problem.
    Strict,
}

/// Lenient decode output plus everything that was dropped or passed through.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecodeReport {
    /// Decoded attributes, identical to what `decode` returns.
    pub details: CardDetails,
    /// Problems found, in input order.
    pub issues: Vec<DecodeIssue>,
}

impl DecodeReport {
    /// True when nothing was dropped or passed through unmapped.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Decoder and encoder bound to a schema registry.
///
/// ## Example
///
/// ```
/// use tcg_inventory::codec::DetailCodec;
///
/// let codec = DetailCodec::builtin();
/// let details = codec.decode("RA:UR/LA:EN/FE:YE", "pokemon");
///
/// assert_eq!(details.text("rarity"), Some("Ultra Rare"));
/// assert_eq!(details.text("language"), Some("EN"));
/// assert_eq!(details.flag("firstEdition"), Some(true));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DetailCodec<'r> {
    registry: &'r SchemaRegistry,
    mode: DecodeMode,
}

impl DetailCodec<'static> {
    /// Codec over the built-in catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(catalog())
    }
}

impl<'r> DetailCodec<'r> {
    /// Codec over any registry, in lenient mode.
    #[must_use]
    pub fn new(registry: &'r SchemaRegistry) -> Self {
        Self {
            registry,
            mode: DecodeMode::Lenient,
        }
    }

    /// Set the mode used by `decode_checked`.
    #[must_use]
    pub fn with_mode(mut self, mode: DecodeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> DecodeMode {
        self.mode
    }

    /// The registry this codec resolves games in.
    #[must_use]
    pub fn registry(&self) -> &'r SchemaRegistry {
        self.registry
    }

    /// Decode a detail string. Never fails.
    #[must_use]
    pub fn decode(&self, details: &str, tcg_key: &str) -> CardDetails {
        let schema = self.schema_for(tcg_key);
        let mut decoded = CardDetails::new();
        for token in tokenizer::tokenize(details) {
            if apply(schema, &token, &mut decoded).is_none() {
                log::trace!(
                    "dropping {}:{:?}: no field in schema {:?}",
                    token.code,
                    token.value,
                    schema.key()
                );
            }
        }
        decoded
    }

    /// Decode leniently and list every problem found.
    #[must_use]
    pub fn decode_report(&self, details: &str, tcg_key: &str) -> DecodeReport {
        let schema = self.schema_for(tcg_key);
        let mut report = DecodeReport::default();

        if !self.is_known(tcg_key) {
            report.issues.push(DecodeIssue::UnknownGame(tcg_key.to_string()));
        }

        for segment in tokenizer::scan(details) {
            let token = match segment {
                Segment::Token(token) => token,
                Segment::Malformed(text) => {
                    log::trace!("ignoring malformed segment {text:?}");
                    report.issues.push(DecodeIssue::Malformed(text.to_string()));
                    continue;
                }
            };

            match apply(schema, &token, &mut report.details) {
                Some(FieldSlot::Rarity) if vocabulary::rarity().name_for(token.value).is_none() => {
                    report
                        .issues
                        .push(DecodeIssue::UnmappedRarity(token.value.to_string()));
                }
                Some(FieldSlot::Location)
                    if vocabulary::location().name_for(token.value).is_none() =>
                {
                    report
                        .issues
                        .push(DecodeIssue::UnmappedLocation(token.value.to_string()));
                }
                Some(_) => {}
                None => report.issues.push(DecodeIssue::UnknownCode {
                    code: token.code.to_string(),
                    value: token.value.to_string(),
                }),
            }
        }

        report
    }

    /// Decode, rejecting the string if any problem is found.
    pub fn decode_strict(&self, details: &str, tcg_key: &str) -> Result<CardDetails, DecodeError> {
        let report = self.decode_report(details, tcg_key);
        if report.is_clean() {
            Ok(report.details)
        } else {
            Err(DecodeError {
                issues: report.issues,
            })
        }
    }

    /// Decode according to the configured mode.
    ///
    /// Lenient mode always succeeds with the same output as `decode`.
    pub fn decode_checked(&self, details: &str, tcg_key: &str) -> Result<CardDetails, DecodeError> {
        match self.mode {
            DecodeMode::Lenient => Ok(self.decode(details, tcg_key)),
            DecodeMode::Strict => self.decode_strict(details, tcg_key),
        }
    }

    pub(crate) fn schema_for(&self, tcg_key: &str) -> &'r TcgSchema {
        let schema = self.registry.get_or_default(tcg_key);
        if !self.is_known(tcg_key) {
            log::debug!("unknown game key {tcg_key:?}; using default schema");
        }
        schema
    }

    /// Registered games, plus the default schema asked for by name.
    fn is_known(&self, tcg_key: &str) -> bool {
        tcg_key == DEFAULT_SCHEMA_KEY || self.registry.contains(tcg_key)
    }
}

/// Decode one token into `out`. Returns the slot filled, or `None` when the
/// schema has no field for the code.
fn apply(schema: &TcgSchema, token: &Token<'_>, out: &mut CardDetails) -> Option<FieldSlot> {
    let slot = schema.slot(token.code)?;
    match slot {
        FieldSlot::Rarity => {
            out.insert(RARITY, vocabulary::rarity().decode(token.value));
        }
        FieldSlot::Location => {
            out.insert(LOCATION, vocabulary::location().decode(token.value));
        }
        // Language and quality are stored as-is, with no vocabulary.
        FieldSlot::Language => {
            out.insert(LANGUAGE, token.value);
        }
        FieldSlot::Quality => {
            out.insert(QUALITY, token.value);
        }
        FieldSlot::Variant(index) => {
            let field = schema.variant(index)?;
            out.insert(field.name.as_str(), field.decode(token.value));
        }
    }
    Some(slot)
}

/// Decode with the built-in catalog.
#[must_use]
pub fn decode(details: &str, tcg_key: &str) -> CardDetails {
    DetailCodec::builtin().decode(details, tcg_key)
}
