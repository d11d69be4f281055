//! Detail-string encoding.
//!
//! Writes decoded details back into the compact form, in the order the
//! front end has always produced: `RA`, `LA`, `LO`, the game's variant
//! fields in schema order, then `QU`. Rarity and location are written as
//! vocabulary codes when the name is known and verbatim otherwise, so
//! anything `decode` produces encodes back to an equivalent string.

use super::decoder::DetailCodec;
use super::tokenizer::SEPARATOR;
use super::vocabulary::{self, Vocabulary};
use crate::cards::{AttributeValue, CardDetails};
use crate::error::EncodeError;
use crate::schema::common::{self, LANGUAGE, LOCATION, QUALITY, RARITY};
use crate::schema::field::{ENCODED_FALSE, ENCODED_TRUE};
use crate::schema::{CommentCode, FieldKind, TcgSchema};

impl<'r> DetailCodec<'r> {
    /// Encode details for a game.
    ///
    /// Empty values are skipped. Attributes the schema does not code are
    /// ignored.
    pub fn encode(&self, details: &CardDetails, tcg_key: &str) -> Result<String, EncodeError> {
        let schema = self.schema_for(tcg_key);
        let mut tokens: Vec<String> = Vec::with_capacity(details.len());

        let mut push = |code: CommentCode, value: Option<String>| {
            if let Some(value) = value {
                tokens.push(format!("{code}:{value}"));
            }
        };

        push(
            CommentCode::RARITY,
            universal(details, RARITY, Some(vocabulary::rarity()))?,
        );
        push(CommentCode::LANGUAGE, universal(details, LANGUAGE, None)?);
        push(
            CommentCode::LOCATION,
            universal(details, LOCATION, Some(vocabulary::location()))?,
        );
        for field in schema.variant_fields() {
            if let Some(value) = details.get(&field.name) {
                let is_boolean = field.kind == FieldKind::Boolean;
                push(field.comment_code, render(&field.name, value, is_boolean)?);
            }
        }
        push(CommentCode::QUALITY, universal(details, QUALITY, None)?);

        log_ignored(schema, details);
        Ok(tokens.join("/"))
    }
}

fn universal(
    details: &CardDetails,
    name: &str,
    vocabulary: Option<&Vocabulary>,
) -> Result<Option<String>, EncodeError> {
    let Some(value) = details.get(name) else {
        return Ok(None);
    };
    let rendered = render(name, value, false)?;
    Ok(match vocabulary {
        Some(vocab) => rendered.map(|v| vocab.encode(&v).to_string()),
        None => rendered,
    })
}

fn render(
    field: &str,
    value: &AttributeValue,
    boolean: bool,
) -> Result<Option<String>, EncodeError> {
    let text = match value {
        AttributeValue::Bool(flag) if boolean => {
            let token = if *flag { ENCODED_TRUE } else { ENCODED_FALSE };
            return Ok(Some(token.to_string()));
        }
        AttributeValue::Bool(_) => {
            return Err(EncodeError::NotBoolean {
                field: field.to_string(),
            })
        }
        AttributeValue::Number(n) => n.to_string(),
        AttributeValue::Text(s) => s.clone(),
    };

    if text.is_empty() {
        return Ok(None);
    }
    if text.contains(SEPARATOR) {
        return Err(EncodeError::ContainsSeparator {
            field: field.to_string(),
            value: text,
        });
    }
    Ok(Some(text))
}

fn log_ignored(schema: &TcgSchema, details: &CardDetails) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    for (key, _) in details.iter() {
        let key = key.as_str();
        let coded = [RARITY, LANGUAGE, LOCATION, QUALITY].contains(&key)
            || schema.variant_by_name(key).is_some();
        let known_uncoded = common::primary_fields()
            .iter()
            .chain(common::common_fields())
            .any(|f| f.name == key);
        if !coded && !known_uncoded {
            log::debug!("encode: {key:?} is not a field of {:?}; ignored", schema.key());
        }
    }
}

/// Encode with the built-in catalog.
pub fn encode(details: &CardDetails, tcg_key: &str) -> Result<String, EncodeError> {
    DetailCodec::builtin().encode(details, tcg_key)
}
