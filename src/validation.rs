//! Stock entry completeness checks.
//!
//! Decoding never fails, so nothing guarantees a decoded card has what a
//! stock change needs. `check_entry` is run on each row before it is
//! submitted: it reports missing fields and values outside the schema's
//! options without changing the entry.

use std::fmt;

use crate::cards::{AttributeValue, CardDetails};
use crate::codec::vocabulary;
use crate::schema::common::{
    self, LANGUAGE, LOCATION, PRICE, QUALITY, QUALITY_GRADES, QUANTITY, RARITY,
};
use crate::schema::{FieldKind, TcgSchema};

/// A problem with one field of a stock entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryIssue {
    /// A required field is absent or blank.
    Missing(String),
    /// The value is not one of the field's options.
    NotAnOption { field: String, value: String },
    /// A number field holds something that is not a number.
    NotANumber { field: String },
    /// A boolean field holds text or a number.
    NotABoolean { field: String },
    /// Price below zero.
    NegativePrice,
    /// Quantity not a whole number of at least one.
    InvalidQuantity,
}

impl fmt::Display for EntryIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryIssue::Missing(field) => write!(f, "{field} is required"),
            EntryIssue::NotAnOption { field, value } => {
                write!(f, "{value:?} is not a valid {field}")
            }
            EntryIssue::NotANumber { field } => write!(f, "{field} must be a number"),
            EntryIssue::NotABoolean { field } => write!(f, "{field} must be yes or no"),
            EntryIssue::NegativePrice => write!(f, "price cannot be negative"),
            EntryIssue::InvalidQuantity => {
                write!(f, "quantity must be a whole number of at least 1")
            }
        }
    }
}

/// Check one stock entry against a game schema.
///
/// Variant fields are optional, but validated when present.
#[must_use]
pub fn check_entry(schema: &TcgSchema, entry: &CardDetails) -> Vec<EntryIssue> {
    let mut issues = Vec::new();

    let required = common::primary_fields()
        .iter()
        .chain(common::common_fields())
        .map(|f| f.name)
        .chain([RARITY, LANGUAGE]);
    for name in required {
        if entry.get(name).map_or(true, AttributeValue::is_blank) {
            issues.push(EntryIssue::Missing(name.to_string()));
        }
    }

    check_option(entry, RARITY, |v| schema.rarity().contains(v), &mut issues);
    check_option(entry, LANGUAGE, |v| schema.language().contains(v), &mut issues);
    check_option(entry, QUALITY, |v| QUALITY_GRADES.iter().any(|g| *g == v), &mut issues);
    check_option(
        entry,
        LOCATION,
        |v| vocabulary::location().code_for(v).is_some(),
        &mut issues,
    );

    if let Some(value) = entry.get(PRICE).filter(|v| !v.is_blank()) {
        match value.as_number() {
            Some(price) if price < 0.0 => issues.push(EntryIssue::NegativePrice),
            Some(_) => {}
            None => issues.push(EntryIssue::NotANumber {
                field: PRICE.to_string(),
            }),
        }
    }

    if let Some(value) = entry.get(QUANTITY).filter(|v| !v.is_blank()) {
        match value.as_number() {
            Some(qty) if qty >= 1.0 && qty.fract() == 0.0 => {}
            Some(_) => issues.push(EntryIssue::InvalidQuantity),
            None => issues.push(EntryIssue::NotANumber {
                field: QUANTITY.to_string(),
            }),
        }
    }

    for field in schema.variant_fields() {
        let Some(value) = entry.get(&field.name) else {
            continue;
        };
        match (&field.kind, value) {
            (FieldKind::Boolean, AttributeValue::Bool(_)) => {}
            (FieldKind::Boolean, _) => issues.push(EntryIssue::NotABoolean {
                field: field.name.clone(),
            }),
            (FieldKind::Number, v) if v.is_blank() || v.as_number().is_some() => {}
            (FieldKind::Number, _) => issues.push(EntryIssue::NotANumber {
                field: field.name.clone(),
            }),
            (FieldKind::Selection { options }, AttributeValue::Text(s)) => {
                if !s.is_empty() && !options.iter().any(|o| o == s) {
                    issues.push(EntryIssue::NotAnOption {
                        field: field.name.clone(),
                        value: s.clone(),
                    });
                }
            }
            (FieldKind::Selection { .. }, other) => issues.push(EntryIssue::NotAnOption {
                field: field.name.clone(),
                value: render(other),
            }),
            (FieldKind::Text, _) => {}
        }
    }

    issues
}

/// True when `check_entry` finds nothing.
#[must_use]
pub fn is_complete(schema: &TcgSchema, entry: &CardDetails) -> bool {
    check_entry(schema, entry).is_empty()
}

fn check_option(
    entry: &CardDetails,
    field: &str,
    accepts: impl Fn(&str) -> bool,
    issues: &mut Vec<EntryIssue>,
) {
    let Some(value) = entry.get(field).filter(|v| !v.is_blank()) else {
        return;
    };
    let ok = value.as_text().is_some_and(&accepts);
    if !ok {
        issues.push(EntryIssue::NotAnOption {
            field: field.to_string(),
            value: render(value),
        });
    }
}

fn render(value: &AttributeValue) -> String {
    match value {
        AttributeValue::Bool(b) => b.to_string(),
        AttributeValue::Number(n) => n.to_string(),
        AttributeValue::Text(s) => s.clone(),
    }
}
