//! Price modifiers.
//!
//! Variant fields may carry multipliers (a first edition sells for more, an
//! altered card for less). The multiplier for a card is the product of the
//! modifiers its present variant values match.

use crate::cards::CardDetails;
use crate::schema::TcgSchema;

/// Product of every modifier matched by `details`.
///
/// Returns `1.0` when no modifier applies.
#[must_use]
pub fn multiplier(schema: &TcgSchema, details: &CardDetails) -> f64 {
    schema
        .variant_fields()
        .iter()
        .filter_map(|field| {
            let value = details.get(&field.name)?;
            field.modifier_for(value)
        })
        .product()
}

/// Apply the modifiers to a base price, rounded to cents.
#[must_use]
pub fn adjusted_price(schema: &TcgSchema, base: f64, details: &CardDetails) -> f64 {
    round_cents(base * multiplier(schema, details))
}

fn round_cents(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}
