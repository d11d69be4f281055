//! Fields shared by every game.
//!
//! Primary identifier fields name the card itself (`name`, `expansion`,
//! `collectorNumber`). Common fields describe the copy on hand (`quality`,
//! `location`, `price`, `quantity`). Neither depends on the game schema.

use once_cell::sync::Lazy;

use super::code::CommentCode;
use super::field::FieldKind;
use crate::codec::vocabulary;

/// Attribute name for the decoded `RA` value.
pub const RARITY: &str = "rarity";
/// Attribute name for the decoded `LO` value.
pub const LOCATION: &str = "location";
/// Attribute name for the decoded `LA` value.
pub const LANGUAGE: &str = "language";
/// Attribute name for the decoded `QU` value.
pub const QUALITY: &str = "quality";
/// Attribute name for the unit price.
pub const PRICE: &str = "price";
/// Attribute name for the number of copies.
pub const QUANTITY: &str = "quantity";

/// Condition grades, best first.
pub const QUALITY_GRADES: [&str; 7] = ["MT", "NM", "EX", "GD", "LP", "PL", "PO"];

/// Every language code a built-in game prints in.
pub const LANGUAGES: [&str; 12] = [
    "EN", "DE", "FR", "IT", "ES", "PT", "JP", "KR", "ZH", "ZHS", "ZHT", "RU",
];

/// A field that does not come from a game schema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommonField {
    /// Attribute name.
    pub name: &'static str,

    /// Field type.
    pub kind: FieldKind,

    /// Code in the detail string, if the field is coded there at all.
    pub comment_code: Option<CommentCode>,
}

impl CommonField {
    fn uncoded(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            comment_code: None,
        }
    }
}

static PRIMARY_FIELDS: Lazy<Vec<CommonField>> = Lazy::new(|| {
    vec![
        CommonField::uncoded("name", FieldKind::Text),
        CommonField::uncoded("expansion", FieldKind::Text),
        CommonField::uncoded("collectorNumber", FieldKind::Text),
    ]
});

static COMMON_FIELDS: Lazy<Vec<CommonField>> = Lazy::new(|| {
    vec![
        CommonField {
            name: QUALITY,
            kind: FieldKind::Selection {
                options: QUALITY_GRADES.iter().map(|g| g.to_string()).collect(),
            },
            comment_code: Some(CommentCode::QUALITY),
        },
        CommonField {
            name: LOCATION,
            kind: FieldKind::Selection {
                options: vocabulary::location().names().map(str::to_string).collect(),
            },
            comment_code: Some(CommentCode::LOCATION),
        },
        CommonField::uncoded(PRICE, FieldKind::Number),
        CommonField::uncoded(QUANTITY, FieldKind::Number),
    ]
});

/// Fields identifying a card, shared by all games.
#[must_use]
pub fn primary_fields() -> &'static [CommonField] {
    &PRIMARY_FIELDS
}

/// Fields describing a stocked copy, shared by all variants.
#[must_use]
pub fn common_fields() -> &'static [CommonField] {
    &COMMON_FIELDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_fields() {
        let names: Vec<_> = primary_fields().iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["name", "expansion", "collectorNumber"]);
        assert!(primary_fields().iter().all(|f| f.comment_code.is_none()));
    }

    #[test]
    fn test_common_fields() {
        let names: Vec<_> = common_fields().iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["quality", "location", "price", "quantity"]);

        let quality = &common_fields()[0];
        assert_eq!(quality.comment_code, Some(CommentCode::QUALITY));
        assert_eq!(quality.kind.options().len(), QUALITY_GRADES.len());

        let location = &common_fields()[1];
        assert!(location.kind.options().iter().any(|o| o == "box"));
    }
}
