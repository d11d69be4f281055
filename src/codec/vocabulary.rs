//! Rarity and location vocabularies.
//!
//! Both map a human-readable name to a short code and back. They are shared
//! by every game. Reverse maps are derived once on first use and never
//! mutated. Codes without an entry decode to themselves.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Rarity name → code.
const RARITY_ENTRIES: &[(&str, &str)] = &[
    ("Common", "CO"),
    ("Uncommon", "UC"),
    ("Rare", "RE"),
    ("Holo Rare", "HR"),
    ("Double Rare", "DR"),
    ("Ultra Rare", "UR"),
    ("Illustration Rare", "IR"),
    ("Special Illustration Rare", "SIR"),
    ("Hyper Rare", "HYR"),
    ("Secret Rare", "SCR"),
    ("Promo", "PR"),
    ("Mythic Rare", "MR"),
    ("Special", "SP"),
    ("Bonus", "BN"),
    ("Super Rare", "SR"),
    ("Ultimate Rare", "UTR"),
    ("Ghost Rare", "GR"),
    ("Starlight Rare", "STR"),
    ("Collector's Rare", "CR"),
    ("Prismatic Secret Rare", "PSR"),
    ("Quarter Century Secret Rare", "QCR"),
    ("Legendary", "LG"),
    ("Enchanted", "ENC"),
    ("Leader", "LD"),
    ("Treasure Rare", "TR"),
    ("Majestic", "MJ"),
    ("Fabled", "FB"),
    ("Marvel", "MV"),
];

/// Location name → code.
const LOCATION_ENTRIES: &[(&str, &str)] = &[
    ("box", "BO"),
    ("binder", "BI"),
    ("display case", "DC"),
    ("deck box", "DB"),
    ("shelf", "SF"),
    ("showcase", "SC"),
    ("storage", "ST"),
    ("safe", "SA"),
    ("warehouse", "WH"),
    ("consignment", "CS"),
];

/// A bidirectional name/code table.
#[derive(Debug)]
pub struct Vocabulary {
    entries: &'static [(&'static str, &'static str)],
    by_name: FxHashMap<&'static str, &'static str>,
    by_code: FxHashMap<&'static str, &'static str>,
}

impl Vocabulary {
    /// Build a vocabulary from name/code pairs.
    ///
    /// Panics if a name or a code appears twice, since the reverse map
    /// would silently lose an entry.
    #[must_use]
    pub fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        let mut by_name = FxHashMap::default();
        let mut by_code = FxHashMap::default();
        for &(name, code) in entries {
            assert!(by_name.insert(name, code).is_none(), "duplicate vocabulary name {name:?}");
            assert!(by_code.insert(code, name).is_none(), "duplicate vocabulary code {code:?}");
        }
        Self {
            entries,
            by_name,
            by_code,
        }
    }

    /// Code for a human-readable name.
    #[must_use]
    pub fn code_for(&self, name: &str) -> Option<&'static str> {
        self.by_name.get(name).copied()
    }

    /// Human-readable name for a code.
    #[must_use]
    pub fn name_for(&self, code: &str) -> Option<&'static str> {
        self.by_code.get(code).copied()
    }

    /// Name for a code, or the code itself when unmapped.
    #[must_use]
    pub fn decode<'a>(&self, code: &'a str) -> &'a str {
        self.name_for(code).unwrap_or(code)
    }

    /// Code for a name, or the name itself when unmapped.
    #[must_use]
    pub fn encode<'a>(&self, name: &'a str) -> &'a str {
        self.code_for(name).unwrap_or(name)
    }

    /// Names, in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|&(name, _)| name)
    }

    /// Codes, in table order.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|&(_, code)| code)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the vocabulary has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static RARITY: Lazy<Vocabulary> = Lazy::new(|| Vocabulary::new(RARITY_ENTRIES));
static LOCATION: Lazy<Vocabulary> = Lazy::new(|| Vocabulary::new(LOCATION_ENTRIES));

/// The shared rarity vocabulary.
#[must_use]
pub fn rarity() -> &'static Vocabulary {
    &RARITY
}

/// The shared location vocabulary.
#[must_use]
pub fn location() -> &'static Vocabulary {
    &LOCATION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_lookup() {
        assert_eq!(rarity().code_for("Ultra Rare"), Some("UR"));
        assert_eq!(rarity().name_for("UR"), Some("Ultra Rare"));
        assert_eq!(rarity().name_for("ur"), None);
    }

    #[test]
    fn test_location_lookup() {
        assert_eq!(location().name_for("BO"), Some("box"));
        assert_eq!(location().code_for("binder"), Some("BI"));
    }

    #[test]
    fn test_fallback_to_input() {
        assert_eq!(rarity().decode("XYZ"), "XYZ");
        assert_eq!(rarity().decode("SIR"), "Special Illustration Rare");
        assert_eq!(location().encode("back room"), "back room");
        assert_eq!(location().encode("box"), "BO");
    }

    #[test]
    fn test_tables_are_bijective() {
        for vocab in [rarity(), location()] {
            assert_eq!(vocab.names().count(), vocab.len());
            for (name, code) in vocab.names().zip(vocab.codes()) {
                assert_eq!(vocab.name_for(code), Some(name));
                assert_eq!(vocab.code_for(name), Some(code));
            }
        }
    }

    #[test]
    fn test_codes_are_short_uppercase() {
        for code in rarity().codes().chain(location().codes()) {
            assert!((2..=3).contains(&code.len()), "{code}");
            assert!(code.bytes().all(|b| b.is_ascii_uppercase()), "{code}");
        }
    }

    #[test]
    #[should_panic(expected = "duplicate vocabulary code")]
    fn test_duplicate_code_panics() {
        static BAD: &[(&str, &str)] = &[("a", "AA"), ("b", "AA")];
        let _ = Vocabulary::new(BAD);
    }
}
