//! Game-name normalization.
//!
//! Staff type game names freely ("Yu-Gi-Oh!", "Magic the Gathering",
//! "pokémon"). `normalize` lower-cases the input, deletes every character
//! outside `a-z0-9` and looks the result up in a fixed alias table. Accented
//! letters are deleted, not folded, so "pokémon" becomes "pokmon" and only
//! resolves because that spelling has its own alias.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Stripped alias → canonical game key.
const ALIASES: &[(&str, &str)] = &[
    ("pokemon", "pokemon"),
    ("pokmon", "pokemon"),
    ("pkmn", "pokemon"),
    ("ptcg", "pokemon"),
    ("pokemontcg", "pokemon"),
    ("mtg", "mtg"),
    ("magic", "mtg"),
    ("magicthegathering", "mtg"),
    ("yugioh", "yu-gi-oh"),
    ("ygo", "yu-gi-oh"),
    ("yugiohtcg", "yu-gi-oh"),
    ("lorcana", "lorcana"),
    ("disneylorcana", "lorcana"),
    ("onepiece", "one-piece"),
    ("onepiececardgame", "one-piece"),
    ("optcg", "one-piece"),
    ("digimon", "digimon"),
    ("digimoncardgame", "digimon"),
    ("fleshandblood", "flesh-and-blood"),
    ("fleshblood", "flesh-and-blood"),
    ("fab", "flesh-and-blood"),
];

static ALIAS_TABLE: Lazy<FxHashMap<&'static str, &'static str>> =
    Lazy::new(|| ALIASES.iter().copied().collect());

/// Lower-case and drop everything outside `a-z0-9`.
#[must_use]
pub fn strip(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Resolve free-form game input to a canonical key.
///
/// Returns `None` for unrecognized input; callers treat that as "use the
/// default schema". Only exact alias matches count.
#[must_use]
pub fn normalize(input: &str) -> Option<&'static str> {
    let stripped = strip(input);
    let key = ALIAS_TABLE.get(stripped.as_str()).copied();
    if key.is_none() {
        log::trace!("no game alias for {input:?} (stripped {stripped:?})");
    }
    key
}

/// Every canonical key the alias table can produce.
#[must_use]
pub fn canonical_keys() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = ALIASES.iter().map(|&(_, key)| key).collect();
    keys.sort_unstable();
    keys.dedup();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip() {
        assert_eq!(strip("Yu-Gi-Oh!"), "yugioh");
        assert_eq!(strip("  Magic: The Gathering "), "magicthegathering");
        assert_eq!(strip("Pokémon"), "pokmon");
        assert_eq!(strip("!!!"), "");
    }

    #[test]
    fn test_normalize_known() {
        assert_eq!(normalize("Yu-Gi-Oh!"), Some("yu-gi-oh"));
        assert_eq!(normalize("YGO"), Some("yu-gi-oh"));
        assert_eq!(normalize("Pokémon"), Some("pokemon"));
        assert_eq!(normalize("POKEMON"), Some("pokemon"));
        assert_eq!(normalize("Magic: The Gathering"), Some("mtg"));
        assert_eq!(normalize("Flesh & Blood"), Some("flesh-and-blood"));
        assert_eq!(normalize("One Piece"), Some("one-piece"));
    }

    #[test]
    fn test_normalize_unknown() {
        assert_eq!(normalize("unknown game"), None);
        assert_eq!(normalize(""), None);
        // No partial matches.
        assert_eq!(normalize("pokemon cards"), None);
    }

    #[test]
    fn test_accent_without_alias_fails() {
        // "ü" is deleted, leaving "digimn", which has no alias.
        assert_eq!(normalize("Digimün"), None);
    }

    #[test]
    fn test_canonical_keys_are_builtin() {
        let registry = crate::schema::catalog();
        for key in canonical_keys() {
            assert!(registry.contains(key), "{key} missing from catalog");
        }
    }
}
