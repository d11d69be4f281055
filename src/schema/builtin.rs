//! Built-in game catalog.
//!
//! Variant codes are chosen per game, but must never reuse `RA`, `LO`,
//! `LA` or `QU`. Rarity names must match the shared rarity vocabulary so
//! they survive an encode/decode cycle.

use super::code::CommentCode;
use super::config::TcgConfig;
use super::field::VariantField;
use super::registry::SchemaRegistry;

fn code(s: &str) -> CommentCode {
    match CommentCode::parse(s) {
        Ok(code) => code,
        Err(err) => panic!("built-in catalog: {err}"),
    }
}

/// Pokémon TCG.
pub fn pokemon() -> TcgConfig {
    TcgConfig::new("pokemon", "Pokémon")
        .with_rarities([
            "Common",
            "Uncommon",
            "Rare",
            "Holo Rare",
            "Double Rare",
            "Ultra Rare",
            "Illustration Rare",
            "Special Illustration Rare",
            "Hyper Rare",
            "Secret Rare",
            "Promo",
        ])
        .with_languages(["EN", "DE", "FR", "IT", "ES", "PT", "JP", "KR", "ZH"])
        .with_variant(VariantField::boolean("firstEdition", code("FE")).with_modifier("true", 1.5))
        .with_variant(VariantField::boolean("reverseHolo", code("RH")).with_modifier("true", 1.1))
        .with_variant(VariantField::boolean("shadowless", code("SH")).with_modifier("true", 1.3))
        .with_variant(VariantField::text("stamp", code("ST")))
        .with_collection("pokemon_cards")
        .with_collection("pokemon_sealed")
        .with_storage_folder("pokemon")
}

/// Magic: The Gathering.
pub fn mtg() -> TcgConfig {
    TcgConfig::new("mtg", "Magic: The Gathering")
        .with_rarities(["Common", "Uncommon", "Rare", "Mythic Rare", "Special", "Bonus"])
        .with_languages(["EN", "DE", "FR", "IT", "ES", "PT", "JP", "KR", "RU", "ZHS", "ZHT"])
        .with_variant(VariantField::boolean("foil", code("FO")).with_modifier("true", 1.5))
        .with_variant(
            VariantField::selection(
                "finish",
                code("FI"),
                ["Normal", "Etched", "Galaxy", "Surge", "Textured"],
            )
            .with_modifier("Etched", 1.2)
            .with_modifier("Galaxy", 1.3)
            .with_modifier("Surge", 1.3)
            .with_modifier("Textured", 2.0),
        )
        .with_variant(VariantField::boolean("signed", code("SI")).with_modifier("true", 1.4))
        .with_variant(VariantField::boolean("altered", code("AL")).with_modifier("true", 0.9))
        .with_variant(VariantField::boolean("artistProof", code("AP")))
        .with_collection("mtg_cards")
        .with_storage_folder("mtg")
}

/// Yu-Gi-Oh!.
pub fn yugioh() -> TcgConfig {
    TcgConfig::new("yu-gi-oh", "Yu-Gi-Oh!")
        .with_rarities([
            "Common",
            "Rare",
            "Super Rare",
            "Ultra Rare",
            "Secret Rare",
            "Ultimate Rare",
            "Ghost Rare",
            "Starlight Rare",
            "Collector's Rare",
            "Prismatic Secret Rare",
            "Quarter Century Secret Rare",
        ])
        .with_languages(["EN", "DE", "FR", "IT", "ES", "PT", "JP", "KR"])
        .with_variant(VariantField::boolean("firstEdition", code("FE")).with_modifier("true", 1.3))
        .with_variant(
            VariantField::selection("continent", code("CO"), ["EU", "NA", "AS"])
                .with_modifier("NA", 1.1),
        )
        .with_variant(VariantField::boolean("limitedEdition", code("LE")))
        .with_collection("yugioh_cards")
        .with_storage_folder("yugioh")
}

/// Disney Lorcana.
pub fn lorcana() -> TcgConfig {
    TcgConfig::new("lorcana", "Disney Lorcana")
        .with_rarities([
            "Common",
            "Uncommon",
            "Rare",
            "Super Rare",
            "Legendary",
            "Enchanted",
            "Promo",
        ])
        .with_languages(["EN", "DE", "FR", "IT", "JP", "ZH"])
        .with_variant(VariantField::boolean("foil", code("FO")).with_modifier("true", 1.4))
        .with_collection("lorcana_cards")
        .with_storage_folder("lorcana")
}

/// One Piece Card Game.
pub fn one_piece() -> TcgConfig {
    TcgConfig::new("one-piece", "One Piece Card Game")
        .with_rarities([
            "Common",
            "Uncommon",
            "Rare",
            "Super Rare",
            "Secret Rare",
            "Leader",
            "Special",
            "Treasure Rare",
            "Promo",
        ])
        .with_languages(["EN", "JP", "ZH", "FR"])
        .with_variant(VariantField::boolean("parallel", code("PA")).with_modifier("true", 2.0))
        .with_variant(VariantField::boolean("mangaArt", code("MA")).with_modifier("true", 3.0))
        .with_collection("onepiece_cards")
        .with_storage_folder("onepiece")
}

/// Digimon Card Game.
pub fn digimon() -> TcgConfig {
    TcgConfig::new("digimon", "Digimon Card Game")
        .with_rarities(["Common", "Uncommon", "Rare", "Super Rare", "Secret Rare", "Promo"])
        .with_languages(["EN", "JP"])
        .with_variant(VariantField::boolean("alternateArt", code("AA")).with_modifier("true", 2.0))
        .with_collection("digimon_cards")
        .with_storage_folder("digimon")
}

/// Flesh and Blood.
pub fn flesh_and_blood() -> TcgConfig {
    TcgConfig::new("flesh-and-blood", "Flesh and Blood")
        .with_rarities([
            "Common",
            "Rare",
            "Super Rare",
            "Majestic",
            "Legendary",
            "Fabled",
            "Marvel",
            "Promo",
        ])
        .with_languages(["EN", "DE", "FR", "IT", "ES", "JP"])
        .with_variant(
            VariantField::selection(
                "foiling",
                code("FT"),
                ["Non-Foil", "Rainbow Foil", "Cold Foil"],
            )
            .with_modifier("Rainbow Foil", 1.5)
            .with_modifier("Cold Foil", 4.0),
        )
        .with_variant(VariantField::selection(
            "edition",
            code("ED"),
            ["Alpha", "First Edition", "Unlimited"],
        ))
        .with_variant(VariantField::number("pitch", code("PI")))
        .with_collection("fab_cards")
        .with_storage_folder("fab")
}

/// Every built-in game config.
#[must_use]
pub fn configs() -> Vec<TcgConfig> {
    vec![
        pokemon(),
        mtg(),
        yugioh(),
        lorcana(),
        one_piece(),
        digimon(),
        flesh_and_blood(),
    ]
}

/// Build a registry holding every built-in game.
#[must_use]
pub fn registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();
    for config in configs() {
        registry.register(config);
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::vocabulary;

    #[test]
    fn test_all_builtins_compile() {
        let registry = registry();
        assert_eq!(
            registry.keys(),
            vec![
                "digimon",
                "flesh-and-blood",
                "lorcana",
                "mtg",
                "one-piece",
                "pokemon",
                "yu-gi-oh"
            ]
        );
    }

    #[test]
    fn test_rarities_are_in_vocabulary() {
        for config in configs() {
            for rarity in &config.rarity.options {
                assert!(
                    vocabulary::rarity().code_for(rarity).is_some(),
                    "{}: rarity {rarity:?} missing from vocabulary",
                    config.key
                );
            }
        }
    }

    #[test]
    fn test_storage_metadata_present() {
        for config in configs() {
            assert!(config.storage_folder.is_some(), "{}", config.key);
            assert!(!config.collection_names.is_empty(), "{}", config.key);
        }
    }
}
