//! Detail-string decoding tests.
//!
//! These tests exercise the codec through the public API:
//! - Universal codes (rarity, location, language, quality)
//! - Game-specific variant fields
//! - Fallback behaviour for unknown games, codes and malformed input

use tcg_inventory::codec::{normalize, DecodeMode, DetailCodec};
use tcg_inventory::{decode, encode, CardDetails, DecodeIssue};

/// Universal codes decode the same way for every game.
#[test]
fn test_universal_codes() {
    let details = decode("RA:UR/LA:EN/LO:BO/QU:NM", "pokemon");

    assert_eq!(
        details,
        CardDetails::new()
            .with_attr("rarity", "Ultra Rare")
            .with_attr("language", "EN")
            .with_attr("location", "box")
            .with_attr("quality", "NM")
    );
}

/// Boolean variant fields.
#[test]
fn test_boolean_variants() {
    assert_eq!(
        decode("FE:YE/RH:YE", "pokemon"),
        CardDetails::new()
            .with_attr("firstEdition", true)
            .with_attr("reverseHolo", true)
    );
    assert_eq!(
        decode("FE:NO", "pokemon"),
        CardDetails::new().with_attr("firstEdition", false)
    );
    assert_eq!(decode("FO:1", "mtg").flag("foil"), Some(true));
    assert_eq!(decode("FO:true", "lorcana").flag("foil"), Some(true));
}

/// Unknown codes are dropped; unmapped rarities pass through.
#[test]
fn test_unknown_and_unmapped() {
    assert!(decode("ZZ:foo", "mtg").is_empty());
    assert_eq!(
        decode("RA:XYZ", "mtg"),
        CardDetails::new().with_attr("rarity", "XYZ")
    );
}

/// Empty input decodes to nothing for any game.
#[test]
fn test_empty_input() {
    for key in ["pokemon", "mtg", "yu-gi-oh", "nonexistent-game", ""] {
        assert!(decode("", key).is_empty(), "{key}");
    }
}

/// Unknown games still decode the universal codes.
#[test]
fn test_unknown_game() {
    let details = decode("RA:MR/LO:WH/LA:FR/QU:GD/FO:YE", "nonexistent-game");

    assert_eq!(details.text("rarity"), Some("Mythic Rare"));
    assert_eq!(details.text("location"), Some("warehouse"));
    assert_eq!(details.text("language"), Some("FR"));
    assert_eq!(details.text("quality"), Some("GD"));
    assert_eq!(details.len(), 4);
}

/// The full example string from a Yu-Gi-Oh! stock row.
#[test]
fn test_yugioh_row() {
    let details = decode("RA:UR/LA:EN/LO:BO/FE:YE/CO:EU/QU:NM", "yu-gi-oh");

    assert_eq!(details.text("rarity"), Some("Ultra Rare"));
    assert_eq!(details.flag("firstEdition"), Some(true));
    assert_eq!(details.text("continent"), Some("EU"));
    assert_eq!(details.text("quality"), Some("NM"));
    assert_eq!(details.len(), 6);
}

/// Normalized names feed straight into decoding.
#[test]
fn test_normalized_game_name() {
    assert_eq!(normalize("Yu-Gi-Oh!"), Some("yu-gi-oh"));
    assert_eq!(normalize("unknown game"), None);

    let key = normalize("Pokémon").unwrap_or("default");
    assert_eq!(decode("SH:YE", key).flag("shadowless"), Some(true));
}

/// Selection and number fields keep the raw value.
#[test]
fn test_selection_and_number_passthrough() {
    let fab = decode("FT:Cold Foil/ED:Alpha/PI:3", "flesh-and-blood");
    assert_eq!(fab.text("foiling"), Some("Cold Foil"));
    assert_eq!(fab.text("edition"), Some("Alpha"));
    assert_eq!(fab.text("pitch"), Some("3"));

    // Not checked against the option list.
    assert_eq!(decode("FI:Shiny", "mtg").text("finish"), Some("Shiny"));
}

/// Malformed pieces are invisible to lenient decoding.
#[test]
fn test_malformed_ignored() {
    let details = decode("ra:UR//QU:/X:1/LA:EN/garbage", "mtg");
    assert_eq!(details, CardDetails::new().with_attr("language", "EN"));
}

/// Decoding the same string twice gives equal results.
#[test]
fn test_deterministic() {
    let input = "RA:SCR/LA:JP/LO:SC/FE:YE/RH:NO/ST:Prerelease/QU:EX";
    assert_eq!(decode(input, "pokemon"), decode(input, "pokemon"));
}

/// Strict mode is opt-in and reports every problem.
#[test]
fn test_strict_mode() {
    let codec = DetailCodec::builtin();

    let report = codec.decode_report("RA:XYZ/ZZ:1/QU:NM", "mtg");
    assert_eq!(report.details.len(), 2);
    assert_eq!(report.issues.len(), 2);
    assert!(report.issues.contains(&DecodeIssue::UnmappedRarity("XYZ".into())));

    let strict = codec.with_mode(DecodeMode::Strict);
    let err = strict.decode_checked("RA:XYZ/ZZ:1/QU:NM", "mtg").unwrap_err();
    assert_eq!(err.issues, report.issues);

    let ok = strict.decode_checked("RA:MR/FO:YE/QU:NM", "mtg").unwrap();
    assert_eq!(ok.text("rarity"), Some("Mythic Rare"));
}

/// Decoded details survive an encode/decode cycle.
#[test]
fn test_encode_round_trip() {
    for (input, key) in [
        ("RA:UR/LA:EN/LO:BO/FE:YE/CO:EU/QU:NM", "yu-gi-oh"),
        ("RA:MR/LA:DE/FO:YE/FI:Etched/SI:NO/QU:EX", "mtg"),
        ("RA:XYZ/LO:attic/QU:PO", "nonexistent-game"),
    ] {
        let details = decode(input, key);
        let encoded = encode(&details, key).unwrap();
        assert_eq!(decode(&encoded, key), details, "{input}");
    }
}
