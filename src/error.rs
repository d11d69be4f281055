//! Error types for schema loading, strict decoding and encoding.
//!
//! The lenient decode path never produces these: unknown games, unknown
//! codes and malformed tokens degrade to partial output. Errors only surface
//! when configuration is loaded at runtime, when a caller opts into strict
//! decoding, or when attributes cannot be written back to a detail string.

use thiserror::Error;

/// Result type alias for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors raised while compiling or loading TCG schemas.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// A comment code was not exactly two uppercase ASCII letters.
    #[error("invalid comment code {0:?}: expected two uppercase letters")]
    InvalidCommentCode(String),

    /// Schema key was empty.
    #[error("schema key must not be empty")]
    EmptyKey,

    /// A game with this key is already registered.
    #[error("schema {0:?} already registered")]
    DuplicateGame(String),

    /// Two slots of one schema share a comment code.
    #[error("schema {game:?}: comment code {code} used by both {first} and {second}")]
    DuplicateCommentCode {
        game: String,
        code: String,
        first: String,
        second: String,
    },

    /// A selection field has no options.
    #[error("schema {game:?}: selection field {field:?} has no options")]
    EmptySelection { game: String, field: String },

    /// A modifier key does not name a value the field can take.
    #[error("schema {game:?}: modifier {key:?} does not apply to field {field:?}")]
    UnknownModifierKey {
        game: String,
        field: String,
        key: String,
    },

    /// A modifier multiplier is zero, negative or not finite.
    #[error(
        "schema {game:?}: modifier {key:?} on {field:?} must be a positive number, got {value}"
    )]
    InvalidModifier {
        game: String,
        field: String,
        key: String,
        value: f64,
    },

    /// The rarity or language option set declared the wrong code.
    #[error("schema {game:?}: {set} must use comment code {expected}, got {found}")]
    ReservedCodeMismatch {
        game: String,
        set: &'static str,
        expected: String,
        found: String,
    },

    /// A catalog document could not be parsed.
    #[error("catalog parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::Parse(err.to_string())
    }
}

/// A single problem found while decoding a detail string.
///
/// Lenient decoding reports these alongside its output; strict decoding
/// turns any of them into a [`DecodeError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeIssue {
    /// The game key has no schema; the default schema was used.
    #[error("unknown game {0:?}, decoded with the default schema")]
    UnknownGame(String),

    /// A well-formed token whose code no slot of the schema claims.
    #[error("unknown comment code {code} (value {value:?})")]
    UnknownCode { code: String, value: String },

    /// A rarity code absent from the rarity vocabulary.
    #[error("rarity code {0:?} has no vocabulary entry")]
    UnmappedRarity(String),

    /// A location code absent from the location vocabulary.
    #[error("location code {0:?} has no vocabulary entry")]
    UnmappedLocation(String),

    /// A `/`-separated segment that is not a `XX:value` token.
    #[error("malformed segment {0:?}")]
    Malformed(String),
}

/// Strict decoding rejected the detail string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("detail string rejected with {} issue(s)", .issues.len())]
pub struct DecodeError {
    /// Every issue found, in input order.
    pub issues: Vec<DecodeIssue>,
}

/// Errors raised while writing attributes back to a detail string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The value contains the `/` token separator.
    #[error("value for {field:?} contains '/': {value:?}")]
    ContainsSeparator { field: String, value: String },

    /// A boolean value was given for a field that is not boolean.
    #[error("field {field:?} is not boolean")]
    NotBoolean { field: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_display() {
        let err = SchemaError::DuplicateCommentCode {
            game: "mtg".into(),
            code: "FO".into(),
            first: "foil".into(),
            second: "format".into(),
        };
        assert_eq!(
            err.to_string(),
            "schema \"mtg\": comment code FO used by both foil and format"
        );
    }

    #[test]
    fn test_decode_error_counts_issues() {
        let err = DecodeError {
            issues: vec![
                DecodeIssue::Malformed("xx".into()),
                DecodeIssue::UnmappedRarity("XYZ".into()),
            ],
        };
        assert_eq!(err.to_string(), "detail string rejected with 2 issue(s)");
    }

    #[test]
    fn test_parse_error_from_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: SchemaError = json_err.into();
        assert!(matches!(err, SchemaError::Parse(_)));
    }
}
