//! Two-letter comment codes.
//!
//! Every attribute inside a detail string is tagged with a comment code:
//! exactly two uppercase ASCII letters. Four codes are shared by every game
//! and reserved: `RA` (rarity), `LO` (location), `LA` (language) and
//! `QU` (quality). Game schemas pick the rest for their variant fields.

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Comment code identifying an attribute inside a detail string.
///
/// Stored as two bytes so codes are `Copy` and hash cheaply. Construction
/// always validates, so a `CommentCode` is two uppercase ASCII letters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommentCode([u8; 2]);

impl CommentCode {
    /// Rarity.
    pub const RARITY: CommentCode = CommentCode(*b"RA");
    /// Storage location.
    pub const LOCATION: CommentCode = CommentCode(*b"LO");
    /// Card language.
    pub const LANGUAGE: CommentCode = CommentCode(*b"LA");
    /// Condition grade.
    pub const QUALITY: CommentCode = CommentCode(*b"QU");

    /// The codes every schema reserves.
    pub const RESERVED: [CommentCode; 4] = [
        Self::RARITY,
        Self::LOCATION,
        Self::LANGUAGE,
        Self::QUALITY,
    ];

    /// Parse a comment code.
    pub fn parse(s: &str) -> Result<Self, SchemaError> {
        match s.as_bytes() {
            [a, b] if a.is_ascii_uppercase() && b.is_ascii_uppercase() => Ok(Self([*a, *b])),
            _ => Err(SchemaError::InvalidCommentCode(s.to_string())),
        }
    }

    /// Get the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Both bytes are ASCII uppercase by construction.
        std::str::from_utf8(&self.0).unwrap_or("??")
    }

    /// Is this one of the four codes shared by every game?
    #[must_use]
    pub fn is_reserved(self) -> bool {
        Self::RESERVED.contains(&self)
    }
}

impl std::fmt::Display for CommentCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CommentCode {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CommentCode {
    type Error = SchemaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<CommentCode> for String {
    fn from(code: CommentCode) -> Self {
        code.as_str().to_string()
    }
}
