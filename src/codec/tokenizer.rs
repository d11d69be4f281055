//! Detail-string tokenizer.
//!
//! A detail string is a run of `XX:value` tokens separated by `/`, where
//! `XX` is two uppercase ASCII letters and `value` is one or more characters
//! other than `/`. The tokenizer finds every non-overlapping match of that
//! pattern; anything else in the string is never seen by the decoder.

use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

use crate::schema::CommentCode;

/// Token separator.
pub const SEPARATOR: char = '/';

static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]{2}:[^/]+").expect("token pattern compiles"));

/// One `code:value` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// Two-letter code.
    pub code: CommentCode,
    /// Everything after the first colon, up to the next `/`.
    pub value: &'a str,
}

impl<'a> Token<'a> {
    fn from_match(text: &'a str) -> Option<Self> {
        let (code, value) = text.split_once(':')?;
        let code = CommentCode::parse(code).ok()?;
        Some(Self { code, value })
    }
}

/// One `/`-separated piece of a detail string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    /// The segment holds a token.
    Token(Token<'a>),
    /// The segment holds no token and is ignored by decoding.
    Malformed(&'a str),
}

/// Typical detail strings carry fewer than eight tokens.
pub type Tokens<'a> = SmallVec<[Token<'a>; 8]>;

/// Find every token in a detail string, in order.
#[must_use]
pub fn tokenize(details: &str) -> Tokens<'_> {
    TOKEN_PATTERN
        .find_iter(details)
        .filter_map(|m| Token::from_match(m.as_str()))
        .collect()
}

/// Walk a detail string segment by segment.
///
/// Yields the same tokens as `tokenize`, plus every non-empty segment that
/// holds none. A match can never cross a `/`, so searching each segment on
/// its own finds exactly what a scan of the whole string finds.
pub fn scan(details: &str) -> impl Iterator<Item = Segment<'_>> {
    details
        .split(SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            match TOKEN_PATTERN
                .find(segment)
                .and_then(|m| Token::from_match(m.as_str()))
            {
                Some(token) => Segment::Token(token),
                None => Segment::Malformed(segment),
            }
        })
}
