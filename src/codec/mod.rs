//! Detail codec.
//!
//! ## Wire Format
//!
//! A detail string is zero or more `XX:value` tokens joined by `/`:
//!
//! ```text
//! RA:UR/LA:EN/LO:BO/FE:YE/CO:EU/QU:NM
//! ```
//!
//! `RA` and `LO` values are vocabulary codes, `LA` and `QU` values are
//! stored as-is, and every other code is looked up in the game's schema.
//!
//! ## Modules
//!
//! - `tokenizer`: Finds `XX:value` tokens
//! - `vocabulary`: Rarity and location name/code tables
//! - `normalize`: Free-form game name → canonical key
//! - `decoder` / `encoder`: `DetailCodec` and the catalog-backed shortcuts

pub mod decoder;
pub mod encoder;
pub mod normalize;
pub mod tokenizer;
pub mod vocabulary;

pub use decoder::{decode, DecodeMode, DecodeReport, DetailCodec};
pub use encoder::encode;
pub use normalize::normalize;
pub use tokenizer::{tokenize, Segment, Token};
pub use vocabulary::Vocabulary;
