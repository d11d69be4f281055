//! # tcg-inventory
//!
//! Card schema registry and detail-string codec for trading-card inventory.
//!
//! Stock rows store card attributes as a compact tagged string such as
//! `RA:UR/LA:EN/LO:BO/FE:YE/CO:EU/QU:NM`. This crate turns those strings into
//! structured attributes and back, driven by a per-game schema.
//!
//! ## Design Principles
//!
//! 1. **Best-effort decoding**: Decoding never fails. Unknown games use the
//!    default schema, unmapped vocabulary codes pass through, unknown codes
//!    are dropped. Strict checking is opt-in.
//!
//! 2. **Configuration as data**: Games are described by `TcgConfig` values,
//!    built in code or loaded from JSON, and compiled once into `TcgSchema`s
//!    with an O(1) code index.
//!
//! 3. **Immutable catalog**: The built-in `SchemaRegistry` is constructed on
//!    first use and only ever read afterwards.
//!
//! ## Modules
//!
//! - `cards`: Attribute keys, values and decoded `CardDetails`
//! - `schema`: Comment codes, field kinds, game configs, registry, catalog
//! - `codec`: Tokenizer, vocabularies, name normalization, decode/encode
//! - `pricing`: Price multipliers from variant modifiers
//! - `validation`: Completeness checks for stock entries
//! - `error`: Error types

pub mod cards;
pub mod codec;
pub mod error;
pub mod pricing;
pub mod schema;
pub mod validation;

// Re-export commonly used types
pub use crate::cards::{AttributeKey, AttributeValue, CardDetails};

pub use crate::schema::{
    catalog, CatalogConfig, CommentCode, FieldKind, FieldSlot, OptionSet, SchemaRegistry,
    TcgConfig, TcgSchema, VariantField,
};

pub use crate::codec::{
    decode, encode, normalize, DecodeMode, DecodeReport, DetailCodec, Vocabulary,
};

pub use crate::error::{DecodeError, DecodeIssue, EncodeError, SchemaError};

pub use crate::validation::{check_entry, is_complete, EntryIssue};
