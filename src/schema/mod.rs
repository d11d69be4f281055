//! Card schema registry.
//!
//! ## Key Types
//!
//! - `CommentCode`: Two-letter tag identifying an attribute in a detail string
//! - `FieldKind` / `VariantField`: Game-specific attribute descriptors
//! - `TcgConfig`: Declarative per-game configuration
//! - `TcgSchema`: Compiled config with an O(1) code index
//! - `SchemaRegistry`: Game lookup with a fallback schema
//!
//! ## Process-wide Catalog
//!
//! `catalog()` returns the built-in registry. It is built on first use and
//! never mutated afterwards; callers that need other games build their own
//! `SchemaRegistry` and hand it to a `DetailCodec`.

pub mod builtin;
pub mod code;
pub mod common;
pub mod config;
pub mod field;
pub mod registry;
pub mod tcg;

use once_cell::sync::Lazy;

pub use code::CommentCode;
pub use common::{common_fields, primary_fields, CommonField};
pub use config::{CatalogConfig, OptionSet, TcgConfig};
pub use field::{FieldKind, VariantField};
pub use registry::SchemaRegistry;
pub use tcg::{FieldSlot, TcgSchema, DEFAULT_SCHEMA_KEY};

static CATALOG: Lazy<SchemaRegistry> = Lazy::new(builtin::registry);

/// The built-in, read-only schema catalog.
#[must_use]
pub fn catalog() -> &'static SchemaRegistry {
    &CATALOG
}
