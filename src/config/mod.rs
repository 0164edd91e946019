//! Configuration types for reading delimited text.
//!
//! This module provides:
//! - `Dialect`: Delimiters, escape symbol, skip count and coercion policy
//! - `DialectConfig`: A deserializable dialect document (JSON/YAML/TOML)

mod dialect;
mod document;

pub use dialect::Dialect;
pub use document::DialectConfig;
