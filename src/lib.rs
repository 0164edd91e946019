//! # tuplecsv
//!
//! A streaming, schema-typed reader for CSV-like delimited text.
//!
//! ## Overview
//!
//! The record type is a tuple known at compile time. Each row of the source
//! is read on demand, split into fields and decoded positionally:
//!
//! - **Row splitting** (`split`): a single-pass scanner honoring a configurable
//!   escape symbol; delimiters inside an escaped span are data and a doubled
//!   escape symbol stands for itself
//! - **Field decoding** (`decode`): the `FromField` trait, implemented for
//!   strings, numbers, `bool`, `char`, `Option<T>` and any `FromStr` type via
//!   `Parsed<T>`
//! - **Record building** (`record`): tuples of up to twelve fields
//! - **Streaming** (`stream`): `RowStream`, a lazy, fused iterator of
//!   `Result<T, CsvError>`
//!
//! ## Quick Start
//!
//! ```rust
//! use tuplecsv::TupleCsvBuilder;
//!
//! let data = "id,name,score,grade\n1,\"Smith, J\",91.5,A\n2,Lee,abc,B\n";
//!
//! let rows: Vec<(i32, String, f32, char)> = TupleCsvBuilder::new()
//!     .with_skip_rows(1)
//!     .from_reader(data.as_bytes())?
//!     .collect::<Result<_, _>>()?;
//!
//! assert_eq!(rows[0], (1, "Smith, J".to_string(), 91.5, 'A'));
//! // Malformed fields default under the lenient policy.
//! assert_eq!(rows[1], (2, "Lee".to_string(), 0.0, 'B'));
//! # Ok::<(), tuplecsv::CsvError>(())
//! ```
//!
//! ## Errors
//!
//! - A row with fewer fields than the tuple is `CsvError::RowTooShort`. Extra
//!   fields are ignored.
//! - Under `CoercionPolicy::Lenient` (the default) a field that does not parse
//!   takes its type's default value. `CoercionPolicy::Strict` turns it into
//!   `CsvError::FieldTypeMismatch` instead.
//! - Any error ends the stream: it is yielded once and iteration stops.
//!
//! ## Features
//!
//! - `json` - load `DialectConfig` from JSON (enabled by default)
//! - `yaml` - load `DialectConfig` from YAML
//! - `toml` - load `DialectConfig` from TOML
//! - `miette` - Pretty error reporting with miette

pub mod builder;
pub mod config;
pub mod decode;
pub mod error;
pub mod io;
pub mod record;
pub mod split;
pub mod stream;

pub use builder::{ProviderStream, TupleCsvBuilder};
pub use config::{Dialect, DialectConfig};
pub use decode::{FromField, Parsed};
pub use error::{CoercionPolicy, CsvError, ErrorKind, FieldError, RecordError};
pub use io::{FileInput, InMemorySource, InputProvider, StdinInput};
pub use record::{Record, RecordDisplay};
pub use split::{RowSplitter, split_row};
pub use stream::{Cursor, RowStream, StreamState};

/// Stream records of type `T` from a file with the default dialect.
pub fn read_path<T: Record>(
    path: impl AsRef<std::path::Path>,
) -> Result<ProviderStream<T>, CsvError> {
    TupleCsvBuilder::new().from_path(path)
}

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::CsvDiagnostic;
