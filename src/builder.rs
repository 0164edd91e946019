//! Builder for opening `RowStream` instances.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::config::{Dialect, DialectConfig};
use crate::error::{CoercionPolicy, CsvError};
use crate::io::{FileInput, InputProvider, StdinInput};
use crate::record::Record;
use crate::stream::RowStream;

/// A `RowStream` over a source opened through an `InputProvider`.
pub type ProviderStream<T> = RowStream<BufReader<Box<dyn Read + Send>>, T>;

/// Fluent builder collecting a `Dialect` before a stream is opened.
#[derive(Debug, Clone, Default)]
pub struct TupleCsvBuilder {
    dialect: Dialect,
}

impl TupleCsvBuilder {
    /// Create a new builder with the default dialect.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder from an existing dialect.
    pub fn from_dialect(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Start from a configuration document.
    pub fn from_config(config: DialectConfig) -> Result<Self, CsvError> {
        Ok(Self::from_dialect(config.into_dialect()?))
    }

    /// Set the row delimiter byte.
    pub fn with_row_delimiter(mut self, delimiter: u8) -> Self {
        self.dialect.row_delimiter = delimiter;
        self
    }

    /// Set the column delimiter.
    pub fn with_column_delimiter(mut self, delimiter: char) -> Self {
        self.dialect.column_delimiter = delimiter;
        self
    }

    /// Set the escape symbol.
    pub fn with_escape(mut self, escape: char) -> Self {
        self.dialect.escape = escape;
        self
    }

    /// Set how many leading rows to skip.
    pub fn with_skip_rows(mut self, rows: usize) -> Self {
        self.dialect.skip_rows = rows;
        self
    }

    /// Set the coercion policy for malformed fields.
    pub fn with_coercion(mut self, policy: CoercionPolicy) -> Self {
        self.dialect.coercion = policy;
        self
    }

    /// Shorthand for `with_coercion(CoercionPolicy::Strict)`.
    pub fn strict(self) -> Self {
        self.with_coercion(CoercionPolicy::Strict)
    }

    /// Get the dialect collected so far.
    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Stream records from any reader, wrapped in a `BufReader`.
    pub fn from_reader<T: Record, R: Read>(
        &self,
        reader: R,
    ) -> Result<RowStream<BufReader<R>, T>, CsvError> {
        RowStream::from_reader(reader, self.dialect)
    }

    pub fn from_buf_reader<T: Record, R: BufRead>(
        &self,
        reader: R,
    ) -> Result<RowStream<R, T>, CsvError> {
        RowStream::from_buf_reader(reader, self.dialect)
    }

    /// Open `provider` and stream its records.
    ///
    /// A failure to open is reported as `CsvError::SourceUnavailable`.
    pub fn from_provider<T: Record>(
        &self,
        provider: &dyn InputProvider,
    ) -> Result<ProviderStream<T>, CsvError> {
        let reader = provider
            .open()
            .map_err(|source| CsvError::SourceUnavailable {
                target: provider.id().to_string(),
                source,
            })?;
        RowStream::with_target(BufReader::new(reader), self.dialect, provider.id())
    }

    /// Stream records from a file.
    pub fn from_path<T: Record>(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<ProviderStream<T>, CsvError> {
        self.from_provider(&FileInput::new(path.as_ref()))
    }

    /// Open a path, treating "-" as stdin.
    pub fn from_arg<T: Record>(&self, arg: &str) -> Result<ProviderStream<T>, CsvError> {
        if arg == "-" {
            self.from_provider(&StdinInput::new())
        } else {
            self.from_path(arg)
        }
    }
}
