//! The immutable set of delimiters and policies a stream reads with.

use std::fmt;

use crate::error::{CoercionPolicy, CsvError};
use crate::split::RowSplitter;

/// Delimiters, escape symbol, leading-row skip count and coercion policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    /// Byte separating logical rows (ASCII only)
    pub row_delimiter: u8,
    /// Character separating fields within a row
    pub column_delimiter: char,
    /// Character opening/closing a quoted span; doubled, stands for itself
    pub escape: char,
    /// Number of leading rows discarded before the first record
    pub skip_rows: usize,
    /// What to do with fields that do not parse
    pub coercion: CoercionPolicy,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            row_delimiter: b'\n',
            column_delimiter: ',',
            escape: '"',
            skip_rows: 0,
            coercion: CoercionPolicy::Lenient,
        }
    }
}

impl Dialect {
    /// Check that the delimiters can be told apart.
    pub fn validate(&self) -> Result<(), CsvError> {
        if !self.row_delimiter.is_ascii() {
            return Err(CsvError::Config(format!(
                "row delimiter 0x{:02x} is not ASCII",
                self.row_delimiter
            )));
        }
        let row = self.row_delimiter as char;
        if self.column_delimiter == self.escape {
            return Err(CsvError::Config(format!(
                "column delimiter and escape are both {:?}",
                self.escape
            )));
        }
        if row == self.column_delimiter || row == self.escape {
            return Err(CsvError::Config(format!(
                "row delimiter {:?} collides with the column delimiter or escape",
                row
            )));
        }
        Ok(())
    }

    pub fn splitter(&self) -> RowSplitter {
        RowSplitter::new(self.column_delimiter, self.escape)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row={:?} col={:?} escape={:?} skip={} coercion={}",
            self.row_delimiter as char,
            self.column_delimiter,
            self.escape,
            self.skip_rows,
            self.coercion
        )
    }
}
