//! Error types and policies for tuplecsv.
//!
//! This module provides:
//! - `CoercionPolicy`: Controls whether malformed fields default or fail
//! - `ErrorKind`: A fieldless tag for matching on `CsvError`
//! - `FieldError`: A single field that did not parse as its target type
//! - `RecordError`: A row that could not be turned into a record
//! - `CsvError`: The error yielded by a `RowStream`

use std::fmt;
use std::io;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoercionPolicy {
    /// Substitute the type's default value when a field does not parse
    #[default]
    Lenient,
    /// Reject the row when a field does not parse
    Strict,
}

impl CoercionPolicy {
    /// Parse a policy from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lenient" | "permissive" => Some(CoercionPolicy::Lenient),
            "strict" => Some(CoercionPolicy::Strict),
            _ => None,
        }
    }
}

impl fmt::Display for CoercionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoercionPolicy::Lenient => write!(f, "lenient"),
            CoercionPolicy::Strict => write!(f, "strict"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    SourceUnavailable,
    Read,
    InvalidUtf8,
    RowTooShort,
    FieldTypeMismatch,
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::SourceUnavailable => write!(f, "SourceUnavailable"),
            ErrorKind::Read => write!(f, "Read"),
            ErrorKind::InvalidUtf8 => write!(f, "InvalidUtf8"),
            ErrorKind::RowTooShort => write!(f, "RowTooShort"),
            ErrorKind::FieldTypeMismatch => write!(f, "FieldTypeMismatch"),
            ErrorKind::Config => write!(f, "Config"),
        }
    }
}

/// A field whose text is not a valid value of the target type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {type_name}: {reason}")]
pub struct FieldError {
    /// Name of the target type
    pub type_name: &'static str,
    /// Why the parse failed
    pub reason: String,
}

impl FieldError {
    pub fn new(type_name: &'static str, reason: impl fmt::Display) -> Self {
        Self {
            type_name,
            reason: reason.to_string(),
        }
    }
}

/// Failure to build a record from one row, before the row number is known.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("row has {found} field(s), expected at least {expected}")]
    RowTooShort { expected: usize, found: usize },

    #[error("column {column}: cannot parse {text:?} as {type_name}")]
    FieldTypeMismatch {
        /// Zero-based column index
        column: usize,
        text: String,
        type_name: &'static str,
    },
}

impl RecordError {
    /// Attach the row number this error was raised on.
    pub fn at_row(self, row: usize) -> CsvError {
        match self {
            RecordError::RowTooShort { expected, found } => CsvError::RowTooShort {
                row,
                expected,
                found,
            },
            RecordError::FieldTypeMismatch {
                column,
                text,
                type_name,
            } => CsvError::FieldTypeMismatch {
                row,
                column,
                text,
                type_name,
            },
        }
    }
}

/// Errors surfaced while opening or iterating a `RowStream`.
///
/// Row numbers are 1-based physical rows, counting skipped rows.
#[derive(Debug, Error)]
pub enum CsvError {
    /// The source could not be opened or failed before the first record
    #[error("source '{target}' is unavailable: {source}")]
    SourceUnavailable {
        target: String,
        #[source]
        source: io::Error,
    },

    /// Reading a row from the source failed
    #[error("read failed at row {row}: {source}")]
    Read {
        row: usize,
        #[source]
        source: io::Error,
    },

    /// The row's bytes are not valid UTF-8
    #[error("row {row} is not valid UTF-8")]
    InvalidUtf8 { row: usize },

    /// The row has fewer fields than the schema
    #[error("row {row} has {found} field(s), expected at least {expected}")]
    RowTooShort {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A field did not parse under `CoercionPolicy::Strict`
    #[error("row {row}, column {column}: cannot parse {text:?} as {type_name}")]
    FieldTypeMismatch {
        row: usize,
        column: usize,
        text: String,
        type_name: &'static str,
    },

    /// The dialect or configuration document is invalid
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CsvError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CsvError::SourceUnavailable { .. } => ErrorKind::SourceUnavailable,
            CsvError::Read { .. } => ErrorKind::Read,
            CsvError::InvalidUtf8 { .. } => ErrorKind::InvalidUtf8,
            CsvError::RowTooShort { .. } => ErrorKind::RowTooShort,
            CsvError::FieldTypeMismatch { .. } => ErrorKind::FieldTypeMismatch,
            CsvError::Config(_) => ErrorKind::Config,
        }
    }

    /// The row the error was raised on, if it is tied to one.
    pub fn row(&self) -> Option<usize> {
        match self {
            CsvError::Read { row, .. }
            | CsvError::InvalidUtf8 { row }
            | CsvError::RowTooShort { row, .. }
            | CsvError::FieldTypeMismatch { row, .. } => Some(*row),
            CsvError::SourceUnavailable { .. } | CsvError::Config(_) => None,
        }
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
