//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{CsvError, ErrorKind};

/// A diagnostic wrapper for `CsvError` compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct CsvDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error
    pub source: Option<CsvError>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::SourceUnavailable => "Check that the input path exists and is readable",
        ErrorKind::Read => "The input stream failed mid-read; retry with a fresh source",
        ErrorKind::InvalidUtf8 => "Re-encode the input as UTF-8",
        ErrorKind::RowTooShort => {
            "Every row needs at least as many fields as the record type; check the delimiters"
        }
        ErrorKind::FieldTypeMismatch => {
            "Fix the field or switch to lenient coercion to default malformed values"
        }
        ErrorKind::Config => "Delimiters must be single characters and distinct from each other",
    }
}

impl From<CsvError> for CsvDiagnostic {
    fn from(e: CsvError) -> Self {
        let kind = e.kind();
        let message = match e.row() {
            Some(row) => format!("[{}] at row {}", kind, row),
            None => format!("[{}]", kind),
        };
        CsvDiagnostic {
            message,
            source: Some(e),
            help: Some(help_for(kind).into()),
            severity: Severity::Error,
        }
    }
}

impl From<CsvError> for miette::Report {
    fn from(e: CsvError) -> Self {
        miette::Report::new(CsvDiagnostic::from(e))
    }
}
