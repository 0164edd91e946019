//! Input provider trait definition.

use std::fmt::Debug;
use std::io::Read;

/// A source of delimited text.
///
/// Streams are forward-only; to read a source twice, open it twice.
pub trait InputProvider: Send + Sync + Debug {
    /// Identifier used in error messages: "-" for stdin, the path for files.
    fn id(&self) -> &str;

    /// Open a new reader positioned at the start of the source.
    fn open(&self) -> std::io::Result<Box<dyn Read + Send>>;
}
