//! Lazy, forward-only iteration over typed records.
//!
//! A [`RowStream`] owns a buffered reader. On construction it discards the
//! configured number of leading rows; each call to `next` then reads one row
//! up to the row delimiter, splits it and decodes it into the record type.
//!
//! The stream moves through three states:
//!
//! - `NotStarted`: constructed, no record requested yet
//! - `Active`: at least one row requested and the source not yet drained
//! - `Exhausted`: the source is drained or an error was yielded; terminal
//!
//! Errors are fail-fast: the first `Err` the stream yields is also its last
//! item.

use std::io::{BufRead, BufReader, Read};
use std::iter::FusedIterator;
use std::marker::PhantomData;

use log::{debug, trace};

use crate::config::Dialect;
use crate::error::CsvError;
use crate::record::Record;
use crate::split::RowSplitter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    NotStarted,
    Active,
    Exhausted,
}

/// Read-only view of a stream's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Data rows read so far, not counting skipped rows
    pub row: usize,
    /// Raw fields found in the most recent row
    pub columns: usize,
    /// Whether the stream has reached its terminal state
    pub exhausted: bool,
}

/// Typed record iterator over a delimited-text source.
pub struct RowStream<R, T> {
    reader: R,
    target: String,
    dialect: Dialect,
    splitter: RowSplitter,
    state: StreamState,
    skipped: usize,
    cursor: Cursor,
    line: Vec<u8>,
    fields: Vec<String>,
    _record: PhantomData<fn() -> T>,
}

impl<R, T> std::fmt::Debug for RowStream<R, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowStream")
            .field("target", &self.target)
            .field("dialect", &self.dialect)
            .field("state", &self.state)
            .field("skipped", &self.skipped)
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl<R: Read, T: Record> RowStream<BufReader<R>, T> {
    /// Wrap an unbuffered reader.
    pub fn from_reader(reader: R, dialect: Dialect) -> Result<Self, CsvError> {
        Self::from_buf_reader(BufReader::new(reader), dialect)
    }
}

impl<R: BufRead, T: Record> RowStream<R, T> {
    /// Build a stream over an already-buffered reader.
    pub fn from_buf_reader(reader: R, dialect: Dialect) -> Result<Self, CsvError> {
        Self::with_target(reader, dialect, "<reader>")
    }

    /// Build a stream and name its source for error messages.
    ///
    /// Skips `dialect.skip_rows` leading rows. Running out of input while
    /// skipping is not an error; the stream is then simply empty.
    pub fn with_target(
        reader: R,
        dialect: Dialect,
        target: impl Into<String>,
    ) -> Result<Self, CsvError> {
        dialect.validate()?;

        let mut stream = Self {
            reader,
            target: target.into(),
            dialect,
            splitter: dialect.splitter(),
            state: StreamState::NotStarted,
            skipped: 0,
            cursor: Cursor::default(),
            line: Vec::new(),
            fields: Vec::new(),
            _record: PhantomData,
        };

        while stream.skipped < dialect.skip_rows {
            let read = stream
                .read_row()
                .map_err(|source| CsvError::SourceUnavailable {
                    target: stream.target.clone(),
                    source,
                })?;
            if !read {
                break;
            }
            stream.skipped += 1;
        }

        debug!(
            "opened '{}' ({}), skipped {} of {} leading row(s)",
            stream.target, dialect, stream.skipped, dialect.skip_rows
        );
        Ok(stream)
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn state(&self) -> StreamState {
        self.state
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Leading rows actually discarded; less than `skip_rows` on a short source.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// 1-based physical row number of the last row read, counting skipped rows.
    pub fn line(&self) -> usize {
        self.skipped + self.cursor.row
    }

    /// Raw fields of the most recent row.
    pub fn raw_fields(&self) -> &[String] {
        &self.fields
    }

    /// Give back the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read the next row into `self.line`, without its delimiter.
    ///
    /// Returns `false` once the source has no bytes left.
    fn read_row(&mut self) -> std::io::Result<bool> {
        self.line.clear();
        let n = self
            .reader
            .read_until(self.dialect.row_delimiter, &mut self.line)?;
        if n == 0 {
            return Ok(false);
        }
        if self.line.last() == Some(&self.dialect.row_delimiter) {
            self.line.pop();
        }
        Ok(true)
    }

    fn exhaust(&mut self) {
        if self.state != StreamState::Exhausted {
            debug!(
                "'{}' exhausted after {} row(s)",
                self.target, self.cursor.row
            );
        }
        self.state = StreamState::Exhausted;
        self.cursor.exhausted = true;
    }

    fn advance(&mut self) -> Option<Result<T, CsvError>> {
        match self.read_row() {
            Ok(true) => {}
            Ok(false) => {
                self.exhaust();
                return None;
            }
            Err(source) => {
                let row = self.line() + 1;
                self.exhaust();
                return Some(Err(CsvError::Read { row, source }));
            }
        }

        self.cursor.row += 1;
        let row = self.line();

        let text = match std::str::from_utf8(&self.line) {
            Ok(text) => text,
            Err(_) => {
                self.exhaust();
                return Some(Err(CsvError::InvalidUtf8 { row }));
            }
        };

        self.splitter.split_into(text, &mut self.fields);
        self.cursor.columns = self.fields.len();
        trace!("row {}: {} field(s)", row, self.fields.len());

        match T::from_fields(&self.fields, self.dialect.coercion) {
            Ok(record) => Some(Ok(record)),
            Err(e) => {
                self.exhaust();
                Some(Err(e.at_row(row)))
            }
        }
    }
}

impl<R: BufRead, T: Record> Iterator for RowStream<R, T> {
    type Item = Result<T, CsvError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            StreamState::Exhausted => None,
            StreamState::NotStarted | StreamState::Active => {
                self.state = StreamState::Active;
                self.advance()
            }
        }
    }
}

impl<R: BufRead, T: Record> FusedIterator for RowStream<R, T> {}
