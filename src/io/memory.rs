//! In-memory input source.

use std::io::{self, Cursor, Read};
use std::sync::Arc;

use super::InputProvider;

/// Input source backed by a shared byte buffer.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    id: String,
    data: Arc<[u8]>,
}

impl InMemorySource {
    /// Create a new in-memory source from bytes.
    pub fn new(id: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        let data: Vec<u8> = data.into();
        Self {
            id: id.into(),
            data: Arc::from(data),
        }
    }

    /// Create a new in-memory source from a string.
    pub fn from_string(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self::new(id, data.into().into_bytes())
    }

    /// Join `rows` with `row_delimiter`, without a trailing delimiter.
    pub fn from_rows<S: AsRef<str>>(id: impl Into<String>, rows: &[S], row_delimiter: u8) -> Self {
        let mut data = Vec::new();
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                data.push(row_delimiter);
            }
            data.extend_from_slice(row.as_ref().as_bytes());
        }
        Self::new(id, data)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl InputProvider for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(Cursor::new(Arc::clone(&self.data))))
    }
}
