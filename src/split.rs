//! Row splitting with quote/escape handling.
//!
//! A row is scanned once, left to right. The escape symbol opens and closes a
//! quoted span in which the column delimiter is literal data; a doubled escape
//! symbol stands for one literal escape symbol, inside or outside a span.
//!
//! ```rust
//! use tuplecsv::split::split_row;
//!
//! assert_eq!(split_row(r#"a,"b,c",d"#, ',', '"'), vec!["a", "b,c", "d"]);
//! ```

/// Splits row text into raw fields for a fixed delimiter/escape pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSplitter {
    column_delimiter: char,
    escape: char,
}

impl Default for RowSplitter {
    fn default() -> Self {
        Self::new(',', '"')
    }
}

impl RowSplitter {
    pub fn new(column_delimiter: char, escape: char) -> Self {
        Self {
            column_delimiter,
            escape,
        }
    }

    pub fn column_delimiter(&self) -> char {
        self.column_delimiter
    }

    pub fn escape(&self) -> char {
        self.escape
    }

    /// Split `text` into a new vector of fields.
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut fields = Vec::new();
        self.split_into(text, &mut fields);
        fields
    }

    /// Split `text` into `fields`, clearing it first.
    ///
    /// Always produces at least one field. An escape span still open at the
    /// end of the row is dropped without error.
    pub fn split_into(&self, text: &str, fields: &mut Vec<String>) {
        fields.clear();

        let mut current = String::new();
        let mut in_escape = false;
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            if c == self.column_delimiter && !in_escape {
                fields.push(std::mem::take(&mut current));
            } else if c == self.escape {
                if chars.peek() == Some(&self.escape) {
                    chars.next();
                    current.push(self.escape);
                } else {
                    in_escape = !in_escape;
                }
            } else {
                current.push(c);
            }
        }

        fields.push(current);
    }
}

/// Split one row of text on `column_delimiter`, honoring `escape`.
pub fn split_row(text: &str, column_delimiter: char, escape: char) -> Vec<String> {
    RowSplitter::new(column_delimiter, escape).split(text)
}
