//! Dialect configuration loaded from a JSON, YAML or TOML document.

use serde::Deserialize;

use super::Dialect;
use crate::error::{CoercionPolicy, CsvError};

/// Serializable form of a [`Dialect`]. Absent fields keep their defaults.
///
/// ```yaml
/// column_delimiter: ";"
/// escape: "'"
/// skip_rows: 1
/// coercion: strict
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DialectConfig {
    /// Row delimiter: one ASCII character or `\n`, `\r`, `\t`
    #[serde(default)]
    pub row_delimiter: Option<String>,
    /// Column delimiter: one character or `\n`, `\r`, `\t`
    #[serde(default)]
    pub column_delimiter: Option<String>,
    /// Escape symbol: one character
    #[serde(default)]
    pub escape: Option<String>,
    /// Leading rows to skip
    #[serde(default)]
    pub skip_rows: Option<usize>,
    /// Coercion policy: "lenient" or "strict"
    #[serde(default)]
    pub coercion: Option<String>,
}

fn parse_symbol(field: &str, value: &str) -> Result<char, CsvError> {
    match value {
        "\\n" => return Ok('\n'),
        "\\r" => return Ok('\r'),
        "\\t" => return Ok('\t'),
        _ => {}
    }
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(CsvError::Config(format!(
            "{} must be a single character, got {:?}",
            field, value
        ))),
    }
}

impl DialectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve into a validated [`Dialect`].
    pub fn into_dialect(self) -> Result<Dialect, CsvError> {
        let mut dialect = Dialect::default();

        if let Some(raw) = self.row_delimiter.as_deref() {
            let c = parse_symbol("row_delimiter", raw)?;
            if !c.is_ascii() {
                return Err(CsvError::Config(format!(
                    "row_delimiter must be ASCII, got {:?}",
                    c
                )));
            }
            dialect.row_delimiter = c as u8;
        }
        if let Some(raw) = self.column_delimiter.as_deref() {
            dialect.column_delimiter = parse_symbol("column_delimiter", raw)?;
        }
        if let Some(raw) = self.escape.as_deref() {
            dialect.escape = parse_symbol("escape", raw)?;
        }
        if let Some(n) = self.skip_rows {
            dialect.skip_rows = n;
        }
        if let Some(raw) = self.coercion.as_deref() {
            dialect.coercion = CoercionPolicy::parse(raw).ok_or_else(|| {
                CsvError::Config(format!("unknown coercion policy: {}", raw))
            })?;
        }

        dialect.validate()?;
        Ok(dialect)
    }

    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> Result<Self, CsvError> {
        serde_json::from_str(s).map_err(|e| CsvError::Config(e.to_string()))
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(s: &str) -> Result<Self, CsvError> {
        serde_yaml::from_str(s).map_err(|e| CsvError::Config(e.to_string()))
    }

    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, CsvError> {
        toml::from_str(s).map_err(|e| CsvError::Config(e.to_string()))
    }
}
