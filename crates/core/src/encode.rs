//! Delimiter-separated output.
//!
//! Each table is written as one record per row followed by an empty line, so
//! consecutive tables stay visually separated. Quoting and escaping are left
//! to the `csv` crate.

use std::io::Write;

use crate::table::Table;
use crate::{Html2CsvError, Result};

/// Default field delimiter.
pub const COMMA: u8 = b',';

/// Field delimiter of TSV output.
pub const TAB: u8 = b'\t';

/// Parses a user-supplied delimiter.
///
/// The value must be exactly one ASCII character, because the encoder works on
/// single bytes. Quotes and line breaks are rejected since they would make the
/// output ambiguous.
///
/// # Example
///
/// ```rust
/// use html2csv_core::parse_delimiter;
///
/// assert_eq!(parse_delimiter(";").unwrap(), b';');
/// assert!(parse_delimiter(";;").is_err());
/// ```
pub fn parse_delimiter(s: &str) -> Result<u8> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() && !matches!(c, '"' | '\n' | '\r') => Ok(c as u8),
        _ => Err(Html2CsvError::InvalidDelimiter(s.to_string())),
    }
}

/// Writes tables as CSV (or any single-byte delimiter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvEncoder {
    pub delimiter: u8,
}

impl CsvEncoder {
    pub fn new() -> Self {
        Self { delimiter: COMMA }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Encodes `tables` into `writer`.
    ///
    /// Output is written incrementally; if the writer fails part way, the
    /// error is returned and whatever was already written stays written.
    pub fn encode<W: Write>(&self, mut writer: W, tables: &[Table]) -> Result<()> {
        for table in tables {
            let mut wtr = csv::WriterBuilder::new()
                .delimiter(self.delimiter)
                .flexible(true)
                .from_writer(&mut writer);
            for row in &table.rows {
                wtr.write_record(row)?;
            }
            wtr.flush()?;
            drop(wtr);

            // Separator lines bypass the csv writer so they stay truly empty.
            writer.write_all(b"\n")?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Encodes `tables` into a string.
    pub fn encode_to_string(&self, tables: &[Table]) -> Result<String> {
        let mut buf = Vec::new();
        self.encode(&mut buf, tables)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl Default for CsvEncoder {
    fn default() -> Self {
        Self::new()
    }
}
