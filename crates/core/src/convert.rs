//! Main conversion API.
//!
//! This module ties the pipeline together: parse the document, extract its
//! tables (with the directory-listing fallback), apply the table selector,
//! optionally skip header rows, and encode the result.
//!
//! # Example
//!
//! ```rust
//! use html2csv_core::{ConvertConfig, convert};
//!
//! let html = r#"
//!     <table id="a"><tr><td>1</td><td>2</td></tr></table>
//!     <table id="b"><tr><td>x</td></tr></table>
//! "#;
//!
//! let config = ConvertConfig::builder().selector("b").unwrap().build();
//! let mut out = Vec::new();
//! convert(html, &config, &mut out).unwrap();
//!
//! assert_eq!(String::from_utf8(out).unwrap(), "x\n\n");
//! ```

use std::io::{Read, Write};

use crate::encode::{COMMA, CsvEncoder, TAB, parse_delimiter};
use crate::parse::Document;
use crate::select::Selector;
use crate::table::{Table, skip_header};
use crate::Result;

/// Configuration for a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Output field delimiter (default: `,`).
    pub delimiter: u8,

    /// Which tables to keep (default: all).
    pub selector: Selector,

    /// Drop the first row of every table (default: false).
    pub skip_header: bool,

    /// Replace invalid UTF-8 instead of failing (default: true).
    pub lossy: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self { delimiter: COMMA, selector: Selector::default(), skip_header: false, lossy: true }
    }
}

impl ConvertConfig {
    /// Creates a new builder for ConvertConfig.
    pub fn builder() -> ConvertConfigBuilder {
        ConvertConfigBuilder::new()
    }

    /// Encoder matching this configuration.
    pub fn encoder(&self) -> CsvEncoder {
        CsvEncoder::with_delimiter(self.delimiter)
    }
}

/// Builder for ConvertConfig.
///
/// # Example
///
/// ```rust
/// use html2csv_core::ConvertConfig;
///
/// let config = ConvertConfig::builder()
///     .delimiter(";")
///     .unwrap()
///     .skip_header(true)
///     .build();
///
/// assert_eq!(config.delimiter, b';');
/// assert!(config.skip_header);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConvertConfigBuilder {
    config: ConvertConfig,
}

impl ConvertConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: ConvertConfig::default() }
    }

    /// Sets the delimiter from a user string.
    ///
    /// # Errors
    ///
    /// Fails unless `value` is exactly one ASCII character other than a quote
    /// or line break.
    pub fn delimiter(mut self, value: &str) -> Result<Self> {
        self.config.delimiter = parse_delimiter(value)?;
        Ok(self)
    }

    /// Switches to tab-separated output.
    pub fn tsv(mut self, value: bool) -> Self {
        if value {
            self.config.delimiter = TAB;
        }
        self
    }

    /// Sets the table selector from its textual form.
    ///
    /// # Errors
    ///
    /// Fails if an index in `value` is below 1.
    pub fn selector(mut self, value: &str) -> Result<Self> {
        self.config.selector = Selector::parse(value)?;
        Ok(self)
    }

    /// Sets whether header rows are dropped.
    pub fn skip_header(mut self, value: bool) -> Self {
        self.config.skip_header = value;
        self
    }

    /// Sets whether invalid UTF-8 is replaced or rejected.
    pub fn lossy(mut self, value: bool) -> Self {
        self.config.lossy = value;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> ConvertConfig {
        self.config
    }
}

/// Extracts, selects and optionally header-skips the tables of `doc`.
pub fn select_tables(doc: &Document, config: &ConvertConfig) -> Vec<Table> {
    let tables = config.selector.apply(doc.tables());
    if config.skip_header {
        let tables = skip_header(tables);
        tracing::debug!(remaining = tables.len(), "skipped header rows");
        return tables;
    }
    tables
}

/// Converts an HTML string and writes the selected tables to `writer`.
///
/// Returns the tables that were written.
pub fn convert<W: Write>(html: &str, config: &ConvertConfig, writer: W) -> Result<Vec<Table>> {
    let doc = Document::parse(html)?;
    write_tables(&doc, config, writer)
}

/// Like [`convert`], reading the document from `reader` first.
pub fn convert_reader<R: Read, W: Write>(reader: R, config: &ConvertConfig, writer: W) -> Result<Vec<Table>> {
    let doc = Document::from_reader(reader, config.lossy)?;
    write_tables(&doc, config, writer)
}

fn write_tables<W: Write>(doc: &Document, config: &ConvertConfig, writer: W) -> Result<Vec<Table>> {
    let tables = select_tables(doc, config);
    config.encoder().encode(writer, &tables)?;
    Ok(tables)
}
