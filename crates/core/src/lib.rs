//! Extract tables from HTML documents and write them as CSV/TSV.
//!
//! Every `<table>` of a document is numbered in document order, its rows are
//! collected and normalized into a rectangular grid, and empty tables are
//! dropped. Pages without real tables, such as plain directory listings, are
//! handled by a `<pre>`-based fallback.
//!
//! # Example
//!
//! ```rust
//! use html2csv_core::{CsvEncoder, Document};
//!
//! let doc = Document::parse("<table><tr><td></td><td>a</td></tr><tr><td></td><td>b</td></tr></table>").unwrap();
//! let tables = doc.tables();
//!
//! let csv = CsvEncoder::new().encode_to_string(&tables).unwrap();
//! assert_eq!(csv, "a\nb\n\n");
//! ```

pub mod convert;
pub mod encode;
pub mod error;
pub mod grid;
pub mod listing;
pub mod node;
pub mod parse;
pub mod rows;
pub mod select;
pub mod table;
pub mod text;

pub use convert::{ConvertConfig, ConvertConfigBuilder, convert, convert_reader, select_tables};
pub use encode::{COMMA, CsvEncoder, TAB, parse_delimiter};
pub use error::{Html2CsvError, Result};
#[doc(hidden)]
pub use grid::{drop_empty_rows, normalize, normalize_width, trim_empty_columns};
pub use listing::{DIRECTORY_TABLE_NAME, parse_directory_listing};
pub use parse::Document;
pub use rows::{Row, extract_rows};
pub use select::Selector;
pub use table::{Table, extract_tables, locate_tables, skip_header};
pub use text::text_content;
