//! Error types for html2csv operations.
//!
//! Extraction itself never fails: missing attributes, ragged rows and absent
//! listing blocks all degrade to empty values. Only the edges of the pipeline
//! can fail, which is what [`Html2CsvError`] describes: reading input,
//! parsing a table selector or delimiter, and writing output.
//!
//! # Example
//!
//! ```rust
//! use html2csv_core::{Html2CsvError, Selector};
//!
//! match "0".parse::<Selector>() {
//!     Err(Html2CsvError::InvalidSelector { part, .. }) => assert_eq!(part, "0"),
//!     _ => unreachable!(),
//! }
//! ```

use thiserror::Error;

/// Main error type for table extraction and CSV output.
#[derive(Error, Debug)]
pub enum Html2CsvError {
    /// Reading the input document or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV writer failed.
    ///
    /// Write errors on the destination surface here; bytes already written
    /// are not rolled back.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A table selector entry could not be used.
    ///
    /// Raised while parsing the selector, before any extraction happens.
    #[error("invalid table selector {part:?}: {reason}")]
    InvalidSelector { part: String, reason: String },

    /// The output delimiter was not a single ASCII character.
    #[error("delimiter must be a single ASCII character other than a quote or line break: {0:?}")]
    InvalidDelimiter(String),

    /// The input is not valid UTF-8 and lossy decoding is disabled.
    #[error("Invalid character encoding")]
    InvalidEncoding,
}

/// Result type alias for Html2CsvError.
pub type Result<T> = std::result::Result<T, Html2CsvError>;
