//! HTML parsing.
//!
//! This module provides the [`Document`] type, a thin wrapper over
//! `scraper::Html` that hands the rest of the crate an immutable node tree to
//! walk. Parsing follows the HTML5 algorithm, so malformed markup is repaired
//! rather than rejected.
//!
//! # Example
//!
//! ```rust
//! use html2csv_core::Document;
//!
//! let html = r#"
//!     <html>
//!         <head><title>Report</title></head>
//!         <body>
//!             <table><tr><td>1</td></tr></table>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html).unwrap();
//! assert_eq!(doc.title(), Some("Report".to_string()));
//! assert_eq!(doc.tables().len(), 1);
//! ```

use std::io::Read;

use ego_tree::NodeRef;
use scraper::{Html, Node};

use crate::node::first_element;
use crate::table::{Table, extract_tables};
use crate::text::text_content;
use crate::{Html2CsvError, Result};

/// Represents a parsed HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use html2csv_core::Document;
    ///
    /// let doc = Document::parse("<table><tr><td>a</td></tr></table>").unwrap();
    /// assert_eq!(doc.tables()[0].rows, vec![vec!["a".to_string()]]);
    /// ```
    pub fn parse(html: &str) -> Result<Self> {
        let html = Html::parse_document(html);
        Ok(Self { html })
    }

    /// Parses HTML from raw bytes.
    ///
    /// With `lossy` set, invalid UTF-8 sequences are replaced with U+FFFD the
    /// way browsers do; otherwise they are rejected with
    /// [`Html2CsvError::InvalidEncoding`].
    pub fn from_bytes(bytes: &[u8], lossy: bool) -> Result<Self> {
        if lossy {
            return Self::parse(&String::from_utf8_lossy(bytes));
        }

        let html = std::str::from_utf8(bytes).map_err(|_| Html2CsvError::InvalidEncoding)?;
        Self::parse(html)
    }

    /// Reads the whole of `reader` and parses it.
    ///
    /// # Errors
    ///
    /// Returns [`Html2CsvError::Io`] if reading fails. No partial document is
    /// produced in that case.
    pub fn from_reader<R: Read>(mut reader: R, lossy: bool) -> Result<Self> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Self::from_bytes(&buf, lossy)
    }

    /// Gets the root node of the tree (the document node).
    pub fn root(&self) -> NodeRef<'_, Node> {
        self.html.tree.root()
    }

    /// Gets the content of the first `<title>` element, if any.
    pub fn title(&self) -> Option<String> {
        first_element(self.root(), "title").map(|node| text_content(node).trim().to_string())
    }

    /// Extracts every table of the document.
    ///
    /// Falls back to the directory-listing heuristic when no `<table>` yields
    /// rows. See [`extract_tables`].
    pub fn tables(&self) -> Vec<Table> {
        extract_tables(self.root())
    }
}
