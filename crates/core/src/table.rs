//! Table discovery.
//!
//! The entry point is [`extract_tables`]: it numbers every `<table>` of the
//! document in encounter order, extracts and normalizes its rows, and keeps
//! the tables that end up with at least one row. When none do, the
//! directory-listing fallback in [`crate::listing`] gets one chance to
//! synthesize a table from a `<pre>` block.
//!
//! # Example
//!
//! ```rust
//! use html2csv_core::{Document, extract_tables};
//!
//! let html = r#"
//!     <table id="empty"></table>
//!     <table id="data">
//!         <tr><th>A</th><th>B</th></tr>
//!         <tr><td>1</td><td>2</td></tr>
//!     </table>
//! "#;
//!
//! let doc = Document::parse(html).unwrap();
//! let tables = extract_tables(doc.root());
//!
//! // The empty table is dropped but still consumed index 1.
//! assert_eq!(tables.len(), 1);
//! assert_eq!(tables[0].index, 2);
//! assert_eq!(tables[0].id, "data");
//! ```

use ego_tree::NodeRef;
use scraper::Node;

use crate::grid::{is_rectangular, normalize};
use crate::listing::parse_directory_listing;
use crate::node::{attr, is_element};
use crate::rows::{Row, extract_rows};

/// One extracted table, real or synthesized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// 1-based position among the `<table>` elements of the document.
    pub index: usize,
    /// Value of the `id` attribute, empty if absent.
    pub id: String,
    /// Value of the `name` attribute, empty if absent.
    pub name: String,
    /// Rectangular row grid.
    pub rows: Vec<Row>,
}

impl Table {
    /// Number of fields per row (0 for a table without rows).
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if all rows share the same field count.
    pub fn is_rectangular(&self) -> bool {
        is_rectangular(&self.rows)
    }

    /// A short label for diagnostics: `#index`, plus id and name when set.
    pub fn label(&self) -> String {
        let mut label = format!("#{}", self.index);
        if !self.id.is_empty() {
            label.push_str(&format!(" id={}", self.id));
        }
        if !self.name.is_empty() {
            label.push_str(&format!(" name={}", self.name));
        }
        label
    }
}

/// Traversal state: the running `<table>` counter and the tables kept so far.
#[derive(Default)]
struct Locator {
    index: usize,
    tables: Vec<Table>,
}

impl Locator {
    fn visit(&mut self, node: NodeRef<'_, Node>) {
        // Counted before the emptiness check, so dropped tables keep their slot.
        self.index += 1;

        let rows = normalize(extract_rows(node));
        let id = attr(node, "id").unwrap_or_default().to_string();
        let name = attr(node, "name").unwrap_or_default().to_string();

        if rows.is_empty() {
            tracing::debug!(index = self.index, %id, %name, "discarding table without rows");
            return;
        }

        tracing::debug!(index = self.index, %id, %name, rows = rows.len(), "found table");
        self.tables.push(Table { index: self.index, id, name, rows });
    }
}

/// Finds every `<table>` under `root` that has rows, without the fallback.
///
/// Nested tables are visited as well: their text is part of the enclosing
/// cell and they are also reported as tables of their own.
pub fn locate_tables(root: NodeRef<'_, Node>) -> Vec<Table> {
    let mut locator = Locator::default();
    for node in root.descendants().filter(|node| is_element(*node, "table")) {
        locator.visit(node);
    }
    locator.tables
}

/// Finds every table under `root`, falling back to a directory listing.
///
/// An empty result is not an error; it means the document has nothing
/// tabular in it.
pub fn extract_tables(root: NodeRef<'_, Node>) -> Vec<Table> {
    let tables = locate_tables(root);
    if !tables.is_empty() {
        return tables;
    }

    match parse_directory_listing(root) {
        Some(table) => {
            tracing::debug!(rows = table.rows.len(), "using directory listing fallback");
            vec![table]
        }
        None => {
            tracing::debug!("no tables found");
            Vec::new()
        }
    }
}

/// Drops the first row of every table.
///
/// Tables with a single row (a header without a body) are dropped entirely.
pub fn skip_header(tables: Vec<Table>) -> Vec<Table> {
    tables
        .into_iter()
        .filter(|table| table.rows.len() > 1)
        .map(|mut table| {
            table.rows.remove(0);
            table
        })
        .collect()
}
