//! Table selection by index, `id` or `name`.
//!
//! A selector is written as a comma-separated list. Entries that parse as
//! integers select tables by their 1-based index; anything else is matched
//! against both the `id` and the `name` of each table.
//!
//! # Example
//!
//! ```rust
//! use html2csv_core::{Selector, Table};
//!
//! let tables = vec![
//!     Table { index: 1, id: "t1".into(), ..Default::default() },
//!     Table { index: 2, ..Default::default() },
//!     Table { index: 3, name: "gamma".into(), ..Default::default() },
//! ];
//!
//! let selector: Selector = "gamma, 2".parse().unwrap();
//! let picked: Vec<usize> = selector.apply(tables).iter().map(|t| t.index).collect();
//! assert_eq!(picked, vec![2, 3]);
//! ```

use std::collections::BTreeSet;
use std::str::FromStr;

use crate::table::Table;
use crate::{Html2CsvError, Result};

/// A set of table indices and a set of names.
///
/// The empty selector matches every table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub indexes: BTreeSet<usize>,
    pub names: BTreeSet<String>,
}

impl Selector {
    /// Parses a comma-separated selector.
    ///
    /// Blank input yields the empty selector.
    ///
    /// # Errors
    ///
    /// Returns [`Html2CsvError::InvalidSelector`] for an integer entry below 1.
    pub fn parse(s: &str) -> Result<Self> {
        let mut selector = Self::default();

        for part in s.split(',').map(str::trim).filter(|part| !part.is_empty()) {
            match part.parse::<i64>() {
                Ok(index) if index >= 1 => {
                    let index = usize::try_from(index).map_err(|_| Html2CsvError::InvalidSelector {
                        part: part.to_string(),
                        reason: "table index is too large".to_string(),
                    })?;
                    selector.indexes.insert(index);
                }
                Ok(_) => {
                    return Err(Html2CsvError::InvalidSelector {
                        part: part.to_string(),
                        reason: "table index must be >= 1".to_string(),
                    });
                }
                Err(_) => {
                    selector.names.insert(part.to_string());
                }
            }
        }

        Ok(selector)
    }

    /// Returns true if the selector matches every table.
    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty() && self.names.is_empty()
    }

    /// Returns true if `table` is selected by index, `id` or `name`.
    ///
    /// Empty `id`/`name` values never match.
    pub fn matches(&self, table: &Table) -> bool {
        self.indexes.contains(&table.index)
            || (!table.id.is_empty() && self.names.contains(&table.id))
            || (!table.name.is_empty() && self.names.contains(&table.name))
    }

    /// Keeps the selected tables, in their original order.
    pub fn apply(&self, tables: Vec<Table>) -> Vec<Table> {
        if self.is_empty() {
            return tables;
        }

        let selected: Vec<Table> = tables.into_iter().filter(|table| self.matches(table)).collect();
        tracing::debug!(selected = selected.len(), "applied table selector");
        selected
    }
}

impl FromStr for Selector {
    type Err = Html2CsvError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
