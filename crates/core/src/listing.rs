//! Directory-listing fallback.
//!
//! Plain directory index pages (Apache `mod_autoindex`, nginx `autoindex`)
//! render their listing as a `<pre>` block instead of a table:
//!
//! ```text
//! <pre><a href="?C=N;O=D">Name</a> <a href="?C=M;O=A">Last modified</a> <a href="?C=S;O=A">Size</a>
//! <hr><a href="/pub/">Parent Directory</a>                        -
//! <a href="file.iso">file.iso</a>        2025-08-25 20:08  3.3G
//! </pre>
//! ```
//!
//! Anchors before the `<hr>` are column headers; every anchor after it starts
//! a row, completed from the whitespace-separated text that follows it.

use ego_tree::NodeRef;
use scraper::Node;

use crate::grid::normalize_width;
use crate::node::{first_element, is_element};
use crate::rows::Row;
use crate::table::Table;
use crate::text::text_content;

/// Name given to the synthesized table.
pub const DIRECTORY_TABLE_NAME: &str = "directory";

/// Builds a table from the first `<pre>` block under `root`.
///
/// Returns `None` when there is no `<pre>`, when it has no header anchors,
/// or when no anchor follows an `<hr>`.
pub fn parse_directory_listing(root: NodeRef<'_, Node>) -> Option<Table> {
    let pre = first_element(root, "pre")?;

    let mut header = Row::new();
    let mut rows = Vec::new();
    let mut in_header = true;

    for node in pre.children() {
        if is_element(node, "hr") {
            in_header = false;
            continue;
        }
        if !is_element(node, "a") {
            continue;
        }

        let label = text_content(node).trim().to_string();
        if in_header {
            header.push(label);
        } else {
            rows.push(listing_row(label, node.next_sibling()));
        }
    }

    if header.is_empty() || rows.is_empty() {
        return None;
    }

    let mut grid = Vec::with_capacity(rows.len() + 1);
    grid.push(header);
    grid.extend(rows);

    Some(Table {
        index: 1,
        id: String::new(),
        name: DIRECTORY_TABLE_NAME.to_string(),
        rows: normalize_width(grid),
    })
}

/// Name, then `date time` and size when the trailing text provides them.
fn listing_row(name: String, meta: Option<NodeRef<'_, Node>>) -> Row {
    let mut row = vec![name];

    let Some(text) = meta.and_then(|node| node.value().as_text()) else {
        return row;
    };

    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() >= 2 {
        row.push(format!("{} {}", fields[0], fields[1]));
    }
    if let Some(size) = fields.get(2) {
        row.push(size.to_string());
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Document;

    fn listing_of(html: &str) -> Option<Table> {
        let doc = Document::parse(html).unwrap();
        parse_directory_listing(doc.root())
    }

    #[test]
    fn test_happy_path_with_hr_boundary() {
        let table = listing_of(
            r#"<!doctype html><html><body>
<pre>
  <a href="?C=N;O=D">Name</a>
  <a href="?C=M;O=A">Last modified</a>
  <a href="?C=S;O=A">Size</a>
  <a href="?C=D;O=A">Description</a>
  <hr>
  <a href="/releases/amd64/">Parent Directory</a>                                                 -
  <a href="file.iso">file.iso</a>                  2025-08-25 20:08  3.3G
  <a href="file.iso.sha256">file.iso.sha256</a>          2025-08-25 20:08  112
</pre>
</body></html>"#,
        )
        .expect("should synthesize a table");

        assert_eq!(table.index, 1);
        assert_eq!(table.name, DIRECTORY_TABLE_NAME);
        assert!(table.id.is_empty());
        assert_eq!(
            table.rows,
            vec![
                vec!["Name", "Last modified", "Size", "Description"],
                vec!["Parent Directory", "", "", ""],
                vec!["file.iso", "2025-08-25 20:08", "3.3G", ""],
                vec!["file.iso.sha256", "2025-08-25 20:08", "112", ""],
            ]
        );
    }

    #[test]
    fn test_header_anchors_on_one_line() {
        let table = listing_of(
            r#"<html><body><pre>
  <a href="?C=N;O=D">Name</a> <a href="?C=M;O=A">Last modified</a> <a href="?C=S;O=A">Size</a>
  <hr>
  <a href="x">x</a> 2025-01-01 00:00  1K
</pre></body></html>"#,
        )
        .unwrap();

        assert_eq!(
            table.rows,
            vec![vec!["Name", "Last modified", "Size"], vec!["x", "2025-01-01 00:00", "1K"]]
        );
    }

    #[test]
    fn test_no_pre() {
        assert!(listing_of("<html><body><div>no pre</div></body></html>").is_none());
    }

    #[test]
    fn test_no_hr_means_no_rows() {
        let table = listing_of(
            r#"<html><body><pre>
  <a href="?C=N;O=D">Name</a>
  <a href="?C=M;O=A">Last modified</a>
</pre></body></html>"#,
        );

        assert!(table.is_none());
    }

    #[test]
    fn test_hr_without_header_anchors() {
        let table = listing_of(
            r#"<html><body><pre>
  some text
  <hr>
  <a href="x">x</a> 2025-01-01 00:00  1K
</pre></body></html>"#,
        );

        assert!(table.is_none());
    }

    #[test]
    fn test_header_without_rows() {
        let table = listing_of(
            r#"<html><body><pre>
  <a href="?C=N;O=D">Name</a>
  <a href="?C=S;O=A">Size</a>
  <hr>
</pre></body></html>"#,
        );

        assert!(table.is_none());
    }

    #[test]
    fn test_row_meta_not_a_text_node() {
        let table = listing_of(
            r#"<html><body><pre>
  <a href="?C=N;O=D">Name</a>
  <a href="?C=M;O=A">Last modified</a>
  <a href="?C=S;O=A">Size</a>
  <hr>
  <a href="x">x</a><span>ignored</span>
</pre></body></html>"#,
        )
        .unwrap();

        assert_eq!(table.rows, vec![vec!["Name", "Last modified", "Size"], vec!["x", "", ""]]);
    }

    #[test]
    fn test_header_anchor_without_text_is_empty_label() {
        let table = listing_of(r#"<html><body><pre><a href="?C=N"><img src="i.png"></a><hr><a href="f">f</a></pre></body></html>"#)
            .expect("should synthesize a table");

        assert_eq!(table.rows, vec![vec![""], vec!["f"]]);
    }

    #[test]
    fn test_only_first_pre_is_used() {
        let table = listing_of(
            r#"<pre>no anchors</pre>
<pre><a href="?C=N">Name</a><hr><a href="f">f</a> 2025-01-01 10:00 1K
</pre>"#,
        );

        assert!(table.is_none());
    }

    #[test]
    fn test_rows_wider_than_header_keep_grid_rectangular() {
        let table = listing_of(
            r#"<pre><a href="?C=N">Name</a><hr><a href="f">f</a> 2025-01-01 10:00 1K
</pre>"#,
        )
        .unwrap();

        assert_eq!(table.rows, vec![vec!["Name", "", ""], vec!["f", "2025-01-01 10:00", "1K"]]);
        assert!(table.is_rectangular());
    }
}
