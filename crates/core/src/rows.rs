//! Row extraction from `<table>` elements.

use ego_tree::NodeRef;
use scraper::Node;

use crate::node::is_element;
use crate::text::text_content;

/// A row of cell values.
pub type Row = Vec<String>;

/// Collects the raw rows of a table node.
///
/// Every `<tr>` in the subtree is visited in document order, including rows
/// wrapped in `thead`/`tbody`/`tfoot` and rows of nested tables. Only the
/// direct `<td>`/`<th>` children of a row become fields. Rows without any
/// cells are skipped. The result is ragged; see [`crate::grid::normalize`].
pub fn extract_rows(table: NodeRef<'_, Node>) -> Vec<Row> {
    table
        .descendants()
        .filter(|node| is_element(*node, "tr"))
        .map(row_cells)
        .filter(|row| !row.is_empty())
        .collect()
}

fn row_cells(tr: NodeRef<'_, Node>) -> Row {
    tr.children()
        .filter(|child| is_element(*child, "td") || is_element(*child, "th"))
        .map(|cell| text_content(cell).trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Document;
    use crate::node::first_element;

    fn rows_of(html: &str) -> Vec<Row> {
        let doc = Document::parse(html).unwrap();
        let table = first_element(doc.root(), "table").unwrap();
        extract_rows(table)
    }

    #[test]
    fn test_rows_inside_sections() {
        let rows = rows_of(
            r#"<table>
                <thead><tr><th>H1</th><th>H2</th></tr></thead>
                <tbody><tr><td> a </td><td>b</td></tr></tbody>
                <tfoot><tr><td>f</td></tr></tfoot>
            </table>"#,
        );

        assert_eq!(rows, vec![vec!["H1", "H2"], vec!["a", "b"], vec!["f"]]);
    }

    #[test]
    fn test_rows_without_cells_are_skipped() {
        let rows = rows_of("<table><tr></tr><tr><td>x</td></tr></table>");
        assert_eq!(rows, vec![vec!["x"]]);
    }

    #[test]
    fn test_empty_cells_are_kept() {
        let rows = rows_of("<table><tr><td></td><td>  </td></tr></table>");
        assert_eq!(rows, vec![vec!["", ""]]);
    }

    #[test]
    fn test_nested_table_rows_are_visited() {
        let rows = rows_of(
            r#"<table>
                <tr><td>outer<table><tr><td>inner</td></tr></table></td></tr>
            </table>"#,
        );

        assert_eq!(rows, vec![vec!["outerinner"], vec!["inner"]]);
    }

    #[test]
    fn test_ragged_rows_are_not_padded() {
        let rows = rows_of("<table><tr><td>1</td><td>2</td></tr><tr><td>3</td></tr></table>");
        assert_eq!(rows, vec![vec!["1", "2"], vec!["3"]]);
    }
}
