//! Text extraction.

use ego_tree::NodeRef;
use scraper::Node;

/// Concatenates every text node under `node`, in document order.
///
/// `node` itself counts if it is a text node. Nothing is inserted between
/// sibling fragments and nothing is trimmed; callers trim when they need to.
pub fn text_content(node: NodeRef<'_, Node>) -> String {
    node.descendants()
        .filter_map(|n| n.value().as_text())
        .map(|text| &**text)
        .collect()
}
