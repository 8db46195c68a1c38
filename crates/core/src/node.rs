//! Small helpers over `ego_tree` nodes of a parsed document.

use ego_tree::NodeRef;
use scraper::Node;

/// Returns true if `node` is an element named `tag` (lowercase local name).
pub fn is_element(node: NodeRef<'_, Node>, tag: &str) -> bool {
    node.value().as_element().is_some_and(|el| el.name() == tag)
}

/// Looks up an attribute on an element node. Non-elements have no attributes.
pub fn attr<'a>(node: NodeRef<'a, Node>, key: &str) -> Option<&'a str> {
    node.value().as_element().and_then(|el| el.attr(key))
}

/// Finds the first element named `tag` in document order, `root` included.
pub fn first_element<'a>(root: NodeRef<'a, Node>, tag: &str) -> Option<NodeRef<'a, Node>> {
    root.descendants().find(|node| is_element(*node, tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Document;

    #[test]
    fn test_first_element_finds_first_in_document_order() {
        let doc = Document::parse(
            r#"<html><body>
                <div><pre id="first"></pre></div>
                <pre id="second"></pre>
            </body></html>"#,
        )
        .unwrap();

        let pre = first_element(doc.root(), "pre").expect("should find <pre>");
        assert_eq!(attr(pre, "id"), Some("first"));
    }

    #[test]
    fn test_first_element_no_match() {
        let doc = Document::parse("<html><body><div></div></body></html>").unwrap();
        assert!(first_element(doc.root(), "pre").is_none());
    }

    #[test]
    fn test_attr_on_text_node_is_none() {
        let doc = Document::parse("<p>hello</p>").unwrap();
        let p = first_element(doc.root(), "p").unwrap();
        let text = p.first_child().unwrap();

        assert!(text.value().is_text());
        assert_eq!(attr(text, "id"), None);
        assert!(!is_element(text, "p"));
    }
}
