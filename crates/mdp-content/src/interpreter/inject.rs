//! Content-tree injection.

use crate::interpreter::TextRewriter;
use crate::types::ContentNode;

/// Rewrite every text leaf of `node` with `rewriter`, returning the new tree.
///
/// Maps and lists are walked recursively; list elements are visited like map
/// values, so text inside arrays of blocks is injected too. Non-text leaves
/// are returned unchanged.
///
/// # Example
///
/// ```
/// use mdp_content::interpreter::{TextParser, TokenTable, inject};
/// use mdp_content::{ContentNode, Labels};
/// use mdp_semantics::TokenId;
/// use serde_json::json;
///
/// let mut tokens = TokenTable::new();
/// tokens.insert(TokenId::TenantName, "Acme");
/// let parser = TextParser::new(tokens, &Labels::new());
///
/// let content = ContentNode::from(json!({ "title": "Welcome to [[token:tenant-name]]", "order": 1 }));
/// let injected = serde_json::Value::from(inject(content, &parser));
/// assert_eq!(injected, json!({ "title": "Welcome to Acme", "order": 1 }));
/// ```
pub fn inject<R: TextRewriter + ?Sized>(node: ContentNode, rewriter: &R) -> ContentNode {
    match node {
        ContentNode::Text(text) => ContentNode::Text(rewriter.rewrite(&text)),
        ContentNode::List(items) => ContentNode::List(
            items
                .into_iter()
                .map(|item| inject(item, rewriter))
                .collect(),
        ),
        ContentNode::Map(map) => ContentNode::Map(
            map.into_iter()
                .map(|(key, child)| (key, inject(child, rewriter)))
                .collect(),
        ),
        leaf @ (ContentNode::Null | ContentNode::Bool(_) | ContentNode::Number(_)) => leaf,
    }
}
