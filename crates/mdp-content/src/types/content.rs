use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value as JsonValue};

/// A CMS content tree with typed leaves.
///
/// CMS responses are arbitrary JSON; the injector only cares about text
/// leaves and containers. Converting to this type up front lets the walk be
/// an exhaustive match instead of runtime type probing.
///
/// # Example
///
/// ```
/// use mdp_content::ContentNode;
/// use serde_json::json;
///
/// let node = ContentNode::from(json!({ "title": "Hello", "items": ["a", 1] }));
/// assert_eq!(node.get("title").and_then(ContentNode::as_text), Some("Hello"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "JsonValue", into = "JsonValue")]
pub enum ContentNode {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    List(Vec<ContentNode>),
    Map(BTreeMap<String, ContentNode>),
}

impl ContentNode {
    /// Get this node as text, if it is a text leaf.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentNode::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a child of a map node.
    pub fn get(&self, key: &str) -> Option<&ContentNode> {
        match self {
            ContentNode::Map(map) => map.get(key),
            _ => None,
        }
    }

    /// Follow a dotted path through map nodes and list indices.
    pub fn get_path(&self, path: &str) -> Option<&ContentNode> {
        path.split('.').try_fold(self, |node, key| match node {
            ContentNode::Map(map) => map.get(key),
            ContentNode::List(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }

    /// Visit every text leaf, depth first, in key order.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        collect_texts(self, &mut out);
        out
    }
}

fn collect_texts<'a>(node: &'a ContentNode, out: &mut Vec<&'a str>) {
    match node {
        ContentNode::Text(s) => out.push(s),
        ContentNode::List(items) => {
            for item in items {
                collect_texts(item, out);
            }
        }
        ContentNode::Map(map) => {
            for child in map.values() {
                collect_texts(child, out);
            }
        }
        ContentNode::Null | ContentNode::Bool(_) | ContentNode::Number(_) => {}
    }
}

impl From<JsonValue> for ContentNode {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => ContentNode::Null,
            JsonValue::Bool(b) => ContentNode::Bool(b),
            JsonValue::Number(n) => ContentNode::Number(n),
            JsonValue::String(s) => ContentNode::Text(s),
            JsonValue::Array(items) => {
                ContentNode::List(items.into_iter().map(ContentNode::from).collect())
            }
            JsonValue::Object(map) => ContentNode::Map(
                map.into_iter()
                    .map(|(k, v)| (k, ContentNode::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<ContentNode> for JsonValue {
    fn from(node: ContentNode) -> Self {
        match node {
            ContentNode::Null => JsonValue::Null,
            ContentNode::Bool(b) => JsonValue::Bool(b),
            ContentNode::Number(n) => JsonValue::Number(n),
            ContentNode::Text(s) => JsonValue::String(s),
            ContentNode::List(items) => {
                JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
            }
            ContentNode::Map(map) => JsonValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for ContentNode {
    fn from(s: &str) -> Self {
        ContentNode::Text(s.to_string())
    }
}

impl From<String> for ContentNode {
    fn from(s: String) -> Self {
        ContentNode::Text(s)
    }
}
