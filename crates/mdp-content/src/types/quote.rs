use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::Scalar;

/// One node of a quote option tree returned by the calculation backend.
///
/// A node carries named `attributes` (scalars or pension-tranche maps) and
/// named child `options`. Any other top-level fields are kept in `fields`;
/// the resolver falls back to them when a node is a flat record, such as a
/// single pension tranche.
///
/// # Example
///
/// ```
/// use mdp_content::QuoteOption;
///
/// let tree: QuoteOption = serde_json::from_str(r#"{
///     "options": { "first": { "attributes": { "value": 0 } } }
/// }"#).unwrap();
/// assert!(tree.options.contains_key("first"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteOption {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, AttributeValue>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, QuoteOption>,

    /// Remaining top-level fields (flat fallback record).
    #[serde(flatten)]
    pub fields: BTreeMap<String, JsonValue>,
}

/// The value of a single attribute.
///
/// Backends occasionally send shapes the portal has no use for (lists of
/// notes, nested records). Those are kept as [`AttributeValue::Other`] so
/// that one odd attribute never rejects the whole tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// A plain value.
    Scalar(Scalar),
    /// Pension tranches keyed by tranche name (e.g. `pre88GMP`, `post97`).
    /// Entries that are not scalars resolve to nothing.
    Tranches(BTreeMap<String, JsonValue>),
    /// An explicit `null` from the backend.
    Null,
    /// Any other JSON shape. Never a resolvable value.
    Other(JsonValue),
}

impl QuoteOption {
    /// Create an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scalar attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.attributes
            .insert(key.into(), AttributeValue::Scalar(value.into()));
        self
    }

    /// Add a pension-tranche attribute.
    pub fn with_tranches<K, V>(
        mut self,
        key: impl Into<String>,
        tranches: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<Scalar>,
    {
        let map = tranches
            .into_iter()
            .map(|(k, v)| (k.into(), JsonValue::from(v.into())))
            .collect();
        self.attributes
            .insert(key.into(), AttributeValue::Tranches(map));
        self
    }

    /// Add a child option.
    pub fn with_option(mut self, key: impl Into<String>, option: QuoteOption) -> Self {
        self.options.insert(key.into(), option);
        self
    }

    /// Add a flat top-level field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}
