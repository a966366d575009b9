//! Value-path resolution over quote option trees.

use tracing::trace;

use crate::types::{AttributeValue, QuoteOption, Scalar};

/// Resolve a key path to a leaf value.
///
/// At each node the first key is tried, in order, as:
/// 1. an attribute: a scalar is returned; a pension-tranche map is indexed
///    with the next key;
/// 2. a child option, recursing with the remaining keys (only when keys remain);
/// 3. a flat top-level field holding a scalar.
///
/// An explicit `null` attribute, or one of a shape that holds no value (a
/// list, a non-scalar tranche entry), counts as missing. Anything else is
/// absent.
/// Zero is a present value.
///
/// # Example
///
/// ```
/// use mdp_content::QuoteOption;
/// use mdp_content::quote::resolve;
///
/// let tree = QuoteOption::new().with_option(
///     "first",
///     QuoteOption::new().with_option("option1", QuoteOption::new().with_attribute("value", 0)),
/// );
/// assert_eq!(resolve(&tree, &["first", "option1", "value"]), Some(0.into()));
/// assert_eq!(resolve(&tree, &["nonexistent", "path"]), None);
/// ```
pub fn resolve(tree: &QuoteOption, keys: &[&str]) -> Option<Scalar> {
    let (&key, rest) = keys.split_first()?;

    match tree.attributes.get(key) {
        Some(AttributeValue::Scalar(value)) => return Some(value.clone()),
        Some(AttributeValue::Tranches(tranches)) => {
            let tranche = rest.first()?;
            return tranches.get(*tranche).and_then(Scalar::from_json);
        }
        Some(AttributeValue::Null | AttributeValue::Other(_)) | None => {}
    }

    if !rest.is_empty() {
        if let Some(option) = tree.options.get(key) {
            return resolve(option, rest);
        }
    }

    let found = tree.fields.get(key).and_then(Scalar::from_json);
    if found.is_none() {
        trace!(key, remaining = rest.len(), "quote path not found");
    }
    found
}

/// Resolve a dotted path such as `fullPension.option1.totalPension`.
pub fn resolve_path(tree: &QuoteOption, path: &str) -> Option<Scalar> {
    let keys = split_path(path);
    resolve(tree, &keys)
}

/// Split a dotted path into keys, ignoring surrounding whitespace and empty segments.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('.')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .collect()
}
