//! Integration tests for value-path resolution over quote option trees

use mdp_content::quote::{resolve, resolve_path, split_path};
use mdp_content::{QuoteOption, Scalar};
use pretty_assertions::assert_eq;
use serde_json::json;

fn quote_tree() -> QuoteOption {
    serde_json::from_value(json!({
        "options": {
            "first": {
                "options": {
                    "option1": { "attributes": { "value": 0 } },
                    "option2": { "attributes": { "value": 1500.5, "label": "Reduced pension" } }
                }
            },
            "fullPension": {
                "attributes": {
                    "pensionTranches": { "pre88GMP": 120.0, "post97": 880.25, "post88GMP": null },
                    "retired": null
                },
                "options": {
                    "retired": { "attributes": { "flag": true } }
                }
            }
        },
        "totalLumpSum": 25000
    }))
    .unwrap()
}

#[test]
fn test_zero_attribute_is_present() {
    let tree = quote_tree();
    assert_eq!(
        resolve(&tree, &["first", "option1", "value"]),
        Some(Scalar::Number(0.0))
    );
}

#[test]
fn test_unknown_path_is_absent() {
    let tree = quote_tree();
    assert_eq!(resolve(&tree, &["nonexistent", "path"]), None);
    assert_eq!(resolve(&tree, &["first", "option3", "value"]), None);
    assert_eq!(resolve(&tree, &[]), None);
}

#[test]
fn test_text_attribute() {
    let tree = quote_tree();
    assert_eq!(
        resolve_path(&tree, "first.option2.label"),
        Some(Scalar::from("Reduced pension"))
    );
}

#[test]
fn test_tranche_attribute_is_indexed_by_next_key() {
    let tree = quote_tree();
    assert_eq!(
        resolve_path(&tree, "fullPension.pensionTranches.post97"),
        Some(Scalar::Number(880.25))
    );
    assert_eq!(
        resolve_path(&tree, "fullPension.pensionTranches.post88GMP"),
        None
    );
    assert_eq!(resolve_path(&tree, "fullPension.pensionTranches"), None);
}

#[test]
fn test_null_attribute_falls_through_to_child_option() {
    let tree = quote_tree();
    assert_eq!(
        resolve_path(&tree, "fullPension.retired.flag"),
        Some(Scalar::Bool(true))
    );
}

#[test]
fn test_flat_field_fallback() {
    let tree = quote_tree();
    assert_eq!(
        resolve_path(&tree, "totalLumpSum"),
        Some(Scalar::Number(25000.0))
    );
}

#[test]
fn test_option_node_is_not_a_value() {
    let tree = quote_tree();
    assert_eq!(resolve_path(&tree, "first"), None);
    assert_eq!(resolve_path(&tree, "first.option1"), None);
}

#[test]
fn test_builder_tree_matches_json_tree() {
    let built = QuoteOption::new()
        .with_option(
            "first",
            QuoteOption::new()
                .with_option("option1", QuoteOption::new().with_attribute("value", 0)),
        )
        .with_field("totalLumpSum", 25000);
    assert_eq!(
        resolve_path(&built, "first.option1.value"),
        Some(Scalar::Number(0.0))
    );
    assert_eq!(
        resolve_path(&built, "totalLumpSum"),
        Some(Scalar::Number(25000.0))
    );
}

#[test]
fn test_split_path_ignores_blank_segments() {
    assert_eq!(split_path(" a . b..c "), vec!["a", "b", "c"]);
    assert!(split_path("").is_empty());
}

#[test]
fn test_unexpected_shapes_do_not_reject_the_tree() {
    let tree: QuoteOption = serde_json::from_value(json!({
        "options": {
            "first": {
                "attributes": {
                    "value": 5,
                    "notes": ["a", "b"],
                    "tranches": { "post97": 10, "breakdown": { "gmp": 1 }, "history": [1, 2] }
                }
            }
        }
    }))
    .unwrap();

    assert_eq!(resolve_path(&tree, "first.value"), Some(Scalar::Number(5.0)));
    assert_eq!(resolve_path(&tree, "first.notes"), None);
    assert_eq!(resolve_path(&tree, "first.notes.0"), None);
    assert_eq!(
        resolve_path(&tree, "first.tranches.post97"),
        Some(Scalar::Number(10.0))
    );
    assert_eq!(resolve_path(&tree, "first.tranches.breakdown"), None);
    assert_eq!(resolve_path(&tree, "first.tranches.history"), None);
}

#[test]
fn test_builder_tranches_resolve() {
    let tree = QuoteOption::new().with_tranches("tranches", [("pre88GMP", 120.5)]);
    assert_eq!(
        resolve_path(&tree, "tranches.pre88GMP"),
        Some(Scalar::Number(120.5))
    );
}
