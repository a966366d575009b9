//! End-to-end tests for the `mdp` binary

use std::fs::write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tempfile::TempDir;

fn mdp(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mdp"))
        .args(["--color", "never"])
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("MDP_TENANT")
        .env_remove("MDP_SETTINGS")
        .output()
        .unwrap()
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    write(&path, content).unwrap();
    path
}

fn write_json(dir: &TempDir, name: &str, value: &Value) -> PathBuf {
    write_file(dir, name, &value.to_string())
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

fn quote_tree(dir: &TempDir) -> PathBuf {
    write_json(
        dir,
        "quote.json",
        &json!({
            "options": {
                "first": {
                    "options": {
                        "option1": { "attributes": { "value": 0 } },
                        "option2": { "attributes": { "value": 1500.5 } }
                    }
                }
            }
        }),
    )
}

#[test]
fn test_resolve_zero_value() {
    let dir = TempDir::new().unwrap();
    let quote = quote_tree(&dir);
    let output = mdp(&["resolve", "--quote", arg(&quote), "--path", "first.option1.value"]);
    assert_eq!(output.status.code(), Some(exitcode::OK));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "0");
}

#[test]
fn test_resolve_missing_path_is_data_error() {
    let dir = TempDir::new().unwrap();
    let quote = quote_tree(&dir);
    let output = mdp(&[
        "resolve",
        "--quote",
        arg(&quote),
        "--path",
        "nonexistent.path",
        "--json",
    ]);
    assert_eq!(output.status.code(), Some(exitcode::DATAERR));
    assert_eq!(
        stdout_json(&output),
        json!({ "path": "nonexistent.path", "value": null })
    );
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let absent = dir.path().join("absent.json");
    let output = mdp(&["resolve", "--quote", arg(&absent), "--path", "a"]);
    assert_eq!(output.status.code(), Some(exitcode::NOINPUT));
}

#[test]
fn test_render_summary_json() {
    let dir = TempDir::new().unwrap();
    let quote = quote_tree(&dir);
    let summary = write_json(
        &dir,
        "summary.json",
        &json!([
            { "header": "Annual pension", "format": "Currency per year", "value": "first.option2.value" },
            { "header": "Note", "format": "Text", "value": "Paid monthly" }
        ]),
    );
    let labels = write_json(&dir, "labels.json", &json!({ "year": "yr" }));

    let output = mdp(&[
        "render",
        "--quote",
        arg(&quote),
        "--summary",
        arg(&summary),
        "--labels",
        arg(&labels),
        "--json",
    ]);
    assert_eq!(output.status.code(), Some(exitcode::OK));

    let rendered = stdout_json(&output);
    assert_eq!(rendered[0]["rendered"]["value"], json!("£1,500.50/yr"));
    assert_eq!(rendered[1]["rendered"]["value"], json!("Paid monthly"));
}

#[test]
fn test_inject_content_tree() {
    let dir = TempDir::new().unwrap();
    let content = write_json(
        &dir,
        "content.json",
        &json!({
            "title": "Welcome to [[token:tenant-name]], [[token:forenames]]",
            "items": ["[[token:insurance-number]]"]
        }),
    );
    let tokens = write_json(&dir, "tokens.json", &json!({ "forenames": "Ada" }));

    let output = mdp(&[
        "inject",
        "--content",
        arg(&content),
        "--tokens",
        arg(&tokens),
        "--tenant",
        "Acme",
        "--strict",
    ]);
    assert_eq!(output.status.code(), Some(exitcode::DATAERR));
    assert_eq!(
        stdout_json(&output),
        json!({
            "title": "Welcome to Acme, Ada",
            "items": ["[[token:insurance-number]]"]
        })
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("token 'insurance-number' has no value"));
}

#[test]
fn test_inject_html_rules() {
    let dir = TempDir::new().unwrap();
    let content = write_json(
        &dir,
        "content.json",
        &json!({ "html": "<p>[[modal:help]]</p><p> </p>" }),
    );

    let output = mdp(&["inject", "--content", arg(&content), "--html"]);
    assert_eq!(output.status.code(), Some(exitcode::OK));
    assert_eq!(
        stdout_json(&output),
        json!({ "html": r#"<p><span id="modal-help" class="mdp-modal-placeholder"></span></p>"# })
    );
}

#[test]
fn test_check_reports_counts() {
    let dir = TempDir::new().unwrap();
    let content = write_json(
        &dir,
        "page.json",
        &json!({
            "intro": "Hi [[token:name]], see [[modal:help]]",
            "footer": "[[label:contact]] [[data-date:quote.date]]"
        }),
    );

    let output = mdp(&["check", arg(&content), "--json"]);
    assert_eq!(output.status.code(), Some(exitcode::OK));

    let reports = stdout_json(&output);
    assert_eq!(reports[0]["texts"], json!(2));
    assert_eq!(
        reports[0]["counts"],
        json!({ "token": 1, "modal": 1, "label": 1, "data-date": 1 })
    );
    assert_eq!(reports[0]["errors"], json!([]));
}

#[test]
fn test_check_flags_malformed_markers() {
    let dir = TempDir::new().unwrap();
    let text = write_file(&dir, "page.html", "<p>Hello [[tokn:name]] and [[token:nmae]]</p>");

    let output = mdp(&["check", arg(&text), "--json"]);
    assert_eq!(output.status.code(), Some(exitcode::DATAERR));

    let reports = stdout_json(&output);
    assert_eq!(
        reports[0]["errors"],
        json!(["unknown placeholder kind 'tokn' at 1:10"])
    );
    assert_eq!(reports[0]["warnings"].as_array().map(Vec::len), Some(1));
}

#[test]
fn test_dispatch_page() {
    let dir = TempDir::new().unwrap();
    let quote = quote_tree(&dir);
    let page = write_json(
        &dir,
        "page.json",
        &json!({
            "blocks": [
                { "type": "Heading", "elements": { "text": "Hello [[token:forenames]]" } },
                { "type": "Legacy block" },
                { "type": "Legacy block", "elements": { "panelNameLabel": "Old widget" } }
            ]
        }),
    );
    let tokens = write_json(&dir, "tokens.json", &json!({ "forenames": "Ada" }));

    let output = mdp(&[
        "dispatch",
        "--page",
        arg(&page),
        "--quote",
        arg(&quote),
        "--tokens",
        arg(&tokens),
    ]);
    assert_eq!(output.status.code(), Some(exitcode::OK));
    assert_eq!(
        stdout_json(&output),
        json!([
            {
                "component": "Heading",
                "family": "content",
                "elements": { "text": "Hello Ada" }
            },
            {
                "component": "Unknown",
                "family": "placeholder",
                "panelName": "Old widget"
            }
        ])
    );
}
