//! Table formatting utilities for CLI output.

use std::collections::BTreeMap;

use comfy_table::{ContentArrangement, Table, presets};
use mdp_content::RenderedSummary;
use mdp_semantics::PlaceholderKind;
use serde::Serialize;

/// Check results for one file.
#[derive(Debug, Default, Serialize)]
pub struct FileReport {
    pub path: String,
    /// Number of text leaves checked.
    pub texts: usize,
    /// Placeholder count per kind name.
    pub counts: BTreeMap<&'static str, usize>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl FileReport {
    fn count_where(&self, predicate: impl Fn(PlaceholderKind) -> bool) -> usize {
        PlaceholderKind::ALL
            .into_iter()
            .filter(|kind| predicate(*kind))
            .filter_map(|kind| self.counts.get(kind.as_str()))
            .sum()
    }
}

/// Format check results as a table, one row per file.
pub fn format_check_table(reports: &[FileReport]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "File",
        "Texts",
        "Tokens",
        "Labels",
        "Directives",
        "Data bindings",
        "Errors",
        "Warnings",
    ]);

    for report in reports {
        table.add_row(vec![
            report.path.clone(),
            report.texts.to_string(),
            report
                .count_where(|kind| kind == PlaceholderKind::Token)
                .to_string(),
            report
                .count_where(|kind| kind == PlaceholderKind::Label)
                .to_string(),
            report.count_where(PlaceholderKind::is_directive).to_string(),
            report
                .count_where(PlaceholderKind::is_data_binding)
                .to_string(),
            report.errors.len().to_string(),
            report.warnings.len().to_string(),
        ]);
    }

    table
}

/// Format rendered summary lines as a table. Explanations are indented under
/// their parent line.
pub fn format_summary_table(rows: &[RenderedSummary], na_symbol: &str) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Header", "Format", "Value"]);
    add_summary_rows(&mut table, rows, na_symbol, 0);
    table
}

fn add_summary_rows(table: &mut Table, rows: &[RenderedSummary], na_symbol: &str, depth: usize) {
    for row in rows {
        table.add_row(vec![
            format!("{}{}", "  ".repeat(depth), row.header),
            row.rendered.format.to_string(),
            row.rendered
                .value
                .clone()
                .unwrap_or_else(|| na_symbol.to_string()),
        ]);
        add_summary_rows(table, &row.explanations, na_symbol, depth + 1);
    }
}
