//! Rendering of CMS summary items against a quote option tree.

use chrono::NaiveDate;
use mdp_semantics::PlaceholderKind;
use serde::Serialize;

use crate::dates::{format_date_str, parse_date, time_until, years_months_text};
use crate::quote::currency::format_money;
use crate::quote::resolve::{resolve, split_path};
use crate::settings::RenderSettings;
use crate::types::{Labels, QuoteOption, Scalar, SummaryFormat, SummaryItem};

/// The display value of one summary item.
///
/// `value` is `None` when the item's path did not resolve; callers decide
/// what to show in its place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedValue {
    pub format: SummaryFormat,
    pub value: Option<String>,
}

/// A rendered summary line with its nested explanations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedSummary {
    pub header: String,
    pub description: Option<String>,
    pub rendered: RenderedValue,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explanations: Vec<RenderedSummary>,
}

/// Render a summary item.
///
/// - `Text`, or no tree: the authored value, unchanged.
/// - Otherwise the dotted path is resolved; an absent value gives `None`.
/// - `Currency`: `<symbol><grouped 2dp>`.
/// - `Currency per year`: the same, suffixed with `/<year label>`.
/// - Any other format with a present value: a single space.
///
/// # Example
///
/// ```
/// use mdp_content::quote::render_summary_item;
/// use mdp_content::{Labels, QuoteOption, RenderSettings, SummaryFormat, SummaryItem};
///
/// let tree = QuoteOption::new().with_attribute("total", 1500);
/// let item = SummaryItem::builder()
///     .format(SummaryFormat::Currency)
///     .value("total")
///     .build();
/// let rendered = render_summary_item(&item, &Labels::new(), Some(&tree), &RenderSettings::default());
/// assert_eq!(rendered.value.as_deref(), Some("£1,500.00"));
/// ```
pub fn render_summary_item(
    item: &SummaryItem,
    labels: &Labels,
    tree: Option<&QuoteOption>,
    settings: &RenderSettings,
) -> RenderedValue {
    let format = item.format.clone();
    let tree = match (&format, tree) {
        (SummaryFormat::Text, _) | (_, None) => {
            return RenderedValue {
                format,
                value: Some(item.value.clone()),
            };
        }
        (_, Some(tree)) => tree,
    };

    let keys = split_path(&item.value);
    let Some(resolved) = resolve(tree, &keys) else {
        return RenderedValue {
            format,
            value: None,
        };
    };

    let value = match &format {
        SummaryFormat::Currency => resolved
            .as_number()
            .and_then(|amount| format_money(&settings.currency_symbol, amount)),
        SummaryFormat::CurrencyPerYear => resolved
            .as_number()
            .and_then(|amount| format_money(&settings.currency_symbol, amount))
            .map(|money| format!("{money}/{}", labels.label(&settings.year_label_key))),
        SummaryFormat::Text | SummaryFormat::Other(_) => Some(" ".to_string()),
    };

    RenderedValue { format, value }
}

/// Render a list of summary items, including nested explanation items.
pub fn render_summary(
    items: &[SummaryItem],
    labels: &Labels,
    tree: Option<&QuoteOption>,
    settings: &RenderSettings,
) -> Vec<RenderedSummary> {
    items
        .iter()
        .map(|item| RenderedSummary {
            header: item.header.clone(),
            description: item.description.clone(),
            rendered: render_summary_item(item, labels, tree, settings),
            explanations: render_summary(&item.explanation_summary_items, labels, tree, settings),
        })
        .collect()
}

/// Format a resolved value for a `[[data-*:path]]` binding.
///
/// `data-currency` needs a number, `data-date` and `data-timeto` an ISO date
/// (`data-timeto` one that is not past `today`). Other kinds render the value
/// as text. `None` means the value cannot be shown in that form.
///
/// ```
/// use chrono::NaiveDate;
/// use mdp_content::quote::format_value;
/// use mdp_content::{RenderSettings, Scalar};
/// use mdp_semantics::PlaceholderKind;
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let settings = RenderSettings::default();
/// let amount = Scalar::from(98765.4);
/// assert_eq!(
///     format_value(&amount, PlaceholderKind::DataCurrency, &settings, today).as_deref(),
///     Some("£98,765.40")
/// );
/// let date = Scalar::from("2026-07-01");
/// assert_eq!(
///     format_value(&date, PlaceholderKind::DataTimeTo, &settings, today).as_deref(),
///     Some("2 years 6 months")
/// );
/// ```
pub fn format_value(
    value: &Scalar,
    kind: PlaceholderKind,
    settings: &RenderSettings,
    today: NaiveDate,
) -> Option<String> {
    match kind {
        PlaceholderKind::DataCurrency => value
            .as_number()
            .and_then(|amount| format_money(&settings.currency_symbol, amount)),
        PlaceholderKind::DataDate => format_date_str(&value.to_string(), &settings.date_format),
        PlaceholderKind::DataTimeTo => parse_date(&value.to_string())
            .and_then(|date| time_until(today, date))
            .map(|(years, months)| years_months_text(years, months)),
        PlaceholderKind::DataText
        | PlaceholderKind::Token
        | PlaceholderKind::Label
        | PlaceholderKind::Modal
        | PlaceholderKind::Tooltip
        | PlaceholderKind::Message
        | PlaceholderKind::Button
        | PlaceholderKind::Timer
        | PlaceholderKind::Icon
        | PlaceholderKind::Badge => Some(value.to_string()),
    }
}
