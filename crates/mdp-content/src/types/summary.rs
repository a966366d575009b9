use std::fmt::{Display, Formatter, Result as FmtResult};

use bon::Builder;
use serde::{Deserialize, Serialize};

/// Declared display format of a summary item.
///
/// Parsed from the CMS literal. Literals the portal has no rendering for are
/// kept in `Other` so they can be reported rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SummaryFormat {
    Text,
    Currency,
    CurrencyPerYear,
    Other(String),
}

impl SummaryFormat {
    pub fn as_str(&self) -> &str {
        match self {
            SummaryFormat::Text => "Text",
            SummaryFormat::Currency => "Currency",
            SummaryFormat::CurrencyPerYear => "Currency per year",
            SummaryFormat::Other(s) => s,
        }
    }
}

impl From<String> for SummaryFormat {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Text" => SummaryFormat::Text,
            "Currency" => SummaryFormat::Currency,
            "Currency per year" => SummaryFormat::CurrencyPerYear,
            _ => SummaryFormat::Other(s),
        }
    }
}

impl From<&str> for SummaryFormat {
    fn from(s: &str) -> Self {
        SummaryFormat::from(s.to_string())
    }
}

impl From<SummaryFormat> for String {
    fn from(format: SummaryFormat) -> Self {
        match format {
            SummaryFormat::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for SummaryFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A CMS-authored display directive for one line of a quote summary.
///
/// `value` is either literal text (for `Text`) or a dotted path into the
/// quote option tree.
///
/// # Example
///
/// ```
/// use mdp_content::{SummaryFormat, SummaryItem};
///
/// let item = SummaryItem::builder()
///     .header("Annual pension")
///     .format(SummaryFormat::CurrencyPerYear)
///     .value("fullPension.option1.totalPension")
///     .build();
/// assert!(item.explanation_summary_items.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct SummaryItem {
    #[builder(default)]
    #[serde(default)]
    pub header: String,

    #[serde(default)]
    pub description: Option<String>,

    pub format: SummaryFormat,

    #[builder(default)]
    #[serde(default)]
    pub value: String,

    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub explanation_summary_items: Vec<SummaryItem>,
}
