//! Inputs to the token table.

use bon::Builder;
use chrono::{Local, NaiveDate};

use crate::state::AppState;
use crate::types::{CmsTokens, Labels};

/// Everything tokens and labels are computed from.
///
/// # Example
///
/// ```
/// use mdp_content::interpreter::TokenSources;
/// use mdp_content::CmsTokens;
/// use chrono::NaiveDate;
///
/// let sources = TokenSources::builder()
///     .tenant_name("Acme Pension Scheme")
///     .cms_tokens(CmsTokens { forenames: Some("Ada".into()), ..CmsTokens::default() })
///     .today(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
///     .build();
/// assert_eq!(sources.tenant_name.as_deref(), Some("Acme Pension Scheme"));
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct TokenSources {
    /// Display name of the tenant (the pension scheme's brand).
    pub tenant_name: Option<String>,

    /// Member facts fetched for the page.
    #[builder(default)]
    pub cms_tokens: CmsTokens,

    /// CMS globals; each becomes a `[[label:key]]` rule.
    #[builder(default)]
    pub labels: Labels,

    /// Session state of the journey in progress.
    #[builder(default)]
    pub session: AppState,

    /// The date `current-date` and relative periods are computed from.
    #[builder(default = Local::now().date_naive())]
    pub today: NaiveDate,
}
