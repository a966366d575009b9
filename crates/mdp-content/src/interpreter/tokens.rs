//! The token table: every `[[token:name]]` value, computed once per page.

use std::collections::BTreeMap;

use mdp_semantics::{TokenId, resolve_token};

use crate::dates::{
    age_on, format_date, format_date_str, iso_duration_to_text, parse_date, time_until,
    years_months_text,
};
use crate::interpreter::TokenSources;
use crate::quote::format_money;
use crate::settings::RenderSettings;
use crate::types::Scalar;

/// Computed token values, keyed by token id.
///
/// Tokens whose source facts are absent have no entry, so references to them
/// stay visible as bracket literals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenTable {
    values: BTreeMap<TokenId, String>,
}

impl TokenTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute every token from `sources`.
    pub fn build(sources: &TokenSources, settings: &RenderSettings) -> Self {
        let values = TokenId::ALL
            .into_iter()
            .filter_map(|id| compute_token(id, sources, settings).map(|value| (id, value)))
            .collect();
        Self { values }
    }

    pub fn get(&self, id: TokenId) -> Option<&str> {
        self.values.get(&id).map(String::as_str)
    }

    /// Look up a token by its name or a legacy alias.
    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        resolve_token(name).and_then(|id| self.get(id))
    }

    /// Set a token value, replacing any computed one.
    pub fn insert(&mut self, id: TokenId, value: impl Into<String>) {
        self.values.insert(id, value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (TokenId, &str)> {
        self.values.iter().map(|(id, value)| (*id, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn compute_token(id: TokenId, sources: &TokenSources, settings: &RenderSettings) -> Option<String> {
    let cms = &sources.cms_tokens;
    let session = &sources.session;
    let date = |value: &Option<String>| {
        value
            .as_deref()
            .and_then(|v| format_date_str(v, &settings.date_format))
    };
    let money = |value: Option<f64>| {
        value.and_then(|amount| format_money(&settings.currency_symbol, amount))
    };
    let number = |value: Option<f64>| value.map(|n| Scalar::Number(n).to_string());
    let duration = |iso: &Option<String>, fallback_date: &Option<String>| {
        iso.as_deref().and_then(iso_duration_to_text).or_else(|| {
            let target = parse_date(fallback_date.as_deref()?)?;
            let (years, months) = time_until(sources.today, target)?;
            Some(years_months_text(years, months))
        })
    };

    let value = match id {
        TokenId::CurrentDate => format_date(sources.today, &settings.date_format),
        TokenId::TenantName => sources.tenant_name.clone(),
        TokenId::Title => cms.title.clone(),
        TokenId::Forenames => cms.forenames.clone(),
        TokenId::Surname => cms.surname.clone(),
        TokenId::Name => cms.name.clone().or_else(|| {
            let parts: Vec<&str> = [&cms.forenames, &cms.surname]
                .into_iter()
                .filter_map(|part| part.as_deref())
                .collect();
            (!parts.is_empty()).then(|| parts.join(" "))
        }),
        TokenId::DateOfBirth => date(&cms.date_of_birth),
        TokenId::Age => cms
            .date_of_birth
            .as_deref()
            .and_then(parse_date)
            .and_then(|dob| age_on(dob, sources.today))
            .map(|age| age.to_string()),
        TokenId::AgeText => cms.age_iso.as_deref().and_then(iso_duration_to_text),
        TokenId::InsuranceNumber => cms.insurance_number.clone(),
        TokenId::ReferenceNumber => cms.reference_number.clone(),
        TokenId::Email => session.pending_email.clone().or_else(|| cms.email.clone()),
        TokenId::PhoneNumber => cms.phone_number.clone(),
        TokenId::MobilePhoneNumber => cms.mobile_phone_number.clone(),
        TokenId::Address => address_lines(sources).map(|lines| lines.join(", ")),
        TokenId::AddressHtml => address_lines(sources).map(|lines| lines.join("<br>")),
        TokenId::PostCode => cms.address.as_ref().and_then(|a| a.post_code.clone()),
        TokenId::SchemeName => cms.scheme_name.clone(),
        TokenId::SchemeCode => cms.scheme_code.clone(),
        TokenId::Category => cms.category.clone(),
        TokenId::MembershipStatus => cms.membership_status.clone(),
        TokenId::DateJoinedScheme => date(&cms.date_joined_scheme),
        TokenId::PensionableServiceStartDate => date(&cms.pensionable_service_start_date),
        TokenId::PensionableService => cms
            .pensionable_service_iso
            .as_deref()
            .and_then(iso_duration_to_text),
        TokenId::NormalRetirementDate => date(&cms.normal_retirement_date),
        TokenId::NormalRetirementAge => number(cms.normal_retirement_age),
        TokenId::TimeToNormalRetirement => duration(
            &cms.time_to_normal_retirement_iso,
            &cms.normal_retirement_date,
        ),
        TokenId::TargetRetirementDate => date(&cms.target_retirement_date),
        TokenId::TargetRetirementAge => number(cms.target_retirement_age),
        TokenId::TimeToTargetRetirement => duration(
            &cms.time_to_target_retirement_iso,
            &cms.target_retirement_date,
        ),
        TokenId::EarliestRetirementDate => date(&cms.earliest_retirement_date),
        TokenId::EarliestRetirementAge => number(cms.earliest_retirement_age),
        TokenId::LatestRetirementDate => date(&cms.latest_retirement_date),
        TokenId::LatestRetirementAge => number(cms.latest_retirement_age),
        TokenId::SelectedQuoteName => cms.selected_quote_name.clone(),
        TokenId::TotalPension => money(cms.total_pension),
        TokenId::TotalLumpSum => money(cms.total_lump_sum),
        TokenId::TotalFundValue => money(cms.total_fund_value),
        TokenId::TransferValue => money(cms.transfer_value),
        TokenId::GuaranteedTransferValue => money(cms.guaranteed_transfer_value),
        TokenId::TransferQuoteExpiryDate => date(&cms.transfer_quote_expiry_date),
        TokenId::LifetimeAllowancePercentage => number(cms.lifetime_allowance_percentage)
            .map(|percentage| format!("{percentage}%")),
        TokenId::RetirementApplicationExpiryDate => date(&cms.retirement_application_expiry_date),
        TokenId::RetirementApplicationSubmissionDate => {
            date(&cms.retirement_application_submission_date)
        }
        TokenId::TransferApplicationSubmissionDate => {
            date(&cms.transfer_application_submission_date)
        }
        TokenId::BereavementReference => cms.bereavement_reference.clone(),
        TokenId::DeceasedName => session.bereavement.deceased_name(),
        TokenId::DateOfDeath => date(&session.bereavement.date_of_death),
        TokenId::ReporterName => session.bereavement.reporter_name(),
        TokenId::ReporterEmail => session.bereavement.reporter_email.clone(),
    };
    value.filter(|v| !v.trim().is_empty())
}

fn address_lines(sources: &TokenSources) -> Option<Vec<&str>> {
    let lines = sources.cms_tokens.address.as_ref()?.lines();
    (!lines.is_empty()).then_some(lines)
}
