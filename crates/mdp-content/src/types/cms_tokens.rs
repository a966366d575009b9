use serde::{Deserialize, Serialize};

/// Named facts about the current member and journey, fetched once per page.
///
/// Every field is optional: the backend only sends what applies to the
/// member. Dates are ISO 8601 strings, ages and periods are ISO 8601
/// durations (`P65Y3M`) or plain numbers, money is in pounds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CmsTokens {
    pub title: Option<String>,
    pub forenames: Option<String>,
    pub surname: Option<String>,
    pub name: Option<String>,
    pub date_of_birth: Option<String>,
    pub age_iso: Option<String>,
    pub insurance_number: Option<String>,
    pub reference_number: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub mobile_phone_number: Option<String>,
    pub address: Option<PostalAddress>,
    pub scheme_name: Option<String>,
    pub scheme_code: Option<String>,
    pub category: Option<String>,
    pub membership_status: Option<String>,
    pub date_joined_scheme: Option<String>,
    pub pensionable_service_start_date: Option<String>,
    pub pensionable_service_iso: Option<String>,
    pub normal_retirement_date: Option<String>,
    pub normal_retirement_age: Option<f64>,
    pub time_to_normal_retirement_iso: Option<String>,
    pub target_retirement_date: Option<String>,
    pub target_retirement_age: Option<f64>,
    pub time_to_target_retirement_iso: Option<String>,
    pub earliest_retirement_date: Option<String>,
    pub earliest_retirement_age: Option<f64>,
    pub latest_retirement_date: Option<String>,
    pub latest_retirement_age: Option<f64>,
    pub selected_quote_name: Option<String>,
    pub total_pension: Option<f64>,
    pub total_lump_sum: Option<f64>,
    pub total_fund_value: Option<f64>,
    pub transfer_value: Option<f64>,
    pub guaranteed_transfer_value: Option<f64>,
    pub transfer_quote_expiry_date: Option<String>,
    pub lifetime_allowance_percentage: Option<f64>,
    pub retirement_application_expiry_date: Option<String>,
    pub retirement_application_submission_date: Option<String>,
    pub transfer_application_submission_date: Option<String>,
    pub bereavement_reference: Option<String>,
}

/// A member's postal address as held by the administration system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostalAddress {
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub line3: Option<String>,
    pub line4: Option<String>,
    pub line5: Option<String>,
    pub country: Option<String>,
    pub post_code: Option<String>,
}

impl PostalAddress {
    /// Non-blank address lines in display order, post code last.
    pub fn lines(&self) -> Vec<&str> {
        [
            &self.line1,
            &self.line2,
            &self.line3,
            &self.line4,
            &self.line5,
            &self.country,
            &self.post_code,
        ]
        .into_iter()
        .filter_map(|line| line.as_deref())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
    }
}
