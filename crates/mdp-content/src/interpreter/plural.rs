//! CLDR plural category resolution for English unit names.
//!
//! Rules are built once per thread on first use.

use icu_locale_core::locale;
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};

thread_local! {
    static ENGLISH_RULES: Option<PluralRules> =
        PluralRules::try_new(locale!("en").into(), PluralRuleType::Cardinal.into()).ok();
}

fn category_str(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

/// English CLDR plural category for `n`: `"one"` or `"other"`.
///
/// ```
/// use mdp_content::interpreter::plural_category;
///
/// assert_eq!(plural_category(1), "one");
/// assert_eq!(plural_category(0), "other");
/// assert_eq!(plural_category(65), "other");
/// ```
pub fn plural_category(n: i64) -> &'static str {
    ENGLISH_RULES.with(|rules| match rules {
        Some(rules) => category_str(rules.category_for(n)),
        None if n == 1 => "one",
        None => "other",
    })
}

/// `"1 year"`, `"2 years"`.
pub fn count_with_unit(n: i64, unit: &str) -> String {
    match plural_category(n) {
        "one" => format!("{n} {unit}"),
        _ => format!("{n} {unit}s"),
    }
}
