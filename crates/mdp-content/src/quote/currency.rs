//! Currency formatting: two decimals, comma thousands separators, no locale.

/// Group an amount to two decimal places, e.g. `1234.5` -> `1,234.50`.
///
/// Half cents round away from zero: `0.125` -> `0.13`.
/// Negative amounts keep a leading `-`. Returns `None` for NaN and infinities.
pub fn format_currency(amount: f64) -> Option<String> {
    if !amount.is_finite() {
        return None;
    }
    let cents = (amount.abs() * 100.0).round() as u64;
    let digits = format!("{cents:03}");
    let (whole, fraction) = digits.split_at(digits.len() - 2);
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    Some(format!("{sign}{}.{fraction}", group_thousands(whole)))
}

/// Prefix a grouped amount with a currency symbol: `-£1,234.50`.
pub fn format_money(symbol: &str, amount: f64) -> Option<String> {
    let grouped = format_currency(amount)?;
    Some(match grouped.strip_prefix('-') {
        Some(positive) => format!("-{symbol}{positive}"),
        None => format!("{symbol}{grouped}"),
    })
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len * 2);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn formats_two_decimals() {
        assert_eq!(format_currency(2.0).as_deref(), Some("2.00"));
        assert_eq!(format_currency(1234.5).as_deref(), Some("1,234.50"));
        assert_eq!(format_currency(-0.001).as_deref(), Some("0.00"));
        assert_eq!(format_currency(-98765.432).as_deref(), Some("-98,765.43"));
        assert_eq!(format_currency(0.125).as_deref(), Some("0.13"));
        assert_eq!(format_currency(1234.625).as_deref(), Some("1,234.63"));
        assert_eq!(format_currency(-0.125).as_deref(), Some("-0.13"));
        assert_eq!(format_currency(0.0).as_deref(), Some("0.00"));
        assert_eq!(format_currency(0.07).as_deref(), Some("0.07"));
        assert_eq!(format_currency(f64::NAN), None);
    }

    #[test]
    fn money_puts_sign_before_symbol() {
        assert_eq!(format_money("£", -5.0).as_deref(), Some("-£5.00"));
        assert_eq!(format_money("£", 1000.0).as_deref(), Some("£1,000.00"));
    }
}
