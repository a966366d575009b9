//! Integration tests for date normalization and duration text

use chrono::NaiveDate;
use mdp_content::dates::{
    DateError, RetirementDates, age_on, format_date_str, iso_duration_to_text, normalize_date,
    normalize_retirement_dates, parse_date,
};
use pretty_assertions::assert_eq;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_every_date_form_normalizes_the_same_way() {
    let forms = [
        "2030-06-01",
        "2030-06-01T00:00:00Z",
        "2030-06-01T00:00:00+01:00",
        "2030-06-01T23:30:00-05:00",
        "2030-06-01T12:00:00",
        "2030-06-01T12:00:00.250",
    ];
    for form in forms {
        assert_eq!(
            normalize_date("retirementDate", form).as_deref(),
            Ok("2030-06-01T00:00:00.000Z"),
            "form {form}"
        );
    }
}

#[test]
fn test_all_four_request_dates_are_normalized() {
    let dates = RetirementDates {
        retirement_date: "2030-06-01T00:00:00+01:00".into(),
        date_of_birth: "1965-06-01".into(),
        earliest_retirement_date: "2020-06-01T00:00:00Z".into(),
        latest_retirement_date: "2040-06-01T18:45:00".into(),
    };
    assert_eq!(
        normalize_retirement_dates(&dates),
        Ok(RetirementDates {
            retirement_date: "2030-06-01T00:00:00.000Z".into(),
            date_of_birth: "1965-06-01T00:00:00.000Z".into(),
            earliest_retirement_date: "2020-06-01T00:00:00.000Z".into(),
            latest_retirement_date: "2040-06-01T00:00:00.000Z".into(),
        })
    );
}

#[test]
fn test_invalid_date_names_the_field() {
    let dates = RetirementDates {
        retirement_date: "2030-06-01".into(),
        date_of_birth: "not a date".into(),
        earliest_retirement_date: "2020-06-01".into(),
        latest_retirement_date: "2040-06-01".into(),
    };
    let err = normalize_retirement_dates(&dates).unwrap_err();
    assert_eq!(
        err,
        DateError::Invalid {
            field: "dateOfBirth",
            value: "not a date".to_string(),
        }
    );
    assert_eq!(err.to_string(), "invalid dateOfBirth: 'not a date'");
}

#[test]
fn test_parse_keeps_written_calendar_date() {
    assert_eq!(parse_date("1990-05-10T00:00:00+01:00"), Some(date(1990, 5, 10)));
    assert_eq!(parse_date(" 1990-05-10 "), Some(date(1990, 5, 10)));
    assert_eq!(parse_date("10/05/1990"), None);
}

#[test]
fn test_format_date_str() {
    assert_eq!(
        format_date_str("1990-05-10T00:00:00Z", "%d/%m/%Y").as_deref(),
        Some("10/05/1990")
    );
    assert_eq!(format_date_str("garbage", "%d/%m/%Y"), None);
}

#[test]
fn test_age_on_birthday_boundary() {
    let dob = date(1965, 6, 1);
    assert_eq!(age_on(dob, date(2024, 5, 31)), Some(58));
    assert_eq!(age_on(dob, date(2024, 6, 1)), Some(59));
    assert_eq!(age_on(dob, date(1960, 1, 1)), None);
}

#[test]
fn test_iso_durations() {
    assert_eq!(iso_duration_to_text("P65Y3M").as_deref(), Some("65 years 3 months"));
    assert_eq!(iso_duration_to_text("P1Y1M").as_deref(), Some("1 year 1 month"));
    assert_eq!(iso_duration_to_text("P2W").as_deref(), Some("2 weeks"));
    assert_eq!(iso_duration_to_text("P0Y0M").as_deref(), Some("0 days"));
    assert_eq!(iso_duration_to_text("P1Y2MT3H").as_deref(), Some("1 year 2 months"));
    assert_eq!(iso_duration_to_text("P5").as_deref(), None);
    assert_eq!(iso_duration_to_text("P1X").as_deref(), None);
}
