//! Integration tests for the token table, text and HTML injection

use chrono::NaiveDate;
use mdp_content::interpreter::{
    HtmlParser, InjectWarning, TextParser, TokenSources, TokenTable, inject,
};
use mdp_content::state::{AppAction, AppState, BereavementForm};
use mdp_content::{CmsTokens, ContentNode, PostalAddress, QuoteOption, RenderSettings, labels};
use mdp_semantics::TokenId;
use pretty_assertions::assert_eq;
use serde_json::json;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

fn member() -> CmsTokens {
    CmsTokens {
        forenames: Some("Ada".into()),
        surname: Some("Lovelace".into()),
        date_of_birth: Some("1965-06-01".into()),
        email: Some("ada@example.com".into()),
        address: Some(PostalAddress {
            line1: Some("1 High Street".into()),
            line2: Some("  ".into()),
            line3: Some("Leeds".into()),
            post_code: Some("LS1 1AA".into()),
            ..PostalAddress::default()
        }),
        normal_retirement_date: Some("2030-06-01".into()),
        normal_retirement_age: Some(65.0),
        total_pension: Some(12345.6),
        ..CmsTokens::default()
    }
}

fn sources() -> TokenSources {
    TokenSources::builder()
        .tenant_name("Acme Pension Scheme")
        .cms_tokens(member())
        .labels(labels! {
            "greeting" => "Hello [[token:forenames]]",
            "year" => "year",
        })
        .today(today())
        .build()
}

fn text_parser() -> TextParser {
    TextParser::from_sources(&sources(), &RenderSettings::default())
}

#[test]
fn test_token_table_values() {
    let table = TokenTable::build(&sources(), &RenderSettings::default());
    assert_eq!(table.get(TokenId::TenantName), Some("Acme Pension Scheme"));
    assert_eq!(table.get(TokenId::Name), Some("Ada Lovelace"));
    assert_eq!(table.get(TokenId::DateOfBirth), Some("01 June 1965"));
    assert_eq!(table.get(TokenId::Age), Some("58"));
    assert_eq!(table.get(TokenId::CurrentDate), Some("01 March 2024"));
    assert_eq!(table.get(TokenId::TotalPension), Some("£12,345.60"));
    assert_eq!(table.get(TokenId::NormalRetirementAge), Some("65"));
    assert_eq!(
        table.get(TokenId::TimeToNormalRetirement),
        Some("6 years 3 months")
    );
}

#[test]
fn test_address_tokens_skip_blank_lines() {
    let table = TokenTable::build(&sources(), &RenderSettings::default());
    assert_eq!(
        table.get(TokenId::Address),
        Some("1 High Street, Leeds, LS1 1AA")
    );
    assert_eq!(
        table.get(TokenId::AddressHtml),
        Some("1 High Street<br>Leeds<br>LS1 1AA")
    );
}

#[test]
fn test_absent_facts_have_no_token() {
    let table = TokenTable::build(&sources(), &RenderSettings::default());
    assert_eq!(table.get(TokenId::InsuranceNumber), None);
    assert_eq!(table.get(TokenId::DeceasedName), None);
}

#[test]
fn test_legacy_aliases_resolve() {
    let table = TokenTable::build(&sources(), &RenderSettings::default());
    assert_eq!(table.get_by_name("userName"), Some("Ada Lovelace"));
    assert_eq!(table.get_by_name("dob"), Some("01 June 1965"));
    assert_eq!(table.get_by_name("tenant"), Some("Acme Pension Scheme"));
    assert_eq!(table.get_by_name("not-a-token"), None);
}

#[test]
fn test_session_state_feeds_tokens() {
    let session = AppState::default()
        .reduce(AppAction::SetPendingEmail(Some("new@example.com".into())))
        .reduce(AppAction::UpdateBereavement(BereavementForm {
            deceased_forenames: Some("Charles".into()),
            deceased_surname: Some("Babbage".into()),
            ..BereavementForm::default()
        }));
    let sources = TokenSources::builder()
        .cms_tokens(member())
        .session(session)
        .today(today())
        .build();
    let table = TokenTable::build(&sources, &RenderSettings::default());
    assert_eq!(table.get(TokenId::Email), Some("new@example.com"));
    assert_eq!(table.get(TokenId::DeceasedName), Some("Charles Babbage"));
}

#[test]
fn test_text_substitutes_tokens_and_labels() {
    let parser = text_parser();
    assert_eq!(
        parser.parse("[[label:greeting]], welcome to [[token:tenant-name]]."),
        "Hello Ada, welcome to Acme Pension Scheme."
    );
}

#[test]
fn test_marker_free_text_is_unchanged() {
    let parser = text_parser();
    let text = "No markers here, just [brackets] and ]] stray closers.";
    assert_eq!(parser.parse(text), text);
    assert_eq!(parser.parse(&parser.parse(text)), text);
}

#[test]
fn test_missing_token_stays_bracketed() {
    let parser = text_parser();
    let (text, warnings) = parser.parse_with_warnings("NI number: [[token:insurance-number]]");
    assert_eq!(text, "NI number: [[token:insurance-number]]");
    assert_eq!(
        warnings,
        vec![InjectWarning::MissingToken {
            name: "insurance-number".to_string()
        }]
    );
}

#[test]
fn test_unknown_token_suggests_names() {
    let parser = text_parser();
    let (text, warnings) = parser.parse_with_warnings("[[token:nmae]]");
    assert_eq!(text, "[[token:nmae]]");
    match &warnings[..] {
        [InjectWarning::UnknownToken { name, suggestions }] => {
            assert_eq!(name, "nmae");
            assert!(suggestions.contains(&"name".to_string()));
        }
        other => panic!("expected one unknown-token warning, got {other:?}"),
    }
}

#[test]
fn test_unknown_label_suggests_keys() {
    let parser = text_parser();
    let (text, warnings) = parser.parse_with_warnings("[[label:greting]] [[label:greting]]");
    assert_eq!(text, "[[label:greting]] [[label:greting]]");
    assert_eq!(
        warnings,
        vec![InjectWarning::UnknownLabel {
            key: "greting".to_string(),
            suggestions: vec!["greeting".to_string()],
        }]
    );
    assert_eq!(
        warnings[0].to_string(),
        "unknown label 'greting'; did you mean: greeting?"
    );
}

#[test]
fn test_text_parser_leaves_directives() {
    let parser = text_parser();
    assert_eq!(
        parser.parse("See [[modal:help]] for [[data-text:x]]"),
        "See [[modal:help]] for [[data-text:x]]"
    );
}

fn html_parser() -> HtmlParser {
    let quote = QuoteOption::new().with_option(
        "fullPension",
        QuoteOption::new()
            .with_attribute("total", 1234.5)
            .with_attribute("name", "Full pension")
            .with_attribute("date", "2030-06-01"),
    );
    HtmlParser::builder()
        .text(text_parser())
        .data(quote)
        .today(today())
        .build()
}

#[test]
fn test_html_rewrite() {
    let html = html_parser().parse(
        "<p>Dear [[token:forenames]]</p><p>[[modal:help]]</p><p>&nbsp;</p>\
         <ul><li> </li><li>[[data-currency:fullPension.total]]</li></ul>",
    );
    insta::assert_snapshot!(html, @r#"<p>Dear Ada</p><p><span id="modal-help" class="mdp-modal-placeholder"></span></p><ul><li>£1,234.50</li></ul>"#);
}

#[test]
fn test_html_data_bindings() {
    let parser = html_parser();
    assert_eq!(parser.parse("[[data-text:fullPension.name]]"), "Full pension");
    assert_eq!(parser.parse("[[data-date:fullPension.date]]"), "01 June 2030");
    assert_eq!(
        parser.parse("[[data-timeto:fullPension.date]]"),
        "6 years 3 months"
    );
    assert_eq!(parser.parse("[[data-currency:fullPension.missing]]"), "N/A");
}

#[test]
fn test_html_without_data_uses_na_symbol() {
    let settings = RenderSettings::builder().na_symbol("-").build();
    let parser = HtmlParser::builder()
        .text(TextParser::default())
        .settings(settings)
        .build();
    assert_eq!(parser.parse("<p>[[data-text:a.b]]</p>"), "<p>-</p>");
}

#[test]
fn test_html_class_prefix_follows_settings() {
    let settings = RenderSettings::builder()
        .placeholder_class_prefix("portal")
        .build();
    let parser = HtmlParser::builder()
        .text(TextParser::default())
        .settings(settings)
        .build();
    assert_eq!(
        parser.parse("[[tooltip:tax-free]]"),
        r#"<span id="tooltip-tax-free" class="portal-tooltip-placeholder"></span>"#
    );
}

#[test]
fn test_html_directive_listing() {
    let spans = html_parser().directives("[[timer:15]] text [[token:name]] [[icon:info]]");
    let ids: Vec<&str> = spans.iter().map(|span| span.element_id.as_str()).collect();
    assert_eq!(ids, vec!["timer-15", "icon-info"]);
}

#[test]
fn test_html_markers_inside_labels_are_rewritten() {
    let sources = TokenSources::builder()
        .cms_tokens(member())
        .labels(labels! {
            "help_text" => "Need help? [[tooltip:pension-help]]",
            "total_line" => "Total: [[data-currency:fullPension.total]]",
            "nested" => "See [[label:help_text]]",
        })
        .today(today())
        .build();
    let parser = HtmlParser::builder()
        .text(TextParser::from_sources(&sources, &RenderSettings::default()))
        .data(QuoteOption::new().with_option(
            "fullPension",
            QuoteOption::new().with_attribute("total", 1234.5),
        ))
        .today(today())
        .build();

    assert_eq!(
        parser.parse("<p>[[label:help_text]]</p>"),
        r#"<p>Need help? <span id="tooltip-pension-help" class="mdp-tooltip-placeholder"></span></p>"#
    );
    assert_eq!(
        parser.parse("<p>[[label:total_line]]</p>"),
        "<p>Total: £1,234.50</p>"
    );
    assert_eq!(parser.parse("[[label:nested]]"), "See [[label:help_text]]");
    let ids: Vec<String> = parser
        .directives("[[label:help_text]]")
        .into_iter()
        .map(|span| span.element_id)
        .collect();
    assert_eq!(ids, vec!["tooltip-pension-help".to_string()]);
}

#[test]
fn test_html_unresolved_markers_warn_once() {
    let (html, warnings) =
        html_parser().parse_with_warnings("<p>[[token:surname-x]] [[label:nope]]</p>");
    assert_eq!(html, "<p>[[token:surname-x]] [[label:nope]]</p>");
    assert_eq!(warnings.len(), 2);
}

#[test]
fn test_inject_walks_maps_and_lists() {
    let content = ContentNode::from(json!({
        "title": "Welcome to [[token:tenant-name]]",
        "blocks": [
            { "text": "Hi [[token:forenames]]" },
            "[[label:greeting]]"
        ],
        "order": 3,
        "visible": true,
        "image": null
    }));
    let injected = serde_json::Value::from(inject(content, &text_parser()));
    assert_eq!(
        injected,
        json!({
            "title": "Welcome to Acme Pension Scheme",
            "blocks": [
                { "text": "Hi Ada" },
                "Hello Ada"
            ],
            "order": 3,
            "visible": true,
            "image": null
        })
    );
}

#[test]
fn test_inject_is_identity_without_markers() {
    let content = ContentNode::from(json!({
        "title": "Plain",
        "items": ["a", { "b": "c" }, 1.5]
    }));
    assert_eq!(inject(content.clone(), &text_parser()), content);
}
