use std::collections::HashSet;

use mdp_semantics::{
    BlockFamily, BlockKind, KNOWN_BLOCK_KINDS, PlaceholderKind, TokenId, accepted_token_names,
    resolve_block_kind, resolve_placeholder_kind, resolve_token,
};

#[test]
fn placeholder_kinds_round_trip_through_their_literal() {
    for kind in PlaceholderKind::ALL {
        assert_eq!(resolve_placeholder_kind(kind.as_str()), Some(kind));
    }
    assert_eq!(resolve_placeholder_kind("Token"), None);
    assert_eq!(resolve_placeholder_kind("data"), None);
}

#[test]
fn directive_and_data_binding_kinds_are_disjoint() {
    for kind in PlaceholderKind::ALL {
        assert!(!(kind.is_directive() && kind.is_data_binding()));
    }
    assert!(PlaceholderKind::Badge.is_directive());
    assert!(PlaceholderKind::DataTimeTo.is_data_binding());
    assert!(!PlaceholderKind::Token.is_directive());
    assert!(!PlaceholderKind::Label.is_data_binding());
}

#[test]
fn token_names_are_unique_and_resolvable() {
    let names: HashSet<&str> = TokenId::ALL.into_iter().map(TokenId::as_str).collect();
    assert_eq!(names.len(), TokenId::ALL.len());
    for id in TokenId::ALL {
        assert_eq!(resolve_token(id.as_str()), Some(id));
    }
    assert_eq!(accepted_token_names().len(), 50);
}

#[test]
fn legacy_token_aliases_resolve() {
    assert_eq!(resolve_token("userName"), Some(TokenId::Name));
    assert_eq!(resolve_token("dob"), Some(TokenId::DateOfBirth));
    assert_eq!(resolve_token("nino"), Some(TokenId::InsuranceNumber));
    assert_eq!(resolve_token("today"), Some(TokenId::CurrentDate));
    assert_eq!(resolve_token("no-such-token"), None);
}

#[test]
fn every_known_block_kind_has_a_literal_and_family() {
    let literals: HashSet<&str> = KNOWN_BLOCK_KINDS
        .into_iter()
        .filter_map(BlockKind::as_str)
        .collect();
    assert_eq!(literals.len(), KNOWN_BLOCK_KINDS.len());
    for kind in KNOWN_BLOCK_KINDS {
        assert!(kind.family().is_some(), "{kind:?} has no family");
        let literal = kind.as_str().unwrap();
        assert_eq!(resolve_block_kind(literal, None), kind);
    }
    assert_eq!(BlockKind::Unknown.as_str(), None);
    assert_eq!(BlockKind::Unknown.family(), None);
}

#[test]
fn form_key_takes_precedence_over_type() {
    assert_eq!(
        resolve_block_kind("Form", Some("email_form")),
        BlockKind::EmailForm
    );
    assert_eq!(
        resolve_block_kind("Content HTML block", Some("unknown_form")),
        BlockKind::ContentHtml
    );
    assert_eq!(BlockKind::EmailForm.family(), Some(BlockFamily::Form));
}

#[test]
fn block_aliases_and_unknown_literals() {
    assert_eq!(resolve_block_kind("Rich text", None), BlockKind::ContentHtml);
    assert_eq!(resolve_block_kind("Alert", None), BlockKind::Message);
    assert_eq!(resolve_block_kind("Summary", None), BlockKind::Summary);
    assert_eq!(
        resolve_block_kind("Brand new widget", None),
        BlockKind::Unknown
    );
    assert_eq!(resolve_block_kind("", None), BlockKind::Unknown);
}
