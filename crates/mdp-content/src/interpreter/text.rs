//! Token and label substitution for plain CMS text.

use std::collections::BTreeMap;

use mdp_semantics::{PlaceholderKind, accepted_token_names, resolve_token};
use tracing::debug;

use crate::interpreter::error::compute_suggestions;
use crate::interpreter::{InjectWarning, TokenSources, TokenTable};
use crate::parser::{Segment, parse_template, placeholder_source};
use crate::settings::RenderSettings;
use crate::types::Labels;

/// Rewrites text leaves of a content tree.
pub trait TextRewriter {
    fn rewrite(&self, text: &str) -> String;
}

/// Substitutes `[[token:x]]` and `[[label:x]]`.
///
/// Unresolved references are written back as their bracket literal. Every
/// other marker kind is left untouched for later passes.
///
/// # Example
///
/// ```
/// use mdp_content::interpreter::{TextParser, TokenTable};
/// use mdp_content::Labels;
/// use mdp_semantics::TokenId;
///
/// let mut tokens = TokenTable::new();
/// tokens.insert(TokenId::Forenames, "Ada");
/// let labels = Labels::from_iter([("greeting", "Hello [[token:forenames]]")]);
/// let parser = TextParser::new(tokens, &labels);
///
/// assert_eq!(parser.parse("[[label:greeting]]!"), "Hello Ada!");
/// assert_eq!(parser.parse("[[token:surname]]"), "[[token:surname]]");
/// assert_eq!(parser.parse("See [[modal:help]]"), "See [[modal:help]]");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextParser {
    tokens: TokenTable,
    /// Label text with tokens already substituted.
    labels: BTreeMap<String, String>,
}

impl TextParser {
    /// Build a parser from a token table and CMS labels.
    ///
    /// Labels may reference tokens; they are rendered through the token rules
    /// once here. Labels referencing other labels are not expanded.
    pub fn new(tokens: TokenTable, labels: &Labels) -> Self {
        let token_only = TextParser {
            tokens,
            labels: BTreeMap::new(),
        };
        let rendered = labels
            .iter()
            .map(|(key, text)| (key.to_string(), token_only.parse(text)))
            .collect();
        TextParser {
            tokens: token_only.tokens,
            labels: rendered,
        }
    }

    /// Compute the token table from `sources` and register its labels.
    pub fn from_sources(sources: &TokenSources, settings: &RenderSettings) -> Self {
        Self::new(TokenTable::build(sources, settings), &sources.labels)
    }

    pub fn tokens(&self) -> &TokenTable {
        &self.tokens
    }

    /// The rendered text of a label, if authored.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    /// Substitute tokens and labels in `text`.
    pub fn parse(&self, text: &str) -> String {
        self.parse_with_warnings(text).0
    }

    /// Substitute tokens and labels, reporting unresolved references.
    pub fn parse_with_warnings(&self, text: &str) -> (String, Vec<InjectWarning>) {
        let mut warnings = Vec::new();
        if !text.contains("[[") {
            return (text.to_string(), warnings);
        }

        let template = parse_template(text);
        let mut output = String::with_capacity(text.len());
        for segment in &template.segments {
            match segment {
                Segment::Literal(literal) => output.push_str(literal),
                Segment::Placeholder { kind, argument } => {
                    match self.substitute(*kind, argument, &mut warnings) {
                        Some(value) => output.push_str(value),
                        None => output.push_str(&placeholder_source(*kind, argument)),
                    }
                }
            }
        }
        (output, warnings)
    }

    /// The replacement for a token or label marker, if it resolves.
    ///
    /// Returns `None` for unresolved references and for every other kind.
    fn substitute(
        &self,
        kind: PlaceholderKind,
        argument: &str,
        warnings: &mut Vec<InjectWarning>,
    ) -> Option<&str> {
        match kind {
            PlaceholderKind::Token => {
                let value = self.tokens.get_by_name(argument);
                if value.is_none() {
                    let warning = token_warning(argument);
                    debug!(%warning, "unresolved token");
                    push_unique(warnings, warning);
                }
                value
            }
            PlaceholderKind::Label => {
                let value = self.label(argument);
                if value.is_none() {
                    let available: Vec<&str> = self.labels.keys().map(String::as_str).collect();
                    let warning = InjectWarning::UnknownLabel {
                        key: argument.to_string(),
                        suggestions: compute_suggestions(argument, &available),
                    };
                    debug!(%warning, "unresolved label");
                    push_unique(warnings, warning);
                }
                value
            }
            PlaceholderKind::Modal
            | PlaceholderKind::Tooltip
            | PlaceholderKind::Message
            | PlaceholderKind::Button
            | PlaceholderKind::Timer
            | PlaceholderKind::Icon
            | PlaceholderKind::Badge
            | PlaceholderKind::DataCurrency
            | PlaceholderKind::DataDate
            | PlaceholderKind::DataText
            | PlaceholderKind::DataTimeTo => None,
        }
    }
}

impl TextRewriter for TextParser {
    fn rewrite(&self, text: &str) -> String {
        self.parse(text)
    }
}

fn token_warning(name: &str) -> InjectWarning {
    if resolve_token(name).is_some() {
        InjectWarning::MissingToken {
            name: name.to_string(),
        }
    } else {
        InjectWarning::UnknownToken {
            name: name.to_string(),
            suggestions: compute_suggestions(name, &accepted_token_names()),
        }
    }
}

fn push_unique(warnings: &mut Vec<InjectWarning>, warning: InjectWarning) {
    if !warnings.contains(&warning) {
        warnings.push(warning);
    }
}
