//! Rewriting of CMS-authored HTML fragments.
//!
//! Rules run in a fixed order:
//! 1. token and label substitution (as `TextParser`);
//! 2. on the result, directive markers become empty placeholder spans that a
//!    later DOM pass swaps for real components by id;
//! 3. data-binding markers, including those brought in by labels, are
//!    resolved against the page's data tree;
//! 4. structural rules remove empty `<li>` and `<p>` elements.
//!
//! Structural rules run last so that a paragraph holding only a directive is
//! kept: by then it holds a span.

use std::sync::LazyLock;

use bon::Builder;
use chrono::{Local, NaiveDate};
use mdp_semantics::PlaceholderKind;
use regex::Regex;

use crate::interpreter::{InjectWarning, TextParser, TextRewriter};
use crate::parser::{Segment, parse_template, placeholder_source};
use crate::quote::{format_value, resolve_path};
use crate::settings::RenderSettings;
use crate::types::QuoteOption;

static EMPTY_LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<li(?:\s[^>]*)?>(?:\s|&nbsp;)*</li>").expect("valid empty <li> regex")
});

static EMPTY_PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<p(?:\s[^>]*)?>(?:\s|&nbsp;)*</p>").expect("valid empty <p> regex")
});

/// A directive placeholder span left in rewritten HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveSpan {
    pub kind: PlaceholderKind,
    /// The marker argument (modal id, timer minutes, icon name, ...).
    pub argument: String,
    /// The `id` attribute of the span.
    pub element_id: String,
}

/// Rewrites HTML fragments: tokens, labels, directives, data bindings and
/// empty-element cleanup.
///
/// # Example
///
/// ```
/// use mdp_content::interpreter::{HtmlParser, TextParser};
///
/// let parser = HtmlParser::builder().text(TextParser::default()).build();
/// assert_eq!(
///     parser.parse("<p>[[modal:help]]</p><p> </p>"),
///     r#"<p><span id="modal-help" class="mdp-modal-placeholder"></span></p>"#
/// );
/// ```
#[derive(Debug, Clone, Builder)]
pub struct HtmlParser {
    /// Token and label rules.
    text: TextParser,

    #[builder(default)]
    settings: RenderSettings,

    /// Data tree for `[[data-*:path]]` bindings.
    data: Option<QuoteOption>,

    /// Reference date for `[[data-timeto:...]]`.
    #[builder(default = Local::now().date_naive())]
    today: NaiveDate,
}

impl HtmlParser {
    pub fn text_parser(&self) -> &TextParser {
        &self.text
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Rewrite an HTML fragment.
    pub fn parse(&self, html: &str) -> String {
        self.parse_with_warnings(html).0
    }

    /// Rewrite an HTML fragment, reporting unresolved tokens and labels.
    pub fn parse_with_warnings(&self, html: &str) -> (String, Vec<InjectWarning>) {
        let (text, warnings) = self.text.parse_with_warnings(html);
        let substituted = if text.contains("[[") {
            self.substitute_markers(&text)
        } else {
            text
        };
        (strip_empty_elements(&substituted), warnings)
    }

    /// Directive spans that `parse` produces for `html`, in source order.
    ///
    /// Markers brought in by tokens and labels are included.
    pub fn directives(&self, html: &str) -> Vec<DirectiveSpan> {
        parse_template(&self.text.parse(html))
            .placeholders()
            .filter(|(kind, _)| kind.is_directive())
            .map(|(kind, argument)| DirectiveSpan {
                kind,
                argument: argument.to_string(),
                element_id: element_id(kind, argument),
            })
            .collect()
    }

    /// Directive and data-binding markers of text already through the text
    /// rules. Token and label markers left at this point are unresolved and
    /// stay literal.
    fn substitute_markers(&self, text: &str) -> String {
        let template = parse_template(text);
        let mut output = String::with_capacity(text.len());
        for segment in &template.segments {
            match segment {
                Segment::Literal(literal) => output.push_str(literal),
                Segment::Placeholder { kind, argument } => {
                    let kind = *kind;
                    if kind.is_directive() {
                        output.push_str(&self.directive_span(kind, argument));
                    } else if kind.is_data_binding() {
                        output.push_str(&self.data_binding(kind, argument));
                    } else {
                        output.push_str(&placeholder_source(kind, argument));
                    }
                }
            }
        }
        output
    }

    fn directive_span(&self, kind: PlaceholderKind, argument: &str) -> String {
        format!(
            r#"<span id="{}" class="{}-{}-placeholder"></span>"#,
            escape_attribute(&element_id(kind, argument)),
            self.settings.placeholder_class_prefix,
            kind.as_str()
        )
    }

    fn data_binding(&self, kind: PlaceholderKind, path: &str) -> String {
        self.data
            .as_ref()
            .and_then(|data| resolve_path(data, path))
            .and_then(|value| format_value(&value, kind, &self.settings, self.today))
            .unwrap_or_else(|| self.settings.na_symbol.clone())
    }
}

impl TextRewriter for HtmlParser {
    fn rewrite(&self, text: &str) -> String {
        self.parse(text)
    }
}

/// Remove `<li>` and `<p>` elements holding only whitespace or `&nbsp;`.
pub fn strip_empty_elements(html: &str) -> String {
    let without_items = EMPTY_LIST_ITEM.replace_all(html, "");
    EMPTY_PARAGRAPH.replace_all(&without_items, "").into_owned()
}

fn element_id(kind: PlaceholderKind, argument: &str) -> String {
    format!("{}-{}", kind.as_str(), argument.trim())
}

fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}
