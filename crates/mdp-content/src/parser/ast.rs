//! Public AST types for CMS text.

use mdp_semantics::PlaceholderKind;

/// Parsed CMS text.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

/// A segment of CMS text.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text, including anything that looked like a marker but was not.
    Literal(String),
    /// A `[[kind:argument]]` marker.
    Placeholder {
        kind: PlaceholderKind,
        argument: String,
    },
}

impl Segment {
    /// The exact source text this segment was parsed from.
    pub fn source(&self) -> String {
        match self {
            Segment::Literal(text) => text.clone(),
            Segment::Placeholder { kind, argument } => placeholder_source(*kind, argument),
        }
    }
}

impl Template {
    /// Placeholders in source order.
    pub fn placeholders(&self) -> impl Iterator<Item = (PlaceholderKind, &str)> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder { kind, argument } => Some((*kind, argument.as_str())),
            Segment::Literal(_) => None,
        })
    }

    /// True when the text contains no placeholders at all.
    pub fn is_literal(&self) -> bool {
        self.placeholders().next().is_none()
    }
}

/// Render a marker back to its bracket form, e.g. `[[token:name]]`.
pub fn placeholder_source(kind: PlaceholderKind, argument: &str) -> String {
    format!("[[{}:{}]]", kind.as_str(), argument)
}
