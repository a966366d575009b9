//! Token and label injection.
//!
//! This module builds the per-page token table, substitutes `[[token:x]]`
//! and `[[label:x]]` markers in CMS text, rewrites HTML fragments for the
//! DOM pass, and walks whole content trees.

mod context;
mod error;
mod html;
mod inject;
mod plural;
mod text;
mod tokens;

pub use context::TokenSources;
pub use error::{InjectWarning, LoadError, compute_suggestions};
pub use html::{DirectiveSpan, HtmlParser, strip_empty_elements};
pub use inject::inject;
pub use plural::{count_with_unit, plural_category};
pub use text::{TextParser, TextRewriter};
pub use tokens::TokenTable;
