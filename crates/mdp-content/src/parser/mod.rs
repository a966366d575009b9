//! Placeholder parser for CMS-authored text.
//!
//! CMS text embeds `[[kind:argument]]` markers. This module splits text into
//! literal runs and placeholders. Parsing is lenient: anything that is not a
//! well-formed marker of a known kind stays literal, so authoring mistakes
//! are shown rather than swallowed. `check_template` is the strict variant
//! used by tooling.

pub mod ast;
pub mod error;
mod template;

pub use ast::*;
pub use error::ParseError;
pub use template::{check_template, parse_template};
