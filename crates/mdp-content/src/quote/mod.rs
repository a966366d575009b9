//! Quote option trees: value-path resolution, summary rendering, currency
//! formatting and loading.

pub mod currency;
mod loader;
mod render;
mod resolve;

pub use currency::{format_currency, format_money};
pub use loader::{BackendError, QuoteBackend, QuoteFilter, QuoteOptionsLoader, ReadySignal};
pub use render::{
    RenderedSummary, RenderedValue, format_value, render_summary, render_summary_item,
};
pub use resolve::{resolve, resolve_path, split_path};
