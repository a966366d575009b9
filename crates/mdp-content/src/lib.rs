pub mod blocks;
pub mod dates;
pub mod interpreter;
pub mod parser;
pub mod quote;
pub mod settings;
pub mod state;
pub mod types;

pub use blocks::{CmsBlock, PageContext, RenderBody, Renderable, dispatch, dispatch_page};
pub use interpreter::{
    HtmlParser, InjectWarning, LoadError, TextParser, TextRewriter, TokenSources, TokenTable,
    compute_suggestions, inject,
};
pub use parser::{ParseError, Segment, Template, check_template, parse_template};
pub use quote::{
    QuoteOptionsLoader, ReadySignal, RenderedSummary, render_summary, render_summary_item,
    resolve, resolve_path,
};
pub use settings::{RenderSettings, load_json};
pub use state::{AppAction, AppState};
pub use types::{
    AttributeValue, CmsTokens, ContentNode, Labels, PostalAddress, QuoteOption, Scalar,
    SummaryFormat, SummaryItem,
};

/// Creates a [`Labels`] table from key-text pairs.
///
/// # Example
///
/// ```
/// use mdp_content::labels;
///
/// let labels = labels! { "year" => "yr", "greeting" => "Hello" };
/// assert_eq!(labels.len(), 2);
/// assert_eq!(labels.label("year"), "yr");
/// assert_eq!(labels.label("absent"), "absent");
/// ```
#[macro_export]
macro_rules! labels {
    {} => {
        $crate::Labels::new()
    };
    { $($key:expr => $text:expr),+ $(,)? } => {
        {
            let mut labels = $crate::Labels::new();
            $(
                labels.insert($key, $text);
            )+
            labels
        }
    };
}
