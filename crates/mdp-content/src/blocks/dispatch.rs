//! Mapping of CMS blocks to render instructions.

use bon::Builder;
use mdp_semantics::{BlockFamily, BlockKind};
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::blocks::CmsBlock;
use crate::interpreter::{HtmlParser, inject};
use crate::quote::{RenderedSummary, render_summary};
use crate::types::{ContentNode, Labels, QuoteOption, SummaryItem};

/// Element key holding a block's summary items.
const SUMMARY_ITEMS_KEY: &str = "summaryItems";

/// Element key holding a summary block's heading.
const HEADER_KEY: &str = "header";

/// Everything a page's blocks are rendered against.
#[derive(Debug, Builder)]
pub struct PageContext<'a> {
    /// HTML rules for authored text (tokens, labels, directives, data).
    pub html: &'a HtmlParser,

    /// CMS labels, for summary suffixes.
    pub labels: &'a Labels,

    /// The quote option tree, when the page shows quotes.
    pub quote: Option<&'a QuoteOption>,
}

/// What the presentation layer should render for one block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Renderable {
    /// The CMS literal of the block kind, or `"Unknown"`.
    pub component: String,

    #[serde(flatten)]
    pub body: RenderBody,
}

/// Family-specific render payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "family", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum RenderBody {
    /// Rich text with every text element injected.
    Content { elements: ContentNode },

    /// Summary lines rendered against the quote tree.
    Summary {
        header: Option<String>,
        items: Vec<RenderedSummary>,
    },

    /// A widget with its injected elements and the quote data it binds to.
    Widget {
        elements: ContentNode,
        #[serde(skip_serializing_if = "Option::is_none")]
        quote: Option<QuoteOption>,
    },

    Documents { elements: ContentNode },

    Journey { elements: ContentNode },

    Form {
        form_key: String,
        elements: ContentNode,
    },

    /// Diagnostic stand-in for a block the portal cannot render.
    Placeholder { panel_name: String },
}

/// Build render instructions for one block.
///
/// Unknown block kinds render a placeholder carrying the block's panel name,
/// or nothing when the block has none; they never fail the page.
pub fn dispatch(block: &CmsBlock, page: &PageContext<'_>) -> Option<Renderable> {
    let kind = block.kind();
    let Some(family) = kind.family() else {
        debug!(block_type = %block.block_type, form_key = ?block.form_key, "unknown CMS block");
        return block.panel_name_label().map(|panel_name| Renderable {
            component: "Unknown".to_string(),
            body: RenderBody::Placeholder {
                panel_name: panel_name.to_string(),
            },
        });
    };

    let elements = inject_elements(block, page);
    let body = match family {
        BlockFamily::Content => RenderBody::Content { elements },
        BlockFamily::Summary => summary_body(&elements, page),
        BlockFamily::Widget => RenderBody::Widget {
            quote: widget_quote(kind, page),
            elements,
        },
        BlockFamily::Documents => RenderBody::Documents { elements },
        BlockFamily::Journey => RenderBody::Journey { elements },
        BlockFamily::Form => RenderBody::Form {
            form_key: block
                .form_key
                .clone()
                .or_else(|| kind.as_str().map(str::to_string))
                .unwrap_or_default(),
            elements,
        },
    };

    Some(Renderable {
        component: kind.as_str().unwrap_or("Unknown").to_string(),
        body,
    })
}

/// Render every block of a page, dropping blocks that render nothing.
pub fn dispatch_page(blocks: &[CmsBlock], page: &PageContext<'_>) -> Vec<Renderable> {
    blocks
        .iter()
        .filter_map(|block| dispatch(block, page))
        .collect()
}

fn inject_elements(block: &CmsBlock, page: &PageContext<'_>) -> ContentNode {
    inject(ContentNode::Map(block.elements.clone()), page.html)
}

fn summary_body(elements: &ContentNode, page: &PageContext<'_>) -> RenderBody {
    let header = elements
        .get(HEADER_KEY)
        .and_then(ContentNode::as_text)
        .map(str::to_string);
    let items: Vec<SummaryItem> = match elements.get(SUMMARY_ITEMS_KEY) {
        Some(node) => serde_json::from_value(JsonValue::from(node.clone())).unwrap_or_else(|e| {
            debug!(error = %e, "summary items could not be read");
            Vec::new()
        }),
        None => Vec::new(),
    };
    RenderBody::Summary {
        header,
        items: render_summary(&items, page.labels, page.quote, page.html.settings()),
    }
}

/// Widgets that display quote figures get the quote tree.
fn widget_quote(kind: BlockKind, page: &PageContext<'_>) -> Option<QuoteOption> {
    match kind {
        BlockKind::QuoteOptionsList
        | BlockKind::QuoteSelection
        | BlockKind::RetirementCalculator
        | BlockKind::TransferCalculator
        | BlockKind::PensionChart => page.quote.cloned(),
        _ => None,
    }
}
