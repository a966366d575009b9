//! CMS block dispatch.
//!
//! Each block's `type`/`formKey` literal resolves to a closed `BlockKind`;
//! its family decides how the block's elements are prepared for rendering.

mod block;
mod dispatch;

pub use block::CmsBlock;
pub use dispatch::{PageContext, RenderBody, Renderable, dispatch, dispatch_page};
