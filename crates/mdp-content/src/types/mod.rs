mod cms_tokens;
mod content;
mod labels;
mod quote;
mod scalar;
mod summary;

pub use cms_tokens::{CmsTokens, PostalAddress};
pub use content::ContentNode;
pub use labels::Labels;
pub use quote::{AttributeValue, QuoteOption};
pub use scalar::Scalar;
pub use summary::{SummaryFormat, SummaryItem};
