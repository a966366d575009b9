use std::collections::BTreeMap;

use mdp_semantics::{BlockKind, resolve_block_kind};
use serde::{Deserialize, Serialize};

use crate::types::ContentNode;

/// A CMS content block as delivered by the headless CMS.
///
/// ```
/// use mdp_content::blocks::CmsBlock;
/// use mdp_semantics::BlockKind;
///
/// let block: CmsBlock = serde_json::from_str(r#"{
///     "type": "Form",
///     "formKey": "email_form",
///     "elements": { "panelNameLabel": "Change email" }
/// }"#).unwrap();
/// assert_eq!(block.kind(), BlockKind::EmailForm);
/// assert_eq!(block.panel_name_label(), Some("Change email"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsBlock {
    #[serde(rename = "type", default)]
    pub block_type: String,

    #[serde(default)]
    pub form_key: Option<String>,

    #[serde(default)]
    pub elements: BTreeMap<String, ContentNode>,
}

impl CmsBlock {
    /// The block kind, from `formKey` when it names a known form, else `type`.
    pub fn kind(&self) -> BlockKind {
        resolve_block_kind(&self.block_type, self.form_key.as_deref())
    }

    /// Text of an element, accepting both `"key": "text"` and the CMS's
    /// wrapped `"key": { "value": "text" }` shape.
    pub fn element_text(&self, key: &str) -> Option<&str> {
        let element = self.elements.get(key)?;
        element
            .as_text()
            .or_else(|| element.get("value").and_then(ContentNode::as_text))
    }

    /// The editor-facing panel name, shown for blocks the portal cannot render.
    pub fn panel_name_label(&self) -> Option<&str> {
        self.element_text("panelNameLabel")
            .filter(|label| !label.trim().is_empty())
    }
}
