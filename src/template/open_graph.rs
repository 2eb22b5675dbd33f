//! Open graph template schema.

use serde::{Deserialize, Serialize};

use super::buttons::Button;
use super::{TemplateBase, TemplateType};

/// An open-graph attachment (e.g. a song link) with optional buttons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenGraphTemplate {
    #[serde(flatten)]
    pub base: TemplateBase,
    pub elements: Vec<OpenGraphElement>,
}

impl OpenGraphTemplate {
    pub fn new(elements: Vec<OpenGraphElement>) -> Self {
        OpenGraphTemplate {
            base: TemplateBase {
                template_type: TemplateType::OpenGraph,
            },
            elements,
        }
    }
}

/// One open-graph URL and its buttons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenGraphElement {
    pub url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
}
