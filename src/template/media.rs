//! Media template schema.

use serde::{Deserialize, Serialize};

use super::buttons::Button;
use super::{TemplateBase, TemplateType};

/// A single image or video with optional buttons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaTemplate {
    #[serde(flatten)]
    pub base: TemplateBase,
    pub elements: Vec<MediaElement>,
}

impl MediaTemplate {
    pub fn new(elements: Vec<MediaElement>) -> Self {
        MediaTemplate {
            base: TemplateBase {
                template_type: TemplateType::Media,
            },
            elements,
        }
    }
}

/// The media item. Exactly one of `attachment_id` or `url` identifies it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaElement {
    pub media_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub attachment_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
}
