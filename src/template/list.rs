//! List template schema.

use serde::{Deserialize, Serialize};

use super::buttons::Button;
use super::{TemplateBase, TemplateType};

/// Rendering style of the first list element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopElementStyle {
    #[serde(rename = "large")]
    Large,
    #[serde(rename = "compact")]
    Compact,
}

/// A vertically scrollable list of 2-4 elements with an optional global
/// button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListTemplate {
    #[serde(flatten)]
    pub base: TemplateBase,
    pub top_element_style: TopElementStyle,
    pub elements: Vec<ListElement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
}

impl ListTemplate {
    pub fn new(top_element_style: TopElementStyle, elements: Vec<ListElement>) -> Self {
        ListTemplate {
            base: TemplateBase {
                template_type: TemplateType::List,
            },
            top_element_style,
            elements,
            buttons: Vec::new(),
        }
    }
}

/// One row of a list template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListElement {
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_action: Option<DefaultAction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
}

/// Tap action for a list element: a URL open without a visible button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultAction {
    #[serde(rename = "type")]
    pub action_type: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub messenger_extensions: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub webview_height_ratio: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub fallback_url: String,
}

impl DefaultAction {
    /// A default action opening the given URL.
    pub fn web_url(url: impl Into<String>) -> Self {
        DefaultAction {
            action_type: "web_url".to_string(),
            url: url.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_template_shape() {
        let template = ListTemplate::new(
            TopElementStyle::Compact,
            vec![ListElement {
                title: "First".to_string(),
                ..Default::default()
            }],
        );

        assert_eq!(
            serde_json::to_string(&template).unwrap(),
            r#"{"template_type":"list","top_element_style":"compact","elements":[{"title":"First"}]}"#
        );
    }
}
