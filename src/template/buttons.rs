//! Button schemas used across templates.

use serde::{Deserialize, Serialize};

/// Behavior of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonType {
    WebUrl,
    Postback,
    PhoneNumber,
    AccountLink,
    AccountUnlink,
    ElementShare,
    Payment,
    GamePlay,
}

/// A template button. Which fields apply depends on the button type; absent
/// fields are omitted from the wire form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Button {
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "type")]
    pub button_type: Option<ButtonType>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub payload: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_contents: Option<ShareContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_summary: Option<PaymentSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_metadata: Option<GameMetadata>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub messenger_extensions: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub webview_height_ratio: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub fallback_url: String,
}

impl Button {
    /// A button that opens an external URL.
    pub fn web_url(title: impl Into<String>, url: impl Into<String>) -> Self {
        Button {
            button_type: Some(ButtonType::WebUrl),
            title: title.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    /// A button that posts its payload back to the app.
    pub fn postback(title: impl Into<String>, payload: impl Into<String>) -> Self {
        Button {
            button_type: Some(ButtonType::Postback),
            title: title.into(),
            payload: payload.into(),
            ..Default::default()
        }
    }

    /// A button that opens the native dialer.
    pub fn phone_number(title: impl Into<String>, phone: impl Into<String>) -> Self {
        Button {
            button_type: Some(ButtonType::PhoneNumber),
            title: title.into(),
            payload: phone.into(),
            ..Default::default()
        }
    }

    /// An account-linking button.
    pub fn account_link(url: impl Into<String>) -> Self {
        Button {
            button_type: Some(ButtonType::AccountLink),
            url: url.into(),
            ..Default::default()
        }
    }

    /// An account-unlinking button.
    pub fn account_unlink() -> Self {
        Button {
            button_type: Some(ButtonType::AccountUnlink),
            ..Default::default()
        }
    }

    /// A share button, optionally carrying a custom attachment to share.
    pub fn element_share(share_contents: Option<ShareContent>) -> Self {
        Button {
            button_type: Some(ButtonType::ElementShare),
            share_contents,
            ..Default::default()
        }
    }

    /// A payment button.
    pub fn payment(
        title: impl Into<String>,
        payload: impl Into<String>,
        payment_summary: PaymentSummary,
    ) -> Self {
        Button {
            button_type: Some(ButtonType::Payment),
            title: title.into(),
            payload: payload.into(),
            payment_summary: Some(payment_summary),
            ..Default::default()
        }
    }

    /// A game-play button.
    pub fn game_play(
        title: impl Into<String>,
        payload: impl Into<String>,
        game_metadata: Option<GameMetadata>,
    ) -> Self {
        Button {
            button_type: Some(ButtonType::GamePlay),
            title: title.into(),
            payload: payload.into(),
            game_metadata,
            ..Default::default()
        }
    }
}

/// Custom content for a share button. The attachment is platform-owned JSON
/// the client forwards opaquely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareContent {
    pub attachment: serde_json::Value,
}

/// Summary shown in the payment dialog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentSummary {
    pub currency: String,
    pub payment_type: String,
    pub is_test_payment: bool,
    pub merchant_name: String,
    pub request_user_info: RequestUserInfo,
    pub price_list: Vec<PaymentPrice>,
}

/// User details requested during payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestUserInfo {
    pub shipping_address: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
}

/// One labelled line item of a payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPrice {
    pub label: String,
    pub amount: String,
}

/// Player/context routing for a game-play button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMetadata {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub player_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub context_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_url_button_shape() {
        let button = Button::web_url("Open", "https://example.com");
        assert_eq!(
            serde_json::to_string(&button).unwrap(),
            r#"{"type":"web_url","title":"Open","url":"https://example.com"}"#
        );
    }

    #[test]
    fn test_postback_button_shape() {
        let button = Button::postback("Go", "GO_PAYLOAD");
        assert_eq!(
            serde_json::to_string(&button).unwrap(),
            r#"{"type":"postback","title":"Go","payload":"GO_PAYLOAD"}"#
        );
    }

    #[test]
    fn test_account_unlink_omits_everything_else() {
        let button = Button::account_unlink();
        assert_eq!(
            serde_json::to_string(&button).unwrap(),
            r#"{"type":"account_unlink"}"#
        );
    }
}
