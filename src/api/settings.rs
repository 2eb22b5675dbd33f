//! Page settings (messenger profile) API.
//!
//! The payload shape is owned by the caller; it is forwarded opaquely. This
//! endpoint does not reliably return the structured error envelope, so any
//! status other than 200 surfaces the raw body text.

use reqwest::Method;

use crate::api::require;
use crate::client::GraphClient;
use crate::error::Result;

/// Page settings API client.
pub struct SettingsApi {
    client: GraphClient,
}

impl SettingsApi {
    pub(crate) fn new(client: GraphClient) -> Self {
        Self { client }
    }

    /// Update the page's messenger profile settings.
    pub async fn update(&self, access_token: &str, payload: &serde_json::Value) -> Result<()> {
        self.send(Method::POST, access_token, payload).await
    }

    /// Delete fields from the page's messenger profile settings.
    pub async fn delete(&self, access_token: &str, payload: &serde_json::Value) -> Result<()> {
        self.send(Method::DELETE, access_token, payload).await
    }

    async fn send(
        &self,
        method: Method,
        access_token: &str,
        payload: &serde_json::Value,
    ) -> Result<()> {
        require("access_token", access_token)?;

        let url = self
            .client
            .url(&["me", "messenger_profile"], &[], access_token)?;
        self.client.send_settings(method, url, payload).await
    }
}
