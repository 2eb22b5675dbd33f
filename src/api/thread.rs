//! Thread control API.
//!
//! Hands conversational ownership back and forth between the primary app and
//! a secondary one.

use crate::api::require;
use crate::client::GraphClient;
use crate::error::{Error, Result};
use crate::types::{PassThreadControl, Recipient, TakeThreadControl};

/// Thread control API client.
pub struct ThreadApi {
    client: GraphClient,
}

impl ThreadApi {
    pub(crate) fn new(client: GraphClient) -> Self {
        Self { client }
    }

    /// Pass control of a user's conversation to another app.
    ///
    /// `metadata` is forwarded verbatim to the receiving app and may be empty.
    pub async fn pass(
        &self,
        access_token: &str,
        target_app_id: i64,
        recipient: &str,
        metadata: &str,
    ) -> Result<()> {
        if target_app_id == 0 {
            return Err(Error::Validation {
                field: "target_app_id",
            });
        }
        require("recipient", recipient)?;
        require("access_token", access_token)?;

        let body = PassThreadControl {
            target_app_id,
            recipient: Recipient {
                id: recipient.to_string(),
            },
            metadata: metadata.to_string(),
        };
        let url = self
            .client
            .url(&["me", "pass_thread_control"], &[], access_token)?;
        self.client.post_ack(url, &body).await
    }

    /// Take control of a user's conversation back from a secondary app.
    pub async fn take(&self, access_token: &str, recipient: &str, metadata: &str) -> Result<()> {
        require("recipient", recipient)?;
        require("access_token", access_token)?;

        let body = TakeThreadControl {
            recipient: Recipient {
                id: recipient.to_string(),
            },
            metadata: metadata.to_string(),
        };
        let url = self
            .client
            .url(&["me", "take_thread_control"], &[], access_token)?;
        self.client.post_ack(url, &body).await
    }
}
