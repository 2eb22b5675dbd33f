//! Private reply API.

use crate::api::require;
use crate::client::GraphClient;
use crate::error::Result;
use crate::types::{PrivateReply, PrivateReplyResponse};

/// Private reply API client.
pub struct PrivateReplyApi {
    client: GraphClient,
}

impl PrivateReplyApi {
    pub(crate) fn new(client: GraphClient) -> Self {
        Self { client }
    }

    /// Send a private reply to a page comment or visitor post.
    ///
    /// An empty `message` is passed through; the platform decides whether to
    /// reject it.
    pub async fn send(
        &self,
        access_token: &str,
        object_id: &str,
        message: &str,
    ) -> Result<PrivateReplyResponse> {
        require("object_id", object_id)?;
        require("access_token", access_token)?;

        let body = PrivateReply {
            id: None,
            message: message.to_string(),
        };
        let url = self
            .client
            .url(&[object_id, "private_replies"], &[], access_token)?;
        self.client.post(url, &body).await
    }
}
