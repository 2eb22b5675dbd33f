//! Personas API.

use crate::api::require;
use crate::client::GraphClient;
use crate::error::{Error, Result};
use crate::types::{DeletePersonaResponse, ListPersonasResponse, Persona, PersonaResponse};

/// Personas API client.
pub struct PersonasApi {
    client: GraphClient,
}

impl PersonasApi {
    pub(crate) fn new(client: GraphClient) -> Self {
        Self { client }
    }

    /// Create a persona and return its ID.
    ///
    /// The payload is forwarded opaquely; the expected shape is
    /// `{"name": …, "profile_picture_url": …}`.
    pub async fn create(
        &self,
        access_token: &str,
        payload: &serde_json::Value,
    ) -> Result<PersonaResponse> {
        require("access_token", access_token)?;

        let url = self.client.url(&["me", "personas"], &[], access_token)?;
        self.client.post(url, payload).await
    }

    /// Fetch a persona by ID.
    pub async fn get(&self, access_token: &str, persona_id: &str) -> Result<Persona> {
        require("persona_id", persona_id)?;
        require("access_token", access_token)?;

        let url = self.client.url(&[persona_id], &[], access_token)?;
        self.client.get(url).await
    }

    /// List the page's personas. An empty remote list is an empty vec, not an
    /// error.
    pub async fn list(&self, access_token: &str) -> Result<Vec<Persona>> {
        require("access_token", access_token)?;

        let url = self.client.url(&["me", "personas"], &[], access_token)?;
        let response: ListPersonasResponse = self.client.get(url).await?;
        Ok(response.data)
    }

    /// Delete a persona by ID.
    ///
    /// The platform encodes the outcome in the body: a 200 with
    /// `{"success":false}` means the delete did not take effect.
    pub async fn delete(&self, access_token: &str, persona_id: &str) -> Result<()> {
        require("persona_id", persona_id)?;
        require("access_token", access_token)?;

        let url = self.client.url(&[persona_id], &[], access_token)?;
        let response: DeletePersonaResponse = self.client.delete(url).await?;
        if response.success {
            Ok(())
        } else {
            Err(Error::Refused {
                persona_id: persona_id.to_string(),
            })
        }
    }
}
