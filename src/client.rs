//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use url::Url;

use crate::api::{PersonasApi, PrivateReplyApi, ProfileApi, SettingsApi, ThreadApi};
use crate::error::{Error, ErrorEnvelope, Result};

/// Default Graph API host.
const DEFAULT_BASE_URL: &str = "https://graph.facebook.com";

/// Default Graph API version.
const DEFAULT_API_VERSION: &str = "v3.1";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Messenger Graph API client.
///
/// Provides typed access to thread control, profile, page settings, private
/// reply, and persona endpoints. Host, API version, and HTTP client are fixed
/// at construction; access tokens are supplied per call and never stored.
///
/// # Example
///
/// ```no_run
/// use messenger_graph::GraphClient;
///
/// # async fn example() -> messenger_graph::Result<()> {
/// let client = GraphClient::builder()
///     .api_version("v3.1")
///     .build()?;
///
/// let personas = client.personas().list("page-token").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GraphClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones, immutable after build).
pub(crate) struct ClientInner {
    /// HTTP client.
    pub(crate) http: reqwest::Client,
    /// Base URL for API requests.
    pub(crate) base_url: Url,
    /// Graph API version segment, e.g. `v3.1`.
    pub(crate) api_version: String,
    /// Request timeout.
    pub(crate) timeout: Duration,
}

impl GraphClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client with the default host and API version.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Get the configured API version.
    pub fn api_version(&self) -> &str {
        &self.inner.api_version
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the thread control API.
    pub fn thread(&self) -> ThreadApi {
        ThreadApi::new(self.clone())
    }

    /// Access the user profile API.
    pub fn profile(&self) -> ProfileApi {
        ProfileApi::new(self.clone())
    }

    /// Access the page settings API.
    pub fn settings(&self) -> SettingsApi {
        SettingsApi::new(self.clone())
    }

    /// Access the private reply API.
    pub fn private_reply(&self) -> PrivateReplyApi {
        PrivateReplyApi::new(self.clone())
    }

    /// Access the personas API.
    pub fn personas(&self) -> PersonasApi {
        PersonasApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a versioned URL from path segments and query pairs.
    ///
    /// The access token always travels as a query parameter, so it is passed
    /// through here alongside any endpoint-specific pairs. Percent-encoding is
    /// handled by the URL builder, never by string concatenation.
    pub(crate) fn url(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
        access_token: &str,
    ) -> Result<Url> {
        let mut url = self.inner.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?;
            path.pop_if_empty();
            path.push(&self.inner.api_version);
            for segment in segments {
                path.push(segment);
            }
        }
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
            pairs.append_pair("access_token", access_token);
        }
        Ok(url)
    }

    /// Make a GET request and decode the typed payload.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.execute(self.inner.http.get(url)).await?;
        self.handle_response(response).await
    }

    /// Make a POST request with a JSON body and decode the typed payload.
    pub(crate) async fn post<T, B>(&self, url: Url, body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let encoded = serde_json::to_vec(body).map_err(Error::Serialization)?;
        let response = self
            .execute(self.inner.http.post(url).body(encoded))
            .await?;
        self.handle_response(response).await
    }

    /// Make a POST request with a JSON body, expecting only an acknowledgement.
    pub(crate) async fn post_ack<B>(&self, url: Url, body: &B) -> Result<()>
    where
        B: serde::Serialize + ?Sized,
    {
        let encoded = serde_json::to_vec(body).map_err(Error::Serialization)?;
        let response = self
            .execute(self.inner.http.post(url).body(encoded))
            .await?;
        self.handle_ack(response).await
    }

    /// Make a DELETE request and decode the typed payload.
    pub(crate) async fn delete<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.execute(self.inner.http.delete(url)).await?;
        self.handle_response(response).await
    }

    /// Send a request for the settings endpoint, which has its own success
    /// rule: exactly 200, anything else surfaces the raw body text.
    pub(crate) async fn send_settings<B>(
        &self,
        method: reqwest::Method,
        url: Url,
        body: &B,
    ) -> Result<()>
    where
        B: serde::Serialize + ?Sized,
    {
        let encoded = serde_json::to_vec(body).map_err(Error::Serialization)?;
        let response = self
            .execute(self.inner.http.request(method, url).body(encoded))
            .await?;

        let status = response.status();
        // Drain the body on every path so the connection is released.
        let body = response.text().await?;
        if status == StatusCode::OK {
            Ok(())
        } else {
            Err(Error::Settings {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Attach shared headers and execute the request.
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let response = request
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .timeout(self.inner.timeout)
            .send()
            .await?;
        tracing::debug!(status = %response.status(), "graph API response");
        Ok(response)
    }

    /// Decide success vs failure and decode the typed payload.
    ///
    /// 200 means the expected payload; any other status means the platform
    /// error envelope. A body that matches neither is a decode error carrying
    /// the raw text.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::OK {
            serde_json::from_str(&body).map_err(|source| {
                tracing::warn!(%body, "unexpected success payload shape");
                Error::Decode { source, body }
            })
        } else {
            Err(self.decode_error(&body))
        }
    }

    /// Like [`handle_response`], for endpoints that acknowledge with no payload
    /// the caller cares about.
    async fn handle_ack(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::OK {
            Ok(())
        } else {
            Err(self.decode_error(&body))
        }
    }

    /// Parse the platform error envelope out of a failed response body.
    fn decode_error(&self, body: &str) -> Error {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => Error::from(envelope),
            Err(source) => {
                tracing::warn!(%body, "unparseable error envelope");
                Error::Decode {
                    source,
                    body: body.to_string(),
                }
            }
        }
    }
}

/// Builder for creating a [`GraphClient`].
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: String,
    api_version: String,
    http: Option<reqwest::Client>,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with the default host and version.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            http: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the Graph API host (useful for tests and proxies).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the Graph API version segment, e.g. `v3.1`.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Supply a preconfigured HTTP client (connection pools, proxies,
    /// client-level deadlines).
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<GraphClient> {
        let base_url = Url::parse(&self.base_url)?;

        let http = match self.http {
            Some(http) => http,
            None => {
                let mut headers = HeaderMap::new();
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                reqwest::Client::builder().default_headers(headers).build()?
            }
        };

        Ok(GraphClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                api_version: self.api_version,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = ClientBuilder::new().build().unwrap();
        assert_eq!(client.base_url().as_str(), "https://graph.facebook.com/");
        assert_eq!(client.api_version(), "v3.1");
    }

    #[test]
    fn test_builder_overrides() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:8080")
            .api_version("v12.0")
            .build()
            .unwrap();

        assert_eq!(client.base_url().as_str(), "http://localhost:8080/");
        assert_eq!(client.api_version(), "v12.0");
    }

    #[test]
    fn test_url_building() {
        let client = ClientBuilder::new().build().unwrap();

        let url = client
            .url(&["me", "pass_thread_control"], &[], "tok")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://graph.facebook.com/v3.1/me/pass_thread_control?access_token=tok"
        );
    }

    #[test]
    fn test_url_query_pairs_precede_token() {
        let client = ClientBuilder::new().build().unwrap();

        let url = client
            .url(&["user-1"], &[("fields", "name,first_name")], "tok")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://graph.facebook.com/v3.1/user-1?fields=name%2Cfirst_name&access_token=tok"
        );
    }

    #[test]
    fn test_url_encodes_segments() {
        let client = ClientBuilder::new().build().unwrap();

        let url = client.url(&["a b"], &[], "t k").unwrap();
        assert_eq!(
            url.as_str(),
            "https://graph.facebook.com/v3.1/a%20b?access_token=t+k"
        );
    }
}
