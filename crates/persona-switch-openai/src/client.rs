use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    api_v1::{ChatCompletionRequest, ChatCompletionResponse},
    error::OpenAiError,
};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Transport default; nothing above this layer overrides it.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Minimal HTTP client for OpenAI's *chat/completions* endpoint.
///
/// * Non-streaming only (one request ▶ one response).
/// * Accepts and returns the `api_v1` request / response structs defined
///   in this crate.
/// * Shares a single `reqwest::Client`, so cloning `OpenAiClient` is cheap.
#[derive(Clone)]
pub struct OpenAiClient {
    api_key: String,
    http: HttpClient,
    base: String,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    /// Build a client with a default `reqwest` client (Rustls TLS, 60 s
    /// timeout) against `base_url`, or the public API when `None`.
    pub fn new(api_key: impl Into<String>, base_url: Option<String>) -> Result<Self, OpenAiError> {
        let http = HttpClient::builder().timeout(DEFAULT_TIMEOUT).build()?;

        Ok(Self::with_http(api_key, http, base_url))
    }

    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc.
    pub fn with_http(
        api_key: impl Into<String>,
        http: HttpClient,
        base_url: Option<String>,
    ) -> Self {
        let base = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());

        Self {
            api_key: api_key.into(),
            http,
            base: base.trim_end_matches('/').to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Perform a **non-streaming** chat completion.
    pub async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, OpenAiError> {
        let url = format!("{}/chat/completions", self.base);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            %url,
            model = %request.model,
            messages = request.messages.len(),
            "sending chat completion"
        );

        let resp = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();

        #[cfg(feature = "tracing")]
        tracing::debug!(%status, "chat completion responded");

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(OpenAiError::Api { status, body });
        }

        let bytes = resp.bytes().await?;
        let parsed: ChatCompletionResponse = serde_json::from_slice(&bytes)?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_public_api() {
        let client = OpenAiClient::new("sk-test", None).unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let client = OpenAiClient::new("sk-test", Some("http://localhost:8080/v1/".into())).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/v1");
    }

    #[test]
    fn debug_hides_api_key() {
        let client = OpenAiClient::new("sk-secret", None).unwrap();
        assert!(!format!("{client:?}").contains("sk-secret"));
    }
}
