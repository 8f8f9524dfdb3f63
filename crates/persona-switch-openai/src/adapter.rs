use std::sync::Arc;

use persona_switch_core::error::{Result, SwitchError};

use crate::client::OpenAiClient;

/// Wires the HTTP client [`OpenAiClient`] into a value that implements
/// [`persona_switch_core::provider::ChatCompletionProvider`].
///
/// The adapter owns a shareable, connection-pooled client and exposes no
/// further behaviour of its own; use it through the provider trait.
#[derive(Debug, Clone)]
pub struct OpenAiAdapter {
    pub(crate) client: Arc<OpenAiClient>,
}

impl OpenAiAdapter {
    pub fn builder() -> OpenAiAdapterBuilder {
        OpenAiAdapterBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

/// Builder for [`OpenAiAdapter`].
///
/// The credential is always handed in explicitly; loading it from the
/// environment or a secret store is the caller's job.
///
/// ```rust,no_run
/// use persona_switch_openai::OpenAiAdapterBuilder;
///
/// let backend = OpenAiAdapterBuilder::new()
///     .with_api_key("sk-…")
///     .build()
///     .expect("api key is set");
/// ```
#[derive(Default)]
pub struct OpenAiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
}

impl OpenAiAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the adapter at an OpenAI-compatible endpoint instead of the
    /// public API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`SwitchError::Invalid`] – if the API key is missing or blank.
    /// * [`SwitchError::Backend`] – if the HTTP client cannot be built.
    pub fn build(self) -> Result<OpenAiAdapter> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| SwitchError::Invalid("missing OpenAI API key".into()))?;

        let client = OpenAiClient::new(api_key, self.base_url)?;

        Ok(OpenAiAdapter {
            client: Arc::new(client),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_api_key() {
        let err = OpenAiAdapterBuilder::new().build().unwrap_err();
        assert!(matches!(err, SwitchError::Invalid(_)));

        let err = OpenAiAdapterBuilder::new().with_api_key("   ").build().unwrap_err();
        assert!(matches!(err, SwitchError::Invalid(_)));
    }

    #[test]
    fn build_uses_custom_base_url() {
        let adapter = OpenAiAdapter::builder()
            .with_api_key("sk-test")
            .with_base_url("http://127.0.0.1:9/v1")
            .build()
            .unwrap();

        assert_eq!(adapter.base_url(), "http://127.0.0.1:9/v1");
    }
}
