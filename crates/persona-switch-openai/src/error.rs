use persona_switch_core::error::SwitchError;
use reqwest::StatusCode;

/// Every failure mode the OpenAI client can hit.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t parse body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("OpenAI returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("OpenAI format error: {0}")]
    Format(String),
}

impl From<OpenAiError> for SwitchError {
    fn from(value: OpenAiError) -> Self {
        SwitchError::Backend(Box::new(value))
    }
}
