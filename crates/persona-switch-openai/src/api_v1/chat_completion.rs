use persona_switch_core::generic::{GenericMessage, GenericRole};
use persona_switch_core::provider::ChatCompleteParameters;
use serde::{Deserialize, Serialize};

use crate::model_map::map_model;

use super::common;

/// Body of `POST /chat/completions`.
#[derive(Debug, Serialize, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl ChatCompletionRequest {
    pub fn new(model: String, messages: Vec<ChatCompletionMessage>) -> Self {
        Self {
            model,
            messages,
            temperature: None,
        }
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

impl<M> From<ChatCompleteParameters<M>> for ChatCompletionRequest
where
    M: Into<ChatCompletionMessage> + Clone,
{
    fn from(value: ChatCompleteParameters<M>) -> Self {
        Self {
            model: map_model(&value.model).into_owned(),
            temperature: value.temperature,
            messages: value.messages.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    System,
    Assistant,
    Developer,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ChatCompletionMessage {
    pub role: MessageRole,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionMessageForResponse {
    pub role: MessageRole,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub refusal: Option<String>,
}

impl From<ChatCompletionMessageForResponse> for GenericMessage {
    fn from(value: ChatCompletionMessageForResponse) -> Self {
        GenericMessage {
            content: value.content,
            role: value.role.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionChoice {
    pub index: i64,
    pub message: ChatCompletionMessageForResponse,
    pub finish_reason: Option<FinishReason>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: Option<String>,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub model: String,
    pub choices: Vec<ChatCompletionChoice>,
    pub usage: Option<common::Usage>,
    pub system_fingerprint: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    ToolCalls,
    FunctionCall,
    /// Any reason this client does not know, e.g. from a compatible server.
    #[serde(other)]
    Other,
}

impl From<GenericRole> for MessageRole {
    fn from(value: GenericRole) -> Self {
        match value {
            GenericRole::System => MessageRole::System,
            GenericRole::Assistant => MessageRole::Assistant,
            GenericRole::User => MessageRole::User,
        }
    }
}

impl From<MessageRole> for GenericRole {
    fn from(value: MessageRole) -> Self {
        match value {
            MessageRole::User => GenericRole::User,
            MessageRole::System | MessageRole::Developer => GenericRole::System,
            MessageRole::Assistant => GenericRole::Assistant,
        }
    }
}

impl From<GenericMessage> for ChatCompletionMessage {
    fn from(value: GenericMessage) -> Self {
        Self {
            role: value.role.into(),
            content: value.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use persona_switch_core::model::{Model, OpenAiModel};
    use serde_json::json;

    use super::*;

    #[test]
    fn request_serialises_in_wire_format() {
        let params = ChatCompleteParameters::new(
            vec![
                GenericMessage::new("Be a coach.".into(), GenericRole::System),
                GenericMessage::new(" How do I start? ".into(), GenericRole::User),
            ],
            Model::OpenAi(OpenAiModel::Gpt4oMini),
        )
        .with_temperature(0.7);

        let request = ChatCompletionRequest::from(params);
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            json!({
                "model": "gpt-4o-mini",
                "temperature": 0.7,
                "messages": [
                    { "role": "system", "content": "Be a coach." },
                    { "role": "user", "content": " How do I start? " }
                ]
            })
        );
    }

    #[test]
    fn temperature_is_omitted_when_unset() {
        let request = ChatCompletionRequest::new("gpt-4o".into(), vec![]);
        let body = serde_json::to_value(&request).unwrap();

        assert!(body.get("temperature").is_none());
        assert_eq!(
            serde_json::to_value(request.temperature(0.1)).unwrap()["temperature"],
            0.1
        );
    }

    #[test]
    fn response_parses_minimal_body() {
        let body = json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1_700_000_000,
            "model": "gpt-4o-mini",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "Try X." },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15 }
        });

        let response: ChatCompletionResponse = serde_json::from_value(body).unwrap();

        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].finish_reason, Some(FinishReason::Stop));
        assert_eq!(response.choices[0].message.content.as_deref(), Some("Try X."));
        assert_eq!(response.usage.map(|u| u.total_tokens), Some(15));
    }

    #[test]
    fn null_content_and_missing_usage_are_accepted() {
        let body = json!({
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": null, "refusal": "no" },
                "finish_reason": "content_filter"
            }]
        });

        let response: ChatCompletionResponse = serde_json::from_value(body).unwrap();

        assert!(response.usage.is_none());
        assert!(response.choices[0].message.content.is_none());
        assert_eq!(response.choices[0].message.refusal.as_deref(), Some("no"));
    }

    #[test]
    fn unknown_finish_reason_keeps_the_reply() {
        let body = json!({
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "Try X.", "name": "coach" },
                "finish_reason": "eos"
            }]
        });

        let response: ChatCompletionResponse = serde_json::from_value(body).unwrap();

        assert_eq!(response.choices[0].finish_reason, Some(FinishReason::Other));
        assert_eq!(response.choices[0].message.content.as_deref(), Some("Try X."));
    }
}
