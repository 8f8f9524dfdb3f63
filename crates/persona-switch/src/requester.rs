use std::sync::Arc;

use persona_switch_core::{
    error::SwitchError,
    generic::GenericMessage,
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};
use persona_switch_personas::ExpertPrompt;

/// The single failure kind of [`Requester::complete`].
///
/// Transport, authentication, quota and malformed-response errors are not
/// told apart; the underlying error is kept as the source for display.
#[derive(Debug, thiserror::Error)]
#[error("completion request failed: {source}")]
pub struct CompletionFailure {
    source: SwitchError,
}

impl CompletionFailure {
    /// The underlying error reported by the backend.
    pub fn inner(&self) -> &SwitchError {
        &self.source
    }

    pub fn into_inner(self) -> SwitchError {
        self.source
    }
}

impl From<SwitchError> for CompletionFailure {
    fn from(source: SwitchError) -> Self {
        Self { source }
    }
}

/// Build the request for one question: persona instruction, then the user
/// text untouched. Unknown persona ids use the default persona.
pub fn build_request(user_text: &str, persona_id: &str) -> ChatCompleteParameters<GenericMessage> {
    ChatCompleteParameters::from_prompt(ExpertPrompt::for_id(persona_id, user_text))
}

/// Forwards questions to a completion backend.
///
/// Each call is independent: no history, no retries, no caching. The backend
/// sits behind an `Arc`, so cloning a requester is cheap.
#[derive(Debug)]
pub struct Requester<B> {
    backend: Arc<B>,
}

impl<B> Clone for Requester<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B> Requester<B>
where
    B: ChatCompletionProvider,
    GenericMessage: Into<B::Message>,
{
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Ask `user_text` as persona `persona_id` and return the reply text.
    ///
    /// Callers reject empty input beforehand; it is not re-checked here.
    ///
    /// # Errors
    ///
    /// Any backend failure, or a reply without text, is returned as a
    /// [`CompletionFailure`] wrapping the original error.
    pub async fn complete(
        &self,
        user_text: &str,
        persona_id: &str,
    ) -> Result<String, CompletionFailure> {
        let params = build_request(user_text, persona_id);

        let response = self.backend.chat_complete(params).await?;

        response
            .content
            .content
            .ok_or_else(|| SwitchError::Backend("response carries no text content".into()).into())
    }
}

#[cfg(test)]
mod tests {
    use persona_switch_core::{
        generic::GenericRole,
        model::{Model, OpenAiModel},
    };
    use persona_switch_personas::Persona;

    use super::*;

    #[test]
    fn request_has_instruction_then_verbatim_text() {
        let params = build_request("How do I start?", "A");

        assert_eq!(params.model(), Model::OpenAi(OpenAiModel::Gpt4oMini));
        assert_eq!(params.temperature, Some(0.7));

        let messages = params.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, GenericRole::System);
        assert_eq!(
            messages[0].text(),
            Persona::CareerCoach.definition().system_instruction
        );
        assert_eq!(messages[1].role, GenericRole::User);
        assert_eq!(messages[1].text(), "How do I start?");
    }

    #[test]
    fn unknown_persona_builds_default_request() {
        let unknown = build_request("T", "does-not-exist");
        let default = build_request("T", Persona::DEFAULT.id());

        assert_eq!(unknown.messages(), default.messages());
    }

    #[test]
    fn failure_display_carries_detail() {
        let failure = CompletionFailure::from(SwitchError::Invalid("quota exceeded".into()));

        assert_eq!(
            failure.to_string(),
            "completion request failed: invalid: quota exceeded"
        );
        assert!(matches!(failure.into_inner(), SwitchError::Invalid(_)));
    }
}
