use std::{future::Future, pin::Pin, sync::Arc};

use persona_switch_core::{
    error::Result,
    generic::GenericChatCompletionResponse,
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};

use crate::{
    OpenAiAdapter,
    api_v1::{ChatCompletionMessage, ChatCompletionRequest},
    error::OpenAiError,
};

impl ChatCompletionProvider for OpenAiAdapter {
    type Message = ChatCompletionMessage;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let request = ChatCompletionRequest::from(params);

            let mut response = client.chat_completion(request).await?;

            let usage = response.usage.map(Into::into);

            if response.choices.is_empty() {
                return Err(OpenAiError::Format("response has no choices".into()).into());
            }
            let first_choice = response.choices.swap_remove(0);

            if first_choice.message.content.is_none() {
                let reason = first_choice
                    .message
                    .refusal
                    .unwrap_or_else(|| format!("finish reason {:?}", first_choice.finish_reason));
                return Err(OpenAiError::Format(format!(
                    "response carries no text content: {reason}"
                ))
                .into());
            }

            Ok(GenericChatCompletionResponse {
                content: first_choice.message.into(),
                usage,
            })
        })
    }
}
