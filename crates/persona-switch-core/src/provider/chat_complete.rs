use std::{future::Future, pin::Pin};

use crate::{
    error::Result,
    generic::GenericChatCompletionResponse,
    model::Model,
    template::{IntoPrompt, PromptTemplate},
};

/// A **backend** turns a list of chat messages into a network call to a
/// concrete provider and parses the reply.
///
/// * **One associated type** – the in-memory `Message` representation this
///   provider accepts.
/// * **One method** – `chat_complete`, which performs a *single*
///   non-streaming round-trip.
///
/// The method returns a boxed future so implementors need neither
/// `async_trait` nor nightly features.
pub trait ChatCompletionProvider: Send + Sync {
    /// Chat message type consumed by this backend.
    type Message: Send + Sync + 'static;

    /// Execute the request and return the provider's single reply.
    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p;
}

/// Everything a provider needs for one request: ordered messages, the target
/// model and the sampling temperature.
#[derive(Debug, Clone)]
pub struct ChatCompleteParameters<M: Clone> {
    pub messages: Vec<M>,
    pub model: Model,
    pub temperature: Option<f64>,
}

impl<M: Clone> ChatCompleteParameters<M> {
    pub fn new(messages: Vec<M>, model: Model) -> Self {
        Self {
            messages,
            model,
            temperature: None,
        }
    }

    /// Build the parameters from a prompt, picking up its model and
    /// temperature constants.
    pub fn from_prompt<P>(prompt: P) -> Self
    where
        P: PromptTemplate + IntoPrompt<Message = M>,
    {
        Self {
            messages: prompt.into_prompt(),
            model: P::MODEL,
            temperature: P::TEMPERATURE,
        }
    }

    pub fn messages(&self) -> &Vec<M> {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<M> {
        self.messages
    }

    pub fn model(&self) -> Model {
        self.model.clone()
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
}
