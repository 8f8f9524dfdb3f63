//! Abstractions that tie a **prompt** to a concrete **model**.
//!
//! Two traits take a value from "some string fragments" to a ready-to-send
//! request:
//!
//! 1. [`IntoPrompt`] – turns *any* value into a list of chat messages.
//! 2. [`PromptTemplate`] – adds the target model and sampling temperature.
//!
//! ```rust
//! use persona_switch_core::template::{IntoPrompt, PromptTemplate};
//! use persona_switch_core::generic::{GenericMessage, GenericRole};
//! use persona_switch_core::model::{Model, OpenAiModel};
//!
//! struct HelloPrompt;
//!
//! impl IntoPrompt for HelloPrompt {
//!     type Message = GenericMessage;
//!     fn into_prompt(self) -> Vec<Self::Message> {
//!         vec![GenericMessage::new("Say hello!".into(), GenericRole::User)]
//!     }
//! }
//!
//! impl PromptTemplate for HelloPrompt {
//!     const MODEL: Model = Model::OpenAi(OpenAiModel::Gpt4oMini);
//! }
//! ```
use crate::model::Model;

/// Request metadata attached to a prompt.
///
/// Both values are compile-time constants: a prompt type always targets the
/// same model with the same sampling settings.
pub trait PromptTemplate: IntoPrompt {
    /// Logical model identifier. The back-end maps this to its own naming
    /// scheme (`"gpt-4o-mini"`, …).
    const MODEL: Model;

    /// Sampling temperature; `None` leaves the provider default in place.
    const TEMPERATURE: Option<f64> = None;
}

/// Converts a value into a series of chat messages.
///
/// The `Message` type is an **associated type** so a back-end can require
/// its own richer struct without resorting to dynamic dispatch.
pub trait IntoPrompt {
    /// Chat message representation emitted by the prompt.
    type Message: Send + Sync + 'static;

    /// Consume `self` and return **all** messages in the desired order.
    fn into_prompt(self) -> Vec<Self::Message>;
}

/// A single [`GenericMessage`](crate::generic::GenericMessage) is a prompt
/// of length one.
impl IntoPrompt for crate::generic::GenericMessage {
    type Message = crate::generic::GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![self]
    }
}
