//! Concatenates values implementing
//! [`IntoPrompt`](persona_switch_core::template::IntoPrompt) in order.
//!
//! ```text
//! ┌────────────────┐    IntoPrompt     ┌────────────────┐
//! │ PersonaFragment│ ─────────────────►│ Vec<Message>   │
//! ├────────────────┤                   ├────────────────┤
//! │ StaticFragment │ ─────────────────►│ Vec<Message>   │
//! └────────────────┘                   └────────────────┘
//!            ▲                                  │
//!            └──────── PromptChain::build() ◄───┘
//! ```
//!
//! ```rust
//! use persona_switch_core::generic::{GenericMessage, GenericRole};
//! use persona_switch_personas::chain::PromptChain;
//! use persona_switch_personas::fragments::StaticFragment;
//!
//! let messages: Vec<GenericMessage> = PromptChain::new()
//!     .with(StaticFragment::new("You are a helpful bot.", GenericRole::System))
//!     .with(StaticFragment::new("Hi!", GenericRole::User))
//!     .build();
//!
//! assert_eq!(messages.len(), 2);
//! ```
use persona_switch_core::template::IntoPrompt;

/// Accumulates messages produced by [`IntoPrompt`] implementors.
///
/// The field is private so the result is only reachable through
/// [`Self::build`].
pub struct PromptChain<Message>(Vec<Message>);

impl<Message> Default for PromptChain<Message> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> PromptChain<Message> {
    pub fn new() -> Self {
        Self(vec![])
    }

    /// Append the messages produced by `with` to the chain.
    pub fn with(mut self, with: impl IntoPrompt<Message = Message>) -> Self {
        self.0.append(&mut with.into_prompt());
        self
    }

    /// Consume the builder and return the accumulated messages.
    pub fn build(self) -> Vec<Message> {
        self.0
    }
}
