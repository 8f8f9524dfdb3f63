//! The request sent for every question: the persona's system instruction
//! followed by the user's text, nothing else.
//!
//! ```rust
//! use persona_switch_core::generic::GenericRole;
//! use persona_switch_core::template::IntoPrompt;
//! use persona_switch_personas::{ExpertPrompt, Persona};
//!
//! let messages = ExpertPrompt::new(Persona::CareerCoach, "How do I start?").into_prompt();
//!
//! assert_eq!(messages[0].role, GenericRole::System);
//! assert_eq!(messages[1].text(), "How do I start?");
//! ```
use persona_switch_core::{
    generic::{GenericMessage, GenericRole},
    model::{Model, OpenAiModel},
    template::{IntoPrompt, PromptTemplate},
};

use crate::{
    chain::PromptChain,
    fragments::{PersonaFragment, StaticFragment},
    registry::Persona,
};

/// A single question framed by one persona.
///
/// The user text is passed through verbatim: no trimming, no truncation and
/// no earlier turns.
#[derive(Debug, Clone)]
pub struct ExpertPrompt<'a> {
    persona: Persona,
    user_text: &'a str,
}

impl<'a> ExpertPrompt<'a> {
    pub fn new(persona: Persona, user_text: &'a str) -> Self {
        Self { persona, user_text }
    }

    /// Resolve `persona_id` through the registry; unknown ids use the
    /// default persona.
    pub fn for_id(persona_id: &str, user_text: &'a str) -> Self {
        Self::new(Persona::resolve(persona_id), user_text)
    }

    pub fn persona(&self) -> Persona {
        self.persona
    }
}

impl IntoPrompt for ExpertPrompt<'_> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        PromptChain::new()
            .with(PersonaFragment(self.persona))
            .with(StaticFragment::new(self.user_text, GenericRole::User))
            .build()
    }
}

impl PromptTemplate for ExpertPrompt<'_> {
    const MODEL: Model = Model::OpenAi(OpenAiModel::Gpt4oMini);
    const TEMPERATURE: Option<f64> = Some(0.7);
}
