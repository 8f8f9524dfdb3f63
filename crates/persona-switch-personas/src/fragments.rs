//! Prompt fragments: small values that render into one or more messages.
//!
//! ```rust
//! use persona_switch_core::generic::GenericRole;
//! use persona_switch_core::template::IntoPrompt;
//! use persona_switch_personas::fragments::StaticFragment;
//!
//! let messages = StaticFragment::from("You are a proof-reading engine.").into_prompt();
//! assert_eq!(messages[0].role, GenericRole::System);
//! ```

use persona_switch_core::{
    generic::{GenericMessage, GenericRole},
    template::IntoPrompt,
};

use crate::registry::Persona;

/// A borrowed string bundled with a chat role. The text is copied into the
/// message verbatim.
pub struct StaticFragment<'a>((&'a str, GenericRole));

/// Defaults to **system**, the most common role for static text.
impl<'a> From<&'a str> for StaticFragment<'a> {
    fn from(value: &'a str) -> Self {
        Self((value, GenericRole::System))
    }
}

impl<'a> StaticFragment<'a> {
    pub fn new(value: &'a str, role: GenericRole) -> Self {
        Self((value, role))
    }
}

impl IntoPrompt for StaticFragment<'_> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        let (text, role) = self.0;
        vec![GenericMessage::new(text.to_owned(), role)]
    }
}

/// The system instruction of a persona.
pub struct PersonaFragment(pub Persona);

impl IntoPrompt for PersonaFragment {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        StaticFragment::from(self.0.definition().system_instruction).into_prompt()
    }
}
