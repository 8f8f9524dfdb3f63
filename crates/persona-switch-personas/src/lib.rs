//! Expert personas and the prompt built around them.
//!
//! * [`registry`] – the closed set of personas and their fixed definitions.
//! * [`fragments`] – small [`IntoPrompt`](persona_switch_core::template::IntoPrompt)
//!   building blocks.
//! * [`chain`] – concatenates fragments into an ordered message list.
//! * [`prompt`] – [`ExpertPrompt`](prompt::ExpertPrompt), the two-message
//!   request sent for every question.
pub mod chain;
pub mod fragments;
pub mod prompt;
pub mod registry;

pub use prompt::ExpertPrompt;
pub use registry::{Persona, PersonaDefinition};
