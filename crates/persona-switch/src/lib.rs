//! # `persona-switch`
//!
//! Ask a language model one question through one of two fixed expert
//! personas. The persona only changes the *system instruction* sent ahead of
//! the question; the question itself is forwarded verbatim.
//!
//! | Crate                         | What it provides                                         |
//! |-------------------------------|----------------------------------------------------------|
//! | **`persona-switch-core`**     | Provider trait, generic messages, model ids, errors      |
//! | **`persona-switch-personas`** | Persona registry and the two-message [`ExpertPrompt`]    |
//! | **`persona-switch-openai`**   | HTTP backend for OpenAI-compatible endpoints *(optional)*|
//!
//! This crate adds the [`Requester`], which resolves a persona, builds the
//! request and returns the reply text, plus the `persona-switch` binary.
//!
//! ```rust,no_run
//! use persona_switch::{Requester, openai::OpenAiAdapterBuilder};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = OpenAiAdapterBuilder::new().with_api_key("sk-…").build()?;
//!     let requester = Requester::new(backend);
//!
//!     let answer = requester.complete("How do I start?", "A").await?;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```
pub mod cli;
mod requester;

pub use persona_switch_core::*;
pub use persona_switch_personas as personas;
pub use persona_switch_personas::{ExpertPrompt, Persona, PersonaDefinition};
pub use requester::{CompletionFailure, Requester, build_request};

#[cfg(feature = "openai")]
pub use persona_switch_openai as openai;
