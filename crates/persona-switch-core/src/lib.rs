//! Provider-agnostic building blocks shared by every **persona-switch**
//! crate.
//!
//! | Module       | What it provides                                              |
//! |--------------|---------------------------------------------------------------|
//! | [`error`]    | [`SwitchError`](error::SwitchError) and the `Result` alias    |
//! | [`generic`]  | Chat messages and roles independent of any provider           |
//! | [`model`]    | Enumerated model identifiers                                  |
//! | [`provider`] | The [`ChatCompletionProvider`](provider::ChatCompletionProvider) seam |
//! | [`template`] | Traits that turn a value into a complete chat request         |
pub mod error;
pub mod generic;
pub mod model;
pub mod provider;
pub mod template;
