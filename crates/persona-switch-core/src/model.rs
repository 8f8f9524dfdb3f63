//! Model identifiers used throughout the workspace.
//!
//! Application code picks an enum variant instead of typing literal strings
//! such as `"gpt-4o-mini"`; each provider crate maps the variants onto its
//! own naming scheme.
//!
//! ```rust
//! use persona_switch_core::model::{Model, OpenAiModel};
//! assert_eq!(Model::from(OpenAiModel::Gpt4oMini),
//!            Model::OpenAi(OpenAiModel::Gpt4oMini));
//! ```

/// Universal identifier for an LLM model.
///
/// * `OpenAi` – enumerated OpenAI chat models.
/// * `Custom` – any model name not covered by a dedicated enum, e.g. one
///   served by an OpenAI-compatible gateway.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    OpenAi(OpenAiModel),
    Custom(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenAiModel {
    Gpt4o,
    Gpt4oMini,
}

impl From<OpenAiModel> for Model {
    fn from(val: OpenAiModel) -> Self {
        Model::OpenAi(val)
    }
}
