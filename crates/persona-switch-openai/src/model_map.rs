use std::borrow::Cow;

use persona_switch_core::model::{Model, OpenAiModel};

pub const GPT4_O_MINI: &str = "gpt-4o-mini";
pub const GPT4_O: &str = "gpt-4o";

pub(crate) fn map_model(model: &Model) -> Cow<'static, str> {
    match model {
        Model::Custom(custom) => Cow::Borrowed(*custom),
        Model::OpenAi(OpenAiModel::Gpt4o) => GPT4_O.into(),
        Model::OpenAi(OpenAiModel::Gpt4oMini) => GPT4_O_MINI.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_openai_and_custom_models() {
        assert_eq!(map_model(&OpenAiModel::Gpt4oMini.into()), "gpt-4o-mini");
        assert_eq!(map_model(&OpenAiModel::Gpt4o.into()), "gpt-4o");
        assert_eq!(map_model(&Model::Custom("llama3:8b")), "llama3:8b");
    }
}
