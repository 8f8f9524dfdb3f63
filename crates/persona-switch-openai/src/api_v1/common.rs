use persona_switch_core::generic::GenericUsageReport;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct Usage {
    pub prompt_tokens: i32,
    pub completion_tokens: i32,
    pub total_tokens: i32,
}

impl From<Usage> for GenericUsageReport {
    fn from(value: Usage) -> Self {
        GenericUsageReport {
            prompt_tokens: value.prompt_tokens.into(),
            completion_tokens: value.completion_tokens.into(),
            total_tokens: value.total_tokens.into(),
        }
    }
}
