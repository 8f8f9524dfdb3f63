//! The persona registry.
//!
//! Personas form a closed enum so every match is exhaustive; string ids only
//! appear at the edge (CLI flags, [`Persona::lookup`]). Unknown ids resolve
//! to [`Persona::DEFAULT`] instead of failing.
//!
//! ```rust
//! use persona_switch_personas::Persona;
//!
//! assert_eq!(Persona::lookup("B").id, "B");
//! assert_eq!(Persona::lookup("Z").id, "A");
//! ```
use std::fmt;

/// Static description of one persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonaDefinition {
    /// Short identifier used on the command line.
    pub id: &'static str,
    /// Display label.
    pub label: &'static str,
    /// One-line summary of what the persona is good at.
    pub description: &'static str,
    /// System instruction sent ahead of the user's text.
    pub system_instruction: &'static str,
}

impl fmt::Display for PersonaDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}：{}", self.label, self.description)
    }
}

const CAREER_COACH: PersonaDefinition = PersonaDefinition {
    id: "A",
    label: "A：キャリアコーチ",
    description: "転職・学習計画・不安の整理が得意。状況整理→優先順位→次の一歩を提案します。",
    system_instruction: concat!(
        "あなたは経験豊富なキャリアコーチです。",
        "相談者の状況を丁寧に整理し、安心感のある言葉で、",
        "具体的な行動プラン（今日できる一歩）を提案してください。",
        "必要に応じて質問も1〜3個だけ返してください。",
    ),
};

const AI_ENGINEER: PersonaDefinition = PersonaDefinition {
    id: "B",
    label: "B：AIエンジニア",
    description: "生成AI/LLM開発が得意。実装手順・落とし穴・デバッグの観点で回答します。",
    system_instruction: concat!(
        "あなたはシニアAIエンジニアです。",
        "回答は技術的に正確に、手順を箇条書きで示し、",
        "注意点（よくあるミス）と確認コマンド例も添えてください。",
        "不確かな場合は推測せず、前提条件を確認してください。",
    ),
};

/// Closed set of expert personas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Persona {
    /// Career coach: organises the situation and proposes a next step.
    #[default]
    CareerCoach,
    /// Senior AI engineer: precise steps, pitfalls, verification commands.
    AiEngineer,
}

impl Persona {
    /// Persona used when an id is unknown.
    pub const DEFAULT: Persona = Persona::CareerCoach;

    /// Every persona in display order.
    pub const ALL: [Persona; 2] = [Persona::CareerCoach, Persona::AiEngineer];

    /// Every persona id in display order.
    pub const IDS: [&'static str; 2] = [CAREER_COACH.id, AI_ENGINEER.id];

    pub fn definition(self) -> &'static PersonaDefinition {
        match self {
            Persona::CareerCoach => &CAREER_COACH,
            Persona::AiEngineer => &AI_ENGINEER,
        }
    }

    pub fn id(self) -> &'static str {
        self.definition().id
    }

    pub fn from_id(id: &str) -> Option<Persona> {
        Persona::ALL.into_iter().find(|persona| persona.id() == id)
    }

    /// Resolve `id` to a persona, falling back to [`Persona::DEFAULT`].
    pub fn resolve(id: &str) -> Persona {
        Persona::from_id(id).unwrap_or(Persona::DEFAULT)
    }

    /// Definition for `id`; unknown ids yield the default definition.
    pub fn lookup(id: &str) -> &'static PersonaDefinition {
        Persona::resolve(id).definition()
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.definition(), f)
    }
}
