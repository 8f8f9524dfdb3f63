//! Command-line surface of the `persona-switch` binary.
//!
//! The CLI owns everything the core leaves to its caller: picking the
//! persona, collecting the question, rejecting blank input and loading the
//! API credential from flags, the environment or a local `.env` file.
//!
//! User-facing messages are Japanese, like the persona labels.
use std::io::{self, Read};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use persona_switch_personas::Persona;

/// Shown next to the spinner while a completion is in flight.
pub const THINKING: &str = "考え中...";

/// Printed ahead of the failure detail when the completion call fails.
pub const COMPLETION_FAILED: &str = "LLM呼び出しでエラーが出たよ。APIキーやパッケージを確認してね。";

/// Why a question was not sent.
#[derive(Debug, thiserror::Error)]
pub enum QuestionError {
    #[error("入力テキストを入れてね。")]
    Blank,
    #[error("標準入力を読み込めなかったよ: {0}")]
    Stdin(#[from] io::Error),
}

/// 同じ質問を、専門家ペルソナを切り替えてLLMに聞くよ。
#[derive(Debug, Parser)]
#[command(name = "persona-switch", version, about)]
pub struct Cli {
    /// デバッグログを出す
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 使えるペルソナを一覧表示
    Personas,
    /// 質問を1つ送って回答を表示
    Ask(AskArgs),
}

#[derive(Debug, Args)]
pub struct AskArgs {
    /// 回答するペルソナ
    #[arg(short, long, default_value = Persona::DEFAULT.id(), value_parser = Persona::IDS)]
    pub persona: String,

    /// 補完エンドポイントのAPIキー
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// OpenAI互換エンドポイントのベースURL
    #[arg(long, env = "OPENAI_BASE_URL")]
    pub base_url: Option<String>,

    /// 質問テキスト（省略時は標準入力から読む）
    pub text: Vec<String>,
}

impl AskArgs {
    /// The question: positional words joined by single spaces, or all of
    /// `stdin` when none were given.
    pub fn question(&self, mut stdin: impl Read) -> io::Result<String> {
        if !self.text.is_empty() {
            return Ok(self.text.join(" "));
        }

        let mut buffer = String::new();
        stdin.read_to_string(&mut buffer)?;
        Ok(buffer)
    }

    /// [`AskArgs::question`], rejecting whitespace-only text. Runs before
    /// any backend is built.
    pub fn checked_question(&self, stdin: impl Read) -> Result<String, QuestionError> {
        let question = self.question(stdin)?;
        if is_blank(&question) {
            return Err(QuestionError::Blank);
        }
        Ok(question)
    }
}

/// Whitespace-only questions are never sent.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Spinner on stderr while the answer is pending. `None` when `enabled` is
/// false, so piped output stays clean.
pub fn thinking_spinner(enabled: bool) -> Option<ProgressBar> {
    if !enabled {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    pb.set_message(THINKING);
    pb.enable_steady_tick(Duration::from_millis(80));
    Some(pb)
}

/// One line per persona for the `personas` listing.
pub fn persona_listing() -> Vec<String> {
    Persona::ALL
        .iter()
        .map(|persona| format!("{}  {persona}", persona.id()))
        .collect()
}
