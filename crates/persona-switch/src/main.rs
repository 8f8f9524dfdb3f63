//! Ask a language model one question through an expert persona.
//!
//! Reads the API key from `OPENAI_API_KEY` (or `--api-key`). A `.env` file
//! in the working directory or its parents is loaded first; variables
//! already set in the environment win.
//!
//! ```sh
//! # List personas
//! persona-switch personas
//!
//! # Ask the career coach (default persona)
//! persona-switch ask "How do I start?"
//!
//! # Ask the AI engineer, question from stdin
//! cat question.txt | persona-switch ask --persona B
//! ```

use std::io::{self, IsTerminal as _};
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use persona_switch::cli::{
    AskArgs, COMPLETION_FAILED, Cli, Command, QuestionError, persona_listing, thinking_spinner,
};
use persona_switch::openai::OpenAiAdapterBuilder;
use persona_switch::{Persona, Requester};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("エラー: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("persona_switch=debug,persona_switch_openai=debug")
        } else {
            EnvFilter::new("persona_switch=info")
        }
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Command::Personas => {
            for line in persona_listing() {
                println!("{line}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Ask(args) => cmd_ask(args).await,
    }
}

async fn cmd_ask(args: AskArgs) -> anyhow::Result<ExitCode> {
    let question = match args.checked_question(io::stdin().lock()) {
        Ok(question) => question,
        Err(err @ QuestionError::Blank) => {
            eprintln!("{err}");
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => return Err(err.into()),
    };

    let mut builder = OpenAiAdapterBuilder::new();
    if let Some(api_key) = args.api_key {
        builder = builder.with_api_key(api_key);
    }
    if let Some(base_url) = args.base_url {
        builder = builder.with_base_url(base_url);
    }
    let backend = builder
        .build()
        .context("OPENAI_API_KEY を設定するか --api-key を渡してね。")?;

    let persona = Persona::resolve(&args.persona);
    eprintln!("{persona}");
    tracing::debug!(persona = persona.id(), base_url = backend.base_url(), "submitting question");

    let requester = Requester::new(backend);

    let spinner = thinking_spinner(io::stderr().is_terminal());
    let outcome = requester.complete(&question, persona.id()).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match outcome {
        Ok(answer) => {
            println!("{answer}");
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            tracing::debug!(error = ?failure.inner(), "completion failed");
            eprintln!("{COMPLETION_FAILED}");
            eprintln!("{failure}");
            Ok(ExitCode::FAILURE)
        }
    }
}
