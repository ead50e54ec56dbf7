//! scenescript - parse generated video scripts into scene records
//!
//! Usage:
//!   scenescript parse script.txt          Parse a script file, print JSON
//!   scenescript parse --format text       Parse stdin, print a readable listing
//!   scenescript guard "prompt text"       Check a prompt against the blocklist

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use scenescript::error_codes::{
    find_coded_error, CodedError, EMPTY_PROMPT, INPUT_UNREADABLE, INTERNAL_ERROR,
};
use scenescript::parse_script_to_scenes;
use scenescript::prompt_guard::blocked_phrase;
use scenescript::render::{render_scenes, OutputFormat};

const AGENT_MODE_ENV: &str = "SCENESCRIPT_AGENT_MODE";

#[derive(Debug, Parser)]
#[command(name = "scenescript")]
#[command(version = env!("SCENESCRIPT_VERSION"))]
#[command(about = "Parse LLM-generated video scripts into scene records")]
struct Cli {
    /// Log filter, e.g. `info` or `scenescript=debug`
    #[arg(long, global = true, env = "SCENESCRIPT_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a generated script into scenes
    Parse {
        /// Script file; stdin when omitted or `-`
        input: Option<PathBuf>,
        #[arg(
            short = 'f',
            long = "format",
            value_enum,
            env = "SCENESCRIPT_FORMAT",
            default_value = "json"
        )]
        format: OutputFormat,
    },
    /// Check a video prompt for injection phrases
    Guard {
        /// Prompt text; `-` reads stdin
        prompt: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let result = match cli.command {
        Commands::Parse { input, format } => run_parse(input.as_deref(), format),
        Commands::Guard { prompt } => run_guard(prompt),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report_error(&error),
    }
}

// Logs go to stderr; stdout carries the parse output.
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .init();
}

fn run_parse(input: Option<&Path>, format: OutputFormat) -> Result<()> {
    let raw = read_input(input)?;
    let scenes = parse_script_to_scenes(&raw);
    info!(
        input_len = raw.len(),
        scene_count = scenes.len(),
        "parsed script"
    );

    let rendered = render_scenes(&scenes, format)?;
    io::stdout()
        .lock()
        .write_all(rendered.as_bytes())
        .context("failed to write scenes to stdout")?;
    Ok(())
}

fn run_guard(prompt: String) -> Result<()> {
    let prompt = if prompt == "-" { read_stdin()? } else { prompt };
    if prompt.trim().is_empty() {
        return Err(CodedError::usage(EMPTY_PROMPT, "prompt is empty").into());
    }
    if let Some(phrase) = blocked_phrase(&prompt) {
        return Err(CodedError::prompt_blocked(phrase).into());
    }
    println!("allowed");
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        None => read_stdin(),
        Some(path) if path == Path::new("-") => read_stdin(),
        Some(path) => {
            let bytes = fs::read(path).map_err(|err| {
                CodedError::io(
                    INPUT_UNREADABLE,
                    format!("cannot read {}: {err}", path.display()),
                )
            })?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}

fn read_stdin() -> Result<String> {
    let mut bytes = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut bytes)
        .map_err(|err| CodedError::io(INPUT_UNREADABLE, format!("cannot read stdin: {err}")))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn report_error(error: &anyhow::Error) -> ExitCode {
    let agent_mode = std::env::var(AGENT_MODE_ENV).is_ok_and(|value| value == "1");
    let coded = match find_coded_error(error) {
        Some(coded) => coded.clone(),
        None => CodedError::io(INTERNAL_ERROR, format!("{error:#}")),
    };

    if agent_mode {
        match serde_json::to_string(&coded.envelope()) {
            Ok(json) => eprintln!("{json}"),
            Err(_) => eprintln!("error: {coded}"),
        }
    } else {
        eprintln!("error: {coded}");
    }
    ExitCode::from(coded.kind.exit_code())
}
