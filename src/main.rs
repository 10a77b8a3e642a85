//! Command-line entry point — verify a transcript against a target sentence.
//!
//! # Usage
//!
//! ```text
//! speech-verify verify  <target> <transcript> [attempt_index]
//! speech-verify compare <target> <transcript>
//! ```
//!
//! The result is printed to stdout as pretty JSON.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Build the [`VerificationOrchestrator`] from the config.
//! 4. Run the requested command and print the result.

use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use speech_verify::{config::AppConfig, verify::VerificationOrchestrator};

const USAGE: &str = "usage:
  speech-verify verify  <target> <transcript> [attempt_index]
  speech-verify compare <target> <transcript>";

// ---------------------------------------------------------------------------
// Command parsing
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq)]
enum Command {
    Verify {
        target: String,
        transcript: String,
        attempt_index: u32,
    },
    Compare {
        target: String,
        transcript: String,
    },
}

fn parse_args(args: &[String]) -> Result<Command> {
    match args {
        [cmd, target, transcript] if cmd == "verify" => Ok(Command::Verify {
            target: target.clone(),
            transcript: transcript.clone(),
            attempt_index: 0,
        }),
        [cmd, target, transcript, attempt] if cmd == "verify" => Ok(Command::Verify {
            target: target.clone(),
            transcript: transcript.clone(),
            attempt_index: attempt
                .parse()
                .with_context(|| format!("attempt_index must be a non-negative integer, got {attempt:?}"))?,
        }),
        [cmd, target, transcript] if cmd == "compare" => Ok(Command::Compare {
            target: target.clone(),
            transcript: transcript.clone(),
        }),
        _ => bail!("{USAGE}"),
    }
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn run(command: Command, verifier: &VerificationOrchestrator) -> Result<String> {
    let json = match command {
        Command::Verify {
            target,
            transcript,
            attempt_index,
        } => serde_json::to_string_pretty(&verifier.verify(&target, &transcript, attempt_index)?)?,
        Command::Compare { target, transcript } => {
            serde_json::to_string_pretty(&verifier.compare(&target, &transcript)?)?
        }
    };
    Ok(json)
}

fn main() -> ExitCode {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::from(2);
        }
    };

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 3. Verifier
    let verifier = match VerificationOrchestrator::new(config.verification) {
        Ok(verifier) => verifier,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::from(2);
        }
    };

    // 4. Run
    match run(command, &verifier) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
