// ABOUTME: Command-line tool for inspecting UpCoach record payloads
// ABOUTME: Lists kinds, normalizes, merge-patches and hashes JSON records by kind name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UpCoach

//! # `UpCoach` Record CLI
//!
//! Works on JSON payloads exported from the app or backend, decoding them with
//! the same rules the typed models use.
//!
//! ## Usage
//!
//! ```bash
//! # List every record kind
//! upcoach-cli kinds
//!
//! # Decode a payload and print it with defaults filled
//! upcoach-cli decode coach_package package.json --pretty
//!
//! # Apply a merge patch (a null clears a nullable field)
//! upcoach-cli patch coach_session session.json patch.json
//!
//! # Content hash, stable across key order
//! upcoach-cli hash habit_state state.json
//!
//! # Read from stdin, print TOON
//! cat profile.json | upcoach-cli --format toon decode coach_profile -
//! ```

mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use upcoach_models::config::CliConfig;
use upcoach_models::errors::AppResult;
use upcoach_models::formatters::OutputFormat;
use upcoach_models::logging;

#[derive(Parser)]
#[command(
    name = "upcoach-cli",
    about = "UpCoach record inspector",
    long_about = "Decode, normalize, merge-patch and hash UpCoach record payloads by kind name"
)]
struct Cli {
    /// Output format (json or toon), overrides `UPCOACH_OUTPUT_FORMAT`
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every record kind
    Kinds,
    /// Decode a payload and print it with every default filled
    Decode {
        /// Record kind, e.g. `coach_profile`
        kind: String,
        /// JSON file, or `-` for stdin
        file: String,
    },
    /// Apply a JSON merge patch to a record and print the result
    Patch {
        /// Record kind
        kind: String,
        /// JSON file holding the record
        record_file: String,
        /// JSON file holding the merge patch
        patch_file: String,
    },
    /// Print the content hash of a record
    Hash {
        /// Record kind
        kind: String,
        /// JSON file, or `-` for stdin
        file: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = %e.code, "Command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let mut config = CliConfig::from_env()?;
    if cli.verbose {
        "debug".clone_into(&mut config.logging.level);
    }
    if let Some(format) = cli.format {
        config.output_format = format;
    }
    config.pretty |= cli.pretty;

    logging::init_logging(&config.logging)?;
    debug!(?config, "Loaded configuration");

    let output = commands::Output {
        format: config.output_format,
        pretty: config.pretty,
    };

    match cli.command {
        Command::Kinds => commands::record::kinds(output),
        Command::Decode { kind, file } => commands::record::decode(output, &kind, &file),
        Command::Patch {
            kind,
            record_file,
            patch_file,
        } => commands::record::patch(output, &kind, &record_file, &patch_file),
        Command::Hash { kind, file } => commands::record::hash(&kind, &file),
    }
}
