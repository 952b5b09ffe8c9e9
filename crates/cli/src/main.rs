// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tfill - Template Fill CLI

mod commands;
mod config;
mod error;
mod input;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check, generate, vars};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::Config;
use crate::error::CliError;

#[derive(Parser)]
#[command(
    name = "tfill",
    version,
    about = "Template Fill - substitute {{name}} placeholders from loose variable definitions"
)]
struct Cli {
    /// Config file (default: $TFILL_CONFIG, then ./tfill.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill a template from a variables file
    Generate(generate::GenerateArgs),
    /// List template placeholders and whether each is defined
    Check(check::CheckArgs),
    /// Show the definitions parsed from a variables file
    Vars(vars::VarsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<CliError>() {
                Some(err) => eprint!("{}", err),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref()).map_err(CliError::from)?;
    tracing::debug!(?config, "resolved config");

    match cli.command {
        Commands::Generate(args) => generate::generate(args, &config),
        Commands::Check(args) => check::check(args, &config),
        Commands::Vars(args) => vars::vars(args, &config),
    }
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // stdout carries command output, so logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(false),
        )
        .init();
}
