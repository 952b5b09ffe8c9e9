// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tfill generate` - Fill a template from a variables file

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::CliError;
use crate::input;
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct GenerateArgs {
    /// Template file ('-' for stdin)
    #[arg(short, long)]
    pub template: PathBuf,

    /// Variable definitions file, one `key = value` per line ('-' for stdin)
    #[arg(short = 'd', long = "vars")]
    pub vars: PathBuf,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Don't report which placeholders are defined
    #[arg(long)]
    pub no_status: bool,

    /// Exit with an error if any placeholder is left undefined
    #[arg(long)]
    pub strict: bool,
}

pub fn generate(args: GenerateArgs, config: &Config) -> Result<()> {
    input::ensure_single_stdin(&[args.template.as_path(), args.vars.as_path()])?;
    let template = input::read_source(&args.template)?;
    let definitions = input::read_source(&args.vars)?;

    let generation = tfill_core::generate(&template, &definitions);
    let undefined = generation.undefined();
    if !undefined.is_empty() {
        tracing::info!(?undefined, "placeholders left undefined");
    }

    match args.format.unwrap_or(config.format) {
        OutputFormat::Text => {
            output::emit(&generation.result, args.output.as_deref())?;
            if config.show_status && !args.no_status {
                output::report_status(&generation.placeholders);
            }
        }
        OutputFormat::Json => {
            output::emit(&output::to_json(&generation)?, args.output.as_deref())?;
        }
    }

    if (args.strict || config.strict) && !undefined.is_empty() {
        return Err(CliError::undefined_placeholders(&undefined).into());
    }

    Ok(())
}
