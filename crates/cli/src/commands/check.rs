// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tfill check` - List template placeholders and their definition status

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::input;
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct CheckArgs {
    /// Template file ('-' for stdin)
    #[arg(short, long)]
    pub template: PathBuf,

    /// Variable definitions file ('-' for stdin); without it every placeholder is undefined
    #[arg(short = 'd', long = "vars")]
    pub vars: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

pub fn check(args: CheckArgs, config: &Config) -> Result<()> {
    if let Some(vars) = &args.vars {
        input::ensure_single_stdin(&[args.template.as_path(), vars.as_path()])?;
    }

    let template = input::read_source(&args.template)?;
    let definitions = match &args.vars {
        Some(path) => input::read_source(path)?,
        None => String::new(),
    };

    let statuses = tfill_core::inspect(&template, &definitions);
    output::print_list(&statuses, args.format.unwrap_or(config.format))
}
