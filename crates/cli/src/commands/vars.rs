// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tfill vars` - Show the definitions parsed from a variables file

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::input;
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct VarsArgs {
    /// Variable definitions file ('-' for stdin)
    #[arg(short = 'd', long = "vars")]
    pub vars: PathBuf,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

pub fn vars(args: VarsArgs, config: &Config) -> Result<()> {
    let text = input::read_source(&args.vars)?;
    let vars = tfill_core::parse_definitions(&text);

    match args.format.unwrap_or(config.format) {
        OutputFormat::Text => {
            if vars.is_empty() {
                println!("No definitions");
            }
            for (key, value) in &vars {
                println!("{} = {}", key, value);
            }
        }
        OutputFormat::Json => print!("{}", output::to_json(&vars)?),
    }
    Ok(())
}
