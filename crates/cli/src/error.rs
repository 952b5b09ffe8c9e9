// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Boundary errors for tfill: unreadable inputs, unwritable output, bad
//! config, and undefined placeholders under `--strict`.
//!
//! Rendered as an `error:` line, `->` context lines, then numbered suggestions.

use std::fmt;
use std::path::Path;

use crate::config::{ConfigError, CONFIG_ENV};

type Source = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug)]
pub struct CliError {
    pub message: String,
    context: Vec<String>,
    suggestions: Vec<String>,
    source: Option<Source>,
}

impl CliError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    fn with_source(mut self, source: impl Into<Source>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Common error builders for typical failure scenarios.
impl CliError {
    /// Error for an input file that cannot be read as UTF-8 text.
    pub fn unreadable_input(path: &Path, source: std::io::Error) -> Self {
        let err = CliError::new(format!("Cannot read '{}'", path.display()))
            .with_context(source.to_string());
        let err = match source.kind() {
            std::io::ErrorKind::NotFound => err
                .with_suggestion("Check the path is spelled correctly")
                .with_suggestion("Use '-' to read from stdin"),
            std::io::ErrorKind::InvalidData => err
                .with_context("Templates and variable files must be UTF-8 text")
                .with_suggestion(format!(
                    "Convert the file first: iconv -t UTF-8 {}",
                    path.display()
                )),
            _ => err.with_suggestion("Check the file permissions"),
        };
        err.with_source(source)
    }

    /// Error for when both inputs ask for stdin.
    pub fn stdin_used_twice() -> Self {
        CliError::new("Only one input can be read from stdin")
            .with_context("Both --template and --vars were given as '-'")
            .with_suggestion("Save one of the inputs to a file and pass its path")
    }

    /// Error for placeholders left without a definition in strict mode.
    pub fn undefined_placeholders(names: &[&str]) -> Self {
        let list = names
            .iter()
            .map(|name| format!("{{{{{}}}}}", name))
            .collect::<Vec<_>>()
            .join(", ");
        CliError::new(format!("{} undefined placeholder(s): {}", names.len(), list))
            .with_context("Undefined placeholders are left in the output as written")
            .with_suggestion("Add a line such as 'name = value' to the variables file")
            .with_suggestion("List placeholder status with: tfill check --template <file> --vars <file>")
            .with_suggestion("Drop --strict (or set strict = false) to allow partial output")
    }

    /// Error for an output file that cannot be written.
    pub fn unwritable_output(path: &Path, source: std::io::Error) -> Self {
        CliError::new(format!("Cannot write '{}'", path.display()))
            .with_context(source.to_string())
            .with_suggestion("Check the parent directory exists and is writable")
            .with_source(source)
    }
}

impl CliError {
    /// Error for a config file that cannot be read or parsed.
    pub fn invalid_config(err: ConfigError) -> Self {
        let suggestion = match &err {
            ConfigError::Io { .. } => format!(
                "Check the --config path or unset {} to use defaults",
                CONFIG_ENV
            ),
            ConfigError::Toml { .. } => {
                "Valid keys are: format = \"text\" | \"json\", show_status = <bool>, strict = <bool>"
                    .to_string()
            }
        };
        CliError::new("Invalid configuration")
            .with_context(err.to_string())
            .with_suggestion(suggestion)
            .with_source(err)
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::invalid_config(err)
    }
}
