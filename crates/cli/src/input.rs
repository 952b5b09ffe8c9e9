// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reading template and variable sources

use std::path::Path;

use crate::error::CliError;

/// Path that selects stdin instead of a file
pub const STDIN: &str = "-";

const BOM: char = '\u{feff}';

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN
}

/// Read a whole source as UTF-8 text from a file or stdin, dropping a
/// leading byte order mark
pub fn read_source(path: &Path) -> Result<String, CliError> {
    let result = if is_stdin(path) {
        std::io::read_to_string(std::io::stdin().lock())
    } else {
        std::fs::read_to_string(path)
    };

    let mut text = result.map_err(|e| CliError::unreadable_input(path, e))?;
    if text.starts_with(BOM) {
        text.replace_range(..BOM.len_utf8(), "");
    }
    tracing::debug!(source = %path.display(), bytes = text.len(), "read source");
    Ok(text)
}

/// Stdin can only feed one of the inputs
pub fn ensure_single_stdin(paths: &[&Path]) -> Result<(), CliError> {
    if paths.iter().filter(|p| is_stdin(p)).count() > 1 {
        return Err(CliError::stdin_used_twice());
    }
    Ok(())
}
