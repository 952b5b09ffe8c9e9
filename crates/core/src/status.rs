// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Placeholder status and the generate pipeline
//!
//! Joins detected placeholders against the parsed definitions so the caller
//! can show which ones are still missing. The join never affects substitution.

use crate::{detect_placeholders, parse_definitions, substitute, VariableMap};
use serde::Serialize;
use std::fmt;

/// Whether a detected placeholder has a definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderStatus {
    pub name: String,
    pub defined: bool,
    /// The defined value, absent for undefined placeholders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl fmt::Display for PlaceholderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} → {}", self.name, value),
            None => write!(f, "{} (undefined)", self.name),
        }
    }
}

/// Pair each placeholder with its definition status, in placeholder order
pub fn placeholder_status(placeholders: &[String], vars: &VariableMap) -> Vec<PlaceholderStatus> {
    placeholders
        .iter()
        .map(|name| {
            let value = vars.get(name).map(str::to_string);
            PlaceholderStatus {
                name: name.clone(),
                defined: value.is_some(),
                value,
            }
        })
        .collect()
}

/// Output of a full generate run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generation {
    pub result: String,
    pub placeholders: Vec<PlaceholderStatus>,
}

impl Generation {
    /// Names of placeholders left without a definition
    pub fn undefined(&self) -> Vec<&str> {
        self.placeholders
            .iter()
            .filter(|p| !p.defined)
            .map(|p| p.name.as_str())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.placeholders.iter().all(|p| p.defined)
    }
}

/// Parse the definitions, fill the template, and report placeholder status
pub fn generate(template: &str, definitions: &str) -> Generation {
    let vars = parse_definitions(definitions);
    let placeholders = placeholder_status(&detect_placeholders(template), &vars);
    let result = substitute(template, &vars);

    tracing::debug!(
        definitions = vars.len(),
        placeholders = placeholders.len(),
        "generated"
    );

    Generation {
        result,
        placeholders,
    }
}

/// Report placeholder status without substituting
pub fn inspect(template: &str, definitions: &str) -> Vec<PlaceholderStatus> {
    let vars = parse_definitions(definitions);
    placeholder_status(&detect_placeholders(template), &vars)
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
