// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Placeholder substitution

use crate::VariableMap;
use aho_corasick::{AhoCorasick, MatchKind};
use regex::{Regex, RegexBuilder};

// Compiled size budget for the combined key pattern (the regex crate default)
const PATTERN_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Replace every `{{key}}` in the template with the key's value.
///
/// Keys are matched literally. Placeholders with no definition are left as
/// written. Inserted values are never scanned for further placeholders.
pub fn substitute(template: &str, vars: &VariableMap) -> String {
    substitute_within(template, vars, PATTERN_SIZE_LIMIT)
}

fn substitute_within(template: &str, vars: &VariableMap, size_limit: usize) -> String {
    if vars.is_empty() {
        return template.to_string();
    }

    match placeholder_pattern(vars, size_limit) {
        Ok(pattern) => pattern
            .replace_all(template, |caps: &regex::Captures| {
                let key = &caps[1];
                vars.get(key).unwrap_or(&caps[0]).to_string()
            })
            .into_owned(),
        Err(e) => {
            tracing::warn!(error = %e, keys = vars.len(), "combined pattern too large, using literal automaton");
            substitute_literal(template, vars)
        }
    }
}

/// Build `\{\{(k1|k2|...)\}\}` from the escaped keys, longest first so a
/// key never loses to one of its own prefixes.
fn placeholder_pattern(vars: &VariableMap, size_limit: usize) -> Result<Regex, regex::Error> {
    let mut keys: Vec<&str> = vars.keys().collect();
    keys.sort_by(|a, b| b.len().cmp(&a.len()));

    let alternation = keys
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");
    RegexBuilder::new(&format!(r"\{{\{{({})\}}\}}", alternation))
        .size_limit(size_limit)
        .build()
}

/// Single left-to-right pass over `{{key}}` literals with an Aho-Corasick
/// automaton. Leftmost-longest matching gives the same result as the
/// combined pattern.
fn substitute_literal(template: &str, vars: &VariableMap) -> String {
    let patterns: Vec<String> = vars.keys().map(|key| format!("{{{{{}}}}}", key)).collect();
    let values: Vec<&str> = vars.iter().map(|(_, value)| value).collect();

    let automaton = match AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(&patterns)
    {
        Ok(automaton) => automaton,
        Err(e) => {
            tracing::error!(error = %e, keys = vars.len(), "cannot build key automaton, template left as is");
            return template.to_string();
        }
    };

    let mut result = String::with_capacity(template.len());
    let replaced = automaton.try_replace_all_with(template, &mut result, |mat, _, dst| {
        dst.push_str(values[mat.pattern().as_usize()]);
        true
    });
    match replaced {
        Ok(()) => result,
        Err(e) => {
            tracing::error!(error = %e, "key automaton search failed, template left as is");
            template.to_string()
        }
    }
}

#[cfg(test)]
#[path = "substitute_tests.rs"]
mod tests;
