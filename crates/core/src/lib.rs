// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tfill-core: the template filling pipeline
//!
//! - Parse loosely formatted `key = value` definitions
//! - Detect `{{name}}` placeholders in a template
//! - Substitute defined values, leaving undefined placeholders in place
//! - Report which placeholders are defined

mod definitions;
mod placeholder;
mod status;
mod substitute;

pub use definitions::{parse_definitions, VariableMap};
pub use placeholder::detect_placeholders;
pub use status::{generate, inspect, placeholder_status, Generation, PlaceholderStatus};
pub use substitute::substitute;
