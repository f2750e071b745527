//! Terminal output helpers
//!
//! Uses `cliclack` styling in an interactive terminal and falls back to plain
//! prefixed lines in CI or when output is piped.

mod context;
mod output;

pub use context::UiContext;
pub use output::{intro, key_value, status, Status};
