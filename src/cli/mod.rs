//! CLI support for choice-conditions
//!
//! Lets content authors try conditions and whole choice lists from a shell
//! before wiring them into the host.

mod check;
mod convert;
mod docs;
mod resolve;

pub use check::{CheckOptions, CheckResult, execute_check};
pub use convert::{choices_from_json, resolved_to_json, value_to_json, variables_from_json};
pub use docs::{DocCategory, get_doc_category, get_docs_overview};
pub use resolve::{ResolveOptions, execute_resolve};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    #[error("Evaluation error: {0}")]
    Eval(#[from] crate::EvalError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No input provided. Use --input or pipe JSON to stdin.")]
    NoInput,

    /// JSON that parsed but has the wrong shape
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown category: '{0}'\nRun 'choices docs' to see available categories.")]
    UnknownCategory(String),
}
