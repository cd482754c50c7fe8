//! Compile and evaluate a single condition

use super::{CliError, value_to_json, variables_from_json};
use crate::{Evaluator, Parser};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The condition to compile
    pub expression: String,
    /// Variable table as JSON
    pub variables: Option<String>,
    /// Only compile, don't evaluate
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug, PartialEq)]
pub enum CheckResult {
    /// Compiled successfully; carries the canonical parenthesised form
    SyntaxValid(String),
    /// Evaluated successfully
    Success(serde_json::Value),
}

/// Execute a check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let expr = Parser::new(&options.expression).parse()?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid(expr.to_string()));
    }

    let vars = match &options.variables {
        Some(json) => variables_from_json(&serde_json::from_str(json)?)?,
        None => Default::default(),
    };

    let result = Evaluator::new(&vars).eval(&expr)?;
    Ok(CheckResult::Success(value_to_json(result)))
}
