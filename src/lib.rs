//! Conditions that disable or hide dialog choices.
//!
//! ```
//! use choice_conditions::resolve;
//!
//! let vars = vec![0.0, 12.0];
//! let choices = resolve(&[r"<dis>\v[1] < 10</dis>Enter", "Leave"], &vars);
//! assert!(choices[0].enabled);
//! ```
pub mod ast;
pub mod choices;
pub mod cli;
pub mod evaluator;
pub mod parser;
pub mod scanner;
pub mod tags;
pub mod value;
pub mod variables;

pub use ast::{BinOp, Expr};
pub use choices::{
    ConditionError, Diagnostic, Resolution, ResolvedChoice, Resolver, check_condition, resolve,
};
pub use evaluator::{EvalError, Evaluator, evaluate};
pub use parser::{ParseError, Parser, compile};
pub use tags::{Extracted, TagKind, TagPair, TagSet, extract};
pub use value::Value;
pub use variables::{FnStore, NoVariables, VariableStore};
