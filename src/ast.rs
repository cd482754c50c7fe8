//! # Condition language - Abstract Syntax Tree
//!
//! A condition is a small expression embedded in a choice label:
//!
//! ```text
//! <dis> (\v[1] > 0) && (\v[1] < 100) </dis>First choice!
//! ```
//!
//! - **[expressions]** - expression nodes (literals, variable lookups, operations)
//! - **[operators]** - binary operators, the prefix `!`, and their precedence table
//!
//! ## Precedence
//!
//! From loosest to tightest:
//!
//! | Operators               | Precedence |
//! |-------------------------|------------|
//! | `\|\|`                  | 3          |
//! | `&&`                    | 4          |
//! | `==` `!=`               | 8          |
//! | `<` `>` `<=` `>=`       | 9          |
//! | `+` `-`                 | 11         |
//! | `*` `/` `%`             | 12         |
//! | `**` (right-assoc)      | 13         |
//! | prefix `!` / `not`      | 14         |
pub mod expressions;
pub mod operators;

pub use expressions::Expr;
pub use operators::{BinOp, NOT_PRECEDENCE, Operator};
