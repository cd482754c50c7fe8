use std::fmt;

use crate::ast::BinOp;

/// Abstract Syntax Tree node for a compiled condition.
///
/// Every node owns its children, so a tree has no sharing and no cycles.
/// `PartialEq` is the structural equality used to check parser output: two
/// trees are equal when they have the same shape, operators and literals.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Boolean literal (`true` / `false`)
    Boolean(bool),

    /// Numeric literal
    ///
    /// # Example
    /// ```text
    /// 42
    /// -1.5
    /// ```
    Number(f64),

    /// Variable lookup (`\v[N]`)
    ///
    /// The index is itself an expression evaluated to a number.
    Variable(Box<Expr>),

    /// Prefix negation (`!` or `not`)
    Not(Box<Expr>),

    /// Binary operation (arithmetic, comparison, logical)
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn variable(index: Expr) -> Self {
        Expr::Variable(Box::new(index))
    }

    pub fn not(operand: Expr) -> Self {
        Expr::Not(Box::new(operand))
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Boolean(_) | Expr::Number(_) => 1,
            Expr::Variable(inner) | Expr::Not(inner) => 1 + inner.node_count(),
            Expr::BinaryOp { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }
}

/// Canonical, fully parenthesised source form. Re-parsing the output yields a
/// structurally equal tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Boolean(b) => write!(f, "{}", b),
            // A bare negative operand would be read as a subtraction
            Expr::Number(n) if n.is_sign_negative() => write!(f, "({})", n),
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Variable(index) => write!(f, "\\v[{}]", index),
            Expr::Not(operand) => write!(f, "!{}", operand),
            Expr::BinaryOp { op, left, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}
