use crate::{
    ast::{BinOp, Expr},
    value::Value,
    variables::VariableStore,
};

/// Errors that can occur while evaluating a compiled condition.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    /// Operator applied to a combination of types it does not accept
    #[error("type error: cannot apply `{op}` to {left} and {right}")]
    TypeMismatch {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },

    /// `!` applied to a number
    #[error("type error: cannot negate a {0}")]
    NotBoolean(&'static str),

    /// Variable index evaluated to a boolean
    #[error("type error: variable index must be a number, got a {0}")]
    NonNumericIndex(&'static str),

    /// Variable index that is negative, fractional or not finite
    #[error("invalid variable index: {0}")]
    InvalidVariableIndex(f64),
}

/// Tree-walking evaluator over a read-only variable snapshot.
///
/// Evaluation is a pure function of the tree and the store: evaluating the
/// same tree twice against an unchanged store gives the same result.
pub struct Evaluator<'v, V: VariableStore + ?Sized> {
    variables: &'v V,
}

impl<'v, V: VariableStore + ?Sized> Evaluator<'v, V> {
    pub fn new(variables: &'v V) -> Self {
        Evaluator { variables }
    }

    /// Evaluates an expression.
    ///
    /// # Examples
    ///
    /// ```
    /// use choice_conditions::{compile, Evaluator, Value};
    ///
    /// let vars = vec![0.0, 7.0];
    /// let expr = compile(r"\v[1] * 2 > 10").unwrap();
    ///
    /// let result = Evaluator::new(&vars).eval(&expr).unwrap();
    /// assert_eq!(result, Value::Boolean(true));
    /// ```
    pub fn eval(&self, expr: &Expr) -> Result<Value, EvalError> {
        match expr {
            Expr::Boolean(b) => Ok(Value::Boolean(*b)),
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::Variable(index) => {
                let key = self.variable_key(index)?;
                Ok(Value::Number(self.variables.get(key)))
            }
            Expr::Not(operand) => match self.eval(operand)? {
                Value::Boolean(b) => Ok(Value::Boolean(!b)),
                other => Err(EvalError::NotBoolean(other.type_name())),
            },
            Expr::BinaryOp { op, left, right } => {
                // Operands are side-effect free, so both are always evaluated
                let left_val = self.eval(left)?;
                let right_val = self.eval(right)?;
                apply_binop(*op, left_val, right_val)
            }
        }
    }

    fn variable_key(&self, index: &Expr) -> Result<usize, EvalError> {
        let n = match self.eval(index)? {
            Value::Number(n) => n,
            other => return Err(EvalError::NonNumericIndex(other.type_name())),
        };
        if !n.is_finite() || n < 0.0 || n.fract() != 0.0 || n > usize::MAX as f64 {
            return Err(EvalError::InvalidVariableIndex(n));
        }
        Ok(n as usize)
    }
}

fn apply_binop(op: BinOp, left: Value, right: Value) -> Result<Value, EvalError> {
    let mismatch = || EvalError::TypeMismatch {
        op: op.symbol(),
        left: left.type_name(),
        right: right.type_name(),
    };

    match op {
        BinOp::And | BinOp::Or => match (left, right) {
            (Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean(if op == BinOp::And {
                a && b
            } else {
                a || b
            })),
            _ => Err(mismatch()),
        },

        BinOp::Equal | BinOp::NotEqual => {
            let equal = match (left, right) {
                (Value::Number(a), Value::Number(b)) => a == b,
                (Value::Boolean(a), Value::Boolean(b)) => a == b,
                // No coercion between booleans and numbers
                _ => false,
            };
            Ok(Value::Boolean(if op == BinOp::Equal { equal } else { !equal }))
        }

        BinOp::LessThan | BinOp::GreaterThan | BinOp::LessEqual | BinOp::GreaterEqual => {
            let (Value::Number(a), Value::Number(b)) = (left, right) else {
                return Err(mismatch());
            };
            let result = match op {
                BinOp::LessThan => a < b,
                BinOp::GreaterThan => a > b,
                BinOp::LessEqual => a <= b,
                _ => a >= b,
            };
            Ok(Value::Boolean(result))
        }

        BinOp::Add
        | BinOp::Subtract
        | BinOp::Multiply
        | BinOp::Divide
        | BinOp::Modulo
        | BinOp::Power => {
            let (Value::Number(a), Value::Number(b)) = (left, right) else {
                return Err(mismatch());
            };
            let result = match op {
                BinOp::Add => a + b,
                BinOp::Subtract => a - b,
                BinOp::Multiply => a * b,
                BinOp::Divide => a / b,
                BinOp::Modulo => a % b,
                _ => a.powf(b),
            };
            Ok(Value::Number(result))
        }
    }
}

/// Evaluate `expr` against `variables`.
pub fn evaluate<V: VariableStore + ?Sized>(expr: &Expr, variables: &V) -> Result<Value, EvalError> {
    Evaluator::new(variables).eval(expr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_equality_is_strict() {
        let r = apply_binop(BinOp::Equal, Value::Boolean(true), Value::Number(1.0)).unwrap();
        assert_eq!(r, Value::Boolean(false));
        let r = apply_binop(BinOp::NotEqual, Value::Boolean(true), Value::Number(1.0)).unwrap();
        assert_eq!(r, Value::Boolean(true));
    }

    #[test]
    fn ordering_rejects_booleans() {
        let err = apply_binop(BinOp::LessThan, Value::Number(1.0), Value::Boolean(true)).unwrap_err();
        assert_eq!(
            err,
            EvalError::TypeMismatch {
                op: "<",
                left: "number",
                right: "boolean",
            }
        );
    }

    #[test]
    fn logical_rejects_numbers() {
        assert!(apply_binop(BinOp::And, Value::Number(1.0), Value::Boolean(true)).is_err());
        assert!(apply_binop(BinOp::Or, Value::Boolean(false), Value::Number(0.0)).is_err());
    }

    #[test]
    fn fractional_variable_index_is_rejected() {
        let vars = vec![1.0, 2.0];
        let expr = Expr::variable(Expr::Number(1.5));
        assert_eq!(
            evaluate(&expr, &vars),
            Err(EvalError::InvalidVariableIndex(1.5))
        );
    }
}
