use std::fmt;

/// Result of evaluating a condition.
///
/// The language is dynamically typed, but only two types exist. Operators
/// accept an explicit set of variant combinations; nothing is coerced.
///
/// # Examples
///
/// ```
/// use choice_conditions::Value;
///
/// let flag = Value::Boolean(true);
/// let amount = Value::Number(2.5);
///
/// assert_eq!(flag.as_bool(), Some(true));
/// assert_eq!(amount.as_number(), Some(2.5));
/// assert_eq!(amount.as_bool(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Boolean(bool),

    /// IEEE-754 double
    Number(f64),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            Value::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Boolean(_) => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}
