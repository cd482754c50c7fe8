use std::fmt;

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    // Logical
    /// Logical OR (`||`)
    Or,
    /// Logical AND (`&&`)
    And,

    // Equality
    /// Equal (`==`)
    Equal,
    /// Not equal (`!=`)
    NotEqual,

    // Relational
    /// Less than (`<`)
    LessThan,
    /// Greater than (`>`)
    GreaterThan,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,

    // Arithmetic
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
    /// Remainder (`%`)
    Modulo,
    /// Exponentiation (`**`)
    Power,
}

impl BinOp {
    pub const ALL: [BinOp; 14] = [
        BinOp::Or,
        BinOp::And,
        BinOp::Equal,
        BinOp::NotEqual,
        BinOp::LessThan,
        BinOp::GreaterThan,
        BinOp::LessEqual,
        BinOp::GreaterEqual,
        BinOp::Add,
        BinOp::Subtract,
        BinOp::Multiply,
        BinOp::Divide,
        BinOp::Modulo,
        BinOp::Power,
    ];

    /// Source spelling of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Or => "||",
            BinOp::And => "&&",
            BinOp::Equal => "==",
            BinOp::NotEqual => "!=",
            BinOp::LessThan => "<",
            BinOp::GreaterThan => ">",
            BinOp::LessEqual => "<=",
            BinOp::GreaterEqual => ">=",
            BinOp::Add => "+",
            BinOp::Subtract => "-",
            BinOp::Multiply => "*",
            BinOp::Divide => "/",
            BinOp::Modulo => "%",
            BinOp::Power => "**",
        }
    }

    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinOp::Or => 3,
            BinOp::And => 4,
            BinOp::Equal | BinOp::NotEqual => 8,
            BinOp::LessThan | BinOp::GreaterThan | BinOp::LessEqual | BinOp::GreaterEqual => 9,
            BinOp::Add | BinOp::Subtract => 11,
            BinOp::Multiply | BinOp::Divide | BinOp::Modulo => 12,
            BinOp::Power => 13,
        }
    }

    /// Only `**` groups to the right.
    pub fn is_right_assoc(self) -> bool {
        self == BinOp::Power
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Precedence of prefix negation (`!` / `not`).
pub const NOT_PRECEDENCE: u8 = 14;

/// Any operator the scanner can split on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Prefix negation
    Not,
    Binary(BinOp),
}

impl Operator {
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Not => NOT_PRECEDENCE,
            Operator::Binary(op) => op.precedence(),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Not => "!",
            Operator::Binary(op) => op.symbol(),
        }
    }

    /// Source width in chars.
    pub fn width(self) -> usize {
        self.symbol().len()
    }

    /// Two-character spellings, tried before single characters.
    pub fn from_pair(a: char, b: char) -> Option<Self> {
        let op = match (a, b) {
            ('|', '|') => BinOp::Or,
            ('&', '&') => BinOp::And,
            ('=', '=') => BinOp::Equal,
            ('!', '=') => BinOp::NotEqual,
            ('<', '=') => BinOp::LessEqual,
            ('>', '=') => BinOp::GreaterEqual,
            ('*', '*') => BinOp::Power,
            _ => return None,
        };
        Some(Operator::Binary(op))
    }

    pub fn from_char(c: char) -> Option<Self> {
        let op = match c {
            '!' => return Some(Operator::Not),
            '<' => BinOp::LessThan,
            '>' => BinOp::GreaterThan,
            '+' => BinOp::Add,
            '-' => BinOp::Subtract,
            '*' => BinOp::Multiply,
            '/' => BinOp::Divide,
            '%' => BinOp::Modulo,
            _ => return None,
        };
        Some(Operator::Binary(op))
    }

    /// Whether a later occurrence at the same precedence is kept over
    /// an earlier one. Prefix `!` and `**` keep the leftmost.
    pub fn later_wins_tie(self) -> bool {
        match self {
            Operator::Not => false,
            Operator::Binary(op) => !op.is_right_assoc(),
        }
    }
}
