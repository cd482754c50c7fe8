use std::sync::LazyLock;

use regex::Regex;

use crate::{
    ast::{Expr, Operator},
    scanner::{Scanner, Split},
};

static NOT_KEYWORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bnot\b").unwrap());
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)$").unwrap());
static VARIABLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\\[vV]\[(\d+)\]$").unwrap());

/// Errors produced while compiling a condition.
///
/// These always come from authoring mistakes in choice labels.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The tag region was present but held nothing but whitespace.
    #[error("empty expression")]
    EmptyExpression,

    /// A `(` with no matching `)`.
    #[error("unterminated parenthesis at position {position} in `{expression}`")]
    UnterminatedParenthesis { expression: String, position: usize },

    /// Text that is not a literal, a variable reference or an operation.
    #[error("malformed expression: {0}")]
    MalformedExpression(String),
}

/// Compiles condition source into an [`Expr`].
///
/// Parsing works by splitting: at each level the text is cut at its
/// loosest-binding operator and both halves are parsed recursively. This
/// rescans substrings, which is fine for conditions a few dozen characters
/// long.
pub struct Parser {
    source: String,
}

impl Parser {
    pub fn new(raw: &str) -> Self {
        Parser {
            source: NOT_KEYWORD.replace_all(raw, "!").into_owned(),
        }
    }

    pub fn parse(&self) -> Result<Expr, ParseError> {
        if self.source.trim().is_empty() {
            return Err(ParseError::EmptyExpression);
        }
        self.parse_text(&self.source)
    }

    fn parse_text(&self, text: &str) -> Result<Expr, ParseError> {
        let text = text.trim();

        match text {
            "true" => return Ok(Expr::Boolean(true)),
            "false" => return Ok(Expr::Boolean(false)),
            _ => {}
        }
        if NUMBER.is_match(text) {
            return text
                .parse::<f64>()
                .map(Expr::Number)
                .map_err(|_| ParseError::MalformedExpression(text.to_string()));
        }

        let mut scanner = Scanner::new(text);

        // Parenthesis elision: `(inner)` is just `inner`
        if text.starts_with('(') {
            let close = scanner.matching_paren(0)?;
            if close == text.chars().count() - 1 {
                let inner: String = text.chars().skip(1).take(close - 1).collect();
                if inner.trim().is_empty() {
                    return Err(ParseError::MalformedExpression("empty parentheses".into()));
                }
                return self.parse_text(&inner);
            }
        }

        if let Some(split) = scanner.lowest_precedence()? {
            return self.parse_split(text, split);
        }

        if let Some(caps) = VARIABLE.captures(text) {
            let index = self.parse_text(&caps[1])?;
            return Ok(Expr::variable(index));
        }

        Err(ParseError::MalformedExpression(text.to_string()))
    }

    fn parse_split(&self, text: &str, split: Split) -> Result<Expr, ParseError> {
        let before: String = text.chars().take(split.position).collect();
        let after: String = text
            .chars()
            .skip(split.position + split.operator.width())
            .collect();

        log::trace!(
            "splitting `{}` at `{}` (offset {})",
            text,
            split.operator.symbol(),
            split.position
        );

        match split.operator {
            Operator::Not => {
                if !before.trim().is_empty() {
                    return Err(ParseError::MalformedExpression(format!(
                        "unexpected `{}` before `!` in `{}`",
                        before.trim(),
                        text
                    )));
                }
                let operand = self.parse_operand(text, &after, split.operator)?;
                Ok(Expr::not(operand))
            }
            Operator::Binary(op) => {
                let left = self.parse_operand(text, &before, split.operator)?;
                let right = self.parse_operand(text, &after, split.operator)?;
                Ok(Expr::binary(op, left, right))
            }
        }
    }

    fn parse_operand(&self, text: &str, operand: &str, op: Operator) -> Result<Expr, ParseError> {
        if operand.trim().is_empty() {
            return Err(ParseError::MalformedExpression(format!(
                "missing operand for `{}` in `{}`",
                op.symbol(),
                text
            )));
        }
        self.parse_text(operand)
    }
}

/// Compile a raw condition into an expression tree.
///
/// # Examples
///
/// ```
/// use choice_conditions::{compile, Expr};
///
/// assert_eq!(compile("(true)").unwrap(), Expr::Boolean(true));
/// assert!(compile("1 + (2").is_err());
/// ```
pub fn compile(raw: &str) -> Result<Expr, ParseError> {
    Parser::new(raw).parse()
}
