//! Operator scanning for the split-based parser.
//!
//! The parser never tokenises a condition up front. Instead, at every level
//! it asks the [`Scanner`] for the operator to split the text on: the
//! loosest-binding operator outside any parentheses.

use crate::{ast::Operator, parser::ParseError};

/// Operator chosen as a split point, with its char offset in the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    pub operator: Operator,
    pub position: usize,
}

pub struct Scanner {
    input: Vec<char>,
    position: usize,
}

impl Scanner {
    pub fn new(input: &str) -> Self {
        Scanner {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self, n: usize) {
        self.position += n;
    }

    fn source(&self) -> String {
        self.input.iter().collect()
    }

    /// Index of the `)` closing the `(` at `open`.
    pub fn matching_paren(&self, open: usize) -> Result<usize, ParseError> {
        let mut depth = 0usize;
        for (i, ch) in self.input.iter().enumerate().skip(open) {
            match ch {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(i);
                    }
                }
                _ => {}
            }
        }
        Err(ParseError::UnterminatedParenthesis {
            expression: self.source(),
            position: open,
        })
    }

    /// Read the operator starting at the current position, two-char
    /// spellings first.
    fn read_operator(&self) -> Option<Operator> {
        let ch = self.current_char()?;
        self.peek_char(1)
            .and_then(|next| Operator::from_pair(ch, next))
            .or_else(|| Operator::from_char(ch))
    }

    /// Find the loosest-binding operator outside parentheses.
    ///
    /// On equal precedence a later occurrence replaces an earlier one, which
    /// makes splitting left-associative. `**` and prefix `!` keep the
    /// leftmost occurrence instead.
    pub fn lowest_precedence(&mut self) -> Result<Option<Split>, ParseError> {
        let mut best: Option<Split> = None;

        while let Some(ch) = self.current_char() {
            if ch == '(' {
                let close = self.matching_paren(self.position)?;
                self.position = close + 1;
                continue;
            }

            let Some(operator) = self.read_operator() else {
                self.advance(1);
                continue;
            };

            let replace = match best {
                None => true,
                Some(current) => {
                    let (new, old) = (operator.precedence(), current.operator.precedence());
                    new < old || (new == old && operator.later_wins_tie())
                }
            };
            if replace {
                best = Some(Split {
                    operator,
                    position: self.position,
                });
            }
            self.advance(operator.width());
        }

        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::BinOp;

    fn split(input: &str) -> Option<Split> {
        Scanner::new(input).lowest_precedence().unwrap()
    }

    #[test]
    fn picks_loosest_operator() {
        let s = split("1 + 2 * 3").unwrap();
        assert_eq!(s.operator, Operator::Binary(BinOp::Add));
        assert_eq!(s.position, 2);
    }

    #[test]
    fn later_tie_wins_for_subtraction() {
        let s = split("8-3-2").unwrap();
        assert_eq!(s.operator, Operator::Binary(BinOp::Subtract));
        assert_eq!(s.position, 3);
    }

    #[test]
    fn earliest_power_is_kept() {
        let s = split("2**3**2").unwrap();
        assert_eq!(s.operator, Operator::Binary(BinOp::Power));
        assert_eq!(s.position, 1);
    }

    #[test]
    fn two_char_operators_match_first() {
        assert_eq!(
            split("1 != 2").unwrap().operator,
            Operator::Binary(BinOp::NotEqual)
        );
        assert_eq!(
            split("1 <= 2").unwrap().operator,
            Operator::Binary(BinOp::LessEqual)
        );
        assert_eq!(
            split("2 ** 2").unwrap().operator,
            Operator::Binary(BinOp::Power)
        );
    }

    #[test]
    fn parenthesised_spans_are_skipped() {
        let s = split("(1 || 2) && 3").unwrap();
        assert_eq!(s.operator, Operator::Binary(BinOp::And));
        assert!(split("(1 + 2)").is_none());
    }

    #[test]
    fn leading_not_is_kept_over_nested_not() {
        let s = split("!!true").unwrap();
        assert_eq!(s.operator, Operator::Not);
        assert_eq!(s.position, 0);
    }

    #[test]
    fn unmatched_open_paren_is_an_error() {
        let err = Scanner::new("1 + (2 * 3").lowest_precedence().unwrap_err();
        assert_eq!(
            err,
            ParseError::UnterminatedParenthesis {
                expression: "1 + (2 * 3".into(),
                position: 4,
            }
        );
    }

    #[test]
    fn no_operator_in_leaf() {
        assert!(split("\\v[12]").is_none());
        assert!(split("true").is_none());
    }
}
