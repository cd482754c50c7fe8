//! Documentation content for the choices CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Operators,
    Variables,
    Tags,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" => Some(Self::Syntax),
            "operators" | "ops" => Some(Self::Operators),
            "variables" | "vars" | "variable" => Some(Self::Variables),
            "tags" | "tag" => Some(Self::Tags),
            _ => None,
        }
    }

    fn content(self) -> &'static str {
        match self {
            Self::Syntax => SYNTAX,
            Self::Operators => OPERATORS,
            Self::Variables => VARIABLES,
            Self::Tags => TAGS,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"CHOICE CONDITIONS

Conditions are small expressions written inside a choice label. A disable
condition greys the choice out, a hide condition removes it from the list.

DOCUMENTATION CATEGORIES

  syntax            Literals, parentheses, and how expressions are grouped
  operators         Arithmetic, comparison, and logical operators
  variables         Reading game variables with \v[N]
  tags              Disable and hide regions inside labels

QUICK REFERENCE

  true / false      Boolean literals
  42, -1.5          Number literals
  \v[3]             Variable 3
  ! / not           Negation
  && ||             And, or
  == != < > <= >=   Comparison
  + - * / % **      Arithmetic

EXAMPLES

  choices check '(1 + 2) >= (2 * (3 - 3))'
  choices check '\v[1] > 0' --vars '[0, 5]'
  echo '["<dis>true</dis>Locked", "Open"]' | choices resolve
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    DocCategory::from_name(name)
        .map(DocCategory::content)
        .ok_or_else(|| CliError::UnknownCategory(name.to_string()))
}

const SYNTAX: &str = r#"SYNTAX

VALUES
  true, false       Booleans
  7, -3, 0.25, .5   Numbers (optionally signed, optionally fractional)

GROUPING
  Operators group by precedence, loosest first:

    ||                        3
    &&                        4
    == !=                     8
    < > <= >=                 9
    + -                       11
    * / %                     12
    **                        13
    ! not                     14

  Operators of equal precedence group left to right (8 - 3 - 2 is 3),
  except ** which groups right to left (2 ** 3 ** 2 is 512).

  Parentheses override grouping: (1 + 2) * 3

SIGNED NUMBERS
  A signed number must stand alone or be parenthesised when it follows an
  operator: 5 * (-3), not 5 * -3.
"#;

const OPERATORS: &str = r#"OPERATORS

LOGICAL (booleans only)
  !a, not a         Negation
  a && b            True when both are true
  a || b            True when either is true

COMPARISON
  a == b, a != b    Numbers compare numerically, booleans by value.
                    A boolean never equals a number.
  a < b, a > b      Numbers only
  a <= b, a >= b

ARITHMETIC (numbers only)
  a + b, a - b
  a * b, a / b      Division by zero gives infinity or NaN
  a % b             Remainder, sign follows a
  a ** b            Power

Any comparison with NaN is false, except != which is true.
"#;

const VARIABLES: &str = r#"VARIABLES

  \v[N] or \V[N] reads game variable N. Unset variables read as 0.

  Examples:
    \v[1] > 0
    \v[2] == (\v[3] + 3)
    (\v[1] > 0) && (\v[1] < 100)
"#;

const TAGS: &str = r#"TAGS

  <dis>condition</dis>    Disable the choice when the condition is true
  <hide>condition</hide>  Hide the choice when the condition is true

  The long form <disable>...</disable> is available with --convention long.

  At most one disable and one hide region is used per choice. Text outside
  the regions is kept exactly, spaces included:

    <dis>true</dis> choice       =>  " choice" (disabled)

  A condition that fails to parse or evaluate counts as false: the choice
  stays enabled and visible, and a warning is logged.
"#;
