use core::fmt;

use thiserror::Error;

use crate::parser::Span;

/// Parser error with the location of the offending token
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

/// Specific kinds of parse errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    /// Symbol with no binding power
    #[error("Unknown operator '{op}'")]
    UnknownOperator { op: char },
    /// `(` without a matching `)`
    #[error("Missing closing parenthesis")]
    UnclosedParenthesis,
    /// Unexpected token
    #[error("Bad token: expected {expected}, found {found}")]
    UnexpectedToken { expected: Expected, found: String },
    /// Maximum nesting depth exceeded
    #[error("Expression nesting depth exceeds maximum of {max_depth} levels")]
    MaxDepthExceeded { max_depth: usize },
}

/// What the parser was looking for when it met an unexpected token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// An infix operator between two operands.
    Operator,
    /// The start of an expression: an operand or `(`.
    Operand,
    /// Nothing, after a complete expression.
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Operator => write!(f, "operator"),
            Expected::Operand => write!(f, "operand or '('"),
            Expected::EndOfInput => write!(f, "end of input"),
        }
    }
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn code(&self) -> &'static str {
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => "P001",
            ParseErrorKind::UnclosedParenthesis => "P002",
            ParseErrorKind::UnknownOperator { .. } => "P003",
            ParseErrorKind::MaxDepthExceeded { .. } => "P004",
        }
    }

    pub fn help(&self) -> Option<&'static str> {
        match self.kind {
            ParseErrorKind::UnknownOperator { .. } => {
                Some("Supported operators are = + - * / ^ √")
            }
            ParseErrorKind::UnclosedParenthesis => Some("Add the missing ')'"),
            ParseErrorKind::UnexpectedToken { expected, .. } => match expected {
                Expected::Operator => {
                    Some("Numbers and variable names are a single character each")
                }
                Expected::Operand => {
                    Some("Every operator needs an operand or a parenthesized group on both sides")
                }
                Expected::EndOfInput => Some("This ')' has no matching '('"),
            },
            ParseErrorKind::MaxDepthExceeded { .. } => {
                Some("Reduce nesting or simplify the expression")
            }
        }
    }
}
