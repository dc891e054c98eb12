//! Public error types.
//!
//! Every way a line can fail ends up here, so callers handle a single type.

use thiserror::Error;

use crate::evaluator::EvalError;
use crate::parser::{InvalidAssignmentTarget, ParseError, Span};

/// Public error type for all engine operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The line is not a well-formed expression.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The left side of a root `=` is not a variable name.
    #[error("{error}")]
    Assignment {
        error: InvalidAssignmentTarget,
        /// The rejected left-hand side.
        span: Option<Span>,
    },

    /// The expression parsed but could not be evaluated.
    #[error("{error}")]
    Eval {
        error: EvalError,
        /// The operand or operator that failed.
        span: Option<Span>,
    },
}

impl From<EvalError> for Error {
    fn from(error: EvalError) -> Self {
        Error::Eval { error, span: None }
    }
}

/// Renderer-independent description of an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Stable error code (e.g., "P001") for documentation lookup.
    pub code: &'static str,

    pub message: String,

    /// Source location, when the error can be pinned to a token.
    pub span: Option<Span>,

    /// Optional help text suggesting how to fix the issue.
    pub help: Option<&'static str>,
}

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::Parse(e) => e.code(),
            Error::Assignment { .. } => "A001",
            Error::Eval { error, .. } => error.code(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let (span, help) = match self {
            Error::Parse(e) => (Some(e.span.clone()), e.help()),
            Error::Assignment { span, .. } => {
                (span.clone(), Some("Assign to a single letter, e.g. `x = 5`"))
            }
            Error::Eval { error, span } => (span.clone(), error.help()),
        };

        Diagnostic {
            code: self.code(),
            message: self.to_string(),
            span,
            help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParseErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_error_diagnostic() {
        let error: Error =
            ParseError::new(ParseErrorKind::UnclosedParenthesis, Span(0..1)).into();
        assert_eq!(
            error.to_diagnostic(),
            Diagnostic {
                code: "P002",
                message: "Missing closing parenthesis".to_string(),
                span: Some(Span(0..1)),
                help: Some("Add the missing ')'"),
            }
        );
    }

    #[test]
    fn test_assignment_error_diagnostic() {
        let error = Error::Assignment {
            error: InvalidAssignmentTarget {
                target: "5".to_string(),
            },
            span: Some(Span(0..1)),
        };
        let diagnostic = error.to_diagnostic();
        assert_eq!(diagnostic.code, "A001");
        assert_eq!(diagnostic.message, "Not a possible variable name: 5");
        assert_eq!(diagnostic.span, Some(Span(0..1)));
    }

    #[test]
    fn test_eval_error_diagnostic() {
        let error: Error = EvalError::UndefinedVariable { name: 'x' }.into();
        let diagnostic = error.to_diagnostic();
        assert_eq!(diagnostic.code, "E001");
        assert_eq!(diagnostic.message, "Undefined variable 'x'");
        assert_eq!(diagnostic.span, None);
        assert!(diagnostic.help.is_some());
    }
}
