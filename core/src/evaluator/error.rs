//! Runtime evaluation errors.
//!
//! Division by zero is not among them: it follows IEEE 754 and yields an
//! infinity or NaN.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Variable not bound in the environment.
    #[error("Undefined variable '{name}'")]
    UndefinedVariable { name: char },

    /// Operand that is neither a digit nor a letter.
    #[error("Invalid operand '{symbol}'")]
    InvalidOperand { symbol: char },

    /// Operator with no arithmetic meaning, such as `=` below the root.
    #[error("Bad operator '{op}'")]
    BadOperator { op: char },

    /// Evaluation recursion depth exceeded.
    #[error("Evaluation stack overflow: depth {depth} exceeds maximum of {max_depth}")]
    StackOverflow { depth: usize, max_depth: usize },
}

impl EvalError {
    pub fn code(&self) -> &'static str {
        match self {
            EvalError::UndefinedVariable { .. } => "E001",
            EvalError::InvalidOperand { .. } => "E002",
            EvalError::BadOperator { .. } => "E003",
            EvalError::StackOverflow { .. } => "E004",
        }
    }

    pub fn help(&self) -> Option<&'static str> {
        match self {
            EvalError::UndefinedVariable { .. } => Some("Assign it first, e.g. `x = 5`"),
            EvalError::BadOperator { op: '=' } => {
                Some("Assignment is only allowed at the start of a line")
            }
            _ => None,
        }
    }
}
