//! The expression tree.

use core::fmt;

use thiserror::Error;

use crate::parser::{BinaryOp, SourceMap};

/// A node of the binary expression tree. Each node owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A single digit literal or a single-letter variable reference.
    Operand(char),
    Operation {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

/// A parsed line: the tree and where each of its nodes came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedExpr {
    pub expr: Expr,
    pub spans: SourceMap,
}

/// A root-level `name = value` split into its parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assignment<'e> {
    pub name: char,
    pub value: &'e Expr,
}

/// The left side of `=` is not a bare variable name.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Not a possible variable name: {target}")]
pub struct InvalidAssignmentTarget {
    /// Debug rendering of the rejected left-hand side.
    pub target: String,
}

impl Expr {
    pub fn operation(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Operation {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Returns the assignment if the root operator is `=`.
    ///
    /// Only the root is inspected; an `=` further down the tree is left for
    /// the evaluator to reject.
    pub fn as_assignment(&self) -> Result<Option<Assignment<'_>>, InvalidAssignmentTarget> {
        let Expr::Operation {
            op: BinaryOp::Assign,
            lhs,
            rhs,
        } = self
        else {
            return Ok(None);
        };

        match **lhs {
            Expr::Operand(name) if name.is_ascii_alphabetic() => Ok(Some(Assignment {
                name,
                value: rhs,
            })),
            _ => Err(InvalidAssignmentTarget {
                target: lhs.to_string(),
            }),
        }
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Operand(_) => 1,
            Expr::Operation { lhs, rhs, .. } => 1 + lhs.depth().max(rhs.depth()),
        }
    }

    /// Number of operand leaves.
    pub fn operand_count(&self) -> usize {
        match self {
            Expr::Operand(_) => 1,
            Expr::Operation { lhs, rhs, .. } => lhs.operand_count() + rhs.operand_count(),
        }
    }

    /// Fully parenthesized infix rendering, e.g. `(1+(2*3))`.
    ///
    /// Unlike [`Display`](fmt::Display), the result is valid input for the
    /// parser and parses back to an equal tree.
    pub fn infix(&self) -> Infix<'_> {
        Infix(self)
    }
}

/// Debug rendering: operands as their character, operations as `(op lhs rhs)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Operand(c) => write!(f, "{c}"),
            Expr::Operation { op, lhs, rhs } => write!(f, "({op} {lhs} {rhs})"),
        }
    }
}

pub struct Infix<'e>(&'e Expr);

impl fmt::Display for Infix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Expr::Operand(c) => write!(f, "{c}"),
            Expr::Operation { op, lhs, rhs } => {
                write!(f, "({}{op}{})", lhs.infix(), rhs.infix())
            }
        }
    }
}
