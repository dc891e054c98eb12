//! Core evaluation logic.

use tracing::debug;

use crate::{
    evaluator::{EvalError, Variables, operators::eval_binary},
    parser::{Expr, NodeIndex},
};

/// Evaluator over a borrowed, read-only set of variables.
pub struct Evaluator<'v, V: ?Sized> {
    variables: &'v V,
    max_depth: usize,
    depth: usize,
    // In-order counters, matching the numbering of `SourceMap`.
    operands: usize,
    operators: usize,
    failed_at: Option<NodeIndex>,
}

impl<'v, V: Variables + ?Sized> Evaluator<'v, V> {
    pub fn new(variables: &'v V, max_depth: usize) -> Self {
        Self {
            variables,
            max_depth,
            depth: 0,
            operands: 0,
            operators: 0,
            failed_at: None,
        }
    }

    pub fn eval(&mut self, expr: &Expr) -> Result<f64, EvalError> {
        self.operands = 0;
        self.operators = 0;
        self.failed_at = None;

        let value = self.eval_expr(expr)?;
        debug!(%expr, value, "evaluated");
        Ok(value)
    }

    /// The node that raised the last error, if the error belongs to one.
    ///
    /// Depth errors are not tied to a node.
    pub fn failed_at(&self) -> Option<NodeIndex> {
        self.failed_at
    }

    fn eval_expr(&mut self, expr: &Expr) -> Result<f64, EvalError> {
        // Check depth before recursing
        if self.depth >= self.max_depth {
            return Err(EvalError::StackOverflow {
                depth: self.depth,
                max_depth: self.max_depth,
            });
        }

        self.depth += 1;
        let result = self.eval_expr_inner(expr);
        self.depth -= 1;

        result
    }

    fn eval_expr_inner(&mut self, expr: &Expr) -> Result<f64, EvalError> {
        match expr {
            Expr::Operand(symbol) => {
                let node = NodeIndex::Operand(self.operands);
                self.operands += 1;
                self.eval_operand(*symbol).map_err(|e| self.fail(node, e))
            }
            Expr::Operation { op, lhs, rhs } => {
                let left = self.eval_expr(lhs)?;
                let node = NodeIndex::Operator(self.operators);
                self.operators += 1;
                let right = self.eval_expr(rhs)?;
                eval_binary(*op, left, right).map_err(|e| self.fail(node, e))
            }
        }
    }

    fn fail(&mut self, node: NodeIndex, error: EvalError) -> EvalError {
        self.failed_at = Some(node);
        error
    }

    fn eval_operand(&self, symbol: char) -> Result<f64, EvalError> {
        if let Some(digit) = symbol.to_digit(10) {
            return Ok(f64::from(digit));
        }
        if symbol.is_ascii_alphabetic() {
            return self
                .variables
                .lookup(symbol)
                .ok_or(EvalError::UndefinedVariable { name: symbol });
        }
        Err(EvalError::InvalidOperand { symbol })
    }
}
