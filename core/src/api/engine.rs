//! The line-at-a-time execution engine.

use tracing::debug;

use super::{EngineOptions, Environment, Error};
use crate::evaluator::{self, Evaluator, Variables};
use crate::parser::{self, Expr, NodeIndex, ParsedExpr, SourceMap};

/// Result of executing one line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// A plain expression and its value.
    Value(f64),
    /// An assignment; the binding has been stored.
    Assigned { name: char, value: f64 },
}

/// Parses and runs lines against a caller-owned [`Environment`].
///
/// The engine holds no variables of its own, so one engine can serve any
/// number of environments.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: EngineOptions,
}

/// Operands and operators to the left of a subtree, in its line.
#[derive(Debug, Clone, Copy, Default)]
struct Offset {
    operands: usize,
    operators: usize,
}

impl Offset {
    fn locate(self, node: NodeIndex) -> NodeIndex {
        match node {
            NodeIndex::Operand(i) => NodeIndex::Operand(self.operands + i),
            NodeIndex::Operator(i) => NodeIndex::Operator(self.operators + i),
        }
    }
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn parse(&self, source: &str) -> Result<ParsedExpr, Error> {
        Ok(parser::parse_annotated(source, self.options.max_parse_depth)?)
    }

    /// Evaluate an expression without touching any bindings.
    pub fn evaluate<V: Variables + ?Sized>(
        &self,
        expr: &Expr,
        variables: &V,
    ) -> Result<f64, Error> {
        Ok(evaluator::eval_with_limits(
            expr,
            variables,
            self.options.max_eval_depth,
        )?)
    }

    /// Parse and run one line.
    ///
    /// `name = value` stores the value and returns [`Outcome::Assigned`];
    /// anything else is evaluated and returned as [`Outcome::Value`]. On
    /// error the environment is left unchanged.
    pub fn execute(&self, env: &mut Environment, source: &str) -> Result<Outcome, Error> {
        let parsed = self.parse(source)?;
        self.execute_expr(env, &parsed)
    }

    /// Run an already parsed line. See [`Engine::execute`].
    pub fn execute_expr(
        &self,
        env: &mut Environment,
        parsed: &ParsedExpr,
    ) -> Result<Outcome, Error> {
        self.execute_at(env, &parsed.expr, &parsed.spans, Offset::default())
    }

    fn execute_at(
        &self,
        env: &mut Environment,
        expr: &Expr,
        spans: &SourceMap,
        at: Offset,
    ) -> Result<Outcome, Error> {
        let assignment = match expr.as_assignment() {
            Ok(Some(assignment)) => assignment,
            Ok(None) => return self.evaluate_at(&*env, expr, spans, at).map(Outcome::Value),
            Err(error) => {
                let span = match expr {
                    Expr::Operation { lhs, .. } => {
                        spans.operands_span(at.operands..at.operands + lhs.operand_count())
                    }
                    Expr::Operand(_) => None,
                };
                return Err(Error::Assignment { error, span });
            }
        };

        // The value side may itself be an assignment (`x = y = 3`), which
        // binds the inner name first. Nothing is written until every inner
        // step has succeeded. The target is one operand and `=` one
        // operator, both to the left of the value.
        let value_at = Offset {
            operands: at.operands + 1,
            operators: at.operators + 1,
        };
        let value = match self.execute_at(env, assignment.value, spans, value_at)? {
            Outcome::Value(value) | Outcome::Assigned { value, .. } => value,
        };

        env.set(assignment.name, value);
        debug!(name = %assignment.name, value, "assigned");
        Ok(Outcome::Assigned {
            name: assignment.name,
            value,
        })
    }

    fn evaluate_at(
        &self,
        env: &Environment,
        expr: &Expr,
        spans: &SourceMap,
        at: Offset,
    ) -> Result<f64, Error> {
        let mut evaluator = Evaluator::new(env, self.options.max_eval_depth);
        evaluator.eval(expr).map_err(|error| Error::Eval {
            span: evaluator
                .failed_at()
                .and_then(|node| spans.span_of(at.locate(node)))
                .cloned(),
            error,
        })
    }
}
