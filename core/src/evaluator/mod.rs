//! Tree-walking evaluator.
//!
//! The evaluator only reads variables. Writing a binding is the job of the
//! caller that recognised the assignment (see [`crate::api::Engine`]).
//!
//! ## Example
//!
//! ```
//! use tinycalc_core::{evaluator, parser};
//! use std::collections::HashMap;
//!
//! let expr = parser::parse("x * (1 + 2)").unwrap();
//! let vars = HashMap::from([('x', 2.0)]);
//! assert_eq!(evaluator::eval(&expr, &vars).unwrap(), 6.0);
//! ```

mod error;
mod eval;
mod operators;
mod variables;


pub use error::EvalError;
pub use eval::Evaluator;
pub use variables::Variables;

use crate::parser::Expr;

/// Default limit on evaluation recursion depth.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Evaluate an expression with the default depth limit.
pub fn eval<V: Variables + ?Sized>(expr: &Expr, variables: &V) -> Result<f64, EvalError> {
    eval_with_limits(expr, variables, DEFAULT_MAX_DEPTH)
}

/// Evaluate an expression, failing with [`EvalError::StackOverflow`] once the
/// tree is deeper than `max_depth`.
pub fn eval_with_limits<V: Variables + ?Sized>(
    expr: &Expr,
    variables: &V,
    max_depth: usize,
) -> Result<f64, EvalError> {
    Evaluator::new(variables, max_depth).eval(expr)
}
