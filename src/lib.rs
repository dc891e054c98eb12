//! tinycalc - An interactive single-character arithmetic evaluator
//!
//! # Overview
//!
//! Each line is either an arithmetic expression over single digits and
//! single-letter variables, or an assignment `name = expression`.
//! Operators, loosest to tightest: `=`, `+ -`, `* /`, `^ √`. Assignment,
//! powers and roots are right-associative; the rest are left-associative.
//!
//! # Quick Start
//!
//! ```
//! use tinycalc::{Engine, Environment, Outcome};
//!
//! let engine = Engine::default();
//! let mut env = Environment::new();
//!
//! engine.execute(&mut env, "r = 9 √ 2").unwrap();
//! assert_eq!(engine.execute(&mut env, "r * 2").unwrap(), Outcome::Value(6.0));
//! ```
//!
//! Errors carry a stable code and, for syntax errors, the offending span.
//! [`render_error`] prints them with the source line underneath.

mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

// Re-export public API from tinycalc_core
pub use tinycalc_core::api::{Diagnostic, Engine, EngineOptions, Environment, Error, Outcome};

pub use tinycalc_core::evaluator::{self, EvalError, Variables};
pub use tinycalc_core::parser::{
    self, BinaryOp, Expr, ParseError, ParseErrorKind, ParsedExpr, Span,
};
