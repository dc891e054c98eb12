//! The tinycalc expression engine.
//!
//! A line of input is tokenized one character at a time, parsed into a binary
//! expression tree by precedence climbing, and then either evaluated against a
//! read-only variable environment or, for `name = value` lines, stored into it.
//!
//! ```
//! use tinycalc_core::api::{Engine, Environment, Outcome};
//!
//! let engine = Engine::default();
//! let mut env = Environment::new();
//!
//! let stored = engine.execute(&mut env, "x = 4").unwrap();
//! assert_eq!(stored, Outcome::Assigned { name: 'x', value: 4.0 });
//! assert_eq!(engine.execute(&mut env, "(x + 2) * 3").unwrap(), Outcome::Value(18.0));
//! ```

pub mod api;
pub mod evaluator;
pub mod parser;
