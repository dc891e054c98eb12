//! Public API for evaluating lines of input.
//!
//! [`Engine::execute`] is the single place where a variable binding is
//! written: it recognises `name = value` at the root of a parsed line,
//! evaluates the value side read-only and then stores the result in the
//! caller's [`Environment`].
//!
//! # Example
//!
//! ```
//! use tinycalc_core::api::{Engine, Environment, Outcome};
//!
//! let engine = Engine::default();
//! let mut env = Environment::new();
//!
//! engine.execute(&mut env, "x = y = 3").unwrap();
//! assert_eq!(env.get('x'), Some(3.0));
//! assert_eq!(env.get('y'), Some(3.0));
//! assert_eq!(engine.execute(&mut env, "x ^ 2").unwrap(), Outcome::Value(9.0));
//! ```

pub mod engine;
pub mod environment;
pub mod error;
pub mod options;

pub use engine::{Engine, Outcome};
pub use environment::Environment;
pub use error::{Diagnostic, Error};
pub use options::EngineOptions;
