//! Configuration options for the engine.

use crate::{evaluator, parser};

/// Resource limits applied to every line.
///
/// # Example
///
/// ```
/// use tinycalc_core::api::EngineOptions;
///
/// let options = EngineOptions {
///     max_parse_depth: 100,
///     ..EngineOptions::default()
/// };
/// assert_eq!(options.max_eval_depth, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Maximum nesting of parentheses and right-associative chains.
    ///
    /// Default: 500
    pub max_parse_depth: usize,

    /// Maximum evaluation stack depth.
    ///
    /// Default: 1000
    pub max_eval_depth: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_parse_depth: parser::DEFAULT_MAX_DEPTH,
            max_eval_depth: evaluator::DEFAULT_MAX_DEPTH,
        }
    }
}
