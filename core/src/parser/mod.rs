mod binding_power;
mod error;
mod expr;
mod lexer;
#[allow(clippy::module_inception)]
mod parser;
mod syntax;

pub use binding_power::{BindingPower, binding_power};
pub use error::{Expected, ParseError, ParseErrorKind};
pub use expr::{Assignment, Expr, Infix, InvalidAssignmentTarget, ParsedExpr};
pub use lexer::{Token, TokenKind, TokenStream, tokenize};
pub use parser::{DEFAULT_MAX_DEPTH, Parser, parse, parse_annotated, parse_with_max_depth};
pub use syntax::{BinaryOp, NodeIndex, SourceMap, Span};


#[cfg(test)]
mod precedence_test;
