//! Infix binding powers.
//!
//! Precedence is the magnitude of the powers; associativity is which side is
//! stronger. `left < right` chains to the left, `left > right` to the right.

use crate::parser::{BinaryOp, ParseErrorKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BindingPower {
    pub left: f64,
    pub right: f64,
}

impl BindingPower {
    const fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }
}

impl BinaryOp {
    // (lowest precedence)
    //   `=`        right
    //   `+` `-`    left
    //   `*` `/`    left
    //   `^` `√`    right
    // (highest precedence)
    pub fn binding_power(self) -> BindingPower {
        match self {
            BinaryOp::Assign => BindingPower::new(0.2, 0.1),
            BinaryOp::Add | BinaryOp::Sub => BindingPower::new(1.0, 1.1),
            BinaryOp::Mul | BinaryOp::Div => BindingPower::new(2.0, 2.1),
            BinaryOp::Pow | BinaryOp::Root => BindingPower::new(3.1, 3.0),
        }
    }
}

/// Resolve an operator symbol to its operator and binding power.
pub fn binding_power(symbol: char) -> Result<(BinaryOp, BindingPower), ParseErrorKind> {
    BinaryOp::from_symbol(symbol)
        .map(|op| (op, op.binding_power()))
        .ok_or(ParseErrorKind::UnknownOperator { op: symbol })
}
