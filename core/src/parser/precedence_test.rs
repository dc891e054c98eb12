use pretty_assertions::assert_eq;

use super::{Expr, parse};

// We test precedence by comparing whether two expressions parenthesized in
// different ways yield the same tree.
fn ast(source: &str) -> Expr {
    parse(source).unwrap_or_else(|e| panic!("Expression parsing failed: {}\n{}", source, e))
}

#[test]
fn test_addition_vs_subtraction() {
    assert_eq!(ast("a + b - c"), ast("(a + b) - c"));
    assert_eq!(ast("a - b + c"), ast("(a - b) + c"));
    assert_eq!(
        ast("a + b - c + d - e + f"),
        ast("((((a + b) - c) + d) - e) + f")
    );
}

#[test]
fn test_multiplication_vs_division() {
    assert_eq!(ast("a * b / c"), ast("(a * b) / c"));
    assert_eq!(ast("a / b * c"), ast("(a / b) * c"));
    assert_eq!(ast("8 / 4 / 2"), ast("(8 / 4) / 2"));
}

#[test]
fn test_addition_vs_multiplication() {
    assert_eq!(ast("a + b * c"), ast("a + (b * c)"));
    assert_eq!(ast("a * b + c"), ast("(a * b) + c"));
    assert_eq!(ast("a - b / c - d"), ast("(a - (b / c)) - d"));
}

#[test]
fn test_exponentiation() {
    assert_eq!(ast("a ^ b ^ c"), ast("a ^ (b ^ c)"));
    assert_eq!(ast("a ^ b ^ c ^ d"), ast("a ^ (b ^ (c ^ d))"));
}

#[test]
fn test_root_shares_exponent_level() {
    assert_eq!(ast("a √ b √ c"), ast("a √ (b √ c)"));
    assert_eq!(ast("a ^ b √ c"), ast("a ^ (b √ c)"));
    assert_eq!(ast("a √ b ^ c"), ast("a √ (b ^ c)"));
}

#[test]
fn test_exponentiation_vs_multiplication() {
    assert_eq!(ast("a * b ^ c"), ast("a * (b ^ c)"));
    assert_eq!(ast("a ^ b * c"), ast("(a ^ b) * c"));
    assert_eq!(ast("a √ b / c"), ast("(a √ b) / c"));
}

#[test]
fn test_assignment_is_lowest_and_right_associative() {
    assert_eq!(ast("x = 1 + 2 * 3"), ast("x = (1 + (2 * 3))"));
    assert_eq!(ast("x = y = 3"), ast("x = (y = 3)"));
    assert_eq!(ast("x = y = z = 3 ^ 2"), ast("x = (y = (z = (3 ^ 2)))"));
}

#[test]
fn test_parentheses_override_precedence() {
    assert_ne!(ast("(1 + 2) * 3"), ast("1 + 2 * 3"));
    assert_eq!(ast("(a ^ b) ^ c").to_string(), "(^ (^ a b) c)");
    assert_eq!(ast("((((a))))"), ast("a"));
}

#[test]
fn test_mixed_levels() {
    assert_eq!(
        ast("1 + 2 * 3 ^ 2 ^ 1 - 4 / 2"),
        ast("(1 + (2 * (3 ^ (2 ^ 1)))) - (4 / 2)")
    );
}
