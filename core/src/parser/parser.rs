//! Precedence-climbing parser.
//!
//! `parse_expression(min_bp)` reads one operand (or a parenthesized group) as
//! its seed, then keeps folding `seed op rhs` for as long as the next operator
//! binds at least as tightly as `min_bp` from the left. The right-hand side is
//! parsed recursively with the operator's right power as the new floor, which
//! is what makes `+` chain to the left and `^` chain to the right.

use tracing::{debug, trace};

use crate::parser::{
    Expected, Expr, ParseError, ParseErrorKind, ParsedExpr, SourceMap, Token, TokenKind,
    TokenStream, binding_power, tokenize,
};

/// Default limit on nested parse calls.
pub const DEFAULT_MAX_DEPTH: usize = 500;

pub struct Parser {
    tokens: TokenStream,
    spans: SourceMap,
    depth: usize,
    max_depth: usize,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        Self::with_max_depth(source, DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(source: &str, max_depth: usize) -> Self {
        Self {
            tokens: tokenize(source),
            spans: SourceMap::default(),
            depth: 0,
            max_depth,
        }
    }

    /// Parse the whole input. Anything left over after the expression is an
    /// error, so an unmatched `)` is reported instead of silently dropped.
    pub fn parse(self) -> Result<Expr, ParseError> {
        self.parse_annotated().map(|parsed| parsed.expr)
    }

    /// Like [`Parser::parse`], also returning the source span of every node.
    pub fn parse_annotated(mut self) -> Result<ParsedExpr, ParseError> {
        let expr = self.parse_expression(0.0)?;

        if !self.tokens.is_at_end() {
            return Err(unexpected(self.tokens.peek(), Expected::EndOfInput));
        }

        Ok(ParsedExpr {
            expr,
            spans: self.spans,
        })
    }

    /// Parse one expression whose operators all bind at least `min_bp`.
    pub fn parse_expression(&mut self, min_bp: f64) -> Result<Expr, ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::new(
                ParseErrorKind::MaxDepthExceeded {
                    max_depth: self.max_depth,
                },
                self.tokens.peek().span.clone(),
            ));
        }

        self.depth += 1;
        let result = self.parse_expression_within(min_bp);
        self.depth -= 1;

        result
    }

    fn parse_expression_within(&mut self, min_bp: f64) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_seed()?;
        // Left-leaning chains grow the tree without nesting calls, so the
        // tree depth is bounded here as well.
        let mut lhs_depth = lhs.depth();

        loop {
            let token = self.tokens.peek();
            let symbol = match token.kind {
                TokenKind::EndOfInput | TokenKind::Operator(')') => break,
                TokenKind::Operand(_) => return Err(unexpected(token, Expected::Operator)),
                TokenKind::Operator(symbol) => symbol,
            };

            let (op, bp) = binding_power(symbol)
                .map_err(|kind| ParseError::new(kind, token.span.clone()))?;

            if bp.left < min_bp {
                break;
            }
            let token = self.tokens.next_token();
            self.spans.add_operator(token.span.clone());
            trace!(%op, min_bp, "infix operator");

            let rhs = self.parse_expression(bp.right)?;
            lhs_depth = 1 + lhs_depth.max(rhs.depth());
            if lhs_depth > self.max_depth {
                return Err(ParseError::new(
                    ParseErrorKind::MaxDepthExceeded {
                        max_depth: self.max_depth,
                    },
                    token.span,
                ));
            }
            lhs = Expr::operation(op, lhs, rhs);
        }

        Ok(lhs)
    }

    fn parse_seed(&mut self) -> Result<Expr, ParseError> {
        let token = self.tokens.next_token();
        match token.kind {
            TokenKind::Operator('(') => {
                let inner = self.parse_expression(0.0)?;
                let close = self.tokens.next_token();
                if close.kind != TokenKind::Operator(')') {
                    return Err(ParseError::new(
                        ParseErrorKind::UnclosedParenthesis,
                        token.span,
                    ));
                }
                Ok(inner)
            }
            TokenKind::Operand(c) => {
                self.spans.add_operand(token.span);
                Ok(Expr::Operand(c))
            }
            _ => Err(unexpected(&token, Expected::Operand)),
        }
    }
}

fn unexpected(token: &Token, expected: Expected) -> ParseError {
    ParseError::new(
        ParseErrorKind::UnexpectedToken {
            expected,
            found: token.kind.to_string(),
        },
        token.span.clone(),
    )
}

/// Parse a line with the default nesting limit.
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    parse_with_max_depth(source, DEFAULT_MAX_DEPTH)
}

/// Parse a line, failing once the tree or the parenthesized nesting goes
/// deeper than `max_depth`.
pub fn parse_with_max_depth(source: &str, max_depth: usize) -> Result<Expr, ParseError> {
    parse_annotated(source, max_depth).map(|parsed| parsed.expr)
}

/// Parse a line keeping the source span of every node.
pub fn parse_annotated(source: &str, max_depth: usize) -> Result<ParsedExpr, ParseError> {
    let parsed = Parser::with_max_depth(source, max_depth).parse_annotated()?;
    debug!(expr = %parsed.expr, "parsed");
    Ok(parsed)
}
