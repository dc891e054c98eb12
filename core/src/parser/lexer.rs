//! Tokenizer: one input character is one token.
//!
//! ASCII letters and digits become operands, every other non-whitespace
//! character becomes an operator, and a single end-of-input marker closes the
//! stream. Tokenizing never fails; characters without an operator meaning are
//! rejected later by the parser.

use core::fmt;

use logos::Logos;

use crate::parser::Span;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"\s+")]
enum RawToken {
    #[regex(r"[0-9A-Za-z]", first_char)]
    Operand(char),

    #[regex(r"[^\s0-9A-Za-z]", first_char)]
    Operator(char),
}

fn first_char(lex: &mut logos::Lexer<RawToken>) -> Option<char> {
    lex.slice().chars().next()
}

/// Classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A single digit literal or a single-letter variable name.
    Operand(char),
    /// Any other symbol, including parentheses.
    Operator(char),
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Operand(c) => write!(f, "operand '{c}'"),
            TokenKind::Operator(c) => write!(f, "operator '{c}'"),
            TokenKind::EndOfInput => write!(f, "end of input"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Tokens of one line, consumed front to back by the parser.
///
/// Stored reversed so the next token is popped off the end. The end-of-input
/// marker is kept aside and returned for every read once the input runs out.
#[derive(Debug, Clone)]
pub struct TokenStream {
    pending: Vec<Token>,
    end: Token,
}

impl TokenStream {
    /// The next unconsumed token.
    pub fn peek(&self) -> &Token {
        self.pending.last().unwrap_or(&self.end)
    }

    /// Removes and returns the next token.
    pub fn next_token(&mut self) -> Token {
        self.pending.pop().unwrap_or_else(|| self.end.clone())
    }

    pub fn is_at_end(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remaining tokens in input order, ending with the end-of-input marker.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.pending.iter().rev().chain(core::iter::once(&self.end))
    }
}

/// Split `source` into tokens.
pub fn tokenize(source: &str) -> TokenStream {
    let mut pending: Vec<Token> = RawToken::lexer(source)
        .spanned()
        .map(|(raw, range)| {
            let kind = match raw {
                Ok(RawToken::Operand(c)) => TokenKind::Operand(c),
                Ok(RawToken::Operator(c)) => TokenKind::Operator(c),
                // Every non-whitespace character matches one of the rules above.
                Err(()) => {
                    let c = source[range.clone()].chars().next().unwrap_or('\u{FFFD}');
                    TokenKind::Operator(c)
                }
            };
            Token {
                kind,
                span: Span(range),
            }
        })
        .collect();
    pending.reverse();

    TokenStream {
        pending,
        end: Token {
            kind: TokenKind::EndOfInput,
            span: Span::new(source.len(), source.len()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).tokens().map(|t| t.kind).collect()
    }

    #[test]
    fn test_classifies_operands_and_operators() {
        assert_eq!(
            kinds("x=(1+2)"),
            vec![
                TokenKind::Operand('x'),
                TokenKind::Operator('='),
                TokenKind::Operator('('),
                TokenKind::Operand('1'),
                TokenKind::Operator('+'),
                TokenKind::Operand('2'),
                TokenKind::Operator(')'),
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_skips_whitespace() {
        assert_eq!(kinds(" 1 \t+\n2 "), kinds("1+2"));
        assert_eq!(kinds("   "), vec![TokenKind::EndOfInput]);
        assert_eq!(kinds(""), vec![TokenKind::EndOfInput]);
    }

    #[test]
    fn test_multi_digit_input_is_split() {
        assert_eq!(
            kinds("12"),
            vec![
                TokenKind::Operand('1'),
                TokenKind::Operand('2'),
                TokenKind::EndOfInput
            ]
        );
    }

    #[test]
    fn test_unknown_symbols_are_operators() {
        assert_eq!(
            kinds("%√é"),
            vec![
                TokenKind::Operator('%'),
                TokenKind::Operator('√'),
                TokenKind::Operator('é'),
                TokenKind::EndOfInput
            ]
        );
    }

    #[test]
    fn test_spans_are_byte_ranges() {
        let source = "2 √ 3";
        let spans: Vec<Span> = tokenize(source).tokens().map(|t| t.span.clone()).collect();
        assert_eq!(spans, vec![Span(0..1), Span(2..5), Span(6..7), Span(7..7)]);
        assert_eq!(&source[spans[1].0.clone()], "√");
    }

    #[test]
    fn test_peek_and_next() {
        let mut stream = tokenize("a+");
        assert_eq!(stream.peek().kind, TokenKind::Operand('a'));
        assert_eq!(stream.next_token().kind, TokenKind::Operand('a'));
        assert_eq!(stream.peek().kind, TokenKind::Operator('+'));
        assert_eq!(stream.next_token().kind, TokenKind::Operator('+'));
        assert!(stream.is_at_end());
        assert_eq!(stream.peek().kind, TokenKind::EndOfInput);
    }

    #[test]
    fn test_end_of_input_is_sticky() {
        let mut stream = tokenize("");
        assert_eq!(stream.next_token().kind, TokenKind::EndOfInput);
        assert_eq!(stream.next_token().kind, TokenKind::EndOfInput);
        assert_eq!(stream.peek().kind, TokenKind::EndOfInput);
    }

    #[test]
    fn test_display() {
        assert_eq!(TokenKind::Operand('x').to_string(), "operand 'x'");
        assert_eq!(TokenKind::Operator(')').to_string(), "operator ')'");
        assert_eq!(TokenKind::EndOfInput.to_string(), "end of input");
    }
}
