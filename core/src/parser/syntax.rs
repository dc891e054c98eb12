// Syntax structures shared by the lexer, the parser and the tree.

use core::fmt;
use core::ops::Range;

/// Byte range of a token in the source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self(start..end)
    }
    pub fn combine(a: &Span, b: &Span) -> Span {
        Span::new(a.0.start, b.0.end)
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self(range)
    }
}

/// A node of a tree, by its position among the tree's operands or among its
/// operators, counted left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeIndex {
    Operand(usize),
    Operator(usize),
}

/// Source locations of the nodes of one parsed tree.
///
/// Kept beside the tree so that trees compare by shape alone. An in-order
/// walk (left subtree, node, right subtree) meets operands and operators in
/// the order their tokens appear, so the n-th operand of that walk owns the
/// n-th operand span here, and likewise for operators.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceMap {
    operands: Vec<Span>,
    operators: Vec<Span>,
}

impl SourceMap {
    pub(crate) fn add_operand(&mut self, span: Span) {
        self.operands.push(span);
    }

    pub(crate) fn add_operator(&mut self, span: Span) {
        self.operators.push(span);
    }

    pub fn span_of(&self, node: NodeIndex) -> Option<&Span> {
        match node {
            NodeIndex::Operand(i) => self.operands.get(i),
            NodeIndex::Operator(i) => self.operators.get(i),
        }
    }

    /// From the first to the last of a run of operands.
    pub fn operands_span(&self, operands: Range<usize>) -> Option<Span> {
        let first = self.operands.get(operands.start)?;
        let last = self.operands.get(operands.end.checked_sub(1)?)?;
        (operands.start < operands.end).then(|| Span::combine(first, last))
    }
}

/// The closed set of infix operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Root,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 7] = [
        BinaryOp::Assign,
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Pow,
        BinaryOp::Root,
    ];

    pub fn from_symbol(symbol: char) -> Option<Self> {
        let op = match symbol {
            '=' => BinaryOp::Assign,
            '+' => BinaryOp::Add,
            '-' => BinaryOp::Sub,
            '*' => BinaryOp::Mul,
            '/' => BinaryOp::Div,
            '^' => BinaryOp::Pow,
            '√' => BinaryOp::Root,
            _ => return None,
        };
        Some(op)
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Assign => '=',
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
            BinaryOp::Pow => '^',
            BinaryOp::Root => '√',
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_round_trip() {
        for op in BinaryOp::ALL {
            assert_eq!(BinaryOp::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn test_parentheses_are_not_operators() {
        assert_eq!(BinaryOp::from_symbol('('), None);
        assert_eq!(BinaryOp::from_symbol(')'), None);
        assert_eq!(BinaryOp::from_symbol('%'), None);
    }

    #[test]
    fn test_span_helpers() {
        let a = Span::new(0, 1);
        let b = Span::new(4, 6);
        assert_eq!(Span::combine(&a, &b), Span(0..6));
        assert_eq!(Span::from(2..3), Span::new(2, 3));
    }

    #[test]
    fn test_source_map_lookup() {
        let mut spans = SourceMap::default();
        spans.add_operand(Span(0..1));
        spans.add_operator(Span(2..3));
        spans.add_operand(Span(5..6));

        assert_eq!(spans.span_of(NodeIndex::Operand(1)), Some(&Span(5..6)));
        assert_eq!(spans.span_of(NodeIndex::Operator(0)), Some(&Span(2..3)));
        assert_eq!(spans.span_of(NodeIndex::Operator(1)), None);
        assert_eq!(spans.operands_span(0..2), Some(Span(0..6)));
        assert_eq!(spans.operands_span(1..1), None);
        assert_eq!(spans.operands_span(1..3), None);
    }
}
