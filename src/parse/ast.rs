use crate::common::{BinaryOperator, Int, UInt, UnaryOperator};
use std::fmt;

/// Byte range of a node's lexeme(s) within the roll body it was parsed
/// from.
pub type Span = std::ops::Range<usize>;

/// One node of a parsed roll body. Structure is immutable after parsing;
/// evaluation builds a separate result tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

impl Node {
    pub(crate) fn literal(value: Int, span: Span) -> Self {
        Self {
            kind: NodeKind::Literal(value),
            span,
        }
    }

    pub(crate) fn dice(spec: DiceSpec, span: Span) -> Self {
        Self {
            kind: NodeKind::Dice(spec),
            span,
        }
    }

    pub(crate) fn unary(op: UnaryOperator, value: Node, span: Span) -> Self {
        Self {
            kind: NodeKind::Unary(op, Box::new(value)),
            span,
        }
    }

    pub(crate) fn binary(left: Node, op: BinaryOperator, right: Node) -> Self {
        let span = left.span.start..right.span.end;
        Self {
            kind: NodeKind::Binary(Box::new(left), op, Box::new(right)),
            span,
        }
    }

    pub(crate) fn group(inner: Node, span: Span) -> Self {
        Self {
            kind: NodeKind::Group(Box::new(inner)),
            span,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Literal(Int),
    Dice(DiceSpec),
    Unary(UnaryOperator, Box<Node>),
    Binary(Box<Node>, BinaryOperator, Box<Node>),
    Group(Box<Node>),
}

/// An unrolled `NdS` dice literal. The lexer guarantees `num ≥ 1` and
/// `sides ≥ 1`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DiceSpec {
    pub num: UInt,
    pub sides: UInt,
}

impl DiceSpec {
    pub fn new(num: UInt, sides: UInt) -> Self {
        Self { num, sides }
    }

    /// Parses a lexeme the lexer has already matched as a dice literal.
    /// Returns `None` when a component does not fit in [`UInt`].
    pub(crate) fn parse_lexeme(s: &str) -> Option<Self> {
        let (num, sides) = s.split_once(&['d', 'D'][..])?;
        let num = if num.is_empty() { 1 } else { num.parse().ok()? };
        let sides = sides.parse().ok()?;
        Some(Self::new(num, sides))
    }
}

impl fmt::Display for DiceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.num, self.sides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lexeme() {
        assert_eq!(DiceSpec::parse_lexeme("1d20"), Some(DiceSpec::new(1, 20)));
        assert_eq!(DiceSpec::parse_lexeme("d20"), Some(DiceSpec::new(1, 20)));
        assert_eq!(DiceSpec::parse_lexeme("4D10"), Some(DiceSpec::new(4, 10)));
        // Components that overflow the count/sides type are not dice.
        assert_eq!(DiceSpec::parse_lexeme("99999999999999d6"), None);
        assert_eq!(DiceSpec::parse_lexeme("1d99999999999999"), None);
    }
}
