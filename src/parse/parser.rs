use super::{
    ast::{DiceSpec, Node},
    error::{ParseError, SourcePosition},
    lexer::{lexer, Lexer, TokenKind},
};
use crate::common::{vec1, BinaryOperator, NonEmpty, UnaryOperator};
use crate::config::GrammarVariant;
use logos_iter::LogosIter;

type PResult<T = Node> = Result<T, ParseError>;

/// Recursive-descent parser over a peekable token stream, one token of
/// lookahead. A parser is built per roll body and consumed by [`parse`].
///
/// [`parse`]: Parser::parse
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    variant: GrammarVariant,
}

impl<'a> Parser<'a> {
    const BINARY_OPS: &'static [TokenKind] = &[
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
    ];

    const ATOMS: &'static [TokenKind] =
        &[TokenKind::Integer, TokenKind::Dice, TokenKind::LeftParen];

    const ATOMS_NO_PARENS: &'static [TokenKind] = &[TokenKind::Integer, TokenKind::Dice];

    pub fn new(s: &'a str, variant: GrammarVariant) -> Self {
        Self {
            lexer: lexer(s),
            variant: variant.resolve(),
        }
    }

    /// Parses the whole roll body. Trailing tokens are an error; no partial
    /// tree is ever returned.
    pub fn parse(mut self) -> PResult {
        if self.lexer.peek().is_none() {
            return Err(ParseError::EmptyExpression);
        }
        let root = self.parse_expression()?;
        match self.lexer.peek() {
            None => Ok(root),
            Some(TokenKind::RightParen) => {
                self.lexer.next();
                Err(ParseError::UnbalancedParentheses(self.position()))
            }
            Some(_) => self.unexpected_token(Self::BINARY_OPS),
        }
    }

    fn position(&mut self) -> SourcePosition {
        SourcePosition {
            span: self.lexer.span(),
            slice: self.lexer.slice().to_string(),
        }
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        self.lexer.peek().map_or(false, |&peeked| peeked == kind)
    }

    fn peek_binary_op(&mut self, options: &[TokenKind]) -> Option<BinaryOperator> {
        self.lexer
            .peek()
            .copied()
            .filter(|kind| options.contains(kind))
            .and_then(TokenKind::as_binary_op)
    }

    fn peek_unary_op(&mut self) -> Option<UnaryOperator> {
        self.lexer
            .peek()
            .copied()
            .filter(|kind| TokenKind::UNARY_PREFIX_OPS.contains(kind))
            .and_then(TokenKind::as_unary_op)
    }

    fn unexpected_token<T>(&mut self, expected: &[TokenKind]) -> PResult<T> {
        let found = self.lexer.next();
        let pos = self.position();
        if matches!(found, Some(TokenKind::ErrBadDice)) {
            return Err(ParseError::MalformedDiceSpec(pos));
        }
        let names: Vec<String> = expected
            .iter()
            .map(|kind| kind.as_str().to_string())
            .collect();
        let expected =
            NonEmpty::try_from_vec(names).unwrap_or_else(|_| vec1!["<expression>".to_string()]);
        Err(ParseError::UnexpectedToken { pos, expected })
    }

    fn parse_expression(&mut self) -> PResult {
        let mut lhs = self.parse_term()?;

        while let Some(op) = self.peek_binary_op(TokenKind::ADDITION_OPS) {
            self.lexer.next();
            let rhs = self.parse_term()?;
            lhs = Node::binary(lhs, op, rhs);
        }

        Ok(lhs)
    }

    fn parse_term(&mut self) -> PResult {
        let mut lhs = self.parse_unary()?;

        while let Some(op) = self.peek_binary_op(TokenKind::MULTIPLICATION_OPS) {
            self.lexer.next();
            let rhs = self.parse_unary()?;
            lhs = Node::binary(lhs, op, rhs);
        }

        Ok(lhs)
    }

    fn parse_unary(&mut self) -> PResult {
        if let Some(op) = self.peek_unary_op() {
            self.lexer.next();
            let start = self.lexer.span().start;
            let value = self.parse_unary()?;
            let span = start..value.span.end;
            Ok(Node::unary(op, value, span))
        } else {
            self.parse_factor()
        }
    }

    fn parse_factor(&mut self) -> PResult {
        match self.lexer.peek() {
            Some(TokenKind::Integer) => self.parse_integer(),
            Some(TokenKind::Dice) => self.parse_dice(),
            Some(TokenKind::LeftParen) if self.variant.supports_parentheses() => {
                self.parse_group()
            }
            _ => {
                let expected = if self.variant.supports_parentheses() {
                    Self::ATOMS
                } else {
                    Self::ATOMS_NO_PARENS
                };
                self.unexpected_token(expected)
            }
        }
    }

    fn parse_integer(&mut self) -> PResult {
        self.lexer.next();
        let span = self.lexer.span();
        match self.lexer.slice().parse() {
            Ok(x) => Ok(Node::literal(x, span)),
            Err(_) => Err(ParseError::UnexpectedToken {
                pos: self.position(),
                expected: vec1![TokenKind::Integer.as_str().to_string()],
            }),
        }
    }

    fn parse_dice(&mut self) -> PResult {
        self.lexer.next();
        let span = self.lexer.span();
        match DiceSpec::parse_lexeme(self.lexer.slice()) {
            Some(spec) => Ok(Node::dice(spec, span)),
            None => Err(ParseError::MalformedDiceSpec(self.position())),
        }
    }

    fn parse_group(&mut self) -> PResult {
        self.lexer.next();
        let start = self.lexer.span().start;
        let inner = self.parse_expression()?;
        if self.matches(TokenKind::RightParen) {
            self.lexer.next();
            let end = self.lexer.span().end;
            Ok(Node::group(inner, start..end))
        } else {
            self.lexer.next();
            Err(ParseError::UnbalancedParentheses(self.position()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{BinaryOperator::*, UnaryOperator::*};
    use pretty_assertions::assert_eq;

    fn parse(s: &str) -> PResult {
        Parser::new(s, GrammarVariant::Legacy).parse()
    }

    fn check(s: &str, expected: Node) {
        assert_eq!(parse(s).unwrap(), expected);
    }

    #[test]
    fn test_parse_literal() {
        check("32", Node::literal(32, 0..2));
        check(" 7 ", Node::literal(7, 1..2));
    }

    #[test]
    fn test_parse_dice() {
        check("1d20", Node::dice(DiceSpec::new(1, 20), 0..4));
        check("d4", Node::dice(DiceSpec::new(1, 4), 0..2));
        check("2D6", Node::dice(DiceSpec::new(2, 6), 0..3));
    }

    #[test]
    fn test_parse_precedence() {
        check(
            "2+3*4",
            Node::binary(
                Node::literal(2, 0..1),
                Add,
                Node::binary(Node::literal(3, 2..3), Mul, Node::literal(4, 4..5)),
            ),
        );
    }

    #[test]
    fn test_parse_left_associative() {
        check(
            "10-3-2",
            Node::binary(
                Node::binary(Node::literal(10, 0..2), Sub, Node::literal(3, 3..4)),
                Sub,
                Node::literal(2, 5..6),
            ),
        );
    }

    #[test]
    fn test_parse_group() {
        check(
            "(1+2)",
            Node::group(
                Node::binary(Node::literal(1, 1..2), Add, Node::literal(2, 3..4)),
                0..5,
            ),
        );
    }

    #[test]
    fn test_parse_unary() {
        check("-2", Node::unary(Neg, Node::literal(2, 1..2), 0..2));
        check(
            "- -2",
            Node::unary(Neg, Node::unary(Neg, Node::literal(2, 3..4), 2..4), 0..4),
        );
        check(
            "-1d4",
            Node::unary(Neg, Node::dice(DiceSpec::new(1, 4), 1..4), 0..4),
        );
    }

    #[test]
    fn test_parse_idempotent() {
        let first = parse("2d4+1d20+19").unwrap();
        let second = parse("2d4+1d20+19").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_err_empty() {
        assert_eq!(parse(""), Err(ParseError::EmptyExpression));
        assert_eq!(parse("   "), Err(ParseError::EmptyExpression));
    }

    #[test]
    fn test_err_malformed_dice() {
        assert!(matches!(parse("d"), Err(ParseError::MalformedDiceSpec(_))));
        assert!(matches!(parse("2d"), Err(ParseError::MalformedDiceSpec(_))));
        assert!(matches!(parse("0d5"), Err(ParseError::MalformedDiceSpec(_))));
        assert!(matches!(parse("2d0"), Err(ParseError::MalformedDiceSpec(_))));
        assert!(matches!(parse("1+d"), Err(ParseError::MalformedDiceSpec(_))));
    }

    #[test]
    fn test_err_unbalanced_parens() {
        assert!(matches!(
            parse("((1+2)"),
            Err(ParseError::UnbalancedParentheses(_))
        ));
        assert!(matches!(
            parse("(1+2))"),
            Err(ParseError::UnbalancedParentheses(_))
        ));
        assert!(matches!(
            parse("1)"),
            Err(ParseError::UnbalancedParentheses(_))
        ));
    }

    #[test]
    fn test_err_unexpected_token() {
        assert!(matches!(
            parse("1 2"),
            Err(ParseError::UnexpectedToken { .. })
        ));
        assert!(matches!(
            parse("1+"),
            Err(ParseError::UnexpectedToken { .. })
        ));
        assert!(matches!(
            parse("*3"),
            Err(ParseError::UnexpectedToken { .. })
        ));
        assert!(matches!(
            parse("2.5"),
            Err(ParseError::UnexpectedToken { .. })
        ));
    }
}
