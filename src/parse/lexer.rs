use logos::{Lexer as LogosLexer, Logos};
use logos_iter::{LogosIter, PeekableLexer};
use std::fmt;

use crate::common::{BinaryOperator, UnaryOperator};

pub type Lexer<'a> = PeekableLexer<'a, LogosLexer<'a, TokenKind>, TokenKind>;

pub fn lexer(s: &str) -> Lexer {
    TokenKind::lexer(s).peekable_lexer()
}

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub enum TokenKind {
    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r"([1-9][0-9]*)?[dD][1-9][0-9]*")]
    Dice,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    // Dice literals the grammar rejects outright: missing sides, or a zero
    // count/sides component.
    #[regex(r"([1-9][0-9]*)?[dD]")]
    #[regex(r"0[0-9]*[dD][0-9]+")]
    #[regex(r"[0-9]*[dD]0[0-9]*")]
    ErrBadDice,

    #[regex(r"[ \t\r\n]+", logos::skip)]
    #[error]
    Error,
}

impl TokenKind {
    pub const ADDITION_OPS: &'static [Self] = &[Self::Plus, Self::Minus];

    pub const MULTIPLICATION_OPS: &'static [Self] = &[Self::Star, Self::Slash];

    pub const UNARY_PREFIX_OPS: &'static [Self] = &[Self::Plus, Self::Minus];

    pub fn as_str(self) -> &'static str {
        use TokenKind::*;

        match self {
            Integer => "<integer>",
            Dice => "<dice>",
            LeftParen => "'('",
            RightParen => "')'",
            Plus => "'+'",
            Minus => "'-'",
            Star => "'*'",
            Slash => "'/'",
            ErrBadDice | Error => "<error>",
        }
    }

    pub fn as_unary_op(self) -> Option<UnaryOperator> {
        use UnaryOperator::*;
        Some(match self {
            Self::Plus => Pos,
            Self::Minus => Neg,
            _ => return None,
        })
    }

    pub fn as_binary_op(self) -> Option<BinaryOperator> {
        use BinaryOperator::*;
        Some(match self {
            Self::Plus => Add,
            Self::Minus => Sub,
            Self::Star => Mul,
            Self::Slash => Div,
            _ => return None,
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(s: &str) -> Vec<TokenKind> {
        TokenKind::lexer(s).collect()
    }

    #[test]
    fn test_lex_dice() {
        use TokenKind::*;
        assert_eq!(kinds("1d20"), vec![Dice]);
        assert_eq!(kinds("d20"), vec![Dice]);
        assert_eq!(kinds("2D6"), vec![Dice]);
        assert_eq!(kinds("2d4+1d20+19"), vec![Dice, Plus, Dice, Plus, Integer]);
    }

    #[test]
    fn test_lex_bad_dice() {
        use TokenKind::*;
        assert_eq!(kinds("d"), vec![ErrBadDice]);
        assert_eq!(kinds("2d"), vec![ErrBadDice]);
        assert_eq!(kinds("0d5"), vec![ErrBadDice]);
        assert_eq!(kinds("2d0"), vec![ErrBadDice]);
        assert_eq!(kinds("d05"), vec![ErrBadDice]);
    }

    #[test]
    fn test_lex_skips_whitespace() {
        use TokenKind::*;
        assert_eq!(kinds(" 2 + 3 "), vec![Integer, Plus, Integer]);
        assert_eq!(kinds("\t(1d4)\r\n"), vec![LeftParen, Dice, RightParen]);
    }
}
