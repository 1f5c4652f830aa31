use crate::interpreter::operator::Operator;
use std::fmt;
use std::fmt::Formatter;

/// The classification of a token.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    LeftParen,
    RightParen,
    Plus,
    UnaryMinus,
    BinaryMinus,
    Star,
    Slash,
}

impl TokenKind {
    /// The operator this kind of token stands for, if any.
    /// Numbers and parentheses are not operators.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            TokenKind::Plus => Some(Operator::Add),
            TokenKind::UnaryMinus => Some(Operator::Negate),
            TokenKind::BinaryMinus => Some(Operator::Subtract),
            TokenKind::Star => Some(Operator::Multiply),
            TokenKind::Slash => Some(Operator::Divide),
            TokenKind::Number | TokenKind::LeftParen | TokenKind::RightParen => None,
        }
    }

    pub fn is_operator(&self) -> bool {
        self.operator().is_some()
    }
}

/// A discrete part of an expression.
///
/// The lexeme is borrowed from the expression the token was scanned from,
/// so a token can never outlive its source text.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub lexeme: &'a str,
    /// Byte offset of the first character of the lexeme.
    pub position: usize,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, lexeme: &'a str, position: usize) -> Token<'a> {
        Token {
            kind,
            lexeme,
            position,
        }
    }

    pub fn is_number(&self) -> bool {
        self.kind == TokenKind::Number
    }

    pub fn operator(&self) -> Option<Operator> {
        self.kind.operator()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::UnaryMinus => write!(f, "u-"),
            TokenKind::BinaryMinus => write!(f, "b-"),
            _ => write!(f, "{}", self.lexeme),
        }
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self, self.position)
    }
}
