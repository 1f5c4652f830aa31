use crate::interpreter::error::CalculationError;
use crate::interpreter::token::{Token, TokenKind};
use crate::interpreter::MAX_EXPRESSION_LENGTH;
use itertools::Itertools;
use std::iter::Peekable;
use std::str::CharIndices;

/// Scans an expression into tokens, one at a time.
///
/// The lexer remembers the last token it emitted, which is the only thing
/// that decides whether a `-` is a negation or a subtraction.
pub struct Lexer<'a> {
    source: &'a str,
    characters: Peekable<CharIndices<'a>>,
    last: Option<Token<'a>>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over the given expression.
    ///
    /// # Arguments
    ///
    /// * `source`: The text-representation of the infix expression.
    ///
    /// returns: The lexer, or `TooLong` if the expression has more than
    /// `MAX_EXPRESSION_LENGTH` characters.
    pub fn new(source: &'a str) -> Result<Lexer<'a>, CalculationError> {
        let length = source.chars().count();
        if length > MAX_EXPRESSION_LENGTH {
            return Err(CalculationError::TooLong {
                length,
                max: MAX_EXPRESSION_LENGTH,
            });
        }
        Ok(Lexer {
            source,
            characters: source.char_indices().peekable(),
            last: None,
        })
    }

    /// Scans the next token.
    ///
    /// returns: `Ok(None)` once only spaces (or nothing) remain.
    pub fn next_token(&mut self) -> Result<Option<Token<'a>>, CalculationError> {
        while self
            .characters
            .next_if(|&(_, character)| character == ' ')
            .is_some()
        {}

        let (start, first) = match self.characters.next() {
            None => return Ok(None),
            Some(next) => next,
        };

        let token = if first.is_ascii_digit() {
            let end = self.scan_number(start);
            Token::new(TokenKind::Number, &self.source[start..end], start)
        } else {
            let kind = self.classify(first, start)?;
            Token::new(kind, &self.source[start..start + first.len_utf8()], start)
        };

        self.last = Some(token);
        Ok(Some(token))
    }

    /// Consumes the rest of a number whose first digit starts at `start`.
    /// Returns the byte offset just past the number.
    fn scan_number(&mut self, start: usize) -> usize {
        let mut end = start + 1 + self.skip_digits();
        if self.characters.next_if(|&(_, character)| character == '.').is_some() {
            end += 1 + self.skip_digits();
        }
        end
    }

    fn skip_digits(&mut self) -> usize {
        // Digits are ASCII, so the count is also their length in bytes.
        self.characters
            .peeking_take_while(|(_, character)| character.is_ascii_digit())
            .count()
    }

    fn classify(&self, character: char, start: usize) -> Result<TokenKind, CalculationError> {
        match character {
            '+' => Ok(TokenKind::Plus),
            '-' => Ok(self.classify_minus()),
            '*' => Ok(TokenKind::Star),
            '/' => Ok(TokenKind::Slash),
            '(' => Ok(TokenKind::LeftParen),
            ')' => Ok(TokenKind::RightParen),
            character => Err(CalculationError::Lex {
                character,
                position: self.source[..start].chars().count() + 1,
            }),
        }
    }

    /// A minus is unary at the start of the expression or straight after
    /// another operator. Only operators count: after `(` it is binary.
    fn classify_minus(&self) -> TokenKind {
        match self.last {
            None => TokenKind::UnaryMinus,
            Some(token) if token.kind.is_operator() => TokenKind::UnaryMinus,
            Some(_) => TokenKind::BinaryMinus,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, CalculationError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

/// Scans the whole expression into tokens, in infix order.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: Every token of the expression, or the first error found.
///
/// # Examples
///
/// ```
/// use shunt_calc::interpreter::lexer::tokenize;
/// use shunt_calc::interpreter::token::TokenKind;
/// # use shunt_calc::interpreter::error::CalculationError;
///
/// # fn main() -> Result<(), CalculationError> {
/// let tokens = tokenize("-1.5 - 2")?;
/// let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::UnaryMinus, TokenKind::Number, TokenKind::BinaryMinus, TokenKind::Number]
/// );
/// # Ok(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token<'_>>, CalculationError> {
    Lexer::new(expression)?.collect()
}
