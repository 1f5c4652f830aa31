use crate::interpreter::operator::Operator;
use std::fmt;

/// Every way a calculation can fail.
///
/// Each stage of the pipeline returns the first error it runs into and
/// no later stage is run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculationError {
    /// A character that is not part of any token.
    Lex {
        character: char,
        /// 1-based character position in the expression.
        position: usize,
    },
    /// A `(` was never closed, or a `)` had no matching `(`.
    UnmatchedParenthesis,
    /// A number token whose text is not a valid numeral.
    InvalidNumber { lexeme: String },
    /// An operator was applied with too few operands available.
    StackUnderflow { operator: Operator },
    /// A bounded stack was pushed beyond its capacity.
    StackOverflow { capacity: usize },
    /// A token that has no meaning in postfix form, such as a parenthesis.
    MalformedRpn { token: String },
    /// The expression did not produce any value.
    EmptyExpression,
    /// The expression left several values that no operator connects.
    DisconnectedExpression { values: usize },
    /// The expression is longer than the calculator accepts.
    TooLong { length: usize, max: usize },
}

impl std::error::Error for CalculationError {}

impl fmt::Display for CalculationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CalculationError::Lex {
                character,
                position,
            } => write!(f, "pos {} - unknown operator: '{}'", position, character),
            CalculationError::UnmatchedParenthesis => write!(f, "unmatched parenthesis"),
            CalculationError::InvalidNumber { lexeme } => {
                write!(f, "invalid number '{}'", lexeme)
            }
            CalculationError::StackUnderflow { operator } => write!(
                f,
                "too few items on stack to perform {} operation '{}'",
                operator.arity(),
                operator
            ),
            CalculationError::StackOverflow { capacity } => {
                write!(f, "stack capacity of {} exceeded", capacity)
            }
            CalculationError::MalformedRpn { token } => {
                write!(f, "unknown stack item: '{}'", token)
            }
            CalculationError::EmptyExpression => write!(f, "empty expression"),
            CalculationError::DisconnectedExpression { values } => write!(
                f,
                "{} unconnected expressions (help: connect them using an operator)",
                values
            ),
            CalculationError::TooLong { length, max } => write!(
                f,
                "expression is {} characters long, at most {} are allowed",
                length, max
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_error_names_character_and_position() {
        let error = CalculationError::Lex {
            character: '$',
            position: 3,
        };
        assert_eq!(error.to_string(), "pos 3 - unknown operator: '$'");
    }

    #[test]
    fn stack_underflow_names_the_operator() {
        let error = CalculationError::StackUnderflow {
            operator: Operator::Negate,
        };
        assert_eq!(
            error.to_string(),
            "too few items on stack to perform unary operation '-'"
        );
    }

    #[test]
    fn error_converts_into_anyhow() {
        let error: anyhow::Error = CalculationError::EmptyExpression.into();
        assert_eq!(
            error.downcast_ref::<CalculationError>(),
            Some(&CalculationError::EmptyExpression)
        );
    }
}
