use crate::interpreter::error::CalculationError;
use crate::interpreter::operator::{Arity, Operator};
use crate::interpreter::stack::BoundedStack;
use crate::interpreter::token::Token;
use crate::interpreter::MAX_EXPRESSION_LENGTH;

type ValueStack = BoundedStack<f64>;

/// Reduces a postfix token sequence to a single value.
///
/// # Arguments
///
/// * `postfix_tokens`: Tokens, ordered in postfix notation.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// # use shunt_calc::interpreter::error::CalculationError;
/// # fn main() -> Result<(), CalculationError> {
/// use shunt_calc::interpreter::evaluator::evaluate;
/// use shunt_calc::interpreter::parser::parse;
///
/// let postfix_tokens = parse("10 - 3 - 2")?;
/// assert_eq!(evaluate(&postfix_tokens)?, 5.0);
/// # Ok(()) }
/// ```
pub fn evaluate(postfix_tokens: &[Token<'_>]) -> Result<f64, CalculationError> {
    let mut values: ValueStack = BoundedStack::with_capacity(MAX_EXPRESSION_LENGTH);

    for token in postfix_tokens {
        if token.is_number() {
            values.push(parse_number(token)?)?;
            continue;
        }
        match token.operator() {
            Some(operator) => apply_operator(&mut values, operator)?,
            None => {
                return Err(CalculationError::MalformedRpn {
                    token: token.to_string(),
                })
            }
        }
    }

    match values.len() {
        0 => Err(CalculationError::EmptyExpression),
        1 => values.pop().ok_or(CalculationError::EmptyExpression),
        residual => Err(CalculationError::DisconnectedExpression { values: residual }),
    }
}

fn parse_number(token: &Token<'_>) -> Result<f64, CalculationError> {
    token
        .lexeme
        .parse::<f64>()
        .map_err(|_| CalculationError::InvalidNumber {
            lexeme: token.lexeme.to_string(),
        })
}

fn apply_operator(values: &mut ValueStack, operator: Operator) -> Result<(), CalculationError> {
    let underflow = || CalculationError::StackUnderflow { operator };
    match operator.arity() {
        Arity::Unary => {
            let top = values.peek_mut().ok_or_else(underflow)?;
            *top = operator.evaluate_unary(*top).ok_or_else(underflow)?;
            Ok(())
        }
        Arity::Binary => {
            if values.len() < 2 {
                return Err(underflow());
            }
            let b = values.pop().ok_or_else(underflow)?;
            let a = values.pop().ok_or_else(underflow)?;
            values.push(operator.evaluate_binary(a, b).ok_or_else(underflow)?)
        }
    }
}
