mod infix_converter;

use crate::interpreter::error::CalculationError;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;

/// Parses the given infix expression into postfix (reverse polish) order,
/// which can be evaluated with a single value stack.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression, in postfix order.
///
/// # Examples
///
/// ```
/// # use shunt_calc::interpreter::error::CalculationError;
/// # fn main() -> Result<(), CalculationError> {
/// use shunt_calc::interpreter::parser::parse;
///
/// let postfix_tokens = parse("(1 + 2) * 3")?;
/// let lexemes: Vec<&str> = postfix_tokens.iter().map(|token| token.lexeme).collect();
/// assert_eq!(lexemes, ["1", "2", "+", "3", "*"]);
/// # Ok(()) }
/// ```
pub fn parse(expression: &str) -> Result<Vec<Token<'_>>, CalculationError> {
    infix_to_postfix(expression)
}
