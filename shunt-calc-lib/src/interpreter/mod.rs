pub mod error;
pub mod evaluator;
pub mod lexer;
mod operator;
pub mod parser;
mod stack;
pub mod token;

pub use crate::interpreter::operator::{Arity, Operator};

use crate::interpreter::error::CalculationError;
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use log::debug;
use string_builder::Builder;

/// The longest expression, in characters, that will be calculated.
pub const MAX_EXPRESSION_LENGTH: usize = 255;

/// Calculates the value of the given infix expression.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format, at most
///   `MAX_EXPRESSION_LENGTH` characters long.
///
/// returns: The value of the expression, or the error that stopped the calculation.
///
/// # Examples
///
/// ```
/// use shunt_calc::interpreter::evaluate_expression;
/// use shunt_calc::interpreter::error::CalculationError;
///
/// assert_eq!(evaluate_expression("(3+4)*2"), Ok(14.0));
/// assert_eq!(
///     evaluate_expression("3 4"),
///     Err(CalculationError::DisconnectedExpression { values: 2 })
/// );
/// ```
pub fn evaluate_expression(expression: &str) -> Result<f64, CalculationError> {
    let postfix_tokens = parser::parse(expression).map_err(|error| {
        debug!("Failed to parse {:?}: {}", expression, error);
        error
    })?;
    debug!("{:?} in postfix: {:?}", expression, postfix_tokens);
    let value = evaluator::evaluate(&postfix_tokens).map_err(|error| {
        debug!("Failed to evaluate {:?}: {}", expression, error);
        error
    })?;
    debug!("{:?} = {}", expression, value);
    Ok(value)
}

/// Pretty-prints the given tokens separated by whitespace.
/// Minus tokens are written as `u-` or `b-` to show whether they negate or subtract.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use shunt_calc::interpreter::parser::parse;
/// use shunt_calc::interpreter::tokens_to_string;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let postfix_tokens = parse("-1 - 2")?;
/// let pretty_printed_tokens = tokens_to_string(&postfix_tokens)?;
/// assert_eq!(pretty_printed_tokens, "1 2 b- u-");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token<'_>]) -> Result<String> {
    let mut builder = Builder::new(tokens.len() * 2);

    for (index, token) in tokens.iter().enumerate() {
        if index > 0 {
            builder.append(" ");
        }
        builder.append(token.to_string());
    }

    builder.string().context("Failed to build token string")
}

const SCIENTIFIC_NOTATION_THRESHOLD: f64 = 1e15;

/// Formats a calculated value for display.
///
/// Whole numbers are written without decimals and everything else with two.
/// Magnitudes from `1e15` up are written in scientific notation.
///
/// # Examples
///
/// ```
/// use shunt_calc::interpreter::format_value;
///
/// assert_eq!(format_value(11.0), "11");
/// assert_eq!(format_value(2.5), "2.50");
/// assert_eq!(format_value(-1.0 / 0.0), "-inf");
/// ```
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        value.to_string()
    } else if value.abs() >= SCIENTIFIC_NOTATION_THRESHOLD {
        format!("{:e}", value)
    } else if value.fract() == 0.0 {
        // Avoids printing "-0".
        format!("{:.0}", value + 0.0)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod interpreter_tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[parameterized(
    expression = {
    "3+4*2",
    "(3+4)*2",
    "-5+2",
    "5/2",
    "5",
    "10-3-2",
    "1 + 2 - 3 + 4",
    "2 * (3 + 4) * 5",
    "((((1))))",
    "-(2+3)",
    "-2*3",
    "1.5 + 2.25",
    "7 + -3",
    },
    expected = {
    11.0,
    14.0,
    -3.0,
    2.5,
    5.0,
    5.0,
    4.0,
    70.0,
    1.0,
    -5.0,
    -6.0,
    3.75,
    4.0,
    }
    )]
    fn evaluate_expression_returns_correct_value(expression: &str, expected: f64) {
        assert_eq!(evaluate_expression(expression).unwrap(), expected);
    }

    #[parameterized(literal = { "0", "5", "3.14159", "0.1", "1234567.875", "42." })]
    fn lone_number_evaluates_to_itself(literal: &str) {
        let expected: f64 = literal.parse().unwrap();
        assert_eq!(evaluate_expression(literal).unwrap(), expected);
    }

    #[test]
    fn unclosed_parenthesis_returns_err() {
        assert_eq!(
            evaluate_expression("(1+2"),
            Err(CalculationError::UnmatchedParenthesis)
        );
    }

    #[test]
    fn disconnected_numbers_return_err() {
        assert_eq!(
            evaluate_expression("3 4"),
            Err(CalculationError::DisconnectedExpression { values: 2 })
        );
    }

    #[test]
    fn unknown_character_returns_err_at_its_position() {
        assert_eq!(
            evaluate_expression("3 $ 4"),
            Err(CalculationError::Lex {
                character: '$',
                position: 3
            })
        );
    }

    #[test]
    fn blank_expression_returns_err() {
        assert_eq!(
            evaluate_expression("   "),
            Err(CalculationError::EmptyExpression)
        );
    }

    #[test]
    fn minus_after_open_parenthesis_subtracts() {
        // The minus in "(-5)" is read as a subtraction with no left operand.
        assert_eq!(
            evaluate_expression("(-5)"),
            Err(CalculationError::StackUnderflow {
                operator: Operator::Subtract
            })
        );
    }

    #[test]
    fn negation_after_multiplication_pops_the_multiplication_early() {
        assert_eq!(
            evaluate_expression("2*-3"),
            Err(CalculationError::StackUnderflow {
                operator: Operator::Multiply
            })
        );
    }

    #[test]
    fn too_long_expression_returns_err() {
        let expression = format!("1{}", "+1".repeat(MAX_EXPRESSION_LENGTH / 2));
        assert_eq!(expression.len(), MAX_EXPRESSION_LENGTH);
        assert_eq!(
            evaluate_expression(&expression),
            Ok((MAX_EXPRESSION_LENGTH / 2 + 1) as f64)
        );

        let expression = format!("{}+1", expression);
        assert_eq!(
            evaluate_expression(&expression),
            Err(CalculationError::TooLong {
                length: MAX_EXPRESSION_LENGTH + 2,
                max: MAX_EXPRESSION_LENGTH
            })
        );
    }

    #[test]
    fn division_by_zero_is_not_an_error() {
        assert_eq!(evaluate_expression("1/0"), Ok(f64::INFINITY));
        assert_eq!(evaluate_expression("-1/0"), Ok(f64::NEG_INFINITY));
    }

    #[parameterized(
    value = { 11.0, -3.0, 2.5, 0.126, -0.0, 123456789012345.0, f64::NAN, f64::INFINITY },
    expected = { "11", "-3", "2.50", "0.13", "0", "123456789012345", "NaN", "inf" }
    )]
    fn format_value_prints_whole_numbers_without_decimals(value: f64, expected: &str) {
        assert_eq!(format_value(value), expected);
    }

    #[parameterized(
    value = { 1e15, 1e300, -2.5e20, f64::MAX },
    expected = { "1e15", "1e300", "-2.5e20", "1.7976931348623157e308" }
    )]
    fn format_value_prints_huge_values_in_scientific_notation(value: f64, expected: &str) {
        assert_eq!(format_value(value), expected);
    }

    #[test]
    fn tokens_to_string_of_no_tokens_is_empty() {
        assert_eq!(tokens_to_string(&[]).unwrap(), "");
    }
}
