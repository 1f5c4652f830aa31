use crate::interpreter::error::CalculationError;
use crate::interpreter::lexer::Lexer;
use crate::interpreter::operator::Operator;
use crate::interpreter::stack::BoundedStack;
use crate::interpreter::token::{Token, TokenKind};
use crate::interpreter::MAX_EXPRESSION_LENGTH;
use log::trace;

type OperatorStack<'a> = BoundedStack<Token<'a>>;

/// Reorders the tokens of an infix expression into postfix order,
/// pulling them from the lexer one at a time.
pub(crate) fn infix_to_postfix(expression: &str) -> Result<Vec<Token<'_>>, CalculationError> {
    let mut lexer = Lexer::new(expression)?;
    let mut operators: OperatorStack = BoundedStack::with_capacity(MAX_EXPRESSION_LENGTH);
    let mut output: Vec<Token<'_>> = vec![];

    while let Some(token) = lexer.next_token()? {
        match token.kind {
            TokenKind::Number => output.push(token),
            TokenKind::LeftParen => operators.push(token)?,
            TokenKind::RightParen => parse_closing_parenthesis_token(&mut operators, &mut output)?,
            TokenKind::Plus
            | TokenKind::UnaryMinus
            | TokenKind::BinaryMinus
            | TokenKind::Star
            | TokenKind::Slash => parse_operator_token(&mut operators, &mut output, token)?,
        };
        trace!("{} -> output {:?}, operators {:?}", token, output, operators);
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators<'a>(
    operators: &mut OperatorStack<'a>,
    output: &mut Vec<Token<'a>>,
) -> Result<(), CalculationError> {
    while let Some(token) = operators.pop() {
        match token.kind {
            TokenKind::LeftParen | TokenKind::RightParen => {
                return Err(CalculationError::UnmatchedParenthesis);
            }
            _ => output.push(token),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token<'a>(
    operators: &mut OperatorStack<'a>,
    output: &mut Vec<Token<'a>>,
) -> Result<(), CalculationError> {
    loop {
        match operators.pop() {
            None => return Err(CalculationError::UnmatchedParenthesis),
            // Discard the open parenthesis.
            Some(top_of_operator_stack) if top_of_operator_stack.kind == TokenKind::LeftParen => {
                return Ok(())
            }
            Some(operator) => output.push(operator),
        }
    }
}

fn parse_operator_token<'a>(
    operators: &mut OperatorStack<'a>,
    output: &mut Vec<Token<'a>>,
    token: Token<'a>,
) -> Result<(), CalculationError> {
    while let Some(top_of_operator_stack) = operators.peek() {
        // An open parenthesis on top has no operator and stops the popping.
        if !binds_at_least_as_tightly(top_of_operator_stack.operator(), token.operator()) {
            break;
        }
        if let Some(other_operator_token) = operators.pop() {
            output.push(other_operator_token);
        }
    }

    operators.push(token)
}

fn binds_at_least_as_tightly(other: Option<Operator>, operator: Option<Operator>) -> bool {
    match (other, operator) {
        (Some(other), Some(operator)) => other.precedence_ge(&operator),
        _ => false,
    }
}
