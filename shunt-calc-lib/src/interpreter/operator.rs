use std::fmt;
use std::fmt::Formatter;

/// A mathematical operator.
///
/// Operators are ranked by binding strength, weakest first:
/// `Add < Negate < Subtract < Multiply < Divide`.
/// Negation sits between addition and subtraction, so `-a + b` negates `a`
/// before adding while `- a - b` applies the subtraction first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Negate,
    Subtract,
    Multiply,
    Divide,
}

/// How many operands an operator consumes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Negate | Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            Operator::Negate => Arity::Unary,
            Operator::Add | Operator::Subtract | Operator::Multiply | Operator::Divide => {
                Arity::Binary
            }
        }
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            Operator::Add => 0,
            Operator::Negate => 1,
            Operator::Subtract => 2,
            Operator::Multiply => 3,
            Operator::Divide => 4,
        }
    }

    pub(crate) fn precedence_ge(&self, other: &Self) -> bool {
        self.precedence().ge(&other.precedence())
    }

    /// Applies a binary operator to its operands, `a` being the left one.
    /// Division by zero yields an infinity or NaN like any other float division.
    ///
    /// Returns `None` when called on a unary operator.
    pub fn evaluate_binary(&self, a: f64, b: f64) -> Option<f64> {
        match self {
            Operator::Add => Some(a + b),
            Operator::Subtract => Some(a - b),
            Operator::Multiply => Some(a * b),
            Operator::Divide => Some(a / b),
            Operator::Negate => None,
        }
    }

    /// Applies a unary operator to its operand.
    ///
    /// Returns `None` when called on a binary operator.
    pub fn evaluate_unary(&self, x: f64) -> Option<f64> {
        match self {
            Operator::Negate => Some(-x),
            Operator::Add | Operator::Subtract | Operator::Multiply | Operator::Divide => None,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Unary => write!(f, "unary"),
            Arity::Binary => write!(f, "binary"),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
