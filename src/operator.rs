use std::fmt;

use crate::error::{EvalError, EvalResult};

/// Divisors whose magnitude falls below this bound are treated as zero by `/`
/// and `%`.
pub const DIVISOR_EPSILON: f64 = 1e-10;

/// The binary arithmetic operators understood by the engine.
///
/// Each operator carries its own precedence, associativity and reducer, so
/// every place that needs to know about an operator matches on this enum
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
    /// `%`
    Mod,
}

/// How a chain of operators with equal precedence is grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    Right,
}

/// Whether an operator token takes one operand or two.
///
/// Only `-` is ever unary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Prefix negation, as in `-5` or `3 * -2`.
    Unary,
    /// Infix operation between two operands.
    Binary,
}

impl Operator {
    /// All operators, in symbol-table order.
    pub const ALL: [Self; 6] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Pow, Self::Mod];

    /// Returns the character that denotes this operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
            Self::Mod => '%',
        }
    }

    /// Returns the binding strength of the operator. Higher binds tighter.
    ///
    /// `+ -` bind at 1, `* / %` at 2 and `^` at 3.
    ///
    /// # Example
    /// ```
    /// use reckon::operator::Operator;
    ///
    /// assert!(Operator::Mul.precedence() > Operator::Add.precedence());
    /// assert_eq!(Operator::Mod.precedence(), Operator::Div.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div | Self::Mod => 2,
            Self::Pow => 3,
        }
    }

    /// Returns how chains of this operator are grouped. Only `^` is
    /// right-associative.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Pow => Associativity::Right,
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Mod => Associativity::Left,
        }
    }

    /// Applies the operator to two operands.
    ///
    /// `+`, `-` and `*` are plain IEEE-754 arithmetic and `^` is `powf`, so
    /// negative and fractional exponents follow the platform power function.
    /// `%` is the truncated remainder, which takes the sign of `left`.
    ///
    /// # Errors
    /// - `DivisionByZero` when dividing by a value smaller than
    ///   [`DIVISOR_EPSILON`] in magnitude.
    /// - `ModuloByZero` for the same condition on `%`.
    ///
    /// # Example
    /// ```
    /// use reckon::{error::EvalError, operator::Operator};
    ///
    /// assert_eq!(Operator::Pow.apply(2.0, 10.0), Ok(1024.0));
    /// assert_eq!(Operator::Mod.apply(-7.0, 3.0), Ok(-1.0));
    /// assert_eq!(Operator::Div.apply(1.0, 1e-12), Err(EvalError::DivisionByZero));
    /// ```
    pub fn apply(self, left: f64, right: f64) -> EvalResult<f64> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right.abs() < DIVISOR_EPSILON {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(left / right)
            },
            Self::Pow => Ok(left.powf(right)),
            Self::Mod => {
                if right.abs() < DIVISOR_EPSILON {
                    return Err(EvalError::ModuloByZero);
                }
                Ok(left % right)
            },
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = EvalError;

    /// Looks up the operator denoted by `symbol`.
    ///
    /// # Example
    /// ```
    /// use reckon::{error::EvalError, operator::Operator};
    ///
    /// assert_eq!(Operator::try_from('^'), Ok(Operator::Pow));
    /// assert_eq!(Operator::try_from('&'), Err(EvalError::UnknownOperator { symbol: '&' }));
    /// ```
    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::ALL.into_iter()
                 .find(|op| op.symbol() == symbol)
                 .ok_or(EvalError::UnknownOperator { symbol })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
