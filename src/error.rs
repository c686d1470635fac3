use thiserror::Error;

/// Result type used throughout the engine.
///
/// Every tokenizing, reducing and evaluating routine returns either a value of
/// type `T` or an [`EvalError`] describing why the expression was rejected.
pub type EvalResult<T> = Result<T, EvalError>;

/// Represents every way an evaluation can fail.
///
/// Reducer failures (`DivisionByZero`, `ModuloByZero`) abort the evaluation
/// at the point they occur. Structural problems with the input, such as
/// unmatched parentheses, stray characters, dangling operators or an
/// expression deeper than the evaluator's stacks, are reported as
/// `MalformedExpression`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The divisor of `/` was zero (or within `1e-10` of it).
    #[error("Division by zero.")]
    DivisionByZero,
    /// The divisor of `%` was zero (or within `1e-10` of it).
    #[error("Modulo by zero.")]
    ModuloByZero,
    /// A character was used as an operator but is not one of `+ - * / ^ %`.
    #[error("Unknown operator '{symbol}'.")]
    UnknownOperator {
        /// The offending character.
        symbol: char,
    },
    /// The input could not be reduced to a single value.
    #[error("Malformed expression: {details}.")]
    MalformedExpression {
        /// What was wrong with the input.
        details: String,
    },
}

impl EvalError {
    /// Builds a `MalformedExpression` error from a description.
    ///
    /// # Example
    /// ```
    /// use reckon::error::EvalError;
    ///
    /// let err = EvalError::malformed("unmatched ')'");
    /// assert_eq!(err.to_string(), "Malformed expression: unmatched ')'.");
    /// ```
    pub fn malformed(details: impl Into<String>) -> Self {
        Self::MalformedExpression { details: details.into() }
    }

    /// Returns the name of the error kind, without any details.
    ///
    /// Used by the command line front-end and by the data-driven tests to
    /// compare failures without caring about the exact message.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "DivisionByZero",
            Self::ModuloByZero => "ModuloByZero",
            Self::UnknownOperator { .. } => "UnknownOperator",
            Self::MalformedExpression { .. } => "MalformedExpression",
        }
    }
}
