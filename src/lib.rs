//! # reckon
//!
//! reckon is an infix arithmetic expression evaluator written in Rust.
//! It tokenizes an expression, applies operator precedence and associativity
//! with a two-stack shunting-yard algorithm, and produces an `f64` or a
//! specific error. Supported are `+ - * / ^ %`, parentheses and unary minus.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Orchestrates the evaluation of a single expression.
///
/// This module ties together tokenizing, the bounded stacks, the
/// shunting-yard evaluator and result formatting. It holds no state between
/// calls.
///
/// # Responsibilities
/// - Turns expression text into tokens, classifying unary minus.
/// - Reduces tokens to a value by precedence and associativity.
/// - Renders values for display.
pub mod engine;
/// Provides the error type for evaluation.
///
/// This module defines every way an evaluation can fail: the reducer failures
/// (division and modulo by zero), unknown operator symbols, and malformed
/// input that does not reduce to exactly one value.
pub mod error;
/// Defines the operator table.
///
/// Each supported operator is a variant of a closed enum that knows its
/// symbol, precedence, associativity and how to combine two operands.
pub mod operator;
/// Calculator state around the stateless engine.
///
/// A session remembers the last result, a memory register and a short
/// history, and substitutes the `ans` and `mem` placeholders into expressions
/// before handing them to the engine.
pub mod session;

pub use engine::format::format_result;

use crate::{engine::evaluator::Evaluator, error::EvalResult};

/// Evaluates an infix arithmetic expression.
///
/// The expression may contain numbers (`12`, `3.5`, `.5`), the operators
/// `+ - * / ^ %`, parentheses and whitespace. Precedence from loosest to
/// tightest is `+ -`, then `* / %`, then `^`; `^` groups right to left and
/// everything else left to right. A `-` at the start of the expression, after
/// `(` or after another operator negates the operand that follows.
///
/// # Errors
/// Returns an error if a division or modulo by zero occurs, or if the
/// expression is malformed (unknown characters, unbalanced parentheses,
/// missing operands or operators).
///
/// # Examples
/// ```
/// use reckon::{error::EvalError, evaluate};
///
/// assert_eq!(evaluate("2 + 3 * 4"), Ok(14.0));
/// assert_eq!(evaluate("2 ^ 3 ^ 2"), Ok(512.0));
/// assert_eq!(evaluate("3 * -2"), Ok(-6.0));
///
/// assert_eq!(evaluate("5 / 0"), Err(EvalError::DivisionByZero));
/// assert!(evaluate("(1 + 2").is_err());
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    Evaluator::new().evaluate(expression)
}
