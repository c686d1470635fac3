use tracing::{debug, trace};

use crate::{
    engine::{
        lexer::{Token, tokenize},
        stack::{DEFAULT_CAPACITY, Stack},
    },
    error::{EvalError, EvalResult},
    operator::{Arity, Associativity, Operator},
};

/// An entry on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    /// An infix operator waiting for its right operand to be complete.
    Binary(Operator),
    /// A unary minus. An implicit `0` sits below its operand on the value
    /// stack, and reducing it computes `0 - operand`.
    Negate,
    /// An open group.
    LeftParen,
}

impl Pending {
    /// Returns true if this entry must be reduced before `incoming` can be
    /// pushed on top of it.
    ///
    /// Negation binds tighter than every operator except `^`, so `3 * -2`,
    /// `8 / -2 * 2` and `-2 ^ 2` group as `3 * (-2)`, `(8 / -2) * 2` and
    /// `-(2 ^ 2)`.
    fn yields_to(self, incoming: Operator) -> bool {
        match self {
            Self::LeftParen => false,
            Self::Negate => incoming.precedence() < Operator::Pow.precedence(),
            Self::Binary(top) => match incoming.associativity() {
                Associativity::Left => incoming.precedence() <= top.precedence(),
                Associativity::Right => incoming.precedence() < top.precedence(),
            },
        }
    }
}

/// A shunting-yard evaluator with bounded operand and operator stacks.
///
/// The evaluator holds no state between calls: both stacks are empty before
/// and after every evaluation, whether it succeeds or fails. Reusing one
/// evaluator only saves the stack allocations.
///
/// # Example
/// ```
/// use reckon::{engine::evaluator::Evaluator, error::EvalError};
///
/// let mut evaluator = Evaluator::new();
/// assert_eq!(evaluator.evaluate("(2 + 3) * 4"), Ok(20.0));
/// assert_eq!(evaluator.evaluate("5 % 0"), Err(EvalError::ModuloByZero));
///
/// // A tiny evaluator cannot hold a long chain of pending operators.
/// let mut shallow = Evaluator::with_capacity(2);
/// assert!(shallow.evaluate("1 + 2 * 3 ^ 4").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator {
    values:    Stack<f64>,
    operators: Stack<Pending>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator whose stacks hold [`DEFAULT_CAPACITY`] entries.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an evaluator whose stacks each hold at most `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { values:    Stack::with_capacity(capacity),
               operators: Stack::with_capacity(capacity), }
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// Tokenizes and evaluates an expression.
    ///
    /// # Errors
    /// - `DivisionByZero` / `ModuloByZero` from the first failing reduction.
    /// - `MalformedExpression` for input that does not reduce to exactly one
    ///   value, including unexpected characters and stack overflow.
    pub fn evaluate(&mut self, expression: &str) -> EvalResult<f64> {
        debug!(expression, "evaluating");
        let tokens = tokenize(expression)?;
        self.evaluate_tokens(&tokens)
    }

    /// Evaluates an already tokenized expression.
    ///
    /// On failure both stacks are cleared before the error is returned, so no
    /// partial state outlives the call.
    pub fn evaluate_tokens(&mut self, tokens: &[Token]) -> EvalResult<f64> {
        let result = self.run(tokens);

        match &result {
            Ok(value) => debug!(value, "evaluated"),
            Err(error) => {
                debug!(%error, "evaluation failed");
                self.values.clear();
                self.operators.clear();
            },
        }

        result
    }

    fn run(&mut self, tokens: &[Token]) -> EvalResult<f64> {
        for token in tokens {
            match *token {
                Token::Number(n) => self.values.push(n)?,
                Token::LeftParen => self.operators.push(Pending::LeftParen)?,
                Token::RightParen => self.close_group()?,
                Token::Operator(_, Arity::Unary) => {
                    self.values.push(0.0)?;
                    self.operators.push(Pending::Negate)?;
                },
                Token::Operator(op, Arity::Binary) => self.push_operator(op)?,
            }
        }

        while let Some(pending) = self.operators.pop() {
            self.reduce(pending)?;
        }

        let result = self.values
                         .pop()
                         .ok_or_else(|| EvalError::malformed("empty expression"))?;
        if !self.values.is_empty() {
            return Err(EvalError::malformed("missing operator between operands"));
        }

        Ok(result)
    }

    /// Reduces everything back to the nearest `(` and discards it.
    fn close_group(&mut self) -> EvalResult<()> {
        loop {
            match self.operators.pop() {
                Some(Pending::LeftParen) => return Ok(()),
                Some(pending) => self.reduce(pending)?,
                None => return Err(EvalError::malformed("unmatched ')'")),
            }
        }
    }

    /// Reduces every pending entry that binds at least as tightly as `op`,
    /// then pushes `op`.
    fn push_operator(&mut self, op: Operator) -> EvalResult<()> {
        while let Some(top) = self.operators.peek().copied() {
            if !top.yields_to(op) {
                break;
            }
            self.operators.pop();
            self.reduce(top)?;
        }

        self.operators.push(Pending::Binary(op))?;
        Ok(())
    }

    /// Pops the operands of `pending`, applies it and pushes the result.
    fn reduce(&mut self, pending: Pending) -> EvalResult<()> {
        let (op, left, right) = match pending {
            Pending::Binary(op) => {
                let right = self.pop_operand(op)?;
                let left = self.pop_operand(op)?;
                (op, left, right)
            },
            Pending::Negate => {
                let operand = self.pop_operand(Operator::Sub)?;
                let zero = self.pop_operand(Operator::Sub)?;
                (Operator::Sub, zero, operand)
            },
            Pending::LeftParen => return Err(EvalError::malformed("unmatched '('")),
        };

        let value = op.apply(left, right)?;
        trace!(operator = %op, left, right, value, "reduced");
        self.values.push(value)?;
        Ok(())
    }

    fn pop_operand(&mut self, op: Operator) -> EvalResult<f64> {
        self.values
            .pop()
            .ok_or_else(|| EvalError::malformed(format!("missing operand for '{op}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_drained(evaluator: &Evaluator) {
        assert!(evaluator.values.is_empty(), "value stack not empty");
        assert!(evaluator.operators.is_empty(), "operator stack not empty");
    }

    #[test]
    fn stacks_are_empty_after_success() {
        let mut evaluator = Evaluator::new();

        for source in ["2+3*4", "(2+3)*4", "2^3^2", "-(-(3))", "((((1))))", "8/-2*2"] {
            assert!(evaluator.evaluate(source).is_ok(), "{source} failed");
            assert_drained(&evaluator);
        }
    }

    #[test]
    fn stacks_are_empty_after_failure() {
        let mut evaluator = Evaluator::new();

        for source in ["1+2*(3/0)", "4%0+1", "(1+2", "1+2)", "3 4", "2*", ""] {
            assert!(evaluator.evaluate(source).is_err(), "{source} succeeded");
            assert_drained(&evaluator);
        }
    }

    #[test]
    fn unary_minus_injects_zero() {
        let mut evaluator = Evaluator::new();
        let tokens = tokenize("-4").unwrap();

        for token in &tokens {
            if let Token::Operator(_, Arity::Unary) = token {
                evaluator.values.push(0.0).unwrap();
                evaluator.operators.push(Pending::Negate).unwrap();
            } else if let Token::Number(n) = token {
                evaluator.values.push(*n).unwrap();
            }
        }
        assert_eq!(evaluator.values.len(), 2);

        let pending = evaluator.operators.pop().unwrap();
        evaluator.reduce(pending).unwrap();
        assert_eq!(evaluator.values.pop(), Some(-4.0));
        assert_drained(&evaluator);
    }

    #[test]
    fn overflow_is_reported_as_malformed() {
        let mut evaluator = Evaluator::with_capacity(3);
        let deep = "((((1))))";

        match evaluator.evaluate(deep) {
            Err(EvalError::MalformedExpression { details }) => {
                assert_eq!(details, "expression exceeds stack capacity of 3");
            },
            other => panic!("unexpected result: {other:?}"),
        }
        assert_drained(&evaluator);
    }

    #[test]
    fn negation_yields_to_everything_but_power() {
        assert!(Pending::Negate.yields_to(Operator::Add));
        assert!(Pending::Negate.yields_to(Operator::Mul));
        assert!(Pending::Negate.yields_to(Operator::Mod));
        assert!(!Pending::Negate.yields_to(Operator::Pow));
        assert!(!Pending::LeftParen.yields_to(Operator::Add));
        assert!(Pending::Binary(Operator::Pow).yields_to(Operator::Mul));
        assert!(!Pending::Binary(Operator::Pow).yields_to(Operator::Pow));
    }
}
