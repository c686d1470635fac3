use std::{collections::VecDeque, fmt};

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::debug;

use crate::{
    engine::{evaluator::Evaluator, format::Formatted},
    error::{EvalError, EvalResult},
};

/// Number of evaluations remembered by a [`Session`].
pub const HISTORY_LIMIT: usize = 10;

lazy_static! {
    /// Matches the `ans` and `mem` placeholders as whole words, in any case.
    static ref PLACEHOLDER: Regex =
        Regex::new(r"(?i)\b(ans|mem)\b").expect("placeholder pattern is valid");
}

/// A successfully evaluated expression.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// The expression as the user typed it, before placeholder substitution.
    pub expression: String,
    /// The value it evaluated to.
    pub result:     f64,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, Formatted(self.result))
    }
}

/// Calculator state carried between evaluations.
///
/// The evaluator itself knows nothing about named values. A session keeps the
/// last result and a memory register, and copies their current values into
/// the expression text (as `ans` and `mem`) before each evaluation.
///
/// # Example
/// ```
/// use reckon::session::Session;
///
/// let mut session = Session::new();
/// assert_eq!(session.evaluate("6 * 7"), Ok(42.0));
/// assert_eq!(session.evaluate("ans / 2"), Ok(21.0));
///
/// session.store_memory(session.last_result());
/// assert_eq!(session.evaluate("mem + ans"), Ok(42.0));
/// assert_eq!(session.history().count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    evaluator:   Evaluator,
    last_result: f64,
    memory:      f64,
    history:     VecDeque<HistoryEntry>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with a zeroed last result and memory.
    #[must_use]
    pub fn new() -> Self {
        Self::with_evaluator(Evaluator::new())
    }

    /// Creates a session that evaluates with the given evaluator, for example
    /// one built with [`Evaluator::with_capacity`].
    #[must_use]
    pub fn with_evaluator(evaluator: Evaluator) -> Self {
        Self { evaluator,
               last_result: 0.0,
               memory: 0.0,
               history: VecDeque::with_capacity(HISTORY_LIMIT) }
    }

    /// Substitutes placeholders, evaluates the expression and records the
    /// result.
    ///
    /// On failure the last result and the history are left untouched.
    ///
    /// # Errors
    /// Any error from [`Session::substitute`] or from the evaluator.
    pub fn evaluate(&mut self, input: &str) -> EvalResult<f64> {
        let expression = self.substitute(input)?;
        let value = self.evaluator.evaluate(&expression)?;

        self.last_result = value;
        self.record(input.trim(), value);
        Ok(value)
    }

    /// Replaces every `ans` and `mem` in `input` with the parenthesized
    /// decimal literal of the stored value.
    ///
    /// The literal is wrapped in parentheses so that a negative value keeps
    /// its sign under `^` (`ans^2` with `ans = -3` becomes `(-3)^2`).
    ///
    /// # Errors
    /// `MalformedExpression` if a referenced value is NaN or infinite, since
    /// it has no literal form the lexer accepts.
    ///
    /// # Example
    /// ```
    /// use reckon::session::Session;
    ///
    /// let mut session = Session::new();
    /// session.evaluate("0 - 3").unwrap();
    /// assert_eq!(session.substitute("ANS^2 + mem").unwrap(), "(-3)^2 + (0)");
    /// ```
    pub fn substitute(&self, input: &str) -> EvalResult<String> {
        let mut unrepresentable = None;

        let substituted = PLACEHOLDER.replace_all(input, |caps: &Captures<'_>| {
            let (name, value) = if caps[1].eq_ignore_ascii_case("ans") {
                ("ans", self.last_result)
            } else {
                ("mem", self.memory)
            };

            literal(value).unwrap_or_else(|| {
                unrepresentable = unrepresentable.or(Some(name));
                String::new()
            })
        });

        if let Some(name) = unrepresentable {
            return Err(EvalError::malformed(format!("'{name}' holds {}, which cannot be substituted",
                                                    Formatted(self.value_of(name)))));
        }

        Ok(substituted.into_owned())
    }

    #[must_use]
    pub const fn last_result(&self) -> f64 {
        self.last_result
    }

    /// Stores `value` in the memory register.
    pub fn store_memory(&mut self, value: f64) {
        debug!(value, "memory stored");
        self.memory = value;
    }

    #[must_use]
    pub const fn recall_memory(&self) -> f64 {
        self.memory
    }

    pub fn clear_memory(&mut self) {
        self.memory = 0.0;
    }

    /// Returns the remembered evaluations, oldest first.
    pub fn history(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn record(&mut self, expression: &str, result: f64) {
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(HistoryEntry { expression: expression.to_string(),
                                              result });
        debug!(expression, result, entries = self.history.len(), "recorded");
    }

    fn value_of(&self, name: &str) -> f64 {
        if name == "ans" { self.last_result } else { self.memory }
    }
}

/// Returns the literal text for `value`, or `None` if it is not finite.
///
/// `f64`'s `Display` never uses exponent notation and round-trips exactly, so
/// the lexer reads back the same value.
fn literal(value: f64) -> Option<String> {
    value.is_finite().then(|| format!("({value})"))
}
