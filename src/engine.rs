/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw input and produces numbers, operators and
/// parentheses, deciding for every `-` whether it negates the following
/// operand or subtracts it from the preceding one.
///
/// # Responsibilities
/// - Converts the input character stream into [`lexer::Token`]s.
/// - Skips whitespace.
/// - Rejects characters that cannot appear in an expression.
pub mod lexer;
/// Capacity-bounded LIFO storage for the evaluator.
///
/// Both the operand stack and the pending-operator stack are instances of
/// [`stack::Stack`]. Pushing past the capacity is an error instead of being
/// dropped, and popping an empty stack yields `None`.
pub mod stack;
/// The shunting-yard evaluator.
///
/// Consumes tokens left to right, keeps operands and pending operators on two
/// stacks, and reduces them according to precedence and associativity until a
/// single value remains.
///
/// # Responsibilities
/// - Applies precedence and associativity when operators arrive.
/// - Resolves parenthesized groups.
/// - Realizes unary minus as `0 - x`.
/// - Aborts on the first reducer failure.
pub mod evaluator;
/// Canonical rendering of results.
///
/// Turns an `f64` into the string shown to users, switching to scientific
/// notation for very large and very small magnitudes.
pub mod format;
