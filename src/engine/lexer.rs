use std::fmt;

use logos::Logos;

use crate::{
    error::{EvalError, EvalResult},
    operator::{Arity, Operator},
};

/// A raw lexical unit recognized in the input, before unary minus has been
/// classified.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Lexeme {
    /// Numeric literals such as `12`, `3.25`, `5.` or `.5`. There is no
    /// exponent notation and no sign; a leading `-` is a separate operator.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// One of `+ - * / ^ %`.
    #[regex(r"[-+*/^%]", parse_operator)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs, feeds and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// A classified token, ready for the evaluator.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    Number(f64),
    Operator(Operator, Arity),
    LeftParen,
    RightParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operator(op, Arity::Binary) => write!(f, "{op}"),
            Self::Operator(op, Arity::Unary) => write!(f, "unary {op}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
        }
    }
}

/// Splits an expression into tokens.
///
/// A `-` is unary when it starts the expression or directly follows `(` or
/// another operator; every other operator is binary.
///
/// # Errors
/// Returns `MalformedExpression` naming the first character (and its byte
/// offset) that is not part of a number, an operator, a parenthesis or
/// whitespace.
///
/// # Example
/// ```
/// use reckon::{
///     engine::lexer::{Token, tokenize},
///     operator::{Arity, Operator},
/// };
///
/// let tokens = tokenize("3 * -2").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(3.0),
///                 Token::Operator(Operator::Mul, Arity::Binary),
///                 Token::Operator(Operator::Sub, Arity::Unary),
///                 Token::Number(2.0)]);
///
/// assert!(tokenize("3 $ 2").is_err());
/// ```
pub fn tokenize(input: &str) -> EvalResult<Vec<Token>> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut lexer = Lexeme::lexer(input);

    while let Some(lexeme) = lexer.next() {
        let Ok(lexeme) = lexeme else {
            return Err(EvalError::malformed(format!("unexpected '{}' at offset {}",
                                                    lexer.slice(),
                                                    lexer.span().start)));
        };

        let token = match lexeme {
            Lexeme::Number(n) => Token::Number(n),
            Lexeme::Operator(op) => Token::Operator(op, classify(op, tokens.last())),
            Lexeme::LParen => Token::LeftParen,
            Lexeme::RParen => Token::RightParen,
            Lexeme::Ignored => continue,
        };
        tokens.push(token);
    }

    Ok(tokens)
}

/// Decides whether `op` negates its operand, based on the token before it.
fn classify(op: Operator, previous: Option<&Token>) -> Arity {
    match (op, previous) {
        (Operator::Sub, None | Some(Token::LeftParen | Token::Operator(..))) => Arity::Unary,
        _ => Arity::Binary,
    }
}

/// Parses a numeric literal from the current token slice.
///
/// Rust's float grammar accepts the `5.` and `.5` forms the lexer lets
/// through; a slice that still fails to parse becomes a lexer error.
fn parse_number(lex: &logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse().ok()
}

fn parse_operator(lex: &logos::Lexer<Lexeme>) -> Option<Operator> {
    lex.slice()
       .chars()
       .next()
       .and_then(|symbol| Operator::try_from(symbol).ok())
}
