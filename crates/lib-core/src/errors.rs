use thiserror::Error;

use crate::tokens::Location;

/// The single error type surfaced by the lexer and the parser.
///
/// Messages carry the source location of the offending token whenever one is
/// available. Parsing a multi-statement script aborts on the first error; no
/// partial statement list is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserError {
    #[error("sql lexer error: {message} at {location}")]
    Lexer { message: String, location: Location },

    #[error("sql parser error: {0}")]
    Syntax(String),

    /// The depth guard tripped. Never swallowed by speculative parsing.
    #[error("recursion limit exceeded")]
    RecursionLimit,
}

impl ParserError {
    pub fn syntax(message: impl Into<String>) -> Self {
        ParserError::Syntax(message.into())
    }
}

/// Shorthand for `Err(ParserError::Syntax(format!(..)))`.
#[macro_export]
macro_rules! parser_err {
    ($($arg:tt)*) => {
        Err($crate::errors::ParserError::Syntax(format!($($arg)*)))
    };
}
