use std::fmt;

use thiserror::Error;

use crate::ast::{Position, Token};

/// Stage that rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorOrigin {
    Tokenizer,
    Parser,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorOrigin::Tokenizer => write!(f, "Tokenizer"),
            ErrorOrigin::Parser => write!(f, "Parser"),
        }
    }
}

/// Syntax error raised by the tokenizer or by the parser.
///
/// Both stages share this type so callers handle malformed input in one place.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{origin} error{}: {message}", location(.position))]
pub struct ParseError {
    pub message: String,
    /// Offending token, `None` when the input ended before one was found
    pub token: Option<Token>,
    pub position: Option<Position>,
    pub origin: ErrorOrigin,
}

fn location(position: &Option<Position>) -> String {
    match position {
        Some(position) => format!(" at {}", position),
        None => String::new(),
    }
}

impl ParseError {
    /// Grammar violation found by the parser.
    pub fn parser(message: impl Into<String>, token: Option<Token>) -> Self {
        let position = token.as_ref().map(|token| token.position);
        ParseError {
            message: message.into(),
            token,
            position,
            origin: ErrorOrigin::Parser,
        }
    }

    /// Malformed text found by the tokenizer.
    pub fn tokenizer(message: impl Into<String>, position: Position) -> Self {
        ParseError {
            message: message.into(),
            token: None,
            position: Some(position),
            origin: ErrorOrigin::Tokenizer,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
