use std::fmt;

use rust_decimal::Decimal;

/// Location of a token in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Character index from the start of the input
    pub offset: usize,
    /// 1-based line number
    pub line: usize,
    /// 1-based column number
    pub column: usize,
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Position {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Classification of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Whole number
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 0
    /// ```
    Integer,

    /// Number with a fractional part
    ///
    /// # Examples
    /// ```text
    /// 3.141592
    /// 6.3
    /// ```
    Float,

    /// String literal enclosed in double or single quotes
    ///
    /// # Examples
    /// ```text
    /// "hello"
    /// 'item #1'
    /// ```
    String,

    /// Bare word: field names, and the boolean words `true` / `false`
    Identifier,

    /// Single punctuation character (`+`, `-`, `.`, ...)
    Symbol,

    /// Reference into the data context (`$name`, `$0`)
    Reference,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Integer => "Integer",
            TokenKind::Float => "Float",
            TokenKind::String => "String",
            TokenKind::Identifier => "Identifier",
            TokenKind::Symbol => "Symbol",
            TokenKind::Reference => "Reference",
        };
        f.write_str(name)
    }
}

/// A classified lexical unit.
///
/// `data` holds the payload the tokenizer extracted: the digits of a number,
/// the unescaped contents of a string, the name of a reference without its
/// `$`, or the character of a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub data: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, data: impl Into<String>, position: Position) -> Self {
        Token {
            kind,
            data: data.into(),
            position,
        }
    }

    /// True for a symbol token whose text is exactly `symbol`.
    pub fn is_symbol(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Symbol && self.data == symbol
    }

    /// True for the identifiers `true` and `false`.
    pub fn is_boolean(&self) -> bool {
        self.kind == TokenKind::Identifier && (self.data == "true" || self.data == "false")
    }

    /// Integer value of an [`TokenKind::Integer`] token.
    ///
    /// Returns `None` for other kinds and for integers outside the `i64` range.
    pub fn as_integer(&self) -> Option<i64> {
        match self.kind {
            TokenKind::Integer => self.data.parse().ok(),
            _ => None,
        }
    }

    /// Exact decimal value of a numeric token.
    ///
    /// # Examples
    /// ```
    /// use heluna::{Position, Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Float, "0.1", Position::default());
    /// assert_eq!(token.as_decimal().unwrap().to_string(), "0.1");
    /// ```
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self.kind {
            TokenKind::Integer | TokenKind::Float => self.data.parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::String => write!(f, "{:?}", self.data),
            TokenKind::Reference => write!(f, "${}", self.data),
            _ => f.write_str(&self.data),
        }
    }
}
