//! Reference tokenizer for Heluna source text.
//!
//! The parser only depends on the [`Token`] stream; this module is the
//! tokenizer the text-level entry points use.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    ast::{Position, Token, TokenKind},
    cursor::TokenCursor,
    error::{ParseError, Result},
};

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+").expect("integer pattern is valid"));
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)?").expect("number pattern is valid"));

const SYMBOLS: &str = "+-*/%.,:()[]{}=<>!&|?";

pub struct Lexer<'a> {
    source: &'a str,
    /// Byte index into `source`
    index: usize,
    offset: usize,
    line: usize,
    column: usize,
    /// Set after a `.` symbol; numbers directly after it are accessor keys
    after_dot: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source,
            index: 0,
            offset: 0,
            line: 1,
            column: 1,
            after_dot: false,
        }
    }

    fn position(&self) -> Position {
        Position::new(self.offset, self.line, self.column)
    }

    fn rest(&self) -> &'a str {
        &self.source[self.index..]
    }

    fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.index += ch.len_utf8();
            self.offset += 1;
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else if ch == '#' {
                while let Some(ch) = self.current_char() {
                    if ch == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_digits(&mut self, pattern: &Regex) -> Option<String> {
        let text = pattern.find(self.rest())?.as_str().to_string();
        self.advance_by(text.len());
        Some(text)
    }

    fn read_string(&mut self, quote: char) -> Result<String> {
        let start = self.position();
        let mut result = String::new();
        self.advance(); // Consume opening quote

        while let Some(ch) = self.current_char() {
            match ch {
                c if c == quote => {
                    self.advance();
                    return Ok(result);
                }
                '\\' => {
                    let escape_at = self.position();
                    self.advance(); // Consume backslash
                    match self.current_char() {
                        Some('n') => result.push('\n'),
                        Some('t') => result.push('\t'),
                        Some('r') => result.push('\r'),
                        Some('"') => result.push('"'),
                        Some('\'') => result.push('\''),
                        Some('\\') => result.push('\\'),
                        Some(ch) => {
                            return Err(ParseError::tokenizer(
                                format!("invalid escape sequence: \\{}", ch),
                                escape_at,
                            ));
                        }
                        None => break,
                    }
                    self.advance();
                }
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        Err(ParseError::tokenizer(
            "unterminated string: missing closing quote",
            start,
        ))
    }

    fn read_reference(&mut self, start: Position) -> Result<Token> {
        self.advance(); // Consume '$'
        match self.current_char() {
            Some(ch) if ch.is_alphabetic() || ch == '_' => {
                let name = self.read_identifier();
                Ok(Token::new(TokenKind::Reference, name, start))
            }
            Some(ch) if ch.is_ascii_digit() => {
                let digits = self.read_digits(&INTEGER).unwrap_or_default();
                Ok(Token::new(TokenKind::Reference, digits, start))
            }
            _ => Err(ParseError::tokenizer("reference is missing a name", start)),
        }
    }

    fn read_number(&mut self, start: Position) -> Token {
        let pattern = if self.after_dot { &*INTEGER } else { &*NUMBER };
        let text = self.read_digits(pattern).unwrap_or_default();
        let kind = if text.contains('.') {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };
        Token::new(kind, text, start)
    }

    /// Next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        self.skip_whitespace_and_comments();

        let start = self.position();
        let token = match self.current_char() {
            None => return Ok(None),
            Some('$') => self.read_reference(start)?,
            Some(quote @ ('"' | '\'')) => {
                Token::new(TokenKind::String, self.read_string(quote)?, start)
            }
            Some(ch) if ch.is_ascii_digit() => self.read_number(start),
            Some(ch) if ch.is_alphabetic() || ch == '_' => {
                Token::new(TokenKind::Identifier, self.read_identifier(), start)
            }
            Some(ch) if SYMBOLS.contains(ch) => {
                self.advance();
                Token::new(TokenKind::Symbol, ch.to_string(), start)
            }
            Some(ch) => {
                return Err(ParseError::tokenizer(
                    format!("unexpected character '{}'", ch),
                    start,
                ));
            }
        };

        self.after_dot = token.is_symbol(".");
        Ok(Some(token))
    }

    /// Consume the whole input.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = vec![];
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}

/// Split `source` into tokens.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let tokens = Lexer::new(source).tokenize()?;
    tracing::trace!(token_count = tokens.len(), "tokenized");
    Ok(tokens)
}

/// Tokenize `source` and wrap the result in a cursor ready for parsing.
pub fn tokenize_cursor(source: &str) -> Result<TokenCursor> {
    Ok(TokenCursor::new(tokenize(source)?))
}

#[test]
fn test_accessor_numbers() {
    let tokens = tokenize("$foo.9.11.4").unwrap();
    let data: Vec<&str> = tokens.iter().map(|t| t.data.as_str()).collect();
    assert_eq!(data, vec!["foo", ".", "9", ".", "11", ".", "4"]);
    assert!(tokens[2..].iter().step_by(2).all(|t| t.kind == TokenKind::Integer));
}

#[test]
fn test_positions() {
    let tokens = tokenize("1 +\n  $x").unwrap();
    assert_eq!(tokens[0].position, Position::new(0, 1, 1));
    assert_eq!(tokens[1].position, Position::new(2, 1, 3));
    assert_eq!(tokens[2].position, Position::new(6, 2, 3));
}
