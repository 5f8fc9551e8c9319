//! Recursive-descent parser for Heluna expressions.
//!
//! ```text
//! Literal      = <Integer> | <Float> | <String> | <Boolean>
//! Boolean      = <Identifier "true"> | <Identifier "false">
//! Factor       = <Literal> | <Reference>
//! Term         = <Factor> (('*' | '/' | '%') <Term>)?
//! Reference    = '$' (<Integer> | <Identifier>) <ListAccessor>?
//! ListAccessor = '.' (<Integer> | <String> | <Identifier> | <Reference>) <ListAccessor>?
//! Expression   = '-'? <Term> (('+' | '-') <Expression>)*
//! ```
//!
//! Each rule returns `Ok(None)` when its pattern is not at the cursor, with the
//! cursor left where it was. Errors are only raised once a rule has consumed
//! an operator, a `.` or a leading `-` and the required continuation is missing.

use tracing::trace;

use crate::{
    ast::{BinOp, Expr, Token, TokenKind},
    cursor::TokenCursor,
    error::{ParseError, Result},
    lexer,
};

/// Deepest nesting of operators and accessors a single parse accepts.
pub const MAX_DEPTH: usize = 128;

pub struct Parser<'c> {
    cursor: &'c mut TokenCursor,
    depth: usize,
}

/// Operator spelled by a symbol token, restricted to one precedence level.
fn operator(token: &Token, level: fn(BinOp) -> bool) -> Option<BinOp> {
    if token.kind != TokenKind::Symbol {
        return None;
    }
    BinOp::from_symbol(&token.data).filter(|op| level(*op))
}

impl<'c> Parser<'c> {
    pub fn new(cursor: &'c mut TokenCursor) -> Self {
        Parser { cursor, depth: 0 }
    }

    fn too_deep(&self) -> ParseError {
        ParseError::parser("expression nests too deeply", self.cursor.peek().cloned())
    }

    /// Runs `rule` one nesting level deeper.
    fn nested<T>(&mut self, rule: fn(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_DEPTH {
            return Err(self.too_deep());
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    /// Literal = <Integer> | <Float> | <String> | <Boolean>
    fn parse_literal(&mut self) -> Option<Expr> {
        let token = self.cursor.next()?;
        match token.kind {
            TokenKind::Integer | TokenKind::Float | TokenKind::String => Some(Expr::Value(token)),
            TokenKind::Identifier if token.is_boolean() => Some(Expr::Value(token)),
            _ => {
                self.cursor.return_token();
                None
            }
        }
    }

    /// Factor = <Literal> | <Reference>
    fn parse_factor(&mut self) -> Result<Option<Expr>> {
        if let Some(literal) = self.parse_literal() {
            return Ok(Some(literal));
        }
        self.parse_reference()
    }

    fn parse_term(&mut self) -> Result<Option<Expr>> {
        self.nested(Self::term)
    }

    /// Term = <Factor> (('*' | '/' | '%') <Term>)?
    fn term(&mut self) -> Result<Option<Expr>> {
        let Some(left) = self.parse_factor()? else {
            return Ok(None);
        };

        let position = self.cursor.position();
        if let Some(token) = self.cursor.next()
            && let Some(op) = operator(&token, BinOp::is_multiplicative)
        {
            trace!(op = %op, at = %token.position, "term operator");
            let Some(right) = self.parse_term()? else {
                return Err(ParseError::parser(
                    "isolated operator at end of input",
                    Some(token),
                ));
            };
            return Ok(Some(Expr::Operator {
                op,
                token,
                left: Box::new(left),
                right: Box::new(right),
            }));
        }

        // Not followed by another term, keep only the factor
        self.cursor.set_position(position);
        Ok(Some(left))
    }

    /// Reference = '$' (<Integer> | <Identifier>) <ListAccessor>?
    fn parse_reference(&mut self) -> Result<Option<Expr>> {
        let Some(token) = self.cursor.next() else {
            return Ok(None);
        };
        if token.kind != TokenKind::Reference {
            self.cursor.return_token();
            return Ok(None);
        }
        self.attach_accessor(Expr::Reference(token)).map(Some)
    }

    /// ListAccessor = '.' (<Integer> | <String> | <Identifier> | <Reference>) <ListAccessor>?
    ///
    /// Wraps `expr` in as many accessors as follow it; each new accessor takes
    /// the previous result as its object.
    fn attach_accessor(&mut self, mut expr: Expr) -> Result<Expr> {
        let mut length = 0;
        while let Some(dot) = self.cursor.next() {
            if !dot.is_symbol(".") {
                self.cursor.return_token();
                break;
            }
            length += 1;
            if self.depth + length > MAX_DEPTH {
                return Err(ParseError::parser("expression nests too deeply", Some(dot)));
            }

            let value = self.cursor.require_next("list accessor missing value")?;
            trace!(key = %value, at = %dot.position, "list accessor");
            let key = match value.kind {
                TokenKind::Integer | TokenKind::String => Expr::Value(value),
                TokenKind::Identifier => Expr::Identifier(value),
                TokenKind::Reference => Expr::Reference(value),
                TokenKind::Float | TokenKind::Symbol => {
                    return Err(ParseError::parser("invalid list accessor", Some(value)));
                }
            };

            expr = Expr::Access {
                token: dot,
                object: Box::new(expr),
                key: Box::new(key),
            };
        }
        Ok(expr)
    }

    fn parse_expression(&mut self) -> Result<Option<Expr>> {
        self.nested(Self::expression)
    }

    /// Expression = '-'? <Term> (('+' | '-') <Expression>)*
    fn expression(&mut self) -> Result<Option<Expr>> {
        let Some(first) = self.cursor.next() else {
            return Ok(None);
        };

        let negation = if first.is_symbol("-") {
            if !self.cursor.has_next() {
                return Err(ParseError::parser(
                    "`-` is not a valid expression",
                    Some(first),
                ));
            }
            Some(first)
        } else {
            self.cursor.return_token();
            None
        };

        let Some(mut expr) = self.parse_term()? else {
            return Err(ParseError::parser(
                "expecting a valid Term to start expression",
                self.cursor.peek().cloned(),
            ));
        };

        while let Some(token) = self.cursor.next() {
            let Some(op) = operator(&token, BinOp::is_additive) else {
                self.cursor.return_token();
                break;
            };
            trace!(op = %op, at = %token.position, "expression operator");
            let Some(right) = self.parse_expression()? else {
                return Err(ParseError::parser("expecting expression", Some(token)));
            };
            expr = Expr::Operator {
                op,
                token,
                left: Box::new(expr),
                right: Box::new(right),
            };
        }

        if let Some(token) = negation {
            expr = Expr::Negate {
                token,
                operand: Box::new(expr),
            };
        }
        Ok(Some(expr))
    }

    /// Parse one expression starting at the cursor.
    ///
    /// Tokens after the expression are left unconsumed. Input nesting deeper
    /// than [`MAX_DEPTH`] is rejected with an error.
    #[tracing::instrument(skip_all, fields(token_count = self.cursor.remaining().len()))]
    pub fn parse(&mut self) -> Result<Expr> {
        if !self.cursor.has_next() {
            return Err(ParseError::parser("cannot parse an empty input", None));
        }
        match self.parse_expression()? {
            Some(expr) => Ok(expr),
            None => Err(ParseError::parser(
                "input must start with a valid expression",
                self.cursor.peek().cloned(),
            )),
        }
    }
}

/// Parse the expression at the start of `cursor`.
pub fn parse(cursor: &mut TokenCursor) -> Result<Expr> {
    Parser::new(cursor).parse()
}

/// Tokenize and parse `source`.
///
/// # Examples
/// ```
/// use heluna::{parse_text, ExprKind};
///
/// let expr = parse_text("$price * 2").unwrap();
/// assert_eq!(expr.kind(), ExprKind::Operator);
/// assert_eq!(expr.to_string(), "(* $price 2)");
/// ```
pub fn parse_text(source: &str) -> Result<Expr> {
    let mut cursor = lexer::tokenize_cursor(source)?;
    parse(&mut cursor)
}
