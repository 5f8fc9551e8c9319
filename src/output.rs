//! Rendering of parsed expressions.
//!
//! This module provides two views of an [`Expr`] tree:
//!
//! - **S-expressions** via the [`Display`](std::fmt::Display) impl - compact,
//!   one line, handy in tests and diagnostics
//! - **JSON** via [`to_json()`] and [`to_json_pretty()`] - the full node shape
//!   with kinds and source positions, for tools consuming the tree
//!
//! # Examples
//!
//! ```
//! use heluna::parse_text;
//! use heluna::output::to_json;
//!
//! let expr = parse_text("-$foo.9").unwrap();
//! assert_eq!(expr.to_string(), "(- (. $foo 9))");
//!
//! let json = to_json(&expr);
//! assert_eq!(json["kind"], "operator");
//! assert_eq!(json["right"]["kind"], "access");
//! ```

use std::fmt;

use serde_json::{Map, Number, Value, json};

use crate::ast::{Expr, Token, TokenKind};

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Value(token) if token.kind == TokenKind::String => {
                write!(f, "{:?}", token.data)
            }
            Expr::Value(token) | Expr::Identifier(token) => f.write_str(&token.data),
            Expr::Reference(token) => write!(f, "${}", token.data),
            Expr::Operator {
                op, left, right, ..
            } => write!(f, "({} {} {})", op, left, right),
            Expr::Negate { operand, .. } => write!(f, "(- {})", operand),
            Expr::Access { object, key, .. } => write!(f, "(. {} {})", object, key),
        }
    }
}

fn token_to_json(token: &Token) -> Value {
    let mut value = json!({
        "kind": token.kind.to_string(),
        "data": token.data,
        "line": token.position.line,
        "column": token.position.column,
    });
    if let Some(number) = token_number(token) {
        value["value"] = Value::Number(number);
    }
    value
}

/// Numeric value of an integer or float literal.
fn token_number(token: &Token) -> Option<Number> {
    match token.kind {
        TokenKind::Integer => token.as_integer().map(Number::from),
        TokenKind::Float => token.as_decimal()?.normalize().to_string().parse().ok(),
        _ => None,
    }
}

/// Convert an expression tree to a JSON value.
///
/// Each node becomes an object with `kind` and `token`, plus `left` and
/// `right` when the node has those children.
pub fn to_json(expr: &Expr) -> Value {
    let mut node = Map::new();
    node.insert("kind".to_string(), Value::from(expr.kind().name()));
    node.insert("token".to_string(), token_to_json(expr.token()));
    if let Some(left) = expr.left() {
        node.insert("left".to_string(), to_json(left));
    }
    if let Some(right) = expr.right() {
        node.insert("right".to_string(), to_json(right));
    }
    Value::Object(node)
}

/// Convert an expression tree to compact JSON text.
pub fn to_json_string(expr: &Expr) -> String {
    to_json(expr).to_string()
}

/// Convert an expression tree to JSON text with 2-space indentation.
pub fn to_json_pretty(expr: &Expr) -> String {
    serde_json::to_string_pretty(&to_json(expr)).unwrap_or_default()
}
