//! Text rendering for the `parse` and `tokens` commands

use crate::{Expr, Token, output};

/// How `heluna parse` prints a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One-line S-expression
    #[default]
    Tree,
    /// Compact JSON
    Json,
    /// Indented JSON
    JsonPretty,
}

pub fn render_ast(expr: &Expr, format: OutputFormat) -> String {
    match format {
        OutputFormat::Tree => expr.to_string(),
        OutputFormat::Json => output::to_json_string(expr),
        OutputFormat::JsonPretty => output::to_json_pretty(expr),
    }
}

/// One line per token: `line:column KIND data`
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| format!("{} {} {}", token.position, token.kind, token.data))
        .collect::<Vec<_>>()
        .join("\n")
}
