//! Validate heluna expressions

use super::CliError;
use crate::{Expr, Token, lexer, parser};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The Heluna source to check
    pub source: Option<String>,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// The whole source is one valid expression
    Valid(Expr),
    /// A valid expression followed by tokens the grammar does not consume
    TrailingInput { expr: Expr, trailing: Vec<Token> },
}

impl CheckResult {
    pub fn expr(&self) -> &Expr {
        match self {
            CheckResult::Valid(expr) | CheckResult::TrailingInput { expr, .. } => expr,
        }
    }
}

/// Execute a heluna check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let source = options.source.as_deref().ok_or(CliError::NoInput)?;

    let mut cursor = lexer::tokenize_cursor(source)?;
    let expr = parser::parse(&mut cursor)?;

    let trailing = cursor.remaining().to_vec();
    if trailing.is_empty() {
        Ok(CheckResult::Valid(expr))
    } else {
        tracing::warn!(
            count = trailing.len(),
            at = %trailing[0].position,
            "input continues after the expression"
        );
        Ok(CheckResult::TrailingInput { expr, trailing })
    }
}
