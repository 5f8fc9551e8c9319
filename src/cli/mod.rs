//! CLI support for heluna
//!
//! Provides programmatic access to the `heluna` command line operations so
//! other tools can embed them.

mod check;
mod render;

pub use check::{CheckOptions, CheckResult, execute_check};
pub use render::{OutputFormat, render_ast, render_tokens};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Tokenizer or parser error
    #[error("{0}")]
    Parse(#[from] crate::ParseError),
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// No source provided
    #[error("No source provided. Pass an expression or pipe it to stdin.")]
    NoInput,
}
