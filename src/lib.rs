pub mod ast;
pub mod cli;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod output;
pub mod parser;

pub use ast::{BinOp, Expr, ExprKind, Position, Token, TokenKind};
pub use cursor::TokenCursor;
pub use error::{ErrorOrigin, ParseError};
pub use lexer::{Lexer, tokenize, tokenize_cursor};
pub use output::{to_json, to_json_pretty};
pub use parser::{Parser, parse, parse_text};
