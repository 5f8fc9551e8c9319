//! # Heluna Expression Language - Abstract Syntax Tree
//!
//! This module defines the tokens and the Abstract Syntax Tree (AST) for Heluna,
//! a small expression language that computes values from literals and from
//! references into an external data context.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the tokenizer
//! - **[expressions]** - Expression nodes (values, references, access, operations)
//! - **[operators]** - Binary arithmetic operators
//!
//! ## Quick Start
//!
//! ```text
//! $order.items.0.price * 2 + $shipping
//! ```
//!
//! This expression doubles the price of the first order item and adds the
//! shipping cost.
//!
//! ## Core Concepts
//!
//! ### References and Accessors
//!
//! A reference starts with `$` and names a value in the data context. Dotted
//! accessors navigate into it:
//!
//! - **Integer keys** `$list.0` - index into a list
//! - **String keys** `$map."first name"` - keys with special characters
//! - **Identifier keys** `$user.name` - plain field names
//! - **Reference keys** `$table.$row` - keys computed from another reference
//!
//! Accessor chains nest to the left: `$a.1.2` is `($a.1).2`.
//!
//! ### Operator Chains
//!
//! Multiplicative operators (`*`, `/`, `%`) bind tighter than additive ones
//! (`+`, `-`). Both chains nest to the **right**:
//!
//! ```text
//! 3 * 11 * 42   =>   3 * (11 * 42)
//! 2 - 9 - 4     =>   2 - (9 - 4)
//! ```
//!
//! A leading `-` negates the whole expression that follows it:
//!
//! ```text
//! -2 + 3        =>   -(2 + 3)
//! ```
pub mod expressions;
pub mod operators;
pub mod tokens;

pub use expressions::{Expr, ExprKind};
pub use operators::BinOp;
pub use tokens::{Position, Token, TokenKind};
