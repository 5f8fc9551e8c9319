use crate::ast::{BinOp, Token};

/// Tag identifying the shape of an expression node.
///
/// The parser only produces `Value`, `Operator`, `Identifier`, `Reference`
/// and `Access`. The remaining tags are reserved for grammar extensions
/// (function calls, conditionals, loops, list literals and `with` blocks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprKind {
    Value,
    Operator,
    Function,
    Identifier,
    Boolean,
    List,
    Evaluate,
    Label,
    Reference,
    FunctionDefinition,
    If,
    Access,
    For,
    With,
    Nothing,
}

impl ExprKind {
    pub fn name(self) -> &'static str {
        match self {
            ExprKind::Value => "value",
            ExprKind::Operator => "operator",
            ExprKind::Function => "function",
            ExprKind::Identifier => "identifier",
            ExprKind::Boolean => "boolean",
            ExprKind::List => "list",
            ExprKind::Evaluate => "evaluate",
            ExprKind::Label => "label",
            ExprKind::Reference => "reference",
            ExprKind::FunctionDefinition => "function_definition",
            ExprKind::If => "if",
            ExprKind::Access => "access",
            ExprKind::For => "for",
            ExprKind::With => "with",
            ExprKind::Nothing => "nothing",
        }
    }
}

/// Abstract Syntax Tree node representing a parsed expression.
///
/// Every node keeps the token it was built from, so later stages can point
/// at the source when reporting problems.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal integer, float, string or boolean
    ///
    /// # Example
    /// ```text
    /// 42
    /// "hello"
    /// true
    /// ```
    Value(Token),

    /// Bare identifier used as an accessor key
    ///
    /// # Example
    /// ```text
    /// $user.name      // Identifier(name)
    /// ```
    Identifier(Token),

    /// Reference into the data context
    ///
    /// # Example
    /// ```text
    /// $foo
    /// $0
    /// ```
    Reference(Token),

    /// Binary arithmetic operation
    Operator {
        op: BinOp,
        token: Token,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Unary negation (`-expr`)
    Negate { token: Token, operand: Box<Expr> },

    /// Dotted accessor
    ///
    /// # Examples
    /// ```text
    /// $foo.9
    /// $foo."bar"
    /// $foo.$bar
    /// ```
    Access {
        token: Token,
        object: Box<Expr>,
        key: Box<Expr>,
    },
}

impl Expr {
    pub fn kind(&self) -> ExprKind {
        match self {
            Expr::Value(_) => ExprKind::Value,
            Expr::Identifier(_) => ExprKind::Identifier,
            Expr::Reference(_) => ExprKind::Reference,
            Expr::Operator { .. } | Expr::Negate { .. } => ExprKind::Operator,
            Expr::Access { .. } => ExprKind::Access,
        }
    }

    /// The token this node was built from.
    pub fn token(&self) -> &Token {
        match self {
            Expr::Value(token) | Expr::Identifier(token) | Expr::Reference(token) => token,
            Expr::Operator { token, .. } | Expr::Negate { token, .. } | Expr::Access { token, .. } => {
                token
            }
        }
    }

    /// Left child: the left operand of a binary operator, or the object of an
    /// accessor. Negation has no left child.
    pub fn left(&self) -> Option<&Expr> {
        match self {
            Expr::Operator { left, .. } => Some(left),
            Expr::Access { object, .. } => Some(object),
            _ => None,
        }
    }

    /// Right child: the right operand, the negated operand, or the accessor key.
    pub fn right(&self) -> Option<&Expr> {
        match self {
            Expr::Operator { right, .. } => Some(right),
            Expr::Negate { operand, .. } => Some(operand),
            Expr::Access { key, .. } => Some(key),
            _ => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Expr::Value(_) | Expr::Identifier(_) | Expr::Reference(_))
    }
}
