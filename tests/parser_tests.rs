// tests/parser_tests.rs

use heluna::ast::{BinOp, Expr, ExprKind, TokenKind};
use heluna::{ErrorOrigin, TokenCursor, parse, parse_text, tokenize};
use rstest::rstest;

/// Expected node: token text plus optional left/right children.
struct Node {
    v: String,
    l: Option<Box<Node>>,
    r: Option<Box<Node>>,
}

fn leaf(v: &str) -> Node {
    Node {
        v: v.to_string(),
        l: None,
        r: None,
    }
}

fn node(v: &str, l: Node, r: Node) -> Node {
    Node {
        v: v.to_string(),
        l: Some(Box::new(l)),
        r: Some(Box::new(r)),
    }
}

fn unary(v: &str, r: Node) -> Node {
    Node {
        v: v.to_string(),
        l: None,
        r: Some(Box::new(r)),
    }
}

fn assert_shape(expected: &Node, expr: &Expr) {
    assert_eq!(expr.token().data, expected.v, "node content mismatch in {}", expr);
    match (&expected.l, expr.left()) {
        (Some(l), Some(left)) => assert_shape(l, left),
        (None, None) => {}
        (l, left) => panic!("left child mismatch: expected {}, got {:?}", l.is_some(), left),
    }
    match (&expected.r, expr.right()) {
        (Some(r), Some(right)) => assert_shape(r, right),
        (None, None) => {}
        (r, right) => panic!("right child mismatch: expected {}, got {:?}", r.is_some(), right),
    }
}

// ============================================================================
// Literals
// ============================================================================

#[rstest]
#[case("42", "42", TokenKind::Integer)]
#[case("3.141592", "3.141592", TokenKind::Float)]
#[case("\"Hello World\"", "Hello World", TokenKind::String)]
#[case("'single'", "single", TokenKind::String)]
#[case("true", "true", TokenKind::Identifier)]
#[case("false", "false", TokenKind::Identifier)]
fn test_literal(#[case] source: &str, #[case] text: &str, #[case] kind: TokenKind) {
    let expr = parse_text(source).unwrap();
    assert_eq!(expr.kind(), ExprKind::Value);
    assert_eq!(expr.token().kind, kind);
    assert!(expr.is_leaf());
    assert_shape(&leaf(text), &expr);
}

#[test]
fn test_plain_identifier_is_not_an_expression() {
    let err = parse_text("foo").unwrap_err();
    assert_eq!(err.origin, ErrorOrigin::Parser);
    assert_eq!(err.message, "expecting a valid Term to start expression");
    assert_eq!(err.token.unwrap().data, "foo");
}

// ============================================================================
// Terms
// ============================================================================

#[rstest]
#[case("3*7", "*", "3", "7")]
#[case("4300 * 11", "*", "4300", "11")]
#[case("6.3 *5", "*", "6.3", "5")]
#[case("2/ 9", "/", "2", "9")]
#[case("2 %9", "%", "2", "9")]
fn test_simple_term(
    #[case] source: &str,
    #[case] op: &str,
    #[case] left: &str,
    #[case] right: &str,
) {
    let expr = parse_text(source).unwrap();
    assert_eq!(expr.kind(), ExprKind::Operator);
    assert_shape(&node(op, leaf(left), leaf(right)), &expr);
}

#[test]
fn test_operator_classification() {
    let expr = parse_text("2 % 9").unwrap();
    assert!(matches!(expr, Expr::Operator { op: BinOp::Modulo, .. }));
}

#[test]
fn test_missing_term() {
    let err = parse_text("3*").unwrap_err();
    assert_eq!(err.message, "isolated operator at end of input");
    let token = err.token.unwrap();
    assert_eq!(token.data, "*");
    assert_eq!(token.position.column, 2);
}

#[test]
fn test_chained_multiplication_nests_right() {
    let expr = parse_text("3 * 11*42").unwrap();
    assert_shape(&node("*", leaf("3"), node("*", leaf("11"), leaf("42"))), &expr);
}

#[test]
fn test_chained_multiplication_and_division() {
    let expr = parse_text("5 *11 /9").unwrap();
    assert_shape(&node("*", leaf("5"), node("/", leaf("11"), leaf("9"))), &expr);
}

// ============================================================================
// References and accessors
// ============================================================================

#[test]
fn test_reference() {
    let expr = parse_text("$foo").unwrap();
    assert_eq!(expr.kind(), ExprKind::Reference);
    assert_shape(&leaf("foo"), &expr);
}

#[test]
fn test_numeric_reference() {
    let expr = parse_text("$0").unwrap();
    assert_eq!(expr.kind(), ExprKind::Reference);
    assert_eq!(expr.token().data, "0");
}

#[test]
fn test_simple_accessor() {
    let expr = parse_text("$foo.9").unwrap();
    assert_eq!(expr.kind(), ExprKind::Access);
    assert_shape(&node(".", leaf("foo"), leaf("9")), &expr);
}

#[test]
fn test_string_accessor() {
    let expr = parse_text("$foo.\"bar\"").unwrap();
    assert_shape(&node(".", leaf("foo"), leaf("bar")), &expr);
    assert_eq!(expr.right().unwrap().kind(), ExprKind::Value);
}

#[test]
fn test_identifier_accessor() {
    let expr = parse_text("$user.name").unwrap();
    assert_shape(&node(".", leaf("user"), leaf("name")), &expr);
    assert_eq!(expr.right().unwrap().kind(), ExprKind::Identifier);
}

#[test]
fn test_reference_accessor() {
    let expr = parse_text("$foo.$bar").unwrap();
    assert_shape(&node(".", leaf("foo"), leaf("bar")), &expr);
    assert_eq!(expr.right().unwrap().kind(), ExprKind::Reference);
}

#[test]
fn test_reference_accessor_continues_outer_chain() {
    let expr = parse_text("$foo.$bar.1").unwrap();
    assert_shape(&node(".", node(".", leaf("foo"), leaf("bar")), leaf("1")), &expr);
    assert_eq!(expr.right().unwrap().kind(), ExprKind::Value);
    assert_eq!(expr.left().unwrap().right().unwrap().kind(), ExprKind::Reference);
}

#[test]
fn test_deep_accessor_nests_left() {
    let expr = parse_text("$foo.9.11.4").unwrap();
    assert_shape(
        &node(
            ".",
            node(".", node(".", leaf("foo"), leaf("9")), leaf("11")),
            leaf("4"),
        ),
        &expr,
    );
}

#[test]
fn test_accessor_missing_value() {
    let err = parse_text("$foo.").unwrap_err();
    assert_eq!(err.message, "list accessor missing value");
    assert_eq!(err.token.unwrap().data, ".");
}

#[rstest]
#[case("$foo.+")]
#[case("$foo.-1")]
#[case("$foo.(")]
fn test_invalid_accessor(#[case] source: &str) {
    let err = parse_text(source).unwrap_err();
    assert_eq!(err.origin, ErrorOrigin::Parser);
    assert_eq!(err.message, "invalid list accessor");
    assert_eq!(err.token.unwrap().kind, TokenKind::Symbol);
}

#[test]
fn test_float_accessor_is_invalid() {
    // Tokens built by hand: the tokenizer never yields a float after '.'
    let tokens = vec![
        heluna::Token::new(TokenKind::Reference, "foo", Default::default()),
        heluna::Token::new(TokenKind::Symbol, ".", Default::default()),
        heluna::Token::new(TokenKind::Float, "1.5", Default::default()),
    ];
    let err = parse(&mut TokenCursor::new(tokens)).unwrap_err();
    assert_eq!(err.message, "invalid list accessor");
}

#[test]
fn test_accessor_inside_term() {
    let expr = parse_text("$a.b * 2").unwrap();
    assert_shape(&node("*", node(".", leaf("a"), leaf("b")), leaf("2")), &expr);
}

// ============================================================================
// Expressions
// ============================================================================

#[test]
fn test_simple_addition() {
    let expr = parse_text("2+9").unwrap();
    assert_shape(&node("+", leaf("2"), leaf("9")), &expr);
    assert!(matches!(expr, Expr::Operator { op: BinOp::Add, .. }));
}

#[test]
fn test_simple_subtraction() {
    let expr = parse_text("2-9").unwrap();
    assert_shape(&node("-", leaf("2"), leaf("9")), &expr);
}

#[test]
fn test_subtraction_with_reference() {
    assert_shape(&node("-", leaf("foo"), leaf("9")), &parse_text("$foo-9").unwrap());
    assert_shape(&node("-", leaf("8"), leaf("foo")), &parse_text("8-$foo").unwrap());
}

#[test]
fn test_chained_subtraction_nests_right() {
    let expr = parse_text("2-9-4").unwrap();
    assert_shape(&node("-", leaf("2"), node("-", leaf("9"), leaf("4"))), &expr);
}

#[test]
fn test_negation() {
    let expr = parse_text("-9").unwrap();
    assert!(matches!(expr, Expr::Negate { .. }));
    assert_eq!(expr.kind(), ExprKind::Operator);
    assert_shape(&unary("-", leaf("9")), &expr);
}

#[test]
fn test_negation_wraps_whole_chain() {
    let expr = parse_text("-2+3").unwrap();
    assert_shape(&unary("-", node("+", leaf("2"), leaf("3"))), &expr);
}

#[test]
fn test_addition_and_multiplication() {
    let expr = parse_text("2+9*4").unwrap();
    assert_shape(&node("+", leaf("2"), node("*", leaf("9"), leaf("4"))), &expr);
}

#[test]
fn test_multiplication_then_addition() {
    let expr = parse_text("2*9+4").unwrap();
    assert_shape(&node("+", node("*", leaf("2"), leaf("9")), leaf("4")), &expr);
}

#[test]
fn test_lone_negation() {
    let err = parse_text("-").unwrap_err();
    assert_eq!(err.message, "`-` is not a valid expression");
    assert_eq!(err.token.unwrap().data, "-");
}

#[test]
fn test_negation_without_operand() {
    let err = parse_text("- *").unwrap_err();
    assert_eq!(err.message, "expecting a valid Term to start expression");
    assert_eq!(err.token.unwrap().data, "*");
}

#[test]
fn test_dangling_addition() {
    let err = parse_text("2+").unwrap_err();
    assert_eq!(err.message, "expecting expression");
    assert_eq!(err.token.unwrap().data, "+");
}

#[test]
fn test_addition_followed_by_garbage() {
    let err = parse_text("2+*").unwrap_err();
    assert_eq!(err.message, "expecting a valid Term to start expression");
}

// ============================================================================
// Top level
// ============================================================================

#[test]
fn test_empty_input() {
    let err = parse_text("").unwrap_err();
    assert_eq!(err.origin, ErrorOrigin::Parser);
    assert_eq!(err.message, "cannot parse an empty input");
    assert!(err.token.is_none());
}

#[test]
fn test_whitespace_only_input() {
    let err = parse_text("   # just a comment\n").unwrap_err();
    assert_eq!(err.message, "cannot parse an empty input");
}

#[test]
fn test_unclosed_string() {
    let err = parse_text("\"Hello World").unwrap_err();
    assert_eq!(err.origin, ErrorOrigin::Tokenizer);
}

#[test]
fn test_parse_leaves_trailing_tokens() {
    let mut cursor = TokenCursor::new(tokenize("1 + 2 )").unwrap());
    let expr = parse(&mut cursor).unwrap();
    assert_eq!(expr.to_string(), "(+ 1 2)");
    assert_eq!(cursor.remaining().len(), 1);
    assert_eq!(cursor.remaining()[0].data, ")");
}

#[test]
fn test_parse_is_deterministic() {
    let source = "-$order.items.$i.price * 2 + 'x' % 3 - 1";
    assert_eq!(parse_text(source).unwrap(), parse_text(source).unwrap());
}

// ============================================================================
// Nesting limits
// ============================================================================

#[test]
fn test_long_additive_chain_is_rejected() {
    let source = vec!["1"; 5000].join("+");
    let err = parse_text(&source).unwrap_err();
    assert_eq!(err.origin, ErrorOrigin::Parser);
    assert_eq!(err.message, "expression nests too deeply");
    assert!(err.token.is_some());
}

#[test]
fn test_long_multiplicative_chain_is_rejected() {
    let source = vec!["2"; 5000].join(" * ");
    let err = parse_text(&source).unwrap_err();
    assert_eq!(err.message, "expression nests too deeply");
}

#[test]
fn test_long_accessor_chain_is_rejected() {
    let source = format!("$a{}", ".1".repeat(200_000));
    let err = parse_text(&source).unwrap_err();
    assert_eq!(err.message, "expression nests too deeply");
    assert_eq!(err.token.unwrap().data, ".");
}

#[test]
fn test_chain_within_limit_parses() {
    let source = vec!["1"; 100].join("+");
    let expr = parse_text(&source).unwrap();
    assert_eq!(expr.token().data, "+");

    let source = format!("$a{}", ".1".repeat(100));
    assert_eq!(parse_text(&source).unwrap().kind(), ExprKind::Access);
}
