use numscript::{
    ast::{BinaryOperator, Node, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::Context,
        lexer::{Token, TokenKind},
        store::VariableStore,
        value::Value,
    },
};

fn literal(kind: TokenKind, text: &str) -> Node {
    Node::NumberLiteral { token: Token::new(kind, text, 1) }
}

fn assign(target: &str, value: Node) -> Node {
    Node::Assignment { target: target.into(),
                       value:  Box::new(value),
                       line:   1, }
}

fn var(name: &str) -> Node {
    Node::VariableRef { name: name.into(),
                        line: 1, }
}

#[test]
fn radix_literals() {
    let cases = [("0x1F", 31), ("0o17", 15), ("0b101", 5), ("017", 15), ("17", 17), ("0", 0)];
    for (text, expected) in cases {
        let token = Token::new(TokenKind::Integer, text, 1);
        assert_eq!(Context::eval_number_literal(&token).unwrap(),
                   Value::Integer(expected),
                   "{text}");
    }
}

#[test]
fn invalid_literal_names_the_text() {
    let token = Token::new(TokenKind::Integer, "09", 4);
    assert_eq!(Context::eval_number_literal(&token).unwrap_err(),
               RuntimeError::InvalidLiteral { literal: "09".into(),
                                              line:    4, });
}

#[test]
fn statements_evaluate_to_unknown() {
    let mut context = Context::new();
    assert_eq!(context.eval(&Node::NoOp).unwrap(), Value::Unknown);
    assert_eq!(context.eval(&assign("x", literal(TokenKind::Integer, "1"))).unwrap(),
               Value::Unknown);
    assert_eq!(context.eval(&Node::Block { statements: vec![] }).unwrap(),
               Value::Unknown);
    assert_eq!(context.eval(&var("x")).unwrap(), Value::Integer(1));
}

#[test]
fn statement_in_operand_position_is_internal_error() {
    let node = Node::BinaryOp { left:  Box::new(literal(TokenKind::Integer, "1")),
                                op:    BinaryOperator::Add,
                                right: Box::new(Node::NoOp),
                                line:  2, };
    assert!(matches!(Context::new().eval(&node),
                     Err(RuntimeError::InternalInvariant { line: 2, .. })));

    let node = Node::UnaryOp { op:      UnaryOperator::Negate,
                               operand: Box::new(Node::Block { statements: vec![] }),
                               line:    3, };
    assert!(matches!(Context::new().eval(&node),
                     Err(RuntimeError::InternalInvariant { line: 3, .. })));

    let node = assign("x", assign("y", literal(TokenKind::Integer, "1")));
    assert!(matches!(Context::new().eval(&node),
                     Err(RuntimeError::InternalInvariant { .. })));
}

#[test]
fn unknown_operands_are_rejected_by_binary_dispatch() {
    assert!(matches!(Context::eval_binary(BinaryOperator::Add, Value::Unknown, Value::Integer(1), 1),
                     Err(RuntimeError::InternalInvariant { .. })));
    assert!(matches!(Context::eval_binary(BinaryOperator::Mul, Value::Float(1.0), Value::Unknown, 1),
                     Err(RuntimeError::InternalInvariant { .. })));
}

#[test]
fn left_operand_is_evaluated_first() {
    let node = Node::BinaryOp { left:  Box::new(var("first")),
                                op:    BinaryOperator::Add,
                                right: Box::new(var("second")),
                                line:  1, };
    assert_eq!(Context::new().eval(&node).unwrap_err(),
               RuntimeError::UndefinedVariable { name: "first".into(),
                                                 line: 1, });
}

#[test]
fn failed_block_keeps_earlier_assignments() {
    let program = Node::Block { statements: vec![assign("a", literal(TokenKind::Integer, "1")),
                                                 assign("b", var("missing")),
                                                 assign("c", literal(TokenKind::Integer, "3"))], };
    let mut context = Context::new();
    assert!(context.interpret(&program).is_err());
    assert_eq!(context.variables().get("a"), Some(Value::Integer(1)));
    assert!(!context.variables().contains("b"));
    assert!(!context.variables().contains("c"));
}

#[test]
fn context_can_continue_from_a_store() {
    let mut store = VariableStore::new();
    store.set("seed", Value::Float(0.5));

    let mut context = Context::with_variables(store);
    let program = assign("doubled",
                         Node::BinaryOp { left:  Box::new(var("seed")),
                                          op:    BinaryOperator::Mul,
                                          right: Box::new(literal(TokenKind::Integer, "2")),
                                          line:  1, });
    context.interpret(&program).unwrap();

    let variables = context.into_variables();
    assert_eq!(variables.get("doubled"), Some(Value::Float(1.0)));
    assert_eq!(variables.len(), 2);
}

#[test]
fn float_and_integer_paths() {
    assert_eq!(Context::eval_integer_op(BinaryOperator::Sub, i64::MIN, 1, 1).unwrap(),
               i64::MAX);
    assert_eq!(Context::eval_float_op(BinaryOperator::Div, 1.0, 4.0, 1).unwrap(), 0.25);
    assert!(matches!(Context::eval_float_op(BinaryOperator::Mod, 1.0, 4.0, 1),
                     Err(RuntimeError::TypeError { .. })));
    assert_eq!(Context::eval_integer_op(BinaryOperator::Div, 1, 0, 9).unwrap_err(),
               RuntimeError::DivisionByZero { op:   BinaryOperator::Div,
                                              line: 9, });
}

#[test]
fn negation_keeps_type() {
    assert_eq!(Context::eval_unary(UnaryOperator::Negate, Value::Integer(i64::MIN)),
               Value::Integer(i64::MIN));
    assert_eq!(Context::eval_unary(UnaryOperator::Negate, Value::Float(0.0)),
               Value::Float(-0.0));
    assert_eq!(Context::eval_unary(UnaryOperator::Plus, Value::Integer(-4)),
               Value::Integer(-4));
}

#[test]
fn store_iteration_covers_every_variable() {
    let mut store = VariableStore::new();
    assert!(store.is_empty());
    assert_eq!(store.set("x", Value::Integer(1)), None);
    assert_eq!(store.set("x", Value::Float(2.0)), Some(Value::Integer(1)));
    store.set("y", Value::Integer(3));

    let mut names: Vec<_> = store.iter().map(|(name, _)| name).collect();
    names.sort_unstable();
    assert_eq!(names, ["x", "y"]);
    assert_eq!(store.sorted(),
               [("x", Value::Float(2.0)), ("y", Value::Integer(3))]);
}
