use std::fs;

use numscript::{
    error::{Error, ParseError, RuntimeError},
    interpreter::{lexer::TokenKind, store::VariableStore, value::Value},
    run,
};
use walkdir::WalkDir;

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in WalkDir::new("tests/scripts").into_iter()
                                              .filter_map(Result::ok)
                                              .filter(|e| {
                                                  e.path().extension().is_some_and(|ext| ext == "ns")
                                              })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        count += 1;

        let expected_error = directives(&content, "// expect-error:");
        match (run(&content), expected_error.first()) {
            (Ok(variables), None) => {
                let mut expected = directives(&content, "// expect:");
                expected.sort();
                assert_eq!(report(&variables), expected, "unexpected variables in {path:?}");
            },
            (Err(e), Some(message)) => {
                assert!(e.to_string().contains(message.as_str()),
                        "{path:?} failed with '{e}', expected '{message}'");
            },
            (Ok(_), Some(message)) => panic!("{path:?} succeeded, expected '{message}'"),
            (Err(e), None) => panic!("{path:?} failed:\n{content}\nError: {e:?}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn directives(content: &str, prefix: &str) -> Vec<String> {
    content.lines()
           .filter_map(|line| line.trim().strip_prefix(prefix))
           .map(|rest| rest.trim().to_string())
           .collect()
}

fn report(variables: &VariableStore) -> Vec<String> {
    variables.sorted()
             .into_iter()
             .map(|(name, value)| format!("{name} = {value} ({})", value.type_name()))
             .collect()
}

fn assert_success(src: &str) -> VariableStore {
    run(src).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

fn assert_failure(src: &str) -> Error {
    match run(src) {
        Ok(variables) => panic!("Script succeeded but was expected to fail: {variables:?}"),
        Err(e) => e,
    }
}

fn value_of(src: &str, name: &str) -> Value {
    assert_success(src).get(name)
                       .unwrap_or_else(|| panic!("'{name}' was not assigned"))
}

#[test]
fn assignment_round_trip() {
    let variables = assert_success("{ var x = 5; var y = x + 1; }");
    assert_eq!(variables.get("x"), Some(Value::Integer(5)));
    assert_eq!(variables.get("y"), Some(Value::Integer(6)));
    assert_eq!(variables.len(), 2);
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(value_of("{ var r = 2 + 3 * 4; }", "r"), Value::Integer(14));
    assert_eq!(value_of("{ var r = (2 + 3) * 4; }", "r"), Value::Integer(20));
    assert_eq!(value_of("{ var r = 8 - 6 / 3; }", "r"), Value::Integer(6));
}

#[test]
fn binary_operators_are_left_associative() {
    assert_eq!(value_of("{ var r = 10 - 3 - 2; }", "r"), Value::Integer(5));
    assert_eq!(value_of("{ var r = 100 / 10 / 5; }", "r"), Value::Integer(2));
    assert_eq!(value_of("{ var r = 17 % 10 % 4; }", "r"), Value::Integer(3));
}

#[test]
fn integer_and_float_promotion() {
    assert_eq!(value_of("{ var r = 1 + 2; }", "r"), Value::Integer(3));
    assert_eq!(value_of("{ var r = 3 + 2.5; }", "r"), Value::Float(5.5));
    assert_eq!(value_of("{ var r = 2.5 + 3; }", "r"), Value::Float(5.5));
    assert_eq!(value_of("{ var r = 7.0 / 2; }", "r"), Value::Float(3.5));
    assert_eq!(value_of("{ var r = 1.5 * 2.0; }", "r"), Value::Float(3.0));
}

#[test]
fn integer_division_truncates_toward_zero() {
    assert_eq!(value_of("{ var r = 7 / 2; }", "r"), Value::Integer(3));
    assert_eq!(value_of("{ var r = -7 / 2; }", "r"), Value::Integer(-3));
    assert_eq!(value_of("{ var r = 7 % -3; }", "r"), Value::Integer(1));
    assert_eq!(value_of("{ var r = -7 % 3; }", "r"), Value::Integer(-1));
}

#[test]
fn integer_arithmetic_wraps() {
    assert_eq!(value_of("{ var r = 9223372036854775807 + 1; }", "r"),
               Value::Integer(i64::MIN));
    assert_eq!(value_of("{ var m = -9223372036854775807 - 1; var r = m / -1; }", "r"),
               Value::Integer(i64::MIN));
    assert_eq!(value_of("{ var m = -9223372036854775807 - 1; var r = m % -1; }", "r"),
               Value::Integer(0));
}

#[test]
fn float_division_by_zero_is_ieee() {
    assert_eq!(value_of("{ var r = 1.0 / 0; }", "r"), Value::Float(f64::INFINITY));
    assert_eq!(value_of("{ var r = -1 / 0.0; }", "r"), Value::Float(f64::NEG_INFINITY));
    match value_of("{ var r = 0.0 / 0.0; }", "r") {
        Value::Float(x) => assert!(x.is_nan()),
        other => panic!("expected a float, found {other:?}"),
    }
}

#[test]
fn sign_chains() {
    assert_eq!(value_of("{ var r = --5; }", "r"), Value::Integer(5));
    assert_eq!(value_of("{ var r = -+5; }", "r"), Value::Integer(-5));
    assert_eq!(value_of("{ var r = +-3; }", "r"), Value::Integer(-3));
    assert_eq!(value_of("{ var r = ---2.5; }", "r"), Value::Float(-2.5));
    assert_eq!(value_of("{ var r = -(2 - 5); }", "r"), Value::Integer(3));
}

#[test]
fn grouped_assignments_run_in_order() {
    let variables = assert_success("{ var ( a = 1; b = a + 1; a = b * 10; ) }");
    assert_eq!(variables.get("a"), Some(Value::Integer(20)));
    assert_eq!(variables.get("b"), Some(Value::Integer(2)));
}

#[test]
fn empty_group_and_empty_program() {
    assert!(assert_success("{ var ( ) }").is_empty());
    assert!(assert_success("{ }").is_empty());
    assert!(assert_success("{ ; ; { } }").is_empty());
}

#[test]
fn reassignment_replaces_type() {
    let variables = assert_success("{ var x = 1.5; var x = 2; }");
    assert_eq!(variables.get("x"), Some(Value::Integer(2)));
}

#[test]
fn nested_blocks_share_one_store() {
    let variables = assert_success("{ { var inner = 1; } var outer = inner + 1; }");
    assert_eq!(variables.get("outer"), Some(Value::Integer(2)));
}

#[test]
fn comments_are_ignored() {
    let src = "{ // leading\n var /* inline */ x = 1 /* x */ + 2; /* multi\nline */ }";
    assert_eq!(value_of(src, "x"), Value::Integer(3));
}

#[test]
fn unterminated_block_comment_ends_input() {
    let variables = assert_success("{ var x = 1; } /* never closed");
    assert_eq!(variables.get("x"), Some(Value::Integer(1)));

    let e = assert_failure("{ var x = 1; /* never closed }");
    assert!(matches!(e,
                     Error::Parse(ParseError::UnexpectedStatement { found: TokenKind::Eof, .. })));
}

#[test]
fn undefined_variable_is_error() {
    let e = assert_failure("{ var z = w + 1; }");
    assert_eq!(e,
               Error::Runtime(RuntimeError::UndefinedVariable { name: "w".into(),
                                                                line: 1, }));
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(assert_failure("{ var x = 1 / 0; }"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(assert_failure("{ var x = 7 % 0; }"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
}

#[test]
fn float_modulo_is_type_error() {
    assert!(matches!(assert_failure("{ var x = 7.5 % 2; }"),
                     Error::Runtime(RuntimeError::TypeError { .. })));
    assert!(matches!(assert_failure("{ var x = 7 % 2.0; }"),
                     Error::Runtime(RuntimeError::TypeError { .. })));
}

#[test]
fn malformed_literals_are_errors() {
    for src in ["{ var x = 08; }", "{ var x = 0b102; }", "{ var x = 1.2.3; }", "{ var x = 0x; }"] {
        assert!(matches!(assert_failure(src),
                         Error::Runtime(RuntimeError::InvalidLiteral { .. })),
                "{src}");
    }
}

#[test]
fn syntax_errors() {
    assert_failure("var x = 1;");
    assert_failure("{ var x = 1 }");
    assert_failure("{ var x 1; }");
    assert_failure("{ var 1 = x; }");
    assert_failure("{ var x = (1 + 2; }");
    assert_failure("{ x = 1; }");
    assert_failure("{ var x = 1; } }");
    assert_failure("{ var ( x = 1; }");
}

#[test]
fn failed_run_reports_line() {
    let e = assert_failure("{\n  var a = 1;\n  var b = a / 0;\n}");
    assert!(e.to_string().starts_with("Error on line 3:"), "{e}");
}

#[test]
fn independent_runs_do_not_share_variables() {
    assert_success("{ var shared = 1; }");
    assert_failure("{ var x = shared; }");
}
