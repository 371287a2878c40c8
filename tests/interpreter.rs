use lotus::{
    ast::{tag, ParseNode},
    diagnostics::{DiagnosticKind, LotusError, SourceSpan},
    environment::Environment,
    parser, reader,
    runtime::{eval, Interpreter},
    stdlib::Builtin,
    value::Value,
};

fn eval_source(source: &str) -> Value {
    let mut interpreter = Interpreter::new();
    interpreter
        .eval_source(source)
        .expect("evaluation should succeed")
}

fn render(source: &str) -> String {
    eval_source(source).to_string()
}

fn eval_error(source: &str) -> LotusError {
    let mut interpreter = Interpreter::new();
    match interpreter.eval_source(source) {
        Ok(value) => panic!("expected diagnostic, received value {value}"),
        Err(err) => err,
    }
}

/// Reads a single expression without evaluating it: parses the source and
/// unwraps the one child of the program root.
fn read_expr(source: &str) -> Value {
    let root = parser::parse_program(source).expect("source should parse");
    match reader::read(&root) {
        Value::Sexpr(mut elements) if elements.len() == 1 => elements.remove(0),
        other => other,
    }
}

#[test]
fn evaluates_basic_arithmetic() {
    assert_eq!(render("(+ 1 2 3)"), "6");
}

#[test]
fn evaluates_nested_arithmetic() {
    assert_eq!(render("(+ 1 (* 7 5) 3)"), "39");
}

#[test]
fn bare_line_folds_as_one_expression() {
    assert_eq!(render("+ 1 2"), "3");
}

#[test]
fn lone_minus_argument_negates() {
    assert_eq!(render("(- 5)"), "-5");
}

#[test]
fn subtraction_folds_left_to_right() {
    assert_eq!(render("(- 10 1 2)"), "7");
}

#[test]
fn division_by_zero_is_an_error_value() {
    assert_eq!(render("(/ 1 0)"), "Error: division by zero");
}

#[test]
fn arithmetic_rejects_non_numbers() {
    assert_eq!(render("(+ 1 {})"), "Error: cannot operate on non-number");
}

#[test]
fn list_retags_arguments_as_qexpr() {
    assert_eq!(render("(list 1 2 3)"), "{1 2 3}");
}

#[test]
fn qexpr_does_not_auto_reduce() {
    let quoted = Value::qexpr(vec![
        Value::symbol("+"),
        Value::number(1),
        Value::number(2),
    ]);
    let mut env = Environment::new();
    assert_eq!(eval(&mut env, quoted.clone()), quoted);
}

#[test]
fn head_keeps_only_the_first_element() {
    assert_eq!(render("(head {1 2 3})"), "{1}");
}

#[test]
fn tail_drops_the_first_element() {
    assert_eq!(render("(tail {1 2 3})"), "{2 3}");
}

#[test]
fn head_of_empty_list_is_a_domain_error() {
    assert_eq!(render("(head {})"), "Error: head: empty list");
}

#[test]
fn tail_of_empty_list_is_a_domain_error() {
    assert_eq!(render("(tail {})"), "Error: tail: empty list");
}

#[test]
fn head_checks_argument_count() {
    assert_eq!(
        render("(head {1} {2})"),
        "Error: head: wrong number of arguments"
    );
}

#[test]
fn head_checks_argument_type() {
    assert_eq!(render("(head 1)"), "Error: head: incorrect type");
}

#[test]
fn join_concatenates_in_argument_order() {
    assert_eq!(render("(join {1 2} {3} {})"), "{1 2 3}");
}

#[test]
fn join_rejects_non_qexpr_arguments() {
    assert_eq!(render("(join {1} 2)"), "Error: join: incorrect type");
}

#[test]
fn len_counts_elements() {
    assert_eq!(render("(len {1 2 3})"), "3");
    assert_eq!(render("(len {})"), "0");
}

#[test]
fn join_of_head_and_tail_rebuilds_the_list() {
    assert_eq!(render("(join (head {1 2 3}) (tail {1 2 3}))"), "{1 2 3}");
}

#[test]
fn eval_builtin_re_enters_the_evaluator() {
    assert_eq!(render("(eval {+ 1 2})"), "3");
    assert_eq!(render("(eval (tail {tail tail {5 6 7}}))"), "{6 7}");
}

#[test]
fn eval_builtin_requires_a_qexpr() {
    assert_eq!(render("(eval 5)"), "Error: eval: incorrect type");
}

#[test]
fn first_error_wins_left_to_right() {
    assert_eq!(
        render("(+ 1 (/ 1 0) (head {}))"),
        "Error: division by zero"
    );
}

#[test]
fn unbound_symbol_is_reported_by_name() {
    assert_eq!(
        render("undefined_name"),
        "Error: unbound symbol: undefined_name"
    );
}

#[test]
fn empty_sexpr_evaluates_to_itself() {
    assert_eq!(render("()"), "()");
}

#[test]
fn single_element_sexpr_unwraps() {
    assert_eq!(render("(5)"), "5");
}

#[test]
fn non_function_head_is_a_dispatch_error() {
    assert_eq!(
        render("(1 2 3)"),
        "Error: S-expression does not start with a function"
    );
}

#[test]
fn oversized_literal_reads_as_invalid_number() {
    assert_eq!(render("99999999999999999999"), "Error: invalid number");
}

#[test]
fn builtins_render_as_opaque_tokens() {
    assert_eq!(render("+"), "<builtin +>");
    assert_eq!(render("head"), "<builtin head>");
}

#[test]
fn rendered_values_read_back_structurally_equal() {
    for source in [
        "42",
        "-7",
        "head",
        "(+ 1 (* 7 5) 3)",
        "{1 {2 3} sym -4}",
        "()",
        "{}",
        "(list (head {a b}) {})",
    ] {
        let value = read_expr(source);
        let rendered = value.to_string();
        assert_eq!(read_expr(&rendered), value, "round trip of `{source}`");
    }
}

#[test]
fn prelude_binds_every_builtin() {
    let interpreter = Interpreter::new();
    let env = interpreter.env();
    assert_eq!(env.len(), 10);
    for name in ["+", "-", "*", "/", "list", "head", "tail", "eval", "join", "len"] {
        let builtin = Builtin::from_name(name)
            .unwrap_or_else(|| panic!("`{name}` should name a builtin"));
        assert_eq!(env.get(name), Some(Value::function(builtin)));
    }
}

#[test]
fn custom_bindings_thread_through_evaluation() {
    let mut interpreter = Interpreter::new();
    interpreter.env_mut().define("answer", Value::number(42));
    assert!(interpreter.env().is_bound("answer"));
    let value = interpreter
        .eval_source("(+ answer 1)")
        .expect("evaluation should succeed");
    assert_eq!(value, Value::number(43));
}

#[test]
fn define_overwrites_previous_binding() {
    let mut env = Environment::new();
    env.define("x", Value::number(1));
    env.define("x", Value::number(2));
    assert_eq!(env.get("x"), Some(Value::number(2)));
    assert!(env.get("missing").is_none());
}

#[test]
fn bound_symbols_resolve_to_stored_copies() {
    let mut env = Environment::new();
    env.define("answer", Value::number(42));
    assert_eq!(eval(&mut env, Value::symbol("answer")), Value::number(42));
}

#[test]
fn unclosed_delimiter_is_a_parser_diagnostic() {
    let err = eval_error("(+ 1 2");
    match err {
        LotusError::Diagnostic(diag) => {
            assert_eq!(diag.kind, DiagnosticKind::Parser);
            assert!(diag.message.contains("unclosed"), "{}", diag.message);
        }
        other => panic!("expected diagnostic, found {other}"),
    }
}

#[test]
fn stray_closer_is_a_parser_diagnostic() {
    let err = eval_error("1)");
    match err {
        LotusError::Diagnostic(diag) => {
            assert_eq!(diag.kind, DiagnosticKind::Parser);
            assert!(diag.message.contains("stray"), "{}", diag.message);
        }
        other => panic!("expected diagnostic, found {other}"),
    }
}

#[test]
fn unexpected_character_is_a_lexer_diagnostic() {
    let err = eval_error("(+ 1 #)");
    match err {
        LotusError::Diagnostic(diag) => {
            assert_eq!(diag.kind, DiagnosticKind::Lexer);
            assert!(diag.message.contains('#'), "{}", diag.message);
        }
        other => panic!("expected diagnostic, found {other}"),
    }
}

#[test]
fn reader_flags_unrecognized_nodes() {
    let node = ParseNode::leaf("comment", ";", SourceSpan::new(0, 1));
    assert_eq!(reader::read(&node), Value::error("unknown node"));
}

#[test]
fn reader_skips_delimiter_leaves() {
    let span = SourceSpan::new(0, 5);
    let node = ParseNode::branch(
        tag::SEXPR,
        vec![
            ParseNode::leaf(tag::CHAR, "(", span),
            ParseNode::leaf(tag::NUMBER, "1", span),
            ParseNode::leaf(tag::NUMBER, "2", span),
            ParseNode::leaf(tag::CHAR, ")", span),
        ],
        span,
    );
    assert_eq!(
        reader::read(&node),
        Value::sexpr(vec![Value::number(1), Value::number(2)])
    );
}

#[test]
fn environment_stores_deep_copies() {
    let mut env = Environment::new();
    let list = Value::qexpr(vec![Value::number(1), Value::number(2)]);
    env.define("xs", list.clone());
    let first = env.get("xs").expect("xs is bound");
    let second = env.get("xs").expect("xs is bound");
    assert_eq!(first, list);
    assert_eq!(second, list);
}
