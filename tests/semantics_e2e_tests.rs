/// End-to-end tests running the same programs through all three strategies
/// Demonstrates: big-step, small-step and compiled closures agreeing
use simplesem::compiler::{compile_expression, compile_statement};
use simplesem::{
    evaluate_expression, evaluate_statement, CompiledMachine, Environment, Error, Expression,
    ExpressionMachine, Machine, Outcome, Statement, StatementMachine, Value,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn num(n: i64) -> Expression {
    Expression::number(n)
}

fn var(name: &str) -> Expression {
    Expression::variable(name)
}

fn env_of(pairs: &[(&str, i64)]) -> Environment {
    pairs
        .iter()
        .map(|(name, n)| (*name, Value::Number(*n)))
        .collect()
}

fn sequence_program() -> Statement {
    Statement::sequence(
        Statement::assign("x", Expression::add(num(1), num(1))),
        Statement::assign("y", Expression::multiply(num(2), var("x"))),
    )
}

fn tripling_loop() -> Statement {
    Statement::while_loop(
        Expression::less_than(var("x"), num(5)),
        Statement::assign("x", Expression::multiply(var("x"), num(3))),
    )
}

#[test]
fn test_e2e_arithmetic_trace() {
    init_tracing();

    let expr = Expression::add(
        Expression::multiply(num(1), num(2)),
        Expression::multiply(num(3), num(4)),
    );

    let mut machine = ExpressionMachine::new(expr);
    let lines = machine.trace().unwrap();

    assert_eq!(
        lines,
        vec![
            "<<<1> * <2>> + <<3> * <4>>>",
            "<<2> + <<3> * <4>>>",
            "<<2> + <12>>",
            "<14>",
        ]
    );
}

#[test]
fn test_e2e_arithmetic_all_strategies() {
    let expr = Expression::add(
        Expression::multiply(num(1), num(2)),
        Expression::multiply(num(3), num(4)),
    );
    let env = Environment::new();

    let big = evaluate_expression(&expr, &env).unwrap();

    let mut machine = ExpressionMachine::with_env(expr.clone(), env.clone());
    machine.run_with(|_| {}).unwrap();
    let small = machine.value().unwrap();

    let compiled = compile_expression(&expr).call(&env).unwrap();

    assert_eq!(big, Value::Number(14));
    assert_eq!(small, big);
    assert_eq!(compiled, big);
}

#[test]
fn test_e2e_sequence_composition() {
    init_tracing();

    let program = sequence_program();
    let expected = env_of(&[("x", 2), ("y", 4)]);

    let big = evaluate_statement(&program, &Environment::new()).unwrap();
    assert_eq!(big, expected);

    let mut machine = StatementMachine::new(program.clone());
    let lines = machine.trace().unwrap();
    assert_eq!(machine.env(), &expected);
    assert_eq!(
        lines,
        vec![
            "<<x = <<1> + <1>>>; <y = <<2> * <x>>>>",
            "{}",
            "<<x = <2>>; <y = <<2> * <x>>>>",
            "{}",
            "<<do-nothing>; <y = <<2> * <x>>>>",
            r#"{"x": <2>}"#,
            "<y = <<2> * <x>>>",
            r#"{"x": <2>}"#,
            "<y = <<2> * <2>>>",
            r#"{"x": <2>}"#,
            "<y = <4>>",
            r#"{"x": <2>}"#,
            "<do-nothing>",
            r#"{"x": <2>, "y": <4>}"#,
        ]
    );

    let compiled = compile_statement(&program)
        .call(&Environment::new())
        .unwrap();
    assert_eq!(compiled, expected);
}

#[test]
fn test_e2e_while_termination() {
    let program = tripling_loop();
    let start = env_of(&[("x", 1)]);
    let expected = env_of(&[("x", 9)]);

    assert_eq!(evaluate_statement(&program, &start).unwrap(), expected);

    let mut machine = StatementMachine::with_env(program.clone(), start.clone());
    machine.run_with(|_| {}).unwrap();
    assert_eq!(machine.env(), &expected);
    assert_eq!(machine.statement(), &Statement::DoNothing);

    assert_eq!(compile_statement(&program).call(&start).unwrap(), expected);
}

#[test]
fn test_e2e_while_trace_unrolls() {
    // while (x < 3) { x = x + 3 } from {x: 1}: one pass through the body, then exit
    let program = Statement::while_loop(
        Expression::less_than(var("x"), num(3)),
        Statement::assign("x", Expression::add(var("x"), num(3))),
    );
    let mut machine = StatementMachine::with_env(program, env_of(&[("x", 1)]));
    let lines = machine.trace().unwrap();

    let w = "<while <<x> < <3>>: <x = <<x> + <3>>>>";
    let unrolled = |cond: &str| {
        format!("<if {}: <<x = <<x> + <3>>>; {}> else: <do-nothing>>", cond, w)
    };
    let before = r#"{"x": <1>}"#;
    let after = r#"{"x": <4>}"#;

    let expected = vec![
        w.to_string(),
        before.to_string(),
        unrolled("<<x> < <3>>"),
        before.to_string(),
        unrolled("<<1> < <3>>"),
        before.to_string(),
        unrolled("<True>"),
        before.to_string(),
        format!("<<x = <<x> + <3>>>; {}>", w),
        before.to_string(),
        format!("<<x = <<1> + <3>>>; {}>", w),
        before.to_string(),
        format!("<<x = <4>>; {}>", w),
        before.to_string(),
        format!("<<do-nothing>; {}>", w),
        after.to_string(),
        w.to_string(),
        after.to_string(),
        unrolled("<<x> < <3>>"),
        after.to_string(),
        unrolled("<<4> < <3>>"),
        after.to_string(),
        unrolled("<False>"),
        after.to_string(),
        "<do-nothing>".to_string(),
        after.to_string(),
    ];
    assert_eq!(lines, expected);
    assert_eq!(machine.steps(), 12);
}

#[test]
fn test_e2e_if_trace() {
    let program = Statement::if_else(
        var("x"),
        Statement::assign("y", num(1)),
        Statement::assign("y", num(2)),
    );
    let start: Environment = [("x", Value::Boolean(true))].into_iter().collect();
    let mut machine = StatementMachine::with_env(program, start);
    let lines = machine.trace().unwrap();

    assert_eq!(
        lines,
        vec![
            "<if <x>: <y = <1>> else: <y = <2>>>",
            r#"{"x": <True>}"#,
            "<if <True>: <y = <1>> else: <y = <2>>>",
            r#"{"x": <True>}"#,
            "<y = <1>>",
            r#"{"x": <True>}"#,
            "<do-nothing>",
            r#"{"x": <True>, "y": <1>}"#,
        ]
    );
}

#[test]
fn test_e2e_unbound_variable() {
    let env = Environment::new();
    let expr = var("x");

    assert_eq!(evaluate_expression(&expr, &env), Err(Error::unbound("x")));

    let mut machine = ExpressionMachine::new(expr.clone());
    assert_eq!(machine.run_with(|_| {}), Err(Error::unbound("x")));

    assert_eq!(compile_expression(&expr).call(&env), Err(Error::unbound("x")));
}

#[test]
fn test_e2e_big_step_machine_prints_once() {
    let mut lines = Vec::new();
    let outcome = Machine::with_env(tripling_loop(), env_of(&[("x", 1)]))
        .run_with(|line| lines.push(line))
        .unwrap();

    assert_eq!(lines, vec![r#"{"x": <9>}"#]);
    assert_eq!(outcome, Outcome::Environment(env_of(&[("x", 9)])));
}

#[test]
fn test_e2e_compiled_assign_key_order_divergence() {
    // x is rebound after y exists: interpreters keep x first, compiled code moves it last
    let program = Statement::sequence(
        Statement::assign("x", num(1)),
        Statement::sequence(
            Statement::assign("y", num(2)),
            Statement::assign("x", num(3)),
        ),
    );

    let big = Machine::new(program.clone()).result().unwrap();
    let compiled = CompiledMachine::new(program.clone()).result().unwrap();
    let mut small = StatementMachine::new(program);
    small.run_with(|_| {}).unwrap();

    assert_eq!(big.to_string(), r#"{"x": <3>, "y": <2>}"#);
    assert_eq!(small.env().to_string(), big.to_string());
    assert_eq!(compiled.to_string(), r#"{"y": <2>, "x": <3>}"#);
    assert_eq!(big, compiled);
}

#[test]
fn test_e2e_reduce_on_normal_form_is_fatal() {
    let err = Statement::DoNothing.reduce(&Environment::new()).unwrap_err();
    assert_eq!(err.classify(), simplesem::ErrorSeverity::Fatal);
    assert!(err.to_string().contains("<do-nothing>"));
}

#[test]
fn test_e2e_program_from_json() {
    let source = r#"
        {"Sequence": {
            "first": {"Assign": {"name": "x", "expression": {"Add": [{"Number": 1}, {"Number": 1}]}}},
            "second": {"Assign": {"name": "y", "expression": {"Multiply": [{"Number": 2}, {"Variable": "x"}]}}}
        }}
    "#;

    let program: Statement = serde_json::from_str(source).unwrap();
    assert_eq!(program, sequence_program());

    let env = evaluate_statement(&program, &Environment::new()).unwrap();
    assert_eq!(env.to_string(), r#"{"x": <2>, "y": <4>}"#);
}
