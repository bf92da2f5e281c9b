use std::fs;

use rand::{Rng, thread_rng};
use rpncalc::{
    Options,
    ast::is_reserved_name,
    error::{Error, EvalError},
    evaluate, evaluate_all, evaluate_all_with,
    interpreter::executor::Interpreter,
};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert!((value - expected).abs() < 1e-9,
                             "Script '{src}' returned {value}, expected {expected}"),
        Err(e) => panic!("Script '{src}' failed: {e}"),
    }
}

fn assert_values(src: &str, expected: &[f64]) {
    match evaluate_all(src) {
        Ok(values) => assert_eq!(values, expected, "Script '{src}'"),
        Err(e) => panic!("Script '{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = evaluate(src) {
        panic!("Script '{src}' returned {value} but was expected to fail")
    }
}

#[test]
fn script_fixture_runs() {
    let path = "tests/example.calc";
    let content = fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path}: {e}"));

    let values = evaluate_all(&content).unwrap_or_else(|e| panic!("{path} failed:\n{e}"));

    assert_eq!(values.len(), 9);
    assert_eq!(values[3], 55.0);
    assert_eq!(values[6], 6.0);
    assert_eq!(values.last(), Some(&120.0));
}

#[test]
fn basic_arithmetic() {
    assert_value("1+3", 4.0);
    assert_value("-1", -1.0);
    assert_value("-1-1", -2.0);
    assert_value("-(1+1)", -2.0);
    assert_value("((2))", 2.0);
    assert_value("3*(-5)", -15.0);
    assert_value("3+4*8", 35.0);
    assert_value("3-(9-8)", 2.0);
    assert_value("4-(3+5)*2", -12.0);
    assert_value("2-(4-(3+5)*2)*(-2)", -22.0);
    assert_value("2 - 3 - 4", -5.0);
    assert_value("8 / 4 / 2", 1.0);
    assert_value("+2 * 3", 6.0);
}

#[test]
fn unary_minus_binds_tighter_than_binary_operators() {
    assert_value("-2 * 3", -6.0);
    assert_value("2 * -3", -6.0);
    assert_value("-2 + 5", 3.0);
    assert_value("-(2 + 3) * 2", -10.0);
    assert_value("4 / -2", -2.0);
}

#[test]
fn functions() {
    assert_value("sin(0)", 0.0);
    assert_value("cos(0)", 1.0);
    assert_value("exp(0)", 1.0);
    assert_value("exp(1)", std::f64::consts::E);
    assert_value("sin(cos(0))", 0.841_470_984_807_896_5);
    assert_value("exp(2)*2", 14.778_112_197_861_3);
    assert_value("sin(1)+cos(1)", 1.381_773_290_676_036_3);
    assert_value("SIN(0) + Cos(0)", 1.0);
}

#[test]
fn overflow_yields_infinity() {
    assert_eq!(evaluate("exp(1000)").unwrap(), f64::INFINITY);
    assert_eq!(evaluate("0 - exp(1000)").unwrap(), f64::NEG_INFINITY);
}

#[test]
fn number_literals() {
    assert_value("12.3e4", 123_000.0);
    assert_value("12.3e-4", 0.001_23);
    assert_value("-12.3e-4", -0.001_23);
    assert_value("4.2030e4+2.1e5", 252_030.0);
    assert_value("3.2+(9-8)", 4.2);
    assert_value(".5 + 1.", 1.5);
    assert_value("1E+2", 100.0);
}

#[test]
fn comparisons() {
    assert_value("1 < 2", 1.0);
    assert_value("2 < 1", 0.0);
    assert_value("2 <= 2", 1.0);
    assert_value("3 >= 4", 0.0);
    assert_value("3 > 2", 1.0);
    assert_value("1 != 1", 0.0);
    assert_value("1 != 2", 1.0);
    assert_value("0.1 + 0.2 == 0.3", 1.0);
    assert_value("1 + 1 == 2", 1.0);
    assert_value("1 == 1.001", 0.0);
}

#[test]
fn implicit_multiplication() {
    assert_value("x = 3; 2x", 6.0);
    assert_value("2(3 + 4)", 14.0);
    assert_value("(1 + 1)(2 + 2)", 8.0);
    assert_value("3sin(0)", 0.0);
    assert_value("2exp(0)", 2.0);
    assert_value("2 (3)", 6.0);
    assert_value("x = 4; x (2)", 8.0);
    assert_value("x = 5; (2)x", 10.0);
    assert_value("2{3}", 6.0);
}

#[test]
fn juxtaposition_without_a_bracket_is_rejected() {
    assert_failure("1 2");
    assert_failure("1 2 +1");
    assert_failure("sin(1)2");
    assert_failure("x = 1; 2 x");
}

#[test]
fn statements_return_one_value_each() {
    assert_values("2+3; 4*2; 3-4", &[5.0, 8.0, -1.0]);
    assert_values("1+1; 2*2; 3/2", &[2.0, 4.0, 1.5]);
    assert_values("x=1+2; y=x-3; x+y; 7*8", &[3.0, 0.0, 3.0, 56.0]);
    assert_values("1; ; 2;", &[1.0, 2.0]);
    assert_values("", &[]);
}

#[test]
fn assignment() {
    assert_value("x = 7 * 9; x", 63.0);
    assert_value("x = 2; x = x * x; x", 4.0);
    assert_value("X = 2; x + 1", 3.0);
    assert_values("x = y = 2; x + y", &[2.0, 4.0]);
    assert_values("y = 3; x = y <= 3; z = y != 3", &[3.0, 1.0, 0.0]);
    assert_value("x = if (1) 4 else 5; x", 4.0);
}

#[test]
fn conditionals() {
    assert_value("x=5; if (x > 3) x=10; x", 10.0);
    assert_value("x=2; if (x > 3) x=10; x", 2.0);
    assert_value("x = 0; if (x) 1 else 2", 2.0);
    assert_value("x = 2; if (x > 3) { y = 1 } else { y = 2 }; y", 2.0);
    assert_value("if (1 > 0) { a = 1; b = 2 }", 2.0);
    assert_value("if (0) 5", 0.0);
    assert_value("x = 3; if (x == 3) { y = x * 2 } else y = 0; y", 6.0);
    assert_value("IF (1) 7 ELSE 8", 7.0);
}

#[test]
fn else_binds_to_the_nearest_if() {
    assert_value("x = 5; if (x > 3) if (x > 10) 1 else 2", 2.0);
    assert_value("x = 1; if (x > 3) if (x > 10) 1 else 2", 0.0);
    assert_value("x = 1; if (x > 3) if (x > 10) 1 else 2 else 3", 3.0);
}

#[test]
fn loops() {
    assert_value("i = 0; while (i < 3) i = i + 1", 3.0);
    assert_value("i = 0; s = 0; while (i < 5) { i = i + 1; s = s + i }; s", 15.0);
    assert_value("while (0) 1", 0.0);
    assert_value("n = 1; while (n < 1000) n = n * 2; n", 1024.0);
    assert_value("i = 0; while (i < 3) { j = 0; while (j < 2) j = j + 1; i = i + j }; i", 4.0);
}

#[test]
fn runaway_loop_is_stopped() {
    let error = evaluate("x=1; while (1) x=x+1").unwrap_err();

    assert_eq!(error.statement_index(), Some(2));
    assert_eq!(error.root_cause(),
               &Error::LoopIterationLimitExceeded { limit: 10_000 });
}

#[test]
fn loop_runs_exactly_up_to_the_limit() {
    assert_value("i = 0; while (i < 10000) i = i + 1", 10_000.0);
    assert_failure("i = 0; while (i < 10001) i = i + 1");
}

#[test]
fn blocks() {
    assert_value("{ a = 1; b = a + 1 }", 2.0);
    assert_value("{}", 0.0);
    assert_value("{ a = 1; ; b = 2; }", 2.0);
    assert_value("{ x = 4 }; x", 4.0);
    assert_value("{1 + 2} * 3", 9.0);
}

#[test]
fn comments_are_ignored() {
    assert_values("x = 1; // set x\nx + 1", &[1.0, 2.0]);
    assert_values("// nothing here\n", &[]);
    assert_value("2 * 3 // 4", 6.0);
}

#[test]
fn environment_survives_a_failing_statement() {
    let mut interpreter = Interpreter::new(Options::default());

    assert!(interpreter.run("x = 1; y = 1 / 0; z = 3").is_err());
    assert_eq!(interpreter.environment().get("x"), Some(1.0));
    assert!(!interpreter.environment().contains("y"));
    assert!(!interpreter.environment().contains("z"));
}

#[test]
fn custom_tolerance_applies_to_equality() {
    let options = Options { equality_tolerance: 0.01,
                            ..Options::default() };

    assert_eq!(evaluate_all_with("1 == 1.001; 1 != 1.001", &options).unwrap(),
               [1.0, 0.0]);
}

#[derive(Debug)]
enum Node {
    Number(u32),
    Binary(Box<Node>, char, Box<Node>),
}

impl Node {
    fn random(rng: &mut impl Rng, depth: u32) -> Self {
        if depth == 0 || rng.gen_bool(0.3) {
            return Self::Number(rng.gen_range(0..100));
        }

        let op = ['+', '-', '*'][rng.gen_range(0..3)];
        Self::Binary(Box::new(Self::random(rng, depth - 1)),
                     op,
                     Box::new(Self::random(rng, depth - 1)))
    }

    fn plain(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Binary(left, op, right) => format!("({} {op} {})", left.plain(), right.plain()),
        }
    }

    fn padded(&self) -> String {
        match self {
            Self::Number(n) => format!("(({n}))"),
            Self::Binary(left, op, right) => {
                format!("(({} {op} {}))", left.padded(), right.padded())
            },
        }
    }
}

fn random_name(rng: &mut impl Rng) -> String {
    loop {
        let length = rng.gen_range(1..=6);
        let name: String = (0..length).map(|_| char::from(rng.gen_range(b'a'..=b'z')))
                                      .collect();
        if !is_reserved_name(&name) {
            return name;
        }
    }
}

#[test]
fn extra_parentheses_do_not_change_the_result() {
    let mut rng = thread_rng();

    for _ in 0..200 {
        let tree = Node::random(&mut rng, 4);
        let plain = evaluate(&tree.plain()).unwrap();
        let padded = evaluate(&tree.padded()).unwrap();

        assert_eq!(plain, padded, "{tree:?}");
    }
}

#[test]
fn subtracting_a_negation_doubles() {
    let mut rng = thread_rng();

    for _ in 0..200 {
        let a: f64 = rng.gen_range(-1e6..1e6);
        let values = evaluate_all(&format!("a = {a}; a - (-a); 2 * a")).unwrap();

        assert!((values[1] - values[2]).abs() < 1e-10, "a = {a}");
    }
}

#[test]
fn division_fails_only_for_an_exact_zero() {
    let mut rng = thread_rng();

    for _ in 0..200 {
        let x: f64 = rng.gen_range(-1e3..1e3);
        let magnitude: f64 = rng.gen_range(1e-300..1e-10);
        let y = if rng.gen_bool(0.5) { magnitude } else { -magnitude };

        assert!(evaluate(&format!("x = {x}; y = {y}; x / y")).is_ok(), "{x} / {y}");

        let error = evaluate(&format!("x = {x}; y = {y}; x / (y - y)")).unwrap_err();
        assert!(matches!(error.root_cause(), Error::Eval(EvalError::DivisionByZero { .. })));
    }
}

#[test]
fn equality_is_reflexive() {
    let mut rng = thread_rng();

    for _ in 0..200 {
        let a: f64 = rng.gen_range(-1e9..1e9);

        assert_value(&format!("{a} == {a}"), 1.0);
        assert_value(&format!("a = {a}; a == a"), 1.0);
    }
}

#[test]
fn assignment_round_trips() {
    let mut rng = thread_rng();

    for _ in 0..200 {
        let name = random_name(&mut rng);
        let expression = Node::random(&mut rng, 3).plain();
        let values = evaluate_all(&format!("{name} = {expression}; {name}")).unwrap();

        assert_eq!(values[0], values[1], "{name} = {expression}");
        assert_eq!(values[0], evaluate(&expression).unwrap());
    }
}

#[test]
fn loops_end_within_the_limit_or_fail() {
    let mut rng = thread_rng();

    for _ in 0..50 {
        let limit = rng.gen_range(1..200);
        let target: u32 = rng.gen_range(0..400);
        let options = Options { max_loop_iterations: limit,
                                ..Options::default() };

        let result = evaluate_all_with(&format!("i = 0; while (i < {target}) i = i + 1"), &options);

        if target as usize <= limit {
            let values = result.unwrap();
            assert_eq!(values[1], f64::from(target));
        } else {
            let error = result.unwrap_err();
            assert_eq!(error.root_cause(), &Error::LoopIterationLimitExceeded { limit });
        }
    }
}
