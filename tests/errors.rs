use rpncalc::{
    ast::Keyword,
    error::{
        AssignmentError, ConditionalError, Error, EvalError, LexError, LoopError, ParseError,
    },
    evaluate, evaluate_all,
};

/// Evaluates `src`, expecting a failure, and returns the unwrapped cause.
fn cause(src: &str) -> Error {
    match evaluate(src) {
        Ok(value) => panic!("Script '{src}' returned {value} but was expected to fail"),
        Err(e) => e.root_cause().clone(),
    }
}

fn message(src: &str) -> String {
    match evaluate(src) {
        Ok(value) => panic!("Script '{src}' returned {value} but was expected to fail"),
        Err(e) => e.to_string(),
    }
}

#[test]
fn division_by_zero() {
    assert_eq!(cause("9/0"), EvalError::DivisionByZero { position: 1 }.into());
    assert_eq!(message("9/0"), "Error in expression 1: '9/0' - Division by zero");
    assert!(matches!(cause("1 / (2 - 2)"), Error::Eval(EvalError::DivisionByZero { .. })));
    assert!(matches!(cause("1 / -0"), Error::Eval(EvalError::DivisionByZero { .. })));
}

#[test]
fn double_minus_is_an_invalid_sequence() {
    assert_eq!(cause("2--3"),
               ParseError::InvalidOperatorSequence { position: 2 }.into());
    assert_eq!(message("2--3"),
               "Error in expression 1: '2--3' - Invalid sequence '--' at position 3");
}

#[test]
fn operator_without_a_left_operand() {
    assert_eq!(cause("*2"), ParseError::UnexpectedOperator { position: 0 }.into());
    assert_eq!(cause("2 * * 3"), ParseError::UnexpectedOperator { position: 4 }.into());
    assert_eq!(cause("(< 1)"), ParseError::UnexpectedOperator { position: 1 }.into());
}

#[test]
fn mismatched_parentheses() {
    assert_eq!(cause("2-(4-(3+2)"),
               ParseError::MismatchedParentheses { position: 2 }.into());
    assert!(matches!(cause("sin(1"), Error::Parse(ParseError::MismatchedParentheses { .. })));
    assert!(matches!(cause("sin(1))"), Error::Parse(ParseError::MismatchedParentheses { .. })));
    assert_eq!(cause("1 + 2)"), ParseError::MismatchedParentheses { position: 5 }.into());
}

#[test]
fn mismatched_braces() {
    assert_eq!(cause("{1 + 2"), ParseError::MismatchedBraces { position: 0 }.into());
    assert_eq!(cause("1 + 2}"), ParseError::MismatchedBraces { position: 5 }.into());
    assert_eq!(cause("if (1) { 2"), ParseError::MismatchedBraces { position: 7 }.into());
}

#[test]
fn lexical_errors() {
    assert_eq!(cause("2.1e5.3"), LexError::InvalidNumber { position: 0 }.into());
    assert_eq!(message("2.1e5.3"),
               "Error in expression 1: '2.1e5.3' - Invalid number at position 1");
    assert_eq!(cause("1e400"), LexError::InvalidNumber { position: 0 }.into());
    assert_eq!(cause("sin(1,2)"),
               LexError::InvalidCharacter { ch:       ',',
                                            position: 5, }.into());
    assert_eq!(cause("2 + #"),
               LexError::InvalidCharacter { ch:       '#',
                                            position: 4, }.into());
    assert_eq!(cause("foo(1)"),
               LexError::UnknownFunction { name:     "foo".to_string(),
                                           position: 0, }.into());
    assert_eq!(cause("sin"),
               LexError::FunctionUsedAsVariable { name:     "sin".to_string(),
                                                  position: 0, }.into());
    assert!(message("sin").contains("Cannot use function name 'sin' as variable"));
}

#[test]
fn malformed_expressions() {
    for src in ["sin()", "1 2", "1 2 +1", "sin(1)2", "()", "1 +"] {
        assert_eq!(cause(src), EvalError::InvalidExpression.into(), "{src}");
    }
}

#[test]
fn undefined_variable() {
    assert_eq!(cause("x + 1"),
               EvalError::UndefinedVariable { name:     "x".to_string(),
                                              position: 0, }.into());
    assert_eq!(message("x=x"),
               "Error in expression 1: 'x=x' - Undefined variable 'x' at position 3");
    assert_eq!(cause("if (1) y + 1"),
               EvalError::UndefinedVariable { name:     "y".to_string(),
                                              position: 7, }.into());
}

#[test]
fn keyword_inside_an_expression() {
    assert_eq!(cause("2 + while"),
               EvalError::UnexpectedKeyword { keyword:  Keyword::While,
                                              position: 4, }.into());
}

#[test]
fn assignment_errors() {
    assert_eq!(cause("sin=1"),
               AssignmentError::CannotAssignToFunction { name: "sin".to_string() }.into());
    assert_eq!(message("sin=1"),
               "Error in expression 1: 'sin=1' - Cannot assign to function name 'sin'");
    assert_eq!(cause("1=2"),
               AssignmentError::InvalidVariableName { name: "1".to_string() }.into());
    assert_eq!(cause("x y = 2"),
               AssignmentError::InvalidVariableName { name: "x y".to_string() }.into());
    assert_eq!(cause("if = 1"),
               AssignmentError::ReservedName { name: "if".to_string() }.into());
    assert_eq!(cause("While = 1"),
               AssignmentError::ReservedName { name: "while".to_string() }.into());
    assert_eq!(cause("x = "), AssignmentError::InvalidAssignment { position: 2 }.into());
}

#[test]
fn equality_test_is_never_an_assignment() {
    let error = evaluate_all("x = 2; y = x == 2").unwrap_err();

    assert_eq!(error.statement_index(), Some(2));
    assert_eq!(error.root_cause(),
               &LexError::InvalidCharacter { ch:       '=',
                                             position: 2, }.into());
    assert_eq!(cause("x = if (1 == 1) 2 else 3"),
               LexError::InvalidCharacter { ch:       '=',
                                            position: 2, }.into());
}

#[test]
fn conditional_errors() {
    assert_eq!(cause("if x > 1 2"),
               ConditionalError::InvalidConditional { position: 0 }.into());
    assert_eq!(cause("if () 1"),
               ConditionalError::InvalidConditional { position: 0 }.into());
    assert_eq!(cause("if (1)"), ConditionalError::MissingBranch { position: 0 }.into());
    assert_eq!(cause("if (1) 2 else"),
               ConditionalError::MissingBranch { position: 0 }.into());
    assert_eq!(cause("else 1"), ConditionalError::UnexpectedElse { position: 0 }.into());
    assert_eq!(cause("if (1) {2} 3"), ParseError::TrailingText { position: 11 }.into());
    assert_eq!(cause("if (1 {2}"), ParseError::MismatchedParentheses { position: 3 }.into());
}

#[test]
fn loop_errors() {
    assert_eq!(cause("while 1 2"), LoopError::InvalidLoop { position: 0 }.into());
    assert_eq!(cause("while (1)"), LoopError::MissingBody { position: 0 }.into());
    assert_eq!(cause("while (0) {1} 2"), ParseError::TrailingText { position: 14 }.into());
}

#[test]
fn errors_name_the_failing_statement() {
    let error = evaluate_all("2+3; 4/0; 3-4").unwrap_err();
    assert_eq!(error.statement_index(), Some(2));
    assert_eq!(error.to_string(), "Error in expression 2: '4/0' - Division by zero");

    let error = evaluate_all("1+1; sin(; 3-1").unwrap_err();
    assert_eq!(error.statement_index(), Some(2));
    assert!(matches!(error.root_cause(), Error::Parse(ParseError::MismatchedParentheses { .. })));
}

#[test]
fn blank_statements_do_not_count() {
    let error = evaluate_all("1; ; // skipped\n; 2 / 0").unwrap_err();

    assert_eq!(error.statement_index(), Some(2));
}

#[test]
fn errors_inside_nested_statements_are_reported() {
    let error = evaluate_all("x = 1; if (x) { y = 2; z = y / 0 }").unwrap_err();

    assert_eq!(error.statement_index(), Some(2));
    assert!(matches!(error.root_cause(), Error::Eval(EvalError::DivisionByZero { .. })));
}

#[test]
fn syntax_errors_in_untaken_branches_are_reported() {
    assert!(matches!(cause("if (0) 1 else 2--3"),
                     Error::Parse(ParseError::InvalidOperatorSequence { .. })));
    assert!(matches!(cause("while (0) sin"),
                     Error::Lex(LexError::FunctionUsedAsVariable { .. })));
}

#[test]
fn empty_program_has_no_value() {
    assert_eq!(evaluate(""), Err(EvalError::InvalidExpression.into()));
    assert_eq!(evaluate(" ; \n ;"), Err(EvalError::InvalidExpression.into()));
}

#[test]
fn unwrapped_errors_have_no_statement_index() {
    let error: Error = EvalError::InvalidExpression.into();

    assert_eq!(error.statement_index(), None);
    assert_eq!(error.root_cause(), &error);
}
