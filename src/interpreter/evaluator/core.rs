use std::collections::HashMap;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::operator::{apply_binary, apply_unary},
        lexer::{Token, TokenKind},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Default absolute tolerance used by `==` and `!=`.
pub const EQUALITY_TOLERANCE: f64 = 1e-10;

/// Variable bindings for one program run.
///
/// Names are stored lower-cased. The environment is owned by the interpreter
/// and passed by reference into every evaluation, so assignments made inside
/// blocks and loops stay visible after them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: HashMap<String, f64>,
}

impl Environment {
    /// Creates an environment with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks a variable up by its lower-cased name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.variables.insert(name.into(), value);
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

/// Evaluates a postfix token sequence with the default equality tolerance.
///
/// # Errors
/// See [`evaluate_with_tolerance`].
///
/// # Example
/// ```
/// use rpncalc::interpreter::{
///     evaluator::core::{Environment, evaluate},
///     lexer::tokenize,
///     shunting_yard::to_postfix,
/// };
///
/// let mut environment = Environment::new();
/// environment.set("x", 4.0);
///
/// let rpn = to_postfix(tokenize("2x - 1").unwrap()).unwrap();
///
/// assert_eq!(evaluate(&rpn, &environment).unwrap(), 7.0);
/// ```
pub fn evaluate(rpn: &[Token], environment: &Environment) -> EvalResult<f64> {
    evaluate_with_tolerance(rpn, environment, EQUALITY_TOLERANCE)
}

/// Evaluates a postfix token sequence against `environment`.
///
/// Values are pushed on an explicit stack. Operators pop their operands, the
/// right operand first, and push the result. Exactly one value must remain
/// once the sequence is exhausted.
///
/// # Errors
/// - [`EvalError::UndefinedVariable`] for a variable with no binding.
/// - [`EvalError::DivisionByZero`] for division by exactly `0.0`.
/// - [`EvalError::InvalidExpression`] on stack underflow, when more or fewer
///   than one value remains, or for a grouping token in the sequence.
/// - [`EvalError::UnexpectedKeyword`] if a keyword reached the sequence.
pub fn evaluate_with_tolerance(rpn: &[Token],
                               environment: &Environment,
                               tolerance: f64)
                               -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(rpn.len());

    for token in rpn {
        let value = match &token.kind {
            TokenKind::Number(value) => *value,
            TokenKind::Variable(name) => {
                let undefined = || EvalError::UndefinedVariable { name:     name.clone(),
                                                                  position: token.position, };
                environment.get(name).ok_or_else(undefined)?
            },
            TokenKind::Operator(operator) if operator.is_unary() => {
                apply_unary(*operator, pop(&mut stack)?)?
            },
            TokenKind::Operator(operator) => {
                let b = pop(&mut stack)?;
                let a = pop(&mut stack)?;
                apply_binary(*operator, a, b, tolerance, token.position)?
            },
            TokenKind::Function(function) => function.apply(pop(&mut stack)?),
            TokenKind::Keyword(keyword) => {
                return Err(EvalError::UnexpectedKeyword { keyword:  *keyword,
                                                          position: token.position, });
            },
            TokenKind::LeftParen
            | TokenKind::RightParen
            | TokenKind::LeftBrace
            | TokenKind::RightBrace => return Err(EvalError::InvalidExpression),
        };

        stack.push(value);
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(EvalError::InvalidExpression),
    }
}

fn pop(stack: &mut Vec<f64>) -> EvalResult<f64> {
    stack.pop().ok_or(EvalError::InvalidExpression)
}
