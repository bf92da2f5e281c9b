//! # rpncalc
//!
//! rpncalc evaluates arithmetic programs written as text. Expressions support
//! `+ - * /`, comparisons, parentheses, implicit multiplication and the
//! functions `sin`, `cos` and `exp`. Programs add variables, `;`-separated
//! statements, `if`/`else` and bounded `while` loops.
//!
//! Every expression is tokenized, translated to reverse Polish notation with
//! the shunting-yard algorithm, and evaluated on an explicit value stack.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::multiple_crate_versions)]

use crate::{
    error::{Error, EvalError},
    interpreter::executor::Interpreter,
};
pub use crate::interpreter::executor::Options;

/// Defines the statement tree and the operator vocabulary.
///
/// This module declares the `Statement` enum built by the statement parser,
/// the compiled `Expression` type, and the closed sets of operators,
/// built-in functions and keywords.
///
/// # Responsibilities
/// - Defines statement types for assignments, conditionals, loops and blocks.
/// - Attaches source offsets to nodes for error reporting.
/// - Describes operator precedence and function application.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Every failure is a variant of a closed enumeration carrying the position
/// or name involved. Failures inside a program statement are wrapped with the
/// statement's index and text.
///
/// # Responsibilities
/// - Defines one error enum per failure family.
/// - Renders messages with 1-based positions.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of program execution.
///
/// This module ties together lexing, postfix translation, evaluation,
/// statement parsing and execution.
///
/// # Responsibilities
/// - Coordinates the lexer, translator, evaluator, parser and executor.
/// - Provides the interpreter that owns a run's variable environment.
pub mod interpreter;
/// General utilities for scanning source text.
///
/// # Responsibilities
/// - Strip comments and split programs into statements.
/// - Match brackets and locate `else` and `=` at the right nesting depth.
pub mod util;

/// Evaluates a program and returns the value of its last statement.
///
/// # Errors
/// Returns an error if any statement fails, or
/// [`EvalError::InvalidExpression`] if the program has no statements.
///
/// # Examples
/// ```
/// use rpncalc::evaluate;
///
/// assert_eq!(evaluate("1 + 3").unwrap(), 4.0);
/// assert_eq!(evaluate("x = 5; if (x > 3) x = 10; x").unwrap(), 10.0);
///
/// // Intentional error: unknown variable.
/// assert!(evaluate("y + 1").is_err());
/// ```
pub fn evaluate(program: &str) -> Result<f64, Error> {
    evaluate_with(program, &Options::default())
}

/// Like [`evaluate`], with explicit options.
///
/// # Example
/// ```
/// use rpncalc::{Options, evaluate_with, error::Error};
///
/// let options = Options { max_loop_iterations: 5,
///                         ..Options::default() };
/// let error = evaluate_with("i = 0; while (i < 10) i = i + 1", &options).unwrap_err();
///
/// assert!(matches!(error.root_cause(), Error::LoopIterationLimitExceeded { limit: 5 }));
/// ```
pub fn evaluate_with(program: &str, options: &Options) -> Result<f64, Error> {
    evaluate_all_with(program, options)?.pop()
                                        .ok_or(Error::Eval(EvalError::InvalidExpression))
}

/// Evaluates a program and returns one value per non-blank top-level
/// statement.
///
/// # Errors
/// Returns the first failure, wrapped with the index and text of the
/// statement that raised it.
///
/// # Examples
/// ```
/// use rpncalc::evaluate_all;
///
/// let values = evaluate_all("x = 1 + 2; y = x - 3; x + y; 7 * 8").unwrap();
///
/// assert_eq!(values, [3.0, 0.0, 3.0, 56.0]);
/// ```
pub fn evaluate_all(program: &str) -> Result<Vec<f64>, Error> {
    evaluate_all_with(program, &Options::default())
}

/// Like [`evaluate_all`], with explicit options.
pub fn evaluate_all_with(program: &str, options: &Options) -> Result<Vec<f64>, Error> {
    Interpreter::new(*options).run(program)
}
