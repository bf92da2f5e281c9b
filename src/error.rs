/// Evaluation errors.
///
/// Failures of the postfix evaluator: undefined variables, division by zero
/// and malformed value stacks.
pub mod eval_error;
/// Lexing errors.
///
/// Defines the failures of the tokenizer: invalid characters, malformed
/// number literals and misused function names.
pub mod lex_error;
/// Parsing errors.
///
/// Bracket mismatches and operator placement problems detected while building
/// postfix sequences and statement trees.
pub mod parse_error;
/// Statement-level syntax errors for assignments, conditionals and loops.
pub mod statement_error;

use thiserror::Error as ThisError;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use statement_error::{AssignmentError, ConditionalError, LoopError};

/// Any failure produced while running a program.
///
/// Errors raised inside a top-level statement reach the caller wrapped in
/// [`Error::Statement`], which names the statement's 1-based index and its
/// source text. Use [`Error::root_cause`] to get at the underlying failure.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error(transparent)]
    Assignment(#[from] AssignmentError),
    #[error(transparent)]
    Conditional(#[from] ConditionalError),
    #[error(transparent)]
    Loop(#[from] LoopError),
    /// A `while` loop kept running past the configured iteration cap.
    #[error("Loop exceeded the limit of {limit} iterations")]
    LoopIterationLimitExceeded {
        /// The cap that was hit.
        limit: usize,
    },
    /// A failure inside one top-level statement.
    #[error("Error in expression {index}: '{text}' - {source}")]
    Statement {
        /// 1-based index among the non-blank top-level statements.
        index:  usize,
        /// Trimmed source text of the statement.
        text:   String,
        /// What went wrong.
        source: Box<Self>,
    },
}

impl Error {
    /// Strips any statement wrappers and returns the innermost failure.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{
    ///     error::{Error, EvalError},
    ///     evaluate,
    /// };
    ///
    /// let error = evaluate("1 + 1; 4 / 0").unwrap_err();
    ///
    /// assert_eq!(error.statement_index(), Some(2));
    /// assert!(matches!(error.root_cause(), Error::Eval(EvalError::DivisionByZero { .. })));
    /// ```
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Statement { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// The 1-based index of the failing top-level statement, if known.
    #[must_use]
    pub const fn statement_index(&self) -> Option<usize> {
        match self {
            Self::Statement { index, .. } => Some(*index),
            _ => None,
        }
    }
}
