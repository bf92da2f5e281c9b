use thiserror::Error;

use crate::ast::Keyword;

/// Errors raised while executing a postfix token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A variable read before anything was assigned to it.
    #[error("Undefined variable '{name}' at position {}", .position + 1)]
    UndefinedVariable {
        /// The lower-cased name.
        name:     String,
        /// Offset of the reference.
        position: usize,
    },
    /// The right operand of `/` was exactly `0.0`.
    #[error("Division by zero")]
    DivisionByZero {
        /// Offset of the `/` operator.
        position: usize,
    },
    /// The value stack did not hold exactly one value at the end, or an
    /// operator found too few operands.
    #[error("Invalid expression")]
    InvalidExpression,
    /// A control-flow keyword reached expression evaluation.
    #[error("Unexpected keyword '{keyword}' at position {}", .position + 1)]
    UnexpectedKeyword {
        /// The keyword.
        keyword:  Keyword,
        /// Offset of the keyword.
        position: usize,
    },
}
