use thiserror::Error;

/// Malformed `name = value` statements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    /// Nothing to the right of `=`.
    #[error("Invalid assignment at position {}", .position + 1)]
    InvalidAssignment {
        /// Offset of the `=`.
        position: usize,
    },
    /// The target is empty or contains anything but letters.
    #[error("Invalid variable name '{name}'")]
    InvalidVariableName {
        /// The target as written.
        name: String,
    },
    /// The target is one of the built-in function names.
    #[error("Cannot assign to function name '{name}'")]
    CannotAssignToFunction {
        /// The lower-cased target.
        name: String,
    },
    /// The target is a control-flow keyword.
    #[error("Cannot assign to keyword '{name}'")]
    ReservedName {
        /// The lower-cased target.
        name: String,
    },
}

/// Malformed `if` statements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionalError {
    /// `if` not followed by a parenthesized, non-empty condition.
    #[error("Invalid conditional expression at position {}", .position + 1)]
    InvalidConditional {
        /// Offset of the `if` keyword.
        position: usize,
    },
    /// A condition with nothing to execute after it, or an empty `else`.
    #[error("Missing branch in conditional at position {}", .position + 1)]
    MissingBranch {
        /// Offset of the keyword that lacks a branch.
        position: usize,
    },
    /// An `else` with no `if` in front of it.
    #[error("Unexpected keyword 'else' at position {}", .position + 1)]
    UnexpectedElse {
        /// Offset of the `else` keyword.
        position: usize,
    },
}

/// Malformed `while` statements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoopError {
    /// `while` not followed by a parenthesized, non-empty condition.
    #[error("Invalid loop expression at position {}", .position + 1)]
    InvalidLoop {
        /// Offset of the `while` keyword.
        position: usize,
    },
    /// A condition with no body after it.
    #[error("Missing loop body at position {}", .position + 1)]
    MissingBody {
        /// Offset of the `while` keyword.
        position: usize,
    },
}
