use thiserror::Error;

/// Structural errors found while translating tokens to postfix order or while
/// matching the brackets of a statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A prefix `-` directly after a binary `-`, as in `2--3`.
    #[error("Invalid sequence '--' at position {}", .position + 1)]
    InvalidOperatorSequence {
        /// Offset of the second `-`.
        position: usize,
    },
    /// A binary operator with no value to its left.
    #[error("Unexpected operator at position {}", .position + 1)]
    UnexpectedOperator {
        /// Offset of the operator.
        position: usize,
    },
    /// A `(` without `)` or the other way around.
    #[error("Mismatched parentheses at position {}", .position + 1)]
    MismatchedParentheses {
        /// Offset of the unmatched parenthesis.
        position: usize,
    },
    /// A `{` without `}` or the other way around.
    #[error("Mismatched braces at position {}", .position + 1)]
    MismatchedBraces {
        /// Offset of the unmatched brace.
        position: usize,
    },
    /// Text left over after a braced block that must end its statement.
    #[error("Unexpected text after block at position {}", .position + 1)]
    TrailingText {
        /// Offset of the first leftover character.
        position: usize,
    },
}
