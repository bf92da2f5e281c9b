use thiserror::Error;

/// Errors raised while splitting expression text into tokens.
///
/// Positions are 0-based byte offsets into the statement text and are
/// rendered 1-based in messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A run of digits, dots and exponent markers that is not a finite
    /// floating-point literal, such as `2.1e5.3`.
    #[error("Invalid number at position {}", .position + 1)]
    InvalidNumber {
        /// Start of the numeric run.
        position: usize,
    },
    /// A character outside the recognized set.
    #[error("Invalid character '{ch}' at position {}", .position + 1)]
    InvalidCharacter {
        /// The offending character.
        ch:       char,
        /// Where it was found.
        position: usize,
    },
    /// Letters immediately followed by `(` that do not name a built-in.
    #[error("Unknown function {name} at position {}", .position + 1)]
    UnknownFunction {
        /// The lower-cased name.
        name:     String,
        /// Start of the name.
        position: usize,
    },
    /// A built-in function name written without a call.
    #[error("Cannot use function name '{name}' as variable at position {}", .position + 1)]
    FunctionUsedAsVariable {
        /// The lower-cased name.
        name:     String,
        /// Start of the name.
        position: usize,
    },
}
