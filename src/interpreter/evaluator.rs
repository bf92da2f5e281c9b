/// Core evaluation logic and the variable environment.
///
/// Contains the postfix evaluation loop, its value stack, and the mapping from
/// variable names to values that a whole program run shares.
pub mod core;

/// Operator and function application.
///
/// Implements arithmetic, tolerance-based comparison and negation on plain
/// `f64` operands.
pub mod operator;
