use crate::{ast::Operator, error::EvalError, interpreter::evaluator::core::EvalResult};

/// Maps a boolean to the numeric truth values `1.0` and `0.0`.
#[must_use]
pub const fn truth(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// A value counts as true when it is anything but `0.0`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_truthy(value: f64) -> bool {
    value != 0.0
}

/// Equality within an absolute tolerance.
///
/// Note that this relation is not transitive: `a == b` and `b == c` can both
/// hold while `a == c` does not.
///
/// # Example
/// ```
/// use rpncalc::interpreter::evaluator::operator::approx_eq;
///
/// assert!(approx_eq(0.1 + 0.2, 0.3, 1e-10));
/// assert!(!approx_eq(1.0, 1.001, 1e-10));
/// ```
#[must_use]
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

/// Applies a binary operator to `a` (left) and `b` (right).
///
/// Comparison operators yield `1.0` or `0.0`. `!=` is true when the operands
/// differ by more than `tolerance`.
///
/// # Errors
/// Returns [`EvalError::DivisionByZero`] when dividing by exactly `0.0`. Any
/// other divisor, however small, is accepted. A unary operator yields
/// [`EvalError::InvalidExpression`].
///
/// # Example
/// ```
/// use rpncalc::{ast::Operator, interpreter::evaluator::operator::apply_binary};
///
/// assert_eq!(apply_binary(Operator::Subtract, 7.0, 2.0, 1e-10, 0).unwrap(), 5.0);
/// assert_eq!(apply_binary(Operator::LessEqual, 2.0, 2.0, 1e-10, 0).unwrap(), 1.0);
/// assert!(apply_binary(Operator::Divide, 1.0, 0.0, 1e-10, 0).is_err());
/// ```
#[allow(clippy::float_cmp)]
pub fn apply_binary(operator: Operator,
                    a: f64,
                    b: f64,
                    tolerance: f64,
                    position: usize)
                    -> EvalResult<f64> {
    let value = match operator {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero { position });
            }
            a / b
        },
        Operator::Less => truth(a < b),
        Operator::Greater => truth(a > b),
        Operator::LessEqual => truth(a <= b),
        Operator::GreaterEqual => truth(a >= b),
        Operator::Equal => truth(approx_eq(a, b, tolerance)),
        Operator::NotEqual => truth((a - b).abs() > tolerance),
        Operator::Negate => return Err(EvalError::InvalidExpression),
    };

    Ok(value)
}

/// Applies a unary operator.
///
/// # Errors
/// Returns [`EvalError::InvalidExpression`] for a binary operator.
pub const fn apply_unary(operator: Operator, value: f64) -> EvalResult<f64> {
    match operator {
        Operator::Negate => Ok(-value),
        _ => Err(EvalError::InvalidExpression),
    }
}
