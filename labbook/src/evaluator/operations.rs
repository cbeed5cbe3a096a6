use crate::ast::BinaryOperator;
use crate::Measurement;

/// Combine two measurements with a binary operator.
///
/// `Power` uses the right operand's value as the exponent; callers reject
/// exponents that carry an uncertainty before getting here.
pub fn apply(left: Measurement, op: BinaryOperator, right: Measurement) -> Measurement {
    match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Subtract => left - right,
        BinaryOperator::Multiply => left * right,
        BinaryOperator::Divide => left / right,
        BinaryOperator::Power => left.pow(right.value),
    }
}
