use super::assert_close;
use crate::Measurement;

#[test]
fn test_addition_combines_in_quadrature() {
    let result = Measurement::new(10.0, 1.0) + Measurement::new(20.0, 2.0);
    assert_close(result.value, 30.0);
    assert_close(result.uncertainty, 2.2360679775);
}

#[test]
fn test_subtraction_never_cancels_uncertainty() {
    let result = Measurement::new(10.0, 1.0) - Measurement::new(20.0, 2.0);
    assert_close(result.value, -10.0);
    assert_close(result.uncertainty, 5f64.sqrt());

    let same = Measurement::new(4.0, 0.3) - Measurement::new(4.0, 0.3);
    assert_close(same.value, 0.0);
    assert_close(same.uncertainty, 0.18f64.sqrt());
}

#[test]
fn test_multiplication_combines_relative_errors() {
    let result = Measurement::new(10.0, 1.0) * Measurement::new(20.0, 1.0);
    assert_close(result.value, 200.0);
    assert_close(result.uncertainty, 22.360679775);
}

#[test]
fn test_division_combines_relative_errors() {
    let result = Measurement::new(10.0, 1.0) / Measurement::new(20.0, 1.0);
    assert_close(result.value, 0.5);
    assert_close(result.uncertainty, 0.5 * 0.0125f64.sqrt());
}

#[test]
fn test_negative_operands_give_positive_uncertainty() {
    let result = Measurement::new(-10.0, 1.0) * Measurement::new(20.0, 1.0);
    assert_close(result.value, -200.0);
    assert_close(result.uncertainty, 22.360679775);
}

#[test]
fn test_zero_valued_operand_contributes_no_relative_error() {
    let result = Measurement::new(0.0, 1.0) * Measurement::new(5.0, 1.0);
    assert_eq!(result.value, 0.0);
    assert_eq!(result.uncertainty, 0.0);
}

#[test]
fn test_division_by_zero_propagates_non_finite_values() {
    let result = Measurement::new(1.0, 0.1) / Measurement::new(0.0, 0.0);
    assert!(result.value.is_infinite());
    assert!(!result.uncertainty.is_finite());

    let undefined = Measurement::new(0.0, 0.0) / Measurement::new(0.0, 0.0);
    assert!(undefined.value.is_nan());
}

#[test]
fn test_power() {
    let result = Measurement::new(10.0, 0.1).pow(2.0);
    assert_close(result.value, 100.0);
    assert_close(result.uncertainty, 2.0);
}

#[test]
fn test_power_with_fractional_and_negative_exponents() {
    let root = Measurement::new(16.0, 0.8).pow(0.5);
    assert_close(root.value, 4.0);
    assert_close(root.uncertainty, 0.1);

    let inverse = Measurement::new(4.0, 0.2).pow(-1.0);
    assert_close(inverse.value, 0.25);
    assert_close(inverse.uncertainty, 0.0125);
}

#[test]
fn test_scalar_operands_are_exact() {
    let m = Measurement::new(10.0, 1.0);

    let sum = m + 5.0;
    assert_close(sum.value, 15.0);
    assert_close(sum.uncertainty, 1.0);

    let product = m * 2.0;
    assert_close(product.value, 20.0);
    assert_close(product.uncertainty, 2.0);

    let quotient = m / 4.0;
    assert_close(quotient.value, 2.5);
    assert_close(quotient.uncertainty, 0.25);

    assert_eq!(m - 3.0, m - Measurement::exact(3.0));
}

#[test]
fn test_negation_keeps_uncertainty() {
    let negated = -Measurement::new(3.0, 0.2);
    assert_eq!(negated, Measurement::new(-3.0, 0.2));
}

#[test]
fn test_results_drop_manual_precision() {
    let a = Measurement::with_precision(1.0, 0.1, 1);
    let b = Measurement::with_precision(2.0, 0.25, 2);

    assert_eq!((a + b).manual_precision, None);
    assert_eq!((a - b).manual_precision, None);
    assert_eq!((a * b).manual_precision, None);
    assert_eq!((a / b).manual_precision, None);
    assert_eq!(a.pow(2.0).manual_precision, None);
    assert_eq!((-a).manual_precision, None);
}

#[test]
fn test_relative_uncertainty() {
    assert_close(Measurement::new(20.0, 1.0).relative_uncertainty(), 0.05);
    assert_eq!(Measurement::new(0.0, 1.0).relative_uncertainty(), 0.0);
}
