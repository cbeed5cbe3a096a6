//! Measurements and uncertainty propagation
//!
//! A [`Measurement`] is a central value paired with an absolute uncertainty.
//! Sums and differences combine uncertainties in quadrature; products and
//! quotients combine relative uncertainties in quadrature.

use serde::Serialize;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A value with an absolute uncertainty.
///
/// `manual_precision` is only ever set for measurements typed directly into a
/// document (`m = 10.0 +/- 0.50`) and records how many decimal digits the
/// uncertainty literal had, so display echoes the source text. Every result
/// of arithmetic has it cleared.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    pub value: f64,
    pub uncertainty: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_precision: Option<usize>,
}

impl Measurement {
    pub fn new(value: f64, uncertainty: f64) -> Self {
        Self {
            value,
            uncertainty,
            manual_precision: None,
        }
    }

    /// A measurement known without uncertainty (a bare scalar)
    pub fn exact(value: f64) -> Self {
        Self::new(value, 0.0)
    }

    pub fn with_precision(value: f64, uncertainty: f64, places: usize) -> Self {
        Self {
            value,
            uncertainty,
            manual_precision: Some(places),
        }
    }

    /// Uncertainty relative to the value, or 0 when the value is 0
    pub fn relative_uncertainty(&self) -> f64 {
        if self.value != 0.0 {
            self.uncertainty / self.value
        } else {
            0.0
        }
    }

    /// Raise to a scalar exponent: `u = |k * v^(k-1) * u|`
    pub fn pow(&self, exponent: f64) -> Measurement {
        let value = self.value.powf(exponent);
        let uncertainty = (exponent * self.value.powf(exponent - 1.0) * self.uncertainty).abs();
        Measurement::new(value, uncertainty)
    }

    fn quadrature(a: f64, b: f64) -> f64 {
        (a.powi(2) + b.powi(2)).sqrt()
    }

    fn scaled_by_relative(value: f64, lhs: &Measurement, rhs: &Measurement) -> Measurement {
        // relative_uncertainty() is signed; squaring drops the sign
        let relative = Self::quadrature(lhs.relative_uncertainty(), rhs.relative_uncertainty());
        Measurement::new(value, value.abs() * relative)
    }
}

impl From<f64> for Measurement {
    fn from(value: f64) -> Self {
        Measurement::exact(value)
    }
}

impl Add for Measurement {
    type Output = Measurement;

    fn add(self, rhs: Measurement) -> Measurement {
        Measurement::new(
            self.value + rhs.value,
            Self::quadrature(self.uncertainty, rhs.uncertainty),
        )
    }
}

impl Sub for Measurement {
    type Output = Measurement;

    fn sub(self, rhs: Measurement) -> Measurement {
        Measurement::new(
            self.value - rhs.value,
            Self::quadrature(self.uncertainty, rhs.uncertainty),
        )
    }
}

impl Mul for Measurement {
    type Output = Measurement;

    fn mul(self, rhs: Measurement) -> Measurement {
        Self::scaled_by_relative(self.value * rhs.value, &self, &rhs)
    }
}

impl Div for Measurement {
    type Output = Measurement;

    /// Division by a zero-valued measurement is not guarded: the result is
    /// non-finite and propagates as such.
    fn div(self, rhs: Measurement) -> Measurement {
        Self::scaled_by_relative(self.value / rhs.value, &self, &rhs)
    }
}

impl Neg for Measurement {
    type Output = Measurement;

    fn neg(self) -> Measurement {
        Measurement::new(-self.value, self.uncertainty)
    }
}

macro_rules! scalar_operation {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<f64> for Measurement {
            type Output = Measurement;

            fn $method(self, rhs: f64) -> Measurement {
                self $op Measurement::exact(rhs)
            }
        }
    };
}

scalar_operation!(Add, add, +);
scalar_operation!(Sub, sub, -);
scalar_operation!(Mul, mul, *);
scalar_operation!(Div, div, /);
