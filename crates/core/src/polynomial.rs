use crate::Curve;

/// A polynomial in `x` defined by its coefficients.
///
/// Coefficients are ordered lowest power first, so `[a0, a1, a2]` describes
/// `a0 + a1·x + a2·x²`. Cable component curves use percent strain as `x`
/// and virtual stress as `y`.
///
/// # Examples
///
/// ```
/// use cable_core::{Curve, Polynomial};
///
/// let p = Polynomial::new(vec![1.0, 2.0, 3.0]);
/// assert_eq!(p.y(2.0), 17.0);
/// assert_eq!(p.slope(2.0), 14.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from coefficients ordered lowest power first.
    #[must_use]
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    /// Returns the coefficients, lowest power first.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the polynomial order, or `None` if there are no coefficients.
    #[must_use]
    pub fn order(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }
}

impl From<Vec<f64>> for Polynomial {
    fn from(coefficients: Vec<f64>) -> Self {
        Self::new(coefficients)
    }
}

impl From<&[f64]> for Polynomial {
    fn from(coefficients: &[f64]) -> Self {
        Self::new(coefficients.to_vec())
    }
}

impl Curve for Polynomial {
    /// A polynomial is valid if it has at least one coefficient, all of them
    /// are finite, and at least one is non-zero.
    fn is_valid(&self) -> bool {
        !self.coefficients.is_empty()
            && self.coefficients.iter().all(|c| c.is_finite())
            && self.coefficients.iter().any(|&c| c != 0.0)
    }

    /// Evaluates the polynomial with Horner's method.
    fn y(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }

    /// Evaluates the first derivative with Horner's method.
    fn slope(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .fold(0.0, |acc, (power, &c)| acc * x + c * power as f64)
    }
}
