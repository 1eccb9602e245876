/// A response curve that maps an input `x` to an output `y`.
///
/// Cable components describe their physical response (stress-strain, creep)
/// as curves over percent strain. Searchers only need to evaluate the curve
/// and its first derivative, and to know whether the curve is well-formed
/// enough to evaluate at all.
pub trait Curve {
    /// Returns true if the curve is well-formed and can be evaluated.
    fn is_valid(&self) -> bool;

    /// Evaluates the curve output at `x`.
    fn y(&self, x: f64) -> f64;

    /// Evaluates the first derivative of the curve at `x`.
    fn slope(&self, x: f64) -> f64;
}

impl<C: Curve + ?Sized> Curve for &C {
    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }

    fn y(&self, x: f64) -> f64 {
        (**self).y(x)
    }

    fn slope(&self, x: f64) -> f64 {
        (**self).slope(x)
    }
}
