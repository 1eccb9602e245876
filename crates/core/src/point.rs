use std::fmt;

use crate::format_fixed;

/// A single coordinate on a curve.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The input value (percent strain for cable curves).
    pub x: f64,

    /// The curve output at `x`.
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Formats the point as `(x, y)` with 3 decimals on x and 1 on y.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", format_fixed(self.x, 3), format_fixed(self.y, 1))
    }
}
