use thiserror::Error;

/// Errors that can occur when creating a [`SlopeBand`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BandError {
    /// One or both bounds are non-finite.
    #[error("non-finite slope bound(s): [{min}, {max}]")]
    NonFinite { min: f64, max: f64 },

    /// The upper bound is below the lower bound.
    #[error("slope max {max} is below slope min {min}")]
    Inverted { min: f64, max: f64 },
}

/// The admissible slope range of a curve.
///
/// A slope equal to either bound is still admissible; the slope-band scan
/// only triggers when the slope is strictly outside `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlopeBand {
    min: f64,
    max: f64,
}

impl SlopeBand {
    /// Creates a validated slope band.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is non-finite or if `max < min`.
    pub fn new(min: f64, max: f64) -> Result<Self, BandError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(BandError::NonFinite { min, max });
        }
        if max < min {
            return Err(BandError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the lower slope bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper slope bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns true if `slope` is strictly below `min` or strictly above `max`.
    #[must_use]
    pub fn is_violated_by(&self, slope: f64) -> bool {
        slope < self.min || self.max < slope
    }
}
