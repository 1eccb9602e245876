use cable_core::Point;

use super::Criterion;

/// Actions an observer can take during a limit scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the scan; it reports [`NotFound::StoppedByObserver`].
    ///
    /// [`NotFound::StoppedByObserver`]: super::NotFound::StoppedByObserver
    StopEarly,
}

/// Events emitted by the limit scans, one per sample.
///
/// `previous` is the sample the scan would report if `current` triggers it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Inflection scan sample.
    Inflection {
        /// Sample counter (1-based within the scan).
        iter: usize,
        /// The previous sample.
        previous: Point,
        /// The sample just evaluated.
        current: Point,
    },

    /// Slope-band scan sample.
    Slope {
        /// Sample counter (1-based within the scan).
        iter: usize,
        /// The previous sample.
        previous: Point,
        /// The sample just evaluated.
        current: Point,
        /// Curve slope at `current.x`.
        slope: f64,
    },
}

impl Event {
    /// Returns the criterion of the scan that emitted the event.
    #[must_use]
    pub fn criterion(&self) -> Criterion {
        match self {
            Self::Inflection { .. } => Criterion::Inflection,
            Self::Slope { .. } => Criterion::Slope,
        }
    }

    /// Returns the sample counter.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Inflection { iter, .. } | Self::Slope { iter, .. } => *iter,
        }
    }

    /// Returns the previous sample.
    #[must_use]
    pub fn previous(&self) -> Point {
        match self {
            Self::Inflection { previous, .. } | Self::Slope { previous, .. } => *previous,
        }
    }

    /// Returns the sample just evaluated.
    #[must_use]
    pub fn current(&self) -> Point {
        match self {
            Self::Inflection { current, .. } | Self::Slope { current, .. } => *current,
        }
    }
}
