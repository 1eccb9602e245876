use super::{Criterion, NotFound, Sweep};

/// Slack on the step count so that ranges that are an exact multiple of the
/// step are not cut short by rounding in the division.
const COUNT_SLACK: f64 = 1e-9;

/// A validated, bounded sampling grid.
///
/// Sample `i` sits at `x_min + i * step`. Sample 0 is the scan start; samples
/// `1..=comparisons` are compared against their predecessor. The last
/// compared sample is the last one at or below `x_max`; nothing past the end
/// of the range is evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Grid {
    x_min: f64,
    x_max: f64,
    step: f64,
    comparisons: usize,
    max_iters: usize,
}

impl Grid {
    /// Validates a sweep and builds its grid.
    ///
    /// # Errors
    ///
    /// Returns `NotFound::InvalidRange` if the range is non-finite or
    /// reversed, or `NotFound::InvalidStep` if the step is not positive.
    pub(super) fn new(sweep: &Sweep) -> Result<Self, NotFound> {
        let [x_min, x_max] = sweep.range;
        let step = sweep.step;

        if !x_min.is_finite() || !x_max.is_finite() || x_max < x_min {
            return Err(NotFound::InvalidRange {
                min: x_min,
                max: x_max,
            });
        }

        if !step.is_finite() || step <= 0.0 {
            return Err(NotFound::InvalidStep { step });
        }

        // Float-to-int casts saturate, so a tiny step just yields a huge count
        // that `max_iters` then bounds.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = ((x_max - x_min) / step + COUNT_SLACK).floor() as usize;

        Ok(Self {
            x_min,
            x_max,
            step,
            comparisons: steps,
            max_iters: sweep.max_iters,
        })
    }

    /// Returns the x value of sample `i`.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn x(&self, i: usize) -> f64 {
        self.x_min + i as f64 * self.step
    }

    /// Returns the samples to compare as `(iter, x)`, capped at `max_iters`.
    pub(super) fn samples(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        (1..=self.comparisons.min(self.max_iters)).map(|i| (i, self.x(i)))
    }

    /// Returns the error for a scan that ran out of samples without triggering.
    pub(super) fn exhausted(&self, criterion: Criterion) -> NotFound {
        if self.comparisons > self.max_iters {
            NotFound::MaxIters {
                criterion,
                max_iters: self.max_iters,
            }
        } else {
            NotFound::Exhausted {
                criterion,
                x_max: self.x_max,
            }
        }
    }
}
