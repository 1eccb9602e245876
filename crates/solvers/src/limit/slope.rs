//! Limit search by slope band.
//!
//! Walks the curve and stops where its slope leaves the admissible band.

use cable_core::{Curve, Observer, Point};

use super::{Action, Criterion, Event, NotFound, SlopeBand, Sweep, grid::Grid};

/// Finds the last sample before the curve slope first leaves `band`.
///
/// The slope is checked at each sample after the scan start; the start
/// itself is only used as the fallback point.
///
/// # Errors
///
/// Returns [`NotFound`] if the curve or sweep is invalid, if the slope stays
/// within the band over the whole sweep, or if the observer stops the scan.
pub fn scan<C, Obs>(
    curve: &C,
    sweep: &Sweep,
    band: &SlopeBand,
    mut observer: Obs,
) -> Result<Point, NotFound>
where
    C: Curve + ?Sized,
    Obs: Observer<Event, Action>,
{
    run(curve, sweep, band, &mut observer)
}

pub(super) fn run<C, Obs>(
    curve: &C,
    sweep: &Sweep,
    band: &SlopeBand,
    observer: &mut Obs,
) -> Result<Point, NotFound>
where
    C: Curve + ?Sized,
    Obs: Observer<Event, Action>,
{
    if !curve.is_valid() {
        return Err(NotFound::InvalidCurve);
    }
    let grid = Grid::new(sweep)?;

    let x_start = grid.x(0);
    let mut previous = Point::new(x_start, curve.y(x_start));

    for (iter, x) in grid.samples() {
        let current = Point::new(x, curve.y(x));
        let slope = curve.slope(x);

        let event = Event::Slope {
            iter,
            previous,
            current,
            slope,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Err(NotFound::StoppedByObserver {
                criterion: Criterion::Slope,
                x: previous.x,
            });
        }

        if band.is_violated_by(slope) {
            return Ok(previous);
        }
        previous = current;
    }

    Err(grid.exhausted(Criterion::Slope))
}
