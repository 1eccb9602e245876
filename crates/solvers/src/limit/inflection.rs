//! Limit search by inflection.
//!
//! Walks the curve and stops where its output stops increasing.

use cable_core::{Curve, Observer, Point};

use super::{Action, Criterion, Event, NotFound, Sweep, grid::Grid};

/// Finds the last sample before the curve output first decreases.
///
/// # Errors
///
/// Returns [`NotFound`] if the curve or sweep is invalid, if the output never
/// decreases within the sweep, or if the observer stops the scan.
pub fn scan<C, Obs>(curve: &C, sweep: &Sweep, mut observer: Obs) -> Result<Point, NotFound>
where
    C: Curve + ?Sized,
    Obs: Observer<Event, Action>,
{
    run(curve, sweep, &mut observer)
}

pub(super) fn run<C, Obs>(curve: &C, sweep: &Sweep, observer: &mut Obs) -> Result<Point, NotFound>
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

        let event = Event::Inflection {
            iter,
            previous,
            current,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Err(NotFound::StoppedByObserver {
                criterion: Criterion::Inflection,
                x: previous.x,
            });
        }

        if current.y < previous.y {
            return Ok(previous);
        }
        previous = current;
    }

    Err(grid.exhausted(Criterion::Inflection))
}
