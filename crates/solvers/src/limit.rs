//! Polynomial limit search.
//!
//! # Algorithm
//!
//! Two independent scans walk the curve on a fixed grid of `x` values:
//!
//! - the **inflection scan** stops at the first sample whose `y` is lower
//!   than the previous sample's `y`
//! - the **slope-band scan** stops at the first sample whose slope is
//!   strictly outside a [`SlopeBand`]
//!
//! Each scan reports the sample *before* the one that triggered it. Sample
//! positions are computed as `x_min + i * step` from an integer counter, so
//! long scans do not accumulate floating-point drift.
//!
//! [`find_limit`] runs both scans and keeps the candidate with the smaller
//! `x`, with ties going to the inflection candidate. If either scan comes up
//! empty the whole search does: a curve is only trusted when both criteria
//! bound it.
//!
//! # Observer Events
//!
//! Each scan emits one [`Event`] per sample. Observers can return
//! [`Action::StopEarly`] to end a scan, which makes it report
//! [`NotFound::StoppedByObserver`].

mod band;
mod config;
mod error;
mod event;
mod grid;

pub mod inflection;
pub mod slope;


use std::fmt;

use cable_core::{Curve, Observer, Point};

pub use band::{BandError, SlopeBand};
pub use config::{Config, Sweep};
pub use error::NotFound;
pub use event::{Action, Event};

/// The criterion that produced a limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Criterion {
    /// The curve output stopped increasing.
    Inflection,

    /// The curve slope left the admissible band.
    Slope,

    /// The limit was taken at a caller-supplied strain.
    Override,
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Inflection => "inflection",
            Self::Slope => "slope",
            Self::Override => "strain override",
        })
    }
}

/// A resolved curve limit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limit {
    /// The last point at which the curve is still physically meaningful.
    pub point: Point,

    /// The criterion that produced `point`.
    pub criterion: Criterion,
}

/// Finds the limit point of a curve using both the inflection and the
/// slope-band criteria, and returns the more restrictive one.
///
/// `name` identifies the curve in diagnostics (for example `"core creep"`).
/// The observer receives the events of both scans, inflection first.
///
/// # Errors
///
/// Returns [`NotFound`] if the curve is invalid or if either scan fails to
/// trigger within its sweep.
pub fn find_limit<C, Obs>(
    name: &str,
    curve: &C,
    band: &SlopeBand,
    config: &Config,
    mut observer: Obs,
) -> Result<Limit, NotFound>
where
    C: Curve + ?Sized,
    Obs: Observer<Event, Action>,
{
    let result = search(curve, band, config, &mut observer);
    log_outcome(name, &result);
    result
}

/// Finds the limit point with the default config and no observer.
///
/// # Errors
///
/// Returns [`NotFound`] if the curve is invalid or if either scan fails to
/// trigger within its sweep.
pub fn find_limit_unobserved<C>(name: &str, curve: &C, band: &SlopeBand) -> Result<Limit, NotFound>
where
    C: Curve + ?Sized,
{
    find_limit(name, curve, band, &Config::default(), ())
}

/// Takes the limit point directly at a given percent strain.
///
/// This skips both scans: the limit is `(strain, y(strain))`.
///
/// # Errors
///
/// Returns [`NotFound::InvalidCurve`] if the curve is invalid, or
/// [`NotFound::InvalidStrain`] if `strain` is negative or non-finite.
pub fn at_strain<C>(name: &str, curve: &C, strain: f64) -> Result<Limit, NotFound>
where
    C: Curve + ?Sized,
{
    let result = if !curve.is_valid() {
        Err(NotFound::InvalidCurve)
    } else if !strain.is_finite() || strain < 0.0 {
        Err(NotFound::InvalidStrain { strain })
    } else {
        Ok(Limit {
            point: Point::new(strain, curve.y(strain)),
            criterion: Criterion::Override,
        })
    };
    log_outcome(name, &result);
    result
}

fn search<C, Obs>(
    curve: &C,
    band: &SlopeBand,
    config: &Config,
    observer: &mut Obs,
) -> Result<Limit, NotFound>
where
    C: Curve + ?Sized,
    Obs: Observer<Event, Action>,
{
    let by_inflection = inflection::run(curve, &config.inflection, observer);
    let by_slope = slope::run(curve, &config.slope, band, observer);

    let by_inflection = by_inflection?;
    let by_slope = by_slope?;

    if by_inflection.x <= by_slope.x {
        Ok(Limit {
            point: by_inflection,
            criterion: Criterion::Inflection,
        })
    } else {
        Ok(Limit {
            point: by_slope,
            criterion: Criterion::Slope,
        })
    }
}

fn log_outcome(name: &str, result: &Result<Limit, NotFound>) {
    match result {
        Ok(limit) => tracing::debug!(
            curve = name,
            criterion = %limit.criterion,
            "{name} limit = {}",
            limit.point
        ),
        Err(error) => tracing::warn!(
            curve = name,
            %error,
            "could not solve for {name} polynomial limit"
        ),
    }
}
