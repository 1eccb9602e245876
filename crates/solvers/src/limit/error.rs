use thiserror::Error;

use super::{BandError, Criterion};

/// Reasons a curve limit could not be found.
///
/// None of these are fatal. Callers decide whether an unresolved limit
/// matters to them.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NotFound {
    #[error("curve is not valid")]
    InvalidCurve,

    #[error("invalid scan range [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },

    #[error("scan step must be finite and positive, got {step}")]
    InvalidStep { step: f64 },

    #[error("strain must be finite and non-negative, got {strain}")]
    InvalidStrain { strain: f64 },

    #[error("invalid slope band")]
    InvalidBand(#[from] BandError),

    #[error("{criterion} scan did not trigger up to x = {x_max}")]
    Exhausted { criterion: Criterion, x_max: f64 },

    #[error("{criterion} scan hit the {max_iters} sample limit")]
    MaxIters {
        criterion: Criterion,
        max_iters: usize,
    },

    #[error("{criterion} scan stopped by observer at x = {x}")]
    StoppedByObserver { criterion: Criterion, x: f64 },
}
