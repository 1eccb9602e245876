use thiserror::Error;

use crate::CurveId;

/// Errors that can occur while solving cable limits.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// One or more enabled curves have no limit under [`Policy::Strict`].
    ///
    /// The cable's limit fields are still fully written, with zero for each
    /// unresolved curve.
    ///
    /// [`Policy::Strict`]: crate::Policy::Strict
    #[error("could not solve polynomial limits for: {}", list(.curves))]
    Unresolved { curves: Vec<CurveId> },
}

fn list(curves: &[CurveId]) -> String {
    curves
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
