//! Core traits and types for cable polynomial limit searching.
//!
//! This crate defines the shared abstractions that the limit searcher and the
//! cable orchestrator build on:
//!
//! - [`Curve`] — a response curve that can be evaluated and differentiated
//! - [`Polynomial`] — the coefficient-based curve used by cable components
//! - [`Point`] — a single `(x, y)` coordinate on a curve
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`round`] and [`format_fixed`] — decimal rounding used for stored limits
//!   and diagnostics

mod curve;
mod observer;
mod point;
mod polynomial;
mod round;

pub use curve::Curve;
pub use observer::Observer;
pub use point::Point;
pub use polynomial::Polynomial;
pub use round::{format_fixed, round};
