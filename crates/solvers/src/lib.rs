//! Limit searching for cable component response curves.
//!
//! A cable component's stress-strain and creep behavior is described by
//! polynomials over percent strain. Those polynomials are fitted to test data
//! and only mean something up to a point: past it the curve either turns over
//! or its slope drifts out of the range the material can physically show.
//!
//! # Solvers
//!
//! - [`limit`] — discretized scans that find where a curve stops being
//!   physically meaningful

pub mod limit;
