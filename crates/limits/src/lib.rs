//! Polynomial limit solving for whole cables.
//!
//! A [`Cable`] has a core and a shell component, each described by a creep
//! and a load-strain polynomial. [`solve_limits`] runs the limit search from
//! [`cable_solvers::limit`] on every curve of every enabled component, using
//! slope bounds derived from that component's elastic modulus, and writes
//! the rounded limit loads back onto the cable.
//!
//! ```
//! use cable_core::Polynomial;
//! use cable_limits::{Cable, CableComponent, Config, solve_limits};
//!
//! let shell = CableComponent {
//!     coefficients_polynomial_creep: Polynomial::new(vec![-544.8, 21426.8, -18842.2, -5495.0]),
//!     coefficients_polynomial_loadstrain: Polynomial::new(vec![-1213.0, 44308.1, -14004.4, -37618.0]),
//!     modulus_tension_elastic_area: 4_500_000.0,
//!     ..CableComponent::default()
//! };
//! let mut cable = Cable::new("Drake", CableComponent::default(), shell);
//!
//! let report = solve_limits(&mut cable, &Config::default()).unwrap();
//!
//! assert!(report.is_complete());
//! assert_eq!(cable.component_shell.load_limit_polynomial_loadstrain, 12748.9);
//! assert_eq!(cable.component_core.load_limit_polynomial_loadstrain, 0.0);
//! ```

mod cable;
mod config;
mod error;
mod report;
mod solve;

pub use cable::{Cable, CableComponent, ComponentKind, CurveKind};
pub use config::{Config, ConfigError, DEFAULT_SLOPE_MIN, Policy};
pub use error::Error;
pub use report::{CurveId, Outcome, Report};
pub use solve::solve_limits;
