/// Default sample spacing, in percent strain.
pub const DEFAULT_STEP: f64 = 0.001;

/// Default ceiling on the number of samples a single scan may take.
pub const DEFAULT_MAX_ITERS: usize = 1_000_000;

/// The grid a single scan walks.
///
/// Values are checked when a scan starts rather than on construction: a scan
/// given an unusable sweep reports [`NotFound::InvalidRange`] or
/// [`NotFound::InvalidStep`] instead of searching.
///
/// [`NotFound::InvalidRange`]: super::NotFound::InvalidRange
/// [`NotFound::InvalidStep`]: super::NotFound::InvalidStep
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sweep {
    /// Scan range as `[x_min, x_max]`.
    pub range: [f64; 2],
    /// Spacing between samples.
    pub step: f64,
    /// Maximum number of samples compared before giving up.
    pub max_iters: usize,
}

impl Sweep {
    /// Creates a sweep over `range` with the default step and sample ceiling.
    #[must_use]
    pub fn over(range: [f64; 2]) -> Self {
        Self {
            range,
            step: DEFAULT_STEP,
            max_iters: DEFAULT_MAX_ITERS,
        }
    }
}

/// Configuration for [`find_limit`](super::find_limit).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Sweep used by the inflection scan.
    pub inflection: Sweep,
    /// Sweep used by the slope-band scan.
    pub slope: Sweep,
}

/// Scans 0–1 % strain for inflection and 0.2–1 % strain for slope.
///
/// Slopes at very low strain are unstable for fitted cable curves, so the
/// slope-band scan starts later.
impl Default for Config {
    fn default() -> Self {
        Self {
            inflection: Sweep::over([0.0, 1.0]),
            slope: Sweep::over([0.2, 1.0]),
        }
    }
}
