use std::fmt;

use cable_solvers::limit::{Limit, NotFound};

use crate::{ComponentKind, CurveKind};

/// Identifies one curve of one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveId {
    pub component: ComponentKind,
    pub curve: CurveKind,
}

impl CurveId {
    #[must_use]
    pub fn new(component: ComponentKind, curve: CurveKind) -> Self {
        Self { component, curve }
    }
}

/// Formats as `"<component> <curve>"`, e.g. `"core creep"`.
impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.component, self.curve)
    }
}

/// What happened to a single curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// A limit was found; the stored load is its rounded `y`.
    Resolved(Limit),

    /// No limit was found; the stored load is zero.
    Unresolved(NotFound),

    /// The component is disabled; the stored load is zero and no search ran.
    Disabled,
}

/// Per-curve results of a [`solve_limits`](crate::solve_limits) call.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    outcomes: Vec<(CurveId, Outcome)>,
}

impl Report {
    pub(crate) fn record(&mut self, id: CurveId, outcome: Outcome) {
        self.outcomes.push((id, outcome));
    }

    /// Returns the outcome for a curve, if it was processed.
    #[must_use]
    pub fn outcome(&self, component: ComponentKind, curve: CurveKind) -> Option<&Outcome> {
        let id = CurveId::new(component, curve);
        self.outcomes
            .iter()
            .find_map(|(key, outcome)| (*key == id).then_some(outcome))
    }

    /// Iterates over every processed curve in solve order.
    pub fn iter(&self) -> impl Iterator<Item = &(CurveId, Outcome)> {
        self.outcomes.iter()
    }

    /// Iterates over the curves that were searched but not resolved.
    pub fn unresolved(&self) -> impl Iterator<Item = CurveId> + '_ {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, Outcome::Unresolved(_)))
            .map(|(id, _)| *id)
    }

    /// Returns true if every enabled curve has a limit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unresolved().next().is_none()
    }
}
