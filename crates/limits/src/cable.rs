use std::fmt;

use cable_core::{Curve, Polynomial};

/// The physical components of a cable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComponentKind {
    Core,
    Shell,
}

impl ComponentKind {
    /// Every component, in solve order.
    pub const ALL: [Self; 2] = [Self::Core, Self::Shell];
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Core => "core",
            Self::Shell => "shell",
        })
    }
}

/// The response curves tracked for each component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveKind {
    Creep,
    LoadStrain,
}

impl CurveKind {
    /// Every curve, in solve order.
    pub const ALL: [Self; 2] = [Self::Creep, Self::LoadStrain];
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Creep => "creep",
            Self::LoadStrain => "stress-strain",
        })
    }
}

/// One physical component of a cable.
///
/// Polynomials map percent strain to load. The limit fields hold the load at
/// which each polynomial stops being trustworthy, rounded to one decimal, and
/// are written by [`solve_limits`](crate::solve_limits).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CableComponent {
    pub coefficients_polynomial_creep: Polynomial,
    pub coefficients_polynomial_loadstrain: Polynomial,

    /// Tension elastic modulus multiplied by the component area.
    pub modulus_tension_elastic_area: f64,

    pub load_limit_polynomial_creep: f64,
    pub load_limit_polynomial_loadstrain: f64,
}

impl CableComponent {
    /// Returns true if the component contributes to the cable response.
    ///
    /// A component is enabled when its load-strain polynomial is valid and
    /// its tension modulus is finite and positive.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.coefficients_polynomial_loadstrain.is_valid()
            && self.modulus_tension_elastic_area.is_finite()
            && self.modulus_tension_elastic_area > 0.0
    }

    /// Returns the largest slope a curve of this component may show.
    #[must_use]
    pub fn slope_max(&self) -> f64 {
        self.modulus_tension_elastic_area / 100.0
    }

    /// Returns the polynomial for a curve.
    #[must_use]
    pub fn polynomial(&self, curve: CurveKind) -> &Polynomial {
        match curve {
            CurveKind::Creep => &self.coefficients_polynomial_creep,
            CurveKind::LoadStrain => &self.coefficients_polynomial_loadstrain,
        }
    }

    /// Returns the stored limit load for a curve.
    #[must_use]
    pub fn limit(&self, curve: CurveKind) -> f64 {
        match curve {
            CurveKind::Creep => self.load_limit_polynomial_creep,
            CurveKind::LoadStrain => self.load_limit_polynomial_loadstrain,
        }
    }

    pub(crate) fn set_limit(&mut self, curve: CurveKind, load: f64) {
        match curve {
            CurveKind::Creep => self.load_limit_polynomial_creep = load,
            CurveKind::LoadStrain => self.load_limit_polynomial_loadstrain = load,
        }
    }
}

/// A cable made of a core and a shell component.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cable {
    pub name: String,
    pub component_core: CableComponent,
    pub component_shell: CableComponent,
}

impl Cable {
    /// Creates a cable from its components.
    #[must_use]
    pub fn new(name: impl Into<String>, core: CableComponent, shell: CableComponent) -> Self {
        Self {
            name: name.into(),
            component_core: core,
            component_shell: shell,
        }
    }

    /// Returns a component.
    #[must_use]
    pub fn component(&self, kind: ComponentKind) -> &CableComponent {
        match kind {
            ComponentKind::Core => &self.component_core,
            ComponentKind::Shell => &self.component_shell,
        }
    }

    /// Returns a component for modification.
    pub fn component_mut(&mut self, kind: ComponentKind) -> &mut CableComponent {
        match kind {
            ComponentKind::Core => &mut self.component_core,
            ComponentKind::Shell => &mut self.component_shell,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn steel() -> CableComponent {
        CableComponent {
            coefficients_polynomial_creep: Polynomial::new(vec![47.1, 36211.3, -12201.4, -22392.0]),
            coefficients_polynomial_loadstrain: Polynomial::new(vec![
                -69.3, 38629.0, 3998.1, -45713.0,
            ]),
            modulus_tension_elastic_area: 4_500_000.0,
            ..CableComponent::default()
        }
    }

    #[test]
    fn enabled_needs_curve_and_modulus() {
        assert!(steel().is_enabled());

        let no_modulus = CableComponent {
            modulus_tension_elastic_area: 0.0,
            ..steel()
        };
        assert!(!no_modulus.is_enabled());

        let no_curve = CableComponent {
            coefficients_polynomial_loadstrain: Polynomial::new(vec![0.0; 5]),
            ..steel()
        };
        assert!(!no_curve.is_enabled());

        assert!(!CableComponent::default().is_enabled());
    }

    #[test]
    fn slope_max_is_one_percent_of_modulus() {
        assert_relative_eq!(steel().slope_max(), 45_000.0);
    }

    #[test]
    fn limits_are_addressed_by_curve() {
        let mut component = steel();
        component.set_limit(CurveKind::Creep, 1.5);
        component.set_limit(CurveKind::LoadStrain, 2.5);

        assert_relative_eq!(component.load_limit_polynomial_creep, 1.5);
        assert_relative_eq!(component.limit(CurveKind::LoadStrain), 2.5);
    }

    #[test]
    fn components_are_addressed_by_kind() {
        let mut cable = Cable::new("test", steel(), CableComponent::default());
        assert!(cable.component(ComponentKind::Core).is_enabled());
        assert!(!cable.component(ComponentKind::Shell).is_enabled());

        cable.component_mut(ComponentKind::Shell).modulus_tension_elastic_area = 1.0;
        assert_relative_eq!(cable.component_shell.modulus_tension_elastic_area, 1.0);
    }
}
