use cable_core::round;
use cable_solvers::limit::{self, NotFound, SlopeBand};

use crate::{
    Cable, CableComponent, ComponentKind, Config, CurveId, CurveKind, Error, Outcome, Policy,
    Report,
};

/// Solves the polynomial limits of every cable component.
///
/// Disabled components get zero limits without being searched. Each curve of
/// an enabled component is searched with the band
/// `[config.slope_min(), modulus_tension_elastic_area / 100]` (or evaluated
/// at the strain override, if set) and its limit load is stored rounded to
/// one decimal. Curves without a limit store zero.
///
/// Polynomials are searched in their native units (percent strain, load).
///
/// # Errors
///
/// Returns [`Error::Unresolved`] under [`Policy::Strict`] if any enabled
/// curve has no limit. The cable is fully updated either way.
pub fn solve_limits(cable: &mut Cable, config: &Config) -> Result<Report, Error> {
    let span = tracing::debug_span!("solve_limits", cable = %cable.name);
    let _entered = span.enter();

    let mut report = Report::default();
    for kind in ComponentKind::ALL {
        solve_component(kind, cable.component_mut(kind), config, &mut report);
    }

    match config.policy() {
        Policy::Permissive => Ok(report),
        Policy::Strict => {
            let curves: Vec<CurveId> = report.unresolved().collect();
            if curves.is_empty() {
                Ok(report)
            } else {
                Err(Error::Unresolved { curves })
            }
        }
    }
}

fn solve_component(
    kind: ComponentKind,
    component: &mut CableComponent,
    config: &Config,
    report: &mut Report,
) {
    if !component.is_enabled() {
        tracing::debug!("{kind} is disabled, skipping limit search");
        for curve in CurveKind::ALL {
            component.set_limit(curve, 0.0);
            report.record(CurveId::new(kind, curve), Outcome::Disabled);
        }
        return;
    }

    let band = SlopeBand::new(config.slope_min(), component.slope_max());

    for curve in CurveKind::ALL {
        let id = CurveId::new(kind, curve);
        let name = id.to_string();
        let polynomial = component.polynomial(curve);

        let result = match (config.strain(), &band) {
            (Some(strain), _) => limit::at_strain(&name, polynomial, strain),
            (None, Ok(band)) => limit::find_limit(&name, polynomial, band, config.search(), ()),
            (None, Err(error)) => {
                tracing::warn!(curve = %name, %error, "could not solve for {name} polynomial limit");
                Err(NotFound::from(*error))
            }
        };

        match result {
            Ok(found) => {
                component.set_limit(curve, round(found.point.y, 1));
                report.record(id, Outcome::Resolved(found));
            }
            Err(reason) => {
                component.set_limit(curve, 0.0);
                report.record(id, Outcome::Unresolved(reason));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use cable_core::Polynomial;
    use cable_solvers::limit::{BandError, Criterion};

    fn aluminum() -> CableComponent {
        CableComponent {
            coefficients_polynomial_creep: Polynomial::new(vec![-544.8, 21426.8, -18842.2, -5495.0]),
            coefficients_polynomial_loadstrain: Polynomial::new(vec![
                -1213.0, 44308.1, -14004.4, -37618.0,
            ]),
            modulus_tension_elastic_area: 4_500_000.0,
            load_limit_polynomial_creep: -1.0,
            load_limit_polynomial_loadstrain: -1.0,
        }
    }

    #[test]
    fn disabled_component_is_zeroed_without_searching() {
        let mut component = CableComponent {
            modulus_tension_elastic_area: 0.0,
            ..aluminum()
        };
        let mut report = Report::default();

        solve_component(ComponentKind::Core, &mut component, &Config::default(), &mut report);

        assert_relative_eq!(component.load_limit_polynomial_creep, 0.0);
        assert_relative_eq!(component.load_limit_polynomial_loadstrain, 0.0);
        assert!(report.iter().all(|(_, outcome)| *outcome == Outcome::Disabled));
        assert_eq!(report.iter().count(), 2);
    }

    #[test]
    fn stores_rounded_limit_loads() {
        let mut component = aluminum();
        let mut report = Report::default();

        solve_component(ComponentKind::Shell, &mut component, &Config::default(), &mut report);

        assert_relative_eq!(component.load_limit_polynomial_creep, 4783.1);
        assert_relative_eq!(component.load_limit_polynomial_loadstrain, 12748.9);

        let Some(Outcome::Resolved(found)) =
            report.outcome(ComponentKind::Shell, CurveKind::LoadStrain)
        else {
            panic!("load-strain limit should resolve");
        };
        assert_eq!(found.criterion, Criterion::Slope);
        assert_relative_eq!(found.point.x, 0.507, epsilon = 1e-9);
    }

    #[test]
    fn inverted_band_leaves_curves_unresolved() {
        // slope_max = 500 is below the default slope_min of 1000.
        let mut component = CableComponent {
            modulus_tension_elastic_area: 50_000.0,
            ..aluminum()
        };
        let mut report = Report::default();

        solve_component(ComponentKind::Shell, &mut component, &Config::default(), &mut report);

        assert_relative_eq!(component.load_limit_polynomial_creep, 0.0);
        assert_relative_eq!(component.load_limit_polynomial_loadstrain, 0.0);
        assert_eq!(
            report.outcome(ComponentKind::Shell, CurveKind::Creep),
            Some(&Outcome::Unresolved(NotFound::InvalidBand(
                BandError::Inverted {
                    min: 1000.0,
                    max: 500.0,
                }
            )))
        );
    }

    #[test]
    fn strain_override_skips_band_checks() {
        let mut component = CableComponent {
            modulus_tension_elastic_area: 50_000.0,
            ..aluminum()
        };
        let mut report = Report::default();
        let config = Config::new(1000.0, Some(0.3), Policy::Strict).expect("valid config");

        solve_component(ComponentKind::Shell, &mut component, &config, &mut report);

        assert_relative_eq!(component.load_limit_polynomial_creep, 4039.1);
        assert_relative_eq!(component.load_limit_polynomial_loadstrain, 9803.3);
        assert!(report.is_complete());
    }
}
