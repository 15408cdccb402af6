// ─────────────────────────────────────────────────────────────────────
// SCPN Cosmology — Property-Based Tests (proptest) for cosmo-core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for cosmo-core using proptest.
//!
//! Covers: Friedmann age against the analytic ΛCDM solution, monotonicity
//! in Ωm, H0 scaling, Planck-unit round trip, dimensional solver validity.

use cosmo_core::friedmann::FriedmannIntegrator;
use cosmo_core::planck::{DimensionalSolver, PlanckUnits};
use cosmo_types::config::QuadratureConfig;
use cosmo_types::constants::hubble_to_si;
use cosmo_types::units::Dimension;
use num_rational::Rational64;
use proptest::prelude::*;

fn integrator(h0: f64, omega_m: f64) -> FriedmannIntegrator {
    FriedmannIntegrator::new(hubble_to_si(h0), omega_m, QuadratureConfig::default()).unwrap()
}

// ── Friedmann Properties ─────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Quadrature age agrees with the closed form across Ωm.
    #[test]
    fn age_matches_closed_form(omega_m in 0.01f64..=1.0) {
        let f = integrator(67.36, omega_m);
        let age = f.age().unwrap();
        let exact = f.age_closed_form();
        prop_assert!((age.value - exact).abs() / exact < 1e-6,
            "Omega_m = {}: {} vs {}", omega_m, age.value, exact);
        prop_assert!(age.rel_error() < 1e-6);
    }

    /// More matter decelerates more: age decreases with Ωm.
    #[test]
    fn age_decreases_with_matter(omega_m in 0.05f64..0.9) {
        let young = integrator(70.0, omega_m + 0.05).age().unwrap().value;
        let old = integrator(70.0, omega_m).age().unwrap().value;
        prop_assert!(young < old);
    }

    /// Age and diameter scale as 1/H0.
    #[test]
    fn results_scale_inverse_with_h0(h0 in 40.0f64..100.0) {
        let base = integrator(50.0, 0.3);
        let other = integrator(h0, 0.3);
        let ratio_age = other.age().unwrap().value / base.age().unwrap().value;
        let ratio_d = other.diameter().unwrap().value / base.diameter().unwrap().value;
        prop_assert!((ratio_age - 50.0 / h0).abs() < 1e-9);
        prop_assert!((ratio_d - 50.0 / h0).abs() < 1e-9);
    }

    /// Comoving distance grows with redshift.
    #[test]
    fn comoving_distance_monotone(z in 0.01f64..20.0) {
        let f = integrator(67.36, 0.3153);
        let near = f.comoving_distance(z).unwrap().value;
        let far = f.comoving_distance(z * 1.1).unwrap().value;
        prop_assert!(far > near);
    }
}

// ── Planck Unit Properties ───────────────────────────────────────────

proptest! {
    /// For any target dimension, the solved exponents reproduce it.
    #[test]
    fn solved_exponents_reproduce_target(
        l in -4i64..=4,
        t in -4i64..=4,
        m in -4i64..=4,
    ) {
        let solver = DimensionalSolver::planck();
        let target = Dimension::new(l, t, m);
        let sol = solver.solve(target).unwrap();
        for axis in 0..3 {
            let mut acc = Rational64::from_integer(0);
            for (constant, exp) in solver.basis().iter().zip(sol.exponents.iter()) {
                acc += Rational64::from_integer(constant.dimension.components()[axis]) * *exp;
            }
            prop_assert_eq!(acc, Rational64::from_integer(target.components()[axis]));
        }
    }

    /// Converting to Planck units and back is the identity.
    #[test]
    fn planck_round_trip(seconds in 1.0f64..1e18) {
        let units = PlanckUnits::derive().unwrap();
        let in_planck = seconds / units.time_si();
        let back = in_planck * units.time_si();
        prop_assert!((back - seconds).abs() / seconds < 1e-12);
    }
}
