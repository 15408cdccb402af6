// ─────────────────────────────────────────────────────────────────────
// SCPN Cosmology — Friedmann
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Friedmann integrator for a flat matter + Λ universe.
//!
//! Normalized expansion rate:
//!   E(a) = sqrt(Ωm a⁻³ + (1 − Ωm))
//! Age and comoving horizon diameter:
//!   t0 = H0⁻¹ ∫₀¹ da / (a E(a))
//!   D  = 2 c H0⁻¹ ∫₀¹ da / (a² E(a))
//! Both integrands are integrable at a → 0 (∝ a^½ and a^-½ respectively),
//! which the interior-node adaptive quadrature tolerates.

use cosmo_math::quadrature::{integrate, QuadratureResult};
use cosmo_types::config::{CosmologyParams, QuadratureConfig};
use cosmo_types::constants::{hubble_to_si, C_LIGHT};
use cosmo_types::error::{CosmoError, CosmoResult};
use cosmo_types::units::{Dimension, Quantity};
use tracing::{debug, warn};

/// Below this Ωλ the closed-form age uses the Einstein–de Sitter limit.
const EDS_OMEGA_LAMBDA_EPS: f64 = 1e-12;

/// Flat two-component Friedmann model.
#[derive(Debug, Clone)]
pub struct FriedmannIntegrator {
    h0_si: f64,
    omega_m: f64,
    quadrature: QuadratureConfig,
}

impl FriedmannIntegrator {
    /// Create from H0 in s⁻¹ and Ωm ∈ (0, 1]. Ωλ = 1 − Ωm.
    pub fn new(h0_si: f64, omega_m: f64, quadrature: QuadratureConfig) -> CosmoResult<Self> {
        if !h0_si.is_finite() || h0_si <= 0.0 {
            return Err(CosmoError::DomainViolation(format!(
                "H0 must be finite and > 0, got {h0_si}"
            )));
        }
        if !omega_m.is_finite() || omega_m <= 0.0 || omega_m > 1.0 {
            return Err(CosmoError::DomainViolation(format!(
                "Omega_m must lie in (0, 1] for E(a) to stay real and positive, got {omega_m}"
            )));
        }
        quadrature.validate()?;
        Ok(FriedmannIntegrator {
            h0_si,
            omega_m,
            quadrature,
        })
    }

    /// Create from published parameters (H0 in km s⁻¹ Mpc⁻¹).
    /// Only H0 and Ωm are used; flatness fixes Ωλ.
    pub fn from_params(
        params: &CosmologyParams,
        quadrature: QuadratureConfig,
    ) -> CosmoResult<Self> {
        let integrator = Self::new(hubble_to_si(params.h0), params.omega_m, quadrature)?;
        let implied = integrator.omega_lambda();
        if (implied - params.omega_lambda).abs() > 1e-3 {
            warn!(
                omega_lambda = params.omega_lambda,
                implied, "Omega_Lambda differs from 1 - Omega_m; using the flat value"
            );
        }
        Ok(integrator)
    }

    pub fn h0_si(&self) -> f64 {
        self.h0_si
    }

    pub fn omega_m(&self) -> f64 {
        self.omega_m
    }

    pub fn omega_lambda(&self) -> f64 {
        1.0 - self.omega_m
    }

    /// E(a) = H(a)/H0.
    pub fn expansion_rate(&self, a: f64) -> f64 {
        (self.omega_m * a.powi(-3) + self.omega_lambda()).sqrt()
    }

    /// Hubble time 1/H0 [s].
    pub fn hubble_time(&self) -> f64 {
        1.0 / self.h0_si
    }

    /// Hubble distance c/H0 [m].
    pub fn hubble_distance(&self) -> f64 {
        C_LIGHT / self.h0_si
    }

    fn run_quadrature<F>(
        &self,
        label: &'static str,
        f: F,
        lo: f64,
        hi: f64,
    ) -> CosmoResult<QuadratureResult>
    where
        F: Fn(f64) -> f64,
    {
        let result = integrate(f, lo, hi, &self.quadrature).map_err(|e| {
            warn!(integral = label, omega_m = self.omega_m, error = %e, "quadrature failed");
            e
        })?;
        if result.converged {
            debug!(
                integral = label,
                value = result.value,
                abs_error = result.abs_error,
                subdivisions = result.subdivisions,
                evaluations = result.evaluations,
                "quadrature converged"
            );
        } else {
            warn!(
                integral = label,
                rel_error = result.rel_error(),
                requested = self.quadrature.rel_tol,
                "quadrature hit subdivision limit; accepting under error ceiling"
            );
        }
        Ok(result)
    }

    /// Dimensionless ∫ da / (a E(a)) over [lo, hi].
    fn time_integral(&self, lo: f64, hi: f64) -> CosmoResult<QuadratureResult> {
        self.run_quadrature("time", |a| 1.0 / (a * self.expansion_rate(a)), lo, hi)
    }

    /// Dimensionless ∫ da / (a² E(a)) over [lo, hi].
    fn distance_integral(&self, lo: f64, hi: f64) -> CosmoResult<QuadratureResult> {
        self.run_quadrature("distance", |a| 1.0 / (a * a * self.expansion_rate(a)), lo, hi)
    }

    /// Age of the universe today [s].
    pub fn age(&self) -> CosmoResult<Quantity> {
        self.age_at(1.0)
    }

    /// Cosmic time elapsed when the scale factor was `a` [s].
    pub fn age_at(&self, a: f64) -> CosmoResult<Quantity> {
        check_scale_factor(a)?;
        let r = self.time_integral(0.0, a)?;
        Ok(Quantity::new(r.value, r.abs_error, Dimension::TIME).scaled(self.hubble_time()))
    }

    /// Time between emission at redshift `z` and today [s].
    pub fn lookback_time(&self, z: f64) -> CosmoResult<Quantity> {
        let a = scale_factor_at(z)?;
        let r = self.time_integral(a, 1.0)?;
        Ok(Quantity::new(r.value, r.abs_error, Dimension::TIME).scaled(self.hubble_time()))
    }

    /// Comoving distance to redshift `z` [m].
    pub fn comoving_distance(&self, z: f64) -> CosmoResult<Quantity> {
        let a = scale_factor_at(z)?;
        let r = self.distance_integral(a, 1.0)?;
        Ok(Quantity::new(r.value, r.abs_error, Dimension::LENGTH).scaled(self.hubble_distance()))
    }

    /// Comoving particle horizon radius c H0⁻¹ ∫₀¹ da / (a² E) [m].
    pub fn horizon_radius(&self) -> CosmoResult<Quantity> {
        let r = self.distance_integral(0.0, 1.0)?;
        Ok(Quantity::new(r.value, r.abs_error, Dimension::LENGTH).scaled(self.hubble_distance()))
    }

    /// Comoving diameter of the observable universe, twice the horizon [m].
    pub fn diameter(&self) -> CosmoResult<Quantity> {
        Ok(self.horizon_radius()?.scaled(2.0))
    }

    /// Analytic age for flat ΛCDM [s]:
    ///   t0 = 2 / (3 H0 sqrt(Ωλ)) · asinh(sqrt(Ωλ/Ωm)),
    /// reducing to 2 / (3 H0) for Ωλ = 0.
    pub fn age_closed_form(&self) -> f64 {
        let omega_l = self.omega_lambda();
        if omega_l < EDS_OMEGA_LAMBDA_EPS {
            return 2.0 / (3.0 * self.h0_si);
        }
        2.0 / (3.0 * self.h0_si * omega_l.sqrt()) * (omega_l / self.omega_m).sqrt().asinh()
    }
}

fn check_scale_factor(a: f64) -> CosmoResult<()> {
    if !a.is_finite() || a <= 0.0 || a > 1.0 {
        return Err(CosmoError::DomainViolation(format!(
            "scale factor must lie in (0, 1], got {a}"
        )));
    }
    Ok(())
}

fn scale_factor_at(z: f64) -> CosmoResult<f64> {
    if !z.is_finite() || z < 0.0 {
        return Err(CosmoError::DomainViolation(format!(
            "redshift must be finite and >= 0, got {z}"
        )));
    }
    Ok(1.0 / (1.0 + z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmo_types::constants::{GPC_M, GYR_S};

    fn planck() -> FriedmannIntegrator {
        FriedmannIntegrator::from_params(&CosmologyParams::default(), QuadratureConfig::default())
            .unwrap()
    }

    fn with_omega_m(omega_m: f64) -> CosmoResult<FriedmannIntegrator> {
        FriedmannIntegrator::new(hubble_to_si(67.36), omega_m, QuadratureConfig::default())
    }

    #[test]
    fn test_expansion_rate_today_is_one() {
        let f = planck();
        assert!((f.expansion_rate(1.0) - 1.0).abs() < 1e-15);
        assert!(f.expansion_rate(0.5) > 1.0);
    }

    #[test]
    fn test_matter_only_age_closed_form() {
        let f = with_omega_m(1.0).unwrap();
        let age = f.age().unwrap();
        let expected = 2.0 / (3.0 * f.h0_si());
        let rel = (age.value - expected).abs() / expected;
        assert!(rel < 1e-6, "relative error {rel}");
        assert!(age.rel_error() < 1e-6);
    }

    #[test]
    fn test_matter_only_diameter_closed_form() {
        // ∫₀¹ a^-½ da = 2  ⇒  D = 4 c / H0
        let f = with_omega_m(1.0).unwrap();
        let d = f.diameter().unwrap();
        let expected = 4.0 * f.hubble_distance();
        assert!((d.value - expected).abs() / expected < 1e-6);
    }

    #[test]
    fn test_planck_2018_age_and_diameter() {
        let f = planck();
        let age_gyr = f.age().unwrap().in_units(GYR_S);
        let diameter_gpc = f.diameter().unwrap().in_units(GPC_M);
        assert!((age_gyr - 13.81).abs() <= 0.01, "age = {age_gyr} Gyr");
        assert!((diameter_gpc - 28.83).abs() <= 0.01, "diameter = {diameter_gpc} Gpc");
    }

    #[test]
    fn test_age_matches_analytic_lcdm() {
        for omega_m in [0.05, 0.2, 0.3153, 0.5, 0.9] {
            let f = with_omega_m(omega_m).unwrap();
            let numeric = f.age().unwrap().value;
            let analytic = f.age_closed_form();
            assert!(
                (numeric - analytic).abs() / analytic < 1e-7,
                "Omega_m = {omega_m}: {numeric} vs {analytic}"
            );
        }
    }

    #[test]
    fn test_de_sitter_limit_is_not_silently_finite() {
        let f = with_omega_m(1e-300).unwrap();
        assert!(matches!(
            f.age(),
            Err(CosmoError::NumericalInstability { .. })
        ));
        assert!(matches!(
            f.diameter(),
            Err(CosmoError::NumericalInstability { .. })
        ));
    }

    #[test]
    fn test_domain_violations() {
        for bad in [0.0, -0.3, 1.5, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(with_omega_m(bad), Err(CosmoError::DomainViolation(_))),
                "Omega_m = {bad} should be a domain violation"
            );
        }
        assert!(FriedmannIntegrator::new(0.0, 0.3, QuadratureConfig::default()).is_err());
    }

    #[test]
    fn test_lookback_plus_age_at_equals_age() {
        let f = planck();
        let z = 1.5;
        let t_emit = f.age_at(1.0 / (1.0 + z)).unwrap().value;
        let lookback = f.lookback_time(z).unwrap().value;
        let age = f.age().unwrap().value;
        assert!((t_emit + lookback - age).abs() / age < 1e-8);
    }

    #[test]
    fn test_matter_only_age_at_scale_factor() {
        // t(a) = (2/3) a^{3/2} / H0
        let f = with_omega_m(1.0).unwrap();
        let a = 0.25;
        let t = f.age_at(a).unwrap().value;
        let expected = 2.0 / 3.0 * a.powf(1.5) / f.h0_si();
        assert!((t - expected).abs() / expected < 1e-8);
    }

    #[test]
    fn test_zero_redshift_is_zero() {
        let f = planck();
        assert_eq!(f.lookback_time(0.0).unwrap().value, 0.0);
        assert_eq!(f.comoving_distance(0.0).unwrap().value, 0.0);
    }

    #[test]
    fn test_comoving_distance_approaches_horizon() {
        let f = planck();
        let horizon = f.horizon_radius().unwrap().value;
        let far = f.comoving_distance(1e8).unwrap().value;
        assert!(far < horizon);
        assert!((horizon - far) / horizon < 1e-3);
    }

    #[test]
    fn test_invalid_redshift_and_scale_factor() {
        let f = planck();
        assert!(f.lookback_time(-0.5).is_err());
        assert!(f.comoving_distance(f64::NAN).is_err());
        assert!(f.age_at(0.0).is_err());
        assert!(f.age_at(1.2).is_err());
    }
}
