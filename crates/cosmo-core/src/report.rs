// ─────────────────────────────────────────────────────────────────────
// SCPN Cosmology — Report
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Full result set for one parameter set: age and diameter in physical
//! and Planck units, the Planck-unit formulas, and the composition.
//!
//! Computation is all-or-nothing: any failure aborts before a report
//! exists.

use crate::composition::Composition;
use crate::friedmann::FriedmannIntegrator;
use crate::planck::PlanckUnits;
use cosmo_types::config::RunConfig;
use cosmo_types::constants::{GPC_M, GYR_S};
use cosmo_types::error::CosmoResult;
use serde::Serialize;
use std::fmt;
use tracing::info;

#[derive(Debug, Clone, Serialize)]
pub struct PlanckSummary {
    pub time_formula: String,
    pub length_formula: String,
    pub mass_formula: String,
    pub time_s: f64,
    pub length_m: f64,
    pub mass_kg: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub survey: String,
    pub h0_km_s_mpc: f64,
    pub omega_m: f64,
    pub age_gyr: f64,
    pub age_error_gyr: f64,
    pub diameter_gpc: f64,
    pub diameter_error_gpc: f64,
    pub age_planck: f64,
    pub diameter_planck: f64,
    pub planck: PlanckSummary,
    pub composition: Composition,
    pub composition_total: f64,
}

impl Report {
    pub fn compute(config: &RunConfig) -> CosmoResult<Self> {
        config.validate()?;
        let params = &config.cosmology;

        let friedmann = FriedmannIntegrator::from_params(params, config.quadrature)?;
        let age = friedmann.age()?;
        let diameter = friedmann.diameter()?;

        let planck = PlanckUnits::derive()?;
        let t_p = planck.time_si();
        let l_p = planck.length_si();

        let composition = Composition::from_params(params)?;

        let report = Report {
            survey: params.survey.clone(),
            h0_km_s_mpc: params.h0,
            omega_m: params.omega_m,
            age_gyr: age.in_units(GYR_S),
            age_error_gyr: age.abs_error / GYR_S,
            diameter_gpc: diameter.in_units(GPC_M),
            diameter_error_gpc: diameter.abs_error / GPC_M,
            age_planck: age.in_units(t_p),
            diameter_planck: diameter.in_units(l_p),
            planck: PlanckSummary {
                time_formula: planck.time.to_string(),
                length_formula: planck.length.to_string(),
                mass_formula: planck.mass.to_string(),
                time_s: t_p,
                length_m: l_p,
                mass_kg: planck.mass_si(),
            },
            composition_total: composition.total(),
            composition,
        };
        info!(
            survey = %report.survey,
            age_gyr = report.age_gyr,
            diameter_gpc = report.diameter_gpc,
            "report computed"
        );
        Ok(report)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Parameters: {} (H0 = {} km/s/Mpc, Omega_m = {})",
            self.survey, self.h0_km_s_mpc, self.omega_m
        )?;
        writeln!(f, "Age (Gyr): {:.4}", self.age_gyr)?;
        writeln!(f, "Diameter (Gpc): {:.4}", self.diameter_gpc)?;
        writeln!(
            f,
            "Planck time t_p = {} = {:.6e} s",
            self.planck.time_formula, self.planck.time_s
        )?;
        writeln!(
            f,
            "Planck length l_p = {} = {:.6e} m",
            self.planck.length_formula, self.planck.length_m
        )?;
        writeln!(
            f,
            "Planck mass m_p = {} = {:.6e} kg",
            self.planck.mass_formula, self.planck.mass_kg
        )?;
        writeln!(f, "Age (t_p): {:.3e}", self.age_planck)?;
        writeln!(f, "Diameter (l_p): {:.3e}", self.diameter_planck)?;
        writeln!(f, "Composition (radiation omitted):")?;
        write!(f, "{}", self.composition.render_bars(40))?;
        write!(f, "Sum of listed fractions: {:.4}", self.composition_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmo_types::error::CosmoError;

    #[test]
    fn test_default_report_values() {
        let report = Report::compute(&RunConfig::default()).unwrap();
        assert!((report.age_gyr - 13.81).abs() <= 0.01);
        assert!((report.diameter_gpc - 28.83).abs() <= 0.01);
        assert!((report.age_planck - 8.03e60).abs() / 8.03e60 < 0.01);
        assert!((report.diameter_planck - 5.47e61).abs() / 5.47e61 < 0.01);
        assert!(report.age_error_gyr < 1e-5);
    }

    #[test]
    fn test_report_text_labels() {
        let text = Report::compute(&RunConfig::default()).unwrap().to_string();
        for label in ["Age (Gyr): ", "Diameter (Gpc): ", "Age (t_p): ", "Diameter (l_p): "] {
            assert!(text.contains(label), "missing label {label:?}");
        }
        assert!(text.contains("c^(-5/2) · ħ^(1/2) · G^(1/2)"));
    }

    #[test]
    fn test_report_fails_whole_on_bad_input() {
        let mut config = RunConfig::default();
        config.cosmology.omega_m = 0.0;
        assert!(matches!(
            Report::compute(&config),
            Err(CosmoError::DomainViolation(_))
        ));
    }

    #[test]
    fn test_report_serializes() {
        let report = Report::compute(&RunConfig::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["age_gyr"].as_f64().is_some());
        assert_eq!(json["survey"], "Planck 2018");
    }
}
