// ─────────────────────────────────────────────────────────────────────
// SCPN Cosmology — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::error::{CosmoError, CosmoResult};
use serde::{Deserialize, Serialize};

/// Published cosmological parameters.
/// Every field is optional in JSON and falls back to Planck 2018
/// (TT,TE,EE+lowE+lensing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CosmologyParams {
    /// Name of the survey the values come from.
    #[serde(default = "default_survey")]
    pub survey: String,
    /// Hubble constant [km s⁻¹ Mpc⁻¹].
    #[serde(rename = "H0", default = "default_h0")]
    pub h0: f64,
    /// Present-day matter density fraction.
    #[serde(rename = "Omega_m", default = "default_omega_m")]
    pub omega_m: f64,
    /// Dark-energy density fraction.
    #[serde(rename = "Omega_Lambda", default = "default_omega_lambda")]
    pub omega_lambda: f64,
    /// Physical baryon density Ωb h².
    #[serde(rename = "Omega_b_h2", default = "default_omega_b_h2")]
    pub omega_b_h2: f64,
    /// Physical cold-dark-matter density Ωc h².
    #[serde(rename = "Omega_c_h2", default = "default_omega_c_h2")]
    pub omega_c_h2: f64,
}

fn default_survey() -> String {
    "Planck 2018".to_string()
}
fn default_h0() -> f64 {
    67.36
}
fn default_omega_m() -> f64 {
    0.3153
}
fn default_omega_lambda() -> f64 {
    0.6847
}
fn default_omega_b_h2() -> f64 {
    0.02237
}
fn default_omega_c_h2() -> f64 {
    0.1200
}

impl Default for CosmologyParams {
    fn default() -> Self {
        CosmologyParams {
            survey: default_survey(),
            h0: default_h0(),
            omega_m: default_omega_m(),
            omega_lambda: default_omega_lambda(),
            omega_b_h2: default_omega_b_h2(),
            omega_c_h2: default_omega_c_h2(),
        }
    }
}

impl CosmologyParams {
    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> CosmoResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&contents)?;
        params.validate()?;
        Ok(params)
    }

    /// Dimensionless Hubble parameter h = H0 / (100 km s⁻¹ Mpc⁻¹).
    pub fn little_h(&self) -> f64 {
        self.h0 / 100.0
    }

    /// Check that every value is finite and inside its physical range.
    /// Ωm = 1 (matter only) is admitted; Ωm ≤ 0 is not.
    pub fn validate(&self) -> CosmoResult<()> {
        if !self.h0.is_finite() || self.h0 <= 0.0 {
            return Err(CosmoError::DomainViolation(format!(
                "H0 must be finite and > 0, got {}",
                self.h0
            )));
        }
        if !self.omega_m.is_finite() || self.omega_m <= 0.0 || self.omega_m > 1.0 {
            return Err(CosmoError::DomainViolation(format!(
                "Omega_m must lie in (0, 1], got {}",
                self.omega_m
            )));
        }
        for (name, value) in [
            ("Omega_Lambda", self.omega_lambda),
            ("Omega_b_h2", self.omega_b_h2),
            ("Omega_c_h2", self.omega_c_h2),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CosmoError::DomainViolation(format!(
                    "{name} must be finite and >= 0, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Adaptive quadrature settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadratureConfig {
    /// Requested relative tolerance.
    #[serde(default = "default_rel_tol")]
    pub rel_tol: f64,
    /// Requested absolute tolerance (0 disables it).
    #[serde(default)]
    pub abs_tol: f64,
    /// Results whose relative error stays above this are rejected.
    #[serde(default = "default_max_rel_error")]
    pub max_rel_error: f64,
    /// Maximum number of subintervals.
    #[serde(default = "default_max_subdivisions")]
    pub max_subdivisions: usize,
}

fn default_rel_tol() -> f64 {
    1e-8
}
fn default_max_rel_error() -> f64 {
    1e-6
}
fn default_max_subdivisions() -> usize {
    200
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        QuadratureConfig {
            rel_tol: default_rel_tol(),
            abs_tol: 0.0,
            max_rel_error: default_max_rel_error(),
            max_subdivisions: default_max_subdivisions(),
        }
    }
}

impl QuadratureConfig {
    pub fn validate(&self) -> CosmoResult<()> {
        if !self.rel_tol.is_finite() || self.rel_tol <= 0.0 {
            return Err(CosmoError::ConfigError(format!(
                "rel_tol must be finite and > 0, got {}",
                self.rel_tol
            )));
        }
        if !self.abs_tol.is_finite() || self.abs_tol < 0.0 {
            return Err(CosmoError::ConfigError(format!(
                "abs_tol must be finite and >= 0, got {}",
                self.abs_tol
            )));
        }
        if !self.max_rel_error.is_finite() || self.max_rel_error < self.rel_tol {
            return Err(CosmoError::ConfigError(format!(
                "max_rel_error must be finite and >= rel_tol, got {}",
                self.max_rel_error
            )));
        }
        if self.max_subdivisions == 0 {
            return Err(CosmoError::ConfigError(
                "max_subdivisions must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Top-level run configuration: parameters plus numerics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub cosmology: CosmologyParams,
    #[serde(default)]
    pub quadrature: QuadratureConfig,
}

impl RunConfig {
    pub fn from_file(path: &str) -> CosmoResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CosmoResult<()> {
        self.cosmology.validate()?;
        self.quadrature.validate()
    }
}
