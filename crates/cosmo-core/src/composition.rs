// ─────────────────────────────────────────────────────────────────────
// SCPN Cosmology — Composition
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Present-day energy budget: baryons, cold dark matter, dark energy.
//!
//! Radiation (Ωr ~ 1e-4) is left out on purpose; whatever the listed
//! components do not cover is reported as `remainder`.

use cosmo_types::config::CosmologyParams;
use cosmo_types::error::{CosmoError, CosmoResult};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Component {
    Baryons,
    DarkMatter,
    DarkEnergy,
}

impl Component {
    pub fn label(&self) -> &'static str {
        match self {
            Component::Baryons => "Ordinary matter",
            Component::DarkMatter => "Dark matter",
            Component::DarkEnergy => "Dark energy",
        }
    }
}

/// Density fractions Ω of each component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Composition {
    pub baryons: f64,
    pub dark_matter: f64,
    pub dark_energy: f64,
}

impl Composition {
    pub fn new(baryons: f64, dark_matter: f64, dark_energy: f64) -> CosmoResult<Self> {
        for (component, value) in [
            (Component::Baryons, baryons),
            (Component::DarkMatter, dark_matter),
            (Component::DarkEnergy, dark_energy),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CosmoError::DomainViolation(format!(
                    "{} fraction must be finite and >= 0, got {value}",
                    component.label()
                )));
            }
        }
        let composition = Composition {
            baryons,
            dark_matter,
            dark_energy,
        };
        if composition.total() <= 0.0 {
            return Err(CosmoError::DomainViolation(
                "composition fractions sum to zero".to_string(),
            ));
        }
        Ok(composition)
    }

    /// Ωb = Ωb h² / h², Ωc = Ωc h² / h², Ωλ as published.
    pub fn from_params(params: &CosmologyParams) -> CosmoResult<Self> {
        let h = params.little_h();
        if !h.is_finite() || h <= 0.0 {
            return Err(CosmoError::DomainViolation(format!(
                "H0 must be finite and > 0, got {}",
                params.h0
            )));
        }
        let h2 = h * h;
        Self::new(
            params.omega_b_h2 / h2,
            params.omega_c_h2 / h2,
            params.omega_lambda,
        )
    }

    pub fn fractions(&self) -> [(Component, f64); 3] {
        [
            (Component::Baryons, self.baryons),
            (Component::DarkMatter, self.dark_matter),
            (Component::DarkEnergy, self.dark_energy),
        ]
    }

    pub fn total(&self) -> f64 {
        self.baryons + self.dark_matter + self.dark_energy
    }

    /// 1 − Σ Ω. Small and possibly negative for Planck values.
    pub fn remainder(&self) -> f64 {
        1.0 - self.total()
    }

    /// Components normalized to sum to 100.
    pub fn percentages(&self) -> [(Component, f64); 3] {
        let total = self.total();
        self.fractions().map(|(c, v)| (c, 100.0 * v / total))
    }

    /// Proportional text bars, one line per component.
    pub fn render_bars(&self, width: usize) -> String {
        let mut out = String::new();
        for (component, pct) in self.percentages() {
            let filled = ((pct / 100.0) * width as f64).round() as usize;
            out.push_str(&format!(
                "{:<16} {:>5.1}% {}\n",
                component.label(),
                pct,
                "#".repeat(filled.min(width))
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planck_composition_near_unity() {
        let c = Composition::from_params(&CosmologyParams::default()).unwrap();
        assert!((c.baryons - 0.0493).abs() < 5e-4, "Ωb = {}", c.baryons);
        assert!((c.dark_matter - 0.2645).abs() < 5e-4, "Ωc = {}", c.dark_matter);
        assert!((c.total() - 1.0).abs() < 0.03, "total = {}", c.total());
        assert!(c.remainder().abs() < 0.03);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let c = Composition::new(0.05, 0.25, 0.6).unwrap();
        let sum: f64 = c.percentages().iter().map(|(_, p)| p).sum();
        assert!((sum - 100.0).abs() < 1e-12);
        assert!((c.remainder() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_negative_fraction_rejected() {
        assert!(matches!(
            Composition::new(-0.1, 0.3, 0.7),
            Err(CosmoError::DomainViolation(_))
        ));
        assert!(Composition::new(0.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_render_bars() {
        let c = Composition::new(0.0, 0.5, 0.5).unwrap();
        let text = c.render_bars(10);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Ordinary matter"));
        assert!(lines[1].ends_with("#####"));
        assert!(!lines[0].contains('#'));
    }
}
