// ─────────────────────────────────────────────────────────────────────
// SCPN Cosmology — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CosmoError {
    /// Input outside the physical domain (e.g. Ωm ∉ (0, 1]).
    #[error("Domain violation: {0}")]
    DomainViolation(String),

    /// Quadrature did not reach the requested precision.
    #[error(
        "Numerical instability after {subdivisions} subdivisions: {message} \
         (estimate={estimate:e}, abs_error={abs_error:e})"
    )]
    NumericalInstability {
        subdivisions: usize,
        estimate: f64,
        abs_error: f64,
        message: String,
    },

    /// Linear system has no unique solution.
    #[error("Degenerate system: {0}")]
    DegenerateSystem(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CosmoResult<T> = Result<T, CosmoError>;
