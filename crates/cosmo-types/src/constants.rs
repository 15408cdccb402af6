// ─────────────────────────────────────────────────────────────────────
// SCPN Cosmology — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physical constants (CODATA 2018, SI) and astronomical length/time scales.

/// Speed of light in vacuum (m/s), exact.
pub const C_LIGHT: f64 = 299_792_458.0;

/// Reduced Planck constant (J·s).
pub const HBAR: f64 = 1.054_571_817e-34;

/// Newtonian gravitational constant (m³ kg⁻¹ s⁻²).
pub const G_NEWTON: f64 = 6.674_30e-11;

/// Parsec (m), IAU 2015 nominal.
pub const PARSEC_M: f64 = 3.085_677_581_491_367e16;

/// Megaparsec (m).
pub const MPC_M: f64 = 1.0e6 * PARSEC_M;

/// Gigaparsec (m).
pub const GPC_M: f64 = 1.0e9 * PARSEC_M;

/// Kilometre (m).
pub const KM_M: f64 = 1.0e3;

/// Julian year (s): 365.25 days.
pub const YEAR_S: f64 = 365.25 * 86_400.0;

/// Gigayear (s).
pub const GYR_S: f64 = 1.0e9 * YEAR_S;

/// Convert a Hubble constant in km s⁻¹ Mpc⁻¹ to s⁻¹.
pub fn hubble_to_si(h0_km_s_mpc: f64) -> f64 {
    h0_km_s_mpc * KM_M / MPC_M
}
