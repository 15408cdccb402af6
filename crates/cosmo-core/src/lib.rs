// ─────────────────────────────────────────────────────────────────────
// SCPN Cosmology — Cosmo Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Cosmological age/horizon integration and Planck-unit dimensional analysis.

pub mod composition;
pub mod friedmann;
pub mod planck;
pub mod report;
