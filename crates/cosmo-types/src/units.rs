// ─────────────────────────────────────────────────────────────────────
// SCPN Cosmology — Units
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Dimension vectors over (length, time, mass) and SI-valued quantities.
//!
//! A [`Quantity`] always stores its value in SI base units. Re-expressing it
//! in another unit is a division by that unit's size in SI, so there is no
//! global unit state anywhere in the workspace.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer exponents of the base dimensions (L, T, M).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    pub length: i64,
    pub time: i64,
    pub mass: i64,
}

impl Dimension {
    pub const fn new(length: i64, time: i64, mass: i64) -> Self {
        Dimension { length, time, mass }
    }

    pub const DIMENSIONLESS: Dimension = Dimension::new(0, 0, 0);
    pub const LENGTH: Dimension = Dimension::new(1, 0, 0);
    pub const TIME: Dimension = Dimension::new(0, 1, 0);
    pub const MASS: Dimension = Dimension::new(0, 0, 1);

    /// Speed of light: L T⁻¹.
    pub const SPEED_OF_LIGHT: Dimension = Dimension::new(1, -1, 0);
    /// Reduced Planck constant: L² T⁻¹ M.
    pub const REDUCED_PLANCK: Dimension = Dimension::new(2, -1, 1);
    /// Gravitational constant: L³ T⁻² M⁻¹.
    pub const GRAVITATIONAL: Dimension = Dimension::new(3, -2, -1);

    /// Components in (length, time, mass) order.
    pub fn components(&self) -> [i64; 3] {
        [self.length, self.time, self.mass]
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        for (sym, exp) in [("L", self.length), ("T", self.time), ("M", self.mass)] {
            match exp {
                0 => {}
                1 => parts.push(sym.to_string()),
                e => parts.push(format!("{sym}^{e}")),
            }
        }
        if parts.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

/// A scalar in SI base units together with its estimated absolute error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub abs_error: f64,
    pub dimension: Dimension,
}

impl Quantity {
    pub fn new(value: f64, abs_error: f64, dimension: Dimension) -> Self {
        Quantity {
            value,
            abs_error,
            dimension,
        }
    }

    /// Value expressed in a unit whose size is `unit_si` SI base units.
    pub fn in_units(&self, unit_si: f64) -> f64 {
        self.value / unit_si
    }

    pub fn rel_error(&self) -> f64 {
        relative_error(self.value, self.abs_error)
    }

    /// Multiply by a dimensionless factor; the error scales with it.
    pub fn scaled(&self, factor: f64) -> Self {
        Quantity {
            value: self.value * factor,
            abs_error: self.abs_error * factor.abs(),
            dimension: self.dimension,
        }
    }
}

/// |abs_error / value|. An exact zero with zero error is 0; a zero value
/// with nonzero error is infinite.
pub fn relative_error(value: f64, abs_error: f64) -> f64 {
    if value == 0.0 {
        if abs_error == 0.0 {
            0.0
        } else {
            f64::INFINITY
        }
    } else {
        (abs_error / value).abs()
    }
}
