// ─────────────────────────────────────────────────────────────────────
// SCPN Cosmology — Planck Units
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Dimensional-analysis solver for derived units.
//!
//! A target unit with dimension vector d_t is written as c^i · ħ^j · G^k.
//! Matching exponents of L, T and M gives the 3x3 system
//!   i·d_c + j·d_ħ + k·d_G = d_t
//! whose columns are the constants' dimension vectors. The same solver
//! yields Planck time, length and mass by changing only d_t.

use cosmo_math::linalg::solve_exact_3x3;
use cosmo_types::constants::{C_LIGHT, G_NEWTON, HBAR};
use cosmo_types::error::CosmoResult;
use cosmo_types::units::Dimension;
use ndarray::{Array1, Array2};
use num_rational::Rational64;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// A named physical constant with its SI value and dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysicalConstant {
    pub symbol: &'static str,
    pub value: f64,
    pub dimension: Dimension,
}

pub const SPEED_OF_LIGHT: PhysicalConstant = PhysicalConstant {
    symbol: "c",
    value: C_LIGHT,
    dimension: Dimension::SPEED_OF_LIGHT,
};

pub const REDUCED_PLANCK: PhysicalConstant = PhysicalConstant {
    symbol: "ħ",
    value: HBAR,
    dimension: Dimension::REDUCED_PLANCK,
};

pub const GRAVITATIONAL: PhysicalConstant = PhysicalConstant {
    symbol: "G",
    value: G_NEWTON,
    dimension: Dimension::GRAVITATIONAL,
};

/// Exponents of the three basis constants that build a target unit.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitExponents {
    pub target: Dimension,
    pub basis: [PhysicalConstant; 3],
    pub exponents: [Rational64; 3],
}

impl UnitExponents {
    /// Exponents as floating point, in basis order.
    pub fn as_f64(&self) -> [f64; 3] {
        self.exponents.map(|e| *e.numer() as f64 / *e.denom() as f64)
    }

    /// Size of the unit in SI, using the basis constants' SI values.
    pub fn evaluate(&self) -> f64 {
        self.evaluate_with(self.basis.map(|c| c.value))
    }

    /// Size of the unit given the constants' values in another
    /// measurement system (e.g. CGS).
    pub fn evaluate_with(&self, values: [f64; 3]) -> f64 {
        values
            .iter()
            .zip(self.as_f64())
            .map(|(v, e)| v.powf(e))
            .product()
    }
}

impl fmt::Display for UnitExponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut factors = Vec::new();
        for (constant, exp) in self.basis.iter().zip(self.exponents.iter()) {
            if *exp == Rational64::from_integer(0) {
                continue;
            }
            if *exp == Rational64::from_integer(1) {
                factors.push(constant.symbol.to_string());
            } else if exp.is_integer() {
                factors.push(format!("{}^{}", constant.symbol, exp));
            } else {
                factors.push(format!("{}^({})", constant.symbol, exp));
            }
        }
        if factors.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", factors.join(" · "))
        }
    }
}

/// Stateless solver over a fixed basis of three constants.
#[derive(Debug, Clone)]
pub struct DimensionalSolver {
    basis: [PhysicalConstant; 3],
    matrix: Array2<i64>,
}

impl DimensionalSolver {
    /// Rows are (L, T, M); column `j` is the dimension vector of `basis[j]`.
    pub fn new(basis: [PhysicalConstant; 3]) -> Self {
        let matrix = Array2::from_shape_fn((3, 3), |(row, col)| {
            basis[col].dimension.components()[row]
        });
        DimensionalSolver { basis, matrix }
    }

    /// Solver over (c, ħ, G).
    pub fn planck() -> Self {
        Self::new([SPEED_OF_LIGHT, REDUCED_PLANCK, GRAVITATIONAL])
    }

    pub fn basis(&self) -> &[PhysicalConstant; 3] {
        &self.basis
    }

    /// Exponents expressing `target` in the basis.
    ///
    /// Fails with `DegenerateSystem` if the basis dimensions are linearly
    /// dependent.
    pub fn solve(&self, target: Dimension) -> CosmoResult<UnitExponents> {
        let rhs = Array1::from(target.components().to_vec());
        let exponents = solve_exact_3x3(&self.matrix, &rhs)?;
        debug!(dimension = %target, ?exponents, "dimensional solve");
        Ok(UnitExponents {
            target,
            basis: self.basis,
            exponents,
        })
    }
}

/// Planck time, length and mass with the formulas that produced them.
#[derive(Debug, Clone)]
pub struct PlanckUnits {
    pub time: UnitExponents,
    pub length: UnitExponents,
    pub mass: UnitExponents,
}

impl PlanckUnits {
    pub fn derive() -> CosmoResult<Self> {
        Self::derive_with(&DimensionalSolver::planck())
    }

    pub fn derive_with(solver: &DimensionalSolver) -> CosmoResult<Self> {
        Ok(PlanckUnits {
            time: solver.solve(Dimension::TIME)?,
            length: solver.solve(Dimension::LENGTH)?,
            mass: solver.solve(Dimension::MASS)?,
        })
    }

    /// Planck time [s].
    pub fn time_si(&self) -> f64 {
        self.time.evaluate()
    }

    /// Planck length [m].
    pub fn length_si(&self) -> f64 {
        self.length.evaluate()
    }

    /// Planck mass [kg].
    pub fn mass_si(&self) -> f64 {
        self.mass.evaluate()
    }
}
