// ─────────────────────────────────────────────────────────────────────
// SCPN Cosmology — Linalg
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Exact 3x3 integer linear algebra.
//!
//! Dimension matrices have small integer entries, so Cramer's rule on
//! `i64` determinants gives the solution as exact rationals. Every product
//! and sum is checked; entries large enough to overflow `i64` are rejected
//! rather than wrapped.

use cosmo_types::error::{CosmoError, CosmoResult};
use ndarray::{Array1, Array2};
use num_rational::Rational64;

fn check_shape(m: &Array2<i64>) -> CosmoResult<()> {
    if m.dim() != (3, 3) {
        return Err(CosmoError::ConfigError(format!(
            "expected a 3x3 matrix, got {:?}",
            m.dim()
        )));
    }
    Ok(())
}

fn overflow(what: &str) -> CosmoError {
    CosmoError::ConfigError(format!("{what} overflows i64; matrix entries are too large"))
}

fn mul(a: i64, b: i64) -> CosmoResult<i64> {
    a.checked_mul(b).ok_or_else(|| overflow("product"))
}

fn add(a: i64, b: i64) -> CosmoResult<i64> {
    a.checked_add(b).ok_or_else(|| overflow("sum"))
}

fn sub(a: i64, b: i64) -> CosmoResult<i64> {
    a.checked_sub(b).ok_or_else(|| overflow("difference"))
}

/// `numer / denom` reduced. `i64::MIN` has no positive counterpart, so
/// normalizing its sign would overflow.
fn ratio(numer: i64, denom: i64) -> CosmoResult<Rational64> {
    if numer == i64::MIN || denom == i64::MIN {
        return Err(overflow("rational"));
    }
    Ok(Rational64::new(numer, denom))
}

fn ratio_mul(a: Rational64, b: Rational64) -> CosmoResult<Rational64> {
    ratio(mul(*a.numer(), *b.numer())?, mul(*a.denom(), *b.denom())?)
}

fn ratio_add(a: Rational64, b: Rational64) -> CosmoResult<Rational64> {
    let numer = add(mul(*a.numer(), *b.denom())?, mul(*b.numer(), *a.denom())?)?;
    ratio(numer, mul(*a.denom(), *b.denom())?)
}

/// 2x2 minor `p·s − q·r`.
fn minor(p: i64, q: i64, r: i64, s: i64) -> CosmoResult<i64> {
    sub(mul(p, s)?, mul(q, r)?)
}

/// Determinant of a 3x3 integer matrix (cofactor expansion along row 0).
pub fn det3(m: &Array2<i64>) -> CosmoResult<i64> {
    check_shape(m)?;
    let c0 = mul(m[[0, 0]], minor(m[[1, 1]], m[[1, 2]], m[[2, 1]], m[[2, 2]])?)?;
    let c1 = mul(m[[0, 1]], minor(m[[1, 0]], m[[1, 2]], m[[2, 0]], m[[2, 2]])?)?;
    let c2 = mul(m[[0, 2]], minor(m[[1, 0]], m[[1, 1]], m[[2, 0]], m[[2, 1]])?)?;
    add(sub(c0, c1)?, c2)
}

/// Solve `m · x = rhs` exactly.
///
/// Fails with `DegenerateSystem` when `det(m) = 0`: the columns are then
/// linearly dependent and any returned solution would be arbitrary.
pub fn solve_exact_3x3(m: &Array2<i64>, rhs: &Array1<i64>) -> CosmoResult<[Rational64; 3]> {
    check_shape(m)?;
    if rhs.len() != 3 {
        return Err(CosmoError::ConfigError(format!(
            "expected a right-hand side of length 3, got {}",
            rhs.len()
        )));
    }

    let det = det3(m)?;
    if det == 0 {
        return Err(CosmoError::DegenerateSystem(format!(
            "matrix {:?} is singular; columns are linearly dependent",
            m.rows().into_iter().map(|r| r.to_vec()).collect::<Vec<_>>()
        )));
    }

    let mut x = [Rational64::from_integer(0); 3];
    for (col, xi) in x.iter_mut().enumerate() {
        let mut replaced = m.clone();
        replaced.column_mut(col).assign(rhs);
        *xi = ratio(det3(&replaced)?, det)?;
    }
    Ok(x)
}

/// `m · x` in exact arithmetic.
pub fn mat_vec_exact(m: &Array2<i64>, x: &[Rational64; 3]) -> CosmoResult<[Rational64; 3]> {
    check_shape(m)?;
    let mut out = [Rational64::from_integer(0); 3];
    for (row, acc) in out.iter_mut().enumerate() {
        for (col, xi) in x.iter().enumerate() {
            let term = ratio_mul(Rational64::from_integer(m[[row, col]]), *xi)?;
            *acc = ratio_add(*acc, term)?;
        }
    }
    Ok(out)
}
