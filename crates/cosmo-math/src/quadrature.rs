// ─────────────────────────────────────────────────────────────────────
// SCPN Cosmology — Quadrature
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Globally adaptive Gauss–Kronrod (7/15) quadrature.
//!
//! Each subinterval is integrated with the 15-point Kronrod rule; the
//! embedded 7-point Gauss rule gives the error estimate |K15 − G7|. The
//! subinterval with the largest estimate is bisected until the summed
//! estimate meets `max(abs_tol, rel_tol·|I|)` or the subdivision limit is
//! hit. Nodes are interior only, so integrable endpoint singularities
//! such as x^(-1/2) at 0 never produce a sample at the singular point.

use cosmo_types::config::QuadratureConfig;
use cosmo_types::error::{CosmoError, CosmoResult};
use cosmo_types::units::relative_error;

/// Kronrod abscissae on [-1, 1] (positive half, descending).
/// Odd indices are also the 7-point Gauss abscissae.
const XGK: [f64; 8] = [
    0.991_455_371_120_812_639_206_854_697_526_329,
    0.949_107_912_342_758_524_526_189_684_047_851,
    0.864_864_423_359_769_072_789_712_788_640_926,
    0.741_531_185_599_394_439_863_864_773_280_788,
    0.586_087_235_467_691_130_294_144_845_693_013,
    0.405_845_151_377_397_166_906_606_412_076_961,
    0.207_784_955_007_898_467_600_689_403_773_245,
    0.0,
];

/// 15-point Kronrod weights.
const WGK: [f64; 8] = [
    0.022_935_322_010_529_224_963_732_008_058_970,
    0.063_092_092_629_978_553_290_700_663_189_204,
    0.104_790_010_322_250_183_839_876_322_541_518,
    0.140_653_259_715_525_918_745_189_590_510_238,
    0.169_004_726_639_267_902_826_583_426_598_550,
    0.190_350_578_064_785_409_913_256_402_421_014,
    0.204_432_940_075_298_892_414_161_999_234_649,
    0.209_482_141_084_727_828_012_999_174_891_714,
];

/// 7-point Gauss weights for XGK[1], XGK[3], XGK[5] and the centre.
const WG: [f64; 4] = [
    0.129_484_966_168_869_693_270_611_432_679_082,
    0.279_705_391_489_276_667_901_467_771_423_780,
    0.381_830_050_505_118_944_950_369_775_488_975,
    0.417_959_183_673_469_387_755_102_040_816_327,
];

/// Outcome of an adaptive integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureResult {
    /// Integral estimate.
    pub value: f64,
    /// Estimated absolute error.
    pub abs_error: f64,
    /// Number of subintervals in the final partition.
    pub subdivisions: usize,
    /// Number of integrand evaluations.
    pub evaluations: usize,
    /// True when the requested tolerance was met. False means the
    /// subdivision limit was hit but the error is still under
    /// `max_rel_error`.
    pub converged: bool,
}

impl QuadratureResult {
    pub fn rel_error(&self) -> f64 {
        relative_error(self.value, self.abs_error)
    }
}

#[derive(Debug, Clone, Copy)]
struct Segment {
    a: f64,
    b: f64,
    value: f64,
    error: f64,
}

/// Single 15-point Kronrod estimate on [a, b] with its G7 error estimate.
///
/// Fails with `NumericalInstability` if the integrand is non-finite at any node.
pub fn gauss_kronrod_15<F>(f: &F, a: f64, b: f64) -> CosmoResult<(f64, f64)>
where
    F: Fn(f64) -> f64,
{
    let center = 0.5 * (a + b);
    let half = 0.5 * (b - a);

    let sample = |x: f64| -> CosmoResult<f64> {
        let y = f(x);
        if y.is_finite() {
            Ok(y)
        } else {
            Err(CosmoError::NumericalInstability {
                subdivisions: 0,
                estimate: f64::NAN,
                abs_error: f64::INFINITY,
                message: format!("integrand is non-finite at x = {x:e}"),
            })
        }
    };

    let fc = sample(center)?;
    let mut res_k = fc * WGK[7];
    let mut res_g = fc * WG[3];

    for j in 0..7 {
        let dx = half * XGK[j];
        let pair = sample(center - dx)? + sample(center + dx)?;
        res_k += WGK[j] * pair;
        if j % 2 == 1 {
            res_g += WG[j / 2] * pair;
        }
    }

    Ok((res_k * half, ((res_k - res_g) * half).abs()))
}

/// Adaptive integration of `f` over [a, b].
///
/// Returns `NumericalInstability` when the limit is reached with a relative
/// error above `config.max_rel_error`, or when the integrand is non-finite.
pub fn integrate<F>(
    f: F,
    a: f64,
    b: f64,
    config: &QuadratureConfig,
) -> CosmoResult<QuadratureResult>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;
    if !a.is_finite() || !b.is_finite() {
        return Err(CosmoError::ConfigError(format!(
            "integration bounds must be finite, got [{a}, {b}]"
        )));
    }
    if a == b {
        return Ok(QuadratureResult {
            value: 0.0,
            abs_error: 0.0,
            subdivisions: 0,
            evaluations: 0,
            converged: true,
        });
    }
    if a > b {
        let mut flipped = integrate(f, b, a, config)?;
        flipped.value = -flipped.value;
        return Ok(flipped);
    }

    let (value, error) = gauss_kronrod_15(&f, a, b)?;
    let mut segments = vec![Segment { a, b, value, error }];
    let mut evaluations = 15;

    loop {
        let total: f64 = segments.iter().map(|s| s.value).sum();
        let total_err: f64 = segments.iter().map(|s| s.error).sum();
        let tol = config.abs_tol.max(config.rel_tol * total.abs());

        if total_err <= tol {
            return Ok(QuadratureResult {
                value: total,
                abs_error: total_err,
                subdivisions: segments.len(),
                evaluations,
                converged: true,
            });
        }

        if segments.len() >= config.max_subdivisions {
            let ceiling = config.abs_tol.max(config.max_rel_error * total.abs());
            if total_err <= ceiling {
                return Ok(QuadratureResult {
                    value: total,
                    abs_error: total_err,
                    subdivisions: segments.len(),
                    evaluations,
                    converged: false,
                });
            }
            return Err(CosmoError::NumericalInstability {
                subdivisions: segments.len(),
                estimate: total,
                abs_error: total_err,
                message: format!(
                    "subdivision limit reached with relative error {:e} above {:e}",
                    total_err / total.abs(),
                    config.max_rel_error
                ),
            });
        }

        let worst = segments
            .iter()
            .enumerate()
            .max_by(|(_, x), (_, y)| x.error.total_cmp(&y.error))
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        let seg = segments.swap_remove(worst);
        let mid = 0.5 * (seg.a + seg.b);

        if mid <= seg.a || mid >= seg.b {
            return Err(CosmoError::NumericalInstability {
                subdivisions: segments.len() + 1,
                estimate: total,
                abs_error: total_err,
                message: format!(
                    "interval [{:e}, {:e}] cannot be bisected further",
                    seg.a, seg.b
                ),
            });
        }

        let (v_left, e_left) = gauss_kronrod_15(&f, seg.a, mid)?;
        let (v_right, e_right) = gauss_kronrod_15(&f, mid, seg.b)?;
        evaluations += 30;
        segments.push(Segment {
            a: seg.a,
            b: mid,
            value: v_left,
            error: e_left,
        });
        segments.push(Segment {
            a: mid,
            b: seg.b,
            value: v_right,
            error: e_right,
        });
    }
}
