//! Truncated modular forms on the upper half-plane.
//!
//! Everything is expressed through the nome q = exp(2πiτ):
//!
//! ```text
//! j(τ)  ≈ 1/q + 744 + 196884 q + 21493760 q² + …
//! E4(τ) ≈ 1 + 240 Σ σ₃(n) qⁿ
//! E6(τ) ≈ 1 − 504 Σ σ₅(n) qⁿ
//! ```
//!
//! Series are cut after [`SeriesOrder`] positive powers of q (two by
//! default). The approximation is good for large Im(τ), where |q| is
//! small, and degrades towards the real axis where |q| → 1. These are
//! visualisation approximations, not arithmetic-geometry primitives.
//!
//! # τ → (a, b)
//!
//! [`curve_params`] builds a real Weierstrass curve from τ with
//! a = −27·E4 / (4·E6), b = −27·(E4³ − E6²) / (4·E6²) and keeps only the
//! real parts. The imaginary parts are discarded; use
//! [`curve_params_with_residue`] to see them.
//!
//! Im(τ) > 0 is assumed but never enforced: outside the upper half-plane
//! the formulas still evaluate, to meaningless numbers.

use num_complex::Complex64;
use std::f64::consts::PI;

use crate::config::{SeriesOrder, MAX_SERIES_ORDER};
use crate::curve::WeierstrassCurve;
use crate::error::{ModelError, Result};

/// |E6| below this is treated as a zero of E6.
pub const E6_DEGENERACY_TOLERANCE: f64 = 1e-10;

/// Constant term of the j q-expansion.
const J_CONSTANT: f64 = 744.0;

/// Coefficients of q¹ … q⁶ in the j q-expansion.
const J_COEFFICIENTS: [f64; MAX_SERIES_ORDER] = [
    196_884.0,
    21_493_760.0,
    864_299_970.0,
    20_245_856_256.0,
    333_202_640_600.0,
    4_252_023_300_096.0,
];

pub fn in_upper_half_plane(tau: Complex64) -> bool {
    tau.im > 0.0
}

/// q = exp(2πiτ).
#[inline]
pub fn nome(tau: Complex64) -> Complex64 {
    (Complex64::new(0.0, 2.0 * PI) * tau).exp()
}

/// σ_k(n): sum of the k-th powers of the divisors of n.
pub fn divisor_power_sum(n: u64, k: i32) -> f64 {
    (1..=n)
        .filter(|d| n % d == 0)
        .map(|d| (d as f64).powi(k))
        .sum()
}

/// q¹ … q^order coefficients of E4.
pub fn e4_coefficients(order: SeriesOrder) -> Vec<f64> {
    (1..=order.get() as u64)
        .map(|n| 240.0 * divisor_power_sum(n, 3))
        .collect()
}

/// q¹ … q^order coefficients of E6.
pub fn e6_coefficients(order: SeriesOrder) -> Vec<f64> {
    (1..=order.get() as u64)
        .map(|n| -504.0 * divisor_power_sum(n, 5))
        .collect()
}

/// constant + Σ coeffs[n-1]·qⁿ, evaluated by Horner's rule.
fn power_series(constant: f64, coeffs: &[f64], q: Complex64) -> Complex64 {
    let tail = coeffs
        .iter()
        .rev()
        .fold(Complex64::new(0.0, 0.0), |acc, &c| (acc + c) * q);
    tail + constant
}

// ─────────────────────────────────────────────────────────────────────────────
// j from τ
// ─────────────────────────────────────────────────────────────────────────────

/// j(τ) ≈ 1/q + 744 + 196884q + 21493760q², the complex j-invariant.
pub fn j_from_tau(tau: Complex64) -> Complex64 {
    j_from_tau_with(tau, SeriesOrder::default())
}

/// j(τ) with a chosen number of positive q-powers.
pub fn j_from_tau_with(tau: Complex64, order: SeriesOrder) -> Complex64 {
    let q = nome(tau);
    q.inv() + power_series(J_CONSTANT, &J_COEFFICIENTS[..order.get()], q)
}

// ─────────────────────────────────────────────────────────────────────────────
// Eisenstein series and the τ → (a, b) map
// ─────────────────────────────────────────────────────────────────────────────

/// Truncated (E4, E6) at one τ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EisensteinPair {
    pub e4: Complex64,
    pub e6: Complex64,
}

impl EisensteinPair {
    /// Whether E6 is too close to zero to divide by.
    pub fn is_degenerate(&self) -> bool {
        self.e6.norm() < E6_DEGENERACY_TOLERANCE
    }

    /// Complex (a, b) before the imaginary parts are dropped.
    ///
    /// a = −27·E4 / (4·E6), b = −27·(E4³ − E6²) / (4·E6²).
    /// Undefined where E6 vanishes; the caller must check
    /// [`is_degenerate`](Self::is_degenerate) first.
    pub fn weierstrass_coefficients(&self) -> (Complex64, Complex64) {
        let e4_cubed = self.e4.powi(3);
        let e6_squared = self.e6.powi(2);
        let a = -27.0 * self.e4 / (4.0 * self.e6);
        let b = -27.0 * (e4_cubed - e6_squared) / (4.0 * e6_squared);
        (a, b)
    }

    /// Klein's formula j = 1728·E4³ / (E4³ − E6²), in the same
    /// normalisation as [`j_from_tau`].
    pub fn klein_j(&self) -> Complex64 {
        let e4_cubed = self.e4.powi(3);
        1728.0 * e4_cubed / (e4_cubed - self.e6.powi(2))
    }
}

pub fn eisenstein(tau: Complex64) -> EisensteinPair {
    eisenstein_with(tau, SeriesOrder::default())
}

pub fn eisenstein_with(tau: Complex64, order: SeriesOrder) -> EisensteinPair {
    let q = nome(tau);
    EisensteinPair {
        e4: power_series(1.0, &e4_coefficients(order), q),
        e6: power_series(1.0, &e6_coefficients(order), q),
    }
}

/// Real curve obtained from τ, with what was thrown away to get it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MappedCurve {
    pub curve: WeierstrassCurve,
    /// (Im a, Im b) discarded when the real curve was formed
    pub imaginary_residue: (f64, f64),
}

/// τ → (a, b) keeping only real parts.
///
/// Fails with [`ModelError::DegenerateModularMap`] where E6(τ) vanishes or
/// the result is not finite.
pub fn curve_params(tau: Complex64) -> Result<WeierstrassCurve> {
    curve_params_with(tau, SeriesOrder::default())
}

pub fn curve_params_with(tau: Complex64, order: SeriesOrder) -> Result<WeierstrassCurve> {
    curve_params_with_residue(tau, order).map(|mapped| mapped.curve)
}

pub fn curve_params_with_residue(tau: Complex64, order: SeriesOrder) -> Result<MappedCurve> {
    let pair = eisenstein_with(tau, order);
    if pair.is_degenerate() {
        return Err(ModelError::degenerate(tau));
    }
    let (a, b) = pair.weierstrass_coefficients();
    if !(a.re.is_finite() && b.re.is_finite()) {
        return Err(ModelError::degenerate(tau));
    }
    Ok(MappedCurve {
        curve: WeierstrassCurve::new(a.re, b.re),
        imaginary_residue: (a.im, b.im),
    })
}

/// The purely imaginary τ where the order-2 truncation of E6 vanishes
/// (near τ = i, where the true E6 has its zero).
pub fn reference_e6_zero() -> Complex64 {
    // 1 − 504q − 16632q² = 0, positive root
    let q = (-504.0 + (504.0_f64 * 504.0 + 4.0 * 16632.0).sqrt()) / (2.0 * 16632.0);
    Complex64::new(0.0, -q.ln() / (2.0 * PI))
}
