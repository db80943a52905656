//! Weierstrass cubics y² = x³ + ax + b and their invariants.
//!
//! The j-invariant here uses the normalisation j = −1728·4a³ / Δ with
//! Δ = −16(4a³ + 27b²). For y² = x³ − x this gives j = 108.
//!
//! # Singularity test
//!
//! A curve is singular exactly when Δ == 0.0 as a floating-point value.
//! There is no tolerance: curves with |Δ| tiny but non-zero still get a
//! (huge) finite j.

use crate::error::{ModelError, Result};

/// A plane cubic in short Weierstrass form.
///
/// Plain value type: change the curve by building a new one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeierstrassCurve {
    /// Coefficient of x
    pub a: f64,
    /// Constant term
    pub b: f64,
}

impl WeierstrassCurve {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Right-hand side x³ + ax + b, i.e. y² at `x`.
    #[inline]
    pub fn rhs(&self, x: f64) -> f64 {
        x * x * x + self.a * x + self.b
    }

    /// Δ = −16(4a³ + 27b²).
    pub fn discriminant(&self) -> f64 {
        discriminant(self.a, self.b)
    }

    pub fn is_singular(&self) -> bool {
        self.discriminant() == 0.0
    }

    /// j = −1728·4a³ / Δ, or [`ModelError::SingularCurve`] when Δ == 0
    /// and [`ModelError::InvariantOverflow`] when the quotient is not finite.
    pub fn j_invariant(&self) -> Result<f64> {
        j_from_weierstrass(self.a, self.b)
    }

    /// Human-readable equation, e.g. `y² = x³ + -1x + 0`.
    pub fn equation(&self) -> String {
        format!("y² = x³ + {}x + {}", self.a, self.b)
    }
}

/// Δ(a, b) = −16(4a³ + 27b²). Defined for every real a, b.
pub fn discriminant(a: f64, b: f64) -> f64 {
    -16.0 * (4.0 * a.powi(3) + 27.0 * b * b)
}

/// Real j-invariant from Weierstrass coefficients.
///
/// Every `Ok` value is finite: large finite coefficients can push a³ or Δ
/// to ±inf, and the resulting inf/inf or inf/finite is an error.
pub fn j_from_weierstrass(a: f64, b: f64) -> Result<f64> {
    let delta = discriminant(a, b);
    if delta == 0.0 {
        return Err(ModelError::singular(a, b));
    }
    let j = -1728.0 * (4.0 * a.powi(3)) / delta;
    if !j.is_finite() {
        return Err(ModelError::overflow(a, b));
    }
    Ok(j)
}

// ─── Kani formal verification harnesses ─────────────────────────────────────
#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// discriminant never panics for any f64 pair.
    #[kani::proof]
    fn discriminant_no_panic() {
        let a: f64 = kani::any();
        let b: f64 = kani::any();
        let _ = discriminant(a, b);
    }

    /// A zero discriminant always maps to SingularCurve, never to a value.
    #[kani::proof]
    fn zero_discriminant_is_singular() {
        let a: f64 = kani::any();
        let b: f64 = kani::any();
        kani::assume(discriminant(a, b) == 0.0);
        assert!(j_from_weierstrass(a, b).is_err());
    }

    /// Every successful j is finite.
    #[kani::proof]
    fn ok_j_is_finite() {
        let a: f64 = kani::any();
        let b: f64 = kani::any();
        kani::assume(a.is_finite() && b.is_finite());
        if let Ok(j) = j_from_weierstrass(a, b) {
            assert!(j.is_finite());
        }
    }
}
