//! The object a front end talks to.
//!
//! [`CurveModel`] holds the current curve and the sampling settings. It is
//! a small `Copy` value: a parameter change produces a new model and the
//! old one stays valid, so the front end can keep the last good model
//! when input is rejected.

use log::{debug, warn};
use num_complex::Complex64;

use crate::config::{FieldRegion, LocusDomain, ModelConfig, SeriesOrder};
use crate::curve::WeierstrassCurve;
use crate::domain::{self, DomainOutline, SpecialPoint};
use crate::error::Result;
use crate::field::{self, ScalarField};
use crate::input;
use crate::locus::{self, LocusBranch};
use crate::modular;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveModel {
    curve: WeierstrassCurve,
    config: ModelConfig,
}

impl Default for CurveModel {
    /// y² = x³ − x with default sampling.
    fn default() -> Self {
        Self::new(-1.0, 0.0)
    }
}

impl CurveModel {
    pub fn new(a: f64, b: f64) -> Self {
        Self::with_config(WeierstrassCurve::new(a, b), ModelConfig::default())
    }

    pub fn with_config(curve: WeierstrassCurve, config: ModelConfig) -> Self {
        Self { curve, config }
    }

    pub fn curve(&self) -> WeierstrassCurve {
        self.curve
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn order(&self) -> SeriesOrder {
        self.config.order
    }

    /// New model with (a, b) replaced. Any reals are accepted, including
    /// ones that make the curve singular.
    pub fn set_parameters(&self, a: f64, b: f64) -> Self {
        let curve = WeierstrassCurve::new(a, b);
        debug!("curve replaced: {} -> {}", self.curve.equation(), curve.equation());
        Self { curve, ..*self }
    }

    pub fn with_field_region(&self, field: FieldRegion) -> Self {
        Self {
            config: ModelConfig { field, ..self.config },
            ..*self
        }
    }

    pub fn with_order(&self, order: SeriesOrder) -> Self {
        Self {
            config: ModelConfig { order, ..self.config },
            ..*self
        }
    }

    /// Parse text for a and b and return the updated model.
    ///
    /// On failure the error says which box was wrong and `self` is left as
    /// it was, so the caller keeps showing the previous curve.
    pub fn apply_input(&self, a_text: &str, b_text: &str) -> Result<Self> {
        match input::parse_parameters(a_text, b_text) {
            Ok(curve) => Ok(self.set_parameters(curve.a, curve.b)),
            Err(e) => {
                warn!("rejected parameter update: {}", e);
                Err(e)
            }
        }
    }

    // ── Curve side ───────────────────────────────────────────────────────

    /// Real points over the configured domain (x ∈ [−5, 5], 1000 samples by default).
    pub fn real_locus(&self) -> Vec<(f64, f64)> {
        locus::sample_domain(&self.curve, &self.config.locus)
    }

    pub fn real_locus_over(&self, domain: &LocusDomain) -> Vec<(f64, f64)> {
        locus::sample_domain(&self.curve, domain)
    }

    pub fn locus_branches(&self) -> Vec<LocusBranch> {
        locus::branches(&self.curve, &self.config.locus)
    }

    pub fn discriminant(&self) -> f64 {
        self.curve.discriminant()
    }

    /// Real j-invariant of the current curve; `Err(SingularCurve)` when Δ == 0,
    /// `Err(InvariantOverflow)` when the coefficients are too large for f64.
    pub fn j_invariant(&self) -> Result<f64> {
        self.curve.j_invariant()
    }

    // ── Modular side ─────────────────────────────────────────────────────

    /// Complex j-invariant at τ from the q-expansion.
    pub fn j_invariant_at(&self, tau: Complex64) -> Complex64 {
        modular::j_from_tau_with(tau, self.config.order)
    }

    /// Real curve that τ maps to (imaginary parts dropped).
    pub fn curve_params_at(&self, tau: Complex64) -> Result<WeierstrassCurve> {
        modular::curve_params_with(tau, self.config.order)
    }

    /// Field over an explicit rectangle at `resolution = (nx, ny)`.
    pub fn field_over_region(&self, x_range: (f64, f64), y_range: (f64, f64), resolution: (usize, usize)) -> Result<ScalarField> {
        let region = FieldRegion {
            x_range,
            y_range,
            nx: resolution.0,
            ny: resolution.1,
        };
        field::sample_region(&region, self.config.order)
    }

    /// Field over the configured region.
    pub fn default_field(&self) -> Result<ScalarField> {
        field::sample_region(&self.config.field, self.config.order)
    }

    pub fn domain_overlay(&self) -> Vec<DomainOutline> {
        domain::fundamental_domain()
    }

    pub fn special_points(&self) -> [SpecialPoint; 2] {
        domain::special_points(self.config.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;

    #[test]
    fn default_model_is_reference_curve() {
        let m = CurveModel::default();
        assert_eq!(m.curve(), WeierstrassCurve::new(-1.0, 0.0));
        assert_eq!(m.discriminant(), 64.0);
        assert!((m.j_invariant().unwrap() - 108.0).abs() < 1e-12);
    }

    #[test]
    fn set_parameters_returns_new_value() {
        let before = CurveModel::default();
        let after = before.set_parameters(2.0, 3.0);
        assert_eq!(before.curve(), WeierstrassCurve::new(-1.0, 0.0));
        assert_eq!(after.curve(), WeierstrassCurve::new(2.0, 3.0));
        assert_eq!(after.config(), before.config());
    }

    #[test]
    fn singular_parameters_accepted() {
        let m = CurveModel::default().set_parameters(0.0, 0.0);
        assert_eq!(m.discriminant(), 0.0);
        assert!(matches!(m.j_invariant(), Err(ModelError::SingularCurve { .. })));
        // locus still samples fine
        assert!(!m.real_locus().is_empty());
    }

    #[test]
    fn huge_but_finite_input_has_no_nan_j() {
        let m = CurveModel::default().apply_input("1e103", "0").unwrap();
        assert!(m.discriminant().is_infinite());
        assert!(matches!(m.j_invariant(), Err(ModelError::InvariantOverflow { .. })));
    }

    #[test]
    fn invalid_input_keeps_previous_model() {
        let m = CurveModel::new(1.0, 1.0);
        let err = m.apply_input("1.5", "not a number").unwrap_err();
        assert!(matches!(err, ModelError::InvalidUserInput { field: "b", .. }));
        assert_eq!(m.curve(), WeierstrassCurve::new(1.0, 1.0));

        let updated = m.apply_input("-2", "0.5").unwrap();
        assert_eq!(updated.curve(), WeierstrassCurve::new(-2.0, 0.5));
    }

    #[test]
    fn real_locus_uses_default_domain() {
        let m = CurveModel::default();
        let pts = m.real_locus();
        assert!(pts.iter().all(|p| p.0 >= -5.0 && p.0 <= 5.0));
        assert_eq!(pts, m.real_locus_over(&LocusDomain::default()));
        assert_eq!(m.locus_branches().len(), 2);
    }

    #[test]
    fn field_over_region_respects_resolution() {
        let m = CurveModel::default();
        let f = m.field_over_region((-2.0, 2.0), (0.1, 2.0), (12, 8)).unwrap();
        assert_eq!((f.nx(), f.ny()), (12, 8));

        let f = m.default_field().unwrap();
        assert_eq!((f.nx(), f.ny()), (40, 40));

        let classic = m.with_field_region(FieldRegion::classic()).default_field().unwrap();
        assert_eq!((classic.nx(), classic.ny()), (20, 20));
    }

    #[test]
    fn order_flows_into_modular_queries() {
        let tau = Complex64::new(0.0, 1.0);
        let short = CurveModel::default().j_invariant_at(tau);
        let long = CurveModel::default().with_order(SeriesOrder::new(6)).j_invariant_at(tau);
        assert!((long.re - 1728.0).abs() < (short.re - 1728.0).abs());
    }

    #[test]
    fn curve_params_at_degenerate_tau() {
        let m = CurveModel::default();
        let tau = modular::reference_e6_zero();
        assert!(matches!(m.curve_params_at(tau), Err(ModelError::DegenerateModularMap { .. })));
        assert!(m.curve_params_at(Complex64::new(0.0, 2.0)).is_ok());
    }
}
