//! Real points of y² = x³ + ax + b.
//!
//! Sampling walks evenly spaced x values and keeps only those where the
//! right-hand side is non-negative. Where x³ + ax + b < 0 the curve has no
//! real point and nothing is emitted, so the output can have gaps in x.
//! No interpolation is done across a gap.

use crate::config::LocusDomain;
use crate::curve::WeierstrassCurve;

/// `n` evenly spaced values from `start` to `end` inclusive.
///
/// `n == 1` yields `[start]`, `n == 0` yields nothing. The last value is
/// exactly `end`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut xs: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            xs[n - 1] = end;
            xs
        }
    }
}

/// The real y values above `x`: `[+√y², −√y²]`, or `None` where y² < 0.
///
/// At a root of the cubic both entries are zero.
#[inline]
pub fn y_values(curve: &WeierstrassCurve, x: f64) -> Option<[f64; 2]> {
    let y_squared = curve.rhs(x);
    if y_squared >= 0.0 {
        let y = y_squared.sqrt();
        Some([y, -y])
    } else {
        None
    }
}

/// Sample the real locus over `[x_min, x_max]`.
///
/// Ordered by x; each x with a real point contributes `(x, +y)` then
/// `(x, −y)`.
pub fn sample(curve: &WeierstrassCurve, x_min: f64, x_max: f64, n_points: usize) -> Vec<(f64, f64)> {
    let mut points = Vec::with_capacity(2 * n_points);
    for x in linspace(x_min, x_max, n_points) {
        if let Some([upper, lower]) = y_values(curve, x) {
            points.push((x, upper));
            points.push((x, lower));
        }
    }
    points
}

pub fn sample_domain(curve: &WeierstrassCurve, domain: &LocusDomain) -> Vec<(f64, f64)> {
    sample(curve, domain.x_min, domain.x_max, domain.samples)
}

/// One connected run of x samples where the curve has real points.
#[derive(Debug, Clone, PartialEq)]
pub struct LocusBranch {
    /// (x, +y) left to right
    pub upper: Vec<(f64, f64)>,
    /// (x, −y) left to right
    pub lower: Vec<(f64, f64)>,
}

impl LocusBranch {
    pub fn x_span(&self) -> (f64, f64) {
        let first = self.upper.first().map_or(f64::NAN, |p| p.0);
        let last = self.upper.last().map_or(f64::NAN, |p| p.0);
        (first, last)
    }

    pub fn len(&self) -> usize {
        self.upper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upper.is_empty()
    }

    /// Single polyline: upper branch left to right, then lower branch
    /// right to left. For a bounded oval this closes the loop.
    pub fn outline(&self) -> Vec<(f64, f64)> {
        self.upper
            .iter()
            .copied()
            .chain(self.lower.iter().rev().copied())
            .collect()
    }
}

/// Split the sampled locus into connected branches so a renderer never
/// draws a line across a gap.
pub fn branches(curve: &WeierstrassCurve, domain: &LocusDomain) -> Vec<LocusBranch> {
    let mut out = Vec::new();
    let mut current: Option<LocusBranch> = None;

    for x in linspace(domain.x_min, domain.x_max, domain.samples) {
        match y_values(curve, x) {
            Some([upper, lower]) => {
                let branch = current.get_or_insert_with(|| LocusBranch {
                    upper: Vec::new(),
                    lower: Vec::new(),
                });
                branch.upper.push((x, upper));
                branch.lower.push((x, lower));
            }
            None => {
                if let Some(done) = current.take() {
                    out.push(done);
                }
            }
        }
    }
    if let Some(done) = current {
        out.push(done);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_curve() -> WeierstrassCurve {
        WeierstrassCurve::new(-1.0, 0.0)
    }

    // ── linspace ─────────────────────────────────────────────────────────

    #[test]
    fn linspace_endpoints_inclusive() {
        let xs = linspace(-5.0, 5.0, 1000);
        assert_eq!(xs.len(), 1000);
        assert_eq!(xs[0], -5.0);
        assert_eq!(xs[999], 5.0);
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
        assert_eq!(linspace(-1.0, 1.0, 3), vec![-1.0, 0.0, 1.0]);
    }

    // ── sample ───────────────────────────────────────────────────────────

    #[test]
    fn reference_curve_has_double_zero_at_origin() {
        // x = 0: y² = 0 → both +0 and −0 are emitted
        let pts = sample(&reference_curve(), -2.0, 2.0, 5);
        let at_zero: Vec<_> = pts.iter().filter(|p| p.0 == 0.0).collect();
        assert_eq!(at_zero.len(), 2);
        assert!(at_zero.iter().all(|p| p.1 == 0.0));
    }

    #[test]
    fn reference_curve_at_two_is_plus_minus_sqrt6() {
        let pts = sample(&reference_curve(), -2.0, 2.0, 5);
        let at_two: Vec<_> = pts.iter().filter(|p| p.0 == 2.0).collect();
        assert_eq!(at_two.len(), 2);
        assert!((at_two[0].1 - 6.0_f64.sqrt()).abs() < 1e-12);
        assert!((at_two[1].1 + 6.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn no_points_where_rhs_negative() {
        let curve = reference_curve();
        let pts = sample(&curve, -5.0, 5.0, 1000);
        for x in linspace(-5.0, 5.0, 1000) {
            let count = pts.iter().filter(|p| p.0 == x).count();
            if curve.rhs(x) < 0.0 {
                assert_eq!(count, 0, "x = {} has y² < 0 but emitted points", x);
            } else {
                assert_eq!(count, 2, "x = {} should emit ±y", x);
            }
        }
    }

    #[test]
    fn points_satisfy_equation() {
        let curve = WeierstrassCurve::new(-2.0, 1.0);
        for (x, y) in sample(&curve, -5.0, 5.0, 400) {
            let residual = y * y - curve.rhs(x);
            assert!(residual.abs() < 1e-9 * (1.0 + y * y), "({}, {})", x, y);
        }
    }

    #[test]
    fn default_domain_matches_explicit_call() {
        let curve = reference_curve();
        assert_eq!(
            sample_domain(&curve, &LocusDomain::default()),
            sample(&curve, -5.0, 5.0, 1000)
        );
    }

    #[test]
    fn curve_below_axis_everywhere_in_range_is_empty() {
        // x³ + 0x − 1000 < 0 for all x ≤ 5
        let curve = WeierstrassCurve::new(0.0, -1000.0);
        assert!(sample(&curve, -5.0, 5.0, 200).is_empty());
    }

    // ── branches ─────────────────────────────────────────────────────────

    #[test]
    fn reference_curve_has_oval_and_unbounded_branch() {
        // y² = x(x − 1)(x + 1): real on [−1, 0] and [1, ∞)
        let domain = LocusDomain {
            x_min: -2.0,
            x_max: 3.0,
            samples: 501,
        };
        let parts = branches(&reference_curve(), &domain);
        assert_eq!(parts.len(), 2);

        let (lo, hi) = parts[0].x_span();
        assert!((lo + 1.0).abs() < 1e-9 && hi.abs() < 1e-9, "oval span {:?}", (lo, hi));

        let (lo, hi) = parts[1].x_span();
        assert!((lo - 1.0).abs() < 1e-9 && hi == 3.0, "tail span {:?}", (lo, hi));
    }

    #[test]
    fn branches_cover_every_sampled_point() {
        let curve = WeierstrassCurve::new(-4.0, 1.0);
        let domain = LocusDomain::default();
        let total: usize = branches(&curve, &domain).iter().map(|b| 2 * b.len()).sum();
        assert_eq!(total, sample_domain(&curve, &domain).len());
    }

    #[test]
    fn outline_closes_oval() {
        let domain = LocusDomain {
            x_min: -1.0,
            x_max: 0.0,
            samples: 11,
        };
        let parts = branches(&reference_curve(), &domain);
        assert_eq!(parts.len(), 1);
        let outline = parts[0].outline();
        assert_eq!(outline.len(), 22);
        // starts and ends at x = −1 where y = 0
        assert_eq!(outline.first().unwrap().0, -1.0);
        assert_eq!(outline.last().unwrap().0, -1.0);
    }
}
