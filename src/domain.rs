//! Schematic fundamental domain of the modular group.
//!
//! Fixed overlay geometry for the field plot: the three-segment outline
//! through (−1, 0), (−½, √3/2), (½, √3/2), (1, 0), its translates by
//! integers k ∈ {−2, −1, 1, 2}, and the two elliptic points i and ρ.
//! Nothing here depends on the field values.

use num_complex::Complex64;

use crate::config::SeriesOrder;
use crate::modular::j_from_tau_with;

/// Height of the corner ρ = ½ + i√3/2.
pub const RHO_HEIGHT: f64 = 0.866_025_403_784_438_6;

/// Translates drawn on either side of the primary domain.
const TRANSLATES: [i32; 4] = [-2, -1, 1, 2];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineKind {
    /// The domain around Re τ = 0
    Primary,
    /// A copy shifted by an integer
    Translate,
}

/// One polyline of the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainOutline {
    pub kind: OutlineKind,
    /// Integer shift along Re τ
    pub shift: i32,
    pub points: Vec<(f64, f64)>,
}

fn outline_at(shift: i32, kind: OutlineKind) -> DomainOutline {
    let k = shift as f64;
    DomainOutline {
        kind,
        shift,
        points: vec![
            (k - 1.0, 0.0),
            (k - 0.5, RHO_HEIGHT),
            (k + 0.5, RHO_HEIGHT),
            (k + 1.0, 0.0),
        ],
    }
}

/// Primary outline first, then the translates in increasing shift.
pub fn fundamental_domain() -> Vec<DomainOutline> {
    std::iter::once(outline_at(0, OutlineKind::Primary))
        .chain(TRANSLATES.iter().map(|&k| outline_at(k, OutlineKind::Translate)))
        .collect()
}

/// A marked point of the upper half-plane with its j value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecialPoint {
    pub name: &'static str,
    pub annotation: &'static str,
    pub tau: Complex64,
    pub j: Complex64,
}

/// τ = i and τ = ρ, with j from the truncated q-expansion.
pub fn special_points(order: SeriesOrder) -> [SpecialPoint; 2] {
    let i = Complex64::new(0.0, 1.0);
    let rho = Complex64::new(0.5, RHO_HEIGHT);
    [
        SpecialPoint {
            name: "i",
            annotation: "4-fold rotation",
            tau: i,
            j: j_from_tau_with(i, order),
        },
        SpecialPoint {
            name: "ρ",
            annotation: "3-fold rotation",
            tau: rho,
            j: j_from_tau_with(rho, order),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rho_height_is_sqrt3_over_2() {
        assert!((RHO_HEIGHT - 3.0_f64.sqrt() / 2.0).abs() < 1e-15);
    }

    #[test]
    fn primary_outline_geometry() {
        let outlines = fundamental_domain();
        assert_eq!(outlines.len(), 5);
        let primary = &outlines[0];
        assert_eq!(primary.kind, OutlineKind::Primary);
        assert_eq!(primary.points.first(), Some(&(-1.0, 0.0)));
        assert_eq!(primary.points.last(), Some(&(1.0, 0.0)));
        assert_eq!(primary.points[1].1, primary.points[2].1);
    }

    #[test]
    fn translates_are_shifted_copies() {
        let outlines = fundamental_domain();
        let primary = &outlines[0];
        for t in &outlines[1..] {
            assert_eq!(t.kind, OutlineKind::Translate);
            assert_ne!(t.shift, 0);
            for (p, q) in primary.points.iter().zip(&t.points) {
                assert_eq!(q.0 - p.0, t.shift as f64);
                assert_eq!(q.1, p.1);
            }
        }
    }

    #[test]
    fn special_points_have_known_j() {
        // exact values: j(i) = 1728, j(ρ) = 0; the order-6 series is close to both
        let [at_i, at_rho] = special_points(SeriesOrder::new(6));
        assert_eq!(at_i.name, "i");
        assert!((at_i.j.re - 1728.0).abs() < 0.05, "j(i) = {}", at_i.j);
        assert!(at_rho.j.norm() < 5.0, "j(ρ) = {}", at_rho.j);
    }
}
