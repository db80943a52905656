//! log(|j| + 1) sampled over a rectangle of the upper half-plane.
//!
//! Each grid point τ = x + iy goes through the full chain
//! τ → (E4, E6) → (a, b) → Δ → j, independently of every other point.
//! A point where the chain breaks (E6 vanishes, Δ is exactly zero, or the
//! value overflows) becomes an undefined cell; it never aborts the field
//! and never leaks NaN to the renderer.
//!
//! Rows follow the Im(τ) axis and columns the Re(τ) axis, stored
//! row-major. With the `parallel` feature rows are evaluated on the rayon
//! pool; the grid-index → value mapping is identical either way.

use log::{debug, trace};
use num_complex::Complex64;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::{FieldRegion, SeriesOrder};
use crate::error::Result;
use crate::locus::linspace;
use crate::modular::curve_params_with;

/// j-invariant of the curve τ maps to, before the log scaling.
pub fn j_at_cell(tau: Complex64, order: SeriesOrder) -> Result<f64> {
    curve_params_with(tau, order)?.j_invariant()
}

/// Field value at one τ: `Some(ln(|j| + 1))`, or `None` where undefined.
pub fn cell_value(tau: Complex64, order: SeriesOrder) -> Option<f64> {
    match j_at_cell(tau, order) {
        Ok(j) => Some((j.abs() + 1.0).ln()),
        Err(e) => {
            trace!("undefined cell: {}", e);
            None
        }
    }
}

fn row_values(xs: &[f64], y: f64, order: SeriesOrder) -> Vec<Option<f64>> {
    xs.iter()
        .map(|&x| cell_value(Complex64::new(x, y), order))
        .collect()
}

#[cfg_attr(feature = "parallel", allow(dead_code))]
fn evaluate_rows_sequential(xs: &[f64], ys: &[f64], order: SeriesOrder) -> Vec<Option<f64>> {
    ys.iter().flat_map(|&y| row_values(xs, y, order)).collect()
}

#[cfg(feature = "parallel")]
fn evaluate_rows(xs: &[f64], ys: &[f64], order: SeriesOrder) -> Vec<Option<f64>> {
    let rows: Vec<Vec<Option<f64>>> = ys.par_iter().map(|&y| row_values(xs, y, order)).collect();
    rows.into_iter().flatten().collect()
}

#[cfg(not(feature = "parallel"))]
fn evaluate_rows(xs: &[f64], ys: &[f64], order: SeriesOrder) -> Vec<Option<f64>> {
    evaluate_rows_sequential(xs, ys, order)
}

/// A sampled nx × ny grid of field values.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    xs: Vec<f64>,
    ys: Vec<f64>,
    values: Vec<Option<f64>>,
}

impl ScalarField {
    /// Columns (Re axis).
    pub fn nx(&self) -> usize {
        self.xs.len()
    }

    /// Rows (Im axis).
    pub fn ny(&self) -> usize {
        self.ys.len()
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Value at column `ix`, row `iy`; `None` if the cell is undefined.
    ///
    /// # Panics
    /// If the index lies outside the grid.
    pub fn value(&self, ix: usize, iy: usize) -> Option<f64> {
        assert!(ix < self.nx() && iy < self.ny(), "cell ({}, {}) out of range", ix, iy);
        self.values[iy * self.nx() + ix]
    }

    pub fn tau_at(&self, ix: usize, iy: usize) -> Complex64 {
        Complex64::new(self.xs[ix], self.ys[iy])
    }

    /// Row-major cells.
    pub fn cells(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Exactly `ny` rows of `nx` cells each, bottom (smallest Im τ) first.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<f64>]> {
        let nx = self.nx();
        (0..self.ny()).map(move |iy| &self.values[iy * nx..(iy + 1) * nx])
    }

    pub fn undefined_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_none()).count()
    }

    pub fn defined_count(&self) -> usize {
        self.values.len() - self.undefined_count()
    }

    /// Smallest and largest defined value.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.values.iter().flatten().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    /// Dense copy with undefined cells replaced by `fill`.
    pub fn values_or(&self, fill: f64) -> Vec<f64> {
        self.values.iter().map(|v| v.unwrap_or(fill)).collect()
    }
}

/// Sample the field over `x_range × y_range` on an `nx × ny` grid.
pub fn sample_field(x_range: (f64, f64), y_range: (f64, f64), nx: usize, ny: usize) -> Result<ScalarField> {
    let region = FieldRegion {
        x_range,
        y_range,
        nx,
        ny,
    };
    sample_region(&region, SeriesOrder::default())
}

/// Sample the field over a region with a chosen series truncation.
pub fn sample_region(region: &FieldRegion, order: SeriesOrder) -> Result<ScalarField> {
    region.validate()?;
    let xs = linspace(region.x_range.0, region.x_range.1, region.nx);
    let ys = linspace(region.y_range.0, region.y_range.1, region.ny);

    let field = ScalarField {
        values: evaluate_rows(&xs, &ys, order),
        xs,
        ys,
    };
    debug!(
        "sampled {}x{} field over {:?} x {:?}: {} undefined cells",
        field.nx(),
        field.ny(),
        region.x_range,
        region.y_range,
        field.undefined_count()
    );
    Ok(field)
}
