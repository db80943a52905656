//! Character-cell rendering for the terminal front end.
//!
//! Only presentation: maps already computed points and fields onto a grid
//! of characters. No mathematics lives here.

use crate::domain::{DomainOutline, OutlineKind, SpecialPoint};
use crate::field::ScalarField;

/// Darkest to brightest.
const SHADES: [char; 9] = [' ', '.', ':', '-', '=', '*', '#', '%', '@'];
const UNDEFINED: char = '?';

/// A fixed-size character raster over a rectangle of the plane.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    x_range: (f64, f64),
    y_range: (f64, f64),
    cells: Vec<char>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        Self {
            width,
            height,
            x_range,
            y_range,
            cells: vec![' '; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell (column, row-from-top) containing (x, y), if inside.
    pub fn locate(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let fx = fraction(x, self.x_range)?;
        let fy = fraction(y, self.y_range)?;
        let col = ((fx * (self.width - 1) as f64).round()) as usize;
        let row_from_bottom = ((fy * (self.height - 1) as f64).round()) as usize;
        Some((col, self.height - 1 - row_from_bottom))
    }

    pub fn set(&mut self, col: usize, row: usize, ch: char) {
        if col < self.width && row < self.height {
            self.cells[row * self.width + col] = ch;
        }
    }

    pub fn get(&self, col: usize, row: usize) -> char {
        self.cells[row * self.width + col]
    }

    /// Mark (x, y); points outside the rectangle are ignored.
    pub fn plot(&mut self, x: f64, y: f64, ch: char) {
        if let Some((col, row)) = self.locate(x, y) {
            self.set(col, row, ch);
        }
    }

    /// Straight segment, sampled densely enough to leave no holes.
    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), ch: char) {
        let steps = 4 * (self.width + self.height).max(1);
        for s in 0..=steps {
            let t = s as f64 / steps as f64;
            self.plot(from.0 + t * (to.0 - from.0), from.1 + t * (to.1 - from.1), ch);
        }
    }

    pub fn polyline(&mut self, points: &[(f64, f64)], ch: char) {
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], ch);
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.cells.chunks(self.width.max(1)) {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}

/// Position of `v` within `range` as a value in [0, 1], or `None` outside.
fn fraction(v: f64, range: (f64, f64)) -> Option<f64> {
    let (lo, hi) = range;
    if !v.is_finite() || hi == lo {
        return None;
    }
    let f = (v - lo) / (hi - lo);
    (0.0..=1.0).contains(&f).then_some(f)
}

/// Shade for `v` given the field's defined range.
pub fn shade(v: Option<f64>, min_max: Option<(f64, f64)>) -> char {
    match (v, min_max) {
        (None, _) => UNDEFINED,
        (Some(_), None) => SHADES[0],
        (Some(v), Some((lo, hi))) => {
            if hi <= lo {
                return SHADES[SHADES.len() / 2];
            }
            let f = ((v - lo) / (hi - lo)).clamp(0.0, 1.0);
            SHADES[(f * (SHADES.len() - 1) as f64).round() as usize]
        }
    }
}

/// Heat map of a field, one character per cell, highest Im(τ) on top.
pub fn heat_map(field: &ScalarField) -> Canvas {
    let x_range = axis_range(field.xs());
    let y_range = axis_range(field.ys());
    let mut canvas = Canvas::new(field.nx(), field.ny(), x_range, y_range);
    let min_max = field.min_max();
    for iy in 0..field.ny() {
        for ix in 0..field.nx() {
            let row = field.ny() - 1 - iy;
            canvas.set(ix, row, shade(field.value(ix, iy), min_max));
        }
    }
    canvas
}

fn axis_range(axis: &[f64]) -> (f64, f64) {
    match (axis.first(), axis.last()) {
        (Some(&lo), Some(&hi)) => (lo, hi),
        _ => (0.0, 0.0),
    }
}

/// Draw the fundamental-domain outlines and special points over a canvas.
pub fn overlay_domain(canvas: &mut Canvas, outlines: &[DomainOutline], points: &[SpecialPoint]) {
    for outline in outlines {
        let ch = match outline.kind {
            OutlineKind::Primary => 'o',
            OutlineKind::Translate => '~',
        };
        canvas.polyline(&outline.points, ch);
    }
    for p in points {
        let ch = p.name.chars().next().unwrap_or('*');
        canvas.plot(p.tau.re, p.tau.im, ch);
    }
}

/// Scatter plot of locus points.
pub fn locus_plot(points: &[(f64, f64)], width: usize, height: usize, x_range: (f64, f64), y_range: (f64, f64)) -> Canvas {
    let mut canvas = Canvas::new(width, height, x_range, y_range);
    canvas.line((x_range.0, 0.0), (x_range.1, 0.0), '-');
    canvas.line((0.0, y_range.0), (0.0, y_range.1), '|');
    for &(x, y) in points {
        canvas.plot(x, y, '*');
    }
    canvas
}
