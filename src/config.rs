//! Sampling and truncation settings.
//!
//! Defaults reproduce the interactive figure: curve drawn over x ∈ [−5, 5]
//! with 1000 samples, upper half-plane sampled on a 40×40 grid over
//! [−3, 3] × [0.1, 3], series truncated after the q² term.

use crate::error::{ModelError, Result};

/// Highest q-power for which coefficient tables are available.
pub const MAX_SERIES_ORDER: usize = 6;

/// Number of positive q-powers kept in every truncated series.
///
/// Order 2 keeps `1/q + 744 + c₁q + c₂q²` for j and `1 + k₁q + k₂q²` for
/// E4/E6. Requests beyond [`MAX_SERIES_ORDER`] are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeriesOrder(usize);

impl SeriesOrder {
    pub const REFERENCE: SeriesOrder = SeriesOrder(2);

    pub fn new(order: usize) -> Self {
        Self(order.min(MAX_SERIES_ORDER))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for SeriesOrder {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// x-interval over which the real locus is sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocusDomain {
    pub x_min: f64,
    pub x_max: f64,
    /// Evenly spaced samples, endpoints included
    pub samples: usize,
}

impl Default for LocusDomain {
    fn default() -> Self {
        Self {
            x_min: -5.0,
            x_max: 5.0,
            samples: 1000,
        }
    }
}

/// Rectangle of the upper half-plane plus grid resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRegion {
    /// Re(τ) interval
    pub x_range: (f64, f64),
    /// Im(τ) interval; must start strictly above 0
    pub y_range: (f64, f64),
    /// Columns (Re axis)
    pub nx: usize,
    /// Rows (Im axis)
    pub ny: usize,
}

impl FieldRegion {
    /// The smaller first-generation figure: 20×20 over [−2, 2] × [0.1, 2].
    pub fn classic() -> Self {
        Self {
            x_range: (-2.0, 2.0),
            y_range: (0.1, 2.0),
            nx: 20,
            ny: 20,
        }
    }

    /// Same rectangle at a different resolution.
    pub fn with_resolution(self, nx: usize, ny: usize) -> Self {
        Self { nx, ny, ..self }
    }

    /// Reject regions that touch or cross the real axis, or have
    /// non-finite bounds.
    pub fn validate(&self) -> Result<()> {
        let bounds = [self.x_range.0, self.x_range.1, self.y_range.0, self.y_range.1];
        if bounds.iter().any(|v| !v.is_finite()) {
            return Err(ModelError::invalid_region(format!(
                "bounds must be finite, got x {:?}, y {:?}",
                self.x_range, self.y_range
            )));
        }
        let y_low = self.y_range.0.min(self.y_range.1);
        if y_low <= 0.0 {
            return Err(ModelError::invalid_region(format!(
                "Im(τ) axis must start strictly above 0, got {:?}",
                self.y_range
            )));
        }
        Ok(())
    }
}

impl Default for FieldRegion {
    fn default() -> Self {
        Self {
            x_range: (-3.0, 3.0),
            y_range: (0.1, 3.0),
            nx: 40,
            ny: 40,
        }
    }
}

/// Everything a [`crate::model::CurveModel`] needs besides (a, b).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ModelConfig {
    pub locus: LocusDomain,
    pub field: FieldRegion,
    pub order: SeriesOrder,
}
