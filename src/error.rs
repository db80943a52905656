//! Error types shared by the curve, modular and field layers.

use num_complex::Complex64;
use thiserror::Error;

/// Everything that can go wrong between a parameter change and a rendered field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Δ(a, b) is exactly zero: the cubic is singular and has no j-invariant.
    #[error("singular curve y² = x³ + {a}x + {b}: discriminant is zero, j-invariant undefined")]
    SingularCurve {
        /// Coefficient of x
        a: f64,
        /// Constant term
        b: f64,
    },

    /// Δ is non-zero but j = −1728·4a³/Δ does not fit in an f64, e.g.
    /// when a³ overflows for very large finite coefficients.
    #[error("j-invariant of y² = x³ + {a}x + {b} overflows f64")]
    InvariantOverflow {
        /// Coefficient of x
        a: f64,
        /// Constant term
        b: f64,
    },

    /// The truncated E6 series vanished at τ, so τ has no (a, b) image.
    #[error("degenerate modular map at τ = {tau}: E6(τ) vanishes")]
    DegenerateModularMap {
        /// Point of the upper half-plane where the map broke down
        tau: Complex64,
    },

    /// Text supplied for a coefficient did not parse as a real number.
    #[error("invalid value {input:?} for {field}: please enter a valid number")]
    InvalidUserInput {
        /// Which coefficient ("a" or "b")
        field: &'static str,
        /// The rejected text
        input: String,
    },

    /// A sampling region that cannot be evaluated.
    #[error("invalid sampling region: {reason}")]
    InvalidRegion {
        /// What is wrong with the region
        reason: String,
    },
}

impl ModelError {
    pub fn singular(a: f64, b: f64) -> Self {
        Self::SingularCurve { a, b }
    }

    pub fn overflow(a: f64, b: f64) -> Self {
        Self::InvariantOverflow { a, b }
    }

    pub fn degenerate(tau: Complex64) -> Self {
        Self::DegenerateModularMap { tau }
    }

    pub fn invalid_input(field: &'static str, input: impl Into<String>) -> Self {
        Self::InvalidUserInput {
            field,
            input: input.into(),
        }
    }

    pub fn invalid_region(reason: impl Into<String>) -> Self {
        Self::InvalidRegion {
            reason: reason.into(),
        }
    }

    /// Whether the error only affects a single point (grid cell) rather
    /// than the whole request.
    pub fn is_pointwise(&self) -> bool {
        matches!(
            self,
            Self::SingularCurve { .. }
                | Self::InvariantOverflow { .. }
                | Self::DegenerateModularMap { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let e = ModelError::singular(0.0, 0.0);
        assert!(e.to_string().contains("discriminant is zero"));

        let e = ModelError::invalid_input("a", "abc");
        let msg = e.to_string();
        assert!(msg.contains("\"abc\""), "got: {}", msg);
        assert!(msg.contains("for a"), "got: {}", msg);

        let e = ModelError::degenerate(Complex64::new(0.0, 1.0));
        assert!(e.to_string().contains("E6"));

        let e = ModelError::overflow(1e103, 0.0);
        assert!(e.to_string().contains("overflows"), "got: {}", e);
    }

    #[test]
    fn pointwise_classification() {
        assert!(ModelError::singular(1.0, 2.0).is_pointwise());
        assert!(ModelError::degenerate(Complex64::new(0.5, 0.5)).is_pointwise());
        assert!(ModelError::overflow(1e103, 0.0).is_pointwise());
        assert!(!ModelError::invalid_input("b", "x").is_pointwise());
        assert!(!ModelError::invalid_region("empty").is_pointwise());
    }
}
