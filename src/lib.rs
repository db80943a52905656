//! # elliptic-modular-sim
//!
//! Numerical model behind an interactive picture of elliptic curves and
//! the j-invariant, connecting the real locus of a Weierstrass cubic with
//! a heat map of j over the upper half-plane.
//!
//! ```text
//! (a, b) ──► real locus y² = x³ + ax + b
//!   │
//!   └──► Δ = −16(4a³ + 27b²) ──► j = −1728·4a³/Δ
//!
//! τ ──► q = exp(2πiτ) ──► j(τ) ≈ 1/q + 744 + 196884q + …
//!        │
//!        └──► (E4, E6) ──► (a, b) ──► Δ ──► log(|j| + 1) field
//! ```
//!
//! The two j-invariants are different operations:
//! [`curve::WeierstrassCurve::j_invariant`] is real and can be undefined,
//! [`modular::j_from_tau`] is complex and always evaluates.
//!
//! ## Usage
//!
//! ```no_run
//! use elliptic_modular_sim::prelude::*;
//!
//! let model = CurveModel::new(-1.0, 0.0);
//! println!("Δ = {}, j = {:?}", model.discriminant(), model.j_invariant());
//!
//! let field = model.field_over_region((-3.0, 3.0), (0.1, 3.0), (40, 40)).unwrap();
//! println!("{} of {} cells undefined", field.undefined_count(), field.cells().len());
//! ```

pub mod config;
pub mod curve;
pub mod domain;
pub mod error;
pub mod field;
pub mod input;
pub mod locus;
pub mod model;
pub mod modular;
pub mod render;


pub mod prelude {
    pub use crate::config::*;
    pub use crate::curve::*;
    pub use crate::domain::*;
    pub use crate::error::ModelError;
    pub use crate::field::*;
    pub use crate::input::*;
    pub use crate::locus::*;
    pub use crate::model::*;
    pub use crate::modular::*;
}
