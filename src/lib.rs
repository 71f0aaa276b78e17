//! # Fulgor Numerics
//!
//! Fixed-shape matrices (1x2, 1x3, 3x3, 4x4) and 3D vectors whose elements
//! can be backed by `i32`, `i64`, `f32` or `f64`, together with the
//! saturating cast policy that moves values between those kinds.
//!
//! ## Quick Start
//!
//! ```rust
//! use fulgor_numerics::numerics::ops::matrix::{invert, multiply, translation};
//! use fulgor_numerics::prelude::*;
//!
//! let model = translation(1.0, 2.0, 3.0).rotate_z(std::f64::consts::FRAC_PI_2);
//! let p = model.transform_point(Point3::new(1.0, 0.0, 0.0));
//! assert!((p.x - 1.0).abs() < 1e-12 && (p.y - 3.0).abs() < 1e-12);
//!
//! let inverse = invert(&model).expect("rigid transforms are invertible");
//! let round_trip = multiply(&model, &inverse);
//! assert!((round_trip[(0, 0)] - 1.0).abs() < 1e-12);
//!
//! // Lossy casts saturate instead of wrapping.
//! assert_eq!(cast::<f64, i32>(1e300), i32::MAX);
//! ```

pub mod config;
pub mod error;
pub mod numerics;
pub mod prelude;
pub mod shapes;

pub use config::KernelConfig;
pub use error::{NumericsError, Result};

/// Version information for the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
