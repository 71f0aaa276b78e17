//! Prelude for fulgor_numerics
//!
//! Re-exports the value types, traits and error type for convenient use.

pub use crate::config::KernelConfig;
pub use crate::error::{NumericsError, Result};
pub use crate::numerics::precision::{cast, Number, NumericKind};
pub use crate::numerics::types::coordinates::{Axis, RowAxisValues, XyzValues};
pub use crate::numerics::types::matrix::{DynMatrix, Matrix, Matrix1x2, Matrix1x3, Matrix3, Matrix4};
pub use crate::numerics::types::point::{Point3, Point3d, Point3f};
pub use crate::numerics::types::shape::MatrixShape;
pub use crate::numerics::types::traits::{FloatingPoint, Numeric};
pub use crate::numerics::types::vector::{Vector3, Vector3d, Vector3f};
pub use crate::shapes::{Shape, Torus};

// Common type aliases for frequently used instantiations
pub type Matrix1x2f = Matrix1x2<f32>;
pub type Matrix1x2d = Matrix1x2<f64>;
pub type Matrix1x3f = Matrix1x3<f32>;
pub type Matrix1x3d = Matrix1x3<f64>;
pub type Matrix3f = Matrix3<f32>;
pub type Matrix3d = Matrix3<f64>;
pub type Matrix4f = Matrix4<f32>;
pub type Matrix4d = Matrix4<f64>;
