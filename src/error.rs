// src/error.rs
//! Error type shared by the numerics kernel.
//!
//! Bounds and shape errors are programming errors surfaced at the offending
//! call. Zero-vector errors are data conditions a caller is expected to
//! handle. Singular matrices are not errors at all: inversion returns `None`.

use crate::numerics::types::coordinates::Axis;
use crate::numerics::types::shape::MatrixShape;

/// Errors that can occur in matrix and vector operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumericsError {
    #[error("Index out of bounds: {index} is outside a matrix of size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    #[error("Row out of bounds: {row} is outside a matrix with {rows} rows")]
    RowOutOfBounds { row: usize, rows: usize },

    #[error("Column out of bounds: {col} is outside a matrix with {cols} columns")]
    ColumnOutOfBounds { col: usize, cols: usize },

    #[error("Axis out of bounds: {axis:?} is outside a matrix with {cols} columns")]
    AxisOutOfBounds { axis: Axis, cols: usize },

    #[error("Unknown matrix shape: no supported shape stores {len} values")]
    UnknownShape { len: usize },

    #[error("Shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch {
        expected: MatrixShape,
        found: MatrixShape,
    },

    #[error("Length mismatch: expected {expected} values, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("Cannot {operation} a zero vector")]
    ZeroVector { operation: &'static str },
}

impl NumericsError {
    /// True for index, row, column and axis violations.
    pub fn is_bounds_violation(&self) -> bool {
        matches!(
            self,
            NumericsError::IndexOutOfBounds { .. }
                | NumericsError::RowOutOfBounds { .. }
                | NumericsError::ColumnOutOfBounds { .. }
                | NumericsError::AxisOutOfBounds { .. }
        )
    }

    /// True when the failure comes from a zero-magnitude vector.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, NumericsError::ZeroVector { .. })
    }
}

pub type Result<T, E = NumericsError> = std::result::Result<T, E>;
