// src/numerics/types/coordinates.rs
//! Per-axis accessors.
//!
//! Concrete types expose their components once, in their native kind. The
//! `*_as` accessors derive every other kind through the cast policy.
//! Matrices get the row-indexed accessors through [`RowAxisValues`].

use serde::{Deserialize, Serialize};

use crate::error::{NumericsError, Result};
use crate::numerics::precision::cast;
use crate::numerics::types::matrix::Matrix;
use crate::numerics::types::traits::Numeric;

/// A coordinate axis and its column offset within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
    W,
}

impl Axis {
    pub const XYZ: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
    pub const XYZW: [Axis; 4] = [Axis::X, Axis::Y, Axis::Z, Axis::W];

    pub const fn offset(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
            Axis::W => 3,
        }
    }
}

/// x, y, z of a single coordinate.
pub trait XyzValues {
    type Native: Numeric;

    fn x(&self) -> Self::Native;
    fn y(&self) -> Self::Native;
    fn z(&self) -> Self::Native;

    fn x_as<T: Numeric>(&self) -> T {
        cast(self.x())
    }

    fn y_as<T: Numeric>(&self) -> T {
        cast(self.y())
    }

    fn z_as<T: Numeric>(&self) -> T {
        cast(self.z())
    }

    fn xyz_as<T: Numeric>(&self) -> [T; 3] {
        [self.x_as(), self.y_as(), self.z_as()]
    }
}

/// Row-indexed axis values of a matrix.
///
/// Every accessor fails with a bounds error when `row` is not below `rows()`
/// or the axis column is not below `cols()`. Implemented for every [`Matrix`].
pub trait RowAxisValues: Matrix {
    fn value_at(&self, row: usize, axis: Axis) -> Result<Self::Element> {
        let (rows, cols) = (self.rows(), self.cols());
        if row >= rows {
            return Err(NumericsError::RowOutOfBounds { row, rows });
        }
        if axis.offset() >= cols {
            return Err(NumericsError::AxisOutOfBounds { axis, cols });
        }
        Ok(self.as_slice()[row * cols + axis.offset()])
    }

    fn value_at_as<T: Numeric>(&self, row: usize, axis: Axis) -> Result<T> {
        self.value_at(row, axis).map(cast)
    }

    fn x_at(&self, row: usize) -> Result<Self::Element> {
        self.value_at(row, Axis::X)
    }

    fn y_at(&self, row: usize) -> Result<Self::Element> {
        self.value_at(row, Axis::Y)
    }

    fn z_at(&self, row: usize) -> Result<Self::Element> {
        self.value_at(row, Axis::Z)
    }

    fn w_at(&self, row: usize) -> Result<Self::Element> {
        self.value_at(row, Axis::W)
    }

    fn x_at_as<T: Numeric>(&self, row: usize) -> Result<T> {
        self.value_at_as(row, Axis::X)
    }

    fn y_at_as<T: Numeric>(&self, row: usize) -> Result<T> {
        self.value_at_as(row, Axis::Y)
    }

    fn z_at_as<T: Numeric>(&self, row: usize) -> Result<T> {
        self.value_at_as(row, Axis::Z)
    }

    fn w_at_as<T: Numeric>(&self, row: usize) -> Result<T> {
        self.value_at_as(row, Axis::W)
    }
}

impl<M: Matrix + ?Sized> RowAxisValues for M {}
