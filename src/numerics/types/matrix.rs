// src/numerics/types/matrix.rs
// Fixed-shape matrices (1x2, 1x3, 3x3, 4x4) over any numeric kind.
//
// Storage is a flat row-major array: element (row, col) lives at
// `row * COLS + col`. Every operation returns a new matrix.

use core::ops::{Add, Index, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{NumericsError, Result};
use crate::numerics::ops::matrix as algebra;
use crate::numerics::precision::{cast, Number, NumericKind};
use crate::numerics::types::coordinates::XyzValues;
use crate::numerics::types::point::Point3;
use crate::numerics::types::shape::MatrixShape;
use crate::numerics::types::traits::{FloatingPoint, Numeric};
use crate::numerics::types::vector::Vector3;

/// Shared read access for every matrix, fixed or dynamically shaped.
pub trait Matrix {
    type Element: Numeric;

    fn shape(&self) -> MatrixShape;

    /// Row-major storage.
    fn as_slice(&self) -> &[Self::Element];

    fn rows(&self) -> usize {
        self.shape().rows()
    }

    fn cols(&self) -> usize {
        self.shape().cols()
    }

    fn size(&self) -> usize {
        self.shape().size()
    }

    fn kind(&self) -> NumericKind {
        Self::Element::KIND
    }

    /// Element at a flat row-major offset.
    fn at(&self, index: usize) -> Result<Self::Element> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or(NumericsError::IndexOutOfBounds { index, size: self.size() })
    }

    /// Element at a flat offset, tagged with its kind.
    fn number_at(&self, index: usize) -> Result<Number> {
        self.at(index).map(Numeric::into_number)
    }

    /// Element at (row, col).
    fn get(&self, row: usize, col: usize) -> Result<Self::Element> {
        if row >= self.rows() {
            return Err(NumericsError::RowOutOfBounds { row, rows: self.rows() });
        }
        if col >= self.cols() {
            return Err(NumericsError::ColumnOutOfBounds { col, cols: self.cols() });
        }
        Ok(self.as_slice()[row * self.cols() + col])
    }

    fn to_vec(&self) -> Vec<Self::Element> {
        self.as_slice().to_vec()
    }

    /// Flat copy converted element-wise through the cast policy.
    fn to_vec_as<T: Numeric>(&self) -> Vec<T> {
        self.as_slice().iter().map(|&v| cast(v)).collect()
    }
}

macro_rules! fixed_matrix {
    ($(#[$meta:meta])* $name:ident, $shape:ident, $size:expr) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq)]
        pub struct $name<T: Numeric = f32> {
            data: [T; $size],
        }

        impl<T: Numeric> $name<T> {
            pub const SHAPE: MatrixShape = MatrixShape::$shape;
            pub const ROWS: usize = MatrixShape::$shape.rows();
            pub const COLS: usize = MatrixShape::$shape.cols();
            pub const SIZE: usize = $size;

            /// Construct from row-major storage
            pub const fn new(data: [T; $size]) -> Self {
                Self { data }
            }

            /// Construct from a slice that must hold exactly `SIZE` values.
            pub fn from_slice(values: &[T]) -> Result<Self> {
                let data: [T; $size] = values.try_into().map_err(|_| {
                    NumericsError::LengthMismatch { expected: $size, found: values.len() }
                })?;
                Ok(Self { data })
            }

            /// Construct from a function of (row, col)
            pub fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
                Self {
                    data: core::array::from_fn(|i| f(i / Self::COLS, i % Self::COLS)),
                }
            }

            /// Zero matrix
            pub fn zero() -> Self {
                Self { data: [T::zero(); $size] }
            }

            /// Flat row-major copy of the storage
            pub fn array(&self) -> [T; $size] {
                self.data
            }

            pub fn map<U: Numeric, F: FnMut(T) -> U>(&self, f: F) -> $name<U> {
                $name { data: self.data.map(f) }
            }

            /// Convert every element to `U` through the cast policy.
            pub fn cast<U: Numeric>(&self) -> $name<U> {
                self.map(cast)
            }
        }

        impl<T: Numeric> Matrix for $name<T> {
            type Element = T;

            fn shape(&self) -> MatrixShape {
                Self::SHAPE
            }

            fn as_slice(&self) -> &[T] {
                &self.data
            }
        }

        impl<T: Numeric> Index<(usize, usize)> for $name<T> {
            type Output = T;

            fn index(&self, (row, col): (usize, usize)) -> &T {
                assert!(
                    row < Self::ROWS && col < Self::COLS,
                    "index ({row}, {col}) out of bounds for a {} matrix",
                    Self::SHAPE
                );
                &self.data[row * Self::COLS + col]
            }
        }

        impl<T: Numeric> From<[T; $size]> for $name<T> {
            fn from(data: [T; $size]) -> Self {
                Self { data }
            }
        }

        impl<T: Numeric> From<$name<T>> for [T; $size] {
            fn from(m: $name<T>) -> Self {
                m.data
            }
        }

        impl<T: Numeric> TryFrom<DynMatrix<T>> for $name<T> {
            type Error = NumericsError;

            fn try_from(m: DynMatrix<T>) -> Result<Self> {
                if m.shape != Self::SHAPE {
                    return Err(NumericsError::ShapeMismatch {
                        expected: Self::SHAPE,
                        found: m.shape,
                    });
                }
                Self::from_slice(&m.data)
            }
        }

        impl<T: Numeric> From<$name<T>> for DynMatrix<T> {
            fn from(m: $name<T>) -> Self {
                DynMatrix { shape: $name::<T>::SHAPE, data: m.data.to_vec() }
            }
        }

        impl<T> Serialize for $name<T>
        where
            T: Numeric + Serialize,
        {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                self.data.serialize(serializer)
            }
        }

        impl<'de, T> Deserialize<'de> for $name<T>
        where
            T: Numeric + Deserialize<'de>,
        {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let data = <[T; $size]>::deserialize(deserializer)?;
                Ok($name { data })
            }
        }
    };
}

macro_rules! square_matrix {
    ($name:ident, $n:expr) => {
        impl<T: Numeric> $name<T> {
            /// Identity matrix
            pub fn identity() -> Self {
                Self::from_fn(|r, c| if r == c { T::one() } else { T::zero() })
            }

            /// Construct a new matrix from rows
            pub fn from_rows(rows: [[T; $n]; $n]) -> Self {
                Self::from_fn(|r, c| rows[r][c])
            }

            /// Construct a new matrix from columns
            pub fn from_columns(columns: [[T; $n]; $n]) -> Self {
                Self::from_fn(|r, c| columns[c][r])
            }

            /// Get a row by index
            pub fn row(&self, idx: usize) -> Result<[T; $n]> {
                if idx >= $n {
                    return Err(NumericsError::RowOutOfBounds { row: idx, rows: $n });
                }
                Ok(core::array::from_fn(|c| self.data[idx * $n + c]))
            }

            /// Get a column by index
            pub fn column(&self, idx: usize) -> Result<[T; $n]> {
                if idx >= $n {
                    return Err(NumericsError::ColumnOutOfBounds { col: idx, cols: $n });
                }
                Ok(core::array::from_fn(|r| self.data[r * $n + idx]))
            }

            pub fn transpose(&self) -> Self {
                Self::from_fn(|r, c| self.data[c * $n + r])
            }
        }

        impl<T: Numeric> Add for $name<T> {
            type Output = Self;

            fn add(self, other: Self) -> Self {
                Self::from_fn(|r, c| self[(r, c)] + other[(r, c)])
            }
        }

        impl<T: Numeric> Sub for $name<T> {
            type Output = Self;

            fn sub(self, other: Self) -> Self {
                Self::from_fn(|r, c| self[(r, c)] - other[(r, c)])
            }
        }

        impl<T: Numeric> Mul<T> for $name<T> {
            type Output = Self;

            fn mul(self, scalar: T) -> Self {
                self.map(|v| v * scalar)
            }
        }
    };
}

fixed_matrix!(
    /// 1x2 row matrix.
    Matrix1x2,
    Row2,
    2
);
fixed_matrix!(
    /// 1x3 row matrix. The storage shape behind `Vector3`.
    Matrix1x3,
    Row3,
    3
);
fixed_matrix!(
    /// 3x3 matrix.
    Matrix3,
    Square3,
    9
);
fixed_matrix!(
    /// 4x4 homogeneous transform matrix.
    Matrix4,
    Square4,
    16
);

square_matrix!(Matrix3, 3);
square_matrix!(Matrix4, 4);

impl<T: Numeric> Matrix1x2<T> {
    pub fn from_xy(x: T, y: T) -> Self {
        Self::new([x, y])
    }

    pub fn x(&self) -> T {
        self.data[0]
    }

    pub fn y(&self) -> T {
        self.data[1]
    }
}

impl<T: Numeric> Matrix1x3<T> {
    pub fn from_xyz(x: T, y: T, z: T) -> Self {
        Self::new([x, y, z])
    }
}

impl<T: Numeric> XyzValues for Matrix1x3<T> {
    type Native = T;

    fn x(&self) -> T {
        self.data[0]
    }

    fn y(&self) -> T {
        self.data[1]
    }

    fn z(&self) -> T {
        self.data[2]
    }
}

impl<T: Numeric> Mul for Matrix3<T> {
    type Output = Matrix3<T>;

    fn mul(self, rhs: Matrix3<T>) -> Matrix3<T> {
        Matrix3::from_fn(|i, j| {
            self[(i, 0)] * rhs[(0, j)] + self[(i, 1)] * rhs[(1, j)] + self[(i, 2)] * rhs[(2, j)]
        })
    }
}

impl<T: FloatingPoint> Mul<Vector3<T>> for Matrix3<T> {
    type Output = Vector3<T>;

    fn mul(self, rhs: Vector3<T>) -> Vector3<T> {
        let row = |r: usize| self[(r, 0)] * rhs.x() + self[(r, 1)] * rhs.y() + self[(r, 2)] * rhs.z();
        Vector3::new(row(0), row(1), row(2))
    }
}

impl<T: FloatingPoint> Mul<Matrix3<T>> for Vector3<T> {
    type Output = Vector3<T>;

    fn mul(self, rhs: Matrix3<T>) -> Vector3<T> {
        let col = |c: usize| self.x() * rhs[(0, c)] + self.y() * rhs[(1, c)] + self.z() * rhs[(2, c)];
        Vector3::new(col(0), col(1), col(2))
    }
}

/// Transform helpers. Each post-multiplies the receiver by the helper matrix
/// (`self * helper`) and keeps the receiver's kind.
impl<T: FloatingPoint> Matrix4<T> {
    pub fn multiply<B: Numeric>(&self, other: &Matrix4<B>) -> Matrix4<T> {
        algebra::multiply_as(self, other)
    }

    pub fn translate(&self, x: T, y: T, z: T) -> Matrix4<T> {
        self.multiply(&algebra::translation_as(x, y, z))
    }

    pub fn rotate_x(&self, angle: T) -> Matrix4<T> {
        self.multiply(&algebra::rotation_x_as(angle))
    }

    pub fn rotate_y(&self, angle: T) -> Matrix4<T> {
        self.multiply(&algebra::rotation_y_as(angle))
    }

    pub fn rotate_z(&self, angle: T) -> Matrix4<T> {
        self.multiply(&algebra::rotation_z_as(angle))
    }

    pub fn scale(&self, x: T, y: T, z: T) -> Matrix4<T> {
        self.multiply(&algebra::scaling_as(x, y, z))
    }

    /// Inverse, or `None` when a pivot vanishes during elimination.
    pub fn invert(&self) -> Option<Matrix4<T>> {
        algebra::invert_as(self)
    }

    /// Transform a point (w = 1, includes translation)
    pub fn transform_point(&self, p: Point3<T>) -> Point3<T> {
        let [x, y, z] = self.transform_homogeneous([p.x, p.y, p.z, T::one()]);
        Point3::new(x, y, z)
    }

    /// Transform a direction (w = 0, ignores translation)
    pub fn transform_vector(&self, v: Vector3<T>) -> Vector3<T> {
        let [x, y, z] = self.transform_homogeneous([v.x(), v.y(), v.z(), T::zero()]);
        Vector3::new(x, y, z)
    }

    fn transform_homogeneous(&self, v: [T; 4]) -> [T; 3] {
        core::array::from_fn(|r| {
            (0..4).fold(T::zero(), |sum, c| sum + self[(r, c)] * v[c])
        })
    }

    /// Determinant via 2x2 sub-determinants of the top and bottom row pairs.
    pub fn determinant(&self) -> T {
        let m = |r: usize, c: usize| self[(r, c)];

        let s0 = m(0, 0) * m(1, 1) - m(1, 0) * m(0, 1);
        let s1 = m(0, 0) * m(1, 2) - m(1, 0) * m(0, 2);
        let s2 = m(0, 0) * m(1, 3) - m(1, 0) * m(0, 3);
        let s3 = m(0, 1) * m(1, 2) - m(1, 1) * m(0, 2);
        let s4 = m(0, 1) * m(1, 3) - m(1, 1) * m(0, 3);
        let s5 = m(0, 2) * m(1, 3) - m(1, 2) * m(0, 3);

        let c5 = m(2, 2) * m(3, 3) - m(3, 2) * m(2, 3);
        let c4 = m(2, 1) * m(3, 3) - m(3, 1) * m(2, 3);
        let c3 = m(2, 1) * m(3, 2) - m(3, 1) * m(2, 2);
        let c2 = m(2, 0) * m(3, 3) - m(3, 0) * m(2, 3);
        let c1 = m(2, 0) * m(3, 2) - m(3, 0) * m(2, 2);
        let c0 = m(2, 0) * m(3, 1) - m(3, 0) * m(2, 1);

        s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0
    }
}

impl<T: FloatingPoint> Mul for Matrix4<T> {
    type Output = Matrix4<T>;

    fn mul(self, rhs: Matrix4<T>) -> Matrix4<T> {
        algebra::multiply_as(&self, &rhs)
    }
}

/// Matrix storage whose shape is carried as a runtime tag.
///
/// Use it when the shape is only known from the length of incoming data.
#[derive(Clone, Debug, PartialEq)]
pub struct DynMatrix<T: Numeric = f32> {
    shape: MatrixShape,
    data: Vec<T>,
}

impl<T: Numeric> DynMatrix<T> {
    /// Take ownership of `data`, inferring the shape from its length.
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        let shape = MatrixShape::infer(data.len())?;
        Ok(Self { shape, data })
    }

    /// Take ownership of `data` as a matrix of `shape`.
    pub fn with_shape(shape: MatrixShape, data: Vec<T>) -> Result<Self> {
        if data.len() != shape.size() {
            return Err(NumericsError::LengthMismatch {
                expected: shape.size(),
                found: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Numeric> Matrix for DynMatrix<T> {
    type Element = T;

    fn shape(&self) -> MatrixShape {
        self.shape
    }

    fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Serialize for DynMatrix<T>
where
    T: Numeric + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.data.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for DynMatrix<T>
where
    T: Numeric + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = Vec::<T>::deserialize(deserializer)?;
        DynMatrix::from_vec(data).map_err(serde::de::Error::custom)
    }
}
