// src/numerics/types/shape.rs
// Fixed matrix shapes supported by the kernel.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NumericsError, Result};

/// The four supported matrix shapes.
///
/// Rows, columns and size are constants of the variant. They never depend on
/// stored values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatrixShape {
    /// 1x2
    Row2,
    /// 1x3
    Row3,
    /// 3x3
    Square3,
    /// 4x4
    Square4,
}

impl MatrixShape {
    pub const ALL: [MatrixShape; 4] = [
        MatrixShape::Row2,
        MatrixShape::Row3,
        MatrixShape::Square3,
        MatrixShape::Square4,
    ];

    pub const fn rows(self) -> usize {
        match self {
            MatrixShape::Row2 | MatrixShape::Row3 => 1,
            MatrixShape::Square3 => 3,
            MatrixShape::Square4 => 4,
        }
    }

    pub const fn cols(self) -> usize {
        match self {
            MatrixShape::Row2 => 2,
            MatrixShape::Row3 | MatrixShape::Square3 => 3,
            MatrixShape::Square4 => 4,
        }
    }

    pub const fn size(self) -> usize {
        self.rows() * self.cols()
    }

    pub const fn is_square(self) -> bool {
        self.rows() == self.cols()
    }

    /// Resolve a shape from a raw storage length.
    ///
    /// Each supported shape has a distinct size, so the mapping is total over
    /// the shapes. A length of 4 would be a 1x4 row, which is not supported.
    pub fn infer(len: usize) -> Result<Self> {
        match len {
            2 => Ok(MatrixShape::Row2),
            3 => Ok(MatrixShape::Row3),
            9 => Ok(MatrixShape::Square3),
            16 => Ok(MatrixShape::Square4),
            _ => {
                tracing::debug!(len, "no matrix shape for storage length");
                Err(NumericsError::UnknownShape { len })
            }
        }
    }

    /// Resolve a length against the shape the caller expects.
    pub fn infer_with(len: usize, expected: MatrixShape) -> Result<Self> {
        let found = Self::infer(len)?;
        if found != expected {
            return Err(NumericsError::ShapeMismatch { expected, found });
        }
        Ok(found)
    }
}

impl fmt::Display for MatrixShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows(), self.cols())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_constants() {
        for shape in MatrixShape::ALL {
            assert_eq!(shape.rows() * shape.cols(), shape.size());
        }
        assert_eq!(MatrixShape::Row2.size(), 2);
        assert_eq!(MatrixShape::Row3.size(), 3);
        assert_eq!(MatrixShape::Square3.size(), 9);
        assert_eq!(MatrixShape::Square4.size(), 16);
    }

    #[test]
    fn test_inference_agrees_with_constants() {
        for shape in MatrixShape::ALL {
            let inferred = MatrixShape::infer(shape.size()).unwrap();
            assert_eq!(inferred, shape);
            assert_eq!(inferred.rows(), shape.rows());
            assert_eq!(inferred.cols(), shape.cols());
        }
    }

    #[test]
    fn test_unknown_lengths() {
        for len in [0, 1, 4, 5, 8, 12, 15, 17] {
            assert_eq!(MatrixShape::infer(len), Err(NumericsError::UnknownShape { len }));
        }
    }

    #[test]
    fn test_infer_with_expected_shape() {
        assert_eq!(MatrixShape::infer_with(9, MatrixShape::Square3), Ok(MatrixShape::Square3));
        assert_eq!(
            MatrixShape::infer_with(3, MatrixShape::Square3),
            Err(NumericsError::ShapeMismatch {
                expected: MatrixShape::Square3,
                found: MatrixShape::Row3,
            })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(MatrixShape::Row2.to_string(), "1x2");
        assert_eq!(MatrixShape::Square4.to_string(), "4x4");
        assert!(MatrixShape::Square3.is_square());
        assert!(!MatrixShape::Row3.is_square());
    }
}
