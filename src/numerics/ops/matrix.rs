// src/numerics/ops/matrix.rs
//! 4x4 matrix algebra.
//!
//! Every operation comes in three flavours: a generic `*_as::<T>` form, the
//! fixed `_f32` / `_f64` forms, and an unsuffixed entry point that works in
//! f64. Operands of any element kind are rounded to the nearest value of the
//! output kind before the arithmetic, so mixed kinds lose precision but never
//! saturate.

use crate::config::KernelConfig;
use crate::numerics::types::matrix::Matrix4;
use crate::numerics::types::traits::{FloatingPoint, Numeric};

/// Smallest pivot magnitude `invert` accepts.
pub const PIVOT_TOLERANCE: f64 = 1e-10;

fn rounded<T: FloatingPoint, A: Numeric>(m: &Matrix4<A>) -> Matrix4<T> {
    m.map(|v| T::from_f64(v.as_f64()))
}

/// `C[i][j] = sum_k A[i][k] * B[k][j]`, computed in `T`.
pub fn multiply_as<T, A, B>(a: &Matrix4<A>, b: &Matrix4<B>) -> Matrix4<T>
where
    T: FloatingPoint,
    A: Numeric,
    B: Numeric,
{
    let a = rounded::<T, A>(a);
    let b = rounded::<T, B>(b);
    Matrix4::from_fn(|i, j| (0..4).fold(T::zero(), |sum, k| sum + a[(i, k)] * b[(k, j)]))
}

pub fn multiply_f32<A: Numeric, B: Numeric>(a: &Matrix4<A>, b: &Matrix4<B>) -> Matrix4<f32> {
    multiply_as(a, b)
}

pub fn multiply_f64<A: Numeric, B: Numeric>(a: &Matrix4<A>, b: &Matrix4<B>) -> Matrix4<f64> {
    multiply_as(a, b)
}

pub fn multiply<A: Numeric, B: Numeric>(a: &Matrix4<A>, b: &Matrix4<B>) -> Matrix4<f64> {
    multiply_f64(a, b)
}

/// Identity with `x, y, z` in the last column.
pub fn translation_as<T: FloatingPoint>(x: T, y: T, z: T) -> Matrix4<T> {
    let (o, l) = (T::zero(), T::one());
    Matrix4::from_rows([
        [l, o, o, x],
        [o, l, o, y],
        [o, o, l, z],
        [o, o, o, l],
    ])
}

pub fn translation_f32(x: f32, y: f32, z: f32) -> Matrix4<f32> {
    translation_as(x, y, z)
}

pub fn translation_f64(x: f64, y: f64, z: f64) -> Matrix4<f64> {
    translation_as(x, y, z)
}

pub fn translation(x: f64, y: f64, z: f64) -> Matrix4<f64> {
    translation_f64(x, y, z)
}

/// Right-handed rotation about X, angle in radians.
pub fn rotation_x_as<T: FloatingPoint>(angle: T) -> Matrix4<T> {
    let (s, c) = (angle.sin(), angle.cos());
    let (o, l) = (T::zero(), T::one());
    Matrix4::from_rows([
        [l, o, o, o],
        [o, c, -s, o],
        [o, s, c, o],
        [o, o, o, l],
    ])
}

/// Right-handed rotation about Y, angle in radians.
pub fn rotation_y_as<T: FloatingPoint>(angle: T) -> Matrix4<T> {
    let (s, c) = (angle.sin(), angle.cos());
    let (o, l) = (T::zero(), T::one());
    Matrix4::from_rows([
        [c, o, s, o],
        [o, l, o, o],
        [-s, o, c, o],
        [o, o, o, l],
    ])
}

/// Right-handed rotation about Z, angle in radians.
pub fn rotation_z_as<T: FloatingPoint>(angle: T) -> Matrix4<T> {
    let (s, c) = (angle.sin(), angle.cos());
    let (o, l) = (T::zero(), T::one());
    Matrix4::from_rows([
        [c, -s, o, o],
        [s, c, o, o],
        [o, o, l, o],
        [o, o, o, l],
    ])
}

pub fn rotation_x_f32(angle: f32) -> Matrix4<f32> {
    rotation_x_as(angle)
}

pub fn rotation_x_f64(angle: f64) -> Matrix4<f64> {
    rotation_x_as(angle)
}

pub fn rotation_x(angle: f64) -> Matrix4<f64> {
    rotation_x_f64(angle)
}

pub fn rotation_y_f32(angle: f32) -> Matrix4<f32> {
    rotation_y_as(angle)
}

pub fn rotation_y_f64(angle: f64) -> Matrix4<f64> {
    rotation_y_as(angle)
}

pub fn rotation_y(angle: f64) -> Matrix4<f64> {
    rotation_y_f64(angle)
}

pub fn rotation_z_f32(angle: f32) -> Matrix4<f32> {
    rotation_z_as(angle)
}

pub fn rotation_z_f64(angle: f64) -> Matrix4<f64> {
    rotation_z_as(angle)
}

pub fn rotation_z(angle: f64) -> Matrix4<f64> {
    rotation_z_f64(angle)
}

/// Diagonal `(x, y, z, 1)`.
pub fn scaling_as<T: FloatingPoint>(x: T, y: T, z: T) -> Matrix4<T> {
    let (o, l) = (T::zero(), T::one());
    Matrix4::from_rows([
        [x, o, o, o],
        [o, y, o, o],
        [o, o, z, o],
        [o, o, o, l],
    ])
}

pub fn scaling_f32(x: f32, y: f32, z: f32) -> Matrix4<f32> {
    scaling_as(x, y, z)
}

pub fn scaling_f64(x: f64, y: f64, z: f64) -> Matrix4<f64> {
    scaling_as(x, y, z)
}

pub fn scaling(x: f64, y: f64, z: f64) -> Matrix4<f64> {
    scaling_f64(x, y, z)
}

/// Gauss-Jordan inverse without row interchange.
///
/// The pivot for row `i` is always the current `[i][i]` entry. When its
/// magnitude is below `tolerance` (or it is NaN) the matrix is reported as
/// singular with `None`, even if a usable pivot sits lower in the column.
pub fn invert_with_tolerance<T, A>(m: &Matrix4<A>, tolerance: f64) -> Option<Matrix4<T>>
where
    T: FloatingPoint,
    A: Numeric,
{
    let mut a = rounded::<T, A>(m).array();
    let mut inv = Matrix4::<T>::identity().array();

    for i in 0..4 {
        let pivot = a[i * 4 + i];
        let magnitude = pivot.abs().to_f64();
        if !(magnitude >= tolerance) {
            tracing::debug!(row = i, pivot = magnitude, tolerance, "singular matrix, no inverse");
            return None;
        }

        for j in 0..4 {
            a[i * 4 + j] = a[i * 4 + j] / pivot;
            inv[i * 4 + j] = inv[i * 4 + j] / pivot;
        }

        for k in (0..4).filter(|&k| k != i) {
            let factor = a[k * 4 + i];
            for j in 0..4 {
                a[k * 4 + j] = a[k * 4 + j] - factor * a[i * 4 + j];
                inv[k * 4 + j] = inv[k * 4 + j] - factor * inv[i * 4 + j];
            }
        }
    }

    Some(Matrix4::new(inv))
}

pub fn invert_as<T: FloatingPoint, A: Numeric>(m: &Matrix4<A>) -> Option<Matrix4<T>> {
    invert_with_tolerance(m, PIVOT_TOLERANCE)
}

pub fn invert_f32<A: Numeric>(m: &Matrix4<A>) -> Option<Matrix4<f32>> {
    invert_as(m)
}

pub fn invert_f64<A: Numeric>(m: &Matrix4<A>) -> Option<Matrix4<f64>> {
    invert_as(m)
}

pub fn invert<A: Numeric>(m: &Matrix4<A>) -> Option<Matrix4<f64>> {
    invert_f64(m)
}

/// f64 inverse using the configured pivot tolerance.
pub fn invert_with_config<A: Numeric>(m: &Matrix4<A>, config: &KernelConfig) -> Option<Matrix4<f64>> {
    invert_with_tolerance(m, config.pivot_tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::types::coordinates::XyzValues;
    use crate::numerics::types::point::Point3;
    use crate::numerics::types::vector::Vector3;
    use std::f64::consts::FRAC_PI_2;

    fn assert_close(a: &Matrix4<f64>, b: &Matrix4<f64>, tol: f64) {
        for (x, y) in a.array().iter().zip(b.array().iter()) {
            assert!((x - y).abs() < tol, "{a:?} != {b:?}");
        }
    }

    fn sample() -> Matrix4<f64> {
        Matrix4::from_rows([
            [4.0, 1.0, 2.0, 0.5],
            [1.0, 5.0, 0.0, 1.0],
            [2.0, 0.0, 6.0, 2.0],
            [0.5, 1.0, 2.0, 7.0],
        ])
    }

    #[test]
    fn test_multiply_identity() {
        let m = sample();
        assert_eq!(multiply(&m, &Matrix4::<f64>::identity()), m);
        assert_eq!(multiply(&Matrix4::<f32>::identity(), &m), m);
    }

    #[test]
    fn test_multiply_mixed_integer_operands() {
        let a: Matrix4<i32> = Matrix4::from_fn(|r, c| (r * 4 + c) as i32);
        let b: Matrix4<i64> = Matrix4::identity();
        let c = multiply(&a, &b);
        assert_eq!(c.array(), core::array::from_fn(|i| i as f64));
    }

    #[test]
    fn test_multiply_f32_rounds_f64_operands() {
        let product = multiply_f32(&Matrix4::<f32>::identity(), &rotation_z(0.5));
        assert_eq!(product[(0, 0)], 0.5f64.cos() as f32);
        assert_eq!(product[(1, 0)], 0.5f64.sin() as f32);
        assert!(product.array().iter().all(|v| v.abs() <= 1.0));

        let receiver = Matrix4::<f32>::identity().multiply(&rotation_z(0.5));
        for (x, y) in receiver.array().iter().zip(rotation_z_f32(0.5).array().iter()) {
            assert!((x - y).abs() < 1e-6, "{receiver:?}");
        }
    }

    #[test]
    fn test_invert_f32_rounds_f64_operand() {
        let inv = invert_f32(&translation(0.1, 0.0, 0.0)).unwrap();
        assert!((inv[(0, 3)] + 0.1).abs() < 1e-7);
        assert_eq!(inv[(0, 0)], 1.0);
        assert_eq!(inv[(3, 3)], 1.0);

        let turned: Matrix4<f32> = invert_as(&rotation_y(0.3)).unwrap();
        assert!((turned[(0, 2)] + 0.3f32.sin()).abs() < 1e-6);
    }

    #[test]
    fn test_translation_layout() {
        let t = translation(1.0, 2.0, 3.0);
        assert_eq!(t[(0, 3)], 1.0);
        assert_eq!(t[(1, 3)], 2.0);
        assert_eq!(t[(2, 3)], 3.0);
        assert_eq!(t[(3, 3)], 1.0);
        assert_eq!(t.transform_point(Point3::origin()), Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_rotation_z_quarter_turn() {
        let v = rotation_z(FRAC_PI_2).transform_vector(Vector3::unit_x());
        assert!((v.x() - 0.0).abs() < 1e-12);
        assert!((v.y() - 1.0).abs() < 1e-12);
        assert!((v.z() - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotations_are_right_handed() {
        let y = rotation_x(FRAC_PI_2).transform_vector(Vector3::<f64>::unit_y());
        assert!((y.z() - 1.0).abs() < 1e-12);

        let z = rotation_y(FRAC_PI_2).transform_vector(Vector3::<f64>::unit_z());
        assert!((z.x() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_scaling_diagonal() {
        let s = scaling_f32(2.0, 3.0, 4.0);
        assert_eq!(
            s.array(),
            [2.0, 0.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_inversion_round_trip() {
        let m = sample();
        let inv = invert(&m).expect("sample is invertible");
        assert_close(&multiply(&m, &inv), &Matrix4::identity(), 1e-9);

        let composed = multiply(&multiply(&translation(1.0, -2.0, 3.0), &rotation_y(0.3)), &scaling(2.0, 3.0, 4.0));
        let inv = invert(&composed).expect("affine transform is invertible");
        assert_close(&multiply(&composed, &inv), &Matrix4::identity(), 1e-9);
    }

    #[test]
    fn test_inversion_round_trip_f32() {
        let m: Matrix4<f32> = Matrix4::from_rows([
            [2.0, 0.0, 0.0, 1.0],
            [0.0, 4.0, 0.0, 2.0],
            [0.0, 0.0, 0.5, 3.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let inv = invert_f32(&m).unwrap();
        let product = multiply_f32(&m, &inv);
        for (x, y) in product.array().iter().zip(Matrix4::<f32>::identity().array().iter()) {
            assert!((x - y).abs() < 1e-5);
        }
    }

    #[test]
    fn test_singular_matrix_has_no_inverse() {
        assert_eq!(invert(&Matrix4::<f64>::zero()), None);

        let ones: Matrix4<f64> = Matrix4::from_fn(|_, _| 1.0);
        assert_eq!(invert(&ones), None);
    }

    #[test]
    fn test_zero_leading_pivot_is_not_swapped() {
        // A row permutation is invertible, but [0][0] is zero.
        let swap: Matrix4<f64> = Matrix4::from_rows([
            [0.0, 1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(invert(&swap), None);
    }

    #[test]
    fn test_nan_pivot_is_singular() {
        let m = scaling(f64::NAN, 1.0, 1.0);
        assert_eq!(invert(&m), None);
    }

    #[test]
    fn test_tolerance_controls_singularity() {
        let tiny = scaling(1e-11, 1.0, 1.0);
        assert_eq!(invert(&tiny), None);

        let inv: Matrix4<f64> = invert_with_tolerance(&tiny, 1e-12).unwrap();
        assert!((inv[(0, 0)] - 1e11).abs() < 1.0);

        assert!(invert_with_config(&tiny, &KernelConfig::lenient()).is_some());
        assert!(invert_with_config(&tiny, &KernelConfig::default()).is_none());
    }

    #[test]
    fn test_instance_helpers_post_multiply() {
        let m = Matrix4::<f64>::identity().translate(1.0, 0.0, 0.0).scale(2.0, 2.0, 2.0);
        assert_eq!(m, multiply(&translation(1.0, 0.0, 0.0), &scaling(2.0, 2.0, 2.0)));
        assert_eq!(m.transform_point(Point3::new(1.0, 1.0, 1.0)), Point3::new(3.0, 2.0, 2.0));
    }

    #[test]
    fn test_instance_helpers_keep_receiver_kind() {
        let m: Matrix4<f32> = Matrix4::identity().rotate_z(0.5).rotate_x(0.25).rotate_y(-1.0);
        let inv: Matrix4<f32> = m.invert().unwrap();
        let product = m.multiply(&inv);
        for (x, y) in product.array().iter().zip(Matrix4::<f32>::identity().array().iter()) {
            assert!((x - y).abs() < 1e-4);
        }
    }
}
