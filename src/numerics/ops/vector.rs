// src/numerics/ops/vector.rs
// Free functions over pairs of vectors. All of them work in f64 and fail on
// zero-magnitude inputs instead of producing NaN.

use crate::error::{NumericsError, Result};
use crate::numerics::types::coordinates::XyzValues;
use crate::numerics::types::traits::FloatingPoint;
use crate::numerics::types::vector::Vector3;

/// Angle between `a` and `b` in radians, in `[0, pi]`.
///
/// The cosine is clamped to `[-1, 1]` so nearly parallel vectors do not fall
/// outside the domain of `acos` through rounding.
pub fn angle<A: FloatingPoint, B: FloatingPoint>(a: &Vector3<A>, b: &Vector3<B>) -> Result<f64> {
    let denominator = a.magnitude() * b.magnitude();
    if denominator == 0.0 {
        return Err(NumericsError::ZeroVector { operation: "measure the angle of" });
    }
    Ok((a.dot(b) / denominator).clamp(-1.0, 1.0).acos())
}

/// Projection of `a` onto `b`: `b * (a.b / |b|^2)`, in `b`'s kind.
pub fn project<A: FloatingPoint, B: FloatingPoint>(a: &Vector3<A>, b: &Vector3<B>) -> Result<Vector3<B>> {
    let length_squared = b.magnitude_squared();
    if length_squared == 0.0 {
        return Err(NumericsError::ZeroVector { operation: "project onto" });
    }
    Ok(b.scale(a.dot(b) / length_squared))
}

/// Reflection of `a` about the normal `n`: `a - 2 (a.n') n'` with `n'` the
/// normalized `n`. Computed in f64 and rounded into `a`'s kind. Fails when
/// `n` cannot be normalized.
pub fn reflect<A: FloatingPoint, N: FloatingPoint>(a: &Vector3<A>, n: &Vector3<N>) -> Result<Vector3<A>> {
    let unit = n.cast::<f64>().normalize()?;
    let twice_dot = 2.0 * a.dot(&unit);
    let [x, y, z] = a.xyz_as::<f64>();
    Ok(Vector3::new(
        A::from_f64(x - twice_dot * unit.x()),
        A::from_f64(y - twice_dot * unit.y()),
        A::from_f64(z - twice_dot * unit.z()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-12;

    #[test]
    fn test_angle() {
        let x = Vector3::<f64>::unit_x();
        let y = Vector3::<f32>::unit_y();
        assert!((angle(&x, &y).unwrap() - FRAC_PI_2).abs() < EPS);
        assert!((angle(&x, &(-x)).unwrap() - PI).abs() < EPS);
        assert_eq!(angle(&x, &x).unwrap(), 0.0);

        let v = Vector3::new(0.1_f64, 0.2, 0.3);
        assert!(angle(&v, &(v * 3.0)).unwrap() < 1e-6);
    }

    #[test]
    fn test_angle_with_zero_vector_fails() {
        let err = angle(&Vector3::<f64>::zero(), &Vector3::<f64>::unit_x()).unwrap_err();
        assert!(err.is_degenerate());
        assert!(angle(&Vector3::<f64>::unit_x(), &Vector3::<f32>::zero()).is_err());
    }

    #[test]
    fn test_project() {
        let a = Vector3::new(3.0_f64, 4.0, 0.0);
        let b = Vector3::new(2.0_f32, 0.0, 0.0);
        let p: Vector3<f32> = project(&a, &b).unwrap();
        assert_eq!(p, Vector3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn test_project_onto_zero_vector_fails() {
        let err = project(&Vector3::<f64>::unit_x(), &Vector3::<f64>::zero()).unwrap_err();
        assert_eq!(err, NumericsError::ZeroVector { operation: "project onto" });
        assert_eq!(err.to_string(), "Cannot project onto a zero vector");
    }

    #[test]
    fn test_reflect() {
        let a = Vector3::new(1.0_f64, -1.0, 0.0);
        let floor = Vector3::new(0.0_f64, 5.0, 0.0);
        let r = reflect(&a, &floor).unwrap();
        assert!((r.x() - 1.0).abs() < EPS);
        assert!((r.y() - 1.0).abs() < EPS);
        assert!(r.z().abs() < EPS);
    }

    #[test]
    fn test_reflect_keeps_magnitude() {
        let a = Vector3::new(0.3_f64, -2.0, 1.5);
        let n = Vector3::new(1.0_f64, 1.0, 1.0);
        let r = reflect(&a, &n).unwrap();
        assert!((r.magnitude() - a.magnitude()).abs() < 1e-9);
    }

    #[test]
    fn test_reflect_mixed_kinds_rounds_into_receiver() {
        let a = Vector3::new(1.0_f32, -1.0, 0.0);
        let n = Vector3::new(0.0_f64, 0.1, 0.0);
        assert_eq!(reflect(&a, &n).unwrap(), Vector3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_reflect_about_zero_normal_fails() {
        let err = reflect(&Vector3::<f32>::unit_x(), &Vector3::<f64>::zero()).unwrap_err();
        assert_eq!(err, NumericsError::ZeroVector { operation: "normalize" });
    }
}
