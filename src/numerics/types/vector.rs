// src/numerics/types/vector.rs
// Vector3 generic implementation with default precision f32.
// Backed by a 1x3 matrix; every operation returns a new vector.

use core::ops::{Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{NumericsError, Result};
use crate::numerics::types::coordinates::XyzValues;
use crate::numerics::types::matrix::Matrix1x3;
use crate::numerics::types::point::Point3;
use crate::numerics::types::traits::FloatingPoint;

/// Vector3 is a 3D vector over a float kind.
///
/// Mixed-kind operations (`add`, `subtract`, `dot`, `cross`) accept a vector
/// of any float kind. `add` and `subtract` read the other vector through the
/// cast policy and keep the receiver's kind; `dot`, `cross` and `magnitude`
/// work in f64.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector3<T: FloatingPoint = f32> {
    data: Matrix1x3<T>,
}

/// Float-backed vector.
pub type Vector3f = Vector3<f32>;
/// Double-backed vector.
pub type Vector3d = Vector3<f64>;

// Conditional impls for serde
impl<T> Serialize for Vector3<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (self.x(), self.y(), self.z()).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Vector3<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z) = <(T, T, T)>::deserialize(deserializer)?;
        Ok(Vector3::new(x, y, z))
    }
}

impl<T: FloatingPoint> Vector3<T> {
    /// Construct a new Vector3
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { data: Matrix1x3::from_xyz(x, y, z) }
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Vector of all ones
    pub fn one() -> Self {
        Self::new(T::one(), T::one(), T::one())
    }

    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    pub fn from_point(point: Point3<T>) -> Self {
        Self::new(point.x, point.y, point.z)
    }

    pub fn to_point(&self) -> Point3<T> {
        Point3::new(self.x(), self.y(), self.z())
    }

    /// The 1x3 matrix this vector is stored as.
    pub fn as_matrix(&self) -> &Matrix1x3<T> {
        &self.data
    }

    pub fn into_matrix(self) -> Matrix1x3<T> {
        self.data
    }

    /// Component-wise sum. `other` is read through the cast policy.
    pub fn add<U: FloatingPoint>(&self, other: &Vector3<U>) -> Vector3<T> {
        let [x, y, z] = other.xyz_as::<T>();
        Self::new(self.x() + x, self.y() + y, self.z() + z)
    }

    /// Component-wise difference. `other` is read through the cast policy.
    pub fn subtract<U: FloatingPoint>(&self, other: &Vector3<U>) -> Vector3<T> {
        let [x, y, z] = other.xyz_as::<T>();
        Self::new(self.x() - x, self.y() - y, self.z() - z)
    }

    /// Multiply by `factor` in f64 and round back to this kind.
    pub fn scale(&self, factor: f64) -> Vector3<T> {
        let [x, y, z] = self.xyz_as::<f64>();
        Self::new(T::from_f64(x * factor), T::from_f64(y * factor), T::from_f64(z * factor))
    }

    pub fn dot<U: FloatingPoint>(&self, other: &Vector3<U>) -> f64 {
        let [ax, ay, az] = self.xyz_as::<f64>();
        let [bx, by, bz] = other.xyz_as::<f64>();
        ax * bx + ay * by + az * bz
    }

    pub fn cross<U: FloatingPoint>(&self, other: &Vector3<U>) -> Vector3<f64> {
        let [ax, ay, az] = self.xyz_as::<f64>();
        let [bx, by, bz] = other.xyz_as::<f64>();
        Vector3::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Squared length (avoids sqrt)
    pub fn magnitude_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length in f64.
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// Fails with [`NumericsError::ZeroVector`] when the magnitude is exactly
    /// zero rather than producing NaN components.
    pub fn normalize(&self) -> Result<Vector3<T>> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(NumericsError::ZeroVector { operation: "normalize" });
        }
        let [x, y, z] = self.xyz_as::<f64>();
        Ok(Self::new(T::from_f64(x / mag), T::from_f64(y / mag), T::from_f64(z / mag)))
    }

    pub fn distance_to<U: FloatingPoint>(&self, other: &Vector3<U>) -> f64 {
        let [ax, ay, az] = self.xyz_as::<f64>();
        let [bx, by, bz] = other.xyz_as::<f64>();
        let (dx, dy, dz) = (ax - bx, ay - by, az - bz);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// No component is NaN or infinite.
    pub fn is_valid(&self) -> bool {
        self.x().is_finite() && self.y().is_finite() && self.z().is_finite()
    }

    pub fn dimension(&self) -> usize {
        3
    }

    /// Convert to another float kind through the cast policy.
    pub fn cast<U: FloatingPoint>(&self) -> Vector3<U> {
        Vector3 { data: self.data.cast() }
    }
}

impl<T: FloatingPoint> XyzValues for Vector3<T> {
    type Native = T;

    fn x(&self) -> T {
        self.data.x()
    }

    fn y(&self) -> T {
        self.data.y()
    }

    fn z(&self) -> T {
        self.data.z()
    }
}

impl<T: FloatingPoint> Default for Vector3<T> {
    fn default() -> Self {
        Self::zero()
    }
}

// Implement operator + for Vector3<T>
impl<T: FloatingPoint> core::ops::Add for Vector3<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector3::add(&self, &other)
    }
}

// Implement operator - for Vector3<T>
impl<T: FloatingPoint> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.subtract(&other)
    }
}

impl<T: FloatingPoint> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z())
    }
}

impl<T: FloatingPoint> Mul<T> for Vector3<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.x() * scalar, self.y() * scalar, self.z() * scalar)
    }
}

// Conversions between Vector3<T> and tuples / arrays

impl<T: FloatingPoint> From<(T, T, T)> for Vector3<T> {
    fn from(tuple: (T, T, T)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

impl<T: FloatingPoint> From<[T; 3]> for Vector3<T> {
    fn from(array: [T; 3]) -> Self {
        Self { data: Matrix1x3::new(array) }
    }
}

impl<T: FloatingPoint> From<&(T, T, T)> for Vector3<T> {
    fn from(tuple: &(T, T, T)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

impl<T: FloatingPoint> From<&[T; 3]> for Vector3<T> {
    fn from(array: &[T; 3]) -> Self {
        Self::from(*array)
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for (T, T, T) {
    fn from(v: Vector3<T>) -> Self {
        (v.x(), v.y(), v.z())
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for [T; 3] {
    fn from(v: Vector3<T>) -> Self {
        v.data.array()
    }
}

impl<T: FloatingPoint> From<&Vector3<T>> for (T, T, T) {
    fn from(v: &Vector3<T>) -> Self {
        (v.x(), v.y(), v.z())
    }
}

impl<T: FloatingPoint> From<&Vector3<T>> for [T; 3] {
    fn from(v: &Vector3<T>) -> Self {
        v.data.array()
    }
}

impl<T: FloatingPoint> From<Matrix1x3<T>> for Vector3<T> {
    fn from(data: Matrix1x3<T>) -> Self {
        Self { data }
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for Matrix1x3<T> {
    fn from(v: Vector3<T>) -> Self {
        v.data
    }
}

impl<T: FloatingPoint> From<Point3<T>> for Vector3<T> {
    fn from(p: Point3<T>) -> Self {
        Self::from_point(p)
    }
}
