// src/numerics/types/point.rs
// Point3 is a plain position value consumed and produced by Vector3 and Matrix4.

use serde::{Deserialize, Serialize};

use crate::numerics::types::coordinates::XyzValues;
use crate::numerics::types::traits::FloatingPoint;
use crate::shapes::Shape;

/// Point3 is a position in space with default precision f32.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point3<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

pub type Point3f = Point3<f32>;
pub type Point3d = Point3<f64>;

impl<T> Serialize for Point3<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (self.x, self.y, self.z).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Point3<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z) = <(T, T, T)>::deserialize(deserializer)?;
        Ok(Point3 { x, y, z })
    }
}

impl<T: FloatingPoint> Point3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Convert to another float kind through the cast policy.
    pub fn cast<U: FloatingPoint>(&self) -> Point3<U> {
        let [x, y, z] = self.xyz_as::<U>();
        Point3::new(x, y, z)
    }
}

impl<T: FloatingPoint> Default for Point3<T> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<T: FloatingPoint> XyzValues for Point3<T> {
    type Native = T;

    fn x(&self) -> T {
        self.x
    }

    fn y(&self) -> T {
        self.y
    }

    fn z(&self) -> T {
        self.z
    }
}

// A bare point has no mesh or material.
impl<T: FloatingPoint> Shape for Point3<T> {
    fn dimension(&self) -> usize {
        3
    }

    fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    fn geometry(&self) -> Option<&str> {
        None
    }

    fn material(&self) -> Option<&str> {
        None
    }
}

impl<T: FloatingPoint> From<(T, T, T)> for Point3<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::new(x, y, z)
    }
}

impl<T: FloatingPoint> From<[T; 3]> for Point3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}
