// src/shapes/mod.rs
//! Scene shapes that sit on top of the numeric kernel.
//!
//! A shape only reports its dimensionality, whether its parameters make
//! sense, and the identifiers of the geometry and material assets that render
//! it. Loading those assets belongs to the engine.

use serde::{Deserialize, Serialize};

/// Common contract for anything placed in a scene.
pub trait Shape {
    fn dimension(&self) -> usize;

    fn is_valid(&self) -> bool;

    /// Geometry asset identifier, if the shape has one.
    fn geometry(&self) -> Option<&str>;

    /// Material asset identifier, if the shape has one.
    fn material(&self) -> Option<&str>;
}

/// Ring torus around the local Z axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Torus {
    /// Distance from the center of the tube to the center of the torus
    pub major_radius: f64,
    /// Radius of the tube
    pub minor_radius: f64,
}

impl Torus {
    pub const GEOMETRY: &'static str = "torus.pio";
    pub const MATERIAL: &'static str = "default.pim";

    pub fn new(major_radius: f64, minor_radius: f64) -> Self {
        Self { major_radius, minor_radius }
    }
}

impl Shape for Torus {
    fn dimension(&self) -> usize {
        3
    }

    /// Both radii positive and the tube thinner than the ring.
    fn is_valid(&self) -> bool {
        self.major_radius > 0.0 && self.minor_radius > 0.0 && self.major_radius > self.minor_radius
    }

    fn geometry(&self) -> Option<&str> {
        Some(Self::GEOMETRY)
    }

    fn material(&self) -> Option<&str> {
        Some(Self::MATERIAL)
    }
}
