// src/numerics/mod.rs
// Top-level numerics module. Exposes the precision policy, a `types`
// namespace with the value types, and an `ops` namespace with the algebra.

pub mod precision;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod traits;
    pub mod coordinates;
    pub mod shape;
    pub mod matrix;
    pub mod vector;
    pub mod point;
}

pub mod ops {
    // The submodules live in src/numerics/ops/*.rs
    pub mod matrix;
    pub mod vector;
}
