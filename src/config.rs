// src/config.rs
// Kernel-wide tunables.

use serde::{Deserialize, Serialize};

use crate::numerics::ops::matrix::PIVOT_TOLERANCE;
use crate::numerics::precision::{Number, NumericKind};

/// Configuration for the numeric kernel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Smallest pivot magnitude accepted by `invert_with_config`
    pub pivot_tolerance: f64,
    /// Kind that `coerce` moves untyped input into
    pub default_kind: NumericKind,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: PIVOT_TOLERANCE,
            default_kind: NumericKind::Float64,
        }
    }
}

impl KernelConfig {
    /// Rejects ill-conditioned matrices early, for view/projection math that
    /// must stay well away from singular.
    pub fn strict() -> Self {
        Self {
            pivot_tolerance: 1e-6,
            ..Self::default()
        }
    }

    /// Accepts pivots down to near the f64 noise floor.
    pub fn lenient() -> Self {
        Self {
            pivot_tolerance: 1e-14,
            ..Self::default()
        }
    }

    /// Move `value` into `default_kind` through the cast policy.
    pub fn coerce(&self, value: Number) -> Number {
        value.cast_to(self.default_kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_config_defaults() {
        let config = KernelConfig::default();
        assert_eq!(config.pivot_tolerance, 1e-10);
        assert_eq!(config.default_kind, NumericKind::Float64);
    }

    #[test]
    fn test_presets_order_tolerances() {
        assert!(KernelConfig::strict().pivot_tolerance > KernelConfig::default().pivot_tolerance);
        assert!(KernelConfig::lenient().pivot_tolerance < KernelConfig::default().pivot_tolerance);
    }

    #[test]
    fn test_coerce_uses_default_kind() {
        let config = KernelConfig {
            default_kind: NumericKind::Int32,
            ..KernelConfig::default()
        };
        assert_eq!(config.coerce(Number::Float64(5.0)), Number::Int32(5));
        assert_eq!(config.coerce(Number::Float64(-1e300)), Number::Int32(i32::MIN));
        assert_eq!(KernelConfig::default().coerce(Number::Int32(7)), Number::Float64(7.0));
    }

    #[test]
    fn test_config_bincode_roundtrip() {
        let cfg = bincode::config::standard();
        let config = KernelConfig::strict();
        let bytes = bincode::serde::encode_to_vec(config, cfg).unwrap();
        let (decoded, _): (KernelConfig, _) = bincode::serde::decode_from_slice(&bytes, cfg).unwrap();
        assert_eq!(decoded, config);
    }
}
