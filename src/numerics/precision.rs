// src/numerics/precision.rs
//! Precision policy.
//!
//! Every value in the kernel is stored in one of four numeric kinds. Moving a
//! value between kinds follows one rule: if the value is exactly representable
//! in the target kind it is returned unchanged, otherwise the result saturates
//! to the target's minimum (negative source) or maximum (everything else).
//! There is no wraparound and no rounding on this path.
//!
//! Arithmetic results that are *computed* in a wider kind and then stored in
//! a narrower one (vector scaling, normalization) are rounded by the host
//! conversion instead; see `FloatingPoint::from_f64`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::numerics::types::traits::Numeric;

/// 2^63 as an f64. Anything at or above it does not fit an i64.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// The four numeric kinds a matrix or vector can be backed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericKind {
    Int32,
    Int64,
    Float32,
    Float64,
}

impl NumericKind {
    pub const ALL: [NumericKind; 4] = [
        NumericKind::Int32,
        NumericKind::Int64,
        NumericKind::Float32,
        NumericKind::Float64,
    ];

    /// Storage width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            NumericKind::Int32 | NumericKind::Float32 => 32,
            NumericKind::Int64 | NumericKind::Float64 => 64,
        }
    }

    pub const fn is_integer(self) -> bool {
        matches!(self, NumericKind::Int32 | NumericKind::Int64)
    }

    pub const fn is_float(self) -> bool {
        !self.is_integer()
    }

    /// True when every value of `self` is exactly representable in `target`.
    pub const fn widens_to(self, target: NumericKind) -> bool {
        use NumericKind::*;
        matches!(
            (self, target),
            (Int32, Int32)
                | (Int32, Int64)
                | (Int32, Float64)
                | (Int64, Int64)
                | (Float32, Float32)
                | (Float32, Float64)
                | (Float64, Float64)
        )
    }

    /// Smallest representable value (most negative for floats).
    pub const fn min_value(self) -> Number {
        match self {
            NumericKind::Int32 => Number::Int32(i32::MIN),
            NumericKind::Int64 => Number::Int64(i64::MIN),
            NumericKind::Float32 => Number::Float32(f32::MIN),
            NumericKind::Float64 => Number::Float64(f64::MIN),
        }
    }

    /// Largest finite representable value.
    pub const fn max_value(self) -> Number {
        match self {
            NumericKind::Int32 => Number::Int32(i32::MAX),
            NumericKind::Int64 => Number::Int64(i64::MAX),
            NumericKind::Float32 => Number::Float32(f32::MAX),
            NumericKind::Float64 => Number::Float64(f64::MAX),
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumericKind::Int32 => "i32",
            NumericKind::Int64 => "i64",
            NumericKind::Float32 => "f32",
            NumericKind::Float64 => "f64",
        };
        f.write_str(name)
    }
}

/// A numeric value tagged with its runtime kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Number {
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
}

impl Number {
    pub const fn kind(self) -> NumericKind {
        match self {
            Number::Int32(_) => NumericKind::Int32,
            Number::Int64(_) => NumericKind::Int64,
            Number::Float32(_) => NumericKind::Float32,
            Number::Float64(_) => NumericKind::Float64,
        }
    }

    /// Sign used to pick the saturation bound. NaN counts as non-negative.
    pub fn is_negative(self) -> bool {
        match self {
            Number::Int32(v) => v < 0,
            Number::Int64(v) => v < 0,
            Number::Float32(v) => v < 0.0,
            Number::Float64(v) => v < 0.0,
        }
    }

    /// The value as an i32 when it is exactly representable.
    pub fn exact_i32(self) -> Option<i32> {
        match self {
            Number::Int32(v) => Some(v),
            Number::Int64(v) => i32::try_from(v).ok(),
            Number::Float32(v) => integral_i64(f64::from(v)).and_then(|n| i32::try_from(n).ok()),
            Number::Float64(v) => integral_i64(v).and_then(|n| i32::try_from(n).ok()),
        }
    }

    /// The value as an i64 when it is exactly representable.
    pub fn exact_i64(self) -> Option<i64> {
        match self {
            Number::Int32(v) => Some(i64::from(v)),
            Number::Int64(v) => Some(v),
            Number::Float32(v) => integral_i64(f64::from(v)),
            Number::Float64(v) => integral_i64(v),
        }
    }

    /// The value as an f32 when it is exactly representable. NaN and the
    /// infinities carry over between float kinds.
    pub fn exact_f32(self) -> Option<f32> {
        match self {
            Number::Int32(v) => {
                let f = v as f32;
                (integral_i64(f64::from(f)) == Some(i64::from(v))).then_some(f)
            }
            Number::Int64(v) => {
                let f = v as f32;
                (integral_i64(f64::from(f)) == Some(v)).then_some(f)
            }
            Number::Float32(v) => Some(v),
            Number::Float64(v) => {
                let f = v as f32;
                (v.is_nan() || f64::from(f) == v).then_some(f)
            }
        }
    }

    /// The value as an f64 when it is exactly representable.
    pub fn exact_f64(self) -> Option<f64> {
        match self {
            Number::Int32(v) => Some(f64::from(v)),
            Number::Int64(v) => {
                let d = v as f64;
                (integral_i64(d) == Some(v)).then_some(d)
            }
            Number::Float32(v) => Some(f64::from(v)),
            Number::Float64(v) => Some(v),
        }
    }

    pub fn to_i32(self) -> i32 {
        self.exact_i32()
            .unwrap_or_else(|| saturate(self, NumericKind::Int32, i32::MIN, i32::MAX))
    }

    pub fn to_i64(self) -> i64 {
        self.exact_i64()
            .unwrap_or_else(|| saturate(self, NumericKind::Int64, i64::MIN, i64::MAX))
    }

    pub fn to_f32(self) -> f32 {
        self.exact_f32()
            .unwrap_or_else(|| saturate(self, NumericKind::Float32, f32::MIN, f32::MAX))
    }

    pub fn to_f64(self) -> f64 {
        self.exact_f64()
            .unwrap_or_else(|| saturate(self, NumericKind::Float64, f64::MIN, f64::MAX))
    }

    /// Convert into `kind`, keeping the tag.
    pub fn cast_to(self, kind: NumericKind) -> Number {
        match kind {
            NumericKind::Int32 => Number::Int32(self.to_i32()),
            NumericKind::Int64 => Number::Int64(self.to_i64()),
            NumericKind::Float32 => Number::Float32(self.to_f32()),
            NumericKind::Float64 => Number::Float64(self.to_f64()),
        }
    }

    /// Whether `cast_to(kind)` returns the value without saturating.
    pub fn fits(self, kind: NumericKind) -> bool {
        match kind {
            NumericKind::Int32 => self.exact_i32().is_some(),
            NumericKind::Int64 => self.exact_i64().is_some(),
            NumericKind::Float32 => self.exact_f32().is_some(),
            NumericKind::Float64 => self.exact_f64().is_some(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int32(v) => write!(f, "{v}"),
            Number::Int64(v) => write!(f, "{v}"),
            Number::Float32(v) => write!(f, "{v}"),
            Number::Float64(v) => write!(f, "{v}"),
        }
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Number::Int32(v)
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::Int64(v)
    }
}

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Number::Float32(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float64(v)
    }
}

/// Cast between any two numeric kinds under the saturating policy.
///
/// ```
/// use fulgor_numerics::numerics::precision::cast;
///
/// assert_eq!(cast::<f64, i32>(5.0), 5);
/// assert_eq!(cast::<f64, i32>(1e300), i32::MAX);
/// assert_eq!(cast::<f64, i32>(-1e300), i32::MIN);
/// assert_eq!(cast::<f64, i32>(2.5), i32::MAX);
/// ```
#[inline]
pub fn cast<F: Numeric, T: Numeric>(value: F) -> T {
    T::from_number(value.into_number())
}

/// Integer value of `v` when it is integral and inside the i64 range.
fn integral_i64(v: f64) -> Option<i64> {
    (v.fract() == 0.0 && v >= -I64_LIMIT && v < I64_LIMIT).then(|| v as i64)
}

fn saturate<T: fmt::Display + Copy>(source: Number, target: NumericKind, min: T, max: T) -> T {
    let bound = if source.is_negative() { min } else { max };
    tracing::trace!(%source, from = %source.kind(), to = %target, %bound, "inexact cast saturated");
    bound
}
