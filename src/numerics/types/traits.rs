// src/numerics/types/traits.rs
// Scalar traits used by the matrix and vector types.

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::numerics::precision::{Number, NumericKind};

/// Numeric is the bound every matrix element satisfies.
///
/// Each implementor names its native `KIND` and moves in and out of the
/// tagged [`Number`] form. `from_number` applies the saturating cast policy,
/// so `T::from_number(x.into_number())` is the cast from `x`'s kind to `T`.
pub trait Numeric:
    Copy
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    const KIND: NumericKind;

    fn zero() -> Self;
    fn one() -> Self;

    fn into_number(self) -> Number;
    fn from_number(n: Number) -> Self;

    /// This value as f64 under the cast policy.
    #[inline]
    fn to_f64(self) -> f64 {
        self.into_number().to_f64()
    }

    /// This value rounded to the nearest f64 (host conversion, never
    /// saturates).
    fn as_f64(self) -> f64;
}

/// FloatingPoint narrows Numeric to the float kinds that support the
/// transcendental functions the algebra needs.
pub trait FloatingPoint: Numeric + Neg<Output = Self> {
    /// Round an f64 result to this kind (host conversion, not the saturating
    /// policy).
    fn from_f64(v: f64) -> Self;

    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn acos(self) -> Self;
    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;

    #[inline]
    fn is_finite(self) -> bool {
        !(self.is_nan() || self.is_infinite())
    }
}

macro_rules! impl_numeric {
    ($t:ty, $kind:ident, $zero:expr, $one:expr, $to:ident) => {
        impl Numeric for $t {
            const KIND: NumericKind = NumericKind::$kind;

            #[inline]
            fn zero() -> Self {
                $zero
            }

            #[inline]
            fn one() -> Self {
                $one
            }

            #[inline]
            fn into_number(self) -> Number {
                Number::$kind(self)
            }

            #[inline]
            fn from_number(n: Number) -> Self {
                n.$to()
            }

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_numeric!(i32, Int32, 0, 1, to_i32);
impl_numeric!(i64, Int64, 0, 1, to_i64);
impl_numeric!(f32, Float32, 0.0, 1.0, to_f32);
impl_numeric!(f64, Float64, 0.0, 1.0, to_f64);

macro_rules! impl_floating_point {
    ($t:ty) => {
        impl FloatingPoint for $t {
            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }
            #[inline]
            fn sqrt(self) -> Self {
                <$t>::sqrt(self)
            }
            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }
            #[inline]
            fn sin(self) -> Self {
                <$t>::sin(self)
            }
            #[inline]
            fn cos(self) -> Self {
                <$t>::cos(self)
            }
            #[inline]
            fn acos(self) -> Self {
                <$t>::acos(self)
            }
            #[inline]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }
            #[inline]
            fn is_infinite(self) -> bool {
                <$t>::is_infinite(self)
            }
        }
    };
}

impl_floating_point!(f32);
impl_floating_point!(f64);
