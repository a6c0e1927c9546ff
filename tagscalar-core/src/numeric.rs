//! Numeric representation capabilities.
//!
//! A [`Scalar<G, T>`](crate::Scalar) does not know how to compare or convert its raw value by itself. It delegates
//! to two capabilities keyed by the representation type `T`:
//!
//! - [`Numeric`] — arithmetic closure plus a representation-aware [`Numeric::equals`] (exact for integers,
//!   tolerant for floating point).
//! - [`CastFrom`] — conversion of a raw value from another representation, either with `as` semantics or checked
//!   for exactness.
//!
//! Both are implemented for every primitive integer and floating-point type. Downstream representation types
//! (fixed point, wrappers, …) can implement them too.
//!
//! # Tolerances
//!
//! | type      | `TOLERANCE` | `equals(a, b)`                         |
//! |-----------|-------------|----------------------------------------|
//! | integers  | `0`         | `a == b`                               |
//! | `f32`     | `1.0e-6`    | `a == b \|\| (a - b).abs() < 1.0e-6`   |
//! | `f64`     | `1.0e-12`   | `a == b \|\| (a - b).abs() < 1.0e-12`  |
//!
//! ```rust
//! use tagscalar_core::Numeric;
//!
//! assert!(f64::equals(1.0, 1.0 + 1e-13));
//! assert!(!f64::equals(1.0, 1.1));
//! assert!(!i32::equals(1, 2));
//! ```

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// Representation type of a [`Scalar`](crate::Scalar).
///
/// The arithmetic supertraits are what the scalar operators forward to. Negation is not required here: it is only
/// available on scalars whose representation implements [`core::ops::Neg`], so unsigned scalars have no `-x`.
pub trait Numeric:
    Copy
    + Default
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Div<Output = Self>
    + DivAssign
    + 'static
{
    /// Exclusive bound on the absolute difference considered equal by [`Numeric::equals`] (zero for exact types).
    const TOLERANCE: Self;

    /// Representation-aware equality.
    fn equals(a: Self, b: Self) -> bool;

    /// Whether the value is a NaN. Always `false` for types without one.
    #[inline]
    fn is_nan(self) -> bool {
        false
    }
}

macro_rules! impl_numeric_exact {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                const TOLERANCE: Self = 0;

                #[inline]
                fn equals(a: Self, b: Self) -> bool {
                    a == b
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ty => $tolerance:expr, $fabs:ident);* $(;)?) => {
        $(
            impl Numeric for $t {
                const TOLERANCE: Self = $tolerance;

                #[inline]
                #[allow(clippy::float_cmp)]
                fn equals(a: Self, b: Self) -> bool {
                    a == b || $fabs(a - b) < Self::TOLERANCE
                }

                #[inline]
                fn is_nan(self) -> bool {
                    <$t>::is_nan(self)
                }
            }
        )*
    };
}

#[inline]
fn abs_f32(x: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        x.abs()
    }
    #[cfg(not(feature = "std"))]
    {
        crate::libm::fabsf(x)
    }
}

#[inline]
fn abs_f64(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.abs()
    }
    #[cfg(not(feature = "std"))]
    {
        crate::libm::fabs(x)
    }
}

impl_numeric_exact!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl_numeric_float! {
    f32 => 1.0e-6, abs_f32;
    f64 => 1.0e-12, abs_f64;
}

/// Conversion of a raw value from representation `U` into `Self`.
///
/// This is what [`Scalar::cast`](crate::Scalar::cast) and [`Scalar::try_cast`](crate::Scalar::try_cast) use to
/// move a tagged value between precisions.
///
/// ```rust
/// use tagscalar_core::CastFrom;
///
/// assert_eq!(u8::cast_from(300_i32), 44);
/// assert_eq!(u8::checked_cast_from(300_i32), None);
/// assert_eq!(f32::checked_cast_from(0.5_f64), Some(0.5));
/// assert_eq!(f32::checked_cast_from(0.1_f64), None);
/// ```
pub trait CastFrom<U>: Sized {
    /// Converts with the semantics of an `as` cast: wrapping between integers, saturating from floats to integers,
    /// rounding to nearest otherwise.
    fn cast_from(value: U) -> Self;

    /// Converts only when the result represents `value` exactly.
    ///
    /// Returns `None` when the value is out of range, has a fractional part that would be dropped, loses precision,
    /// or is a NaN going into an integer. A NaN going into another floating-point type is kept.
    fn checked_cast_from(value: U) -> Option<Self>;
}

/// Exclusive upper bound of an integer type, expressed in a floating-point type.
///
/// `MAX` itself (`2^k - 1`) is often not representable as a float and would round up to `2^k`, which `as` then
/// saturates back to `MAX`. `2^(k-1)` always is, so the bound is built from it.
macro_rules! int_upper_bound {
    ($int:ty, $float:ty) => {
        ((<$int>::MAX / 2 + 1) as $float) * 2.0
    };
}

macro_rules! impl_cast_from {
    (int => int: $dst:ty; [$($src:ty),* $(,)?]) => {
        $(
            impl CastFrom<$src> for $dst {
                #[inline]
                #[allow(clippy::unnecessary_cast, clippy::cast_lossless)]
                fn cast_from(value: $src) -> Self {
                    value as $dst
                }

                #[inline]
                fn checked_cast_from(value: $src) -> Option<Self> {
                    <$dst>::try_from(value).ok()
                }
            }
        )*
    };
    (int => float: $dst:ty; [$($src:ty),* $(,)?]) => {
        $(
            impl CastFrom<$src> for $dst {
                #[inline]
                #[allow(clippy::cast_lossless)]
                fn cast_from(value: $src) -> Self {
                    value as $dst
                }

                #[inline]
                #[allow(clippy::cast_lossless)]
                fn checked_cast_from(value: $src) -> Option<Self> {
                    let out = value as $dst;
                    let exact = out < int_upper_bound!($src, $dst) && (out as $src) == value;
                    exact.then_some(out)
                }
            }
        )*
    };
    (float => int: $dst:ty; [$($src:ty),* $(,)?]) => {
        $(
            impl CastFrom<$src> for $dst {
                #[inline]
                fn cast_from(value: $src) -> Self {
                    value as $dst
                }

                #[inline]
                #[allow(clippy::float_cmp, clippy::cast_lossless)]
                fn checked_cast_from(value: $src) -> Option<Self> {
                    let in_range = value >= (<$dst>::MIN as $src) && value < int_upper_bound!($dst, $src);
                    let out = value as $dst;
                    (in_range && (out as $src) == value).then_some(out)
                }
            }
        )*
    };
    (float => float: $dst:ty; [$($src:ty),* $(,)?]) => {
        $(
            impl CastFrom<$src> for $dst {
                #[inline]
                #[allow(clippy::unnecessary_cast, clippy::cast_lossless)]
                fn cast_from(value: $src) -> Self {
                    value as $dst
                }

                #[inline]
                #[allow(clippy::unnecessary_cast, clippy::float_cmp, clippy::cast_lossless)]
                fn checked_cast_from(value: $src) -> Option<Self> {
                    let out = value as $dst;
                    let exact = (out as $src) == value || (Numeric::is_nan(value) && Numeric::is_nan(out));
                    exact.then_some(out)
                }
            }
        )*
    };
}

macro_rules! impl_cast_matrix {
    ($from:ident => $to:ident: [$($dst:ty),* $(,)?] from $srcs:tt) => {
        $(
            impl_cast_from!($from => $to: $dst; $srcs);
        )*
    };
}

impl_cast_matrix!(int => int: [i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize]
    from [i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize]);
impl_cast_matrix!(int => float: [f32, f64]
    from [i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize]);
impl_cast_matrix!(float => int: [i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize]
    from [f32, f64]);
impl_cast_matrix!(float => float: [f32, f64] from [f32, f64]);
