//! Traits that govern the scalar data type used by pga3d
//!
//! Join, meet, dual and the projections are built entirely from sums and products,
//! so the scalar datatype needs only be a [Ring] for that functionality to work.
//! Motors additionally need [Trig], norms need [Sqrt], and unitizing needs [Recip].

use core::ops::{Add, Mul, Neg, Sub};

/// A scalar datatype which is closed under addition and multiplication.
///
/// see <https://en.wikipedia.org/wiki/Ring_(mathematics)>
///
/// `Ring` is implemented for `f32`, `f64`, and `i8` through `i128`.
/// The integer implementations are handy for checking incidence identities exactly.
///
/// `Ring` requires that its datatype is `Copy` to avoid the need to clone or borrow when writing
/// mathematical expressions.
pub trait Ring:
    Clone
    + Copy
    + Neg<Output = Self>
    + Add<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Default
{
    /// The additive identity
    fn zero() -> Self {
        Self::default()
    }

    /// The multiplicative identity
    fn one() -> Self {
        Self::from_integer(1)
    }

    /// Construct an integer scalar
    fn from_integer(i: isize) -> Self;
}

/// A scalar datatype which is closed under the square root function.
///
/// Square roots are only needed for [norms](crate::ops::WeightNorm).
/// [Squared norms](crate::ops::WeightNormSquared) are always available.
///
/// `Sqrt` comes implemented for `f32` and `f64` when the `std` feature is enabled.
///
/// All uses of `sqrt()` within the library are on sums of squares,
/// so they never see a negative input.
pub trait Sqrt: Ring {
    /// This scalar's positive square root
    fn sqrt(self) -> Self;
}

/// A scalar datatype which implements trigonometric functions.
///
/// Needed to build a [motor](crate::motor::Motor) from an axis and an angle.
///
/// `Trig` comes implemented for `f32` and `f64` when the `std` feature is enabled.
pub trait Trig: Ring {
    /// The cosine of a scalar (in radians)
    fn cos(self) -> Self;

    /// The sine of a scalar (in radians)
    fn sin(self) -> Self;
}

/// A scalar datatype whose reciprocal can be taken.
///
/// Division is only needed to [unitize](crate::ops::Unitized) geometry.
///
/// ## `recip()` of `0`
///
/// When given an input of zero,
/// this function must return a valid scalar datatype (e.g. `f32::INFINITY`) or panic.
/// For floating point datatypes, unitizing an ideal element therefore yields
/// non-finite coordinates rather than an error.
pub trait Recip: Ring {
    fn recip(self) -> Self;
}

macro_rules! impl_for_float {
    ($type:ident) => {
        impl Ring for $type {
            fn from_integer(i: isize) -> $type {
                i as $type
            }
        }

        #[cfg(feature = "std")]
        impl Sqrt for $type {
            fn sqrt(self) -> $type {
                <$type>::sqrt(self)
            }
        }

        #[cfg(feature = "std")]
        impl Trig for $type {
            fn cos(self) -> $type {
                <$type>::cos(self)
            }
            fn sin(self) -> $type {
                <$type>::sin(self)
            }
        }

        impl Recip for $type {
            // This is not NaN-free!
            fn recip(self) -> $type {
                <$type>::recip(self)
            }
        }
    };
}

impl_for_float!(f32);
impl_for_float!(f64);

macro_rules! impl_for_int {
    ($type:ident) => {
        impl Ring for $type {
            fn from_integer(i: isize) -> $type {
                i.try_into().expect("Integer out of range")
            }
        }
    };
}

impl_for_int!(i8);
impl_for_int!(i16);
impl_for_int!(i32);
impl_for_int!(i64);
impl_for_int!(i128);
