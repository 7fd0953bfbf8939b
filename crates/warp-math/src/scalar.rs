// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Floating-point scalar abstraction for Echo math.
//!
//! Every vector, matrix, and quaternion type in this crate is generic over a
//! [`Scalar`] so callers can pick `f32` (GPU uploads, memory-bound paths) or
//! `f64` (offline geometry, tests) without duplicating the algebra.
//!
//! Scope:
//! - Core arithmetic via the standard operator traits: add, sub, mul, div, neg
//!   and their assigning forms.
//! - The transcendentals needed by rotation code: `sin`, `cos`, `tan`, `acos`,
//!   `asin`, `atan2`, `sqrt`.
//! - Boundary conversions to and from `f64` for constants and diagnostics.
//!
//! Contract:
//! - Operations follow IEEE-754 semantics of the underlying primitive; this
//!   trait adds no canonicalization.
//! - Trigonometric functions interpret arguments as radians.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Floating-point scalar arithmetic and the transcendentals used by rotations.
///
/// Arithmetic operators are required via the standard operator traits for
/// ergonomic use of `+`, `-`, `*`, `/`, and unary `-` in generic code.
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// Archimedes' constant.
    const PI: Self;

    /// `PI / 2`, the gimbal-lock pitch magnitude.
    const FRAC_PI_2: Self;

    /// Largest finite value; used as the open upper bound of rays.
    const MAX: Self;

    /// Returns the additive identity (zero).
    fn zero() -> Self;

    /// Returns the multiplicative identity (one).
    fn one() -> Self;

    /// Returns `2`.
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Returns `0.5`.
    fn half() -> Self {
        Self::one() / Self::two()
    }

    /// Converts from `f64` (rounding to nearest for narrower types).
    ///
    /// Intended for literal constants in generic code and for test
    /// scaffolding.
    fn from_f64(value: f64) -> Self;

    /// Widens this scalar to `f64` for interop and diagnostics.
    fn to_f64(self) -> f64;

    /// Square root.
    fn sqrt(self) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Sine of `self` (radians).
    fn sin(self) -> Self;

    /// Cosine of `self` (radians).
    fn cos(self) -> Self;

    /// Returns both sine and cosine of `self` (radians).
    ///
    /// Default implementation computes `sin` and `cos` separately; concrete
    /// implementations may override for shared range reduction.
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }

    /// Tangent of `self` (radians).
    fn tan(self) -> Self;

    /// Arc cosine; NaN outside `[-1, 1]`.
    fn acos(self) -> Self;

    /// Arc sine; NaN outside `[-1, 1]`.
    fn asin(self) -> Self;

    /// Four-quadrant arc tangent of `self / x`.
    fn atan2(self, x: Self) -> Self;

    /// Magnitude of `self` with the sign of `sign`.
    fn copysign(self, sign: Self) -> Self;

    /// Returns `true` when the value is neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// Minimum of two values (NaN-ignoring, like the primitive).
    fn min(self, other: Self) -> Self;

    /// Maximum of two values (NaN-ignoring, like the primitive).
    fn max(self, other: Self) -> Self;
}

macro_rules! impl_scalar {
    ($($t:ident),* $(,)?) => {$(
        impl Scalar for $t {
            const PI: Self = core::$t::consts::PI;
            const FRAC_PI_2: Self = core::$t::consts::FRAC_PI_2;
            const MAX: Self = $t::MAX;

            fn zero() -> Self {
                0.0
            }

            fn one() -> Self {
                1.0
            }

            fn two() -> Self {
                2.0
            }

            fn half() -> Self {
                0.5
            }

            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            fn to_f64(self) -> f64 {
                f64::from(self)
            }

            fn sqrt(self) -> Self {
                $t::sqrt(self)
            }

            fn abs(self) -> Self {
                $t::abs(self)
            }

            fn sin(self) -> Self {
                $t::sin(self)
            }

            fn cos(self) -> Self {
                $t::cos(self)
            }

            fn sin_cos(self) -> (Self, Self) {
                $t::sin_cos(self)
            }

            fn tan(self) -> Self {
                $t::tan(self)
            }

            fn acos(self) -> Self {
                $t::acos(self)
            }

            fn asin(self) -> Self {
                $t::asin(self)
            }

            fn atan2(self, x: Self) -> Self {
                $t::atan2(self, x)
            }

            fn copysign(self, sign: Self) -> Self {
                $t::copysign(self, sign)
            }

            fn is_finite(self) -> bool {
                $t::is_finite(self)
            }

            fn min(self, other: Self) -> Self {
                $t::min(self, other)
            }

            fn max(self, other: Self) -> Self {
                $t::max(self, other)
            }
        }
    )*};
}

impl_scalar!(f32, f64);
