// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Echo math primitives: scalars, fixed-size vectors, 4×4 matrices, and
//! quaternions, all generic over a floating-point [`Scalar`].
//!
//! Conventions:
//! - Angles are radians.
//! - Matrices are stored column-major and multiply column vectors
//!   (`M * v`); `Mat4::at(row, col)` hides the storage order.
//! - Quaternions are `(x, y, z, w)` with `w` as the scalar part.
//!
//! Precondition failures (zero divisors, normalising zero-length values,
//! inverting singular matrices) are contract violations on the unchecked
//! APIs: they assert in debug builds (or with the `contracts_release`
//! feature) and yield non-finite results otherwise. The `try_*` variants
//! report them as [`MathError`] instead.
#![forbid(unsafe_code)]

/// Asserts a numeric precondition in debug builds, or always when the
/// `contracts_release` feature is enabled.
macro_rules! contract {
    ($cond:expr, $($arg:tt)+) => {
        if cfg!(any(debug_assertions, feature = "contracts_release")) {
            assert!($cond, $($arg)+);
        }
    };
}

mod error;
mod mat4;
mod quat;
mod scalar;
pub mod tolerance;
mod vector;

pub use error::MathError;
pub use mat4::Mat4;
pub use quat::Quat;
pub use scalar::Scalar;
pub use vector::{Normal3, Point, Point2, Point3, Vec2, Vec3, Vec4, Vector};

/// Clamps `value` to the inclusive `[min, max]` range.
pub fn clamp<S: Scalar>(value: S, min: S, max: S) -> S {
    contract!(min <= max, "invalid clamp range: {min:?} > {max:?}");
    value.max(min).min(max)
}

/// Converts degrees to radians.
pub fn deg_to_rad<S: Scalar>(value: S) -> S {
    value * (S::PI / S::from_f64(180.0))
}

/// Converts radians to degrees.
pub fn rad_to_deg<S: Scalar>(value: S) -> S {
    value * (S::from_f64(180.0) / S::PI)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_limits_both_ends() {
        assert_eq!(clamp(5.0_f64, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0_f64, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.25_f32, 0.0, 1.0), 0.25);
    }

    #[test]
    fn degree_conversions_round_trip() {
        for deg in [0.0_f64, 45.0, 90.0, 180.0, -90.0] {
            let back = rad_to_deg(deg_to_rad(deg));
            assert!((back - deg).abs() < 1e-12, "{deg} -> {back}");
        }
        assert!((deg_to_rad(90.0_f64) - core::f64::consts::FRAC_PI_2).abs() < 1e-15);
    }
}
