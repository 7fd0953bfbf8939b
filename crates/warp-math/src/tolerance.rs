// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Tolerances shared by the rotation and transform code.
//!
//! Values are `f64` and converted with [`crate::Scalar::from_f64`] at the
//! use site so `f32` and `f64` code paths branch on the same thresholds.

/// Allowed deviation of a squared length from one for `is_normalized`.
pub const EPSILON: f64 = 1e-6;

/// Above this (shortest-path corrected) dot product, slerp falls back to a
/// normalised lerp; `sin(theta)` is too close to zero to divide by.
pub const SLERP_LERP_THRESHOLD: f64 = 0.9995;

/// `sqrt(1 - w^2)` below this means the rotation angle is ~0 or ~2π and the
/// axis is undefined.
pub const AXIS_ANGLE_EPSILON: f64 = 1e-6;

/// Allowed deviation of `|q|^2` from one before axis-angle extraction
/// renormalises its working copy.
pub const UNIT_NORM_TOLERANCE: f64 = 1e-6;
