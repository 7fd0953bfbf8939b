// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![doc = r"Geometry primitives for Echo.

This crate provides:
- Affine transforms with cached inverses (`Transform`) and the
  `Transformable` dispatch trait.
- Rays with a unit direction and parametric window (`Ray`).
- Axis-aligned bounding boxes (`Aabb`) and 2D rectangles (`Rect`).

Design notes:
- Generic over `warp_math::Scalar`; aliases default to `f64`.
- Preconditions (inverted boxes, empty point sets, zero-length directions)
  are contract checks: asserted in debug builds or with the
  `contracts_release` feature, unchecked otherwise.
- Rustdoc is treated as part of the contract; public items are documented.
"]
#![forbid(unsafe_code)]

macro_rules! contract {
    ($cond:expr, $($arg:tt)+) => {
        if cfg!(any(debug_assertions, feature = "contracts_release")) {
            assert!($cond, $($arg)+);
        }
    };
}

/// Foundational geometric types.
pub mod types;

pub use types::aabb::Aabb;
pub use types::ray::Ray;
pub use types::rect::Rect;
pub use types::transform::{Transform, Transformable};
