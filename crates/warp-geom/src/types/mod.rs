// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Core geometry types (transform, ray, AABB, rect).
//!
//! Conventions:
//! - Containment and overlap are inclusive on faces.
//! - Transforms compose `T * R * S` and cache their inverse; normals go
//!   through the inverse-transpose.

#[doc = "Axis-aligned bounding boxes."]
pub mod aabb;
#[doc = "Parametric rays with a unit direction."]
pub mod ray;
#[doc = "Axis-aligned 2D rectangles."]
pub mod rect;
#[doc = "Affine transforms with non-uniform scale."]
pub mod transform;
