// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use warp_math::{Point2, Scalar, Vec2};

/// Axis-aligned 2D rectangle (screen or texture space).
///
/// Invariants:
/// - `min` components are less than or equal to `max` components.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect<S = f64> {
    min: Point2<S>,
    max: Point2<S>,
}

impl<S: Scalar> Rect<S> {
    /// Constructs a rectangle from its minimum and maximum corners.
    ///
    /// Contract: `min <= max` componentwise.
    pub fn new(min: Point2<S>, max: Point2<S>) -> Self {
        contract!(
            min.x() <= max.x() && min.y() <= max.y(),
            "invalid Rect: min > max"
        );
        Self { min, max }
    }

    /// Minimum corner.
    pub fn min(&self) -> Point2<S> {
        self.min
    }

    /// Maximum corner.
    pub fn max(&self) -> Point2<S> {
        self.max
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: &Point2<S>) -> bool {
        p.x() >= self.min.x()
            && p.x() <= self.max.x()
            && p.y() >= self.min.y()
            && p.y() <= self.max.y()
    }

    /// Width and height.
    pub fn size(&self) -> Vec2<S> {
        self.max - self.min
    }

    /// `width * height`.
    pub fn area(&self) -> S {
        let size = self.size();
        size.x() * size.y()
    }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(&other.min),
            max: self.max.max(&other.max),
        }
    }
}
