// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use warp_math::{Mat4, Point3, Scalar, Vec3};

/// Axis-aligned bounding box.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components.
/// - Containment and overlap are inclusive on faces.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb<S = f64> {
    min: Point3<S>,
    max: Point3<S>,
}

impl<S: Scalar> Aabb<S> {
    /// Constructs an AABB from its minimum and maximum corners.
    ///
    /// Contract: `min <= max` componentwise.
    pub fn new(min: Point3<S>, max: Point3<S>) -> Self {
        contract!(
            (0..3).all(|i| min[i] <= max[i]),
            "invalid AABB: min {min:?} > max {max:?}"
        );
        Self { min, max }
    }

    /// Returns the minimum corner.
    pub fn min(&self) -> Point3<S> {
        self.min
    }

    /// Returns the maximum corner.
    pub fn max(&self) -> Point3<S> {
        self.max
    }

    /// Builds an AABB centered at `center` with per-axis `half_extents`.
    pub fn from_center_half_extents(center: Point3<S>, half_extents: Vec3<S>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Builds the minimal AABB that contains all `points`.
    ///
    /// Contract: `points` is non-empty. Unchecked builds return a degenerate
    /// box at the origin for an empty slice.
    pub fn from_points(points: &[Point3<S>]) -> Self {
        contract!(!points.is_empty(), "from_points requires at least one point");
        let Some((first, rest)) = points.split_first() else {
            return Self {
                min: Point3::<S>::origin(),
                max: Point3::<S>::origin(),
            };
        };
        rest.iter().fold(
            Self {
                min: *first,
                max: *first,
            },
            |acc, p| Self {
                min: acc.min.min(p),
                max: acc.max.max(p),
            },
        )
    }

    /// Midpoint of the box.
    pub fn center(&self) -> Point3<S> {
        self.min.lerp(&self.max, S::half())
    }

    /// Edge lengths along each axis.
    pub fn size(&self) -> Vec3<S> {
        self.max - self.min
    }

    /// Total area of the six faces.
    pub fn surface_area(&self) -> S {
        let d = self.size();
        S::two() * (d.x() * d.y() + d.y() * d.z() + d.z() * d.x())
    }

    /// Returns `true` if `p` lies inside or on the boundary.
    pub fn contains(&self, p: &Point3<S>) -> bool {
        (0..3).all(|i| p[i] >= self.min[i] && p[i] <= self.max[i])
    }

    /// Returns `true` if this AABB overlaps another (inclusive on faces).
    pub fn overlaps(&self, other: &Self) -> bool {
        (0..3).all(|i| self.max[i] >= other.min[i] && self.min[i] <= other.max[i])
    }

    /// Returns the union of two AABBs.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(&other.min),
            max: self.max.max(&other.max),
        }
    }

    /// Inflates the box by a uniform margin `m` in all directions.
    pub fn inflate(&self, m: S) -> Self {
        let delta = Vec3::<S>::splat(m);
        Self::new(self.min - delta, self.max + delta)
    }

    /// Computes the AABB that bounds this box after transformation by `mat`.
    ///
    /// This evaluates the eight corners under the affine transform and builds a
    /// new axis-aligned box containing them.
    pub fn transformed(&self, mat: &Mat4<S>) -> Self {
        let corners: [Point3<S>; 8] = core::array::from_fn(|i| {
            let pick = |axis: usize| {
                if i & (1 << axis) == 0 {
                    self.min[axis]
                } else {
                    self.max[axis]
                }
            };
            mat.transform_point(&Point3::<S>::new(pick(0), pick(1), pick(2)))
        });
        Self::from_points(&corners)
    }
}
