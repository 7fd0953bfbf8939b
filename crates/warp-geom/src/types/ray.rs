// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use warp_math::{Point3, Scalar, Vec3};

/// Half-line `origin + direction · t` with a parametric validity window.
///
/// Invariants:
/// - `direction` is unit length; every constructor and setter that accepts a
///   direction renormalises it.
/// - `t_min <= t_max`. The default window is `[0, S::MAX]`.
///
/// Equality compares `origin` and `direction` only; the window is a query
/// parameter, not part of the ray's identity.
#[derive(Debug, Copy, Clone)]
pub struct Ray<S = f64> {
    origin: Point3<S>,
    direction: Vec3<S>,
    t_min: S,
    t_max: S,
}

impl<S: Scalar> Ray<S> {
    /// Creates a ray with the default `[0, S::MAX]` window.
    ///
    /// Contract: `direction` has non-zero length.
    ///
    /// # Examples
    /// ```
    /// use warp_geom::Ray;
    /// use warp_math::{Point3, Vec3};
    /// let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, 5.0));
    /// assert_eq!(ray.direction(), Vec3::new(0.0, 0.0, 1.0));
    /// assert_eq!(ray.at(2.0), Point3::new(0.0, 0.0, 2.0));
    /// ```
    pub fn new(origin: Point3<S>, direction: Vec3<S>) -> Self {
        Self {
            origin,
            direction: direction.normalized(),
            t_min: S::zero(),
            t_max: S::MAX,
        }
    }

    /// Creates a ray with an explicit `[t_min, t_max]` window.
    ///
    /// Contract: `t_min <= t_max` and `direction` has non-zero length.
    pub fn with_bounds(origin: Point3<S>, direction: Vec3<S>, t_min: S, t_max: S) -> Self {
        contract!(t_min <= t_max, "invalid ray window: {t_min:?} > {t_max:?}");
        Self {
            t_min,
            t_max,
            ..Self::new(origin, direction)
        }
    }

    /// Ray origin.
    pub fn origin(&self) -> Point3<S> {
        self.origin
    }

    /// Unit direction.
    pub fn direction(&self) -> Vec3<S> {
        self.direction
    }

    /// Lower parametric bound.
    pub fn t_min(&self) -> S {
        self.t_min
    }

    /// Upper parametric bound.
    pub fn t_max(&self) -> S {
        self.t_max
    }

    /// Replaces the origin.
    pub fn set_origin(&mut self, origin: Point3<S>) {
        self.origin = origin;
    }

    /// Replaces the direction, renormalising it.
    pub fn set_direction(&mut self, direction: Vec3<S>) {
        self.direction = direction.normalized();
    }

    /// Replaces the lower bound.
    pub fn set_t_min(&mut self, t_min: S) {
        self.t_min = t_min;
    }

    /// Replaces the upper bound.
    pub fn set_t_max(&mut self, t_max: S) {
        self.t_max = t_max;
    }

    /// Point at parameter `t`. The window is not consulted.
    pub fn at(&self, t: S) -> Point3<S> {
        self.origin + self.direction * t
    }

    /// Returns `true` when `t` lies in `[t_min, t_max]`.
    pub fn contains_t(&self, t: S) -> bool {
        t >= self.t_min && t <= self.t_max
    }
}

/// Ray from the origin along the normalised `(1, 1, 1)` diagonal.
impl<S: Scalar> Default for Ray<S> {
    fn default() -> Self {
        Self::new(Point3::origin(), Vec3::<S>::splat(S::one()))
    }
}

impl<S: Scalar> PartialEq for Ray<S> {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && self.direction == other.direction
    }
}
