// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use warp_math::{Mat4, Normal3, Point3, Quat, Scalar, Vec3};

use super::aabb::Aabb;
use super::ray::Ray;

/// Affine transform with non-uniform scale used for shape placement.
///
/// Conventions:
/// - `translation` in world units.
/// - `rotation` as a unit quaternion.
/// - `scale` is non-uniform and applied before rotation/translation.
///
/// The forward matrix is always `M = T * R * S` (column vectors: scale, then
/// rotate, then translate). Both `M` and `M⁻¹` are cached and rebuilt
/// eagerly by every setter, so [`Transform::matrix`] and
/// [`Transform::matrix_inverse`] are plain reads.
///
/// Scale components must be non-zero: a collapsed axis makes `M` singular
/// and its inverse undefined.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform<S = f64> {
    translation: Vec3<S>,
    rotation: Quat<S>,
    scale: Vec3<S>,
    matrix: Mat4<S>,
    matrix_inverse: Mat4<S>,
}

impl<S: Scalar> Transform<S> {
    /// Identity transform (no translation, no rotation, unit scale).
    pub fn identity() -> Self {
        Self {
            translation: Vec3::<S>::zero(),
            rotation: Quat::identity(),
            scale: Vec3::<S>::splat(S::one()),
            matrix: Mat4::identity(),
            matrix_inverse: Mat4::identity(),
        }
    }

    /// Creates a transform from components.
    ///
    /// # Examples
    /// ```
    /// use core::f64::consts::FRAC_PI_2;
    /// use warp_geom::Transform;
    /// use warp_math::{Point3, Quat, Vec3};
    /// let t = Transform::new(
    ///     Vec3::new(20.0, 30.0, 40.0),
    ///     Quat::from_euler(FRAC_PI_2, 0.0, 0.0),
    ///     Vec3::splat(2.0),
    /// );
    /// let p = t.transform_point(&Point3::new(0.0, 0.0, 1.0));
    /// assert!(p.approx_eq(&Point3::new(20.0, 28.0, 40.0), 1e-12));
    /// ```
    pub fn new(translation: Vec3<S>, rotation: Quat<S>, scale: Vec3<S>) -> Self {
        let mut t = Self {
            translation,
            rotation,
            scale,
            matrix: Mat4::identity(),
            matrix_inverse: Mat4::identity(),
        };
        t.rebuild();
        t
    }

    /// Wraps a precomputed forward/inverse matrix pair.
    ///
    /// The component accessors of the result report the identity pose; any
    /// setter rebuilds the matrices from those components.
    pub(crate) fn from_matrices(matrix: Mat4<S>, matrix_inverse: Mat4<S>) -> Self {
        Self {
            matrix,
            matrix_inverse,
            ..Self::identity()
        }
    }

    /// Translation component (zero on the result of [`Transform::inversed`]).
    pub fn translation(&self) -> Vec3<S> {
        self.translation
    }

    /// Rotation component (identity on the result of [`Transform::inversed`]).
    pub fn rotation(&self) -> Quat<S> {
        self.rotation
    }

    /// Scale component (one on the result of [`Transform::inversed`]).
    pub fn scale(&self) -> Vec3<S> {
        self.scale
    }

    /// Sets the translation and rebuilds both matrices.
    pub fn set_translation(&mut self, translation: Vec3<S>) {
        self.translation = translation;
        self.rebuild();
    }

    /// Sets the rotation and rebuilds both matrices.
    pub fn set_rotation(&mut self, rotation: Quat<S>) {
        self.rotation = rotation;
        self.rebuild();
    }

    /// Sets the rotation from `(pitch, yaw, roll)` Euler angles in radians.
    pub fn set_rotation_euler(&mut self, euler: &Vec3<S>) {
        self.set_rotation(Quat::from_euler_vec(euler));
    }

    /// Sets a per-axis scale and rebuilds both matrices.
    pub fn set_scale(&mut self, scale: Vec3<S>) {
        if scale.as_slice().contains(&S::zero()) {
            tracing::debug!(?scale, "zero scale component; transform is not invertible");
        }
        self.scale = scale;
        self.rebuild();
    }

    /// Sets the same scale on every axis.
    pub fn set_uniform_scale(&mut self, scale: S) {
        self.set_scale(Vec3::<S>::splat(scale));
    }

    /// Forward matrix `T * R * S`.
    pub fn matrix(&self) -> Mat4<S> {
        self.matrix
    }

    /// Inverse of [`Transform::matrix`].
    pub fn matrix_inverse(&self) -> Mat4<S> {
        self.matrix_inverse
    }

    /// Transform mapping world space back to local space.
    ///
    /// Swaps the cached matrices; no decomposition or re-inversion happens.
    /// The result therefore carries no components: [`Transform::translation`],
    /// [`Transform::rotation`], and [`Transform::scale`] report the identity
    /// pose, and any setter on it rebuilds both matrices from that pose,
    /// discarding the swapped inverse.
    pub fn inversed(&self) -> Self {
        Self::from_matrices(self.matrix_inverse, self.matrix)
    }

    /// Applies the transform to any [`Transformable`] value.
    pub fn apply<T: Transformable<S>>(&self, value: &T) -> T {
        value.transformed_by(self)
    }

    /// `M · p` with `w = 1`: translation, rotation, and scale all apply.
    pub fn transform_point(&self, p: &Point3<S>) -> Point3<S> {
        self.matrix.transform_point(p)
    }

    /// `M · v` with `w = 0`: rotation and scale apply, translation does not.
    pub fn transform_vector(&self, v: &Vec3<S>) -> Vec3<S> {
        self.matrix.transform_direction(v)
    }

    /// `(M⁻¹)ᵀ · n`, keeping normals perpendicular to transformed surfaces
    /// under non-uniform scale.
    ///
    /// The result is not renormalised.
    pub fn transform_normal(&self, n: &Normal3<S>) -> Normal3<S> {
        Normal3::from(
            self.matrix_inverse
                .transpose()
                .transform_direction(&n.to_vector()),
        )
    }

    /// Maps the origin as a point and the direction as a vector, then
    /// renormalises the direction. The parametric window is carried over.
    pub fn transform_ray(&self, ray: &Ray<S>) -> Ray<S> {
        Ray::with_bounds(
            self.transform_point(&ray.origin()),
            self.transform_vector(&ray.direction()),
            ray.t_min(),
            ray.t_max(),
        )
    }

    /// World-space bound of a transformed box (eight-corner fit).
    pub fn transform_aabb(&self, aabb: &Aabb<S>) -> Aabb<S> {
        aabb.transformed(&self.matrix)
    }

    /// Translation matrix with `t` in the last column.
    pub fn translation_matrix(t: &Vec3<S>) -> Mat4<S> {
        Mat4::translation(t)
    }

    /// Rotation matrix of `q`; see [`Quat::to_mat4`].
    pub fn rotation_matrix(q: &Quat<S>) -> Mat4<S> {
        q.to_mat4()
    }

    /// Diagonal scale matrix.
    pub fn scale_matrix(s: &Vec3<S>) -> Mat4<S> {
        Mat4::scale(s)
    }

    /// Left-handed perspective projection; see [`Mat4::perspective_lh`].
    pub fn perspective_matrix_lh(fovy: S, aspect: S, znear: S, zfar: S) -> Mat4<S> {
        Mat4::perspective_lh(fovy, aspect, znear, zfar)
    }

    /// Right-handed perspective projection; see [`Mat4::perspective_rh`].
    pub fn perspective_matrix_rh(fovy: S, aspect: S, znear: S, zfar: S) -> Mat4<S> {
        Mat4::perspective_rh(fovy, aspect, znear, zfar)
    }

    fn rebuild(&mut self) {
        // M = T * R * S (column-major)
        self.matrix = Self::translation_matrix(&self.translation)
            * Self::rotation_matrix(&self.rotation)
            * Self::scale_matrix(&self.scale);
        self.matrix_inverse = self.matrix.inverse();
    }
}

impl<S: Scalar> Default for Transform<S> {
    fn default() -> Self {
        Self::identity()
    }
}

/// Values a [`Transform`] can be applied to.
///
/// Dispatches [`Transform::apply`] to the rule each kind needs: points take
/// translation, vectors do not, normals use the inverse-transpose, and rays
/// renormalise their direction.
pub trait Transformable<S: Scalar>: Sized {
    /// Returns `self` mapped through `transform`.
    fn transformed_by(&self, transform: &Transform<S>) -> Self;
}

impl<S: Scalar> Transformable<S> for Point3<S> {
    fn transformed_by(&self, transform: &Transform<S>) -> Self {
        transform.transform_point(self)
    }
}

impl<S: Scalar> Transformable<S> for Vec3<S> {
    fn transformed_by(&self, transform: &Transform<S>) -> Self {
        transform.transform_vector(self)
    }
}

impl<S: Scalar> Transformable<S> for Normal3<S> {
    fn transformed_by(&self, transform: &Transform<S>) -> Self {
        transform.transform_normal(self)
    }
}

impl<S: Scalar> Transformable<S> for Ray<S> {
    fn transformed_by(&self, transform: &Transform<S>) -> Self {
        transform.transform_ray(self)
    }
}

impl<S: Scalar> Transformable<S> for Aabb<S> {
    fn transformed_by(&self, transform: &Transform<S>) -> Self {
        transform.transform_aabb(self)
    }
}
