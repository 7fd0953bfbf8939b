// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Fixed-size vectors, points, and normals.
//!
//! Points, vectors, and normals are distinct types so that a transform can
//! dispatch on the argument type: points are homogeneous `w = 1`, vectors
//! `w = 0`, and normals go through the inverse-transpose.

use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::error::MathError;
use crate::tolerance::EPSILON;
use crate::Scalar;

/// `N`-component vector (`N` in `2..=4`) backed by a plain array.
///
/// * Components are reachable both by index (`v[0]`) and by name
///   (`v.x()`); both read the same storage.
/// * Arithmetic is componentwise, including `*` and `/` between vectors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vector<S, const N: usize> {
    data: [S; N],
}

/// Two-component vector.
pub type Vec2<S = f64> = Vector<S, 2>;
/// Three-component vector.
pub type Vec3<S = f64> = Vector<S, 3>;
/// Four-component vector (homogeneous coordinates).
pub type Vec4<S = f64> = Vector<S, 4>;

impl<S: Scalar, const N: usize> Vector<S, N> {
    /// Creates a vector from an array of components.
    pub const fn from_array(data: [S; N]) -> Self {
        Self { data }
    }

    /// Broadcasts `value` into every component.
    pub fn splat(value: S) -> Self {
        Self { data: [value; N] }
    }

    /// The zero vector.
    pub fn zero() -> Self {
        Self::splat(S::zero())
    }

    /// Copies the first `N` values of `data`.
    ///
    /// Contract: `data.len() >= N`.
    pub fn from_slice(data: &[S]) -> Self {
        contract!(
            data.len() >= N,
            "from_slice needs {N} components, got {}",
            data.len()
        );
        Self {
            data: core::array::from_fn(|i| data[i]),
        }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [S; N] {
        self.data
    }

    /// Borrows the components as a slice.
    pub fn as_slice(&self) -> &[S] {
        &self.data
    }

    fn map(self, f: impl Fn(S) -> S) -> Self {
        Self {
            data: self.data.map(f),
        }
    }

    fn zip_with(self, other: Self, f: impl Fn(S, S) -> S) -> Self {
        Self {
            data: core::array::from_fn(|i| f(self.data[i], other.data[i])),
        }
    }

    /// Multiplies every component by `scalar`.
    pub fn scale(&self, scalar: S) -> Self {
        self.map(|c| c * scalar)
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> S {
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(S::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Absolute value of the dot product.
    pub fn abs_dot(&self, other: &Self) -> S {
        self.dot(other).abs()
    }

    /// Squared magnitude.
    pub fn square_magnitude(&self) -> S {
        self.dot(self)
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> S {
        self.square_magnitude().sqrt()
    }

    /// Normalises in place.
    ///
    /// Contract: the vector has non-zero length.
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Returns a unit-length copy.
    ///
    /// Contract: the vector has non-zero length; see
    /// [`Vector::try_normalized`] for the checked form.
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        contract!(mag != S::zero(), "cannot normalize a zero-length vector");
        self.scale(S::one() / mag)
    }

    /// Returns a unit-length copy, or [`MathError::ZeroLength`].
    pub fn try_normalized(&self) -> Result<Self, MathError> {
        let mag = self.magnitude();
        if mag == S::zero() || !mag.is_finite() {
            return Err(MathError::ZeroLength);
        }
        Ok(self.scale(S::one() / mag))
    }

    /// Cosine of the angle between two vectors.
    pub fn cos_angle(&self, other: &Self) -> S {
        self.dot(other) / (self.magnitude() * other.magnitude())
    }

    /// Angle between two vectors in radians, in `[0, π]`.
    pub fn angle(&self, other: &Self) -> S {
        crate::clamp(self.cos_angle(other), -S::one(), S::one()).acos()
    }

    /// Truncates or zero-extends to `M` components.
    ///
    /// ```
    /// use warp_math::{Vec2, Vec3, Vec4};
    /// let v = Vec3::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.resize::<2>(), Vec2::new(1.0, 2.0));
    /// assert_eq!(v.resize::<4>(), Vec4::new(1.0, 2.0, 3.0, 0.0));
    /// ```
    pub fn resize<const M: usize>(&self) -> Vector<S, M> {
        Vector {
            data: core::array::from_fn(|i| if i < N { self.data[i] } else { S::zero() }),
        }
    }

    /// Returns `true` when the squared length is within
    /// [`EPSILON`](crate::tolerance::EPSILON) of one.
    pub fn is_normalized(&self) -> bool {
        (self.square_magnitude() - S::one()).abs() <= S::from_f64(EPSILON)
    }

    /// Returns `true` when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|c| c.is_finite())
    }

    /// Componentwise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: S) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(&a, &b)| (a - b).abs() <= tolerance)
    }
}

impl<S: Scalar> Vector<S, 2> {
    /// Creates a vector from components.
    pub const fn new(x: S, y: S) -> Self {
        Self { data: [x, y] }
    }

    /// X component.
    pub fn x(&self) -> S {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> S {
        self.data[1]
    }

    /// Sets the X component.
    pub fn set_x(&mut self, value: S) {
        self.data[0] = value;
    }

    /// Sets the Y component.
    pub fn set_y(&mut self, value: S) {
        self.data[1] = value;
    }
}

impl<S: Scalar> Vector<S, 3> {
    /// Creates a vector from components.
    pub const fn new(x: S, y: S, z: S) -> Self {
        Self { data: [x, y, z] }
    }

    /// Unit vector along +X.
    pub fn unit_x() -> Self {
        Self::new(S::one(), S::zero(), S::zero())
    }

    /// Unit vector along +Y.
    pub fn unit_y() -> Self {
        Self::new(S::zero(), S::one(), S::zero())
    }

    /// Unit vector along +Z.
    pub fn unit_z() -> Self {
        Self::new(S::zero(), S::zero(), S::one())
    }

    /// X component.
    pub fn x(&self) -> S {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> S {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> S {
        self.data[2]
    }

    /// Sets the X component.
    pub fn set_x(&mut self, value: S) {
        self.data[0] = value;
    }

    /// Sets the Y component.
    pub fn set_y(&mut self, value: S) {
        self.data[1] = value;
    }

    /// Sets the Z component.
    pub fn set_z(&mut self, value: S) {
        self.data[2] = value;
    }

    /// Cross product with another vector (right-handed).
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}

impl<S: Scalar> Vector<S, 4> {
    /// Creates a vector from components.
    pub const fn new(x: S, y: S, z: S, w: S) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Extends a 3-vector with a homogeneous `w`.
    pub fn from_vec3(v: Vector<S, 3>, w: S) -> Self {
        Self::new(v.x(), v.y(), v.z(), w)
    }

    /// X component.
    pub fn x(&self) -> S {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> S {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> S {
        self.data[2]
    }

    /// W component.
    pub fn w(&self) -> S {
        self.data[3]
    }

    /// Sets the X component.
    pub fn set_x(&mut self, value: S) {
        self.data[0] = value;
    }

    /// Sets the Y component.
    pub fn set_y(&mut self, value: S) {
        self.data[1] = value;
    }

    /// Sets the Z component.
    pub fn set_z(&mut self, value: S) {
        self.data[2] = value;
    }

    /// Sets the W component.
    pub fn set_w(&mut self, value: S) {
        self.data[3] = value;
    }

    /// Drops `w`.
    pub fn xyz(&self) -> Vector<S, 3> {
        Vector::<S, 3>::new(self.data[0], self.data[1], self.data[2])
    }
}

impl<S: Scalar, const N: usize> Default for Vector<S, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<S, const N: usize> From<[S; N]> for Vector<S, N> {
    fn from(data: [S; N]) -> Self {
        Self { data }
    }
}

impl<S, const N: usize> From<Vector<S, N>> for [S; N] {
    fn from(value: Vector<S, N>) -> Self {
        value.data
    }
}

impl<S, const N: usize> Index<usize> for Vector<S, N> {
    type Output = S;
    fn index(&self, idx: usize) -> &S {
        &self.data[idx]
    }
}

impl<S, const N: usize> IndexMut<usize> for Vector<S, N> {
    fn index_mut(&mut self, idx: usize) -> &mut S {
        &mut self.data[idx]
    }
}

impl<S: Scalar, const N: usize> Neg for Vector<S, N> {
    type Output = Self;
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<S: Scalar, const N: usize> Add for Vector<S, N> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<S: Scalar, const N: usize> Sub for Vector<S, N> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<S: Scalar, const N: usize> Mul for Vector<S, N> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a * b)
    }
}

impl<S: Scalar, const N: usize> Div for Vector<S, N> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a / b)
    }
}

impl<S: Scalar, const N: usize> Mul<S> for Vector<S, N> {
    type Output = Self;
    fn mul(self, rhs: S) -> Self {
        self.scale(rhs)
    }
}

impl<S: Scalar, const N: usize> Div<S> for Vector<S, N> {
    type Output = Self;
    fn div(self, rhs: S) -> Self {
        contract!(rhs != S::zero(), "vector divided by zero scalar");
        self.scale(S::one() / rhs)
    }
}

impl<S: Scalar, const N: usize> AddAssign for Vector<S, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<S: Scalar, const N: usize> SubAssign for Vector<S, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<S: Scalar, const N: usize> MulAssign for Vector<S, N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<S: Scalar, const N: usize> DivAssign for Vector<S, N> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<S: Scalar, const N: usize> MulAssign<S> for Vector<S, N> {
    fn mul_assign(&mut self, rhs: S) {
        *self = *self * rhs;
    }
}

impl<S: Scalar, const N: usize> DivAssign<S> for Vector<S, N> {
    fn div_assign(&mut self, rhs: S) {
        *self = *self / rhs;
    }
}

/// Position in `N`-dimensional space.
///
/// Differences of points are vectors; points offset by vectors are points.
/// Transforms apply translation to points but not to vectors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point<S, const N: usize> {
    data: [S; N],
}

/// Two-dimensional point.
pub type Point2<S = f64> = Point<S, 2>;
/// Three-dimensional point.
pub type Point3<S = f64> = Point<S, 3>;

impl<S: Scalar, const N: usize> Point<S, N> {
    /// Creates a point from an array of coordinates.
    pub const fn from_array(data: [S; N]) -> Self {
        Self { data }
    }

    /// Broadcasts `value` into every coordinate.
    pub fn splat(value: S) -> Self {
        Self { data: [value; N] }
    }

    /// The origin.
    pub fn origin() -> Self {
        Self::splat(S::zero())
    }

    /// Returns the coordinates as an array.
    pub fn to_array(self) -> [S; N] {
        self.data
    }

    /// Reinterprets the point as its offset from the origin.
    pub fn to_vector(self) -> Vector<S, N> {
        Vector::from_array(self.data)
    }

    /// Point at `origin + v`.
    pub fn from_vector(v: Vector<S, N>) -> Self {
        Self { data: v.to_array() }
    }

    /// Squared distance to `other`.
    pub fn distance_squared(&self, other: &Self) -> S {
        (*self - *other).square_magnitude()
    }

    /// Distance to `other`.
    pub fn distance(&self, other: &Self) -> S {
        (*self - *other).magnitude()
    }

    /// Linear interpolation between two points.
    pub fn lerp(&self, other: &Self, t: S) -> Self {
        *self + (*other - *self) * t
    }

    /// Componentwise minimum.
    pub fn min(&self, other: &Self) -> Self {
        Self {
            data: core::array::from_fn(|i| self.data[i].min(other.data[i])),
        }
    }

    /// Componentwise maximum.
    pub fn max(&self, other: &Self) -> Self {
        Self {
            data: core::array::from_fn(|i| self.data[i].max(other.data[i])),
        }
    }

    /// Componentwise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: S) -> bool {
        self.to_vector().approx_eq(&other.to_vector(), tolerance)
    }
}

impl<S: Scalar> Point<S, 2> {
    /// Creates a point from coordinates.
    pub const fn new(x: S, y: S) -> Self {
        Self { data: [x, y] }
    }

    /// X coordinate.
    pub fn x(&self) -> S {
        self.data[0]
    }

    /// Y coordinate.
    pub fn y(&self) -> S {
        self.data[1]
    }
}

impl<S: Scalar> Point<S, 3> {
    /// Creates a point from coordinates.
    pub const fn new(x: S, y: S, z: S) -> Self {
        Self { data: [x, y, z] }
    }

    /// X coordinate.
    pub fn x(&self) -> S {
        self.data[0]
    }

    /// Y coordinate.
    pub fn y(&self) -> S {
        self.data[1]
    }

    /// Z coordinate.
    pub fn z(&self) -> S {
        self.data[2]
    }
}

impl<S: Scalar, const N: usize> Default for Point<S, N> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<S, const N: usize> From<[S; N]> for Point<S, N> {
    fn from(data: [S; N]) -> Self {
        Self { data }
    }
}

impl<S, const N: usize> Index<usize> for Point<S, N> {
    type Output = S;
    fn index(&self, idx: usize) -> &S {
        &self.data[idx]
    }
}

impl<S, const N: usize> IndexMut<usize> for Point<S, N> {
    fn index_mut(&mut self, idx: usize) -> &mut S {
        &mut self.data[idx]
    }
}

impl<S: Scalar, const N: usize> Neg for Point<S, N> {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            data: self.data.map(|c| -c),
        }
    }
}

impl<S: Scalar, const N: usize> Sub for Point<S, N> {
    type Output = Vector<S, N>;
    fn sub(self, rhs: Self) -> Vector<S, N> {
        self.to_vector() - rhs.to_vector()
    }
}

impl<S: Scalar, const N: usize> Add<Vector<S, N>> for Point<S, N> {
    type Output = Self;
    fn add(self, rhs: Vector<S, N>) -> Self {
        Self::from_vector(self.to_vector() + rhs)
    }
}

impl<S: Scalar, const N: usize> Sub<Vector<S, N>> for Point<S, N> {
    type Output = Self;
    fn sub(self, rhs: Vector<S, N>) -> Self {
        Self::from_vector(self.to_vector() - rhs)
    }
}

impl<S: Scalar, const N: usize> AddAssign<Vector<S, N>> for Point<S, N> {
    fn add_assign(&mut self, rhs: Vector<S, N>) {
        *self = *self + rhs;
    }
}

impl<S: Scalar, const N: usize> SubAssign<Vector<S, N>> for Point<S, N> {
    fn sub_assign(&mut self, rhs: Vector<S, N>) {
        *self = *self - rhs;
    }
}

/// Surface normal in three dimensions.
///
/// Not necessarily unit length: transforming a normal through a scaled
/// matrix changes its length, so callers normalise when they need to.
/// `Default` is the zero normal.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Normal3<S = f64> {
    data: [S; 3],
}

impl<S: Scalar> Normal3<S> {
    /// Creates a normal from components.
    pub const fn new(x: S, y: S, z: S) -> Self {
        Self { data: [x, y, z] }
    }

    /// Broadcasts `value` to all components.
    pub fn splat(value: S) -> Self {
        Self { data: [value; 3] }
    }

    /// Zero normal.
    pub fn zero() -> Self {
        Self::splat(S::zero())
    }

    /// X component.
    pub fn x(&self) -> S {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> S {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> S {
        self.data[2]
    }

    /// Sets the X component.
    pub fn set_x(&mut self, value: S) {
        self.data[0] = value;
    }

    /// Sets the Y component.
    pub fn set_y(&mut self, value: S) {
        self.data[1] = value;
    }

    /// Sets the Z component.
    pub fn set_z(&mut self, value: S) {
        self.data[2] = value;
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [S; 3] {
        self.data
    }

    /// Same components as a plain vector.
    pub fn to_vector(self) -> Vec3<S> {
        Vector::from_array(self.data)
    }

    /// Dot product with a vector.
    pub fn dot(&self, v: &Vec3<S>) -> S {
        self.to_vector().dot(v)
    }

    /// Absolute value of [`Normal3::dot`].
    pub fn abs_dot(&self, v: &Vec3<S>) -> S {
        self.dot(v).abs()
    }

    /// Angle to another normal in radians, in `[0, π]`.
    pub fn angle(&self, other: &Self) -> S {
        self.to_vector().angle(&other.to_vector())
    }

    /// Cross product with another normal.
    pub fn cross(&self, other: &Self) -> Self {
        Self::from(self.to_vector().cross(&other.to_vector()))
    }

    /// Squared Euclidean length.
    pub fn square_magnitude(&self) -> S {
        self.to_vector().square_magnitude()
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> S {
        self.to_vector().magnitude()
    }

    /// Normalises in place. Contract: non-zero length.
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Unit-length copy. Contract: non-zero length.
    pub fn normalized(&self) -> Self {
        Self::from(self.to_vector().normalized())
    }

    /// Unit-length copy, or [`MathError::ZeroLength`].
    pub fn try_normalized(&self) -> Result<Self, MathError> {
        self.to_vector().try_normalized().map(Self::from)
    }

    /// Flips the normal into the hemisphere that `v` points into.
    pub fn face_forward(&self, v: &Vec3<S>) -> Self {
        if self.dot(v) < S::zero() {
            -*self
        } else {
            *self
        }
    }

    /// Componentwise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: S) -> bool {
        self.to_vector().approx_eq(&other.to_vector(), tolerance)
    }
}

impl<S: Scalar> Default for Normal3<S> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<S: Scalar> From<Vec3<S>> for Normal3<S> {
    fn from(v: Vec3<S>) -> Self {
        Self { data: v.to_array() }
    }
}

impl<S: Scalar> From<[S; 3]> for Normal3<S> {
    fn from(data: [S; 3]) -> Self {
        Self { data }
    }
}

impl<S: Scalar> From<Normal3<S>> for Vec3<S> {
    fn from(n: Normal3<S>) -> Self {
        n.to_vector()
    }
}

impl<S> Index<usize> for Normal3<S> {
    type Output = S;
    fn index(&self, idx: usize) -> &S {
        &self.data[idx]
    }
}

impl<S> IndexMut<usize> for Normal3<S> {
    fn index_mut(&mut self, idx: usize) -> &mut S {
        &mut self.data[idx]
    }
}

impl<S: Scalar> Neg for Normal3<S> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from(-self.to_vector())
    }
}

impl<S: Scalar> Add for Normal3<S> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::from(self.to_vector() + rhs.to_vector())
    }
}

impl<S: Scalar> Sub for Normal3<S> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::from(self.to_vector() - rhs.to_vector())
    }
}

impl<S: Scalar> Mul for Normal3<S> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::from(self.to_vector() * rhs.to_vector())
    }
}

impl<S: Scalar> Div for Normal3<S> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::from(self.to_vector() / rhs.to_vector())
    }
}

impl<S: Scalar> Mul<S> for Normal3<S> {
    type Output = Self;
    fn mul(self, rhs: S) -> Self {
        Self::from(self.to_vector() * rhs)
    }
}

impl<S: Scalar> Div<S> for Normal3<S> {
    type Output = Self;
    fn div(self, rhs: S) -> Self {
        Self::from(self.to_vector() / rhs)
    }
}

impl<S: Scalar> AddAssign for Normal3<S> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<S: Scalar> SubAssign for Normal3<S> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<S: Scalar> MulAssign for Normal3<S> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<S: Scalar> DivAssign for Normal3<S> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<S: Scalar> MulAssign<S> for Normal3<S> {
    fn mul_assign(&mut self, rhs: S) {
        *self = *self * rhs;
    }
}

impl<S: Scalar> DivAssign<S> for Normal3<S> {
    fn div_assign(&mut self, rhs: S) {
        *self = *self / rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_accessors_alias_indexed_storage() {
        let mut v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        v[2] = 9.0;
        assert_eq!(v.z(), 9.0);
        v.set_w(-1.0);
        assert_eq!(v[3], -1.0);
        assert_eq!(v.xyz(), Vec3::new(1.0, 2.0, 9.0));
    }

    #[test]
    fn point_vector_algebra() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(4.0, 6.0, 3.0);
        assert_eq!(b - a, Vec3::new(3.0, 4.0, 0.0));
        assert_eq!(a + Vec3::new(3.0, 4.0, 0.0), b);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(a.lerp(&b, 0.5), Point3::new(2.5, 4.0, 3.0));
    }

    #[test]
    fn face_forward_flips_into_hemisphere() {
        let n = Normal3::new(0.0, 0.0, 1.0);
        assert_eq!(
            n.face_forward(&Vec3::new(0.0, 0.0, -1.0)),
            Normal3::new(0.0, 0.0, -1.0)
        );
        assert_eq!(n.face_forward(&Vec3::new(0.0, 1.0, 0.5)), n);
    }

    #[test]
    fn try_normalized_rejects_zero() {
        assert_eq!(
            Vec3::<f64>::zero().try_normalized(),
            Err(MathError::ZeroLength)
        );
    }
}
