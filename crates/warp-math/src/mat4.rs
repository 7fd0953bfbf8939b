// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Mul, MulAssign};

use crate::error::MathError;
use crate::{Point3, Quat, Scalar, Vec3, Vec4, Vector};

/// Column‑major 4×4 matrix matching Echo’s math layout.
///
/// - Stored in column‑major order to align with GPU uploads; use
///   [`Mat4::at`] / [`Mat4::from_rows`] to work in `(row, col)` terms.
/// - Multiplies column vectors: `M * v`. Composition `A * B` applies `B`
///   first.
///
/// # Examples
/// Basic transformations:
/// ```
/// use warp_math::{Mat4, Point3, Vec3};
/// let t = Mat4::translation(&Vec3::new(5.0, -3.0, 2.0));
/// let p = Point3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p), Point3::new(7.0, 1.0, 1.0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4<S = f64> {
    data: [S; 16],
}

impl<S: Scalar> Mat4<S> {
    /// Returns the identity matrix.
    pub fn identity() -> Self {
        let (o, z) = (S::one(), S::zero());
        Self::new([
            o, z, z, z, // col 0
            z, o, z, z, // col 1
            z, z, o, z, // col 2
            z, z, z, o, // col 3
        ])
    }

    /// All-zero matrix.
    pub fn zero() -> Self {
        Self::new([S::zero(); 16])
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [S; 16]) -> Self {
        Self { data }
    }

    /// Creates a matrix from row-major data, as it reads on paper.
    ///
    /// ```
    /// use warp_math::Mat4;
    /// let m = Mat4::from_rows([
    ///     [1.0, 0.0, 0.0, 7.0],
    ///     [0.0, 1.0, 0.0, 8.0],
    ///     [0.0, 0.0, 1.0, 9.0],
    ///     [0.0, 0.0, 0.0, 1.0],
    /// ]);
    /// assert_eq!(m.at(0, 3), 7.0);
    /// assert_eq!(m.to_array()[12], 7.0);
    /// ```
    pub fn from_rows(rows: [[S; 4]; 4]) -> Self {
        let mut out = Self::zero();
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                out.set(row, col, value);
            }
        }
        out
    }

    /// Returns the matrix as a column‑major array.
    pub fn to_array(self) -> [S; 16] {
        self.data
    }

    /// Element at `(row, col)`.
    pub fn at(&self, row: usize, col: usize) -> S {
        self.data[col * 4 + row]
    }

    /// Overwrites the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: S) {
        self.data[col * 4 + row] = value;
    }

    /// Row `r` as a vector.
    pub fn row(&self, r: usize) -> Vec4<S> {
        Vec4::<S>::new(self.at(r, 0), self.at(r, 1), self.at(r, 2), self.at(r, 3))
    }

    /// Column `c` as a vector.
    pub fn col(&self, c: usize) -> Vec4<S> {
        Vec4::<S>::new(self.at(0, c), self.at(1, c), self.at(2, c), self.at(3, c))
    }

    /// Builds a translation matrix.
    ///
    /// Column-major layout: translation occupies the last column.
    pub fn translation(t: &Vec3<S>) -> Self {
        let mut m = Self::identity();
        m.set(0, 3, t.x());
        m.set(1, 3, t.y());
        m.set(2, 3, t.z());
        m
    }

    /// Builds a non-uniform scale matrix.
    pub fn scale(s: &Vec3<S>) -> Self {
        let mut m = Self::identity();
        m.set(0, 0, s.x());
        m.set(1, 1, s.y());
        m.set(2, 2, s.z());
        m
    }

    /// Builds a rotation matrix around the X axis by `angle` radians.
    pub fn rotation_x(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, z) = (S::one(), S::zero());
        Self::from_rows([[o, z, z, z], [z, c, -s, z], [z, s, c, z], [z, z, z, o]])
    }

    /// Builds a rotation matrix around the Y axis by `angle` radians.
    pub fn rotation_y(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, z) = (S::one(), S::zero());
        Self::from_rows([[c, z, s, z], [z, o, z, z], [-s, z, c, z], [z, z, z, o]])
    }

    /// Builds a rotation matrix around the Z axis by `angle` radians.
    pub fn rotation_z(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, z) = (S::one(), S::zero());
        Self::from_rows([[c, -s, z, z], [s, c, z, z], [z, z, o, z], [z, z, z, o]])
    }

    /// Constructs a rotation matrix from a quaternion.
    ///
    /// This simply forwards to [`Quat::to_mat4`].
    pub fn from_quat(q: &Quat<S>) -> Self {
        q.to_mat4()
    }

    /// Left-handed perspective projection (depth mapped to `[0, 1]`, camera
    /// looking down +Z).
    ///
    /// `fovy` is the full vertical field of view in radians.
    pub fn perspective_lh(fovy: S, aspect: S, znear: S, zfar: S) -> Self {
        let f = S::one() / (fovy * S::half()).tan();
        let mut m = Self::zero();
        m.set(0, 0, f / aspect);
        m.set(1, 1, f);
        m.set(2, 2, zfar / (zfar - znear));
        m.set(2, 3, -znear * zfar / (zfar - znear));
        m.set(3, 2, S::one());
        m
    }

    /// Right-handed perspective projection (depth mapped to `[0, 1]`, camera
    /// looking down −Z).
    pub fn perspective_rh(fovy: S, aspect: S, znear: S, zfar: S) -> Self {
        let f = S::one() / (fovy * S::half()).tan();
        let mut m = Self::zero();
        m.set(0, 0, f / aspect);
        m.set(1, 1, f);
        m.set(2, 2, zfar / (znear - zfar));
        m.set(2, 3, znear * zfar / (znear - zfar));
        m.set(3, 2, -S::one());
        m
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// # Examples
    /// ```
    /// use warp_math::{Mat4, Vec3};
    /// let a = Mat4::identity();
    /// let b = Mat4::scale(&Vec3::new(2.0, 3.0, 4.0));
    /// assert_eq!(a.multiply(&b), b);
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = Self::zero();
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = S::zero();
                for k in 0..4 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out.set(row, col, sum);
            }
        }
        out
    }

    /// Full homogeneous product `M * v`.
    pub fn mul_vec4(&self, v: &Vec4<S>) -> Vec4<S> {
        Vector::from_array(core::array::from_fn(|row| self.row(row).dot(v)))
    }

    /// Transforms a point (assumes `w = 1`, no perspective divide).
    pub fn transform_point(&self, point: &Point3<S>) -> Point3<S> {
        let v = Vec4::<S>::from_vec3(point.to_vector(), S::one());
        Point3::<S>::from_vector(self.mul_vec4(&v).xyz())
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    pub fn transform_direction(&self, direction: &Vec3<S>) -> Vec3<S> {
        let v = Vec4::<S>::from_vec3(*direction, S::zero());
        self.mul_vec4(&v).xyz()
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        let mut out = Self::zero();
        for row in 0..4 {
            for col in 0..4 {
                out.set(col, row, self.at(row, col));
            }
        }
        out
    }

    /// Cofactor terms shared by [`Mat4::determinant`] and [`Mat4::inverse`].
    ///
    /// Returns the adjugate (transposed cofactor matrix) and the
    /// determinant.
    fn adjugate(&self) -> (Self, S) {
        let a = |r, c| self.at(r, c);

        // 2×2 minors: s* from rows 0-1, c* from rows 2-3.
        let s0 = a(0, 0) * a(1, 1) - a(1, 0) * a(0, 1);
        let s1 = a(0, 0) * a(1, 2) - a(1, 0) * a(0, 2);
        let s2 = a(0, 0) * a(1, 3) - a(1, 0) * a(0, 3);
        let s3 = a(0, 1) * a(1, 2) - a(1, 1) * a(0, 2);
        let s4 = a(0, 1) * a(1, 3) - a(1, 1) * a(0, 3);
        let s5 = a(0, 2) * a(1, 3) - a(1, 2) * a(0, 3);

        let c5 = a(2, 2) * a(3, 3) - a(3, 2) * a(2, 3);
        let c4 = a(2, 1) * a(3, 3) - a(3, 1) * a(2, 3);
        let c3 = a(2, 1) * a(3, 2) - a(3, 1) * a(2, 2);
        let c2 = a(2, 0) * a(3, 3) - a(3, 0) * a(2, 3);
        let c1 = a(2, 0) * a(3, 2) - a(3, 0) * a(2, 2);
        let c0 = a(2, 0) * a(3, 1) - a(3, 0) * a(2, 1);

        let det = s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0;

        let adj = Self::from_rows([
            [
                a(1, 1) * c5 - a(1, 2) * c4 + a(1, 3) * c3,
                -a(0, 1) * c5 + a(0, 2) * c4 - a(0, 3) * c3,
                a(3, 1) * s5 - a(3, 2) * s4 + a(3, 3) * s3,
                -a(2, 1) * s5 + a(2, 2) * s4 - a(2, 3) * s3,
            ],
            [
                -a(1, 0) * c5 + a(1, 2) * c2 - a(1, 3) * c1,
                a(0, 0) * c5 - a(0, 2) * c2 + a(0, 3) * c1,
                -a(3, 0) * s5 + a(3, 2) * s2 - a(3, 3) * s1,
                a(2, 0) * s5 - a(2, 2) * s2 + a(2, 3) * s1,
            ],
            [
                a(1, 0) * c4 - a(1, 1) * c2 + a(1, 3) * c0,
                -a(0, 0) * c4 + a(0, 1) * c2 - a(0, 3) * c0,
                a(3, 0) * s4 - a(3, 1) * s2 + a(3, 3) * s0,
                -a(2, 0) * s4 + a(2, 1) * s2 - a(2, 3) * s0,
            ],
            [
                -a(1, 0) * c3 + a(1, 1) * c1 - a(1, 2) * c0,
                a(0, 0) * c3 - a(0, 1) * c1 + a(0, 2) * c0,
                -a(3, 0) * s3 + a(3, 1) * s1 - a(3, 2) * s0,
                a(2, 0) * s3 - a(2, 1) * s1 + a(2, 2) * s0,
            ],
        ]);
        (adj, det)
    }

    /// Determinant.
    pub fn determinant(&self) -> S {
        self.adjugate().1
    }

    /// Inverse matrix.
    ///
    /// Contract: the matrix is non-singular. A singular input asserts in
    /// debug builds and yields non-finite entries otherwise; use
    /// [`Mat4::try_inverse`] when singularity is an expected input.
    pub fn inverse(&self) -> Self {
        let (adj, det) = self.adjugate();
        contract!(det != S::zero(), "cannot invert a singular matrix");
        adj.scale_by(S::one() / det)
    }

    /// Inverse matrix, or [`MathError::SingularMatrix`] when the
    /// determinant is zero or not finite.
    pub fn try_inverse(&self) -> Result<Self, MathError> {
        let (adj, det) = self.adjugate();
        if det == S::zero() || !det.is_finite() {
            tracing::trace!(det = ?det, "singular matrix rejected by try_inverse");
            return Err(MathError::SingularMatrix);
        }
        Ok(adj.scale_by(S::one() / det))
    }

    fn scale_by(self, factor: S) -> Self {
        Self::new(self.data.map(|v| v * factor))
    }

    /// Exact comparison against the identity matrix.
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Elementwise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: S) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(&a, &b)| (a - b).abs() <= tolerance)
    }
}

impl<S: Scalar> Default for Mat4<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S> From<[S; 16]> for Mat4<S> {
    fn from(value: [S; 16]) -> Self {
        Self { data: value }
    }
}

impl<S: Scalar> Mul for Mat4<S> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl<S: Scalar> Mul<&Mat4<S>> for Mat4<S> {
    type Output = Self;
    fn mul(self, rhs: &Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl<S: Scalar> Mul<Vec4<S>> for Mat4<S> {
    type Output = Vec4<S>;
    fn mul(self, rhs: Vec4<S>) -> Vec4<S> {
        self.mul_vec4(&rhs)
    }
}

impl<S: Scalar> MulAssign for Mat4<S> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl<S: Scalar> MulAssign<&Mat4<S>> for Mat4<S> {
    fn mul_assign(&mut self, rhs: &Self) {
        *self = self.multiply(rhs);
    }
}
