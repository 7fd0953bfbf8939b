// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::error::MathError;
use crate::tolerance::{
    AXIS_ANGLE_EPSILON, EPSILON, SLERP_LERP_THRESHOLD, UNIT_NORM_TOLERANCE,
};
use crate::{Mat4, Scalar, Vec3, Vec4};

/// Quaternion stored as `(x, y, z, w)`, representing `w + xi + yj + zk`.
///
/// * All angles are expressed in radians.
/// * Rotations are unit quaternions, but unit length is not enforced on
///   every mutation: interpolation and accumulation may hold transient
///   non-unit values. Call [`Quat::normalize`] / [`Quat::normalized`] before
///   using a quaternion as a rotation.
/// * Equality is exact and componentwise; use [`Quat::approx_eq`] for a
///   tolerance.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quat<S = f64> {
    data: [S; 4],
}

impl<S: Scalar> Quat<S> {
    /// Creates a quaternion from components.
    ///
    /// Use [`Quat::from_axis_angle`] or [`Quat::from_euler`] for rotation
    /// construction.
    pub const fn new(x: S, y: S, z: S, w: S) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Broadcasts `value` into all four components.
    pub fn splat(value: S) -> Self {
        Self { data: [value; 4] }
    }

    /// Copies `(x, y, z, w)` from the first four values of `data`.
    ///
    /// Contract: `data.len() >= 4`.
    pub fn from_slice(data: &[S]) -> Self {
        contract!(
            data.len() >= 4,
            "quaternion needs 4 components, got {}",
            data.len()
        );
        Self::new(data[0], data[1], data[2], data[3])
    }

    /// Returns the identity quaternion `(0, 0, 0, 1)`.
    pub fn identity() -> Self {
        Self::new(S::zero(), S::zero(), S::zero(), S::one())
    }

    /// Returns the quaternion as an array.
    pub fn to_array(self) -> [S; 4] {
        self.data
    }

    /// X (first imaginary) component.
    pub fn x(&self) -> S {
        self.data[0]
    }

    /// Y (second imaginary) component.
    pub fn y(&self) -> S {
        self.data[1]
    }

    /// Z (third imaginary) component.
    pub fn z(&self) -> S {
        self.data[2]
    }

    /// W (scalar) component.
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

    /// The imaginary part `(x, y, z)`.
    pub fn vector_part(&self) -> Vec3<S> {
        Vec3::<S>::new(self.x(), self.y(), self.z())
    }

    /// Exact check against `(0, 0, 0, 1)`.
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Returns `true` when `|q|^2` is within [`EPSILON`] of one, i.e. the
    /// quaternion can be used as a rotation as-is.
    pub fn is_normalized(&self) -> bool {
        (self.square_magnitude() - S::one()).abs() <= S::from_f64(EPSILON)
    }

    /// Componentwise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: S) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(&a, &b)| (a - b).abs() <= tolerance)
    }

    /// Constructs a quaternion from a rotation axis and angle in radians.
    ///
    /// The axis is normalised first. Contract: the axis has non-zero
    /// length.
    pub fn from_axis_angle(axis: Vec3<S>, angle: S) -> Self {
        let axis = axis.normalized();
        let (sin_half, cos_half) = (angle * S::half()).sin_cos();
        Self::new(
            axis.x() * sin_half,
            axis.y() * sin_half,
            axis.z() * sin_half,
            cos_half,
        )
    }

    /// Builds a rotation from Euler angles in radians: `pitch` about X,
    /// `yaw` about Y, `roll` about Z.
    ///
    /// All three half-angle terms are combined in a single closed form; the
    /// result is the inverse of [`Quat::to_euler`] away from gimbal lock.
    ///
    /// # Examples
    /// ```
    /// use core::f64::consts::FRAC_PI_2;
    /// use warp_math::{Quat, Vec3};
    /// // 90° roll carries +X onto +Y.
    /// let q = Quat::from_euler(0.0, 0.0, FRAC_PI_2);
    /// let v = q.rotate(&Vec3::new(1.0, 0.0, 0.0));
    /// assert!(v.approx_eq(&Vec3::new(0.0, 1.0, 0.0), 1e-12));
    /// ```
    pub fn from_euler(pitch: S, yaw: S, roll: S) -> Self {
        let (sx, cx) = (pitch * S::half()).sin_cos();
        let (sy, cy) = (yaw * S::half()).sin_cos();
        let (sz, cz) = (roll * S::half()).sin_cos();

        Self::new(
            sx * cy * cz - cx * sy * sz,
            cx * sy * cz + sx * cy * sz,
            cx * cy * sz - sx * sy * cz,
            cx * cy * cz + sx * sy * sz,
        )
    }

    /// [`Quat::from_euler`] taking `(pitch, yaw, roll)` packed as `(x, y, z)`.
    pub fn from_euler_vec(euler: &Vec3<S>) -> Self {
        Self::from_euler(euler.x(), euler.y(), euler.z())
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// Operand order matters: applied to vectors, the result rotates by
    /// `other` first and then by `self`. Quaternion multiplication is
    /// non‑commutative.
    ///
    /// Inputs need not be normalized; when both operands are unit
    /// quaternions the result remains unit up to floating‑point error
    /// (consider re‑normalizing over long chains).
    ///
    /// # Examples
    /// ```
    /// use core::f64::consts::FRAC_PI_2;
    /// use warp_math::{Quat, Vec3};
    /// let yaw = Quat::from_axis_angle(Vec3::new(0.0, 1.0, 0.0), FRAC_PI_2);
    /// let pitch = Quat::from_axis_angle(Vec3::new(1.0, 0.0, 0.0), FRAC_PI_2);
    /// // Non‑commutative: pitch*yaw is different
    /// assert_ne!(yaw.multiply(&pitch), pitch.multiply(&yaw));
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = other.data;

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Multiplies every component by `s`.
    pub fn scale(&self, s: S) -> Self {
        Self {
            data: self.data.map(|c| c * s),
        }
    }

    /// Divides every component by `s`, or [`MathError::DivideByZero`].
    pub fn try_div(&self, s: S) -> Result<Self, MathError> {
        if s == S::zero() {
            return Err(MathError::DivideByZero);
        }
        Ok(self.scale(S::one() / s))
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> S {
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(S::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Squared norm, `dot(self, self)`.
    pub fn square_magnitude(&self) -> S {
        self.dot(self)
    }

    /// Norm.
    pub fn magnitude(&self) -> S {
        self.square_magnitude().sqrt()
    }

    /// Normalises in place. Contract: non-zero magnitude.
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Unit-length copy.
    ///
    /// Contract: non-zero magnitude. See [`Quat::try_normalized`].
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        contract!(mag != S::zero(), "cannot normalize a zero quaternion");
        self.scale(S::one() / mag)
    }

    /// Unit-length copy, or [`MathError::ZeroLength`].
    pub fn try_normalized(&self) -> Result<Self, MathError> {
        let mag = self.magnitude();
        if mag == S::zero() || !mag.is_finite() {
            return Err(MathError::ZeroLength);
        }
        Ok(self.scale(S::one() / mag))
    }

    /// Negates the imaginary part.
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z(), self.w())
    }

    /// Multiplicative inverse, `conjugate / |q|²`.
    ///
    /// Contract: non-zero magnitude. For unit quaternions this equals the
    /// conjugate.
    pub fn inverse(&self) -> Self {
        let sq = self.square_magnitude();
        contract!(sq != S::zero(), "cannot invert a zero quaternion");
        self.conjugate().scale(S::one() / sq)
    }

    /// Multiplicative inverse, or [`MathError::ZeroLength`].
    pub fn try_inverse(&self) -> Result<Self, MathError> {
        let sq = self.square_magnitude();
        if sq == S::zero() || !sq.is_finite() {
            return Err(MathError::ZeroLength);
        }
        Ok(self.conjugate().scale(S::one() / sq))
    }

    /// Rotates `v` by this quaternion.
    ///
    /// Uses `v' = v + 2·(q × (q × v + w·v))` with `q = (x, y, z)`, which
    /// equals `q · v · q⁻¹` for unit quaternions. The result is wrong for
    /// non-unit input; normalise first.
    pub fn rotate(&self, v: &Vec3<S>) -> Vec3<S> {
        let q = self.vector_part();
        let inner = q.cross(v) + *v * self.w();
        *v + q.cross(&inner) * S::two()
    }

    /// Decomposes into `(axis, angle)`.
    ///
    /// The axis is unit length and the angle lies in `[0, 2π]`. When the
    /// rotation is (nearly) zero the axis is undefined and `+X` is returned.
    pub fn to_axis_angle(&self) -> (Vec3<S>, S) {
        let mut q = *self;
        if (q.square_magnitude() - S::one()).abs() > S::from_f64(UNIT_NORM_TOLERANCE) {
            q.normalize();
        }

        let w = crate::clamp(q.w(), -S::one(), S::one());
        let angle = S::two() * w.acos();
        let s = (S::one() - w * w).sqrt();
        if s < S::from_f64(AXIS_ANGLE_EPSILON) {
            tracing::trace!(w = ?w, "axis undefined for near-zero rotation; using +X");
            return (Vec3::<S>::unit_x(), angle);
        }
        (Vec3::<S>::new(q.x() / s, q.y() / s, q.z() / s), angle)
    }

    /// Extracts Euler angles `(pitch, yaw, roll)` about `(X, Y, Z)`.
    ///
    /// At gimbal lock (`|2(wy − zx)| ≥ 1`) the yaw is clamped to `±π/2`
    /// instead of evaluating `asin` outside its domain.
    pub fn to_euler(&self) -> Vec3<S> {
        let [x, y, z, w] = self.data;
        let two = S::two();

        let sinx_cosy = two * (w * x + y * z);
        let cosx_cosy = S::one() - two * (x * x + y * y);
        let pitch = sinx_cosy.atan2(cosx_cosy);

        let siny = two * (w * y - z * x);
        let yaw = if siny.abs() >= S::one() {
            tracing::trace!(sin_yaw = ?siny, "gimbal lock: clamping yaw");
            S::FRAC_PI_2.copysign(siny)
        } else {
            siny.asin()
        };

        let sinz_cosy = two * (w * z + x * y);
        let cosz_cosy = S::one() - two * (y * y + z * z);
        let roll = sinz_cosy.atan2(cosz_cosy);

        Vec3::<S>::new(pitch, yaw, roll)
    }

    /// Spherical linear interpolation along the shortest arc.
    ///
    /// When `b` lies in the opposite hemisphere it is negated first. Nearly
    /// parallel inputs (corrected dot above
    /// [`SLERP_LERP_THRESHOLD`](crate::tolerance::SLERP_LERP_THRESHOLD))
    /// fall back to [`Quat::lerp`] to avoid dividing by `sin θ ≈ 0`.
    /// Otherwise the result is not renormalised; the weights are exact for
    /// unit inputs.
    pub fn slerp(a: &Self, b: &Self, t: S) -> Self {
        let mut dot = a.dot(b);
        let mut end = *b;
        if dot < S::zero() {
            end = -end;
            dot = -dot;
        }

        if dot > S::from_f64(SLERP_LERP_THRESHOLD) {
            tracing::trace!(dot = ?dot, "slerp inputs nearly parallel; using lerp");
            return Self::lerp(a, &end, t);
        }

        let theta = dot.acos();
        let sin_theta = theta.sin();
        let wa = ((S::one() - t) * theta).sin() / sin_theta;
        let wb = (t * theta).sin() / sin_theta;
        a.scale(wa) + end.scale(wb)
    }

    /// Normalised linear interpolation `normalize(a·(1−t) + b·t)`.
    ///
    /// Contract: the blend is not the zero quaternion (e.g. `b = −a` at
    /// `t = 0.5`).
    pub fn lerp(a: &Self, b: &Self, t: S) -> Self {
        (a.scale(S::one() - t) + b.scale(t)).normalized()
    }

    /// Rotation matrix (4×4, zero translation) using the doubled-term
    /// formulation.
    ///
    /// The quaternion is used as-is; pass a unit quaternion.
    pub fn to_mat4(&self) -> Mat4<S> {
        let [x, y, z, w] = self.data;
        let (x2, y2, z2) = (x + x, y + y, z + z);

        let xx = x * x2;
        let yy = y * y2;
        let zz = z * z2;
        let xy = x * y2;
        let xz = x * z2;
        let yz = y * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;

        let (o, n) = (S::one(), S::zero());
        Mat4::from_rows([
            [o - (yy + zz), xy - wz, xz + wy, n],
            [xy + wz, o - (xx + zz), yz - wx, n],
            [xz - wy, yz + wx, o - (xx + yy), n],
            [n, n, n, o],
        ])
    }
}

impl<S: Scalar> Default for Quat<S> {
    fn default() -> Self {
        Self::identity()
    }
}

/// Converts a 4‑element array `(x, y, z, w)` into a `Quat`.
/// The components are taken verbatim; normalization is not enforced.
impl<S> From<[S; 4]> for Quat<S> {
    fn from(value: [S; 4]) -> Self {
        Self { data: value }
    }
}

impl<S: Scalar> From<Vec4<S>> for Quat<S> {
    fn from(value: Vec4<S>) -> Self {
        Self {
            data: value.to_array(),
        }
    }
}

impl<S> Index<usize> for Quat<S> {
    type Output = S;
    fn index(&self, idx: usize) -> &S {
        &self.data[idx]
    }
}

impl<S> IndexMut<usize> for Quat<S> {
    fn index_mut(&mut self, idx: usize) -> &mut S {
        &mut self.data[idx]
    }
}

impl<S: Scalar> Neg for Quat<S> {
    type Output = Self;
    fn neg(self) -> Self {
        self.scale(-S::one())
    }
}

impl<S: Scalar> Add for Quat<S> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            data: core::array::from_fn(|i| self.data[i] + rhs.data[i]),
        }
    }
}

impl<S: Scalar> Sub for Quat<S> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            data: core::array::from_fn(|i| self.data[i] - rhs.data[i]),
        }
    }
}

/// Hamilton product; see [`Quat::multiply`].
impl<S: Scalar> Mul for Quat<S> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<S: Scalar> Mul<S> for Quat<S> {
    type Output = Self;
    fn mul(self, rhs: S) -> Self {
        self.scale(rhs)
    }
}

impl<S: Scalar> Div<S> for Quat<S> {
    type Output = Self;
    fn div(self, rhs: S) -> Self {
        contract!(rhs != S::zero(), "quaternion divided by zero scalar");
        self.scale(S::one() / rhs)
    }
}

impl<S: Scalar> AddAssign for Quat<S> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<S: Scalar> SubAssign for Quat<S> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<S: Scalar> MulAssign for Quat<S> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl<S: Scalar> MulAssign<S> for Quat<S> {
    fn mul_assign(&mut self, rhs: S) {
        *self = self.scale(rhs);
    }
}

impl<S: Scalar> DivAssign<S> for Quat<S> {
    fn div_assign(&mut self, rhs: S) {
        *self = *self / rhs;
    }
}
