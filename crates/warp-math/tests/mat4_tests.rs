// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]
use approx::assert_abs_diff_eq;
use core::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4};
use warp_math::{Mat4, MathError, Point3, Quat, Vec3, Vec4};

const EPS: f64 = 1e-12;

fn approx_eq16(a: Mat4, b: Mat4) {
    let (a, b) = (a.to_array(), b.to_array());
    for i in 0..16 {
        assert_abs_diff_eq!(a[i], b[i], epsilon = EPS);
    }
}

fn approx_eq3(a: Vec3, b: Vec3) {
    for i in 0..3 {
        assert_abs_diff_eq!(a[i], b[i], epsilon = EPS);
    }
}

#[test]
fn layout_is_column_major() {
    let m = Mat4::from_rows([
        [1.0, 2.0, 3.0, 4.0],
        [5.0, 6.0, 7.0, 8.0],
        [9.0, 10.0, 11.0, 12.0],
        [13.0, 14.0, 15.0, 16.0],
    ]);
    assert_eq!(m.to_array()[1], 5.0);
    assert_eq!(m.at(1, 0), 5.0);
    assert_eq!(m.row(0), Vec4::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(m.col(0), Vec4::new(1.0, 5.0, 9.0, 13.0));
    assert_eq!(Mat4::new(m.to_array()), m);
    assert_eq!(Mat4::from(m.to_array()), m);
}

#[test]
fn set_writes_row_col() {
    let mut m = Mat4::<f64>::zero();
    m.set(2, 3, 7.5);
    assert_eq!(m.at(2, 3), 7.5);
    assert_eq!(m.to_array()[14], 7.5);
}

#[test]
fn identity_and_default() {
    let id = Mat4::<f64>::identity();
    assert!(id.is_identity());
    assert_eq!(Mat4::<f64>::default(), id);
    assert!(!Mat4::<f64>::zero().is_identity());
}

#[test]
fn mul_operator_matches_method() {
    let s = Mat4::scale(&Vec3::new(2.0, 3.0, 4.0));
    let r = Mat4::rotation_x(FRAC_PI_4);
    assert_eq!(r * s, r.multiply(&s));
    assert_eq!(r * &s, r.multiply(&s));
    assert_eq!(s * r, s.multiply(&r));

    let mut a = r;
    a *= s;
    assert_eq!(a, r * s);
    let mut b = r;
    b *= &s;
    assert_eq!(b, r * s);
}

#[test]
fn composition_applies_right_operand_first() {
    let t = Mat4::translation(&Vec3::new(1.0, 0.0, 0.0));
    let s = Mat4::scale(&Vec3::splat(2.0));
    let p = Point3::new(1.0, 1.0, 1.0);
    assert_eq!((t * s).transform_point(&p), Point3::new(3.0, 2.0, 2.0));
    assert_eq!((s * t).transform_point(&p), Point3::new(4.0, 2.0, 2.0));
}

#[test]
fn points_translate_directions_do_not() {
    let m = Mat4::translation(&Vec3::new(5.0, -3.0, 2.0));
    assert_eq!(
        m.transform_point(&Point3::new(1.0, 1.0, 1.0)),
        Point3::new(6.0, -2.0, 3.0)
    );
    assert_eq!(
        m.transform_direction(&Vec3::new(1.0, 1.0, 1.0)),
        Vec3::new(1.0, 1.0, 1.0)
    );
    assert_eq!(
        m * Vec4::new(0.0, 0.0, 0.0, 1.0),
        Vec4::new(5.0, -3.0, 2.0, 1.0)
    );
}

#[test]
fn axis_rotations_follow_right_hand_rule() {
    approx_eq3(
        Mat4::rotation_z(FRAC_PI_2).transform_direction(&Vec3::unit_x()),
        Vec3::unit_y(),
    );
    approx_eq3(
        Mat4::rotation_y(FRAC_PI_2).transform_direction(&Vec3::unit_z()),
        Vec3::unit_x(),
    );
    approx_eq3(
        Mat4::rotation_x(FRAC_PI_2).transform_direction(&Vec3::unit_y()),
        Vec3::unit_z(),
    );
}

#[test]
fn from_quat_matches_axis_rotations() {
    for angle in [FRAC_PI_4, FRAC_PI_3, 1.0] {
        approx_eq16(
            Mat4::from_quat(&Quat::from_axis_angle(Vec3::unit_x(), angle)),
            Mat4::rotation_x(angle),
        );
        approx_eq16(
            Mat4::from_quat(&Quat::from_axis_angle(Vec3::unit_y(), angle)),
            Mat4::rotation_y(angle),
        );
        approx_eq16(
            Mat4::from_quat(&Quat::from_axis_angle(Vec3::unit_z(), angle)),
            Mat4::rotation_z(angle),
        );
    }
}

#[test]
fn transpose_swaps_rows_and_columns() {
    let m = Mat4::from_rows([
        [1.0, 2.0, 3.0, 4.0],
        [5.0, 6.0, 7.0, 8.0],
        [9.0, 10.0, 11.0, 12.0],
        [13.0, 14.0, 15.0, 16.0],
    ]);
    let t = m.transpose();
    for r in 0..4 {
        for c in 0..4 {
            assert_eq!(t.at(r, c), m.at(c, r));
        }
    }
    assert_eq!(t.transpose(), m);
}

#[test]
fn inverse_of_rigid_transform() {
    let m = Mat4::translation(&Vec3::new(3.0, -1.0, 2.0))
        * Mat4::from_quat(&Quat::from_euler(0.3, 0.7, -0.2))
        * Mat4::scale(&Vec3::new(2.0, 0.5, 3.0));
    approx_eq16(m * m.inverse(), Mat4::identity());
    approx_eq16(m.inverse() * m, Mat4::identity());
    assert_eq!(m.try_inverse(), Ok(m.inverse()));
}

#[test]
fn tiny_scale_still_inverts() {
    let m = Mat4::scale(&Vec3::splat(0.005));
    let inv = m.try_inverse().expect("small but non-zero scale is invertible");
    approx_eq16(inv, Mat4::scale(&Vec3::splat(200.0)));
}

#[test]
fn singular_matrices_are_rejected() {
    assert_eq!(
        Mat4::<f64>::zero().try_inverse(),
        Err(MathError::SingularMatrix)
    );
    let flat = Mat4::scale(&Vec3::new(1.0, 1.0, 0.0));
    assert_eq!(flat.determinant(), 0.0);
    assert_eq!(flat.try_inverse(), Err(MathError::SingularMatrix));

    let mut nan = Mat4::<f64>::identity();
    nan.set(0, 0, f64::NAN);
    assert_eq!(nan.try_inverse(), Err(MathError::SingularMatrix));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "singular")]
fn inverting_singular_violates_contract() {
    let _ = Mat4::<f64>::zero().inverse();
}

#[test]
fn determinant_of_rotation_is_one() {
    let r = Mat4::from_quat(&Quat::from_euler(1.0, -0.5, 0.25));
    assert_abs_diff_eq!(r.determinant(), 1.0, epsilon = EPS);
}

#[test]
fn perspective_matrices_map_near_and_far_planes() {
    let (near, far) = (0.1, 100.0);
    let lh = Mat4::perspective_lh(FRAC_PI_2, 1.5, near, far);
    assert_abs_diff_eq!(lh.at(1, 1), 1.0, epsilon = EPS);
    assert_abs_diff_eq!(lh.at(0, 0), 1.0 / 1.5, epsilon = EPS);
    assert_eq!(lh.at(3, 2), 1.0);
    assert_eq!(lh.at(3, 3), 0.0);

    let clip = lh * Vec4::new(0.0, 0.0, near, 1.0);
    assert_abs_diff_eq!(clip.z() / clip.w(), 0.0, epsilon = 1e-9);
    let clip = lh * Vec4::new(0.0, 0.0, far, 1.0);
    assert_abs_diff_eq!(clip.z() / clip.w(), 1.0, epsilon = 1e-9);

    let rh = Mat4::perspective_rh(FRAC_PI_2, 1.5, near, far);
    assert_eq!(rh.at(3, 2), -1.0);
    let clip = rh * Vec4::new(0.0, 0.0, -near, 1.0);
    assert_abs_diff_eq!(clip.z() / clip.w(), 0.0, epsilon = 1e-9);
    let clip = rh * Vec4::new(0.0, 0.0, -far, 1.0);
    assert_abs_diff_eq!(clip.z() / clip.w(), 1.0, epsilon = 1e-9);
}

#[test]
fn approx_eq_tolerates_rounding() {
    let a = Mat4::rotation_z(FRAC_PI_2) * Mat4::rotation_z(-FRAC_PI_2);
    assert!(a.approx_eq(&Mat4::identity(), EPS));
    assert!(!Mat4::<f64>::zero().approx_eq(&Mat4::identity(), 0.5));
}
