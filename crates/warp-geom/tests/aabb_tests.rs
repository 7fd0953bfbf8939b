// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use warp_geom::Aabb;
use warp_math::{Mat4, Point3, Vec3};

fn unit_box() -> Aabb {
    Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0))
}

#[test]
fn accessors_and_measures() {
    let b = Aabb::new(Point3::new(-1.0, 0.0, 2.0), Point3::new(1.0, 3.0, 6.0));
    assert_eq!(b.min(), Point3::new(-1.0, 0.0, 2.0));
    assert_eq!(b.max(), Point3::new(1.0, 3.0, 6.0));
    assert_eq!(b.size(), Vec3::new(2.0, 3.0, 4.0));
    assert_eq!(b.center(), Point3::new(0.0, 1.5, 4.0));
    // 2 * (2*3 + 3*4 + 4*2)
    assert_eq!(b.surface_area(), 52.0);
}

#[test]
fn from_center_half_extents_matches_new() {
    let b =
        Aabb::from_center_half_extents(Point3::new(1.0, 1.0, 1.0), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(
        b,
        Aabb::new(Point3::new(0.0, -1.0, -2.0), Point3::new(2.0, 3.0, 4.0))
    );
}

#[test]
fn from_points_is_tight() {
    let b = Aabb::from_points(&[
        Point3::new(1.0, 5.0, -2.0),
        Point3::new(-3.0, 0.0, 4.0),
        Point3::new(0.0, 2.0, 0.0),
    ]);
    assert_eq!(b.min(), Point3::new(-3.0, 0.0, -2.0));
    assert_eq!(b.max(), Point3::new(1.0, 5.0, 4.0));

    let single = Aabb::from_points(&[Point3::new(2.0, 2.0, 2.0)]);
    assert_eq!(single.size(), Vec3::zero());
}

#[test]
fn contains_is_inclusive() {
    let b = unit_box();
    assert!(b.contains(&Point3::new(0.5, 0.5, 0.5)));
    assert!(b.contains(&Point3::new(0.0, 1.0, 0.0)));
    assert!(!b.contains(&Point3::new(1.0001, 0.5, 0.5)));
    assert!(!b.contains(&Point3::new(0.5, -0.1, 0.5)));
}

#[test]
fn overlaps_touching_faces() {
    let a = unit_box();
    let touching = Aabb::new(Point3::new(1.0, 0.0, 0.0), Point3::new(2.0, 1.0, 1.0));
    let apart = Aabb::new(Point3::new(1.5, 0.0, 0.0), Point3::new(2.0, 1.0, 1.0));
    assert!(a.overlaps(&touching));
    assert!(touching.overlaps(&a));
    assert!(!a.overlaps(&apart));
}

#[test]
fn union_and_inflate() {
    let a = unit_box();
    let b = Aabb::new(Point3::new(2.0, -1.0, 0.5), Point3::new(3.0, 0.5, 0.75));
    let u = a.union(&b);
    assert_eq!(u.min(), Point3::new(0.0, -1.0, 0.0));
    assert_eq!(u.max(), Point3::new(3.0, 1.0, 1.0));
    assert_eq!(u, b.union(&a));

    let grown = a.inflate(0.5);
    assert_eq!(grown.min(), Point3::splat(-0.5));
    assert_eq!(grown.max(), Point3::splat(1.5));
}

#[test]
fn transformed_translates_and_scales() {
    let m = Mat4::translation(&Vec3::new(10.0, 0.0, 0.0))
        * Mat4::scale(&Vec3::new(2.0, 1.0, -1.0));
    let out = unit_box().transformed(&m);
    assert_eq!(out.min(), Point3::new(10.0, 0.0, -1.0));
    assert_eq!(out.max(), Point3::new(12.0, 1.0, 0.0));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "invalid AABB")]
fn inverted_corners_violate_contract() {
    let _ = Aabb::new(Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 1.0));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "at least one point")]
fn empty_point_set_violates_contract() {
    let _ = Aabb::<f64>::from_points(&[]);
}
