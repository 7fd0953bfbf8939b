// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use warp_geom::Rect;
use warp_math::{Point2, Vec2};

#[test]
fn size_and_area() {
    let r = Rect::new(Point2::new(1.0, 2.0), Point2::new(4.0, 6.0));
    assert_eq!(r.min(), Point2::new(1.0, 2.0));
    assert_eq!(r.max(), Point2::new(4.0, 6.0));
    assert_eq!(r.size(), Vec2::new(3.0, 4.0));
    assert_eq!(r.area(), 12.0);
}

#[test]
fn contains_is_inclusive() {
    let r = Rect::new(Point2::new(0.0, 0.0), Point2::new(2.0, 1.0));
    assert!(r.contains(&Point2::new(1.0, 0.5)));
    assert!(r.contains(&Point2::new(2.0, 1.0)));
    assert!(r.contains(&Point2::new(0.0, 0.0)));
    assert!(!r.contains(&Point2::new(2.5, 0.5)));
    assert!(!r.contains(&Point2::new(1.0, -0.01)));
}

#[test]
fn union_covers_both() {
    let a = Rect::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
    let b = Rect::new(Point2::new(-2.0, 0.5), Point2::new(0.5, 3.0));
    let u = a.union(&b);
    assert_eq!(u, Rect::new(Point2::new(-2.0, 0.0), Point2::new(1.0, 3.0)));
    assert!(u.contains(&Point2::new(-1.0, 2.0)));
    assert_eq!(u.area(), 9.0);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "invalid Rect")]
fn inverted_corners_violate_contract() {
    let _ = Rect::new(Point2::new(1.0_f64, 0.0), Point2::new(0.0, 1.0));
}
