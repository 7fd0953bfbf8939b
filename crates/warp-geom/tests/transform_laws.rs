// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use proptest::prelude::*;
use warp_geom::{Ray, Transform};
use warp_math::{Mat4, Normal3, Point3, Quat, Vec3};

fn vec3(range: core::ops::Range<f64>) -> impl Strategy<Value = Vec3> {
    prop::array::uniform3(range).prop_map(Vec3::from)
}

fn scale_component() -> impl Strategy<Value = f64> {
    (0.1..4.0_f64, any::<bool>()).prop_map(|(s, flip)| if flip { -s } else { s })
}

fn transform() -> impl Strategy<Value = Transform> {
    (
        vec3(-50.0..50.0),
        vec3(-3.0..3.0),
        prop::array::uniform3(scale_component()),
    )
        .prop_map(|(t, euler, s)| Transform::new(t, Quat::from_euler_vec(&euler), Vec3::from(s)))
}

proptest! {
    #[test]
    fn inversed_swaps_cached_matrices(t in transform()) {
        let inv = t.inversed();
        prop_assert_eq!(inv.matrix(), t.matrix_inverse());
        prop_assert_eq!(inv.matrix_inverse(), t.matrix());
    }

    #[test]
    fn cached_inverse_is_an_inverse(t in transform()) {
        let product = t.matrix() * t.matrix_inverse();
        prop_assert!(product.approx_eq(&Mat4::identity(), 1e-9), "{:?}", product);
    }

    #[test]
    fn inversed_undoes_point_transform(t in transform(), p in vec3(-10.0..10.0)) {
        let p = Point3::from_vector(p);
        let back = t.inversed().apply(&t.apply(&p));
        prop_assert!(back.approx_eq(&p, 1e-8), "{:?} vs {:?}", back, p);
    }

    #[test]
    fn normals_stay_perpendicular_to_tangents(t in transform(), n in vec3(-1.0..1.0)) {
        prop_assume!(n.magnitude() > 0.1);
        // Any vector perpendicular to n lies in the surface it describes.
        let helper = if n.x().abs() < 0.5 { Vec3::unit_x() } else { Vec3::unit_y() };
        let tangent = n.cross(&helper);
        let normal = t.apply(&Normal3::from(n)).normalized();
        let moved = t.apply(&tangent).normalized();
        prop_assert!(normal.dot(&moved).abs() <= 1e-9);
    }

    #[test]
    fn transformed_rays_have_unit_direction(t in transform(), d in vec3(-1.0..1.0)) {
        prop_assume!(d.magnitude() > 0.1);
        let ray = t.apply(&Ray::new(Point3::origin(), d));
        prop_assert!((ray.direction().magnitude() - 1.0).abs() <= 1e-12);
    }
}
