//! Property tests for the vector algebra

use lumen_math::prelude::*;
use proptest::prelude::*;

fn vec3() -> impl Strategy<Value = Vec3> {
    (-1.0e3f64..1.0e3, -1.0e3f64..1.0e3, -1.0e3f64..1.0e3).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn vec2() -> impl Strategy<Value = Vec2> {
    (-1.0e3f64..1.0e3, -1.0e3f64..1.0e3).prop_map(|(x, y)| Vec2::new(x, y))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn add_then_sub_reconstructs(v in vec3(), w in vec3()) {
        let r = v + w - w;
        prop_assert!(r.distance(v) < 1e-9, "{:?} != {:?}", r, v);
    }

    #[test]
    fn add_then_sub_reconstructs_2d(v in vec2(), w in vec2()) {
        let r = v + w - w;
        prop_assert!(r.distance(v) < 1e-9);
    }

    #[test]
    fn length_squared_matches(v in vec3()) {
        let l = v.length();
        let tolerance = 1e-9 * v.squared_length().max(1.0);
        prop_assert!((l * l - v.squared_length()).abs() <= tolerance);
    }

    #[test]
    fn length_squared_matches_2d(v in vec2()) {
        let l = v.length();
        let tolerance = 1e-9 * v.squared_length().max(1.0);
        prop_assert!((l * l - v.squared_length()).abs() <= tolerance);
    }

    #[test]
    fn cross_is_anti_commutative(a in vec3(), b in vec3()) {
        prop_assert_eq!(a.cross(b), -b.cross(a));
    }

    #[test]
    fn cross_is_orthogonal(a in vec3(), b in vec3()) {
        let c = a.cross(b);
        let scale = a.length() * b.length() * c.length();
        prop_assert!(c.dot(a).abs() <= 1e-9 * scale.max(1.0));
    }

    #[test]
    fn normalize_gives_unit_length(v in vec3()) {
        prop_assume!(v.length() > 1e-6);
        prop_assert!((v.normalize().length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn normalize_gives_unit_length_2d(v in vec2()) {
        prop_assume!(v.length() > 1e-6);
        prop_assert!((v.normalize().length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric(a in vec3(), b in vec3()) {
        prop_assert_eq!(a.squared_distance(b), b.squared_distance(a));
        prop_assert!((a.distance(b) - (a - b).length()).abs() < 1e-9);
    }
}
