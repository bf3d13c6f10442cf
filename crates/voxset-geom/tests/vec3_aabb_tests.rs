use proptest::prelude::*;
use voxset_geom::{Aabb, Vec3};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vec3_approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps) && approx_eq(a.z, b.z, eps)
}

#[test]
fn vec3_add_sub_mul() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-4.0, 5.0, -6.0);
    assert!(vec3_approx_eq(a + b, Vec3::new(-3.0, 7.0, -3.0), 1e-6));
    assert!(vec3_approx_eq((a + b) - a, b, 1e-6));
    assert!(vec3_approx_eq(a * 2.0, Vec3::new(2.0, 4.0, 6.0), 1e-6));
}

#[test]
fn vec3_cross_basis() {
    let i = Vec3::new(1.0, 0.0, 0.0);
    let j = Vec3::new(0.0, 1.0, 0.0);
    let k = Vec3::new(0.0, 0.0, 1.0);
    assert!(vec3_approx_eq(i.cross(j), k, 1e-6));
    assert!(vec3_approx_eq(j.cross(k), i, 1e-6));
    assert!(vec3_approx_eq(k.cross(i), j, 1e-6));
}

#[test]
fn from_cell_converts_integers() {
    assert_eq!(Vec3::from_cell(2, -1, 7), Vec3::new(2.0, -1.0, 7.0));
}

#[test]
fn aabb_from_points_spans_all() {
    let bb = Aabb::from_points([
        Vec3::new(1.0, 5.0, 0.0),
        Vec3::new(-2.0, 3.0, 4.0),
        Vec3::new(0.0, 9.0, -1.0),
    ])
    .unwrap();
    assert_eq!(bb.min, Vec3::new(-2.0, 3.0, -1.0));
    assert_eq!(bb.max, Vec3::new(1.0, 9.0, 4.0));
    assert_eq!(bb.size(), Vec3::new(3.0, 6.0, 5.0));
}

#[test]
fn aabb_from_no_points_is_none() {
    assert!(Aabb::from_points(std::iter::empty()).is_none());
}

proptest! {
    // Integer-aligned cross products stay orthogonal to their inputs.
    #[test]
    fn cross_is_orthogonal(
        ax in -64i32..64, ay in -64i32..64, az in -64i32..64,
        bx in -64i32..64, by in -64i32..64, bz in -64i32..64,
    ) {
        let a = Vec3::from_cell(ax, ay, az);
        let b = Vec3::from_cell(bx, by, bz);
        let c = a.cross(b);
        prop_assert_eq!(a.dot(c), 0.0);
        prop_assert_eq!(b.dot(c), 0.0);
    }
}
