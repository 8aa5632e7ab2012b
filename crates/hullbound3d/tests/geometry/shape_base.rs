use super::unit_cube_points;
use approx::assert_relative_eq;
use hullbound3d::shape::{ConvexHull, Cuboid, Shape, DEFAULT_CONTACT_THRESHOLD_FACTOR};
use na::{Isometry3, Point3, Vector3};

#[test]
fn bounding_sphere_of_unit_cube() {
    let hull = ConvexHull::new(unit_cube_points());
    let sphere = hull.compute_bounding_sphere();
    let radius = 3.0f32.sqrt() * 1.08;

    assert_relative_eq!(sphere.center, Point3::origin(), epsilon = 1.0e-6);
    assert_relative_eq!(sphere.radius, radius, epsilon = 1.0e-5);
    assert_relative_eq!(hull.angular_motion_disc(), radius, epsilon = 1.0e-5);
    assert_relative_eq!(
        hull.contact_breaking_threshold(DEFAULT_CONTACT_THRESHOLD_FACTOR),
        radius * 0.02,
        epsilon = 1.0e-6
    );
}

#[test]
fn angular_motion_disc_accounts_for_offset() {
    let hull = ConvexHull::new(unit_cube_points().into_iter().map(|p| p + Vector3::x() * 3.0));
    let sphere = hull.compute_bounding_sphere();

    assert_relative_eq!(
        hull.angular_motion_disc(),
        3.0 + sphere.radius,
        epsilon = 1.0e-5
    );
}

#[test]
fn temporal_aabb_sweeps_linear_motion() {
    let hull = ConvexHull::new(unit_cube_points());
    let pos = Isometry3::identity();
    let aabb = hull.compute_temporal_aabb(
        &pos,
        &Vector3::new(1.0, 0.0, -2.0),
        &Vector3::zeros(),
        0.5,
    );

    assert_relative_eq!(aabb.mins, Point3::new(-1.08, -1.08, -2.08), epsilon = 1.0e-5);
    assert_relative_eq!(aabb.maxs, Point3::new(1.58, 1.08, 1.08), epsilon = 1.0e-5);
}

#[test]
fn temporal_aabb_grows_with_angular_motion() {
    let hull = ConvexHull::new(unit_cube_points());
    let pos = Isometry3::identity();
    let angvel = Vector3::new(0.0, 2.0, 0.0);
    let aabb = hull.compute_temporal_aabb(&pos, &Vector3::zeros(), &angvel, 0.1);
    let growth = 2.0 * hull.angular_motion_disc() * 0.1;

    assert_relative_eq!(aabb.maxs.x, 1.08 + growth, epsilon = 1.0e-5);
    assert_relative_eq!(aabb.mins.y, -1.08 - growth, epsilon = 1.0e-5);
}

#[test]
fn box_approximated_inertia() {
    let cuboid = Cuboid::default();
    let inertia = cuboid.local_inertia(12.0);
    let l = 2.08f32;
    assert_relative_eq!(inertia, Vector3::repeat(2.0 * l * l), epsilon = 1.0e-4);

    let mut hull = ConvexHull::new(unit_cube_points());
    let l = 2.16f32;
    assert_relative_eq!(
        hull.local_inertia(12.0),
        Vector3::repeat(2.0 * l * l),
        epsilon = 1.0e-4
    );

    hull.set_margin(0.1);
    let l = 2.0 * (1.18f32 + 0.1);
    assert_relative_eq!(
        hull.local_inertia(12.0),
        Vector3::repeat(2.0 * l * l),
        epsilon = 1.0e-4
    );
}

#[test]
fn clone_dyn_preserves_state() {
    let mut hull = ConvexHull::new(unit_cube_points());
    hull.set_margin(0.2);
    hull.set_local_scaling(Vector3::repeat(3.0));

    let cloned = hull.clone_dyn();
    let cloned_hull = cloned.as_convex_hull().unwrap();
    assert_eq!(cloned_hull, &hull);
    assert_eq!(cloned.local_scaling(), Vector3::repeat(3.0));
}

#[test]
fn rolling_friction_is_isotropic_by_default() {
    let hull = ConvexHull::new(unit_cube_points());
    let cuboid = Cuboid::new(Vector3::new(1.0, 2.0, 3.0));

    assert_eq!(hull.anisotropic_rolling_friction_direction(), Vector3::repeat(1.0));
    assert_eq!(cuboid.anisotropic_rolling_friction_direction(), Vector3::repeat(1.0));
}
