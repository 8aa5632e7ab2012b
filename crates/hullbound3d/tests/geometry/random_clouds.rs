use hullbound3d::shape::{ConvexHull, SupportMap};
use na::{Isometry3, Point3, Vector3};

fn random_cloud(rng: &mut oorandom::Rand32, n: usize) -> Vec<Point3<f32>> {
    (0..n)
        .map(|_| {
            Point3::new(
                rng.rand_float() * 20.0 - 10.0,
                rng.rand_float() * 20.0 - 10.0,
                rng.rand_float() * 20.0 - 10.0,
            )
        })
        .collect()
}

fn random_vector(rng: &mut oorandom::Rand32) -> Vector3<f32> {
    Vector3::new(
        rng.rand_float() * 2.0 - 1.0,
        rng.rand_float() * 2.0 - 1.0,
        rng.rand_float() * 2.0 - 1.0,
    )
}

#[test]
fn fast_bounds_enclose_transformed_points() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..50 {
        let mut hull = ConvexHull::new(random_cloud(&mut rng, 30));
        hull.set_margin(rng.rand_float());
        hull.set_local_scaling(random_vector(&mut rng) * 3.0);
        let pos = Isometry3::new(random_vector(&mut rng) * 5.0, random_vector(&mut rng) * 3.0);
        let aabb = hull.bounds_fast(&pos);

        for pt in hull.scaled_points() {
            let world_pt = pos * pt;
            for i in 0..3 {
                assert!(world_pt[i] >= aabb.mins[i] && world_pt[i] <= aabb.maxs[i]);
            }
        }
    }
}

#[test]
fn support_point_maximizes_dot_product() {
    let mut rng = oorandom::Rand32::new(1234);

    for _ in 0..50 {
        let mut hull = ConvexHull::new(random_cloud(&mut rng, 40));
        hull.set_local_scaling(random_vector(&mut rng) * 2.0);
        let dir = random_vector(&mut rng);
        let support = hull.local_support_point(&dir);
        let best = hull
            .scaled_points()
            .map(|pt| pt.coords.dot(&dir))
            .fold(f32::MIN, f32::max);

        assert!((support.coords.dot(&dir) - best).abs() <= 1.0e-4);
        assert!(hull.scaled_points().any(|pt| pt == support));
    }
}
