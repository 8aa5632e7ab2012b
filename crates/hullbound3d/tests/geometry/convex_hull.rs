use super::unit_cube_points;
use approx::assert_relative_eq;
use hullbound3d::shape::{ConvexHull, ConvexShape, PolyhedralShape, ShapeError, SupportMap};
use na::{Isometry3, Point3, Vector3};

#[test]
fn hull_construction_keeps_every_point() {
    let points = unit_cube_points();
    let array: [Point3<f32>; 8] = [
        points[0], points[1], points[2], points[3], points[4], points[5], points[6], points[7],
    ];

    let from_vec = ConvexHull::new(points.clone());
    let from_array = ConvexHull::new(array);
    let from_slice = ConvexHull::new(points.iter().copied());
    let collected: ConvexHull = points.iter().copied().collect();
    let mut incremental = ConvexHull::default();
    assert_eq!(incremental.num_points(), 0);

    for pt in &points {
        incremental.add_point(*pt);
    }

    for hull in [&from_vec, &from_array, &from_slice, &collected, &incremental] {
        assert_eq!(hull.num_points(), 8);
        assert_eq!(hull.num_vertices(), 8);
        assert_eq!(hull.unscaled_points(), &points[..]);
    }

    assert_eq!(from_vec, incremental);
}

#[test]
fn extend_appends_in_order() {
    let points = unit_cube_points();
    let mut hull = ConvexHull::new(points[..4].iter().copied());
    hull.extend(points[4..].iter().copied());

    assert_eq!(hull.unscaled_points(), &points[..]);
    assert_eq!(hull.local_aabb().maxs, Point3::new(1.0, 1.0, 1.0));
}

#[test]
fn unscaled_points_survive_scaling() {
    let points = unit_cube_points();
    let mut hull = ConvexHull::new(points.clone());
    hull.set_local_scaling(Vector3::new(2.0, 3.0, 4.0));

    for (i, pt) in points.iter().enumerate() {
        assert_eq!(hull.unscaled_points()[i], *pt);
        assert_eq!(
            hull.scaled_point(i).unwrap(),
            Point3::new(pt.x * 2.0, pt.y * 3.0, pt.z * 4.0)
        );
    }

    assert_eq!(
        hull.scaled_point(8),
        Err(ShapeError::IndexOutOfRange { index: 8, len: 8 })
    );
    assert_eq!(hull.scaled_points().len(), 8);
}

#[test]
fn supporting_vertex_of_unit_cube() {
    let hull = ConvexHull::new(unit_cube_points());
    let dir = Vector3::new(-1.0, -1.0, -1.0);

    assert_eq!(
        hull.local_supporting_vertex(&dir),
        Point3::new(-1.0, -1.0, -1.0)
    );
    assert_eq!(
        hull.local_supporting_vertex(&dir),
        hull.local_support_point(&dir)
    );
    // A null direction yields the first point.
    assert_eq!(
        hull.local_supporting_vertex(&Vector3::zeros()),
        hull.unscaled_points()[0]
    );
    // (1, 0, 0) is maximized by points 4 to 7: the first one wins.
    assert_eq!(
        hull.local_supporting_vertex(&Vector3::x()),
        Point3::new(1.0, 1.0, 1.0)
    );
}

#[test]
fn supporting_vertex_with_margin() {
    let mut hull = ConvexHull::new(unit_cube_points());
    hull.set_margin(0.06);

    let pt = hull.local_supporting_vertex_with_margin(&Vector3::new(0.0, 0.0, 2.0));
    assert_relative_eq!(pt, Point3::new(-1.0, -1.0, 1.1), epsilon = 1.0e-6);

    // A null direction is pushed along (-1, -1, -1).
    let pt = hull.local_supporting_vertex_with_margin(&Vector3::zeros());
    let push = 0.1 / 3.0f32.sqrt();
    assert_relative_eq!(
        pt,
        Point3::new(-1.0 - push, -1.0 - push, -1.0 - push),
        epsilon = 1.0e-6
    );
}

#[test]
fn projection_of_unit_cube() {
    let hull = ConvexHull::new(unit_cube_points());
    let (min, max) = hull.project(&Isometry3::identity(), &Vector3::x());

    assert_relative_eq!(min, -1.04, epsilon = 1.0e-6);
    assert_relative_eq!(max, 1.04, epsilon = 1.0e-6);

    let proj = hull.project_with_witnesses(&Isometry3::translation(3.0, 0.0, 0.0), &Vector3::x());
    assert_relative_eq!(proj.min, 1.96, epsilon = 1.0e-5);
    assert_relative_eq!(proj.max, 4.04, epsilon = 1.0e-5);
    assert_relative_eq!(proj.witness_min.x, 1.96, epsilon = 1.0e-5);
    assert_relative_eq!(proj.witness_max.x, 4.04, epsilon = 1.0e-5);
}

#[test]
fn projection_scales_with_axis_length() {
    let hull = ConvexHull::new(unit_cube_points());
    let (min, max) = hull.project(&Isometry3::identity(), &Vector3::new(0.0, 2.0, 0.0));

    assert_relative_eq!(min, -2.08, epsilon = 1.0e-6);
    assert_relative_eq!(max, 2.08, epsilon = 1.0e-6);
}

#[test]
fn cyclic_edges() {
    let points = unit_cube_points();
    let hull = ConvexHull::new(points.clone());

    assert_eq!(hull.num_edges(), 8);
    assert_eq!(hull.edge(0).unwrap(), (points[0], points[1]));
    assert_eq!(hull.edge(7).unwrap(), (points[7], points[0]));
    assert_eq!(hull.vertex(4).unwrap(), points[4]);
    assert!(matches!(
        hull.edge(8),
        Err(ShapeError::IndexOutOfRange { index: 8, len: 8 })
    ));
}

#[test]
fn hulls_have_no_planes() {
    let hull = ConvexHull::new(unit_cube_points());

    assert_eq!(hull.num_planes(), 0);
    assert!(matches!(
        hull.plane(0),
        Err(ShapeError::CapabilityNotSupported {
            capability: "plane",
            ..
        })
    ));
    assert!(matches!(
        hull.is_inside(&Point3::origin(), 0.0),
        Err(ShapeError::CapabilityNotSupported {
            capability: "is_inside",
            ..
        })
    ));
}

#[test]
fn batched_support_matches_single_queries() {
    let mut hull = ConvexHull::new(unit_cube_points());
    hull.set_local_scaling(Vector3::new(2.0, 1.0, 0.5));
    let dirs = [
        Vector3::x(),
        -Vector3::y(),
        Vector3::new(1.0, 1.0, -1.0),
        Vector3::new(-0.3, 0.2, 0.9),
    ];

    let batch = hull.batched_local_support_points(&dirs);

    assert_eq!(batch.len(), dirs.len());
    for (dir, pt) in dirs.iter().zip(batch.iter()) {
        assert_eq!(*pt, hull.local_support_point(dir));
    }
    assert_eq!(batch[2], Point3::new(2.0, 1.0, -0.5));
    assert!(hull.batched_local_support_points(&[]).is_empty());
}

#[test]
fn hull_has_no_preferred_penetration_direction() {
    let hull = ConvexHull::new(unit_cube_points());

    assert_eq!(hull.num_preferred_penetration_directions(), 0);
    assert_eq!(
        hull.preferred_penetration_direction(0),
        Err(ShapeError::IndexOutOfRange { index: 0, len: 0 })
    );
}
