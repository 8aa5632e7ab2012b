use hullbound3d::shape::{
    Box2d, ConvexHull, Cuboid, Shape, ShapeError, ShapeFlags, ShapeType, SharedShape, StaticPlane,
};
use num_traits::FromPrimitive;

#[test]
fn flags_table() {
    assert_eq!(
        ShapeType::Cuboid.flags(),
        ShapeFlags::POLYHEDRAL | ShapeFlags::CONVEX
    );
    assert_eq!(
        ShapeType::Box2d.flags(),
        ShapeFlags::POLYHEDRAL | ShapeFlags::CONVEX | ShapeFlags::CONVEX_2D
    );
    assert_eq!(
        ShapeType::ConvexHull.flags(),
        ShapeFlags::POLYHEDRAL | ShapeFlags::CONVEX
    );
    assert_eq!(
        ShapeType::StaticPlane.flags(),
        ShapeFlags::CONCAVE | ShapeFlags::INFINITE | ShapeFlags::NON_MOVING
    );
    assert_eq!(ShapeType::Compound.flags(), ShapeFlags::COMPOUND);
    assert_eq!(ShapeType::Custom.flags(), ShapeFlags::empty());
}

#[test]
fn convex_hull_capabilities() {
    let hull = ConvexHull::default();

    assert!(hull.is_polyhedral());
    assert!(hull.is_convex());
    assert!(!hull.is_convex_2d());
    assert!(!hull.is_concave());
    assert!(!hull.is_compound());
    assert!(!hull.is_infinite());
    assert!(!hull.is_soft_body());
    assert!(!hull.is_non_moving());
    assert!(hull.as_convex_shape().is_some());
    assert!(hull.as_polyhedral_shape().is_some());
}

#[test]
fn sibling_capabilities() {
    let box2d = Box2d::default();
    assert!(box2d.is_convex_2d() && box2d.is_polyhedral());

    let plane = StaticPlane::default();
    assert!(plane.is_concave() && plane.is_infinite() && plane.is_non_moving());
    assert!(!plane.is_convex());
    assert!(plane.as_convex_shape().is_none());
    assert!(plane.as_polyhedral_shape().is_none());

    let cuboid = Cuboid::default();
    assert_eq!(cuboid.flags(), ShapeType::ConvexHull.flags());
}

#[test]
fn shape_type_from_numeric_tag() {
    assert_eq!(ShapeType::from_u32(0), Some(ShapeType::Cuboid));
    assert_eq!(ShapeType::from_u32(2), Some(ShapeType::ConvexHull));
    assert_eq!(ShapeType::from_u32(5), Some(ShapeType::Custom));
    assert_eq!(ShapeType::from_u32(6), None);
}

#[test]
fn dynamic_construction() {
    for shape_type in [
        ShapeType::Cuboid,
        ShapeType::Box2d,
        ShapeType::ConvexHull,
        ShapeType::StaticPlane,
    ] {
        let shape = SharedShape::from_type(shape_type).unwrap();
        assert_eq!(shape.shape_type(), shape_type);
        assert_eq!(shape.flags(), shape_type.flags());
    }

    assert_eq!(
        SharedShape::from_type(ShapeType::Custom).unwrap_err(),
        ShapeError::AbstractInstantiation(ShapeType::Custom)
    );
    assert_eq!(
        SharedShape::from_type(ShapeType::Compound).unwrap_err(),
        ShapeError::AbstractInstantiation(ShapeType::Compound)
    );
}

#[test]
fn downcasting_shared_shapes() {
    let shape = SharedShape::cuboid(1.0, 2.0, 3.0);
    assert!(shape.as_cuboid().is_some());
    assert!(shape.as_convex_hull().is_none());

    let mut shared = SharedShape::convex_hull(&super::unit_cube_points());
    let other = shared.clone();
    shared.make_mut().set_margin(0.5);

    assert_eq!(shared.as_convex_hull().unwrap().margin(), 0.5);
    assert_eq!(other.as_convex_hull().unwrap().margin(), 0.0);
}
