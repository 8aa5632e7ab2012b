use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DIM};
use crate::shape::SupportMap;

/// Computes the AABB of an support mapped shape.
///
/// The shape is queried for its support points along the six directions `±X`, `±Y`
/// and `±Z`.
pub fn local_support_map_aabb<G>(i: &G) -> Aabb
where
    G: SupportMap + ?Sized,
{
    let mut min = Vector::<Real>::zeros();
    let mut max = Vector::<Real>::zeros();
    let mut basis = Vector::<Real>::zeros();

    for d in 0..DIM {
        basis[d] = 1.0;
        max[d] = i.local_support_point(&basis)[d];

        basis[d] = -1.0;
        min[d] = i.local_support_point(&basis)[d];

        basis[d] = 0.0;
    }

    Aabb::new(Point::from(min), Point::from(max))
}

/// Computes the AABB of a set of points.
///
/// Returns [`Aabb::new_invalid`] if `pts` yields no point.
pub fn local_point_cloud_aabb<I>(pts: I) -> Aabb
where
    I: IntoIterator<Item = Point<Real>>,
{
    let mut aabb = Aabb::new_invalid();

    for pt in pts {
        aabb.take_point(pt);
    }

    aabb
}
