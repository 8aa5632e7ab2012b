use crate::math::{Point, Real, Vector};

/// Computes the index of the support point of a cloud of points.
///
/// Ties are broken in favor of the point with the lowest index. Returns `None` if
/// `points` is empty.
#[inline]
pub fn point_cloud_support_point_id<I>(dir: &Vector<Real>, points: I) -> Option<usize>
where
    I: IntoIterator<Item = Point<Real>>,
{
    let mut points = points.into_iter();
    let mut best_dot = points.next()?.coords.dot(dir);
    let mut best_pt = 0;

    for (i, p) in points.enumerate() {
        let dot = p.coords.dot(dir);

        if dot > best_dot {
            best_dot = dot;
            best_pt = i + 1;
        }
    }

    Some(best_pt)
}

/// Computes the support point of a cloud of points.
///
/// Returns the origin if `points` is empty.
#[inline]
pub fn point_cloud_support_point(dir: &Vector<Real>, points: &[Point<Real>]) -> Point<Real> {
    point_cloud_support_point_id(dir, points.iter().copied())
        .map_or_else(Point::origin, |id| points[id])
}
