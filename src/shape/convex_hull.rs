use crate::bounding_volume::{self, Aabb};
use crate::math::{Point, Real, Vector};
use crate::shape::{ConvexShape, PolyhedralShape, ShapeError, SupportMap};
use crate::utils;

/// The convex hull of a set of points.
///
/// Points are stored exactly as inserted and are never reordered nor deduplicated. The local
/// scaling is applied lazily: [`Self::unscaled_points`] returns the points as given while every
/// geometric query works on the scaled points. The local AABB of the scaled points is cached
/// and refreshed whenever the points or the scaling change.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use hullbound3d::math::{Isometry, Point, Vector};
/// use hullbound3d::shape::ConvexHull;
///
/// let mut hull = ConvexHull::new([
///     Point::new(-1.0, -1.0, -1.0),
///     Point::new(1.0, 1.0, 1.0),
/// ]);
/// hull.set_local_scaling(Vector::repeat(2.0));
///
/// let aabb = hull.bounds_fast(&Isometry::identity());
/// assert!((aabb.maxs.x - 2.04).abs() < 1.0e-5);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct ConvexHull {
    points: Vec<Point<Real>>,
    local_scaling: Vector<Real>,
    margin: Real,
    local_aabb: Aabb,
}

impl Default for ConvexHull {
    fn default() -> Self {
        Self::new(core::iter::empty())
    }
}

impl ConvexHull {
    /// Creates the convex hull of the given points, kept in iteration order.
    pub fn new<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        let mut hull = ConvexHull {
            points: points.into_iter().collect(),
            local_scaling: Vector::repeat(1.0),
            margin: 0.0,
            local_aabb: Aabb::new_invalid(),
        };
        hull.recalc_local_aabb();
        hull
    }

    /// Appends a point to this hull and refreshes the cached local AABB.
    pub fn add_point(&mut self, point: Point<Real>) {
        self.points.push(point);
        self.recalc_local_aabb();
    }

    /// Appends a point to this hull without refreshing the cached local AABB.
    ///
    /// Call [`Self::recalc_local_aabb`] once all the points are added.
    pub fn add_point_deferred(&mut self, point: Point<Real>) {
        self.points.push(point);
    }

    /// The number of points of this hull.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// The points of this hull, as inserted and without local scaling.
    #[inline]
    pub fn unscaled_points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The `i`-th point of this hull, with local scaling applied.
    pub fn scaled_point(&self, i: usize) -> Result<Point<Real>, ShapeError> {
        let i = ShapeError::check_index(i, self.points.len())?;
        Ok(self.scale_point(&self.points[i]))
    }

    /// An iterator through the points of this hull, with local scaling applied.
    pub fn scaled_points(&self) -> impl ExactSizeIterator<Item = Point<Real>> + '_ {
        self.points.iter().map(move |pt| self.scale_point(pt))
    }

    /// The collision margin of this hull.
    #[inline]
    pub fn margin(&self) -> Real {
        self.margin
    }

    /// Sets the collision margin of this hull.
    ///
    /// A negative margin shrinks the bounds of the hull.
    #[inline]
    pub fn set_margin(&mut self, margin: Real) {
        self.margin = margin;
    }

    /// The scaling factors applied to each local axis of this hull.
    #[inline]
    pub fn local_scaling(&self) -> &Vector<Real> {
        &self.local_scaling
    }

    /// Sets the scaling factors of this hull and refreshes the cached local AABB.
    pub fn set_local_scaling(&mut self, scaling: Vector<Real>) {
        self.local_scaling = scaling;
        self.recalc_local_aabb();
    }

    /// The cached AABB of the scaled points, margin excluded.
    ///
    /// The AABB of an empty hull is [`Aabb::new_invalid`].
    #[inline]
    pub fn local_aabb(&self) -> &Aabb {
        &self.local_aabb
    }

    /// Recomputes the cached local AABB from the current points and scaling.
    pub fn recalc_local_aabb(&mut self) {
        if self.points.is_empty() {
            log::debug!("Computing the local AABB of an empty convex hull.");
            self.local_aabb = Aabb::new_invalid();
        } else {
            self.local_aabb = bounding_volume::details::local_support_map_aabb(self);
        }
    }

    /// The scaled point with the largest dot product with `dir`.
    ///
    /// Ties are resolved in favor of the point inserted first. The origin is returned if the
    /// hull is empty.
    pub fn local_supporting_vertex(&self, dir: &Vector<Real>) -> Point<Real> {
        match utils::point_cloud_support_point_id(dir, self.scaled_points()) {
            Some(id) => self.scale_point(&self.points[id]),
            None => Point::origin(),
        }
    }

    /// Same as [`Self::local_supporting_vertex`], pushed outward along `dir` by the margin
    /// and the fixed tolerance.
    pub fn local_supporting_vertex_with_margin(&self, dir: &Vector<Real>) -> Point<Real> {
        self.local_support_point_with_margin(dir)
    }

    #[inline]
    fn scale_point(&self, pt: &Point<Real>) -> Point<Real> {
        pt.coords.component_mul(&self.local_scaling).into()
    }
}

impl FromIterator<Point<Real>> for ConvexHull {
    fn from_iter<I: IntoIterator<Item = Point<Real>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Extend<Point<Real>> for ConvexHull {
    fn extend<I: IntoIterator<Item = Point<Real>>>(&mut self, iter: I) {
        self.points.extend(iter);
        self.recalc_local_aabb();
    }
}

impl SupportMap for ConvexHull {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.local_supporting_vertex(dir)
    }
}

impl ConvexShape for ConvexHull {}

impl PolyhedralShape for ConvexHull {
    fn num_vertices(&self) -> usize {
        self.num_points()
    }

    fn num_edges(&self) -> usize {
        self.num_points()
    }

    fn vertex(&self, i: usize) -> Result<Point<Real>, ShapeError> {
        self.scaled_point(i)
    }

    fn edge(&self, i: usize) -> Result<(Point<Real>, Point<Real>), ShapeError> {
        let n = self.num_points();
        let i = ShapeError::check_index(i, n)?;
        Ok((
            self.scale_point(&self.points[i]),
            self.scale_point(&self.points[(i + 1) % n]),
        ))
    }
}
