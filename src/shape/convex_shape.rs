//! Traits of convex shapes and convex polyhedra.

use crate::math::{Isometry, Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::shape::{Shape, ShapeError, SupportMap};

/// The fixed distance tolerance added to the margin of every convex shape.
pub const CONVEX_DISTANCE_MARGIN: Real = 0.04;

/// The interval covered by a shape projected on an axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisProjection {
    /// The smallest projected value.
    pub min: Real,
    /// The largest projected value.
    pub max: Real,
    /// The world-space point projecting onto `min`.
    pub witness_min: Point<Real>,
    /// The world-space point projecting onto `max`.
    pub witness_max: Point<Real>,
}

/// Trait implemented by convex shapes.
///
/// A convex shape is described by its support function, enlarged by its margin and by
/// [`CONVEX_DISTANCE_MARGIN`].
pub trait ConvexShape: Shape + SupportMap {
    /// The margin of this shape plus the fixed tolerance.
    fn margin_with_tolerance(&self) -> Real {
        self.margin() + CONVEX_DISTANCE_MARGIN
    }

    /// The support point of this shape in the direction `dir`, pushed outward by the margin
    /// and the fixed tolerance.
    ///
    /// A direction too small to be normalized is replaced by `(-1, -1, -1)` for the outward
    /// push.
    fn local_support_point_with_margin(&self, dir: &Vector<Real>) -> Point<Real> {
        let mut push_dir = *dir;

        if push_dir.norm_squared() < DEFAULT_EPSILON * DEFAULT_EPSILON {
            push_dir = Vector::repeat(-1.0);
        }

        self.local_support_point(dir) + push_dir.normalize() * self.margin_with_tolerance()
    }

    /// Projects this shape, placed at `position`, onto `axis`.
    ///
    /// Returns the `(min, max)` interval, margin and tolerance included.
    fn project(&self, position: &Isometry<Real>, axis: &Vector<Real>) -> (Real, Real) {
        let proj = self.project_with_witnesses(position, axis);
        (proj.min, proj.max)
    }

    /// Projects this shape, placed at `position`, onto `axis` and reports the points reaching
    /// each end of the interval.
    fn project_with_witnesses(
        &self,
        position: &Isometry<Real>,
        axis: &Vector<Real>,
    ) -> AxisProjection {
        let local_axis = position.inverse_transform_vector(axis);
        let mut witness_max = position * self.local_support_point_with_margin(&local_axis);
        let mut witness_min = position * self.local_support_point_with_margin(&-local_axis);
        let mut min = witness_min.coords.dot(axis);
        let mut max = witness_max.coords.dot(axis);

        if min > max {
            core::mem::swap(&mut min, &mut max);
            core::mem::swap(&mut witness_min, &mut witness_max);
        }

        AxisProjection {
            min,
            max,
            witness_min,
            witness_max,
        }
    }

    /// Evaluates the support function of this shape, margin excluded, for each direction of
    /// `dirs`.
    ///
    /// The `i`-th point of the result is the support point along `dirs[i]`.
    fn batched_local_support_points(&self, dirs: &[Vector<Real>]) -> Vec<Point<Real>> {
        dirs.iter().map(|dir| self.local_support_point(dir)).collect()
    }

    /// The number of directions this shape prefers to be separated along.
    fn num_preferred_penetration_directions(&self) -> usize {
        0
    }

    /// The `i`-th preferred penetration direction of this shape.
    fn preferred_penetration_direction(&self, i: usize) -> Result<Vector<Real>, ShapeError> {
        Err(ShapeError::IndexOutOfRange {
            index: i,
            len: self.num_preferred_penetration_directions(),
        })
    }
}

/// Trait implemented by convex polyhedra, i.e., convex shapes with enumerable vertices and
/// edges.
///
/// Vertices are exposed with the local scaling applied and without the margin.
pub trait PolyhedralShape: ConvexShape {
    /// The number of vertices of this polyhedron.
    fn num_vertices(&self) -> usize;

    /// The number of edges of this polyhedron.
    fn num_edges(&self) -> usize;

    /// The number of bounding planes this polyhedron can report.
    fn num_planes(&self) -> usize {
        0
    }

    /// The `i`-th vertex of this polyhedron.
    fn vertex(&self, i: usize) -> Result<Point<Real>, ShapeError>;

    /// The two endpoints of the `i`-th edge of this polyhedron.
    fn edge(&self, i: usize) -> Result<(Point<Real>, Point<Real>), ShapeError>;

    /// The outward normal and a point of the `i`-th bounding plane of this polyhedron.
    fn plane(&self, i: usize) -> Result<(UnitVector<Real>, Point<Real>), ShapeError> {
        let _ = i;
        Err(ShapeError::CapabilityNotSupported {
            shape_type: self.shape_type(),
            capability: "plane",
        })
    }

    /// Is `point` inside of this polyhedron, enlarged by `tolerance`?
    fn is_inside(&self, point: &Point<Real>, tolerance: Real) -> Result<bool, ShapeError> {
        let _ = (point, tolerance);
        Err(ShapeError::CapabilityNotSupported {
            shape_type: self.shape_type(),
            capability: "is_inside",
        })
    }
}

/// The signed unit axis `+X, -X, +Y, -Y, +Z, -Z` with index `i`, for `i < 6`.
pub(crate) fn signed_axis(i: usize) -> Vector<Real> {
    let mut axis = Vector::zeros();
    axis[i / 2] = if i % 2 == 0 { 1.0 } else { -1.0 };
    axis
}

/// The diagonal of the inertia tensor of a solid box with the given half-extents.
pub(crate) fn box_local_inertia(half_extents: &Vector<Real>, mass: Real) -> Vector<Real> {
    let lx = half_extents.x * 2.0;
    let ly = half_extents.y * 2.0;
    let lz = half_extents.z * 2.0;

    Vector::new(
        ly * ly + lz * lz,
        lx * lx + lz * lz,
        lx * lx + ly * ly,
    ) * (mass / 12.0)
}
