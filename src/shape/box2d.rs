//! Flat box lying on the XY plane.

use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::{
    signed_axis, ConvexShape, PolyhedralShape, ShapeError, SupportMap, CONVEX_DISTANCE_MARGIN,
};
use na::Vector2;

/// A flat box lying on the local XY plane.
///
/// Its four vertices are numbered counter-clockwise, starting from the corner with negative
/// `x` and `y`. Edge `i` goes from vertex `i` to vertex `i + 1`, and plane `i` is the side
/// containing edge `i`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Box2d {
    /// The half-extents of the box along `x` and `y`, before local scaling.
    pub half_extents: Vector2<Real>,
    /// The collision margin of the box.
    pub margin: Real,
    /// The scaling factors applied to each local axis.
    pub local_scaling: Vector<Real>,
}

impl Default for Box2d {
    /// The square with half-extents `(1, 1)`.
    fn default() -> Self {
        Self::new(Vector2::repeat(1.0))
    }
}

impl Box2d {
    /// The number of vertices, edges and side planes of a flat box.
    pub const NUM_VERTICES: usize = 4;

    /// Creates a flat box from its half-extents along `x` and `y`.
    ///
    /// The sign of the half-extents is ignored: geometric queries use their absolute values.
    #[inline]
    pub fn new(half_extents: Vector2<Real>) -> Self {
        Box2d {
            half_extents,
            margin: 0.0,
            local_scaling: Vector::repeat(1.0),
        }
    }

    /// The half-extents of this box once its local scaling is applied.
    #[inline]
    pub fn scaled_half_extents(&self) -> Vector2<Real> {
        self.half_extents
            .component_mul(&self.local_scaling.xy())
            .abs()
    }

    /// The scaled half-extents enlarged by the margin and the fixed tolerance.
    ///
    /// The `z` component is the margin and tolerance alone.
    #[inline]
    pub fn half_extents_with_margin(&self) -> Vector<Real> {
        self.scaled_half_extents().push(0.0) + Vector::repeat(self.margin + CONVEX_DISTANCE_MARGIN)
    }

    fn vertex_from_id(&self, id: usize) -> Point<Real> {
        let he = self.scaled_half_extents();

        match id % Self::NUM_VERTICES {
            0 => Point::new(-he.x, -he.y, 0.0),
            1 => Point::new(he.x, -he.y, 0.0),
            2 => Point::new(he.x, he.y, 0.0),
            _ => Point::new(-he.x, he.y, 0.0),
        }
    }
}

impl SupportMap for Box2d {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let he = self.scaled_half_extents();
        Point::new(
            if dir.x < 0.0 { -he.x } else { he.x },
            if dir.y < 0.0 { -he.y } else { he.y },
            0.0,
        )
    }
}

impl ConvexShape for Box2d {
    fn num_preferred_penetration_directions(&self) -> usize {
        6
    }

    fn preferred_penetration_direction(&self, i: usize) -> Result<Vector<Real>, ShapeError> {
        let i = ShapeError::check_index(i, 6)?;
        Ok(signed_axis(i))
    }
}

impl PolyhedralShape for Box2d {
    fn num_vertices(&self) -> usize {
        Self::NUM_VERTICES
    }

    fn num_edges(&self) -> usize {
        Self::NUM_VERTICES
    }

    fn num_planes(&self) -> usize {
        Self::NUM_VERTICES
    }

    fn vertex(&self, i: usize) -> Result<Point<Real>, ShapeError> {
        let i = ShapeError::check_index(i, Self::NUM_VERTICES)?;
        Ok(self.vertex_from_id(i))
    }

    fn edge(&self, i: usize) -> Result<(Point<Real>, Point<Real>), ShapeError> {
        let i = ShapeError::check_index(i, Self::NUM_VERTICES)?;
        Ok((self.vertex_from_id(i), self.vertex_from_id(i + 1)))
    }

    fn plane(&self, i: usize) -> Result<(UnitVector<Real>, Point<Real>), ShapeError> {
        let i = ShapeError::check_index(i, Self::NUM_VERTICES)?;
        let normal = match i {
            0 => -Vector::y(),
            1 => Vector::x(),
            2 => Vector::y(),
            _ => -Vector::x(),
        };
        let (a, b) = (self.vertex_from_id(i), self.vertex_from_id(i + 1));

        Ok((UnitVector::new_unchecked(normal), na::center(&a, &b)))
    }

    fn is_inside(&self, point: &Point<Real>, tolerance: Real) -> Result<bool, ShapeError> {
        let he = self.scaled_half_extents();

        Ok(point.x.abs() <= he.x + tolerance
            && point.y.abs() <= he.y + tolerance
            && point.z.abs() <= tolerance)
    }
}
