//! Support mapping based Cuboid shape.

use crate::math::{Point, Real, UnitVector, Vector, DIM};
use crate::shape::{
    signed_axis, ConvexShape, PolyhedralShape, ShapeError, SupportMap, CONVEX_DISTANCE_MARGIN,
};

/// Shape of a box.
///
/// The vertex `id` of a cuboid has its `i`-th bit set to 1 iff. the `i`-th component of the
/// vertex is negative. Its faces are numbered `+X, -X, +Y, -Y, +Z, -Z`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The half-extents of the cuboid, before local scaling.
    pub half_extents: Vector<Real>,
    /// The collision margin of the cuboid.
    pub margin: Real,
    /// The scaling factors applied to each local axis.
    pub local_scaling: Vector<Real>,
}

impl Default for Cuboid {
    /// The cube with half-extents `(1, 1, 1)`.
    fn default() -> Self {
        Self::new(Vector::repeat(1.0))
    }
}

impl Cuboid {
    /// The number of vertices of a cuboid.
    pub const NUM_VERTICES: usize = 8;
    /// The number of edges of a cuboid.
    pub const NUM_EDGES: usize = 12;
    /// The number of faces of a cuboid.
    pub const NUM_PLANES: usize = 6;

    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis.
    ///
    /// The sign of the half-extents is ignored: geometric queries use their absolute values.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Cuboid {
            half_extents,
            margin: 0.0,
            local_scaling: Vector::repeat(1.0),
        }
    }

    /// The half-extents of this cuboid once its local scaling is applied.
    #[inline]
    pub fn scaled_half_extents(&self) -> Vector<Real> {
        self.half_extents.component_mul(&self.local_scaling).abs()
    }

    /// The scaled half-extents enlarged by the margin and the fixed tolerance.
    #[inline]
    pub fn half_extents_with_margin(&self) -> Vector<Real> {
        self.scaled_half_extents() + Vector::repeat(self.margin + CONVEX_DISTANCE_MARGIN)
    }

    fn vertex_from_id(&self, id: usize) -> Point<Real> {
        let mut res = self.scaled_half_extents();

        for i in 0..DIM {
            if id & (1 << i) != 0 {
                res[i] = -res[i]
            }
        }

        Point::from(res)
    }
}

impl SupportMap for Cuboid {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let half_extents = self.scaled_half_extents();
        half_extents
            .zip_map(dir, |h, d| if d < 0.0 { -h } else { h })
            .into()
    }
}

impl ConvexShape for Cuboid {
    fn num_preferred_penetration_directions(&self) -> usize {
        Self::NUM_PLANES
    }

    fn preferred_penetration_direction(&self, i: usize) -> Result<Vector<Real>, ShapeError> {
        let i = ShapeError::check_index(i, Self::NUM_PLANES)?;
        Ok(signed_axis(i))
    }
}

impl PolyhedralShape for Cuboid {
    fn num_vertices(&self) -> usize {
        Self::NUM_VERTICES
    }

    fn num_edges(&self) -> usize {
        Self::NUM_EDGES
    }

    fn num_planes(&self) -> usize {
        Self::NUM_PLANES
    }

    fn vertex(&self, i: usize) -> Result<Point<Real>, ShapeError> {
        let i = ShapeError::check_index(i, Self::NUM_VERTICES)?;
        Ok(self.vertex_from_id(i))
    }

    fn edge(&self, i: usize) -> Result<(Point<Real>, Point<Real>), ShapeError> {
        let i = ShapeError::check_index(i, Self::NUM_EDGES)?;
        // Edges are grouped by the axis they are parallel to, four per axis.
        let axis = i / 4;
        let others = i % 4;
        let mut vid = 0;
        let mut bit = 0;

        for k in 0..DIM {
            if k != axis {
                if others & (1 << bit) != 0 {
                    vid |= 1 << k;
                }
                bit += 1;
            }
        }

        Ok((
            self.vertex_from_id(vid),
            self.vertex_from_id(vid | (1 << axis)),
        ))
    }

    fn plane(&self, i: usize) -> Result<(UnitVector<Real>, Point<Real>), ShapeError> {
        let i = ShapeError::check_index(i, Self::NUM_PLANES)?;
        let normal = signed_axis(i);
        let support = normal * self.scaled_half_extents()[i / 2];

        Ok((UnitVector::new_unchecked(normal), Point::from(support)))
    }

    fn is_inside(&self, point: &Point<Real>, tolerance: Real) -> Result<bool, ShapeError> {
        let half_extents = self.scaled_half_extents();

        for i in 0..DIM {
            if point[i] > half_extents[i] + tolerance || point[i] < -half_extents[i] - tolerance {
                return Ok(false);
            }
        }

        Ok(true)
    }
}
