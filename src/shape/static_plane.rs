//! Support mapping based infinite static plane.

use crate::math::{Point, Real, UnitVector, Vector};

/// An infinite plane, meant to be used as static ground.
///
/// The plane contains the points `x` such that `normal · x == constant`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct StaticPlane {
    /// The plane normal.
    pub normal: UnitVector<Real>,
    /// The signed distance from the origin to the plane along `normal`.
    pub constant: Real,
    /// The collision margin of the plane.
    pub margin: Real,
    /// The scaling factors applied to each local axis.
    pub local_scaling: Vector<Real>,
}

impl Default for StaticPlane {
    /// The plane `y = 0`, facing `+Y`.
    fn default() -> Self {
        Self::new(Vector::y_axis(), 0.0)
    }
}

impl StaticPlane {
    /// The half-extent of the AABB of a plane on every axis.
    ///
    /// It is finite, and small enough for the diagonal of the AABB to stay finite in single
    /// precision.
    pub const LARGE_EXTENT: Real = 1.0e18;

    /// Builds a new plane from its unit normal and its constant.
    #[inline]
    pub fn new(normal: UnitVector<Real>, constant: Real) -> StaticPlane {
        StaticPlane {
            normal,
            constant,
            margin: 0.0,
            local_scaling: Vector::repeat(1.0),
        }
    }

    /// The point of the plane closest to the origin.
    #[inline]
    pub fn origin_point(&self) -> Point<Real> {
        Point::from(self.normal.into_inner() * self.constant)
    }
}
