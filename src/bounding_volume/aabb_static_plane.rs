use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::StaticPlane;

impl StaticPlane {
    /// Computes the world-space AABB of this plane.
    ///
    /// The plane is infinite, so its position is ignored.
    #[inline]
    pub fn aabb(&self, _pos: &Isometry<Real>) -> Aabb {
        self.local_aabb()
    }

    /// Computes the local-space AABB of this plane.
    ///
    /// Its half-extents are [`StaticPlane::LARGE_EXTENT`] on every axis.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let max = Point::from(Vector::repeat(Self::LARGE_EXTENT));
        Aabb::new(-max, max)
    }
}
