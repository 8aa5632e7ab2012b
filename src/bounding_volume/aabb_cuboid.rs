use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{Cuboid, CONVEX_DISTANCE_MARGIN};
use crate::utils::IsometryOps;

impl Cuboid {
    /// Computes the world-space AABB of this cuboid, transformed by `pos` and enlarged by its
    /// margin and the fixed tolerance.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        let center = Point::from(pos.translation.vector);
        let ws_half_extents = pos.absolute_transform_vector(&self.scaled_half_extents());
        let margin = Vector::repeat(self.margin + CONVEX_DISTANCE_MARGIN);

        Aabb::from_half_extents(center, ws_half_extents).add_half_extents(&margin)
    }

    /// Computes the local-space AABB of this cuboid, margin excluded.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let half_extents = Point::from(self.scaled_half_extents());

        Aabb::new(-half_extents, half_extents)
    }
}
