use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Real, Vector};
use crate::shape::{Box2d, CONVEX_DISTANCE_MARGIN};

impl Box2d {
    /// Computes the world-space AABB of this flat box, transformed by `pos` and enlarged by its
    /// margin and the fixed tolerance.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        self.local_aabb()
            .transform_by(pos)
            .add_half_extents(&Vector::repeat(self.margin + CONVEX_DISTANCE_MARGIN))
    }

    /// Computes the local-space AABB of this flat box, margin excluded.
    ///
    /// The AABB is flat along `z`.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let half_extents = self.scaled_half_extents();

        Aabb::new(
            (-half_extents).push(0.0).into(),
            half_extents.push(0.0).into(),
        )
    }
}
