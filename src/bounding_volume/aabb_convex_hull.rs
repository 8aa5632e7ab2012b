use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Real, Vector};
use crate::shape::{ConvexHull, CONVEX_DISTANCE_MARGIN};

impl ConvexHull {
    /// Computes the world-space AABB of this hull, enlarged by its margin and one tolerance.
    ///
    /// This is the cheap bound: it reuses the cached local AABB.
    #[inline]
    pub fn bounds_fast(&self, pos: &Isometry<Real>) -> Aabb {
        self.bounds_fast_with_margin(pos, self.margin())
    }

    /// Same as [`Self::bounds_fast`], with `margin` used in place of the margin of this hull.
    pub fn bounds_fast_with_margin(&self, pos: &Isometry<Real>, margin: Real) -> Aabb {
        self.inflated_aabb(pos, margin + CONVEX_DISTANCE_MARGIN)
    }

    /// Computes the world-space AABB of this hull, enlarged by its margin and two tolerances.
    ///
    /// This is the bound returned by [`Shape::compute_aabb`](crate::shape::Shape::compute_aabb).
    /// It is larger than [`Self::bounds_fast`] by exactly one tolerance on each side.
    #[inline]
    pub fn bounds_precise(&self, pos: &Isometry<Real>) -> Aabb {
        self.inflated_aabb(pos, self.margin() + CONVEX_DISTANCE_MARGIN * 2.0)
    }

    fn inflated_aabb(&self, pos: &Isometry<Real>, inflation: Real) -> Aabb {
        if self.num_points() == 0 {
            return Aabb::new_invalid();
        }

        self.local_aabb()
            .transform_by(pos)
            .add_half_extents(&Vector::repeat(inflation))
    }
}
