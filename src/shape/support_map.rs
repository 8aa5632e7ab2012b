//! Traits for support mapping based shapes.

use crate::math::{Isometry, Point, Real, Vector};

/// Traits of convex shapes representable by a support mapping function.
pub trait SupportMap {
    /// Evaluates the support function of this shape, margin excluded.
    ///
    /// A support function is a function associating a vector to the shape point which maximizes
    /// their dot product.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Evaluates the support function of this shape transformed by `transform`.
    fn support_point(&self, transform: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = transform.inverse_transform_vector(dir);
        transform * self.local_support_point(&local_dir)
    }
}
