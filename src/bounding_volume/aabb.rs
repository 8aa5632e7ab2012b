//! Axis Aligned Bounding Box.

use crate::bounding_volume::BoundingSphere;
use crate::math::{Isometry, Point, Real, Vector, DIM};
use crate::utils::IsometryOps;

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is defined by its minimum and maximum corners. Its edges are always
/// parallel to the coordinate axes, which makes it cheap to compute, transform and test.
///
/// - **mins**: the point with the smallest coordinates on each axis.
/// - **maxs**: the point with the largest coordinates on each axis.
/// - **Invariant**: `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y` and `mins.z ≤ maxs.z`, except for
///   the inverted box returned by [`Aabb::new_invalid`].
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use hullbound3d::bounding_volume::Aabb;
/// use nalgebra::Point3;
///
/// let aabb = Aabb::from_points(vec![
///     Point3::new(1.0, 2.0, 3.0),
///     Point3::new(-1.0, 4.0, 2.0),
///     Point3::new(0.0, 0.0, 5.0),
/// ]);
///
/// assert_eq!(aabb.mins, Point3::new(-1.0, 0.0, 2.0));
/// assert_eq!(aabb.maxs, Point3::new(1.0, 4.0, 5.0));
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    ///
    /// Each component of `mins` should be ≤ the corresponding component of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with inverted bounds.
    ///
    /// The resulting AABB has `mins` set to maximum values and `maxs` set to
    /// minimum values. Taking any point or merging any valid AABB into it yields
    /// a valid AABB.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
        )
    }

    /// Creates a new AABB from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates a new AABB that tightly encloses a set of points.
    ///
    /// Returns [`Aabb::new_invalid`] if `pts` is empty.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        super::aabb_utils::local_point_cloud_aabb(pts)
    }

    /// Is this AABB free of inverted bounds?
    #[inline]
    pub fn is_valid(&self) -> bool {
        na::partial_le(&self.mins, &self.maxs)
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        let half: Real = na::convert::<f64, Real>(0.5);
        (self.maxs - self.mins) * half
    }

    /// Enlarges this AABB so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Computes the AABB bounding `self` transformed by `m`.
    ///
    /// The center is moved by `m` and the half-extents are mapped through the absolute
    /// value of `m`'s rotation matrix, so the result encloses the rotated box.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        let ls_center = self.center();
        let center = m * ls_center;
        let ws_half_extents = m.absolute_transform_vector(&self.half_extents());

        Aabb::new(center + (-ws_half_extents), center + ws_half_extents)
    }

    /// Returns the AABB of `self` with each coordinate multiplied by `scale`.
    ///
    /// Negative scale factors swap the corresponding bounds so the result stays valid.
    #[inline]
    #[must_use]
    pub fn scaled(self, scale: &Vector<Real>) -> Self {
        let a = self.mins.coords.component_mul(scale);
        let b = self.maxs.coords.component_mul(scale);
        Self {
            mins: a.inf(&b).into(),
            maxs: a.sup(&b).into(),
        }
    }

    /// Returns `self` enlarged by `half_extents` on each side.
    ///
    /// Negative components shrink the box instead.
    #[must_use]
    pub fn add_half_extents(&self, half_extents: &Vector<Real>) -> Self {
        Self {
            mins: self.mins - half_extents,
            maxs: self.maxs + half_extents,
        }
    }

    /// The smallest bounding sphere containing this AABB.
    #[inline]
    pub fn bounding_sphere(&self) -> BoundingSphere {
        let center = self.center();
        let radius = na::distance(&self.mins, &self.maxs) * 0.5;
        BoundingSphere::new(center, radius)
    }

    /// Does this AABB contain the given point (boundary included)?
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// Computes the vertices of this AABB.
    ///
    /// The first four vertices lie on the `z = mins.z` face, counter-clockwise, starting
    /// from `mins`.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 8] {
        [
            Point::new(self.mins.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.maxs.y, self.maxs.z),
            Point::new(self.mins.x, self.maxs.y, self.maxs.z),
        ]
    }
}
