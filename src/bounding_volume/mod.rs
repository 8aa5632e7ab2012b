//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;

#[doc(inline)]
pub use crate::bounding_volume::bounding_sphere::BoundingSphere;

#[doc(hidden)]
pub mod aabb;
mod aabb_box2d;
mod aabb_convex_hull;
mod aabb_cuboid;
mod aabb_static_plane;
mod aabb_utils;

#[doc(hidden)]
pub mod bounding_sphere;

/// Free functions for some special cases of bounding-volume computation.
pub mod details {
    pub use super::aabb_utils::{local_point_cloud_aabb, local_support_map_aabb};
}
