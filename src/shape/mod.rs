//! Shapes supported by hullbound.

pub use self::box2d::Box2d;
pub(crate) use self::convex_shape::{box_local_inertia, signed_axis};
#[doc(inline)]
pub use self::convex_shape::{
    AxisProjection, ConvexShape, PolyhedralShape, CONVEX_DISTANCE_MARGIN,
};
pub use self::convex_hull::ConvexHull;
pub use self::cuboid::Cuboid;
pub use self::error::ShapeError;
#[doc(inline)]
pub use self::shape::{
    Shape, ShapeFlags, ShapeType, TypedShape, DEFAULT_CONTACT_THRESHOLD_FACTOR,
};
pub use self::shared_shape::SharedShape;
pub use self::static_plane::StaticPlane;
#[doc(inline)]
pub use self::support_map::SupportMap;

mod box2d;
mod convex_hull;
#[doc(hidden)]
pub mod convex_shape;
mod cuboid;
mod error;
#[doc(hidden)]
pub mod shape;
mod shared_shape;
mod static_plane;
#[doc(hidden)]
pub mod support_map;
