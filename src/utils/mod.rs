//! Various unsorted geometrical and logical operators.

pub use self::isometry_ops::IsometryOps;
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};

mod isometry_ops;
mod point_cloud_support_point;
