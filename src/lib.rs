/*!
hullbound
========

**hullbound** computes the bounding volumes, support points and capability
flags of 3-dimensional collision shapes, with the convex hull of a point set
as its central shape.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!("The `f32` and `f64` features are mutually exclusive: depend on `hullbound3d` or on `hullbound3d-f64`, not on both features at once.");

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
extern crate alloc;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Matrix3, Point3, Translation3, UnitVector3, Vector3};
    use na::{UnitQuaternion, U3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The dimension of the ambient space.
    pub type Dim = U3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The rotation matrix type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;
}
