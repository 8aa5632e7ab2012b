use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::{Box2d, ConvexHull, Cuboid, Shape, ShapeError, ShapeType, StaticPlane, TypedShape};
use na::Vector2;
use alloc::sync::Arc;
use core::fmt;
use core::ops::Deref;

/// A reference-counted, shareable geometric shape.
///
/// Cloning a `SharedShape` only increments a reference count. Use
/// [`make_mut`](Self::make_mut) to obtain a uniquely owned, mutable shape.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use hullbound3d::shape::{SharedShape, ShapeType};
///
/// let mut shape1 = SharedShape::from_type(ShapeType::Cuboid).unwrap();
/// let shape2 = shape1.clone();
///
/// shape1.make_mut().set_margin(0.1);
///
/// assert_eq!(shape1.margin(), 0.1);
/// assert_eq!(shape2.margin(), 0.0);
/// # }
/// ```
#[derive(Clone)]
pub struct SharedShape(pub Arc<dyn Shape>);

impl Deref for SharedShape {
    type Target = dyn Shape;
    fn deref(&self) -> &dyn Shape {
        &*self.0
    }
}

impl AsRef<dyn Shape> for SharedShape {
    fn as_ref(&self) -> &dyn Shape {
        &*self.0
    }
}

impl fmt::Debug for SharedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let typed_shape: TypedShape = (*self.0).as_typed_shape();
        write!(f, "SharedShape ( Arc<{typed_shape:?}> )")
    }
}

impl SharedShape {
    /// Wraps the given shape as a shared shape.
    pub fn new(shape: impl Shape) -> Self {
        Self(Arc::new(shape))
    }

    /// Builds the default shape of the given type.
    ///
    /// Fails with [`ShapeError::AbstractInstantiation`] for the types without a concrete
    /// geometry, i.e., [`ShapeType::Custom`] and [`ShapeType::Compound`].
    pub fn from_type(shape_type: ShapeType) -> Result<Self, ShapeError> {
        match shape_type {
            ShapeType::Cuboid => Ok(Self::new(Cuboid::default())),
            ShapeType::Box2d => Ok(Self::new(Box2d::default())),
            ShapeType::ConvexHull => Ok(Self::new(ConvexHull::default())),
            ShapeType::StaticPlane => Ok(Self::new(StaticPlane::default())),
            ShapeType::Compound | ShapeType::Custom => {
                log::debug!("Cannot instantiate a shape of type {shape_type:?}.");
                Err(ShapeError::AbstractInstantiation(shape_type))
            }
        }
    }

    /// If this shape is shared, then the content of `self` is cloned into a unique instance,
    /// and a mutable reference to that instance is returned.
    pub fn make_mut(&mut self) -> &mut dyn Shape {
        if Arc::get_mut(&mut self.0).is_none() {
            let unique_self = self.0.clone_dyn();
            self.0 = unique_self.into();
        }

        match Arc::get_mut(&mut self.0) {
            Some(shape) => shape,
            None => unreachable!("the shape was just made unique"),
        }
    }

    /// Initialize a cuboid shape defined by its half-extents.
    pub fn cuboid(hx: Real, hy: Real, hz: Real) -> Self {
        SharedShape(Arc::new(Cuboid::new(Vector::new(hx, hy, hz))))
    }

    /// Initialize a flat box lying on the XY plane, defined by its half-extents.
    pub fn box2d(hx: Real, hy: Real) -> Self {
        SharedShape(Arc::new(Box2d::new(Vector2::new(hx, hy))))
    }

    /// Initialize the convex hull of the given points.
    pub fn convex_hull(points: &[Point<Real>]) -> Self {
        SharedShape(Arc::new(ConvexHull::new(points.iter().copied())))
    }

    /// Initialize an infinite static plane from its normal and constant.
    pub fn static_plane(normal: UnitVector<Real>, constant: Real) -> Self {
        SharedShape(Arc::new(StaticPlane::new(normal, constant)))
    }
}
