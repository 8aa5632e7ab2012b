//! The base trait of every collision shape and its capability flags.

use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::math::{Isometry, Real, Vector, DIM};
use crate::shape::{Box2d, ConvexHull, ConvexShape, Cuboid, PolyhedralShape, StaticPlane};
use downcast_rs::{impl_downcast, DowncastSync};
use num_derive::FromPrimitive;

/// The factor applied to [`Shape::angular_motion_disc`] by default to obtain a contact
/// breaking threshold.
pub const DEFAULT_CONTACT_THRESHOLD_FACTOR: Real = 0.02;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// Enum representing the type of a shape.
pub enum ShapeType {
    /// A box shape.
    Cuboid = 0,
    /// A flat box lying on the XY plane.
    Box2d,
    /// The convex hull of a set of points.
    ConvexHull,
    /// An infinite static plane.
    StaticPlane,
    /// A shape composed of several sub-shapes.
    Compound,
    /// A custom user-defined shape.
    Custom,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// The boolean capabilities of a shape variant.
pub struct ShapeFlags(u16);

bitflags::bitflags! {
    impl ShapeFlags: u16 {
        /// The shape is a convex polyhedron with enumerable vertices and edges.
        const POLYHEDRAL = 1;
        /// The shape is a flat convex shape lying on the XY plane.
        const CONVEX_2D = 1 << 1;
        /// The shape is convex.
        const CONVEX = 1 << 2;
        /// The shape is concave.
        const CONCAVE = 1 << 3;
        /// The shape is composed of several sub-shapes.
        const COMPOUND = 1 << 4;
        /// The shape extends infinitely.
        const INFINITE = 1 << 5;
        /// The shape is deformable.
        const SOFT_BODY = 1 << 6;
        /// The shape is meant to stay static.
        const NON_MOVING = 1 << 7;
    }
}

impl ShapeType {
    /// The capabilities shared by every shape of this type.
    pub const fn flags(self) -> ShapeFlags {
        match self {
            ShapeType::Cuboid | ShapeType::ConvexHull => {
                ShapeFlags::POLYHEDRAL.union(ShapeFlags::CONVEX)
            }
            ShapeType::Box2d => ShapeFlags::POLYHEDRAL
                .union(ShapeFlags::CONVEX)
                .union(ShapeFlags::CONVEX_2D),
            ShapeType::StaticPlane => ShapeFlags::CONCAVE
                .union(ShapeFlags::INFINITE)
                .union(ShapeFlags::NON_MOVING),
            ShapeType::Compound => ShapeFlags::COMPOUND,
            ShapeType::Custom => ShapeFlags::empty(),
        }
    }
}

#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
/// Enum representing the shape with its actual type
pub enum TypedShape<'a> {
    /// A box shape.
    Cuboid(&'a Cuboid),
    /// A flat box lying on the XY plane.
    Box2d(&'a Box2d),
    /// The convex hull of a set of points.
    ConvexHull(&'a ConvexHull),
    /// An infinite static plane.
    StaticPlane(&'a StaticPlane),
    /// A custom user-defined shape with a type identified by a number.
    Custom(u32),
}

/// Trait implemented by every collision shape.
///
/// This is the base of the capability hierarchy: every shape has bounding volumes, a margin,
/// a local scaling and a set of [`ShapeFlags`]. Convex shapes additionally implement
/// [`ConvexShape`], and convex polyhedra [`PolyhedralShape`]. The trait itself carries no
/// geometry, so it cannot be instantiated: build a concrete shape, or use
/// [`SharedShape::from_type`](crate::shape::SharedShape::from_type) to build one from its type tag.
pub trait Shape: DowncastSync {
    /// Computes the AABB of this shape in its local frame, local scaling included and margin
    /// excluded.
    fn compute_local_aabb(&self) -> Aabb;

    /// Computes the AABB of this shape with the given position, margin included.
    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb;

    /// Gets the type tag of this shape.
    fn shape_type(&self) -> ShapeType;

    /// Gets the underlying shape as an enum.
    fn as_typed_shape(&self) -> TypedShape<'_>;

    /// Clones this shape into a boxed trait-object.
    fn clone_dyn(&self) -> Box<dyn Shape>;

    /// The collision margin of this shape.
    fn margin(&self) -> Real;

    /// Sets the collision margin of this shape.
    fn set_margin(&mut self, margin: Real);

    /// The scaling factors applied to each local axis of this shape.
    fn local_scaling(&self) -> Vector<Real>;

    /// Sets the scaling factors applied to each local axis of this shape.
    fn set_local_scaling(&mut self, scaling: Vector<Real>);

    /// The diagonal of the local inertia tensor of this shape for the given mass.
    fn local_inertia(&self, mass: Real) -> Vector<Real>;

    /// The capabilities of this shape.
    fn flags(&self) -> ShapeFlags {
        self.shape_type().flags()
    }

    /// Is this shape a convex polyhedron?
    fn is_polyhedral(&self) -> bool {
        self.flags().contains(ShapeFlags::POLYHEDRAL)
    }

    /// Is this shape a flat convex shape?
    fn is_convex_2d(&self) -> bool {
        self.flags().contains(ShapeFlags::CONVEX_2D)
    }

    /// Is this shape convex?
    fn is_convex(&self) -> bool {
        self.flags().contains(ShapeFlags::CONVEX)
    }

    /// Is this shape concave?
    fn is_concave(&self) -> bool {
        self.flags().contains(ShapeFlags::CONCAVE)
    }

    /// Is this shape composed of sub-shapes?
    fn is_compound(&self) -> bool {
        self.flags().contains(ShapeFlags::COMPOUND)
    }

    /// Does this shape extend infinitely?
    fn is_infinite(&self) -> bool {
        self.flags().contains(ShapeFlags::INFINITE)
    }

    /// Is this shape deformable?
    fn is_soft_body(&self) -> bool {
        self.flags().contains(ShapeFlags::SOFT_BODY)
    }

    /// Is this shape meant to stay static?
    fn is_non_moving(&self) -> bool {
        self.flags().contains(ShapeFlags::NON_MOVING)
    }

    /// Computes the bounding sphere of the AABB of this shape at the identity position.
    fn compute_bounding_sphere(&self) -> BoundingSphere {
        self.compute_aabb(&Isometry::identity()).bounding_sphere()
    }

    /// The radius of the disc swept by this shape when it rotates around its local origin.
    fn angular_motion_disc(&self) -> Real {
        let sphere = self.compute_bounding_sphere();
        sphere.center.coords.norm() + sphere.radius
    }

    /// The distance beyond which contacts with this shape are discarded.
    ///
    /// Use [`DEFAULT_CONTACT_THRESHOLD_FACTOR`] unless you have a reason not to.
    fn contact_breaking_threshold(&self, threshold_factor: Real) -> Real {
        self.angular_motion_disc() * threshold_factor
    }

    /// Computes the AABB enclosing this shape during a motion of duration `timestep`.
    ///
    /// The AABB at `position` is extended toward the linear displacement, then enlarged on
    /// every axis by the distance the angular motion disc may travel.
    fn compute_temporal_aabb(
        &self,
        position: &Isometry<Real>,
        linvel: &Vector<Real>,
        angvel: &Vector<Real>,
        timestep: Real,
    ) -> Aabb {
        let mut aabb = self.compute_aabb(position);
        let lin_motion = linvel * timestep;

        for i in 0..DIM {
            if lin_motion[i] > 0.0 {
                aabb.maxs[i] += lin_motion[i];
            } else {
                aabb.mins[i] += lin_motion[i];
            }
        }

        let ang_step = angvel.norm() * timestep;

        if ang_step == 0.0 {
            return aabb;
        }

        let ang_motion = ang_step * self.angular_motion_disc();
        aabb.add_half_extents(&Vector::repeat(ang_motion))
    }

    /// The per-axis weights applied to rolling friction.
    ///
    /// Rolling friction is isotropic, i.e. `(1, 1, 1)`, unless a shape overrides this.
    fn anisotropic_rolling_friction_direction(&self) -> Vector<Real> {
        Vector::repeat(1.0)
    }

    /// Converts this shape into a convex shape, if it is one.
    fn as_convex_shape(&self) -> Option<&dyn ConvexShape> {
        None
    }

    /// Converts this shape into a convex polyhedron, if it is one.
    fn as_polyhedral_shape(&self) -> Option<&dyn PolyhedralShape> {
        None
    }
}

impl_downcast!(sync Shape);

impl dyn Shape {
    /// Converts this abstract shape to the given shape, if it is one.
    pub fn as_shape<T: Shape>(&self) -> Option<&T> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a cuboid, if it is one.
    pub fn as_cuboid(&self) -> Option<&Cuboid> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a 2D box, if it is one.
    pub fn as_box2d(&self) -> Option<&Box2d> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a convex hull, if it is one.
    pub fn as_convex_hull(&self) -> Option<&ConvexHull> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a static plane, if it is one.
    pub fn as_static_plane(&self) -> Option<&StaticPlane> {
        self.downcast_ref()
    }
}

impl Shape for Cuboid {
    fn compute_local_aabb(&self) -> Aabb {
        self.local_aabb()
    }

    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        self.aabb(position)
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Cuboid
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Cuboid(self)
    }

    fn clone_dyn(&self) -> Box<dyn Shape> {
        Box::new(*self)
    }

    fn margin(&self) -> Real {
        self.margin
    }

    fn set_margin(&mut self, margin: Real) {
        self.margin = margin;
    }

    fn local_scaling(&self) -> Vector<Real> {
        self.local_scaling
    }

    fn set_local_scaling(&mut self, scaling: Vector<Real>) {
        self.local_scaling = scaling;
    }

    fn local_inertia(&self, mass: Real) -> Vector<Real> {
        crate::shape::box_local_inertia(&self.half_extents_with_margin(), mass)
    }

    fn as_convex_shape(&self) -> Option<&dyn ConvexShape> {
        Some(self as &dyn ConvexShape)
    }

    fn as_polyhedral_shape(&self) -> Option<&dyn PolyhedralShape> {
        Some(self as &dyn PolyhedralShape)
    }
}

impl Shape for Box2d {
    fn compute_local_aabb(&self) -> Aabb {
        self.local_aabb()
    }

    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        self.aabb(position)
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Box2d
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Box2d(self)
    }

    fn clone_dyn(&self) -> Box<dyn Shape> {
        Box::new(*self)
    }

    fn margin(&self) -> Real {
        self.margin
    }

    fn set_margin(&mut self, margin: Real) {
        self.margin = margin;
    }

    fn local_scaling(&self) -> Vector<Real> {
        self.local_scaling
    }

    fn set_local_scaling(&mut self, scaling: Vector<Real>) {
        self.local_scaling = scaling;
    }

    fn local_inertia(&self, mass: Real) -> Vector<Real> {
        crate::shape::box_local_inertia(&self.half_extents_with_margin(), mass)
    }

    fn as_convex_shape(&self) -> Option<&dyn ConvexShape> {
        Some(self as &dyn ConvexShape)
    }

    fn as_polyhedral_shape(&self) -> Option<&dyn PolyhedralShape> {
        Some(self as &dyn PolyhedralShape)
    }
}

impl Shape for ConvexHull {
    fn compute_local_aabb(&self) -> Aabb {
        *self.local_aabb()
    }

    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        self.bounds_precise(position)
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::ConvexHull
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::ConvexHull(self)
    }

    fn clone_dyn(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn margin(&self) -> Real {
        self.margin()
    }

    fn set_margin(&mut self, margin: Real) {
        self.set_margin(margin)
    }

    fn local_scaling(&self) -> Vector<Real> {
        *self.local_scaling()
    }

    fn set_local_scaling(&mut self, scaling: Vector<Real>) {
        self.set_local_scaling(scaling)
    }

    fn local_inertia(&self, mass: Real) -> Vector<Real> {
        let half_extents = self.compute_aabb(&Isometry::identity()).half_extents();
        let margin = Vector::repeat(self.margin());
        crate::shape::box_local_inertia(&(half_extents + margin), mass)
    }

    fn as_convex_shape(&self) -> Option<&dyn ConvexShape> {
        Some(self as &dyn ConvexShape)
    }

    fn as_polyhedral_shape(&self) -> Option<&dyn PolyhedralShape> {
        Some(self as &dyn PolyhedralShape)
    }
}

impl Shape for StaticPlane {
    fn compute_local_aabb(&self) -> Aabb {
        self.local_aabb()
    }

    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        self.aabb(position)
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::StaticPlane
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::StaticPlane(self)
    }

    fn clone_dyn(&self) -> Box<dyn Shape> {
        Box::new(*self)
    }

    fn margin(&self) -> Real {
        self.margin
    }

    fn set_margin(&mut self, margin: Real) {
        self.margin = margin;
    }

    fn local_scaling(&self) -> Vector<Real> {
        self.local_scaling
    }

    fn set_local_scaling(&mut self, scaling: Vector<Real>) {
        self.local_scaling = scaling;
    }

    fn local_inertia(&self, _mass: Real) -> Vector<Real> {
        Vector::zeros()
    }
}
