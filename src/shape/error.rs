use crate::shape::ShapeType;

/// Errors raised by shape accessors and by dynamic shape construction.
///
/// Geometric computations (bounding volumes, support points, projections) are total and never
/// fail: only indexed accesses, capabilities a shape variant lacks, and the construction of a
/// shape type without concrete geometry are reported through this error.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// A vertex, edge or plane index does not designate an element of the shape.
    #[error("index {index} is out of range for a shape with {len} elements")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// The number of elements the index was checked against.
        len: usize,
    },
    /// The shape type has no concrete geometry to build a default instance from.
    #[error("shapes of type {0:?} cannot be instantiated without a concrete geometry")]
    AbstractInstantiation(ShapeType),
    /// The shape variant does not implement the requested capability.
    #[error("shapes of type {shape_type:?} do not support `{capability}`")]
    CapabilityNotSupported {
        /// The type of the shape the capability was requested from.
        shape_type: ShapeType,
        /// The name of the unsupported operation.
        capability: &'static str,
    },
}

impl ShapeError {
    /// Checks that `index` is smaller than `len`.
    #[inline]
    pub(crate) fn check_index(index: usize, len: usize) -> Result<usize, ShapeError> {
        if index < len {
            Ok(index)
        } else {
            Err(ShapeError::IndexOutOfRange { index, len })
        }
    }
}
