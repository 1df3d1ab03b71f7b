use std::result;

use thiserror::Error;

use crate::dims::Dim;
use crate::tags::Key;

/// Contract violations reported by datasets, dimension registries, and views.
///
/// All of these are recoverable. Operations are pure apart from `Dataset`'s
/// own storage, so a caller can correct the input and try again.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A dimension was referenced that the relevant registry does not have.
    #[error("dimensions do not contain {0}")]
    DimensionNotFound(Dim),

    /// A dimension was re-registered with a disagreeing extent.
    #[error("conflicting extents for {dim}: {existing} != {requested}")]
    ShapeConflict {
        dim: Dim,
        existing: usize,
        requested: usize,
    },

    /// A buffer's element count does not match its declared dimensions.
    #[error("buffer has {actual} elements, dimensions require {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    /// An insert targeted a (tag, name) key that is already present.
    #[error("dataset already contains variable {0}")]
    DuplicateVariable(Key),

    /// A key lookup found no matching variable.
    ///
    /// The display text is a stable contract; callers pattern-match on it.
    #[error("Dataset does not contain such a variable.")]
    VariableNotFound(Key),

    /// A slice index fell outside `[0, extent)` for its dimension.
    #[error("index {index} is out of range for {dim} with extent {extent}")]
    IndexOutOfRange {
        dim: Dim,
        index: usize,
        extent: usize,
    },

    /// A dimension was registered with extent zero.
    #[error("extent for {0} must be positive")]
    ZeroExtent(Dim),

    /// A coordinate variable was declared on anything other than exactly its
    /// own dimension.
    #[error("coordinate for {0} must be defined on exactly that dimension")]
    InvalidCoordinate(Dim),
}

pub type Result<T> = result::Result<T, Error>;
