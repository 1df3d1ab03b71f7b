use std::fmt;

use crate::errors::{Error, Result};

/// Axis labels. A closed set; adding an axis is a source change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dim {
    X,
    Y,
    Z,
    Time,
}

impl Dim {
    pub fn label(&self) -> &'static str {
        match self {
            Dim::X => "X",
            Dim::Y => "Y",
            Dim::Z => "Z",
            Dim::Time => "Time",
        }
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An ordered registry of (dimension, extent) pairs.
///
/// Registration order is the buffer's axis order, outermost first, row-major.
/// Two registries are equal only if they hold the same pairs in the same
/// order, since the order defines buffer layout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dimensions {
    dims: Vec<(Dim, usize)>,
}

impl Dimensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from (dimension, extent) pairs in axis order.
    pub fn from_extents(pairs: &[(Dim, usize)]) -> Result<Self> {
        let mut dims = Self::new();
        for &(dim, extent) in pairs {
            dims.add(dim, extent)?;
        }
        Ok(dims)
    }

    /// Append a dimension with the given extent.
    ///
    /// Re-adding a dimension with its current extent is a no-op. Re-adding it
    /// with a different extent is a `ShapeConflict`. A zero extent is
    /// rejected outright.
    pub fn add(&mut self, dim: Dim, extent: usize) -> Result<()> {
        if extent == 0 {
            return Err(Error::ZeroExtent(dim));
        }
        match self.size(dim) {
            Ok(existing) if existing == extent => Ok(()),
            Ok(existing) => Err(Error::ShapeConflict {
                dim,
                existing,
                requested: extent,
            }),
            Err(_) => {
                self.dims.push((dim, extent));
                Ok(())
            }
        }
    }

    /// The extent of `dim`, or `DimensionNotFound`.
    pub fn size(&self, dim: Dim) -> Result<usize> {
        self.dims
            .iter()
            .find(|(d, _)| *d == dim)
            .map(|(_, extent)| *extent)
            .ok_or(Error::DimensionNotFound(dim))
    }

    pub fn contains(&self, dim: Dim) -> bool {
        self.dims.iter().any(|(d, _)| *d == dim)
    }

    /// Axis position of `dim`, if registered.
    pub fn index(&self, dim: Dim) -> Option<usize> {
        self.dims.iter().position(|(d, _)| *d == dim)
    }

    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Product of all extents, which is the required buffer length.
    /// An empty registry is a scalar, so the product is 1.
    pub fn product(&self) -> usize {
        self.dims.iter().map(|(_, extent)| extent).product()
    }

    /// Extents in axis order.
    pub fn shape(&self) -> Vec<usize> {
        self.dims.iter().map(|(_, extent)| *extent).collect()
    }

    /// Dimension labels in axis order.
    pub fn labels(&self) -> impl Iterator<Item = Dim> + '_ {
        self.dims.iter().map(|(dim, _)| *dim)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dim, usize)> + '_ {
        self.dims.iter().copied()
    }

    /// Union with `other`, preserving this registry's order and appending
    /// unseen dimensions in `other`'s order. Extents must agree.
    pub fn merge(&mut self, other: &Dimensions) -> Result<()> {
        for (dim, extent) in other.iter() {
            self.add(dim, extent)?;
        }
        Ok(())
    }

    /// A copy with `dim` removed, remaining axis order preserved.
    pub fn without(&self, dim: Dim) -> Dimensions {
        Dimensions {
            dims: self
                .dims
                .iter()
                .filter(|(d, _)| *d != dim)
                .copied()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xyz() -> Dimensions {
        Dimensions::from_extents(&[(Dim::X, 2), (Dim::Y, 3), (Dim::Z, 4)]).unwrap()
    }

    #[test]
    fn test_add_and_size() {
        let dims = xyz();
        assert_eq!(dims.size(Dim::X), Ok(2));
        assert_eq!(dims.size(Dim::Y), Ok(3));
        assert_eq!(dims.size(Dim::Z), Ok(4));
        assert_eq!(dims.ndim(), 3);
    }

    #[test]
    fn test_size_not_found() {
        let dims = xyz();
        assert_eq!(dims.size(Dim::Time), Err(Error::DimensionNotFound(Dim::Time)));
    }

    #[test]
    fn test_add_idempotent() {
        let mut dims = xyz();
        dims.add(Dim::Y, 3).unwrap();
        assert_eq!(dims, xyz());
    }

    #[test]
    fn test_add_conflict() {
        let mut dims = xyz();
        assert_eq!(
            dims.add(Dim::Y, 5),
            Err(Error::ShapeConflict {
                dim: Dim::Y,
                existing: 3,
                requested: 5,
            })
        );
    }

    #[test]
    fn test_add_zero_extent() {
        let mut dims = Dimensions::new();
        assert_eq!(dims.add(Dim::X, 0), Err(Error::ZeroExtent(Dim::X)));
    }

    #[test]
    fn test_contains() {
        let dims = xyz();
        assert!(dims.contains(Dim::Z));
        assert!(!dims.contains(Dim::Time));
    }

    #[test]
    fn test_product() {
        assert_eq!(xyz().product(), 24);
        assert_eq!(Dimensions::new().product(), 1);
    }

    #[test]
    fn test_shape_and_labels() {
        let dims = xyz();
        assert_eq!(dims.shape(), vec![2, 3, 4]);
        assert_eq!(
            dims.labels().collect::<Vec<_>>(),
            vec![Dim::X, Dim::Y, Dim::Z]
        );
        assert_eq!(dims.index(Dim::Y), Some(1));
        assert_eq!(dims.index(Dim::Time), None);
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let forward = Dimensions::from_extents(&[(Dim::X, 2), (Dim::Y, 3)]).unwrap();
        let backward = Dimensions::from_extents(&[(Dim::Y, 3), (Dim::X, 2)]).unwrap();
        assert_ne!(forward, backward);
    }

    #[test]
    fn test_merge() {
        let mut dims = Dimensions::from_extents(&[(Dim::X, 2)]).unwrap();
        let other = Dimensions::from_extents(&[(Dim::X, 2), (Dim::Z, 4)]).unwrap();
        dims.merge(&other).unwrap();
        assert_eq!(
            dims,
            Dimensions::from_extents(&[(Dim::X, 2), (Dim::Z, 4)]).unwrap()
        );
    }

    #[test]
    fn test_merge_conflict() {
        let mut dims = Dimensions::from_extents(&[(Dim::X, 2)]).unwrap();
        let other = Dimensions::from_extents(&[(Dim::X, 7)]).unwrap();
        assert_eq!(
            dims.merge(&other),
            Err(Error::ShapeConflict {
                dim: Dim::X,
                existing: 2,
                requested: 7,
            })
        );
    }

    #[test]
    fn test_without() {
        let dims = xyz();
        assert_eq!(
            dims.without(Dim::Y),
            Dimensions::from_extents(&[(Dim::X, 2), (Dim::Z, 4)]).unwrap()
        );
        assert_eq!(dims.without(Dim::Time), dims);
    }
}
