use crate::buffer::Buffer;
use crate::dims::{Dim, Dimensions};
use crate::errors::{Error, Result};
use crate::tags::Key;
use crate::variable::Variable;
use crate::view::View;

/// The access contract shared by `Dataset` and `View`.
///
/// Three modes: key access returning a single variable, name access
/// returning a view of matching data variables, and dimension-slice access
/// returning a view with one axis fixed and removed. Views expose the same
/// contract, so all three compose.
pub trait Lookup {
    /// The variable stored under `key`.
    fn variable(&self, key: &Key) -> Result<&Variable>;

    /// A view of every data variable named `name`. An unmatched name yields
    /// an empty view.
    fn by_name(&self, name: &str) -> View<'_>;

    /// A view with `dim` fixed at `index` and removed from every variable
    /// that has it. Variables without `dim` pass through untouched; the
    /// coordinate for `dim` is left out entirely.
    fn slice(&self, dim: Dim, index: usize) -> Result<View<'_>>;

    /// The coordinate variable for `dim`.
    fn coord(&self, dim: Dim) -> Result<&Variable> {
        self.variable(&Key::Coord(dim))
    }

    /// The data variable named `name`.
    fn data(&self, name: &str) -> Result<&Variable> {
        self.variable(&Key::data(name))
    }
}

/// An ordered store of variables sharing one dimension registry.
///
/// Every insert merges the variable's dimensions into the global registry,
/// so any two variables declaring the same dimension are guaranteed to agree
/// on its extent. Views borrow the dataset, which means the borrow checker
/// rejects an `insert` while any derived view is alive.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    variables: Vec<(Key, Variable)>,
    dims: Dimensions,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `values` under `key` with the shape declared by `dims`.
    ///
    /// Fails with `LengthMismatch` if the element count disagrees with the
    /// declared shape, `DuplicateVariable` if the key is taken,
    /// `ShapeConflict` if any extent disagrees with the global registry, and
    /// `InvalidCoordinate` if a coordinate is declared on anything other
    /// than exactly its own dimension. A failed insert leaves the dataset
    /// untouched.
    pub fn insert<B: Into<Buffer>>(
        &mut self,
        key: Key,
        dims: Dimensions,
        values: B,
    ) -> Result<()> {
        if let Key::Coord(dim) = key {
            if dims.ndim() != 1 || !dims.contains(dim) {
                return Err(Error::InvalidCoordinate(dim));
            }
        }
        let variable = Variable::new(dims, values)?;
        if self.variables.iter().any(|(k, _)| *k == key) {
            return Err(Error::DuplicateVariable(key));
        }
        let mut merged = self.dims.clone();
        merged.merge(variable.dims())?;
        self.dims = merged;
        self.variables.push((key, variable));
        Ok(())
    }

    /// Store the coordinate array for `dim`.
    pub fn insert_coord<B: Into<Buffer>>(
        &mut self,
        dim: Dim,
        extent: usize,
        values: B,
    ) -> Result<()> {
        let mut dims = Dimensions::new();
        dims.add(dim, extent)?;
        self.insert(Key::Coord(dim), dims, values)
    }

    /// Store a named data variable.
    pub fn insert_data<S, B>(&mut self, name: S, dims: Dimensions, values: B) -> Result<()>
    where
        S: Into<String>,
        B: Into<Buffer>,
    {
        self.insert(Key::data(name), dims, values)
    }

    /// Number of stored variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// The global dimension registry merged from every inserted variable.
    pub fn dimensions(&self) -> &Dimensions {
        &self.dims
    }

    /// Variables in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Variable)> {
        self.variables.iter().map(|(key, var)| (key, var))
    }
}

impl Lookup for Dataset {
    fn variable(&self, key: &Key) -> Result<&Variable> {
        self.variables
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, var)| var)
            .ok_or_else(|| Error::VariableNotFound(key.clone()))
    }

    fn by_name(&self, name: &str) -> View<'_> {
        View::filtered(self.iter(), name)
    }

    fn slice(&self, dim: Dim, index: usize) -> Result<View<'_>> {
        View::sliced(self.iter(), &self.dims, dim, index)
    }
}
