use std::borrow::Cow;

use crate::dataset::Lookup;
use crate::dims::{Dim, Dimensions};
use crate::errors::{Error, Result};
use crate::tags::{Key, Tag};
use crate::variable::Variable;

/// A derived narrowing of a dataset, or of another view.
///
/// Views never own the source's buffers. A variable untouched by the
/// narrowing is carried as a borrow; only a variable that lost an axis is
/// materialized, since removing an axis requires a reindexed buffer. The
/// source must outlive the view, which the borrow enforces.
#[derive(Clone, Debug, PartialEq)]
pub struct View<'a> {
    entries: Vec<(Key, Cow<'a, Variable>)>,
    dims: Dimensions,
}

impl<'a> View<'a> {
    /// The data variables named `name`, borrowed from the source.
    pub(crate) fn filtered(
        entries: impl Iterator<Item = (&'a Key, &'a Variable)>,
        name: &str,
    ) -> View<'a> {
        let mut out: Vec<(Key, Cow<'a, Variable>)> = Vec::new();
        let mut dims = Dimensions::new();
        for (key, var) in entries {
            if key.tag() == Tag::Data && key.name() == name {
                dims.merge(var.dims())
                    .expect("source container keeps extents consistent");
                out.push((key.clone(), Cow::Borrowed(var)));
            }
        }
        View { entries: out, dims }
    }

    /// The source's variables with `dim` fixed at `index`.
    ///
    /// Variables containing `dim` are reduced by one rank; the rest are
    /// borrowed as-is. The coordinate for `dim` is dropped, so looking it up
    /// on the result fails with `VariableNotFound`.
    pub(crate) fn sliced(
        entries: impl Iterator<Item = (&'a Key, &'a Variable)>,
        dims: &Dimensions,
        dim: Dim,
        index: usize,
    ) -> Result<View<'a>> {
        let extent = dims.size(dim)?;
        if index >= extent {
            return Err(Error::IndexOutOfRange { dim, index, extent });
        }

        let mut out: Vec<(Key, Cow<'a, Variable>)> = Vec::new();
        for (key, var) in entries {
            if *key == Key::Coord(dim) {
                continue;
            }
            if var.dims().contains(dim) {
                out.push((key.clone(), Cow::Owned(var.slice_at(dim, index)?)));
            } else {
                out.push((key.clone(), Cow::Borrowed(var)));
            }
        }

        Ok(View {
            entries: out,
            dims: dims.without(dim),
        })
    }

    /// Number of variables in the view.
    pub fn variable_count(&self) -> usize {
        self.entries.len()
    }

    /// Total element count across the view's variables.
    pub fn element_count(&self) -> usize {
        self.entries.iter().map(|(_, var)| var.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The view's dimension registry: the source registry narrowed the same
    /// way the variables were.
    pub fn dimensions(&self) -> &Dimensions {
        &self.dims
    }

    /// Variables in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Variable)> {
        self.entries.iter().map(|(key, var)| (key, var.as_ref()))
    }
}

impl Lookup for View<'_> {
    fn variable(&self, key: &Key) -> Result<&Variable> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, var)| var.as_ref())
            .ok_or_else(|| Error::VariableNotFound(key.clone()))
    }

    fn by_name(&self, name: &str) -> View<'_> {
        View::filtered(self.iter(), name)
    }

    fn slice(&self, dim: Dim, index: usize) -> Result<View<'_>> {
        View::sliced(self.iter(), &self.dims, dim, index)
    }
}
