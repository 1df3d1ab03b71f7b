use ndarray::{ArrayViewD, IxDyn};
use paste::paste;

use crate::buffer::Buffer;
use crate::dims::{Dim, Dimensions};
use crate::errors::{Error, Result};
use crate::strided::StridedSlice;

/// A shaped buffer: an ordered set of dimensions plus the elements that fill
/// them, row-major with the first registered dimension outermost.
///
/// Variables are immutable once constructed. A dataset hands out shared
/// references only, so nothing can resize a variable out from under the
/// dataset's global dimension registry.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    dims: Dimensions,
    values: Buffer,
}

impl Variable {
    /// Wrap `values` in the shape declared by `dims`.
    ///
    /// The element count must equal the product of the extents.
    pub fn new<B: Into<Buffer>>(dims: Dimensions, values: B) -> Result<Self> {
        let values = values.into();
        let expected = dims.product();
        if values.len() != expected {
            return Err(Error::LengthMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { dims, values })
    }

    pub fn dims(&self) -> &Dimensions {
        &self.dims
    }

    pub fn values(&self) -> &Buffer {
        &self.values
    }

    /// Total element count.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The variable with `dim` removed, narrowed to the hyperplane at
    /// `index` along that axis. Remaining axes keep their order.
    pub fn slice_at(&self, dim: Dim, index: usize) -> Result<Variable> {
        let axis = self
            .dims
            .index(dim)
            .ok_or(Error::DimensionNotFound(dim))?;
        let shape = self.dims.shape();
        let extent = shape[axis];
        if index >= extent {
            return Err(Error::IndexOutOfRange { dim, index, extent });
        }

        let values = match &self.values {
            Buffer::I32(values) => {
                Buffer::I32(StridedSlice::new(values, &shape).fix_axis(axis, index).gather())
            }
            Buffer::I64(values) => {
                Buffer::I64(StridedSlice::new(values, &shape).fix_axis(axis, index).gather())
            }
            Buffer::F32(values) => {
                Buffer::F32(StridedSlice::new(values, &shape).fix_axis(axis, index).gather())
            }
            Buffer::F64(values) => {
                Buffer::F64(StridedSlice::new(values, &shape).fix_axis(axis, index).gather())
            }
        };

        Ok(Self {
            dims: self.dims.without(dim),
            values,
        })
    }
}

macro_rules! variable_array {
    ($type:ident) => {
        paste! {
            impl Variable {
                /// View the elements shaped per this variable's dimensions,
                /// if the buffer holds `$type` values.
                pub fn [<array_ $type>](&self) -> Option<ArrayViewD<'_, $type>> {
                    self.values.[<as_ $type>]().map(|values| {
                        ArrayViewD::from_shape(IxDyn(&self.dims.shape()), values)
                            .expect("buffer length matches dimensions")
                    })
                }
            }
        }
    };
}

variable_array!(i32);
variable_array!(i64);
variable_array!(f32);
variable_array!(f64);
