use ndarray::{Array, Dimension};
use paste::paste;

/// Owned element storage for one variable, contiguous and row-major.
///
/// One variant per supported element type. Conversions and checked accessors
/// are generated per type by `buffer_type!` below.
#[derive(Clone, Debug, PartialEq)]
pub enum Buffer {
    I32(Vec<i32>),
    I64(Vec<i64>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

impl Buffer {
    pub fn len(&self) -> usize {
        match self {
            Self::I32(values) => values.len(),
            Self::I64(values) => values.len(),
            Self::F32(values) => values.len(),
            Self::F64(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! buffer_type {
    ($type:ident) => {
        paste! {
            impl From<Vec<$type>> for Buffer {
                fn from(values: Vec<$type>) -> Self {
                    Self::[<$type:upper>](values)
                }
            }

            impl From<&[$type]> for Buffer {
                fn from(values: &[$type]) -> Self {
                    Self::[<$type:upper>](values.to_vec())
                }
            }

            impl<D: Dimension> From<Array<$type, D>> for Buffer {
                fn from(values: Array<$type, D>) -> Self {
                    // Iteration is in logical order, so this flattens to
                    // row-major regardless of the array's memory layout.
                    Self::[<$type:upper>](values.iter().copied().collect())
                }
            }

            impl Buffer {
                /// Borrow the elements if this buffer holds `$type` values.
                pub fn [<as_ $type>](&self) -> Option<&[$type]> {
                    match self {
                        Self::[<$type:upper>](values) => Some(values),
                        _ => None,
                    }
                }
            }
        }
    };
}

buffer_type!(i32);
buffer_type!(i64);
buffer_type!(f32);
buffer_type!(f64);
