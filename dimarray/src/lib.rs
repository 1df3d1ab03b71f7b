//! A labeled multidimensional data container.
//!
//! A [`Dataset`] holds named, dimensioned numeric arrays under a shared
//! dimension registry and can be narrowed into borrowed [`View`]s, either by
//! variable name or by fixing one dimension to an index. Slicing drops the
//! fixed axis from every affected variable and removes that axis's own
//! coordinate from the result.

mod buffer;
mod dataset;
mod dims;
mod errors;
mod strided;
mod tags;
mod variable;
mod view;

pub use buffer::Buffer;
pub use dataset::Dataset;
pub use dataset::Lookup;
pub use dims::Dim;
pub use dims::Dimensions;
pub use errors::Error;
pub use errors::Result;
pub use tags::Key;
pub use tags::Tag;
pub use variable::Variable;
pub use view::View;
