use std::fmt;

use crate::dims::Dim;

/// Variable category labels. Closed at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    Coord,
    Data,
}

/// Identifies a variable within a dataset.
///
/// Coordinate variables are keyed by their dimension, one per `Dim`, and
/// their name is the dimension's label. Data variables carry an explicit
/// name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Coord(Dim),
    Data(String),
}

impl Key {
    pub fn data<S: Into<String>>(name: S) -> Self {
        Key::Data(name.into())
    }

    pub fn tag(&self) -> Tag {
        match self {
            Key::Coord(_) => Tag::Coord,
            Key::Data(_) => Tag::Data,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Key::Coord(dim) => dim.label(),
            Key::Data(name) => name,
        }
    }
}

impl From<Dim> for Key {
    fn from(dim: Dim) -> Self {
        Key::Coord(dim)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Key::Coord(dim) => write!(f, "coordinate {dim}"),
            Key::Data(name) => write!(f, "\"{name}\""),
        }
    }
}
