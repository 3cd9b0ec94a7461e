//! Error type shared by all array operations.

use std::fmt;

/// Why an array operation could not produce a result.
///
/// An absent search hit is not an error; those return `None`.
#[derive(Clone, Debug, PartialEq)]
pub enum ArrayError {
    /// An argument has the wrong shape (`what` names the argument).
    Shape {
        what: &'static str,
        expected: String,
        got: Vec<usize>,
    },
    /// Reduction over an array with no elements.
    Empty,
    /// A flat index does not address an element of the given shape.
    OutOfBounds { index: usize, len: usize },
    /// The homogeneous coordinate of a projected point is (numerically) zero.
    PointAtInfinity { row: usize, w: f64 },
}

impl ArrayError {
    pub(crate) fn shape(what: &'static str, expected: impl Into<String>, got: &[usize]) -> Self {
        Self::Shape {
            what,
            expected: expected.into(),
            got: got.to_vec(),
        }
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape {
                what,
                expected,
                got,
            } => write!(f, "`{what}` has shape {got:?}, expected {expected}"),
            Self::Empty => write!(f, "operation needs at least one element"),
            Self::OutOfBounds { index, len } => {
                write!(f, "flat index {index} out of bounds for {len} elements")
            }
            Self::PointAtInfinity { row, w } => {
                write!(f, "point {row} maps to infinity (w = {w:e})")
            }
        }
    }
}

impl std::error::Error for ArrayError {}
