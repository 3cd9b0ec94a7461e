//! Small numeric helpers on in-memory arrays.
//!
//! - `perspective`: projective transform of 2D points by a 3x3 matrix.
//! - `search`: first true / first false index of a boolean sequence.
//! - `extremum`: row-major argmin / argmax location in N-dimensional arrays.
//!
//! Every operation is pure: no state, no I/O, same input gives the same output.
//! Shape problems are reported as `ArrayError`; "nothing found" is `None`.

pub mod cfg;
pub mod error;
pub mod extremum;
pub mod perspective;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::ProjCfg;
pub use error::ArrayError;
pub use extremum::{argmax_in_shape, argmin_in_shape, nd_argmax, nd_argmin, unravel_index};
pub use perspective::{
    perspective_multiply, perspective_multiply_array, to_homogeneous, try_perspective_multiply,
};
pub use search::{find_first_false, find_first_true};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::{
        find_first_false, find_first_true, nd_argmax, nd_argmin, perspective_multiply,
        perspective_multiply_array, try_perspective_multiply, ArrayError, ProjCfg,
    };
    pub use nalgebra::{Matrix3 as Mat3, Vector2 as Vec2};
}
