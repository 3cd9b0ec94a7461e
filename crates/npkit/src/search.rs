//! Index of the first `true` / first `false` in a boolean sequence.
//!
//! Both scans run left to right and stop at the first hit. "Not found" is
//! `None`, so index 0 is always an actual hit.

use std::borrow::Borrow;

/// Smallest `i` with `arr[i] == true`, or `None`.
///
/// Accepts anything iterable over `bool` or `&bool`: slices, `Vec<bool>`,
/// `&ArrayView1<bool>`.
pub fn find_first_true<I>(arr: I) -> Option<usize>
where
    I: IntoIterator,
    I::Item: Borrow<bool>,
{
    arr.into_iter().position(|b| *b.borrow())
}

/// Smallest `i` with `arr[i] == false`, or `None`.
pub fn find_first_false<I>(arr: I) -> Option<usize>
where
    I: IntoIterator,
    I::Item: Borrow<bool>,
{
    arr.into_iter().position(|b| !*b.borrow())
}
