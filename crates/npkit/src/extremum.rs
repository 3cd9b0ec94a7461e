//! Location of the minimum / maximum over a whole N-dimensional array.
//!
//! Conventions
//! - Scan order is row-major (last axis fastest) over the logical index space,
//!   whatever the memory layout of the view. Ties go to the first position in
//!   that order.
//! - Unordered elements (`NaN`) win: the first one found is returned, as a
//!   `NaN` propagates through a min/max reduction.
//! - Empty input is an error (`ArrayError::Empty`), not `None`.

use ndarray::{ArrayBase, Data, Dimension};

use crate::error::ArrayError;

#[inline]
fn is_unordered<A: PartialOrd>(a: &A) -> bool {
    a.partial_cmp(a).is_none()
}

/// First position (in iteration order) preferred by `better`, with unordered values winning.
fn locate<'a, A, P, I, F>(mut items: I, better: F) -> Result<P, ArrayError>
where
    A: PartialOrd + 'a,
    I: Iterator<Item = (P, &'a A)>,
    F: Fn(&A, &A) -> bool,
{
    let (mut best_at, mut best) = items.next().ok_or_else(|| {
        tracing::debug!("extremum of an empty array");
        ArrayError::Empty
    })?;
    if is_unordered(best) {
        return Ok(best_at);
    }
    for (at, v) in items {
        if is_unordered(v) {
            return Ok(at);
        }
        // strict comparison keeps the earliest position on ties
        if better(v, best) {
            best_at = at;
            best = v;
        }
    }
    Ok(best_at)
}

/// Index tuple of the minimum of `arr` (first in row-major order on ties).
///
/// Returns `D::Pattern`: a `usize` for 1-D arrays, `(usize, usize)` for 2-D,
/// and so on; `IxDyn` for dynamic rank.
pub fn nd_argmin<A, S, D>(arr: &ArrayBase<S, D>) -> Result<D::Pattern, ArrayError>
where
    A: PartialOrd,
    S: Data<Elem = A>,
    D: Dimension,
{
    locate(arr.indexed_iter(), |v, best| v < best)
}

/// Index tuple of the maximum of `arr` (first in row-major order on ties).
pub fn nd_argmax<A, S, D>(arr: &ArrayBase<S, D>) -> Result<D::Pattern, ArrayError>
where
    A: PartialOrd,
    S: Data<Elem = A>,
    D: Dimension,
{
    locate(arr.indexed_iter(), |v, best| v > best)
}

/// Number of elements addressed by `shape`; errors if the count does not fit a `usize`.
fn element_count(shape: &[usize]) -> Result<usize, ArrayError> {
    shape
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or_else(|| {
            tracing::debug!(?shape, "element count overflows usize");
            ArrayError::shape("shape", "an element count that fits in usize", shape)
        })
}

/// Convert a row-major flat index into a multi-index for `shape`.
pub fn unravel_index(flat: usize, shape: &[usize]) -> Result<Vec<usize>, ArrayError> {
    let len = element_count(shape)?;
    if flat >= len {
        tracing::debug!(flat, len, ?shape, "flat index out of bounds");
        return Err(ArrayError::OutOfBounds { index: flat, len });
    }
    let mut out = vec![0; shape.len()];
    let mut rest = flat;
    for (k, &d) in shape.iter().enumerate().rev() {
        out[k] = rest % d;
        rest /= d;
    }
    Ok(out)
}

fn check_buffer<A>(data: &[A], shape: &[usize]) -> Result<(), ArrayError> {
    let len = element_count(shape)?;
    if len != data.len() {
        tracing::debug!(?shape, elements = data.len(), "shape does not match buffer");
        return Err(ArrayError::shape(
            "data",
            format!("{len} elements for shape {shape:?}"),
            &[data.len()],
        ));
    }
    Ok(())
}

/// [`nd_argmin`] over a flat row-major buffer with an explicit `shape`.
pub fn argmin_in_shape<A: PartialOrd>(
    data: &[A],
    shape: &[usize],
) -> Result<Vec<usize>, ArrayError> {
    check_buffer(data, shape)?;
    let flat = locate(data.iter().enumerate(), |v, best| v < best)?;
    unravel_index(flat, shape)
}

/// [`nd_argmax`] over a flat row-major buffer with an explicit `shape`.
pub fn argmax_in_shape<A: PartialOrd>(
    data: &[A],
    shape: &[usize],
) -> Result<Vec<usize>, ArrayError> {
    check_buffer(data, shape)?;
    let flat = locate(data.iter().enumerate(), |v, best| v > best)?;
    unravel_index(flat, shape)
}
