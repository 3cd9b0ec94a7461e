//! Perspective (homogeneous-coordinate) transform of 2D points.
//!
//! A point `(x, y)` is lifted to `(x, y, 1)`, multiplied by the 3x3 matrix `M`
//! and projected back as `(x'/w, y'/w)`.
//!
//! Conventions
//! - `w = 0` is not guarded in the unchecked entry points: the division yields
//!   `inf`/`NaN` for that row and every other row is unaffected.
//! - `try_perspective_multiply` is the guarded variant; it fails on the first
//!   row whose `w` is within `ProjCfg::eps_w` of zero.
//! - Row order is preserved; output has exactly one point per input point.

use nalgebra::{Matrix3, Vector2, Vector3};
use ndarray::{s, Array2, ArrayView2, Axis};

use crate::cfg::ProjCfg;
use crate::error::ArrayError;

/// Apply `m` to `p` in homogeneous coordinates; returns the projected point and `w`.
#[inline]
fn project(m: &Matrix3<f64>, p: &Vector2<f64>) -> (Vector2<f64>, f64) {
    let y = m * Vector3::new(p.x, p.y, 1.0);
    (Vector2::new(y.x / y.z, y.y / y.z), y.z)
}

/// Apply the projective transform `m` to every point of `x`.
///
/// Points whose homogeneous coordinate is exactly zero come back non-finite.
pub fn perspective_multiply(m: &Matrix3<f64>, x: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    x.iter()
        .enumerate()
        .map(|(row, p)| {
            let (q, w) = project(m, p);
            if w == 0.0 {
                tracing::trace!(row, "zero w, projected point is non-finite");
            }
            q
        })
        .collect()
}

/// Like [`perspective_multiply`], but fails instead of producing points at infinity.
pub fn try_perspective_multiply(
    m: &Matrix3<f64>,
    x: &[Vector2<f64>],
    cfg: ProjCfg,
) -> Result<Vec<Vector2<f64>>, ArrayError> {
    let mut out = Vec::with_capacity(x.len());
    for (row, p) in x.iter().enumerate() {
        let (q, w) = project(m, p);
        if cfg.is_at_infinity(w) {
            tracing::debug!(row, w, eps_w = cfg.eps_w, "point maps to infinity");
            return Err(ArrayError::PointAtInfinity { row, w });
        }
        out.push(q);
    }
    Ok(out)
}

/// Append a column of ones: `[N, D]` becomes `[N, D + 1]`.
pub fn to_homogeneous(x: ArrayView2<'_, f64>) -> Array2<f64> {
    let (n, d) = x.dim();
    let mut hom = Array2::<f64>::ones((n, d + 1));
    hom.slice_mut(s![.., ..d]).assign(&x);
    hom
}

/// Array form of [`perspective_multiply`]: `m` must be `[3, 3]` and `x` must be `[N, 2]`.
///
/// Shapes are validated up front; numeric semantics (including `w = 0`) match
/// the slice version.
pub fn perspective_multiply_array(
    m: ArrayView2<'_, f64>,
    x: ArrayView2<'_, f64>,
) -> Result<Array2<f64>, ArrayError> {
    if m.dim() != (3, 3) {
        tracing::debug!(shape = ?m.shape(), "transform matrix is not 3x3");
        return Err(ArrayError::shape("M", "[3, 3]", m.shape()));
    }
    if x.ncols() != 2 {
        tracing::debug!(shape = ?x.shape(), "point array is not N-by-2");
        return Err(ArrayError::shape("x", "[N, 2]", x.shape()));
    }
    // rows of x_hom · Mᵀ are (M x_hom_i)ᵀ
    let y = to_homogeneous(x).dot(&m.t());
    let w = y.column(2);
    if w.iter().any(|&wi| wi == 0.0) {
        tracing::trace!(
            zeros = w.iter().filter(|&&wi| wi == 0.0).count(),
            "zero homogeneous coordinates, projected points are non-finite"
        );
    }
    let mut out = y.slice(s![.., ..2]).to_owned();
    out /= &w.insert_axis(Axis(1));
    Ok(out)
}
