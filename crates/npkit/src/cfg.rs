//! Tolerances for the checked perspective transform.
//!
//! Policy
//! - Unchecked operations take no configuration at all; only
//!   `try_perspective_multiply` consults a `ProjCfg`.

/// Default bound on `|w|` below which a projected point is treated as lying at infinity.
pub(crate) const EPS_W: f64 = 1e-12;

/// Projection configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjCfg {
    /// Points with `|w| <= eps_w` (or non-finite `w`) are rejected.
    pub eps_w: f64,
}

impl Default for ProjCfg {
    fn default() -> Self {
        Self { eps_w: EPS_W }
    }
}

impl ProjCfg {
    /// Reject only an exact zero (or non-finite) homogeneous coordinate.
    #[inline]
    pub fn exact() -> Self {
        Self { eps_w: 0.0 }
    }

    #[inline]
    pub(crate) fn is_at_infinity(&self, w: f64) -> bool {
        !w.is_finite() || w.abs() <= self.eps_w
    }
}
