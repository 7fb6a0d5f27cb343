use crate::RnError;

/// Floating point type used throughout the workspace.
///
/// Node values are plain reals; keeping the alias makes a future switch
/// to f32 a one-line change.
pub type Real = f64;

/// One tolerance pair for everything.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// Absolute-then-relative float comparison.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Reject NaN and infinities at the boundary, before they reach the core.
pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, RnError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(RnError::NonFinite { what, value: v })
    }
}
