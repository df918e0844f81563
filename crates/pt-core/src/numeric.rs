use crate::PtError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
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

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// `a >= b`, treating values within tolerance as equal.
///
/// Host flows are round-tripped through unit conversions, so a plain `>=`
/// would reject a downstream port carrying the "same" flow.
pub fn at_least(a: Real, b: Real, tol: Tolerances) -> bool {
    a >= b || nearly_equal(a, b, tol)
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PtError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PtError::NonFinite { what, value: v })
    }
}
