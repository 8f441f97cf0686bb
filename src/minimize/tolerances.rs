//! Tolerance and bound helpers shared by the bracket search and Brent's method.
//!
//! `tol(x) = |x| * rel_tol + abs_tol` is the smallest separation treated as 
//! distinguishable near `x`. 


/// Scale-aware resolution near `x`.
#[inline]
pub(crate) fn tol(x: f64, rel_tol: f64, abs_tol: f64) -> f64 { 
    x.abs() * rel_tol + abs_tol
}


/// Clamps `x` into `[lower, upper]`. 
/// 
/// Unlike [`f64::clamp`] this never panics; bounds are validated upstream.
#[inline]
pub(crate) fn clamp_to(x: f64, lower: f64, upper: f64) -> f64 { 
    x.min(upper).max(lower)
}


/// Returns `true` if `x` sits exactly on either bound.
#[inline]
pub(crate) fn on_boundary(x: f64, lower: f64, upper: f64) -> bool { 
    x == lower || x == upper
}


/// Returns `true` if `x` lies in the open interval `(lower, upper)`.
#[inline]
pub(crate) fn strictly_inside(x: f64, lower: f64, upper: f64) -> bool { 
    lower < x && x < upper
}
