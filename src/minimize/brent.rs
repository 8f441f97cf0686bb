use super::algorithms::Algorithm;
use super::config::{CommonCfg, impl_common_cfg};
use super::counted::CountedFn;
use super::errors::ConfigError;
use super::report::{Bracket, BrentReport, TerminationReason};
use super::tolerances::tol;
use thiserror::Error;


const ALGORITHM: &str = Algorithm::Brent.algorithm_name();

/// `(3 - sqrt(5)) / 2`, fraction of the larger sub-interval taken by a golden-section step.
const GOLDEN_SECTION: f64 = 0.381_966_011_250_105_1;


#[derive(Debug, Error)]
pub enum BrentError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid bracket: abscissas must be finite with low <= mid <= high. got ({low}, {mid}, {high})")]
    InvalidBracket { low: f64, mid: f64, high: f64 },
}


/// Brent's Configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with `rel_tol`, `abs_tol` and `max_iter`.
///
/// # Construction
/// - Use [`BrentCfg::new`] then optional setters.
#[derive(Debug, Copy, Clone)]
pub struct BrentCfg {
    pub(crate) common: CommonCfg
}
impl BrentCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.common.validate()
    }
}
impl Default for BrentCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(BrentCfg);


/// Vertex of the parabola through `(x, fx)`, `(w, fw)` and `(v, fv)` as an
/// offset `p / q` from `x`, with the sign folded into `p` so that `q >= 0`.
#[inline]
fn parabolic_offset(
    (x, fx): (f64, f64),
    (w, fw): (f64, f64),
    (v, fv): (f64, f64),
) -> (f64, f64) {
    let r = (x - w) * (fx - fv);
    let q = (x - v) * (fx - fw);
    let p = (x - v) * q - (x - w) * r;
    let q = 2.0 * (q - r);

    if q > 0.0 { (-p, q) } else { (p, -q) }
}


fn report(
    x: f64,
    fx: f64,
    iterations: usize,
    termination: TerminationReason,
    (a, b): (f64, f64),
    evaluations: usize
) -> BrentReport {
    tracing::debug!(
        algorithm = ALGORITHM,
        ?termination,
        iterations,
        evaluations,
        x_min = x,
        f_min = fx,
        "refinement finished"
    );

    BrentReport {
        x_min          : x,
        f_min          : fx,
        iterations,
        evaluations,
        termination,
        interval       : [a, b],
        algorithm_name : ALGORITHM,
    }
}


/// Refines a bracket to a local minimum using Brent's method
/// (golden-section search + parabolic interpolation).
///
/// The bracket is expected to enclose a minimum (`low.f > mid.f < high.f`).
/// Only its ordering is checked; an invalid bracket still runs and converges
/// to some point of `[low.x, high.x]`.
///
/// # Arguments
/// - `func`    : function to evaluate
/// - `bracket` : [`Bracket`] to refine, its three points are not re-evaluated
/// - `cfg`     : [`BrentCfg`] (tolerances, `max_iter`)
///
/// # Returns
/// [`BrentReport`] with
/// - `x_min`, `f_min` : best point found
/// - `iterations`     : refinement steps performed
/// - `evaluations`    : new objective evaluations
/// - `termination`    : [`TerminationReason::ToleranceReached`] once
///   `|x - m| <= 2 tol(x) - (b - a) / 2`, [`TerminationReason::IterationLimit`]
///   when `max_iter` steps ran out
/// - `interval`       : final `[a, b]`
///
/// # Errors
/// - [`BrentError::InvalidBracket`] : non-finite abscissas or `mid` outside `[low, high]`
/// - [`BrentError::Config`]         : invalid tolerances or `max_iter`
///
/// # Notes
/// - Parabolic steps are accepted only if they land strictly inside `(a, b)`
///   and move less than half the step before last; otherwise a golden-section
///   step is taken into the larger sub-interval.
/// - Trial points are never closer than `tol(x)` to the current best point.
pub fn brent<F>(
    func: F,
    bracket: &Bracket,
    cfg: BrentCfg
) -> Result<BrentReport, BrentError>
where F: FnMut(f64) -> f64 {

    cfg.validate()?;

    let [low, mid, high] = bracket.xs();
    if !(low.is_finite() && mid.is_finite() && high.is_finite())
        || low > mid
        || mid > high {
        return Err(BrentError::InvalidBracket { low, mid, high });
    }

    let rel_tol  = cfg.common.rel_tol();
    let abs_tol  = cfg.common.abs_tol();
    let max_iter = cfg.common.max_iter();

    let mut eval = CountedFn::new(func);

    let mut a = low;
    let mut b = high;

    // x: best so far, w: second best, v: previous w
    let mut x  = bracket.mid.x;
    let mut fx = bracket.mid.f;
    let (mut w, mut fw, mut v, mut fv) = if bracket.low.f <= bracket.high.f {
        (bracket.low.x, bracket.low.f, bracket.high.x, bracket.high.f)
    } else {
        (bracket.high.x, bracket.high.f, bracket.low.x, bracket.low.f)
    };

    // d: last step, e: step before last
    let mut d: f64 = 0.0;
    let mut e: f64 = 0.0;

    for iter in 0..max_iter {
        let xm   = 0.5 * (a + b);
        let tol1 = tol(x, rel_tol, abs_tol);
        let tol2 = 2.0 * tol1;

        if (x - xm).abs() <= tol2 - 0.5 * (b - a) {
            return Ok(report(x, fx, iter, TerminationReason::ToleranceReached, (a, b), eval.count()));
        }

        let mut golden = true;
        if e.abs() > tol1 {
            let (p, q) = parabolic_offset((x, fx), (w, fw), (v, fv));
            let e_prev = e;
            e = d;

            if p.abs() < (0.5 * q * e_prev).abs()
                && p > q * (a - x)
                && p < q * (b - x) {
                d = p / q;
                let u = x + d;
                // keep away from the endpoints
                if u - a < tol2 || b - u < tol2 {
                    d = tol1.copysign(xm - x);
                }
                golden = false;
            }
        }

        if golden {
            e = if x >= xm { a - x } else { b - x };
            d = GOLDEN_SECTION * e;
        }

        let u  = if d.abs() >= tol1 { x + d } else { x + tol1.copysign(d) };
        let fu = eval.call(u);

        let step = if golden { "golden" } else { "parabolic" };
        tracing::trace!(
            algorithm = ALGORITHM,
            iteration = iter + 1,
            step,
            u,
            fu,
            "trial point"
        );

        if fu <= fx {
            if u >= x { a = x; } else { b = x; }
            v = w; fv = fw;
            w = x; fw = fx;
            x = u; fx = fu;
        } else {
            if u < x { a = u; } else { b = u; }
            if fu <= fw || w == x {
                v = w; fv = fw;
                w = u; fw = fu;
            } else if fu <= fv || v == x || v == w {
                v = u; fv = fu;
            }
        }
    }

    Ok(report(x, fx, max_iter, TerminationReason::IterationLimit, (a, b), eval.count()))
}
