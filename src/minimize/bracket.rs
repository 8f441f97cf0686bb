use super::algorithms::Algorithm;
use super::config::{CommonCfg, SearchCfg, impl_common_cfg, impl_search_cfg};
use super::counted::CountedFn;
use super::errors::ConfigError;
use super::report::{Bracket, BracketReport, BracketStatus, Point};
use super::tolerances::{tol, clamp_to, on_boundary, strictly_inside};


const ALGORITHM: &str = Algorithm::Bracket.algorithm_name();


/// Bracket Search Configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with `rel_tol`, `abs_tol` and `max_iter`.
/// - `search` : [`SearchCfg`] with start points, bounds and growth factor.
///
/// # Construction
/// - Use [`BracketCfg::new`] then optional setters.
///
/// # Defaults
/// ┌ `x0`, `x1` : unset
/// ├ bounds     : `(-inf, +inf)`
/// ├ `gfactor`  : 2.0
/// ├ `rel_tol`  : 1.4901161193847656e-08
/// ├ `abs_tol`  : 1.4901161193847656e-08
/// └ `max_iter` : 500
#[derive(Debug, Copy, Clone)]
pub struct BracketCfg {
    pub(crate) common: CommonCfg,
    pub(crate) search: SearchCfg,
}
impl BracketCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            search: SearchCfg::new(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.common.validate()?;
        self.search.validate()
    }
}
impl Default for BracketCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(BracketCfg);
impl_search_cfg!(BracketCfg);


/// Resolves the two start points.
///
/// ┌ none given : `x0 = clamp(0, lower, upper)`, `x1` derived
/// ├ one given  : it becomes `x0`, `x1` derived
/// └ both given : sorted ascending
fn initial_interval(search: &SearchCfg, rel_tol: f64, abs_tol: f64) -> (f64, f64) {
    let (lower, upper) = search.bounds();
    let gfactor = search.gfactor();

    match (search.x0(), search.x1()) {
        (Some(x0), Some(x1)) => (x0.min(x1), x0.max(x1)),
        (Some(x0), None) | (None, Some(x0)) => {
            (x0, second_point(x0, lower, upper, gfactor, rel_tol, abs_tol))
        }
        (None, None) => {
            let x0 = clamp_to(0.0, lower, upper);
            (x0, second_point(x0, lower, upper, gfactor, rel_tol, abs_tol))
        }
    }
}


/// Steps `10 * gfactor * tol(x0)` away from `x0` towards whichever bound
/// leaves more room, clamped into the bounds.
#[inline]
fn second_point(
    x0: f64,
    lower: f64,
    upper: f64,
    gfactor: f64,
    rel_tol: f64,
    abs_tol: f64
) -> f64 {
    let step = 10.0 * gfactor * tol(x0, rel_tol, abs_tol);
    if x0 - lower > upper - x0 {
        (x0 - step).max(lower)
    } else {
        (x0 + step).min(upper)
    }
}


/// Two neighbouring points share a function value: bisect them and test
/// whether the midpoint dips below both.
fn resolve_equal_values<F>(
    eval: &mut CountedFn<F>,
    p0: Point,
    p1: Point
) -> (Bracket, BracketStatus)
where F: FnMut(f64) -> f64 {
    let xm  = p0.x / 2.0 + p1.x / 2.0;
    let mid = Point::new(xm, eval.call(xm));

    let bracket = Bracket::canonical(p0, mid, p1);
    let status  = if bracket.is_valid() {
        BracketStatus::Found
    } else {
        BracketStatus::NotStrictlyConvex
    };
    (bracket, status)
}


#[inline]
fn encloses_minimum(p0: &Point, p1: &Point, p2: &Point) -> bool {
    p0.f > p1.f && p1.f < p2.f
}


fn finish<F>(
    bracket: Bracket,
    status: BracketStatus,
    iterations: usize,
    eval: &CountedFn<F>
) -> BracketReport {
    tracing::debug!(
        algorithm = ALGORITHM,
        %status,
        iterations,
        evaluations = eval.count(),
        low = bracket.low.x,
        high = bracket.high.x,
        "bracket search finished"
    );

    BracketReport {
        bracket,
        status,
        iterations,
        evaluations: eval.count(),
    }
}


/// Searches for three points `x0 < x1 < x2` with `f(x0) > f(x1) < f(x2)`.
///
/// Starting from two points, the search walks downhill with steps that grow
/// geometrically by `gfactor`, sliding a three-point window forward until the
/// middle point is lower than both neighbours. Every abscissa is clamped into
/// the configured bounds.
///
/// # Arguments
/// - `func` : function to evaluate
/// - `cfg`  : [`BracketCfg`] (start points, bounds, growth factor, tolerances, `max_iter`)
///
/// # Returns
/// [`BracketReport`] with
/// - `bracket`     : triple ordered ascending in `x`
/// - `status`      : [`BracketStatus`]
/// - `iterations`  : expansion steps performed
/// - `evaluations` : objective evaluations
///
/// # Errors
/// - [`ConfigError`] when the configuration is invalid, including start points
///   outside the bounds. Search outcomes are never errors.
///
/// # Warning
/// - Only [`BracketStatus::Found`] guarantees a minimum-containing bracket.
///   A [`BracketStatus::HitBoundary`] triple ends on a bound and may be monotone.
/// - The step grows exponentially from `10 * gfactor * tol(x0)`, so distant
///   minima cost `O(log distance)` evaluations but the window can overshoot
///   narrow minima entirely.
pub fn bracket<F>(
    func: F,
    cfg: BracketCfg
) -> Result<BracketReport, ConfigError>
where F: FnMut(f64) -> f64 {

    cfg.validate()?;

    let rel_tol  = cfg.common.rel_tol();
    let abs_tol  = cfg.common.abs_tol();
    let max_iter = cfg.common.max_iter();
    let gfactor  = cfg.search.gfactor();
    let (lower, upper) = cfg.search.bounds();

    let (x0, x1) = initial_interval(&cfg.search, rel_tol, abs_tol);
    let mut eval = CountedFn::new(func);

    let mut p0 = Point::new(x0, eval.call(x0));
    let mut p1 = Point::new(x1, eval.call(x1));

    // search downhill from p0 towards p1
    if p0.f < p1.f {
        std::mem::swap(&mut p0, &mut p1);
    }

    if (p0.x - p1.x).abs() < 2.0 * tol(p0.x, rel_tol, abs_tol) {
        let bracket = Bracket::canonical(p0, p1, p1);
        return Ok(finish(bracket, BracketStatus::TooClose, 0, &eval));
    }

    if p0.f == p1.f {
        let (bracket, status) = resolve_equal_values(&mut eval, p0, p1);
        return Ok(finish(bracket, status, 0, &eval));
    }

    // cannot expand past a bound
    if on_boundary(p1.x, lower, upper) {
        let bracket = Bracket::canonical(p0, p1, p1);
        return Ok(finish(bracket, BracketStatus::HitBoundary, 0, &eval));
    }

    let x2 = clamp_to(p1.x + gfactor * (p1.x - p0.x), lower, upper);
    let mut p2 = Point::new(x2, eval.call(x2));

    if p1.f == p2.f {
        let (bracket, status) = resolve_equal_values(&mut eval, p1, p2);
        return Ok(finish(bracket, status, 0, &eval));
    }

    let mut iterations = 0;
    while !encloses_minimum(&p0, &p1, &p2)
        && iterations < max_iter
        && strictly_inside(p2.x, lower, upper) {
        iterations += 1;

        let xt = clamp_to(p2.x + gfactor * (p2.x - p1.x), lower, upper);
        let pt = Point::new(xt, eval.call(xt));

        tracing::trace!(algorithm = ALGORITHM, iteration = iterations, x = xt, f = pt.f, "expand");

        p0 = p1;
        p1 = p2;
        p2 = pt;
    }

    let bracket = Bracket::canonical(p0, p1, p2);
    let status  = if encloses_minimum(&p0, &p1, &p2) {
        BracketStatus::Found
    } else if iterations == max_iter {
        BracketStatus::MaxIterations
    } else {
        BracketStatus::HitBoundary
    };

    Ok(finish(bracket, status, iterations, &eval))
}
