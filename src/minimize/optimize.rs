use super::algorithms::Algorithm;
use super::bracket::{bracket, BracketCfg};
use super::brent::{brent, BrentCfg, BrentError};
use super::config::{CommonCfg, SearchCfg, impl_common_cfg, impl_search_cfg};
use super::counted::CountedFn;
use super::errors::ConfigError;
use super::report::{Bracket, BracketReport, BracketStatus, MinimizeReport};
use thiserror::Error;


const ALGORITHM: &str = Algorithm::Minimize.algorithm_name();


#[derive(Debug, Error)]
pub enum MinimizeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Brent(#[from] BrentError),

    #[error("bracket search did not enclose a minimum: status {status}")]
    BracketNotFound { status: BracketStatus, bracket: Bracket },
}


/// Minimize Configuration
///
/// Same fields as [`BracketCfg`]; tolerances are shared by the bracket
/// search and Brent's method.
///
/// # Defaults
/// ┌ `x0`, `x1` : unset
/// ├ bounds     : `(-inf, +inf)`
/// ├ `gfactor`  : 2.0
/// ├ `rel_tol`  : 1.4902e-08
/// ├ `abs_tol`  : 1.4902e-08
/// └ `max_iter` : 500, applied to each stage separately
#[derive(Debug, Copy, Clone)]
pub struct MinimizeCfg {
    common: CommonCfg,
    search: SearchCfg,
}
impl MinimizeCfg {
    pub const DEFAULT_REL_TOL: f64 = 1.4902e-08;
    pub const DEFAULT_ABS_TOL: f64 = 1.4902e-08;

    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::with_tolerances(Self::DEFAULT_REL_TOL, Self::DEFAULT_ABS_TOL),
            search: SearchCfg::new(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.common.validate()?;
        self.search.validate()
    }

    fn bracket_cfg(&self) -> BracketCfg {
        BracketCfg { common: self.common, search: self.search }
    }

    fn brent_cfg(&self) -> BrentCfg {
        BrentCfg { common: self.common }
    }
}
impl Default for MinimizeCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(MinimizeCfg);
impl_search_cfg!(MinimizeCfg);


/// Runs Brent's method on the bracket found by the search, sharing the
/// evaluation counter of the whole run.
fn refine<F>(
    mut counted: CountedFn<F>,
    search: BracketReport,
    cfg: &MinimizeCfg
) -> Result<MinimizeReport, MinimizeError>
where F: FnMut(f64) -> f64 {
    let refined = brent(|x| counted.call(x), &search.bracket, cfg.brent_cfg())?;

    tracing::debug!(
        algorithm = ALGORITHM,
        bracket_status = %search.status,
        evaluations = counted.count(),
        x_min = refined.x_min,
        "minimization finished"
    );

    Ok(MinimizeReport {
        x_min          : refined.x_min,
        f_min          : refined.f_min,
        evaluations    : counted.count(),
        bracket        : search.bracket,
        bracket_status : search.status,
        iterations     : refined.iterations,
        termination    : refined.termination,
        algorithm_name : ALGORITHM,
    })
}


/// Finds a local minimum of `func` by bracketing followed by Brent's method.
///
/// # Arguments
/// - `func` : function to minimize
/// - `cfg`  : [`MinimizeCfg`]
///
/// # Returns
/// [`MinimizeReport`] with
/// - `x_min`, `f_min`  : minimum estimate
/// - `evaluations`     : exact number of calls made to `func`
/// - `bracket_status`  : status of the bracket search
/// - `termination`     : why Brent's method stopped
///
/// # Errors
/// - [`MinimizeError::Config`] : invalid configuration
/// - [`MinimizeError::Brent`]  : the search produced a non-finite bracket
///   (e.g. a huge `gfactor` overflowing to infinity)
///
/// # Warning
/// - The bracket status is not acted upon: when the search ends with anything
///   other than [`BracketStatus::Found`] the refinement still runs on that
///   triple and the result is only a best effort. Inspect `bracket_status`,
///   or use [`minimize_strict`] to get an error instead.
pub fn minimize<F>(
    func: F,
    cfg: MinimizeCfg
) -> Result<MinimizeReport, MinimizeError>
where F: FnMut(f64) -> f64 {
    cfg.validate()?;

    let mut counted = CountedFn::new(func);
    let search = bracket(|x| counted.call(x), cfg.bracket_cfg())?;

    if !search.status.is_found() {
        tracing::warn!(
            algorithm = ALGORITHM,
            status = %search.status,
            low = search.bracket.low.x,
            high = search.bracket.high.x,
            "refining a bracket that may not enclose a minimum"
        );
    }

    refine(counted, search, &cfg)
}


/// Like [`minimize`], but stops before refining when the bracket search
/// does not end with [`BracketStatus::Found`].
///
/// # Errors
/// - [`MinimizeError::BracketNotFound`] : carries the status and the bracket
/// - otherwise as [`minimize`]
pub fn minimize_strict<F>(
    func: F,
    cfg: MinimizeCfg
) -> Result<MinimizeReport, MinimizeError>
where F: FnMut(f64) -> f64 {
    cfg.validate()?;

    let mut counted = CountedFn::new(func);
    let search = bracket(|x| counted.call(x), cfg.bracket_cfg())?;

    if !search.status.is_found() {
        return Err(MinimizeError::BracketNotFound {
            status: search.status,
            bracket: search.bracket,
        });
    }

    refine(counted, search, &cfg)
}
