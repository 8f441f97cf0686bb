//! Shared configuration for minimization routines.
//!
//! [`CommonCfg`] — fields used by every routine
//! ├ `rel_tol`  : relative tolerance
//! ├ `abs_tol`  : absolute tolerance
//! └ `max_iter` : iteration cap
//!
//! [`SearchCfg`] — fields of the bracket search (also used by `minimize`)
//! ├ `x0`, `x1` : optional start points
//! ├ `lower`    : lower search bound
//! ├ `upper`    : upper search bound
//! └ `gfactor`  : geometric growth factor of the expansion steps
//!
//! Public configs embed these and get their validating `set_*` setters from
//! [`impl_common_cfg`] and [`impl_search_cfg`].


use super::algorithms::DEFAULT_MAX_ITER;
use super::errors::ConfigError;


/// `sqrt(f64::EPSILON)`
pub const DEFAULT_REL_TOL : f64 = 1.4901161193847656e-08;
pub const DEFAULT_ABS_TOL : f64 = 1.4901161193847656e-08;
pub const DEFAULT_GFACTOR : f64 = 2.0;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg {
    rel_tol:  f64,
    abs_tol:  f64,
    max_iter: usize,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self::with_tolerances(DEFAULT_REL_TOL, DEFAULT_ABS_TOL)
    }

    pub(crate) fn with_tolerances(rel_tol: f64, abs_tol: f64) -> Self {
        Self {
            rel_tol,
            abs_tol,
            max_iter : DEFAULT_MAX_ITER,
        }
    }

    // getters
    pub fn rel_tol(&self)  -> f64 { self.rel_tol }
    pub fn abs_tol(&self)  -> f64 { self.abs_tol }
    pub fn max_iter(&self) -> usize { self.max_iter }

    // setters (internal)
    pub(crate) fn with_rel_tol  (&mut self, v: f64)   { self.rel_tol  = v; }
    pub(crate) fn with_abs_tol  (&mut self, v: f64)   { self.abs_tol  = v; }
    pub(crate) fn with_max_iter (&mut self, v: usize) { self.max_iter = v; }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.rel_tol.is_finite() || self.rel_tol < 0.0 {
            return Err(ConfigError::InvalidRelTol { got: self.rel_tol });
        }
        if !self.abs_tol.is_finite() || self.abs_tol < 0.0 {
            return Err(ConfigError::InvalidAbsTol { got: self.abs_tol });
        }
        if self.rel_tol == 0.0 && self.abs_tol == 0.0 {
            return Err(ConfigError::InvalidAbsRelTol { rel_tol: 0.0, abs_tol: 0.0 });
        }
        if self.max_iter == 0 {
            return Err(ConfigError::InvalidMaxIter { got: 0 });
        }
        Ok(())
    }
}

impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}


#[derive(Debug, Copy, Clone)]
pub struct SearchCfg {
    x0:      Option<f64>,
    x1:      Option<f64>,
    lower:   f64,
    upper:   f64,
    gfactor: f64,
}

impl SearchCfg {
    pub fn new() -> Self {
        Self {
            x0      : None,
            x1      : None,
            lower   : f64::NEG_INFINITY,
            upper   : f64::INFINITY,
            gfactor : DEFAULT_GFACTOR,
        }
    }

    // getters
    pub fn x0(&self)      -> Option<f64> { self.x0 }
    pub fn x1(&self)      -> Option<f64> { self.x1 }
    pub fn bounds(&self)  -> (f64, f64) { (self.lower, self.upper) }
    pub fn gfactor(&self) -> f64 { self.gfactor }

    // setters (internal)
    pub(crate) fn with_x0      (&mut self, v: f64) { self.x0 = Some(v); }
    pub(crate) fn with_x1      (&mut self, v: f64) { self.x1 = Some(v); }
    pub(crate) fn with_gfactor (&mut self, v: f64) { self.gfactor = v; }
    pub(crate) fn with_bounds  (&mut self, lower: f64, upper: f64) {
        self.lower = lower;
        self.upper = upper;
    }

    /// Start points are checked against the bounds here rather than in the
    /// setters, since bounds and points may be set in any order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_bounds(self.lower, self.upper)?;
        check_gfactor(self.gfactor)?;

        for x in [self.x0, self.x1].into_iter().flatten() {
            if !x.is_finite() || x < self.lower || x > self.upper {
                return Err(ConfigError::InvalidStartPoint {
                    x,
                    lower: self.lower,
                    upper: self.upper
                });
            }
        }
        Ok(())
    }
}

impl Default for SearchCfg {
    fn default() -> Self { Self::new() }
}


/// `lower <= upper`, no NaN, and the interval must contain a finite number.
pub(crate) fn check_bounds(lower: f64, upper: f64) -> Result<(), ConfigError> {
    if lower.is_nan()
    || upper.is_nan()
    || lower > upper
    || lower == f64::INFINITY
    || upper == f64::NEG_INFINITY {
        return Err(ConfigError::InvalidBounds { lower, upper });
    }
    Ok(())
}

pub(crate) fn check_gfactor(v: f64) -> Result<(), ConfigError> {
    if !v.is_finite() || v <= 1.0 {
        return Err(ConfigError::InvalidGrowthFactor { got: v });
    }
    Ok(())
}


macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_rel_tol(
                mut self, v: f64
            ) -> Result<Self, $crate::minimize::errors::ConfigError> {
                if !v.is_finite() || v < 0.0 {
                    return Err(
                        $crate::minimize::errors::ConfigError::InvalidRelTol { got: v }
                    );
                }

                let abs_tol = self.common.abs_tol();
                if v == 0.0 && abs_tol == 0.0 {
                    return Err(
                        $crate::minimize::errors::ConfigError::InvalidAbsRelTol { rel_tol: v, abs_tol }
                    );
                }
                self.common.with_rel_tol(v);
                Ok(self)
            }
            pub fn set_abs_tol(
                mut self, v: f64
            ) -> Result<Self, $crate::minimize::errors::ConfigError> {
                if !v.is_finite() || v < 0.0 {
                    return Err(
                        $crate::minimize::errors::ConfigError::InvalidAbsTol { got: v }
                    );
                }

                let rel_tol = self.common.rel_tol();
                if v == 0.0 && rel_tol == 0.0 {
                    return Err(
                        $crate::minimize::errors::ConfigError::InvalidAbsRelTol { rel_tol, abs_tol: v }
                    );
                }
                self.common.with_abs_tol(v);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::minimize::errors::ConfigError> {
                if v == 0 {
                    return Err(
                        $crate::minimize::errors::ConfigError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }

            #[inline] #[must_use] pub fn rel_tol(&self)  -> f64   { self.common.rel_tol() }
            #[inline] #[must_use] pub fn abs_tol(&self)  -> f64   { self.common.abs_tol() }
            #[inline] #[must_use] pub fn max_iter(&self) -> usize { self.common.max_iter() }
        }
    };
}
pub(crate) use impl_common_cfg;


macro_rules! impl_search_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_x0(
                mut self, v: f64
            ) -> Result<Self, $crate::minimize::errors::ConfigError> {
                if !v.is_finite() {
                    let (lower, upper) = self.search.bounds();
                    return Err(
                        $crate::minimize::errors::ConfigError::InvalidStartPoint { x: v, lower, upper }
                    );
                }
                self.search.with_x0(v);
                Ok(self)
            }
            pub fn set_x1(
                mut self, v: f64
            ) -> Result<Self, $crate::minimize::errors::ConfigError> {
                if !v.is_finite() {
                    let (lower, upper) = self.search.bounds();
                    return Err(
                        $crate::minimize::errors::ConfigError::InvalidStartPoint { x: v, lower, upper }
                    );
                }
                self.search.with_x1(v);
                Ok(self)
            }
            pub fn set_bounds(
                mut self, lower: f64, upper: f64
            ) -> Result<Self, $crate::minimize::errors::ConfigError> {
                $crate::minimize::config::check_bounds(lower, upper)?;
                self.search.with_bounds(lower, upper);
                Ok(self)
            }
            pub fn set_gfactor(
                mut self, v: f64
            ) -> Result<Self, $crate::minimize::errors::ConfigError> {
                $crate::minimize::config::check_gfactor(v)?;
                self.search.with_gfactor(v);
                Ok(self)
            }

            #[inline] #[must_use] pub fn x0(&self)      -> Option<f64> { self.search.x0() }
            #[inline] #[must_use] pub fn x1(&self)      -> Option<f64> { self.search.x1() }
            #[inline] #[must_use] pub fn bounds(&self)  -> (f64, f64)  { self.search.bounds() }
            #[inline] #[must_use] pub fn gfactor(&self) -> f64         { self.search.gfactor() }
        }
    };
}
pub(crate) use impl_search_cfg;
