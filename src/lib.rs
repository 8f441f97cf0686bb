//! Derivative-free minimization of scalar functions.
//!
//! [`minimize::bracket`] locates three points enclosing a local minimum,
//! [`minimize::brent`] refines such a bracket with Brent's method and
//! [`minimize::minimize`] chains both.

pub mod minimize;

pub use minimize::bracket::{bracket, BracketCfg};
pub use minimize::brent::{brent, BrentCfg, BrentError};
pub use minimize::errors::ConfigError;
pub use minimize::optimize::{minimize, minimize_strict, MinimizeCfg, MinimizeError};
pub use minimize::report::{
    Bracket, BracketReport, BracketStatus, BrentReport, MinimizeReport, Point, TerminationReason,
};
