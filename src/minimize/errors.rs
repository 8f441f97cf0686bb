//! Configuration error types.  
//! 
//! [`ConfigError`] : precondition violations, raised by the `set_*` setters 
//! and again when a routine starts  
//! ├ invalid tolerances (`rel_tol`, `abs_tol`)  
//! ├ invalid growth factor  
//! ├ invalid search bounds or start points  
//! └ invalid `max_iter`  
//!
//! Algorithmic outcomes (boundary hits, flat functions, iteration limits) 
//! are never errors; they are reported through 
//! [`BracketStatus`](super::report::BracketStatus) and 
//! [`TerminationReason`](super::report::TerminationReason).


use thiserror::Error; 


/// Invalid configuration passed to a minimization routine.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError { 
    #[error("invalid `rel_tol` tolerance: must be finite and >= 0. got {got}")]
    InvalidRelTol { got: f64 },

    #[error("invalid `abs_tol` tolerance: must be finite and >= 0. got {got}")]
    InvalidAbsTol { got: f64 },

    #[error("either `rel_tol` or `abs_tol` must be > 0. got {rel_tol} and {abs_tol}")]
    InvalidAbsRelTol { rel_tol: f64, abs_tol: f64 }, 

    #[error("invalid growth factor: must be finite and > 1. got {got}")]
    InvalidGrowthFactor { got: f64 },

    #[error("invalid bounds: lower <= upper required and neither may be NaN. got [{lower}, {upper}]")]
    InvalidBounds { lower: f64, upper: f64 },

    #[error("invalid start point {x}: must be finite and inside [{lower}, {upper}]")]
    InvalidStartPoint { x: f64, lower: f64, upper: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}
