//! Result types returned by the minimization routines.
//!
//! ┌ [`Point`]          : abscissa and objective value
//! ├ [`Bracket`]        : three ordered points
//! ├ [`BracketStatus`]  : outcome of the bracket search
//! ├ [`BracketReport`]  : returned by [`bracket`](super::bracket::bracket)
//! ├ [`BrentReport`]    : returned by [`brent`](super::brent::brent)
//! └ [`MinimizeReport`] : returned by [`minimize`](super::optimize::minimize)


/// An abscissa `x` together with `f(x)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub f: f64,
}
impl Point {
    pub fn new(x: f64, f: f64) -> Self {
        Self { x, f }
    }
}


/// Three points with `low.x <= mid.x <= high.x`.
///
/// The bracket encloses a local minimum when `low.f > mid.f < high.f`;
/// see [`Bracket::is_valid`]. Degenerate search outcomes may repeat a point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bracket {
    pub low:  Point,
    pub mid:  Point,
    pub high: Point,
}

impl Bracket {
    /// Orders an unordered triple ascending by swapping the outer pair
    /// when `first.x > last.x`. Searches heading towards `-inf` produce
    /// such triples.
    pub(crate) fn canonical(first: Point, mid: Point, last: Point) -> Self {
        if first.x > last.x {
            Self { low: last, mid, high: first }
        } else {
            Self { low: first, mid, high: last }
        }
    }

    /// `true` if `low.f > mid.f < high.f`.
    pub fn is_valid(&self) -> bool {
        self.low.f > self.mid.f && self.mid.f < self.high.f
    }

    pub fn width(&self) -> f64 {
        self.high.x - self.low.x
    }

    pub fn xs(&self) -> [f64; 3] {
        [self.low.x, self.mid.x, self.high.x]
    }

    pub fn fs(&self) -> [f64; 3] {
        [self.low.f, self.mid.f, self.high.f]
    }
}


/// Outcome of the bracket search.
///
/// ├ [`BracketStatus::Unknown`]           : 0, no outcome determined
/// ├ [`BracketStatus::Found`]             : 1, `low.f > mid.f < high.f`
/// ├ [`BracketStatus::HitBoundary`]       : 2, expansion stopped at a search bound
/// ├ [`BracketStatus::TooClose`]          : 3, start points indistinguishable under `tol`
/// ├ [`BracketStatus::MaxIterations`]     : 4, `max_iter` expansions without a bracket
/// └ [`BracketStatus::NotStrictlyConvex`] : 5, equal values and the bisection did not dip
///
/// Only [`BracketStatus::Found`] guarantees a minimum-containing bracket.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BracketStatus {
    Unknown,
    Found,
    HitBoundary,
    TooClose,
    MaxIterations,
    NotStrictlyConvex,
}

impl BracketStatus {
    /// Numeric exit code.
    pub const fn code(self) -> u8 {
        match self {
            BracketStatus::Unknown           => 0,
            BracketStatus::Found             => 1,
            BracketStatus::HitBoundary       => 2,
            BracketStatus::TooClose          => 3,
            BracketStatus::MaxIterations     => 4,
            BracketStatus::NotStrictlyConvex => 5,
        }
    }

    pub const fn is_found(self) -> bool {
        matches!(self, BracketStatus::Found)
    }
}

impl std::fmt::Display for BracketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BracketStatus::Unknown           => "unknown",
            BracketStatus::Found             => "found",
            BracketStatus::HitBoundary       => "hit boundary",
            BracketStatus::TooClose          => "too close",
            BracketStatus::MaxIterations     => "max iterations",
            BracketStatus::NotStrictlyConvex => "not strictly convex",
        };
        write!(f, "{name}")
    }
}


/// Final report of the bracket search.
///
/// - `bracket`     : canonicalized triple
/// - `status`      : [`BracketStatus`], check before trusting `bracket`
/// - `iterations`  : expansion steps performed
/// - `evaluations` : objective evaluations
#[derive(Debug, Copy, Clone)]
pub struct BracketReport {
    pub bracket     : Bracket,
    pub status      : BracketStatus,
    pub iterations  : usize,
    pub evaluations : usize,
}


/// Reasons Brent's method may terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ToleranceReached,
    IterationLimit,
}


/// Final report of Brent's method.
///
/// [`BrentReport`]
/// - `x_min`          : best abscissa found
/// - `f_min`          : function value at `x_min`
/// - `iterations`     : refinement steps performed
/// - `evaluations`    : objective evaluations (bracket points are not re-evaluated)
/// - `termination`    : why the refinement stopped ([`TerminationReason`])
/// - `interval`       : final `[a, b]` around `x_min`
/// - `algorithm_name` : `"brent"`
#[derive(Debug, Copy, Clone)]
pub struct BrentReport {
    pub x_min          : f64,
    pub f_min          : f64,
    pub iterations     : usize,
    pub evaluations    : usize,
    pub termination    : TerminationReason,
    pub interval       : [f64; 2],
    pub algorithm_name : &'static str,
}


/// Final report of [`minimize`](super::optimize::minimize).
///
/// - `x_min`, `f_min`  : minimum estimate and its value
/// - `evaluations`     : every objective call, bracket search and refinement combined
/// - `bracket`         : bracket handed to Brent's method
/// - `bracket_status`  : status of the bracket search
/// - `iterations`      : Brent refinement steps
/// - `termination`     : why Brent's method stopped
/// - `algorithm_name`  : `"minimize"`
#[derive(Debug, Copy, Clone)]
pub struct MinimizeReport {
    pub x_min          : f64,
    pub f_min          : f64,
    pub evaluations    : usize,
    pub bracket        : Bracket,
    pub bracket_status : BracketStatus,
    pub iterations     : usize,
    pub termination    : TerminationReason,
    pub algorithm_name : &'static str,
}
