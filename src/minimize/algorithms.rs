//! Minimization algorithm definitions.  
//!
//! Provides the [`Algorithm`] enum naming every routine in the crate, 
//! along with the shared [`DEFAULT_MAX_ITER`] cap.  


/// Iteration cap used by every routine when `max_iter` is not set. 
/// 
/// For the bracket search this bounds the number of expansion steps, 
/// for Brent's method the number of refinement steps.
pub const DEFAULT_MAX_ITER: usize = 500; 


/// Minimization routines. 
/// - [`Algorithm::Bracket`]  : geometric bracket expansion  
/// - [`Algorithm::Brent`]    : golden-section + parabolic refinement  
/// - [`Algorithm::Minimize`] : bracket search followed by Brent  
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm { 
    Bracket, 
    Brent, 
    Minimize, 
}

impl Algorithm { 
    pub const fn algorithm_name(self) -> &'static str { 
        match self { 
            Algorithm::Bracket  => "bracket", 
            Algorithm::Brent    => "brent", 
            Algorithm::Minimize => "minimize", 
        }
    }
}
impl std::fmt::Display for Algorithm { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { 
        write!(f, "{}", self.algorithm_name())
    }
}
