// common helpers 
pub mod algorithms; 
pub mod report; 
pub mod errors; 
pub mod counted; 
pub(crate) mod config;
pub(crate) mod tolerances; 

// algorithms 
pub mod bracket;
pub mod brent; 
pub mod optimize; 
