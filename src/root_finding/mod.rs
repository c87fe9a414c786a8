// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub mod signs;
pub mod trace;
pub mod traits;

// algorithms
pub mod bisection;
pub mod newton;
pub mod secant;
