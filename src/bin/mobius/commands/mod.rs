pub mod analyze;
pub mod convergence;
pub mod export;
