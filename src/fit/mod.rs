//! Scoring model lines against masked data.
//!
//! Responsibilities:
//!
//! - residual / chi-squared maps and log-likelihood of one model line
//! - parallel scoring of trial parameter vectors
//! - deterministic pick of the best trial
//!
//! Proposing trials is left to the caller.

pub mod analysis;
pub mod line_fit;

pub use analysis::*;
pub use line_fit::*;
