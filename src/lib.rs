//! `line-profiles` library crate.
//!
//! Closed-form 1D line profiles (Gaussian, Exponential) and the masked line
//! datasets they are compared against:
//!
//! - `models`: profile shapes, composite sums, parameter-vector mapping
//! - `data`: line datasets, masks, synthetic simulation
//! - `fit`: chi-squared / log-likelihood of model lines, batch trial scoring
//! - `report`: plain-text summaries

pub mod data;
pub mod error;
pub mod fit;
pub mod math;
pub mod models;
pub mod report;

pub use error::{ProfileError, Result};
