//! Error type shared by every module of the crate.
//!
//! All failures are synchronous and raised at the point of violation. Non-finite
//! floating-point results (e.g. a zero-noise pixel in a signal-to-noise map) are
//! values, not errors; callers decide how to treat them.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProfileError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    /// A model parameter is outside its domain (e.g. `sigma <= 0`).
    #[error("invalid value for `{parameter}`: {value} (must be finite and > 0)")]
    Domain { parameter: &'static str, value: f64 },

    /// Two sequences that must line up have different lengths.
    #[error("{what}: expected length {expected}, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// None of the supplied trials produced a finite log-likelihood.
    #[error("no trial produced a finite log-likelihood")]
    NoValidTrials,
}

impl ProfileError {
    pub(crate) fn shape(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            what,
            expected,
            actual,
        }
    }
}
