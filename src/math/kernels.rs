//! Scalar closed-form profile kernels.
//!
//! - Gaussian: `I / (σ √(2π)) · exp(-½ ((x - c) / σ)²)`
//! - Exponential: `I · λ · exp(-λ |x - c|)`
//!
//! Both kernels assume a strictly positive width (`σ` / `λ`). Validation lives in
//! the model constructors so the hot path stays branch-free.

/// `√(2π)`.
pub const SQRT_2PI: f64 = 2.506_628_274_631_000_7;

/// Normalised Gaussian evaluated at `x`.
#[inline]
pub fn gaussian(x: f64, centre: f64, intensity: f64, sigma: f64) -> f64 {
    let z = (x - centre) / sigma;
    intensity / (sigma * SQRT_2PI) * (-0.5 * z * z).exp()
}

/// Two-sided exponential evaluated at `x`.
#[inline]
pub fn exponential(x: f64, centre: f64, intensity: f64, rate: f64) -> f64 {
    intensity * rate * (-rate * (x - centre).abs()).exp()
}
