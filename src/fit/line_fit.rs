//! Goodness-of-fit of a model line against a masked dataset.
//!
//! For every unmasked pixel `i`:
//!
//! ```text
//! residual_i            = data_i - model_i
//! normalized_residual_i = residual_i / noise_i
//! chi_squared_i         = normalized_residual_i^2
//! ```
//!
//! Masked pixels contribute zero to every map and are skipped by the sums. The
//! log-likelihood is `-0.5 * (chi_squared + noise_normalization)` with
//! `noise_normalization = Σ ln(2π noise_i²)` over unmasked pixels.

use std::f64::consts::PI;

use crate::data::MaskedLineDataset;
use crate::error::{ProfileError, Result};

#[derive(Debug, Clone)]
pub struct LineFit {
    model_line: Vec<f64>,
    residual_map: Vec<f64>,
    normalized_residual_map: Vec<f64>,
    chi_squared_map: Vec<f64>,
    chi_squared: f64,
    noise_normalization: f64,
    unmasked_pixels: usize,
}

impl LineFit {
    /// # Errors
    /// `ProfileError::ShapeMismatch` if `model_line` is not pixel-aligned with `masked`.
    pub fn new(masked: &MaskedLineDataset, model_line: Vec<f64>) -> Result<Self> {
        let n = masked.len();
        if model_line.len() != n {
            return Err(ProfileError::shape("model line", n, model_line.len()));
        }

        let data = masked.masked_data();
        let noise = masked.masked_noise_map();
        let mask = masked.mask().as_slice();

        let mut residual_map = vec![0.0; n];
        let mut normalized_residual_map = vec![0.0; n];
        let mut chi_squared_map = vec![0.0; n];
        let mut chi_squared = 0.0;
        let mut noise_normalization = 0.0;
        let mut unmasked_pixels = 0;

        for i in 0..n {
            if mask[i] {
                continue;
            }
            let r = data[i] - model_line[i];
            let nr = r / noise[i];
            let chi = nr * nr;

            residual_map[i] = r;
            normalized_residual_map[i] = nr;
            chi_squared_map[i] = chi;
            chi_squared += chi;
            noise_normalization += (2.0 * PI * noise[i] * noise[i]).ln();
            unmasked_pixels += 1;
        }

        Ok(Self {
            model_line,
            residual_map,
            normalized_residual_map,
            chi_squared_map,
            chi_squared,
            noise_normalization,
            unmasked_pixels,
        })
    }

    pub fn model_line(&self) -> &[f64] {
        &self.model_line
    }

    pub fn residual_map(&self) -> &[f64] {
        &self.residual_map
    }

    pub fn normalized_residual_map(&self) -> &[f64] {
        &self.normalized_residual_map
    }

    pub fn chi_squared_map(&self) -> &[f64] {
        &self.chi_squared_map
    }

    pub fn chi_squared(&self) -> f64 {
        self.chi_squared
    }

    pub fn noise_normalization(&self) -> f64 {
        self.noise_normalization
    }

    pub fn unmasked_pixels(&self) -> usize {
        self.unmasked_pixels
    }

    /// `chi_squared / unmasked_pixels` (NaN when every pixel is masked).
    pub fn reduced_chi_squared(&self) -> f64 {
        self.chi_squared / self.unmasked_pixels as f64
    }

    pub fn log_likelihood(&self) -> f64 {
        -0.5 * (self.chi_squared + self.noise_normalization)
    }
}
