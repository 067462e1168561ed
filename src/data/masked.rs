//! Masked line datasets.
//!
//! Masked pixels are zeroed rather than removed so every derived array stays
//! index-aligned with `xvalues()` and with model lines evaluated on them.

use std::sync::Arc;

use crate::data::{LineDataset, Mask};
use crate::error::{ProfileError, Result};
use crate::math::arange;

/// A `LineDataset` seen through a `Mask`.
///
/// The underlying dataset is shared read-only; the masked arrays are derived
/// once at construction.
#[derive(Debug, Clone)]
pub struct MaskedLineDataset {
    dataset: Arc<LineDataset>,
    mask: Mask,
    data: Vec<f64>,
    noise_map: Vec<f64>,
}

impl MaskedLineDataset {
    /// # Errors
    /// `ProfileError::ShapeMismatch` if the mask length differs from the dataset length.
    pub fn new(dataset: Arc<LineDataset>, mask: Mask) -> Result<Self> {
        if mask.len() != dataset.len() {
            return Err(ProfileError::shape("mask", dataset.len(), mask.len()));
        }
        let data = apply_mask(dataset.data(), &mask);
        let noise_map = apply_mask(dataset.noise_map(), &mask);
        Ok(Self {
            dataset,
            mask,
            data,
            noise_map,
        })
    }

    pub fn dataset(&self) -> &Arc<LineDataset> {
        &self.dataset
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn xvalues(&self) -> Vec<f64> {
        arange(self.len())
    }

    /// Data with masked pixels set to zero.
    pub fn masked_data(&self) -> &[f64] {
        &self.data
    }

    /// Noise map with masked pixels set to zero.
    pub fn masked_noise_map(&self) -> &[f64] {
        &self.noise_map
    }

    /// Per-pixel `data / noise`.
    ///
    /// Masked pixels report zero, never NaN (a plain `data / noise` would give
    /// 0/0 there). An unmasked pixel with zero noise follows IEEE
    /// division (inf or NaN) and is left for the caller to handle.
    pub fn signal_to_noise_map(&self) -> Vec<f64> {
        self.data
            .iter()
            .zip(&self.noise_map)
            .zip(self.mask.as_slice())
            .map(|((&d, &n), &masked)| if masked { 0.0 } else { d / n })
            .collect()
    }

    /// Trim the dataset and the mask together.
    pub fn trimmed(&self, left: usize, right: usize) -> Result<Self> {
        let dataset = self.dataset.trimmed(left, right)?;
        let mask = self.mask.trimmed(left, right)?;
        Self::new(Arc::new(dataset), mask)
    }
}

fn apply_mask(values: &[f64], mask: &Mask) -> Vec<f64> {
    values
        .iter()
        .zip(mask.as_slice())
        .map(|(&v, &masked)| if masked { 0.0 } else { v })
        .collect()
}
