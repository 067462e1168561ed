//! Unmasked 1D line datasets.

use serde::Serialize;

use crate::error::{ProfileError, Result};
use crate::math::arange;

/// A 1D line: one data value and one RMS noise value per pixel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineDataset {
    data: Vec<f64>,
    noise_map: Vec<f64>,
}

impl LineDataset {
    /// # Errors
    /// `ProfileError::ShapeMismatch` if `noise_map` and `data` differ in length.
    pub fn new(data: Vec<f64>, noise_map: Vec<f64>) -> Result<Self> {
        if data.len() != noise_map.len() {
            return Err(ProfileError::shape("noise map", data.len(), noise_map.len()));
        }
        Ok(Self { data, noise_map })
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn noise_map(&self) -> &[f64] {
        &self.noise_map
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Pixel coordinates `[0, N)`.
    pub fn xvalues(&self) -> Vec<f64> {
        arange(self.len())
    }

    /// Drop `left` pixels from the start and `right` pixels from the end.
    ///
    /// Pixel coordinates of the result restart at zero.
    pub fn trimmed(&self, left: usize, right: usize) -> Result<Self> {
        let range = trim_range(self.len(), left, right)?;
        Ok(Self {
            data: self.data[range.clone()].to_vec(),
            noise_map: self.noise_map[range].to_vec(),
        })
    }
}

pub(crate) fn trim_range(len: usize, left: usize, right: usize) -> Result<std::ops::Range<usize>> {
    match left.checked_add(right) {
        Some(total) if total <= len => Ok(left..len - right),
        _ => Err(ProfileError::shape(
            "trim exceeds line length",
            len,
            left.saturating_add(right),
        )),
    }
}
