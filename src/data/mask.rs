//! Boolean pixel masks (`true` = excluded from the fit).

use std::ops::Range;

use serde::Serialize;

use crate::data::dataset::trim_range;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mask(Vec<bool>);

impl Mask {
    /// Mask of `len` pixels with nothing excluded.
    pub fn unmasked(len: usize) -> Self {
        Self(vec![false; len])
    }

    /// Mask of `len` pixels with everything excluded.
    pub fn all_masked(len: usize) -> Self {
        Self(vec![true; len])
    }

    /// Exclude the pixels in `range` (clamped to the mask length).
    pub fn with_masked_range(mut self, range: Range<usize>) -> Self {
        let end = range.end.min(self.0.len());
        let start = range.start.min(end);
        self.0[start..end].fill(true);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_masked(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    pub fn masked_count(&self) -> usize {
        self.0.iter().filter(|&&m| m).count()
    }

    pub fn unmasked_count(&self) -> usize {
        self.len() - self.masked_count()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    pub fn trimmed(&self, left: usize, right: usize) -> Result<Self> {
        let range = trim_range(self.len(), left, right)?;
        Ok(Self(self.0[range].to_vec()))
    }
}

impl From<Vec<bool>> for Mask {
    fn from(value: Vec<bool>) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts() {
        let m = Mask::unmasked(10).with_masked_range(2..5);
        assert_eq!(m.masked_count(), 3);
        assert_eq!(m.unmasked_count(), 7);
        assert!(m.is_masked(2) && m.is_masked(4));
        assert!(!m.is_masked(5));
        assert!(!m.is_masked(100));
    }

    #[test]
    fn range_is_clamped() {
        let m = Mask::unmasked(4).with_masked_range(2..10);
        assert_eq!(m.as_slice(), &[false, false, true, true]);
        let m = Mask::unmasked(4).with_masked_range(7..9);
        assert_eq!(m.masked_count(), 0);
    }

    #[test]
    fn trimming_keeps_alignment() {
        let m = Mask::from(vec![true, false, true, false]);
        assert_eq!(m.trimmed(1, 1).unwrap().as_slice(), &[false, true]);
        assert!(m.trimmed(2, 3).is_err());
    }
}
