//! Coordinate grids for profile evaluation.
//!
//! Datasets are sampled on integer pixel coordinates (`arange`). Profiles can be
//! re-evaluated on coarser or finer grids over the same span with `linspace`.

use crate::error::{ProfileError, Result};

/// Pixel coordinates `[0, 1, ..., n - 1]` as `f64`.
pub fn arange(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

/// Generate `steps` evenly spaced points between `min` and `max` (inclusive).
pub fn linspace(min: f64, max: f64, steps: usize) -> Result<Vec<f64>> {
    if !(min.is_finite() && max.is_finite() && max > min) {
        return Err(ProfileError::InvalidConfig(format!(
            "invalid grid range: min={min}, max={max} (must be finite and max>min)"
        )));
    }
    if steps < 2 {
        return Err(ProfileError::InvalidConfig("grid steps must be >= 2".to_string()));
    }

    let step = (max - min) / (steps as f64 - 1.0);
    let mut out = Vec::with_capacity(steps);
    for i in 0..steps {
        out.push(min + step * i as f64);
    }
    // Pin the endpoint so accumulated rounding never overshoots.
    out[steps - 1] = max;
    Ok(out)
}
