//! Profile evaluation for the Gaussian and Exponential line shapes.
//!
//! Each shape is an immutable value object whose constructor validates the width
//! parameter. Evaluation is therefore infallible: given x-coordinates it returns
//! one intensity per coordinate, with no cross-element dependency.

use serde::Serialize;

use crate::error::{ProfileError, Result};
use crate::math::{exponential, gaussian};

/// Which closed-form shape a profile uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    Gaussian,
    Exponential,
}

impl ProfileKind {
    pub const ALL: [ProfileKind; 2] = [ProfileKind::Gaussian, ProfileKind::Exponential];

    /// Human-readable label for reports.
    pub fn display_name(self) -> &'static str {
        match self {
            ProfileKind::Gaussian => "Gaussian",
            ProfileKind::Exponential => "Exponential",
        }
    }

    /// Parameter names, in the order used by parameter vectors.
    pub fn param_names(self) -> &'static [&'static str] {
        match self {
            ProfileKind::Gaussian => &["centre", "intensity", "sigma"],
            ProfileKind::Exponential => &["centre", "intensity", "rate"],
        }
    }

    pub fn param_count(self) -> usize {
        self.param_names().len()
    }

    /// Build a profile of this kind from `[centre, intensity, width]`.
    pub fn from_params(self, params: &[f64]) -> Result<Profile> {
        if params.len() != self.param_count() {
            return Err(ProfileError::shape(
                "profile parameter vector",
                self.param_count(),
                params.len(),
            ));
        }
        let (centre, intensity, width) = (params[0], params[1], params[2]);
        match self {
            ProfileKind::Gaussian => Ok(Gaussian::new(centre, intensity, width)?.into()),
            ProfileKind::Exponential => Ok(Exponential::new(centre, intensity, width)?.into()),
        }
    }
}

fn positive(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ProfileError::Domain { parameter, value })
    }
}

/// 1D Gaussian line profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gaussian {
    centre: f64,
    intensity: f64,
    sigma: f64,
}

impl Gaussian {
    /// # Errors
    /// `ProfileError::Domain` if `sigma` is not finite and strictly positive.
    pub fn new(centre: f64, intensity: f64, sigma: f64) -> Result<Self> {
        Ok(Self {
            centre,
            intensity,
            sigma: positive("sigma", sigma)?,
        })
    }

    pub fn centre(&self) -> f64 {
        self.centre
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn evaluate_at(&self, x: f64) -> f64 {
        gaussian(x, self.centre, self.intensity, self.sigma)
    }

    pub fn evaluate(&self, xvalues: &[f64]) -> Vec<f64> {
        xvalues.iter().map(|&x| self.evaluate_at(x)).collect()
    }
}

/// 1D two-sided exponential line profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Exponential {
    centre: f64,
    intensity: f64,
    rate: f64,
}

impl Exponential {
    /// # Errors
    /// `ProfileError::Domain` if `rate` is not finite and strictly positive.
    pub fn new(centre: f64, intensity: f64, rate: f64) -> Result<Self> {
        Ok(Self {
            centre,
            intensity,
            rate: positive("rate", rate)?,
        })
    }

    pub fn centre(&self) -> f64 {
        self.centre
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn evaluate_at(&self, x: f64) -> f64 {
        exponential(x, self.centre, self.intensity, self.rate)
    }

    pub fn evaluate(&self, xvalues: &[f64]) -> Vec<f64> {
        xvalues.iter().map(|&x| self.evaluate_at(x)).collect()
    }
}

/// A single profile of any supported shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Profile {
    Gaussian(Gaussian),
    Exponential(Exponential),
}

impl Profile {
    pub fn kind(&self) -> ProfileKind {
        match self {
            Profile::Gaussian(_) => ProfileKind::Gaussian,
            Profile::Exponential(_) => ProfileKind::Exponential,
        }
    }

    pub fn centre(&self) -> f64 {
        match self {
            Profile::Gaussian(g) => g.centre(),
            Profile::Exponential(e) => e.centre(),
        }
    }

    pub fn intensity(&self) -> f64 {
        match self {
            Profile::Gaussian(g) => g.intensity(),
            Profile::Exponential(e) => e.intensity(),
        }
    }

    /// Parameter values in `kind().param_names()` order.
    pub fn params(&self) -> Vec<f64> {
        match self {
            Profile::Gaussian(g) => vec![g.centre, g.intensity, g.sigma],
            Profile::Exponential(e) => vec![e.centre, e.intensity, e.rate],
        }
    }

    pub fn evaluate_at(&self, x: f64) -> f64 {
        match self {
            Profile::Gaussian(g) => g.evaluate_at(x),
            Profile::Exponential(e) => e.evaluate_at(x),
        }
    }

    /// Evaluate the profile at every coordinate; output length equals input length.
    pub fn evaluate(&self, xvalues: &[f64]) -> Vec<f64> {
        match self {
            Profile::Gaussian(g) => g.evaluate(xvalues),
            Profile::Exponential(e) => e.evaluate(xvalues),
        }
    }
}

impl From<Gaussian> for Profile {
    fn from(value: Gaussian) -> Self {
        Profile::Gaussian(value)
    }
}

impl From<Exponential> for Profile {
    fn from(value: Exponential) -> Self {
        Profile::Exponential(value)
    }
}
