//! Synthetic line datasets from known profiles.
//!
//! A model line is evaluated on integer pixels, Gaussian noise at the requested
//! signal-to-noise level is added, and the noise map is set to that same
//! constant RMS. The RNG is seeded so a given config always yields the same data.

use std::env::VarError;

use log::debug;
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;
use serde::Serialize;

use crate::data::LineDataset;
use crate::error::{ProfileError, Result};
use crate::math::arange;
use crate::models::CompositeProfile;

const ENV_PIXELS: &str = "LINE_PROFILES_PIXELS";
const ENV_SNR: &str = "LINE_PROFILES_SNR";
const ENV_SEED: &str = "LINE_PROFILES_SEED";

/// Settings for `simulate_dataset`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationConfig {
    /// Number of pixels in the simulated line.
    pub pixels: usize,
    /// Noise RMS is `1 / signal_to_noise`.
    pub signal_to_noise: f64,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            pixels: 100,
            signal_to_noise: 25.0,
            seed: 1,
        }
    }
}

impl SimulationConfig {
    /// Defaults overridden by `LINE_PROFILES_PIXELS`, `LINE_PROFILES_SNR` and
    /// `LINE_PROFILES_SEED` (a `.env` file is loaded first if present).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env_value(key, std::env::var(key)))
    }

    /// Defaults overridden by whatever `lookup` returns for each setting key.
    ///
    /// `Ok(None)` keeps the default; unparsable values are `InvalidConfig`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Result<Option<String>>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(v) = parse_setting::<usize>(ENV_PIXELS, lookup(ENV_PIXELS)?)? {
            config.pixels = v;
        }
        if let Some(v) = parse_setting::<f64>(ENV_SNR, lookup(ENV_SNR)?)? {
            config.signal_to_noise = v;
        }
        if let Some(v) = parse_setting::<u64>(ENV_SEED, lookup(ENV_SEED)?)? {
            config.seed = v;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.pixels == 0 {
            return Err(ProfileError::InvalidConfig("pixel count must be > 0".to_string()));
        }
        if !(self.signal_to_noise.is_finite() && self.signal_to_noise > 0.0) {
            return Err(ProfileError::InvalidConfig(format!(
                "signal-to-noise must be finite and > 0, got {}",
                self.signal_to_noise
            )));
        }
        Ok(())
    }

    pub fn noise_sigma(&self) -> f64 {
        1.0 / self.signal_to_noise
    }
}

fn env_value(key: &str, var: std::result::Result<String, VarError>) -> Result<Option<String>> {
    match var {
        Ok(raw) => Ok(Some(raw)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(ProfileError::InvalidConfig(format!(
            "{key} is not valid unicode: {raw:?}"
        ))),
    }
}

fn parse_setting<T: std::str::FromStr>(key: &str, raw: Option<String>) -> Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    let Some(raw) = raw else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|e| ProfileError::InvalidConfig(format!("{key}={raw:?}: {e}")))
}

/// Evaluate `profile` on `[0, pixels)` and add seeded Gaussian noise.
pub fn simulate_dataset(profile: &CompositeProfile, config: &SimulationConfig) -> Result<LineDataset> {
    config.validate()?;

    let sigma = config.noise_sigma();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let normal = Normal::new(0.0, sigma)
        .map_err(|e| ProfileError::InvalidConfig(format!("noise distribution error: {e}")))?;

    debug!(
        "simulating {} pixels from {} component(s), snr={}, seed={}",
        config.pixels,
        profile.len(),
        config.signal_to_noise,
        config.seed
    );

    let xvalues = arange(config.pixels);
    let data: Vec<f64> = profile
        .evaluate(&xvalues)
        .into_iter()
        .map(|y| y + normal.sample(&mut rng))
        .collect();
    let noise_map = vec![sigma; config.pixels];

    LineDataset::new(data, noise_map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Exponential, Gaussian};

    fn model() -> CompositeProfile {
        CompositeProfile::new()
            .with("gaussian", Gaussian::new(50.0, 25.0, 10.0).unwrap())
            .with("exponential", Exponential::new(30.0, 10.0, 0.1).unwrap())
    }

    #[test]
    fn simulation_is_deterministic_per_seed() {
        let config = SimulationConfig::default();
        let a = simulate_dataset(&model(), &config).unwrap();
        let b = simulate_dataset(&model(), &config).unwrap();
        assert_eq!(a, b);

        let c = simulate_dataset(&model(), &SimulationConfig { seed: 2, ..config }).unwrap();
        assert_ne!(a.data(), c.data());
    }

    #[test]
    fn noise_map_is_constant_and_noise_is_small() {
        let config = SimulationConfig::default();
        let ds = simulate_dataset(&model(), &config).unwrap();
        assert_eq!(ds.len(), 100);
        assert!(ds.noise_map().iter().all(|&n| n == 0.04));

        let truth = model().evaluate(&ds.xvalues());
        let mean_sq: f64 = ds
            .data()
            .iter()
            .zip(&truth)
            .map(|(d, t)| (d - t).powi(2))
            .sum::<f64>()
            / ds.len() as f64;
        // RMS of the added noise should be close to 1/snr.
        let rms = mean_sq.sqrt();
        assert!(rms > 0.02 && rms < 0.06, "rms={rms}");
    }

    #[test]
    fn invalid_config_is_rejected() {
        let bad = SimulationConfig {
            pixels: 0,
            ..SimulationConfig::default()
        };
        assert!(matches!(simulate_dataset(&model(), &bad), Err(ProfileError::InvalidConfig(_))));

        let bad = SimulationConfig {
            signal_to_noise: 0.0,
            ..SimulationConfig::default()
        };
        assert!(bad.validate().is_err());
    }

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Result<Option<String>> {
        let pairs: Vec<(String, String)> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| Ok(pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone()))
    }

    #[test]
    fn missing_settings_keep_defaults() {
        let config = SimulationConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn override_applies_and_other_fields_keep_defaults() {
        let config = SimulationConfig::from_lookup(lookup(&[(ENV_SEED, " 7 ")])).unwrap();
        assert_eq!(
            config,
            SimulationConfig {
                seed: 7,
                ..SimulationConfig::default()
            }
        );
    }

    #[test]
    fn unparsable_setting_is_invalid_config() {
        let err = SimulationConfig::from_lookup(lookup(&[(ENV_SEED, "not-a-number")])).unwrap_err();
        match err {
            ProfileError::InvalidConfig(msg) => assert!(msg.contains("LINE_PROFILES_SEED"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn negative_snr_fails_validation() {
        let err = SimulationConfig::from_lookup(lookup(&[(ENV_SEED, "7"), (ENV_SNR, "-1")])).unwrap_err();
        match err {
            ProfileError::InvalidConfig(msg) => assert!(msg.contains("signal-to-noise"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn env_values_distinguish_absent_from_non_unicode() {
        assert_eq!(env_value(ENV_SEED, Err(VarError::NotPresent)).unwrap(), None);
        assert_eq!(env_value(ENV_SEED, Ok("3".to_string())).unwrap(), Some("3".to_string()));

        let bad = VarError::NotUnicode(std::ffi::OsString::from("\u{fffd}"));
        assert!(matches!(env_value(ENV_SEED, Err(bad)), Err(ProfileError::InvalidConfig(_))));
    }
}
