//! Figure-of-merit evaluation for caller-supplied trials.
//!
//! Given:
//! - a masked dataset
//! - an `InstanceMapper` turning parameter vectors into model instances
//! - a list of trial parameter vectors (e.g. proposed by an external search)
//!
//! we build each trial's model line on the dataset's pixels and score it with
//! `LineFit::log_likelihood`. Trials are independent and scored in parallel;
//! results come back in trial order.

use log::{debug, warn};
use rayon::prelude::*;

use crate::data::MaskedLineDataset;
use crate::error::{ProfileError, Result};
use crate::fit::LineFit;
use crate::models::{CompositeProfile, InstanceMapper};

/// Scores model instances against one masked dataset.
#[derive(Debug, Clone)]
pub struct Analysis<M> {
    masked: MaskedLineDataset,
    mapper: M,
    xvalues: Vec<f64>,
}

/// The best-scoring trial of a batch.
#[derive(Debug, Clone)]
pub struct FitResult {
    /// Index of the winning trial in the input batch.
    pub trial: usize,
    pub params: Vec<f64>,
    pub instance: CompositeProfile,
    pub log_likelihood: f64,
    fit: LineFit,
}

impl FitResult {
    pub fn model_line(&self) -> &[f64] {
        self.fit.model_line()
    }

    pub fn fit(&self) -> &LineFit {
        &self.fit
    }
}

#[derive(Debug, Clone)]
struct Candidate {
    idx: usize,
    instance: CompositeProfile,
    fit: LineFit,
    log_likelihood: f64,
}

impl<M: InstanceMapper> Analysis<M> {
    pub fn new(masked: MaskedLineDataset, mapper: M) -> Self {
        let xvalues = masked.xvalues();
        Self {
            masked,
            mapper,
            xvalues,
        }
    }

    pub fn masked_dataset(&self) -> &MaskedLineDataset {
        &self.masked
    }

    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    /// Evaluate `instance` on the dataset's pixels and compare it to the data.
    pub fn fit_for_instance(&self, instance: &CompositeProfile) -> Result<LineFit> {
        LineFit::new(&self.masked, instance.evaluate(&self.xvalues))
    }

    /// Log-likelihood of a single parameter vector.
    pub fn log_likelihood(&self, params: &[f64]) -> Result<f64> {
        let instance = self.mapper.instance_from_vector(params)?;
        Ok(self.fit_for_instance(&instance)?.log_likelihood())
    }

    /// Log-likelihood of every trial, in input order.
    pub fn log_likelihoods(&self, trials: &[Vec<f64>]) -> Vec<Result<f64>> {
        debug!("scoring {} trial(s) against {} pixels", trials.len(), self.masked.len());
        trials
            .par_iter()
            .map(|params| self.log_likelihood(params))
            .collect()
    }

    /// Pick the trial with the highest finite log-likelihood.
    ///
    /// Trials that fail to map (bad length, invalid widths) or score non-finite
    /// are skipped. Ties go to the earlier trial.
    pub fn best_trial(&self, trials: &[Vec<f64>]) -> Result<FitResult> {
        let candidates: Vec<Candidate> = trials
            .par_iter()
            .enumerate()
            .filter_map(|(idx, params)| self.evaluate_candidate(idx, params))
            .collect();

        if candidates.len() < trials.len() {
            warn!(
                "{} of {} trial(s) were skipped (invalid parameters or non-finite likelihood)",
                trials.len() - candidates.len(),
                trials.len()
            );
        }

        let Some(first) = candidates.first() else {
            return Err(ProfileError::NoValidTrials);
        };

        // Deterministic selection: highest likelihood; break ties by trial index.
        let mut best = first;
        for c in &candidates[1..] {
            if c.log_likelihood > best.log_likelihood
                || (c.log_likelihood == best.log_likelihood && c.idx < best.idx)
            {
                best = c;
            }
        }

        let best = best.clone();
        Ok(FitResult {
            trial: best.idx,
            params: trials[best.idx].clone(),
            instance: best.instance,
            log_likelihood: best.log_likelihood,
            fit: best.fit,
        })
    }

    fn evaluate_candidate(&self, idx: usize, params: &[f64]) -> Option<Candidate> {
        let instance = match self.mapper.instance_from_vector(params) {
            Ok(instance) => instance,
            Err(e) => {
                debug!("trial {idx} rejected: {e}");
                return None;
            }
        };
        let fit = self.fit_for_instance(&instance).ok()?;
        let log_likelihood = fit.log_likelihood();
        if !log_likelihood.is_finite() {
            return None;
        }
        Some(Candidate {
            idx,
            instance,
            fit,
            log_likelihood,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::data::{LineDataset, Mask};
    use crate::math::arange;
    use crate::models::{Gaussian, ModelMapper};

    fn exact_gaussian_analysis() -> Analysis<ModelMapper> {
        let truth = CompositeProfile::new().with("gaussian", Gaussian::new(50.0, 25.0, 10.0).unwrap());
        let data = truth.evaluate(&arange(100));
        let ds = LineDataset::new(data, vec![0.04; 100]).unwrap();
        let masked = MaskedLineDataset::new(Arc::new(ds), Mask::unmasked(100)).unwrap();
        Analysis::new(masked, ModelMapper::new().with_gaussian("gaussian"))
    }

    #[test]
    fn true_parameters_score_best() {
        let analysis = exact_gaussian_analysis();
        let trials = vec![
            vec![40.0, 25.0, 10.0],
            vec![50.0, 20.0, 10.0],
            vec![50.0, 25.0, 10.0],
            vec![50.0, 25.0, 12.0],
        ];
        let best = analysis.best_trial(&trials).unwrap();
        assert_eq!(best.trial, 2);
        assert_eq!(best.params, vec![50.0, 25.0, 10.0]);
        assert!(best.fit().chi_squared() < 1e-18);
        assert_eq!(best.model_line().len(), 100);
    }

    #[test]
    fn batch_scores_keep_trial_order() {
        let analysis = exact_gaussian_analysis();
        let trials = vec![vec![50.0, 25.0, 10.0], vec![50.0, 25.0, -1.0], vec![45.0, 25.0, 10.0]];
        let scores = analysis.log_likelihoods(&trials);
        assert_eq!(scores.len(), 3);
        assert!(matches!(scores[1], Err(ProfileError::Domain { .. })));
        let (a, c) = (*scores[0].as_ref().unwrap(), *scores[2].as_ref().unwrap());
        assert!(a > c);
        assert_eq!(a, analysis.log_likelihood(&trials[0]).unwrap());
    }

    #[test]
    fn ties_go_to_the_earlier_trial() {
        let analysis = exact_gaussian_analysis();
        let trials = vec![vec![40.0, 25.0, 10.0], vec![50.0, 25.0, 10.0], vec![50.0, 25.0, 10.0]];
        assert_eq!(analysis.best_trial(&trials).unwrap().trial, 1);
    }

    #[test]
    fn no_valid_trials_is_an_error() {
        let analysis = exact_gaussian_analysis();
        let trials = vec![vec![50.0, 25.0, 0.0], vec![1.0]];
        assert_eq!(analysis.best_trial(&trials).unwrap_err(), ProfileError::NoValidTrials);
        assert_eq!(analysis.best_trial(&[]).unwrap_err(), ProfileError::NoValidTrials);
    }
}
