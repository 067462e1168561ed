//! Mapping from flat parameter vectors to model instances.
//!
//! A non-linear search works on plain `&[f64]` vectors. `ModelMapper` describes
//! which components make up the model and turns each vector into a validated
//! `CompositeProfile`. Callers with bespoke needs (shared parameters, fixed
//! values, priors folded in) can supply their own closure through `FnMapper`.

use crate::error::{ProfileError, Result};
use crate::models::{CompositeProfile, ProfileKind};

/// Anything that can build a model instance from a parameter vector.
pub trait InstanceMapper: Sync {
    /// Length of the parameter vectors this mapper accepts.
    fn param_count(&self) -> usize;

    fn instance_from_vector(&self, params: &[f64]) -> Result<CompositeProfile>;
}

/// Component list describing a composite model.
///
/// Parameter vectors are laid out component by component, each component using
/// its kind's `param_names()` order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelMapper {
    components: Vec<(String, ProfileKind)>,
}

impl ModelMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_component(mut self, name: impl Into<String>, kind: ProfileKind) -> Self {
        self.components.push((name.into(), kind));
        self
    }

    pub fn with_gaussian(self, name: impl Into<String>) -> Self {
        self.with_component(name, ProfileKind::Gaussian)
    }

    pub fn with_exponential(self, name: impl Into<String>) -> Self {
        self.with_component(name, ProfileKind::Exponential)
    }

    pub fn components(&self) -> &[(String, ProfileKind)] {
        &self.components
    }

    /// Fully qualified parameter names, e.g. `gaussian.sigma`.
    pub fn param_names(&self) -> Vec<String> {
        self.components
            .iter()
            .flat_map(|(name, kind)| {
                kind.param_names()
                    .iter()
                    .map(move |param| format!("{name}.{param}"))
            })
            .collect()
    }
}

impl InstanceMapper for ModelMapper {
    fn param_count(&self) -> usize {
        self.components.iter().map(|(_, kind)| kind.param_count()).sum()
    }

    fn instance_from_vector(&self, params: &[f64]) -> Result<CompositeProfile> {
        let expected = self.param_count();
        if params.len() != expected {
            return Err(ProfileError::shape("parameter vector", expected, params.len()));
        }

        let mut instance = CompositeProfile::new();
        let mut offset = 0;
        for (name, kind) in &self.components {
            let n = kind.param_count();
            let profile = kind.from_params(&params[offset..offset + n])?;
            instance.push(name.clone(), profile);
            offset += n;
        }
        Ok(instance)
    }
}

/// Adapts a caller-supplied closure into an `InstanceMapper`.
pub struct FnMapper<F> {
    param_count: usize,
    build: F,
}

impl<F> FnMapper<F>
where
    F: Fn(&[f64]) -> Result<CompositeProfile> + Sync,
{
    pub fn new(param_count: usize, build: F) -> Self {
        Self { param_count, build }
    }
}

impl<F> InstanceMapper for FnMapper<F>
where
    F: Fn(&[f64]) -> Result<CompositeProfile> + Sync,
{
    fn param_count(&self) -> usize {
        self.param_count
    }

    fn instance_from_vector(&self, params: &[f64]) -> Result<CompositeProfile> {
        if params.len() != self.param_count {
            return Err(ProfileError::shape(
                "parameter vector",
                self.param_count,
                params.len(),
            ));
        }
        (self.build)(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gaussian;

    fn mapper() -> ModelMapper {
        ModelMapper::new()
            .with_gaussian("gaussian")
            .with_exponential("exponential")
    }

    #[test]
    fn names_follow_component_layout() {
        let m = mapper();
        assert_eq!(m.param_count(), 6);
        assert_eq!(
            m.param_names(),
            vec![
                "gaussian.centre",
                "gaussian.intensity",
                "gaussian.sigma",
                "exponential.centre",
                "exponential.intensity",
                "exponential.rate",
            ]
        );
    }

    #[test]
    fn builds_instance_in_component_order() {
        let instance = mapper()
            .instance_from_vector(&[50.0, 25.0, 10.0, 30.0, 10.0, 0.1])
            .unwrap();
        assert_eq!(instance.len(), 2);
        assert_eq!(instance.get("gaussian").unwrap().kind(), ProfileKind::Gaussian);
        assert_eq!(instance.get("exponential").unwrap().params(), vec![30.0, 10.0, 0.1]);
    }

    #[test]
    fn rejects_wrong_length_and_bad_widths() {
        let err = mapper().instance_from_vector(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, ProfileError::ShapeMismatch { expected: 6, actual: 3, .. }));

        let err = mapper()
            .instance_from_vector(&[50.0, 25.0, 10.0, 30.0, 10.0, -0.1])
            .unwrap_err();
        assert!(matches!(err, ProfileError::Domain { parameter: "rate", .. }));
    }

    #[test]
    fn closure_mapper_can_tie_parameters() {
        // Two Gaussians sharing one centre: [centre, i0, s0, i1, s1].
        let tied = FnMapper::new(5, |p: &[f64]| {
            Ok(CompositeProfile::new()
                .with("narrow", Gaussian::new(p[0], p[1], p[2])?)
                .with("broad", Gaussian::new(p[0], p[3], p[4])?))
        });
        let instance = tied.instance_from_vector(&[40.0, 1.0, 2.0, 3.0, 8.0]).unwrap();
        assert_eq!(instance.get("broad").unwrap().centre(), 40.0);
        assert!(tied.instance_from_vector(&[40.0]).is_err());
    }
}
