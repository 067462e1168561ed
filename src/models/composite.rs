//! Sums of named profile components.
//!
//! A model line for data containing several features (e.g. a Gaussian emission
//! line on top of an exponential wing) is the elementwise sum of each
//! component's profile.

use serde::Serialize;

use crate::models::Profile;

/// One named component of a composite model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    pub name: String,
    pub profile: Profile,
}

/// An ordered sum of profiles.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompositeProfile {
    components: Vec<Component>,
}

impl CompositeProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, profile: impl Into<Profile>) -> Self {
        self.push(name, profile);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, profile: impl Into<Profile>) {
        self.components.push(Component {
            name: name.into(),
            profile: profile.into(),
        });
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.components
            .iter()
            .find(|c| c.name == name)
            .map(|c| &c.profile)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Parameters of every component, concatenated in component order.
    pub fn params(&self) -> Vec<f64> {
        self.components
            .iter()
            .flat_map(|c| c.profile.params())
            .collect()
    }

    /// Sum of all component profiles at each coordinate. An empty composite
    /// evaluates to zeros.
    pub fn evaluate(&self, xvalues: &[f64]) -> Vec<f64> {
        let mut line = vec![0.0; xvalues.len()];
        for c in &self.components {
            for (acc, &x) in line.iter_mut().zip(xvalues) {
                *acc += c.profile.evaluate_at(x);
            }
        }
        line
    }

    /// Each component's own line, keyed by component name.
    pub fn component_lines(&self, xvalues: &[f64]) -> Vec<(String, Vec<f64>)> {
        self.components
            .iter()
            .map(|c| (c.name.clone(), c.profile.evaluate(xvalues)))
            .collect()
    }
}

impl From<Profile> for CompositeProfile {
    fn from(value: Profile) -> Self {
        CompositeProfile::new().with(value.kind().display_name().to_lowercase(), value)
    }
}
