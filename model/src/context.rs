use anyhow::{ensure, Result};
use common::{Config, ConfigLoader};

use super::model::Model;
use super::policy_index::PolicyIndex;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModelOptions {
    /// When set, the policy output is treated as logits and normalised over the legal actions.
    pub policy_softmax_temperature: Option<f32>,
}

impl Config for ModelOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let policy_softmax_temperature = config
            .get("policy_softmax_temperature")
            .and_then(|v| v.as_f32());

        if let Some(temperature) = policy_softmax_temperature {
            ensure!(temperature > 0.0, "policy_softmax_temperature must be positive");
        }

        Ok(Self {
            policy_softmax_temperature,
        })
    }
}

/// Everything learned evaluation needs, scoped to one search session and passed by reference.
pub struct ModelContext<S, A> {
    model: Option<Box<dyn Model<State = S>>>,
    policy_index: Box<dyn PolicyIndex<Action = A>>,
    options: ModelOptions,
}

impl<S, A> ModelContext<S, A> {
    pub fn new(
        model: Box<dyn Model<State = S>>,
        policy_index: Box<dyn PolicyIndex<Action = A>>,
        options: ModelOptions,
    ) -> Self {
        Self {
            model: Some(model),
            policy_index,
            options,
        }
    }

    /// A context with no model loaded. Searching with it fails rather than falling back to rollouts.
    pub fn without_model(policy_index: Box<dyn PolicyIndex<Action = A>>, options: ModelOptions) -> Self {
        Self {
            model: None,
            policy_index,
            options,
        }
    }

    pub fn model(&self) -> Option<&dyn Model<State = S>> {
        self.model.as_deref()
    }

    pub fn policy_index(&self) -> &dyn PolicyIndex<Action = A> {
        self.policy_index.as_ref()
    }

    pub fn options(&self) -> &ModelOptions {
        &self.options
    }
}
