use anyhow::{ensure, Result};
use common::{Config, ConfigLoader};

#[derive(Clone, Debug, PartialEq)]
pub struct DirichletOptions {
    pub alpha: f32,
    pub epsilon: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MCTSOptions {
    pub cpuct: f32,
    /// Noise blended into the root priors when the root is expanded.
    pub dirichlet: Option<DirichletOptions>,
    /// Fixes the random stream. Two searches with the same seed and inputs produce the same tree.
    pub seed: Option<u64>,
    /// Rollouts longer than this are abandoned and scored as a draw.
    pub max_rollout_depth: Option<usize>,
}

impl MCTSOptions {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_dirichlet(mut self, alpha: f32, epsilon: f32) -> Self {
        self.dirichlet = Some(DirichletOptions { alpha, epsilon });
        self
    }
}

impl Default for MCTSOptions {
    fn default() -> Self {
        Self {
            cpuct: 1.25,
            dirichlet: None,
            seed: None,
            max_rollout_depth: None,
        }
    }
}

impl Config for MCTSOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let defaults = Self::default();

        let dirichlet = config
            .get("dirichlet_alpha")
            .and_then(|v| v.as_f32())
            .map(|alpha| DirichletOptions {
                alpha,
                epsilon: config
                    .get("dirichlet_epsilon")
                    .and_then(|v| v.as_f32())
                    .unwrap_or(0.25),
            });

        if let Some(dirichlet) = &dirichlet {
            ensure!(dirichlet.alpha > 0.0, "dirichlet_alpha must be positive");
            ensure!(
                (0.0..=1.0).contains(&dirichlet.epsilon),
                "dirichlet_epsilon must be within [0, 1]"
            );
        }

        let cpuct = config
            .get("cpuct")
            .and_then(|v| v.as_f32())
            .unwrap_or(defaults.cpuct);

        ensure!(cpuct > 0.0, "cpuct must be positive");

        Ok(Self {
            cpuct,
            dirichlet,
            seed: config.get("seed").and_then(|v| v.as_u64()),
            max_rollout_depth: config.get("max_rollout_depth").and_then(|v| v.as_usize()),
        })
    }
}
