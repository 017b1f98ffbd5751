use engine::GameEngine;
use log::warn;
use model::{ActionWithPolicy, GameStateAnalysis};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::error::SearchError;
use crate::evaluator::Evaluator;

/// Evaluates a position by stepping into one uniformly chosen action and then playing uniformly random
/// actions until the game ends.
///
/// Priors are uniform. The analysis names the action the rollout went through so the tree can credit
/// that child with the result.
pub struct RolloutEvaluator<'a, E> {
    game_engine: &'a E,
    max_depth: Option<usize>,
}

impl<'a, E> RolloutEvaluator<'a, E> {
    pub fn new(game_engine: &'a E, max_depth: Option<usize>) -> Self {
        Self {
            game_engine,
            max_depth,
        }
    }
}

impl<'a, E> RolloutEvaluator<'a, E>
where
    E: GameEngine,
    E::Action: Clone,
{
    fn playout(&self, mut game_state: E::State, rng: &mut dyn RngCore) -> Result<f32, SearchError> {
        let mut depth = 0;

        loop {
            if let Some(outcome) = self.game_engine.terminal_state(&game_state) {
                return Ok(outcome.value());
            }

            if self.max_depth.map_or(false, |max_depth| depth >= max_depth) {
                warn!("Rollout truncated after {} actions, scoring as a draw", depth);
                return Ok(0.0);
            }

            let legal_actions = self.game_engine.legal_actions(&game_state);
            let action = legal_actions
                .choose(&mut *rng)
                .ok_or(SearchError::EmptyLegalMoveSet)?;

            game_state = self.game_engine.take_action(&game_state, action);
            depth += 1;
        }
    }
}

impl<'a, E> Evaluator for RolloutEvaluator<'a, E>
where
    E: GameEngine,
    E::Action: Clone,
{
    type State = E::State;
    type Action = E::Action;

    fn evaluate(
        &self,
        game_state: &E::State,
        legal_actions: &[E::Action],
        rng: &mut dyn RngCore,
    ) -> Result<GameStateAnalysis<E::Action>, SearchError> {
        if legal_actions.is_empty() {
            return Err(SearchError::EmptyLegalMoveSet);
        }

        let prior = 1.0 / legal_actions.len() as f32;
        let policy_scores = legal_actions
            .iter()
            .map(|a| ActionWithPolicy::new(a.clone(), prior))
            .collect();

        let rollout_action = rng.gen_range(0..legal_actions.len());
        let next_state = self
            .game_engine
            .take_action(game_state, &legal_actions[rollout_action]);
        let value_score = self.playout(next_state, rng)?;

        Ok(GameStateAnalysis::new(value_score, policy_scores).with_rollout_action(rollout_action))
    }
}
