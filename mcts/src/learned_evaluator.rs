use std::fmt::Debug;

use engine::GameEngine;
use model::{update_logit_policies_to_softmax, ActionWithPolicy, GameStateAnalysis, ModelContext};
use rand::RngCore;

use crate::error::SearchError;
use crate::evaluator::Evaluator;

/// Evaluates a position with one call to a pre-trained model.
///
/// The model reports value for the side to move; it is converted to the first player's perspective
/// here. Priors are read from the flat policy output through the context's `PolicyIndex`, which is
/// given the side to move so it can pick the mirrored table for the second player.
pub struct LearnedEvaluator<'a, E, S, A> {
    game_engine: &'a E,
    context: &'a ModelContext<S, A>,
}

impl<'a, E, S, A> LearnedEvaluator<'a, E, S, A> {
    pub fn new(game_engine: &'a E, context: &'a ModelContext<S, A>) -> Self {
        Self {
            game_engine,
            context,
        }
    }
}

impl<'a, E> Evaluator for LearnedEvaluator<'a, E, E::State, E::Action>
where
    E: GameEngine,
    E::Action: Clone + Debug,
{
    type State = E::State;
    type Action = E::Action;

    fn evaluate(
        &self,
        game_state: &E::State,
        legal_actions: &[E::Action],
        _: &mut dyn RngCore,
    ) -> Result<GameStateAnalysis<E::Action>, SearchError> {
        let model = self.context.model().ok_or_else(|| {
            SearchError::EvaluatorUnavailable("no model is loaded in the context".to_string())
        })?;

        let player = self.game_engine.player_to_move(game_state);
        let predictions = model.predict(game_state, player)?;

        let policy_index = self.context.policy_index();
        if predictions.policy.len() != policy_index.policy_size() {
            return Err(SearchError::PriorMismatch {
                expected: policy_index.policy_size(),
                actual: predictions.policy.len(),
            });
        }

        let mut policy_scores = legal_actions
            .iter()
            .map(|action| {
                let index = policy_index
                    .policy_index(action, player)
                    .ok_or_else(|| SearchError::UnindexedAction(format!("{:?}", action)))?;

                Ok(ActionWithPolicy::new(action.clone(), predictions.policy[index]))
            })
            .collect::<Result<Vec<_>, SearchError>>()?;

        if let Some(temperature) = self.context.options().policy_softmax_temperature {
            update_logit_policies_to_softmax(&mut policy_scores, temperature);
        }

        Ok(GameStateAnalysis::new(
            predictions.value * player.sign(),
            policy_scores,
        ))
    }
}
