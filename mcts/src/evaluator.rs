use model::GameStateAnalysis;
use rand::RngCore;

use crate::error::SearchError;

/// Produces a value and per-action priors for a non-terminal position.
///
/// `legal_actions` is never empty. The returned priors must cover exactly those actions, in the same
/// order, and the value must be from the first player's perspective.
pub trait Evaluator {
    type State;
    type Action;

    fn evaluate(
        &self,
        game_state: &Self::State,
        legal_actions: &[Self::Action],
        rng: &mut dyn RngCore,
    ) -> Result<GameStateAnalysis<Self::Action>, SearchError>;
}
