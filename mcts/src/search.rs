use std::fmt::Debug;

use engine::GameEngine;
use log::debug;
use model::{ModelContext, NodeMetrics};

use crate::cpuct::ConstantCPUCT;
use crate::error::SearchError;
use crate::evaluator::Evaluator;
use crate::learned_evaluator::LearnedEvaluator;
use crate::mcts::MCTS;
use crate::options::MCTSOptions;
use crate::rollout_evaluator::RolloutEvaluator;
use crate::selection_strategy::{Puct, SelectionStrategy, Uct};

/// How leaves are evaluated. Rollouts are scored with UCT, learned evaluation with PUCT.
pub enum EvaluatorMode<'a, S, A> {
    Rollout,
    Learned(&'a ModelContext<S, A>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult<A> {
    pub action: A,
    pub metrics: NodeMetrics<A>,
}

/// Searches `initial_position` for `simulations` simulations and returns the most visited action.
pub fn search<E>(
    game_engine: &E,
    initial_position: E::State,
    simulations: usize,
    mode: EvaluatorMode<'_, E::State, E::Action>,
    options: MCTSOptions,
) -> Result<SearchResult<E::Action>, SearchError>
where
    E: GameEngine,
    E::State: Clone,
    E::Action: Clone + PartialEq + Debug,
{
    match mode {
        EvaluatorMode::Rollout => {
            let evaluator = RolloutEvaluator::new(game_engine, options.max_rollout_depth);
            let mcts = MCTS::new(initial_position, game_engine, evaluator, Uct, options);
            run(mcts, simulations)
        }
        EvaluatorMode::Learned(context) => {
            let evaluator = LearnedEvaluator::new(game_engine, context);
            let selection_strategy = Puct::new(ConstantCPUCT(options.cpuct));
            let mcts = MCTS::new(initial_position, game_engine, evaluator, selection_strategy, options);
            run(mcts, simulations)
        }
    }
}

fn run<E, V, Sel>(mut mcts: MCTS<'_, E, V, Sel>, simulations: usize) -> Result<SearchResult<E::Action>, SearchError>
where
    E: GameEngine,
    E::State: Clone,
    E::Action: Clone + PartialEq + Debug,
    V: Evaluator<State = E::State, Action = E::Action>,
    Sel: SelectionStrategy,
{
    mcts.search_simulations(simulations)?;

    let action = mcts.select_action()?;
    let metrics = mcts.get_root_node_metrics();

    debug!("Selected {:?} after {} simulations", action, metrics.visits);

    Ok(SearchResult { action, metrics })
}
