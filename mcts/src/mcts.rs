use std::fmt::Debug;
use std::time::{Duration, Instant};

use common::create_rng;
use engine::GameEngine;
use generational_arena::{Arena, Index};
use itertools::Itertools;
use log::{debug, trace, warn};
use model::{ActionWithPolicy, EdgeMetrics, NodeMetrics};
use rand::prelude::{Distribution, SliceRandom, StdRng};
use rand_distr::Dirichlet;

use super::error::SearchError;
use super::evaluator::Evaluator;
use super::node::{Ancestors, MCTSNode};
use super::node_details::{NodeDetails, ScoreDetails};
use super::options::{DirichletOptions, MCTSOptions};
use super::selection_strategy::{EdgeStats, SelectionStrategy};

/// A search tree rooted at one decision point.
///
/// Each simulation walks from the root to a leaf, expands the leaf through the evaluator and
/// backpropagates the resulting value to the root. The tree owns the position the simulation is
/// played on and resets it to the root position after every simulation.
pub struct MCTS<'a, E, V, Sel>
where
    E: GameEngine,
{
    options: MCTSOptions,
    game_engine: &'a E,
    evaluator: V,
    selection_strategy: Sel,
    initial_position: E::State,
    simulation_position: E::State,
    root: Index,
    arena: Arena<MCTSNode<E::Action>>,
    rng: StdRng,
}

impl<'a, E, V, Sel> MCTS<'a, E, V, Sel>
where
    E: GameEngine,
    E::State: Clone,
    E::Action: Clone + PartialEq + Debug,
    V: Evaluator<State = E::State, Action = E::Action>,
    Sel: SelectionStrategy,
{
    pub fn new(
        game_state: E::State,
        game_engine: &'a E,
        evaluator: V,
        selection_strategy: Sel,
        options: MCTSOptions,
    ) -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(MCTSNode::root());
        let rng = create_rng(options.seed);

        Self {
            options,
            game_engine,
            evaluator,
            selection_strategy,
            simulation_position: game_state.clone(),
            initial_position: game_state,
            root,
            arena,
            rng,
        }
    }

    /// Runs exactly `simulations` simulations.
    pub fn search_simulations(&mut self, simulations: usize) -> Result<usize, SearchError> {
        self.search(|completed| completed < simulations)
    }

    /// Runs simulations until `duration` has elapsed. The clock is checked between simulations only.
    pub fn search_time(&mut self, duration: Duration) -> Result<usize, SearchError> {
        let start = Instant::now();
        self.search(|_| start.elapsed() < duration)
    }

    /// Runs simulations while `alive` returns true. `alive` is given the number of simulations
    /// completed so far by this call.
    pub fn search<F: FnMut(usize) -> bool>(&mut self, mut alive: F) -> Result<usize, SearchError> {
        if let Some(outcome) = self.game_engine.terminal_state(&self.initial_position) {
            debug!("Search requested on a terminal position: {:?}", outcome);
            return Err(SearchError::TerminalPosition);
        }

        let mut simulations = 0;
        while alive(simulations) {
            self.simulate()?;
            simulations += 1;
        }

        debug!(
            "Completed {} simulations, root visits: {}, nodes: {}",
            simulations,
            self.arena[self.root].visits(),
            self.arena.len()
        );

        Ok(simulations)
    }

    /// The root child with the most visits, ties broken uniformly at random.
    pub fn select_action(&mut self) -> Result<E::Action, SearchError> {
        let root = &self.arena[self.root];
        let candidates = root
            .children()
            .iter()
            .map(|&i| &self.arena[i])
            .max_set_by_key(|n| n.visits());

        candidates
            .choose(&mut self.rng)
            .and_then(|n| n.action().cloned())
            .ok_or(SearchError::NoAvailableActions)
    }

    /// Re-roots the tree at the child reached by `action`, keeping its subtree and discarding the rest.
    pub fn advance_to_action(&mut self, action: E::Action) -> Result<(), SearchError> {
        if !self.game_engine.is_legal_action(&self.initial_position, &action) {
            return Err(SearchError::IllegalMoveRequested(format!("{:?}", action)));
        }

        let old_root = self.root;
        let mut new_root = None;
        let mut to_remove = vec![old_root];

        let children = self.arena[old_root].take_children();
        for child in children {
            if new_root.is_none() && self.arena[child].action() == Some(&action) {
                new_root = Some(child);
            } else {
                to_remove.push(child);
            }
        }

        while let Some(index) = to_remove.pop() {
            if let Some(mut node) = self.arena.remove(index) {
                to_remove.extend(node.take_children());
            }
        }

        self.root = match new_root {
            Some(index) => {
                self.arena[index].make_root();
                index
            }
            None => self.arena.insert(MCTSNode::root()),
        };

        self.initial_position = self.game_engine.take_action(&self.initial_position, &action);
        self.simulation_position = self.initial_position.clone();

        debug!(
            "Advanced to {:?}, root visits: {}, nodes retained: {}",
            action,
            self.arena[self.root].visits(),
            self.arena.len()
        );

        Ok(())
    }

    pub fn get_root_node_metrics(&self) -> NodeMetrics<E::Action> {
        let root = &self.arena[self.root];

        NodeMetrics {
            visits: root.visits(),
            value: root.mean_value(),
            children: root
                .children()
                .iter()
                .map(|&i| &self.arena[i])
                .filter_map(|n| {
                    n.action().map(|a| {
                        EdgeMetrics::new(a.clone(), n.visits(), n.mean_value(), n.policy_score())
                    })
                })
                .collect(),
        }
    }

    pub fn get_root_node_details(&self) -> NodeDetails<E::Action> {
        let is_root = true;
        self.get_node_details(self.root, &self.initial_position, is_root)
    }

    /// Follows the most visited child from the root until reaching an unvisited one.
    pub fn get_principal_variation(&self) -> Vec<(E::Action, ScoreDetails)> {
        let mut node_index = self.root;
        let mut game_state = self.initial_position.clone();
        let mut nodes = vec![];

        loop {
            let is_root = nodes.is_empty();
            let details = self.get_node_details(node_index, &game_state, is_root);

            let Some((action, score)) = details.children.into_iter().next() else {
                break;
            };

            if score.Nsa == 0 {
                break;
            }

            let child = self.arena[node_index]
                .children()
                .iter()
                .copied()
                .find(|&i| self.arena[i].action() == Some(&action));

            game_state = self.game_engine.take_action(&game_state, &action);
            nodes.push((action, score));

            match child {
                Some(child) => node_index = child,
                None => break,
            }
        }

        nodes
    }

    pub fn root_index(&self) -> Index {
        self.root
    }

    pub fn node(&self, index: Index) -> Option<&MCTSNode<E::Action>> {
        self.arena.get(index)
    }

    pub fn ancestors(&self, index: Index) -> Ancestors<'_, E::Action> {
        Ancestors::new(&self.arena, index)
    }

    pub fn num_nodes(&self) -> usize {
        self.arena.len()
    }

    fn get_node_details(&self, node_index: Index, game_state: &E::State, is_root: bool) -> NodeDetails<E::Action> {
        let node = &self.arena[node_index];
        let player = self.game_engine.player_to_move(game_state);

        let mut children: Vec<_> = node
            .children()
            .iter()
            .map(|&i| &self.arena[i])
            .filter_map(|child| {
                let score = self.selection_strategy.score(
                    node.visits(),
                    is_root,
                    player,
                    &EdgeStats::from(child),
                );

                child.action().map(|a| (a.clone(), score))
            })
            .collect();

        children.sort_by(|(_, x), (_, y)| y.cmp(x));

        NodeDetails {
            visits: node.visits(),
            children,
        }
    }

    fn simulate(&mut self) -> Result<(), SearchError> {
        let result = self.select_and_expand();
        self.simulation_position = self.initial_position.clone();

        let (backpropagate_from, value) = result?;
        self.backpropagate(backpropagate_from, value);

        Ok(())
    }

    fn select_and_expand(&mut self) -> Result<(Index, f32), SearchError> {
        let leaf = self.select_leaf()?;
        self.expand_and_evaluate(leaf)
    }

    pub(crate) fn select_leaf(&mut self) -> Result<Index, SearchError> {
        let mut node_index = self.root;

        loop {
            let node = &self.arena[node_index];
            if node.is_leaf() {
                trace!("Selected leaf with {} visits", node.visits());
                return Ok(node_index);
            }

            let is_root = node_index == self.root;
            let parent_visits = node.visits();
            let player = self.game_engine.player_to_move(&self.simulation_position);

            let candidates = highest_scoring(node.children().iter().map(|&i| {
                let score = self.selection_strategy.score(
                    parent_visits,
                    is_root,
                    player,
                    &EdgeStats::from(&self.arena[i]),
                );

                (i, score.score)
            }));

            let (child_index, _) = *candidates
                .choose(&mut self.rng)
                .ok_or(SearchError::NoAvailableActions)?;

            let action = self.arena[child_index]
                .action()
                .ok_or(SearchError::NoAvailableActions)?;

            if !self.game_engine.is_legal_action(&self.simulation_position, action) {
                return Err(SearchError::IllegalMoveRequested(format!("{:?}", action)));
            }

            self.simulation_position = self.game_engine.take_action(&self.simulation_position, action);
            node_index = child_index;
        }
    }

    /// Returns the node to backpropagate from along with the value to backpropagate.
    fn expand_and_evaluate(&mut self, leaf: Index) -> Result<(Index, f32), SearchError> {
        if let Some(outcome) = self.game_engine.terminal_state(&self.simulation_position) {
            trace!("Leaf is terminal: {:?}", outcome);
            return Ok((leaf, outcome.value()));
        }

        let legal_actions = self.game_engine.legal_actions(&self.simulation_position);
        if legal_actions.is_empty() {
            return Err(SearchError::EmptyLegalMoveSet);
        }

        let analysis = self
            .evaluator
            .evaluate(&self.simulation_position, &legal_actions, &mut self.rng)?;

        if analysis.policy_scores.len() != legal_actions.len() {
            return Err(SearchError::PriorMismatch {
                expected: legal_actions.len(),
                actual: analysis.policy_scores.len(),
            });
        }

        let value = analysis.value_score;
        let mut policy_scores = analysis.policy_scores;

        if leaf == self.root && analysis.rollout_action.is_none() {
            if let Some(dirichlet) = &self.options.dirichlet {
                apply_dirichlet_noise(&mut policy_scores, dirichlet, &mut self.rng);
            }
        }

        let children: Vec<_> = policy_scores
            .into_iter()
            .map(|p| self.arena.insert(MCTSNode::new(p.action, p.policy_score, leaf)))
            .collect();

        self.arena[leaf].set_children(children);

        match analysis.rollout_action {
            Some(i) => {
                let child = self.arena[leaf]
                    .children()
                    .get(i)
                    .copied()
                    .ok_or(SearchError::NoAvailableActions)?;

                Ok((child, value))
            }
            None => {
                self.arena[leaf].add_value(value);
                Ok((leaf, value))
            }
        }
    }

    fn backpropagate(&mut self, from: Index, value: f32) {
        let mut next = Some(from);

        while let Some(index) = next {
            let node = &mut self.arena[index];
            node.record_visit(value);
            next = node.parent();
        }
    }
}

/// Every candidate sharing the highest score, in the order given. Scores are compared with `total_cmp`,
/// the same ordering `ScoreDetails` uses.
fn highest_scoring<T>(scored: impl Iterator<Item = (T, f32)>) -> Vec<(T, f32)> {
    scored.max_set_by(|(_, a), (_, b)| a.total_cmp(b))
}

fn apply_dirichlet_noise<A>(
    policy_scores: &mut [ActionWithPolicy<A>],
    dirichlet: &DirichletOptions,
    rng: &mut StdRng,
) {
    let num_actions = policy_scores.len();

    if num_actions < 2 {
        return;
    }

    let noise = match Dirichlet::new_with_size(dirichlet.alpha, num_actions) {
        Ok(distribution) => distribution.sample(rng),
        Err(err) => {
            warn!("Skipping root noise, invalid dirichlet distribution: {:?}", err);
            return;
        }
    };

    let e = dirichlet.epsilon;
    for (awp, noise) in policy_scores.iter_mut().zip(noise) {
        awp.policy_score = (1.0 - e) * awp.policy_score + e * noise;
    }
}
