use std::f32::consts::SQRT_2;

use common::visits_or_one;
use engine::Player;

use crate::cpuct::CPUCT;
use crate::node::MCTSNode;
use crate::node_details::ScoreDetails;

/// The statistics of one child as seen from its parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeStats {
    pub visits: usize,
    pub value_score: f32,
    pub policy_score: f32,
}

impl<A> From<&MCTSNode<A>> for EdgeStats {
    fn from(node: &MCTSNode<A>) -> Self {
        Self {
            visits: node.visits(),
            value_score: node.value_score(),
            policy_score: node.policy_score(),
        }
    }
}

/// Scores a child for selection. The highest score wins; equal scores are broken at random by the tree.
pub trait SelectionStrategy {
    fn score(
        &self,
        parent_visits: usize,
        is_root: bool,
        player_to_move: Player,
        edge: &EdgeStats,
    ) -> ScoreDetails;
}

/// Mean value seen by the player choosing between the children.
fn relative_mean(player_to_move: Player, edge: &EdgeStats) -> f32 {
    player_to_move.sign() * edge.value_score / visits_or_one(edge.visits)
}

/// UCB1 applied to trees. Ignores priors.
#[derive(Clone, Copy, Debug, Default)]
pub struct Uct;

impl SelectionStrategy for Uct {
    #[allow(non_snake_case)]
    fn score(&self, parent_visits: usize, _: bool, player_to_move: Player, edge: &EdgeStats) -> ScoreDetails {
        let Qsa = relative_mean(player_to_move, edge);
        let Usa = SQRT_2 * (visits_or_one(parent_visits).ln() / visits_or_one(edge.visits)).sqrt();

        ScoreDetails {
            Nsa: edge.visits,
            Qsa,
            Psa: edge.policy_score,
            Usa,
            cpuct: SQRT_2,
            score: Qsa + Usa,
        }
    }
}

/// Prior-guided scoring. Unvisited children with a high prior are explored first.
pub struct Puct<C> {
    cpuct: C,
}

impl<C> Puct<C> {
    pub fn new(cpuct: C) -> Self {
        Self { cpuct }
    }
}

impl<C: CPUCT> SelectionStrategy for Puct<C> {
    #[allow(non_snake_case)]
    fn score(&self, parent_visits: usize, is_root: bool, player_to_move: Player, edge: &EdgeStats) -> ScoreDetails {
        let cpuct = self.cpuct.cpuct(parent_visits, is_root);
        let Qsa = relative_mean(player_to_move, edge);
        let Psa = edge.policy_score;
        let Usa = cpuct * Psa * (parent_visits as f32).sqrt() / (1 + edge.visits) as f32;

        ScoreDetails {
            Nsa: edge.visits,
            Qsa,
            Psa,
            Usa,
            cpuct,
            score: Qsa + Usa,
        }
    }
}
