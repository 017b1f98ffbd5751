use serde::{Deserialize, Serialize};

/// A read-only snapshot of a searched node and its children.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct NodeMetrics<A> {
    /// The total number of simulations that passed through the node.
    pub visits: usize,
    /// Mean value of the node from the first player's perspective.
    pub value: f32,
    pub children: Vec<EdgeMetrics<A>>,
}

impl<A> NodeMetrics<A> {
    pub fn child_max_visits(&self) -> Option<&EdgeMetrics<A>> {
        self.children.iter().max_by_key(|c| c.visits)
    }

    pub fn child_visits_sum(&self) -> usize {
        self.children.iter().map(|c| c.visits).sum()
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct EdgeMetrics<A> {
    pub action: A,
    pub visits: usize,
    /// Mean value of the child from the first player's perspective. Zero when unvisited.
    pub value: f32,
    pub policy_score: f32,
}

impl<A> EdgeMetrics<A> {
    pub fn new(action: A, visits: usize, value: f32, policy_score: f32) -> Self {
        Self {
            action,
            visits,
            value,
            policy_score,
        }
    }
}
