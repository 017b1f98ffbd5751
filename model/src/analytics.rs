/// The result of evaluating a single position.
///
/// `value_score` is always from the first player's perspective, regardless of who is to move.
#[derive(Clone, Debug)]
pub struct GameStateAnalysis<A> {
    pub policy_scores: Vec<ActionWithPolicy<A>>,
    pub value_score: f32,
    /// Index into `policy_scores` of the child the value was measured through, if any.
    /// Rollout evaluation continues into one random child, so backpropagation starts there.
    pub rollout_action: Option<usize>,
}

impl<A> GameStateAnalysis<A> {
    pub fn new(value_score: f32, policy_scores: Vec<ActionWithPolicy<A>>) -> Self {
        GameStateAnalysis {
            policy_scores,
            value_score,
            rollout_action: None,
        }
    }

    pub fn with_rollout_action(mut self, index: usize) -> Self {
        self.rollout_action = Some(index);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActionWithPolicy<A> {
    pub action: A,
    pub policy_score: f32,
}

impl<A> ActionWithPolicy<A> {
    pub fn new(action: A, policy_score: f32) -> Self {
        ActionWithPolicy {
            action,
            policy_score,
        }
    }
}
