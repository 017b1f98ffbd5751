use anyhow::{anyhow, Result};
use engine::{GameEngine, Outcome, Player};
use model::{Model, PolicyIndex, Predictions};

/// A race to 100 (first player wins) or 0 (second player wins), starting from 50.
#[derive(Hash, PartialEq, Eq, Clone, Debug)]
pub struct CountingGameState {
    pub p1_turn: bool,
    pub count: usize,
}

impl CountingGameState {
    pub fn initial() -> Self {
        Self::from_starting_count(true, 50)
    }

    pub fn from_starting_count(p1_turn: bool, count: usize) -> Self {
        Self { p1_turn, count }
    }
}

#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug)]
pub enum CountingAction {
    Increment,
    Decrement,
    Stay,
}

impl CountingAction {
    fn ordinal(&self) -> usize {
        match self {
            CountingAction::Increment => 0,
            CountingAction::Decrement => 1,
            CountingAction::Stay => 2,
        }
    }
}

pub struct CountingGameEngine {}

impl CountingGameEngine {
    pub fn new() -> Self {
        Self {}
    }
}

impl GameEngine for CountingGameEngine {
    type Action = CountingAction;
    type State = CountingGameState;

    fn take_action(&self, game_state: &Self::State, action: &Self::Action) -> Self::State {
        let count = game_state.count;

        let new_count = match action {
            CountingAction::Increment => count + 1,
            CountingAction::Decrement => count - 1,
            CountingAction::Stay => count,
        };

        Self::State {
            p1_turn: !game_state.p1_turn,
            count: new_count,
        }
    }

    fn legal_actions(&self, game_state: &Self::State) -> Vec<Self::Action> {
        if self.terminal_state(game_state).is_some() {
            return vec![];
        }

        vec![
            CountingAction::Increment,
            CountingAction::Decrement,
            CountingAction::Stay,
        ]
    }

    fn player_to_move(&self, game_state: &Self::State) -> Player {
        if game_state.p1_turn {
            Player::First
        } else {
            Player::Second
        }
    }

    fn terminal_state(&self, game_state: &Self::State) -> Option<Outcome> {
        match game_state.count {
            100 => Some(Outcome::FirstPlayerWins),
            0 => Some(Outcome::SecondPlayerWins),
            _ => None,
        }
    }
}

/// Values the position by how far the count has moved from 50, saturating five steps away.
pub struct CountingModel {
    policy: Vec<f32>,
    fail: bool,
}

impl CountingModel {
    pub fn new(priors: [f32; 3]) -> Self {
        Self::with_policy(priors.to_vec())
    }

    pub fn with_policy(policy: Vec<f32>) -> Self {
        Self {
            policy,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            policy: vec![],
            fail: true,
        }
    }
}

impl Model for CountingModel {
    type State = CountingGameState;

    fn predict(&self, game_state: &Self::State, perspective: Player) -> Result<Predictions> {
        if self.fail {
            return Err(anyhow!("model is offline"));
        }

        let advantage = ((game_state.count as f32 - 50.0) / 5.0).clamp(-1.0, 1.0);

        Ok(Predictions {
            value: advantage * perspective.sign(),
            policy: self.policy.clone(),
        })
    }
}

pub struct CountingPolicyIndex;

impl PolicyIndex for CountingPolicyIndex {
    type Action = CountingAction;

    fn policy_index(&self, action: &Self::Action, _: Player) -> Option<usize> {
        Some(action.ordinal())
    }

    fn policy_size(&self) -> usize {
        3
    }
}
