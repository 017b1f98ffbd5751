use engine::{GameEngine, Outcome, Player};

/// Single pile Nim. Players alternately take between one and `max_take` stones; whoever takes the
/// last stone wins.
#[derive(Hash, PartialEq, Eq, Clone, Debug)]
pub struct NimState {
    pub pile: usize,
    pub first_to_move: bool,
}

impl NimState {
    pub fn new(pile: usize) -> Self {
        Self {
            pile,
            first_to_move: true,
        }
    }
}

#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug)]
pub enum NimAction {
    Take(usize),
}

pub struct NimEngine {
    max_take: usize,
}

impl NimEngine {
    pub fn new(max_take: usize) -> Self {
        Self { max_take }
    }
}

impl GameEngine for NimEngine {
    type Action = NimAction;
    type State = NimState;

    fn take_action(&self, game_state: &Self::State, action: &Self::Action) -> Self::State {
        let NimAction::Take(stones) = action;

        Self::State {
            pile: game_state.pile - stones,
            first_to_move: !game_state.first_to_move,
        }
    }

    fn legal_actions(&self, game_state: &Self::State) -> Vec<Self::Action> {
        (1..=self.max_take.min(game_state.pile))
            .map(NimAction::Take)
            .collect()
    }

    fn player_to_move(&self, game_state: &Self::State) -> Player {
        if game_state.first_to_move {
            Player::First
        } else {
            Player::Second
        }
    }

    fn terminal_state(&self, game_state: &Self::State) -> Option<Outcome> {
        if game_state.pile > 0 {
            return None;
        }

        // The player who just moved took the last stone.
        match self.player_to_move(game_state) {
            Player::First => Some(Outcome::SecondPlayerWins),
            Player::Second => Some(Outcome::FirstPlayerWins),
        }
    }
}

/// Two actions that both end the game in a draw. Used to observe tie breaking.
#[derive(Hash, PartialEq, Eq, Clone, Debug)]
pub struct CoinState {
    pub flipped: bool,
}

#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug)]
pub enum CoinAction {
    Heads,
    Tails,
}

pub struct CoinEngine;

impl GameEngine for CoinEngine {
    type Action = CoinAction;
    type State = CoinState;

    fn take_action(&self, _: &Self::State, _: &Self::Action) -> Self::State {
        CoinState { flipped: true }
    }

    fn legal_actions(&self, game_state: &Self::State) -> Vec<Self::Action> {
        if game_state.flipped {
            vec![]
        } else {
            vec![CoinAction::Heads, CoinAction::Tails]
        }
    }

    fn player_to_move(&self, game_state: &Self::State) -> Player {
        if game_state.flipped {
            Player::Second
        } else {
            Player::First
        }
    }

    fn terminal_state(&self, game_state: &Self::State) -> Option<Outcome> {
        game_state.flipped.then_some(Outcome::Draw)
    }
}
