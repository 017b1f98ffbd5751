use super::outcome::Outcome;
use super::players::Player;

/// The rules of a two player, zero-sum game as seen by the search.
///
/// States are treated as immutable values: `take_action` returns the successor rather than mutating
/// in place, so the search can cheaply reset to a known position by cloning.
pub trait GameEngine {
    type Action;
    type State;

    fn take_action(&self, game_state: &Self::State, action: &Self::Action) -> Self::State;
    fn legal_actions(&self, game_state: &Self::State) -> Vec<Self::Action>;
    fn player_to_move(&self, game_state: &Self::State) -> Player;
    fn terminal_state(&self, game_state: &Self::State) -> Option<Outcome>;

    fn is_legal_action(&self, game_state: &Self::State, action: &Self::Action) -> bool
    where
        Self::Action: PartialEq,
    {
        self.legal_actions(game_state).contains(action)
    }
}
