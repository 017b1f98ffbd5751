use anyhow::Result;
use engine::Player;

/// Raw output of a policy/value model for one position.
#[derive(Clone, Debug, PartialEq)]
pub struct Predictions {
    /// How good the position is for the side to move, in [-1, 1].
    pub value: f32,
    /// Flat policy head output, indexed by a `PolicyIndex`.
    pub policy: Vec<f32>,
}

/// A pre-trained evaluation model.
///
/// The model is handed the position along with the side it should view it from. Implementations are
/// expected to orient the input so the side to move is always "current" and to report the value from
/// that side's perspective.
pub trait Model {
    type State;

    fn predict(&self, game_state: &Self::State, perspective: Player) -> Result<Predictions>;
}
