#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// +1 for the first player, -1 for the second. Values are stored from the first player's
    /// perspective so this is the factor that converts them to the perspective of `self`.
    pub fn sign(&self) -> f32 {
        match self {
            Player::First => 1.0,
            Player::Second => -1.0,
        }
    }
}
