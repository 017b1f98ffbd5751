#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Outcome {
    FirstPlayerWins,
    SecondPlayerWins,
    Draw,
}

impl Outcome {
    /// The outcome as a value from the first player's perspective.
    pub fn value(&self) -> f32 {
        match self {
            Outcome::FirstPlayerWins => 1.0,
            Outcome::SecondPlayerWins => -1.0,
            Outcome::Draw => 0.0,
        }
    }
}
