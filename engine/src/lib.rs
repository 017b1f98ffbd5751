pub mod engine;
pub mod outcome;
pub mod players;

pub use crate::engine::*;
pub use crate::outcome::*;
pub use crate::players::*;
