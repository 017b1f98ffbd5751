#[cfg(test)]
mod counting_game;
pub mod cpuct;
pub mod error;
pub mod evaluator;
pub mod learned_evaluator;
pub mod mcts;
#[cfg(test)]
mod nim_game;
pub mod node;
pub mod node_details;
pub mod options;
pub mod rollout_evaluator;
pub mod search;
pub mod selection_strategy;

pub use cpuct::*;
pub use error::*;
pub use evaluator::*;
pub use learned_evaluator::*;
pub use mcts::*;
pub use node::*;
pub use node_details::*;
pub use options::*;
pub use rollout_evaluator::*;
pub use search::*;
pub use selection_strategy::*;
