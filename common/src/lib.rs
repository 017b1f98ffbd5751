pub mod config;
pub mod math;
pub mod rng;
pub mod softmax;

pub use config::*;
pub use math::*;
pub use rng::*;
pub use softmax::*;
