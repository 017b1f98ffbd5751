pub mod analytics;
pub mod context;
pub mod logits;
pub mod model;
pub mod node_metrics;
pub mod policy_index;

pub use analytics::*;
pub use context::*;
pub use logits::*;
pub use model::*;
pub use node_metrics::*;
pub use policy_index::*;
