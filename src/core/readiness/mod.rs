pub mod evaluator;
pub mod interface;
pub mod rule;

pub use evaluator::{node_is_not_ready, NodeReadinessEvaluator};
pub use interface::ReadinessRule;
