use crate::core::node::Node;

// Trait which should implement any readiness rule plugged into the gate.
// A rule reads one node snapshot and answers whether the node must be excluded from scheduling
// on readiness grounds. Rules are evaluated concurrently for many nodes, so they hold no
// mutable state.
pub trait ReadinessRule: Send + Sync {
    fn name(&self) -> &'static str;

    fn fires(&self, node: &Node) -> bool;
}
