use crate::config::ReadinessGateConfig;
use crate::core::node::{ConditionStatus, Node, NodeConditionType};
use crate::core::readiness::NodeReadinessEvaluator;

pub fn create_node(
    name: &str,
    conditions: &[(NodeConditionType, ConditionStatus)],
    unschedulable: bool,
) -> Node {
    let mut node = Node::new(name.to_string()).with_unschedulable(unschedulable);
    for (condition_type, status) in conditions.iter() {
        node = node.with_condition(condition_type.clone(), *status);
    }
    node
}

pub fn evaluator_with_rules(rules: &[&str]) -> NodeReadinessEvaluator {
    let config = ReadinessGateConfig {
        rules: rules.iter().map(|rule| rule.to_string()).collect(),
        ..Default::default()
    };
    NodeReadinessEvaluator::new(&config).unwrap()
}
