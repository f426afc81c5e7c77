//! Built-in readiness rules and the global registry they are looked up in by name.

use std::collections::HashMap;
use std::sync::Arc;

use lazy_static::lazy_static;

use crate::core::node::{ConditionStatus, Node, NodeConditionType};
use crate::core::readiness::interface::ReadinessRule;

pub const NETWORK_UNAVAILABLE_RULE: &str = "NetworkUnavailable";
pub const READY_CONDITION_NOT_TRUE_RULE: &str = "ReadyConditionNotTrue";
pub const CORDONED_RULE: &str = "Cordoned";

lazy_static! {
    pub static ref RULE_REGISTRY: HashMap<&'static str, Arc<dyn ReadinessRule>> = {
        HashMap::from([
            (
                NETWORK_UNAVAILABLE_RULE,
                Arc::new(NetworkUnavailable {}) as Arc<dyn ReadinessRule>,
            ),
            (
                READY_CONDITION_NOT_TRUE_RULE,
                Arc::new(ReadyConditionNotTrue {}) as Arc<dyn ReadinessRule>,
            ),
            (CORDONED_RULE, Arc::new(Cordoned {}) as Arc<dyn ReadinessRule>),
        ])
    };
}

// NetworkUnavailable fires when the node agent reports that the node network is not configured.
pub struct NetworkUnavailable {}
impl ReadinessRule for NetworkUnavailable {
    fn name(&self) -> &'static str {
        NETWORK_UNAVAILABLE_RULE
    }

    fn fires(&self, node: &Node) -> bool {
        node.has_condition(&NodeConditionType::NetworkUnavailable, ConditionStatus::True)
    }
}

// ReadyConditionNotTrue is the classic kubelet readiness check. A missing Ready condition does
// not fire it, only an explicit False or Unknown status does.
pub struct ReadyConditionNotTrue {}
impl ReadinessRule for ReadyConditionNotTrue {
    fn name(&self) -> &'static str {
        READY_CONDITION_NOT_TRUE_RULE
    }

    fn fires(&self, node: &Node) -> bool {
        node.conditions_of(&NodeConditionType::Ready)
            .any(|c| c.status != ConditionStatus::True)
    }
}

// Cordoned turns the administrative unschedulable flag into a readiness signal.
pub struct Cordoned {}
impl ReadinessRule for Cordoned {
    fn name(&self) -> &'static str {
        CORDONED_RULE
    }

    fn fires(&self, node: &Node) -> bool {
        node.spec.unschedulable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::node::ConditionStatus::{False, True, Unknown};
    use crate::core::node::NodeConditionType::{
        DiskPressure, MemoryPressure, NetworkUnavailable as NetworkUnavailableCondition, Ready,
    };

    fn rule(name: &str) -> Arc<dyn ReadinessRule> {
        RULE_REGISTRY.get(name).unwrap().clone()
    }

    #[test]
    fn test_registry_names_match_rules() {
        for (name, rule) in RULE_REGISTRY.iter() {
            assert_eq!(*name, rule.name());
        }
        assert_eq!(RULE_REGISTRY.len(), 3);
    }

    #[test]
    fn test_network_unavailable_rule() {
        let rule = rule(NETWORK_UNAVAILABLE_RULE);
        let node = Node::new("node1".to_string());
        assert!(!rule.fires(&node));
        assert!(!rule.fires(&node.clone().with_condition(NetworkUnavailableCondition, False)));
        assert!(!rule.fires(&node.clone().with_condition(NetworkUnavailableCondition, Unknown)));
        assert!(rule.fires(
            &node
                .clone()
                .with_condition(Ready, True)
                .with_condition(NetworkUnavailableCondition, True)
        ));
    }

    #[test]
    fn test_ready_condition_not_true_rule() {
        let rule = rule(READY_CONDITION_NOT_TRUE_RULE);
        let node = Node::new("node1".to_string());
        assert!(!rule.fires(&node));
        assert!(!rule.fires(&node.clone().with_condition(Ready, True)));
        assert!(rule.fires(&node.clone().with_condition(Ready, False)));
        assert!(rule.fires(&node.clone().with_condition(Ready, Unknown)));
        assert!(!rule.fires(
            &node
                .clone()
                .with_condition(MemoryPressure, True)
                .with_condition(DiskPressure, False)
        ));
    }

    #[test]
    fn test_ready_condition_not_true_rule_with_duplicates() {
        let rule = rule(READY_CONDITION_NOT_TRUE_RULE);
        let node = Node::new("node1".to_string())
            .with_condition(Ready, True)
            .with_condition(Ready, False);
        assert!(rule.fires(&node));
    }

    #[test]
    fn test_cordoned_rule() {
        let rule = rule(CORDONED_RULE);
        let node = Node::new("node1".to_string()).with_condition(Ready, True);
        assert!(!rule.fires(&node));
        assert!(rule.fires(&node.with_unschedulable(true)));
    }
}
