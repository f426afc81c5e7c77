//! Node readiness gate: decides whether a node must be excluded from scheduling on readiness
//! grounds.
//!
//! The evaluator is a pure function of the node snapshot and its own immutable configuration.
//! It is invoked once per candidate node during the node filtering fan-out, so it is `Send + Sync`
//! and never blocks. Absence of a condition is never read as a failure: a node which reports
//! nothing is assumed usable.
//!
//! Which signals make a node "not ready" is selected by configuration. The default rule set is
//! `NetworkUnavailable` only; the Ready condition and the cordon flag are available as opt-in
//! rules until the owning scheduler confirms how they should combine. Condition types the gate
//! does not know fail closed: reported as True they make the node not ready unless the policy
//! says to ignore them.

use std::sync::Arc;

use lazy_static::lazy_static;
use log::{debug, warn};

use crate::config::{ReadinessGateConfig, UnrecognizedConditionPolicy};
use crate::core::node::{ConditionStatus, Node, NodeConditionType};
use crate::core::readiness::interface::ReadinessRule;
use crate::core::readiness::rule::{NetworkUnavailable, RULE_REGISTRY};
use crate::error::GateError;

pub const UNRECOGNIZED_CONDITION: &str = "UnrecognizedCondition";

lazy_static! {
    static ref DEFAULT_EVALUATOR: NodeReadinessEvaluator = NodeReadinessEvaluator::default();
}

/// Readiness verdict of the default gate configuration.
pub fn node_is_not_ready(node: &Node) -> bool {
    DEFAULT_EVALUATOR.is_node_not_ready(node)
}

#[derive(Clone)]
pub struct NodeReadinessEvaluator {
    rules: Vec<Arc<dyn ReadinessRule>>,
    unrecognized_condition_policy: UnrecognizedConditionPolicy,
    on_missing_node: bool,
}

impl Default for NodeReadinessEvaluator {
    fn default() -> Self {
        Self {
            rules: vec![Arc::new(NetworkUnavailable {})],
            unrecognized_condition_policy: Default::default(),
            on_missing_node: false,
        }
    }
}

impl NodeReadinessEvaluator {
    pub fn new(config: &ReadinessGateConfig) -> Result<Self, GateError> {
        let mut rules: Vec<Arc<dyn ReadinessRule>> = Vec::with_capacity(config.rules.len());
        for rule_name in config.rules.iter() {
            let rule = RULE_REGISTRY
                .get(rule_name.as_str())
                .ok_or_else(|| GateError::UnknownRule(rule_name.clone()))?;
            // Listing a rule twice does not change the verdict.
            if rules.iter().all(|r| r.name() != rule.name()) {
                rules.push(rule.clone());
            }
        }

        Ok(Self {
            rules,
            unrecognized_condition_policy: config.unrecognized_condition_policy,
            on_missing_node: config.on_missing_node,
        })
    }

    /// Adds a rule which is not part of the registry, e.g. one owned by the embedding scheduler.
    pub fn with_rule(mut self, rule: Arc<dyn ReadinessRule>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Returns true only if the node must be excluded from scheduling on readiness grounds.
    pub fn is_node_not_ready(&self, node: &Node) -> bool {
        let not_ready = self.rules.iter().any(|rule| rule.fires(node))
            || self.unrecognized_condition_fires(node);

        debug!(
            "Node {:?} readiness verdict: not_ready={:?}",
            node.metadata.name, not_ready
        );
        not_ready
    }

    /// Same as `is_node_not_ready`, but tolerates an absent snapshot by returning the configured
    /// default.
    pub fn evaluate(&self, node: Option<&Node>) -> bool {
        match node {
            Some(node) => self.is_node_not_ready(node),
            None => {
                debug!(
                    "Node snapshot is missing, using default verdict not_ready={:?}",
                    self.on_missing_node
                );
                self.on_missing_node
            }
        }
    }

    /// Names of all rules which fire for the node, in rule order.
    pub fn fired_rules(&self, node: &Node) -> Vec<&'static str> {
        let mut fired: Vec<&'static str> = self
            .rules
            .iter()
            .filter(|rule| rule.fires(node))
            .map(|rule| rule.name())
            .collect();
        if self.unrecognized_condition_fires(node) {
            fired.push(UNRECOGNIZED_CONDITION);
        }
        fired
    }

    fn unrecognized_condition_fires(&self, node: &Node) -> bool {
        node.status
            .conditions
            .iter()
            .any(|condition| match &condition.condition_type {
                NodeConditionType::Ready
                | NodeConditionType::MemoryPressure
                | NodeConditionType::DiskPressure
                | NodeConditionType::PIDPressure
                | NodeConditionType::NetworkUnavailable => false,
                NodeConditionType::Unrecognized(_) => match self.unrecognized_condition_policy {
                    UnrecognizedConditionPolicy::NotReadyWhenTrue => {
                        debug!(
                            "Node {:?} reports unrecognized condition {}={:?}",
                            node.metadata.name, condition.condition_type, condition.status
                        );
                        condition.status == ConditionStatus::True
                    }
                    UnrecognizedConditionPolicy::Ignore => {
                        warn!(
                            "Ignoring unrecognized condition {}={:?} of node {:?}",
                            condition.condition_type, condition.status, node.metadata.name
                        );
                        false
                    }
                },
            })
    }
}
