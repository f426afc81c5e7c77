//! Type definitions for node specification and state as reported by the cluster state cache.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::common::ObjectMeta;

#[derive(Default, Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct NodeSpec {
    /// Administrative cordon set by the cluster operator. Independent of what the node agent
    /// reports about its own health.
    #[serde(default)]
    pub unschedulable: bool,
}

/// Known node condition kinds, taken from
/// https://kubernetes.io/docs/reference/node/node-status/#condition
///
/// Any other type string reported by a node agent is kept as `Unrecognized`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum NodeConditionType {
    Ready,
    MemoryPressure,
    DiskPressure,
    PIDPressure,
    NetworkUnavailable,
    Unrecognized(String),
}

impl NodeConditionType {
    pub fn as_str(&self) -> &str {
        match self {
            NodeConditionType::Ready => "Ready",
            NodeConditionType::MemoryPressure => "MemoryPressure",
            NodeConditionType::DiskPressure => "DiskPressure",
            NodeConditionType::PIDPressure => "PIDPressure",
            NodeConditionType::NetworkUnavailable => "NetworkUnavailable",
            NodeConditionType::Unrecognized(condition_type) => condition_type,
        }
    }
}

impl From<String> for NodeConditionType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Ready" => NodeConditionType::Ready,
            "MemoryPressure" => NodeConditionType::MemoryPressure,
            "DiskPressure" => NodeConditionType::DiskPressure,
            "PIDPressure" => NodeConditionType::PIDPressure,
            "NetworkUnavailable" => NodeConditionType::NetworkUnavailable,
            _ => NodeConditionType::Unrecognized(value),
        }
    }
}

impl From<NodeConditionType> for String {
    fn from(value: NodeConditionType) -> Self {
        match value {
            NodeConditionType::Unrecognized(condition_type) => condition_type,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for NodeConditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum ConditionStatus {
    True,
    False,
    Unknown,
}

impl From<String> for ConditionStatus {
    // Any status string other than True or False is read as Unknown.
    fn from(value: String) -> Self {
        match value.as_str() {
            "True" => ConditionStatus::True,
            "False" => ConditionStatus::False,
            _ => ConditionStatus::Unknown,
        }
    }
}

impl From<ConditionStatus> for String {
    fn from(value: ConditionStatus) -> Self {
        match value {
            ConditionStatus::True => "True",
            ConditionStatus::False => "False",
            ConditionStatus::Unknown => "Unknown",
        }
        .to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct NodeCondition {
    #[serde(rename = "type")]
    pub condition_type: NodeConditionType,
    pub status: ConditionStatus,
    // Last event time the condition transit from one status to another.
    #[serde(default)]
    pub last_transition_time: f64,
}

#[derive(Default, Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct NodeStatus {
    /// Not guaranteed to be sorted or deduplicated.
    #[serde(default)]
    pub conditions: Vec<NodeCondition>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Node {
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: NodeSpec,
    #[serde(default)]
    pub status: NodeStatus,
}

impl Node {
    pub fn new(name: String) -> Self {
        Self {
            metadata: ObjectMeta { name },
            spec: Default::default(),
            status: Default::default(),
        }
    }

    pub fn with_unschedulable(mut self, unschedulable: bool) -> Self {
        self.spec.unschedulable = unschedulable;
        self
    }

    pub fn with_condition(
        mut self,
        condition_type: NodeConditionType,
        status: ConditionStatus,
    ) -> Self {
        self.status.conditions.push(NodeCondition {
            condition_type,
            status,
            last_transition_time: 0.0,
        });
        self
    }

    // All conditions of the given type, duplicates included.
    pub fn conditions_of<'a>(
        &'a self,
        condition_type: &'a NodeConditionType,
    ) -> impl Iterator<Item = &'a NodeCondition> + 'a {
        self.status
            .conditions
            .iter()
            .filter(move |c| &c.condition_type == condition_type)
    }

    pub fn has_condition(
        &self,
        condition_type: &NodeConditionType,
        status: ConditionStatus,
    ) -> bool {
        self.conditions_of(condition_type).any(|c| c.status == status)
    }
}
