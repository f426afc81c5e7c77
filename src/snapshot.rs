//! Cluster snapshot as handed over by the cluster state cache, and its evaluation against the
//! readiness gate.
//!
//! Every node entry is parsed on its own. An entry which does not parse is kept as `Malformed`
//! and gets the gate's missing-node verdict, so one bad node never aborts the whole pass.

use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use crate::core::node::Node;
use crate::core::readiness::NodeReadinessEvaluator;
use crate::error::GateError;
use crate::report::{NodeVerdict, ReadinessReport};

pub const MALFORMED_NODE: &str = "MalformedNode";

#[derive(Debug, PartialEq)]
pub enum SnapshotNode {
    Parsed(Node),
    Malformed {
        /// Name from metadata if it could be read, else position in the snapshot.
        node_name: String,
        reason: String,
    },
}

#[derive(Deserialize)]
struct RawClusterSnapshot {
    #[serde(default)]
    nodes: Vec<serde_yaml::Value>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(from = "RawClusterSnapshot")]
pub struct ClusterSnapshot {
    pub nodes: Vec<SnapshotNode>,
}

impl From<RawClusterSnapshot> for ClusterSnapshot {
    fn from(raw: RawClusterSnapshot) -> Self {
        let nodes = raw
            .nodes
            .into_iter()
            .enumerate()
            .map(|(idx, value)| {
                let node_name = value
                    .get("metadata")
                    .and_then(|metadata| metadata.get("name"))
                    .and_then(|name| name.as_str())
                    .map(String::from)
                    .unwrap_or_else(|| format!("nodes[{}]", idx));
                match serde_yaml::from_value::<Node>(value) {
                    Ok(node) => SnapshotNode::Parsed(node),
                    Err(err) => {
                        warn!("Node {:?} in snapshot is malformed: {}", node_name, err);
                        SnapshotNode::Malformed {
                            node_name,
                            reason: err.to_string(),
                        }
                    }
                }
            })
            .collect();
        Self { nodes }
    }
}

impl ClusterSnapshot {
    pub fn from_yaml(snapshot_yaml: &str) -> Result<Self, GateError> {
        Ok(serde_yaml::from_str(snapshot_yaml)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, GateError> {
        let snapshot_yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&snapshot_yaml)
    }
}

pub fn evaluate_snapshot(
    evaluator: &NodeReadinessEvaluator,
    snapshot: &ClusterSnapshot,
) -> ReadinessReport {
    let mut report = ReadinessReport::default();
    for snapshot_node in snapshot.nodes.iter() {
        let verdict = match snapshot_node {
            SnapshotNode::Parsed(node) => {
                let fired_rules = evaluator.fired_rules(node);
                NodeVerdict {
                    node_name: node.metadata.name.clone(),
                    not_ready: !fired_rules.is_empty(),
                    malformed: false,
                    fired_rules: fired_rules.into_iter().map(String::from).collect(),
                }
            }
            SnapshotNode::Malformed { node_name, .. } => {
                let not_ready = evaluator.evaluate(None);
                NodeVerdict {
                    node_name: node_name.clone(),
                    not_ready,
                    malformed: true,
                    fired_rules: if not_ready {
                        vec![MALFORMED_NODE.to_string()]
                    } else {
                        vec![]
                    },
                }
            }
        };
        report.add_verdict(verdict);
    }

    info!(
        "Evaluated {:?} nodes: {:?} ready, {:?} not ready, {:?} malformed",
        report.total_nodes, report.ready_nodes, report.not_ready_nodes, report.malformed_nodes
    );
    report
}
