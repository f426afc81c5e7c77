//! Readiness verdicts of a whole cluster snapshot.

pub mod printer;

use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
pub struct NodeVerdict {
    pub node_name: String,
    pub not_ready: bool,
    /// The node entry could not be parsed and got the missing-node verdict.
    pub malformed: bool,
    /// Rules which made the node not ready, empty for ready nodes.
    pub fired_rules: Vec<String>,
}

#[derive(Debug, Default, Serialize, PartialEq)]
pub struct ReadinessReport {
    pub total_nodes: u64,
    pub ready_nodes: u64,
    pub not_ready_nodes: u64,
    pub malformed_nodes: u64,
    /// In the same order as nodes in the snapshot.
    pub verdicts: Vec<NodeVerdict>,
}

impl ReadinessReport {
    pub fn add_verdict(&mut self, verdict: NodeVerdict) {
        self.total_nodes += 1;
        if verdict.malformed {
            self.malformed_nodes += 1;
        }
        if verdict.not_ready {
            self.not_ready_nodes += 1;
        } else {
            self.ready_nodes += 1;
        }
        self.verdicts.push(verdict);
    }
}
