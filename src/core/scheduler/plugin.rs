use std::collections::HashMap;

use lazy_static::lazy_static;
use log::debug;

use crate::core::node::Node;
use crate::core::readiness::NodeReadinessEvaluator;

pub const NODE_READINESS_PLUGIN: &str = "NodeReadiness";

lazy_static! {
    pub static ref PLUGIN_REGISTRY: HashMap<&'static str, Box<dyn FilterPlugin>> = {
        HashMap::from([(
            NODE_READINESS_PLUGIN,
            Box::new(NodeReadinessFilter::default()) as Box<dyn FilterPlugin>,
        )])
    };
}

pub trait FilterPlugin: Send + Sync {
    fn filter<'a>(&self, nodes: Vec<&'a Node>) -> Vec<&'a Node>;
}

// NodeReadiness is a plugin that drops nodes the readiness gate marks as not ready.
// Order of the remaining nodes is preserved.
#[derive(Clone, Default)]
pub struct NodeReadinessFilter {
    evaluator: NodeReadinessEvaluator,
}

impl NodeReadinessFilter {
    pub fn new(evaluator: NodeReadinessEvaluator) -> Self {
        Self { evaluator }
    }
}

impl FilterPlugin for NodeReadinessFilter {
    fn filter<'a>(&self, nodes: Vec<&'a Node>) -> Vec<&'a Node> {
        nodes
            .into_iter()
            .filter(|&node| {
                let not_ready = self.evaluator.is_node_not_ready(node);
                if not_ready {
                    debug!("Node {:?} filtered out as not ready", node.metadata.name);
                }
                !not_ready
            })
            .collect()
    }
}
