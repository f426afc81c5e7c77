//! Config fields definitions for the node readiness gate

use std::path::Path;

use serde::Deserialize;

use crate::core::readiness::rule::NETWORK_UNAVAILABLE_RULE;
use crate::error::GateError;
use crate::report::printer::ReportPrinterConfig;

#[derive(Debug, Deserialize, PartialEq)]
pub struct ReadinessGateConfig {
    /// Names of readiness rules from the rule registry. The node is not ready if any of them
    /// fires.
    #[serde(default = "default_rules")]
    pub rules: Vec<String>,
    #[serde(default)]
    pub unrecognized_condition_policy: UnrecognizedConditionPolicy,
    /// Verdict returned when the node snapshot is absent. False keeps the node in scheduling.
    #[serde(default)]
    pub on_missing_node: bool,
    pub report: Option<ReportPrinterConfig>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
pub enum UnrecognizedConditionPolicy {
    // Condition types unknown to the gate with status True make the node not ready.
    #[default]
    NotReadyWhenTrue,
    Ignore,
}

fn default_rules() -> Vec<String> {
    vec![NETWORK_UNAVAILABLE_RULE.to_string()]
}

impl Default for ReadinessGateConfig {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            unrecognized_condition_policy: Default::default(),
            on_missing_node: false,
            report: None,
        }
    }
}

impl ReadinessGateConfig {
    pub fn from_yaml(config_yaml: &str) -> Result<Self, GateError> {
        Ok(serde_yaml::from_str(config_yaml)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, GateError> {
        let config_yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&config_yaml)
    }
}
