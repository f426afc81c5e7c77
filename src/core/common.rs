use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ObjectMeta {
    // Only used for logging and labelling verdicts, never for readiness decisions.
    #[serde(default)]
    pub name: String,
}
