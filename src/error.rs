//! Errors raised at the edges of the readiness gate: building an evaluator from config and
//! loading or writing files. Evaluation itself never fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GateError {
    #[error("readiness rule {0:?} is not registered")]
    UnknownRule(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to serialize json: {0}")]
    Json(#[from] serde_json::Error),
}
