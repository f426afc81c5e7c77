pub mod common;
pub mod node;
pub mod readiness;
pub mod scheduler;
