pub mod config;
pub mod core;
pub mod error;
pub mod report;
pub mod snapshot;

#[cfg(test)]
pub mod test_util;
