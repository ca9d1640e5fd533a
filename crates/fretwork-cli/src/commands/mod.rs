//! CLI command implementations

pub mod scale;
pub mod serve;
