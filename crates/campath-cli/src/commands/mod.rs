//! CLI command implementations

pub mod completions;
pub mod config;
pub mod locations;
pub mod route;
pub mod serve;
