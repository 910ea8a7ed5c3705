//! CLI command implementations.

pub mod block;
pub mod config;
pub mod fetch;
pub mod groups;
pub mod show;
