//! CLI Module Organization
//!
//! - args: CLI argument structures
//! - commands: command execution logic
//! - config_builder: configuration loading
//! - display: summary and table output

pub mod args;
pub mod commands;
pub mod config_builder;
pub mod display;

// Re-export commonly used items for convenience
pub use args::*;
pub use commands::*;
