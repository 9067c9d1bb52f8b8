//! CLI Command Implementations
//!
//! This module contains all command implementations for the retheme CLI:
//! - transform: the apply and draft pipeline runs
//! - config: Configuration management commands

pub mod config;
pub mod transform;

// Re-export transform command items
pub use transform::run_pipeline;

// Re-export config command items
pub use config::{init_config, print_default_config, validate_config};
