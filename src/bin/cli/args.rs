//! CLI Argument Structures
//!
//! This module contains all CLI argument definitions and command structures
//! used by the retheme binary.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Colour-scheme theming codemod for React Native sources
#[derive(Parser)]
#[command(name = "retheme")]
#[command(version = VERSION)]
#[command(about = "Rewrite static style sheets and Colors.* lookups into a scheme-aware theme")]
#[command(long_about = "
Rewrite every .tsx/.ts file under ./app that references the Colors registry:
import useColorScheme, turn `const styles = StyleSheet.create({` into a theme
factory, resolve the theme inside the component and replace Colors.x with theme.x.

Common Usage:

  # Rewrite files in place (same as `retheme apply`)
  retheme

  # Show what would change without touching any file
  retheme draft --details

  # Start from a configuration file
  retheme init-config
  retheme apply --config .retheme.yml
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rewrite eligible files in place (refined pipeline)
    Apply(RunArgs),

    /// Compute every rewrite but write nothing (first-draft pipeline)
    Draft(RunArgs),

    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// Initialize a configuration file with defaults
    #[command(name = "init-config")]
    InitConfig(InitConfigArgs),

    /// Validate a retheme configuration file
    #[command(name = "validate-config")]
    ValidateConfig(ValidateConfigArgs),
}

#[derive(Args, Default)]
pub struct RunArgs {
    /// Configuration file (defaults to ./.retheme.yml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// List every processed file with its stage results
    #[arg(long)]
    pub details: bool,
}

#[derive(Args)]
pub struct InitConfigArgs {
    /// Output configuration file name
    #[arg(short, long, default_value = ".retheme.yml")]
    pub output: PathBuf,

    /// Overwrite existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ValidateConfigArgs {
    /// Path to configuration file to validate
    #[arg(short, long, required = true)]
    pub config: PathBuf,

    /// Show detailed configuration breakdown
    #[arg(long)]
    pub detailed: bool,
}
