//! retheme CLI - colour-scheme theming codemod
//!
//! With no subcommand the refined pipeline rewrites every eligible file
//! under `./app` in place.

use clap::Parser;

use retheme::Variant;

mod cli;

use cli::{Cli, Commands, RunArgs};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match cli.command.unwrap_or(Commands::Apply(RunArgs::default())) {
        Commands::Apply(args) => {
            cli::run_pipeline(Variant::Refined, args)?;
        }
        Commands::Draft(args) => {
            cli::run_pipeline(Variant::FirstDraft, args)?;
        }
        Commands::PrintDefaultConfig => {
            cli::print_default_config()?;
        }
        Commands::InitConfig(args) => {
            cli::init_config(args)?;
        }
        Commands::ValidateConfig(args) => {
            cli::validate_config(args)?;
        }
    }

    Ok(())
}
