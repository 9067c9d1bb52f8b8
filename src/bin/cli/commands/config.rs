//! Configuration management commands.
//!
//! This module contains commands for managing retheme configuration files,
//! including initialization, validation, and printing defaults.

use owo_colors::OwoColorize;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use retheme::core::config::RethemeConfig;

use crate::cli::args::{InitConfigArgs, ValidateConfigArgs};
use crate::cli::config_builder::load_configuration;
use crate::cli::display::display_config_summary;

/// Print default configuration in YAML format
pub fn print_default_config() -> anyhow::Result<()> {
    println!("{}", "# Default retheme configuration".dimmed());
    println!(
        "{}",
        "# Save this to a file and customize as needed".dimmed()
    );
    println!(
        "{}",
        "# Usage: retheme apply --config your-config.yml".dimmed()
    );
    println!();

    let yaml_output = serde_yaml::to_string(&RethemeConfig::default())?;
    println!("{}", yaml_output);

    Ok(())
}

/// Initialize a configuration file with defaults
pub fn init_config(args: InitConfigArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Configuration file already exists: {}. Use --force to overwrite or choose a different name with --output",
            args.output.display()
        ));
    }

    RethemeConfig::default().to_yaml_file(&args.output)?;

    println!(
        "{} {}",
        "✅ Configuration saved to:".bright_green().bold(),
        args.output.display().to_string().cyan()
    );
    println!();
    println!("{}", "🔧 Key settings you can customize:".bright_blue().bold());

    /// Row type for the configuration tips table.
    #[derive(Tabled)]
    struct CustomizationRow {
        setting: String,
        description: String,
    }

    let customization_rows = vec![
        CustomizationRow {
            setting: "discovery.root".to_string(),
            description: "Directory walked for sources (default: app)".to_string(),
        },
        CustomizationRow {
            setting: "discovery.suffixes".to_string(),
            description: "File name suffixes to process (default: .tsx, .ts)".to_string(),
        },
        CustomizationRow {
            setting: "substitution.global_block_marker".to_string(),
            description: "Module-level block left untouched (default: STATUS_CONFIG)".to_string(),
        },
        CustomizationRow {
            setting: "substitution.reserved_words".to_string(),
            description: "Scheme names never rewritten after Colors. (default: light, dark)"
                .to_string(),
        },
    ];

    let mut table = Table::new(customization_rows);
    table.with(TableStyle::rounded());
    println!("{}", table);

    Ok(())
}

/// Validate a retheme configuration file
pub fn validate_config(args: ValidateConfigArgs) -> anyhow::Result<()> {
    println!(
        "{} {}",
        "🔍 Validating configuration:".bright_blue().bold(),
        args.config.display().to_string().cyan()
    );
    println!();

    let config = match load_configuration(Some(args.config.as_path())) {
        Ok(config) => {
            println!("{}", "✅ Configuration file is valid!".bright_green().bold());
            println!();
            config
        }
        Err(e) => {
            eprintln!("{} {}", "❌ Configuration validation failed:".red(), e);
            println!();
            println!("{}", "🔧 Common issues:".bright_blue().bold());
            println!("   • Check YAML syntax (indentation, colons, quotes)");
            println!("   • Tokens and suffixes must not be empty");
            println!();
            println!(
                "{}",
                "💡 Tip: Use 'retheme print-default-config' to see valid format".dimmed()
            );
            return Err(e);
        }
    };

    display_config_summary(&config);

    if args.detailed {
        println!("{}", "🔧 Injected Boilerplate".bright_blue().bold());
        for line in &config.boilerplate.lines {
            println!("  {}", line);
        }
        println!();
    }

    Ok(())
}
