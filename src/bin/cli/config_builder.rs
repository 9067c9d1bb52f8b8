//! Configuration loading for CLI commands.

use std::path::Path;

use tracing::info;

use retheme::core::config::RethemeConfig;

/// Load configuration: explicit path first, then `./.retheme.yml`/`.yaml`,
/// then built-in defaults. The result is validated.
pub fn load_configuration(config_path: Option<&Path>) -> anyhow::Result<RethemeConfig> {
    let implicit = match config_path {
        Some(_) => None,
        None => RethemeConfig::find_implicit(Path::new(".")),
    };

    let config = match config_path.or(implicit.as_deref()) {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            RethemeConfig::from_yaml_file(path).map_err(|e| {
                anyhow::anyhow!(
                    "Failed to load configuration from {}: {}",
                    path.display(),
                    e
                )
            })?
        }
        None => RethemeConfig::default(),
    };

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Configuration validation failed: {}", e))?;

    Ok(config)
}
