//! Pipeline run commands (`apply` and `draft`).

use tracing::debug;

use retheme::core::pipeline::{TransformationPipeline, Variant};

use crate::cli::args::RunArgs;
use crate::cli::config_builder::load_configuration;
use crate::cli::display::display_run_summary;

/// Run the rewrite pipeline in the given variant.
pub fn run_pipeline(variant: Variant, args: RunArgs) -> anyhow::Result<()> {
    let config = load_configuration(args.config.as_deref())?;
    debug!("Effective configuration: {:?}", config);

    let pipeline = TransformationPipeline::new(config, variant)?;
    let summary = pipeline.run()?;

    display_run_summary(&summary, args.details);
    Ok(())
}
