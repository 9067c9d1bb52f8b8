//! Pipeline executor: discovery, eligibility, the four rewrite stages and
//! persistence, run strictly one file after another.

use std::path::Path;

use tracing::{debug, info};

use crate::core::config::RethemeConfig;
use crate::core::errors::Result;
use crate::core::file_utils::FileStore;

use super::file_discovery::discover_files;
use super::pipeline_config::Variant;
use super::pipeline_results::{FileOutcome, FileStatus, RunSummary, StageReport, Transformation};
use super::stages::{BoilerplateStage, ImportStage, InjectionOutcome, StyleStage, SubstitutionStage};

/// The text rewrite pipeline for one variant.
#[derive(Debug, Clone)]
pub struct TransformationPipeline {
    config: RethemeConfig,
    variant: Variant,
    markers: Vec<String>,
    imports: ImportStage,
    styles: StyleStage,
    boilerplate: BoilerplateStage,
    substitution: SubstitutionStage,
}

impl TransformationPipeline {
    /// Build a pipeline; validates the configuration and compiles patterns.
    pub fn new(config: RethemeConfig, variant: Variant) -> Result<Self> {
        config.validate()?;

        let markers = variant.eligibility_markers(&config.substitution);
        let imports = ImportStage::new(&config.imports, variant.import_requires_newline())?;
        let styles = StyleStage::new(&config.styles);
        let boilerplate = BoilerplateStage::new(
            &config.boilerplate,
            variant.matches_named_exports(),
            variant.drops_superseded_styles(),
        );
        let substitution =
            SubstitutionStage::new(&config.substitution, variant.protects_global_block());

        Ok(Self {
            config,
            variant,
            markers,
            imports,
            styles,
            boilerplate,
            substitution,
        })
    }

    /// Pipeline with default configuration
    pub fn with_defaults(variant: Variant) -> Result<Self> {
        Self::new(RethemeConfig::default(), variant)
    }

    /// The variant this pipeline runs
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The configuration in use
    pub fn config(&self) -> &RethemeConfig {
        &self.config
    }

    /// True if any eligibility marker occurs in `content`.
    pub fn is_eligible(&self, content: &str) -> bool {
        self.markers.iter().any(|marker| content.contains(marker.as_str()))
    }

    /// Run the four stages over `content` regardless of eligibility.
    pub fn transform(&self, content: &str) -> Transformation {
        let (content, import) = self.imports.apply(content.to_string());
        let (content, style_declarations) = self.styles.apply(content);

        let (content, injection) = if style_declarations > 0 {
            self.boilerplate.apply(&content)
        } else {
            (content, InjectionOutcome::default())
        };

        let (content, substitutions) = self.substitution.apply(&content);

        Transformation {
            content,
            report: StageReport {
                import,
                style_declarations,
                injection,
                substitutions,
            },
        }
    }

    /// Transform `content` if it is eligible.
    pub fn rewrite(&self, content: &str) -> Option<Transformation> {
        self.is_eligible(content).then(|| self.transform(content))
    }

    /// Load, transform and (for persisting variants) save one file.
    pub fn process_file(&self, path: &Path) -> Result<FileOutcome> {
        let original = FileStore::load(path)?;

        let Some(transformation) = self.rewrite(&original) else {
            debug!("Skipping {}: no registry reference", path.display());
            return Ok(FileOutcome {
                path: path.to_path_buf(),
                status: FileStatus::Ineligible,
            });
        };

        let changed = transformation.content != original;
        let written = self.variant.persists();
        if written {
            FileStore::save(path, &transformation.content)?;
            if changed {
                info!("Rewrote {}", path.display());
            }
        } else if changed {
            info!("Would rewrite {}", path.display());
        }

        debug!("{}: {:?}", path.display(), transformation.report);
        Ok(FileOutcome {
            path: path.to_path_buf(),
            status: FileStatus::Processed {
                changed,
                written,
                report: transformation.report,
            },
        })
    }

    /// Discover and process every candidate file under the configured root.
    ///
    /// The first read or write failure aborts the run.
    pub fn run(&self) -> Result<RunSummary> {
        info!(
            "Running {} pipeline over '{}'",
            self.variant,
            self.config.discovery.root.display()
        );

        let mut summary = RunSummary::new(self.variant);
        for path in discover_files(&self.config.discovery) {
            summary.outcomes.push(self.process_file(&path)?);
        }

        info!(
            "Processed {} files: {} eligible, {} changed, {} written",
            summary.files_discovered(),
            summary.files_eligible(),
            summary.files_changed(),
            summary.files_written()
        );
        Ok(summary)
    }
}
