//! Rewrite Pipeline Module
//!
//! Turns static React Native style sheets and hard-coded `Colors.*` lookups
//! into a colour-scheme-aware theme model, one file at a time.
//!
//! ## Pipeline Stages
//!
//! 1. **File Discovery**: walk the root for `.tsx`/`.ts` files
//! 2. **Eligibility**: keep files that mention the colour registry
//! 3. **Import Augmentation**: make sure `useColorScheme` is imported
//! 4. **Style Rewrite**: `const styles = StyleSheet.create({` becomes a factory
//! 5. **Boilerplate Injection**: resolve the theme inside the component
//! 6. **Token Substitution**: `Colors.x` becomes `theme.x` outside exclusion zones
//! 7. **Persistence**: write back (refined variant only)
//!
//! ## Usage
//!
//! ```no_run
//! use retheme::core::pipeline::{TransformationPipeline, Variant};
//!
//! let pipeline = TransformationPipeline::with_defaults(Variant::Refined)?;
//! let summary = pipeline.run()?;
//! println!("{} files rewritten", summary.files_changed());
//! # Ok::<(), retheme::RethemeError>(())
//! ```

pub use file_discovery::{discover_files, discover_under, has_matching_suffix};
pub use pipeline_config::Variant;
pub use pipeline_executor::TransformationPipeline;
pub use pipeline_results::{FileOutcome, FileStatus, RunSummary, StageReport, Transformation};
pub use stages::{BlockState, ComponentState, ImportOutcome, InjectionOutcome, LineClass};

mod file_discovery;
mod pipeline_config;
mod pipeline_executor;
mod pipeline_results;
pub mod stages;
