//! # retheme: colour-scheme theming codemod
//!
//! Batch rewrite of a React Native code base from static style sheets and
//! hard-coded `Colors.*` references to a theme resolved per colour scheme.
//!
//! The rewrite is a fixed sequence of textual heuristics, not a parser:
//!
//! ```text
//! ┌──────────────┐   ┌─────────────┐   ┌────────────────────────────────────┐   ┌─────────┐
//! │  Discovery   │ → │ Eligibility │ → │ imports → styles → inject → tokens │ → │ Persist │
//! │ .tsx / .ts   │   │ "Colors."   │   │                                    │   │ refined │
//! └──────────────┘   └─────────────┘   └────────────────────────────────────┘   └─────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use retheme::{RethemeConfig, TransformationPipeline, Variant};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pipeline = TransformationPipeline::new(RethemeConfig::default(), Variant::FirstDraft)?;
//!     let summary = pipeline.run()?;
//!     println!("{} of {} files would change", summary.files_changed(), summary.files_discovered());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]

// Core rewrite engine modules
pub mod core {
    //! Configuration, errors, file access and the rewrite pipeline.

    pub mod config;
    pub mod errors;
    pub mod file_utils;
    pub mod pipeline;
}

// Re-export primary types for convenience
pub use crate::core::config::RethemeConfig;
pub use crate::core::errors::{Result, RethemeError};
pub use crate::core::pipeline::{RunSummary, TransformationPipeline, Variant};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
