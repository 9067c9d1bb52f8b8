//! Rewrite stage implementations.
//!
//! Each stage performs one textual rewrite, applied in this order:
//! - Import augmentation
//! - Style declaration rewrite
//! - Boilerplate injection
//! - Registry token substitution

pub mod boilerplate_stage;
pub mod import_stage;
pub mod style_stage;
pub mod substitution_stage;

pub use boilerplate_stage::*;
pub use import_stage::*;
pub use style_stage::*;
pub use substitution_stage::*;
