//! Pipeline variant selection.

use std::fmt;

use crate::core::config::SubstitutionConfig;

/// Which generation of the rewrite to run.
///
/// `FirstDraft` computes every rewrite and then throws the result away.
/// `Refined` persists its output and adds the excluded-block and
/// superseded-line handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Inert dry run
    FirstDraft,
    /// Rewrites files in place
    Refined,
}

impl Variant {
    /// Substrings that make a file eligible for processing.
    pub fn eligibility_markers(self, substitution: &SubstitutionConfig) -> Vec<String> {
        let token = &substitution.registry_token;
        match self {
            Self::FirstDraft => vec![format!("{token}."), format!("{token}[")],
            Self::Refined => vec![format!("{token}.")],
        }
    }

    /// Whether rewritten content is written back to disk.
    pub const fn persists(self) -> bool {
        matches!(self, Self::Refined)
    }

    /// Whether `export function Name(...) {` also counts as a component declaration.
    pub const fn matches_named_exports(self) -> bool {
        matches!(self, Self::Refined)
    }

    /// Whether local style declarations after the component opener are dropped.
    pub const fn drops_superseded_styles(self) -> bool {
        matches!(self, Self::Refined)
    }

    /// Whether the named global configuration block is protected from substitution.
    pub const fn protects_global_block(self) -> bool {
        matches!(self, Self::Refined)
    }

    /// Whether the import pattern must be followed by a newline.
    pub const fn import_requires_newline(self) -> bool {
        matches!(self, Self::FirstDraft)
    }
}

impl Default for Variant {
    fn default() -> Self {
        Self::Refined
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstDraft => write!(f, "first-draft"),
            Self::Refined => write!(f, "refined"),
        }
    }
}
