//! Boilerplate injection after the first component declaration.
//!
//! The first line that looks like an exported component function gets the
//! colour-scheme hook, the theme lookup and the styles factory call inserted
//! right after it. Later declarations are left alone.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::core::config::BoilerplateConfig;

static DEFAULT_EXPORT_FN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^export default function \w+\(.*\) \{").expect("default export pattern")
});

static NAMED_EXPORT_FN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^export function \w+\(.*\) \{").expect("named export pattern"));

/// Position of the scan relative to the component body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentState {
    /// No declaration seen yet
    BeforeComponent,
    /// Past the first matched declaration
    InsideComponent,
}

/// What the injection did to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InjectionOutcome {
    /// Line index of the declaration the block follows
    pub injected_after: Option<usize>,
    /// Superseded style declarations removed
    pub dropped_lines: usize,
}

/// Boilerplate injection stage
#[derive(Debug, Clone)]
pub struct BoilerplateStage {
    lines: Vec<String>,
    superseded_marker: String,
    match_named_exports: bool,
    drop_superseded: bool,
}

impl BoilerplateStage {
    /// Create the stage
    pub fn new(
        config: &BoilerplateConfig,
        match_named_exports: bool,
        drop_superseded: bool,
    ) -> Self {
        Self {
            lines: config.lines.clone(),
            superseded_marker: config.superseded_marker.clone(),
            match_named_exports,
            drop_superseded,
        }
    }

    /// True if `line` opens a recognised component function.
    pub fn is_component_declaration(&self, line: &str) -> bool {
        DEFAULT_EXPORT_FN.is_match(line)
            || (self.match_named_exports && NAMED_EXPORT_FN.is_match(line))
    }

    /// Inject the block after the first declaration and drop superseded lines.
    pub fn apply(&self, content: &str) -> (String, InjectionOutcome) {
        let mut state = ComponentState::BeforeComponent;
        let mut outcome = InjectionOutcome::default();
        let mut output: Vec<&str> = Vec::new();

        for (index, line) in content.split('\n').enumerate() {
            match state {
                ComponentState::BeforeComponent if self.is_component_declaration(line) => {
                    output.push(line);
                    output.extend(self.lines.iter().map(String::as_str));
                    outcome.injected_after = Some(index);
                    state = ComponentState::InsideComponent;
                }
                ComponentState::InsideComponent
                    if self.drop_superseded && line.contains(self.superseded_marker.as_str()) =>
                {
                    debug!("Dropping superseded line {index}: {}", line.trim());
                    outcome.dropped_lines += 1;
                }
                _ => output.push(line),
            }
        }

        (output.join("\n"), outcome)
    }
}
