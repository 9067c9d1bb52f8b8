//! Import augmentation stage.
//!
//! Appends the hook symbol to an existing `import { ... } from "<module>";`
//! statement, or prepends a standalone import when no statement matched.
//! Only double-quoted statements with a trailing semicolon match; any other
//! shape of the same import falls through to the prepend path and leaves the
//! module imported twice.

use regex::{Captures, Regex};
use tracing::debug;

use crate::core::config::ImportConfig;
use crate::core::errors::{Result, RethemeError};

/// What the import stage did to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportOutcome {
    /// Symbol already present, or module never mentioned
    #[default]
    Skipped,
    /// Symbol appended to this many matching statements
    Augmented(usize),
    /// No statement matched; a standalone import was prepended
    Prepended,
}

/// Import augmentation stage
#[derive(Debug, Clone)]
pub struct ImportStage {
    module: String,
    symbol: String,
    pattern: Regex,
    keep_newline: bool,
}

impl ImportStage {
    /// Build the stage; `require_newline` makes the pattern demand (and keep) a
    /// newline right after the statement.
    pub fn new(config: &ImportConfig, require_newline: bool) -> Result<Self> {
        let mut source = format!(
            r#"import \{{([^}}]+)\}} from "{}";"#,
            regex::escape(&config.module)
        );
        if require_newline {
            source.push_str(r"\n");
        }
        let pattern =
            Regex::new(&source).map_err(|e| RethemeError::pattern(&source, e.to_string()))?;

        Ok(Self {
            module: config.module.clone(),
            symbol: config.symbol.clone(),
            pattern,
            keep_newline: require_newline,
        })
    }

    /// The standalone import line used by the prepend path.
    pub fn standalone_import(&self) -> String {
        format!("import {{ {} }} from \"{}\";\n", self.symbol, self.module)
    }

    /// Apply the stage to a whole file.
    pub fn apply(&self, content: String) -> (String, ImportOutcome) {
        if content.contains(self.symbol.as_str()) || !content.contains(self.module.as_str()) {
            return (content, ImportOutcome::Skipped);
        }

        let mut augmented = 0;
        let rewritten = self
            .pattern
            .replace_all(&content, |caps: &Captures<'_>| {
                augmented += 1;
                let newline = if self.keep_newline { "\n" } else { "" };
                format!(
                    "import {{{}, {} }} from \"{}\";{}",
                    &caps[1], self.symbol, self.module, newline
                )
            })
            .into_owned();

        if rewritten.contains(self.symbol.as_str()) {
            debug!("Appended {} to {augmented} import statement(s)", self.symbol);
            return (rewritten, ImportOutcome::Augmented(augmented));
        }

        debug!("No matching import of '{}'; prepending one", self.module);
        let mut prepended = self.standalone_import();
        prepended.push_str(&rewritten);
        (prepended, ImportOutcome::Prepended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(require_newline: bool) -> ImportStage {
        ImportStage::new(&ImportConfig::default(), require_newline).unwrap()
    }

    #[test]
    fn appends_symbol_after_existing_names() {
        let input = "import { View, Text } from \"react-native\";\nconst a = 1;\n".to_string();
        let (output, outcome) = stage(false).apply(input);

        assert_eq!(
            output,
            "import { View, Text , useColorScheme } from \"react-native\";\nconst a = 1;\n"
        );
        assert_eq!(outcome, ImportOutcome::Augmented(1));
        assert_eq!(output.matches("useColorScheme").count(), 1);
    }

    #[test]
    fn multi_line_braces_still_match() {
        let input = "import {\n  View,\n  Text,\n} from \"react-native\";\n".to_string();
        let (output, outcome) = stage(false).apply(input);

        assert_eq!(
            output,
            "import {\n  View,\n  Text,\n, useColorScheme } from \"react-native\";\n"
        );
        assert_eq!(outcome, ImportOutcome::Augmented(1));
    }

    #[test]
    fn single_quoted_import_gets_a_duplicate_prepended() {
        let input = "import { View } from 'react-native';\n".to_string();
        let (output, outcome) = stage(false).apply(input);

        assert_eq!(
            output,
            "import { useColorScheme } from \"react-native\";\nimport { View } from 'react-native';\n"
        );
        assert_eq!(outcome, ImportOutcome::Prepended);
    }

    #[test]
    fn skipped_when_symbol_already_present() {
        let input = "import { useColorScheme } from 'react-native';\n".to_string();
        let (output, outcome) = stage(false).apply(input.clone());
        assert_eq!(output, input);
        assert_eq!(outcome, ImportOutcome::Skipped);
    }

    #[test]
    fn skipped_when_module_is_never_mentioned() {
        let input = "import { Colors } from \"@/constants/Colors\";\n".to_string();
        let (output, outcome) = stage(false).apply(input.clone());
        assert_eq!(output, input);
        assert_eq!(outcome, ImportOutcome::Skipped);
    }

    #[test]
    fn newline_variant_misses_statement_at_end_of_file() {
        let input = "import { View } from \"react-native\";".to_string();

        let (output, outcome) = stage(true).apply(input.clone());
        assert_eq!(outcome, ImportOutcome::Prepended);
        assert!(output.ends_with(&input));

        let (output, outcome) = stage(false).apply(input);
        assert_eq!(outcome, ImportOutcome::Augmented(1));
        assert_eq!(output, "import { View , useColorScheme } from \"react-native\";");
    }

    #[test]
    fn newline_variant_keeps_the_newline() {
        let input = "import { View } from \"react-native\";\nexport {};\n".to_string();
        let (output, _) = stage(true).apply(input);
        assert_eq!(
            output,
            "import { View , useColorScheme } from \"react-native\";\nexport {};\n"
        );
    }
}
