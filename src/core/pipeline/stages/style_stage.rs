//! Style-sheet declaration rewrite.
//!
//! A verbatim string replacement: `const styles = StyleSheet.create({`
//! becomes a factory taking the theme. Declarations spelled any other way
//! are left alone even though the injected boilerplate will call the factory.

use crate::core::config::StyleConfig;

/// Style declaration rewrite stage
#[derive(Debug, Clone)]
pub struct StyleStage {
    opener: String,
    replacement: String,
}

impl StyleStage {
    /// Create the stage from configuration
    pub fn new(config: &StyleConfig) -> Self {
        Self {
            opener: config.opener.clone(),
            replacement: config.replacement.clone(),
        }
    }

    /// Replace every occurrence of the opener; returns the number replaced.
    pub fn apply(&self, content: String) -> (String, usize) {
        let count = content.matches(self.opener.as_str()).count();
        if count == 0 {
            return (content, 0);
        }
        (content.replace(&self.opener, &self.replacement), count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage() -> StyleStage {
        StyleStage::new(&StyleConfig::default())
    }

    #[test]
    fn rewrites_the_exact_opener() {
        let input = "const styles = StyleSheet.create({\n  root: { flex: 1 },\n});\n".to_string();
        let (output, count) = stage().apply(input);
        assert_eq!(count, 1);
        assert_eq!(
            output,
            "const createStyles = (theme: any) => StyleSheet.create({\n  root: { flex: 1 },\n});\n"
        );
    }

    #[test]
    fn other_spellings_are_untouched() {
        for input in [
            "const styles =  StyleSheet.create({",
            "const pageStyles = StyleSheet.create({",
            "const styles = StyleSheet.create(\n{",
        ] {
            let (output, count) = stage().apply(input.to_string());
            assert_eq!(count, 0);
            assert_eq!(output, input);
        }
    }
}
