//! Registry-to-theme token substitution with exclusion zones.
//!
//! Every line is classified by the first matching rule:
//!
//! | # | Condition                                     | Action                         |
//! |---|-----------------------------------------------|--------------------------------|
//! | 1 | contains `import ` and the registry token     | keep                           |
//! | 2 | contains the theme binding (`const theme =`)  | keep                           |
//! | 3 | contains the global block marker              | keep, enter block              |
//! | 4 | inside block and contains the terminator `};` | keep, leave block              |
//! | 5 | inside block                                  | keep                           |
//! | 6 | otherwise                                     | rewrite `Colors.` to `theme.`  |
//!
//! Rule 3 only fires when the global block is protected (refined variant).
//! Rule 6 leaves `Colors.light` and `Colors.dark` alone when the reserved
//! word ends at a word boundary, so `Colors.lightBackground` is rewritten.

use crate::core::config::SubstitutionConfig;

/// Scan state for the excluded global configuration block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    /// Ordinary code
    Outside,
    /// Between the block marker and its terminator
    InsideGlobalConfig,
}

/// Classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Import of the registry itself
    RegistryImport,
    /// Line defining the theme binding
    ThemeBinding,
    /// Opening line of the global block
    BlockStart,
    /// Line closing the global block
    BlockEnd,
    /// Any line inside the global block
    InsideBlock,
    /// Line eligible for substitution
    Substitutable,
}

/// Token substitution stage
#[derive(Debug, Clone)]
pub struct SubstitutionStage {
    registry_token: String,
    registry_prefix: String,
    theme_prefix: String,
    reserved_words: Vec<String>,
    theme_binding: String,
    global_block_marker: String,
    block_terminator: String,
    protect_global_block: bool,
}

impl SubstitutionStage {
    /// Create the stage
    pub fn new(config: &SubstitutionConfig, protect_global_block: bool) -> Self {
        Self {
            registry_token: config.registry_token.clone(),
            registry_prefix: config.registry_prefix(),
            theme_prefix: config.theme_prefix(),
            reserved_words: config.reserved_words.clone(),
            theme_binding: config.theme_binding.clone(),
            global_block_marker: config.global_block_marker.clone(),
            block_terminator: config.block_terminator.clone(),
            protect_global_block,
        }
    }

    /// Classify `line` given the current state; returns the class and next state.
    pub fn classify(&self, line: &str, state: BlockState) -> (LineClass, BlockState) {
        if line.contains("import ") && line.contains(self.registry_token.as_str()) {
            return (LineClass::RegistryImport, state);
        }
        if line.contains(self.theme_binding.as_str()) {
            return (LineClass::ThemeBinding, state);
        }
        if self.protect_global_block && line.contains(self.global_block_marker.as_str()) {
            return (LineClass::BlockStart, BlockState::InsideGlobalConfig);
        }
        match state {
            BlockState::InsideGlobalConfig if line.contains(self.block_terminator.as_str()) => {
                (LineClass::BlockEnd, BlockState::Outside)
            }
            BlockState::InsideGlobalConfig => (LineClass::InsideBlock, state),
            BlockState::Outside => (LineClass::Substitutable, state),
        }
    }

    /// Rewrite registry accesses on one line; returns the line and the number
    /// of accesses rewritten.
    pub fn substitute_line(&self, line: &str) -> (String, usize) {
        let mut output = String::with_capacity(line.len());
        let mut count = 0;
        let mut last = 0;

        for (start, _) in line.match_indices(self.registry_prefix.as_str()) {
            let after = start + self.registry_prefix.len();
            if self.is_scheme_index(&line[after..]) {
                continue;
            }
            output.push_str(&line[last..start]);
            output.push_str(&self.theme_prefix);
            last = after;
            count += 1;
        }

        output.push_str(&line[last..]);
        (output, count)
    }

    /// True if `rest` (the text after the registry prefix) starts with a
    /// reserved word bounded on both sides.
    fn is_scheme_index(&self, rest: &str) -> bool {
        let before = self.registry_prefix.chars().last();
        self.reserved_words.iter().any(|word| {
            let Some(tail) = rest.strip_prefix(word.as_str()) else {
                return false;
            };
            is_boundary(before, word.chars().next())
                && is_boundary(word.chars().last(), tail.chars().next())
        })
    }

    /// Apply the stage to a whole file; returns the content and the number
    /// of accesses rewritten.
    pub fn apply(&self, content: &str) -> (String, usize) {
        let mut state = BlockState::Outside;
        let mut total = 0;
        let mut lines = Vec::new();

        for line in content.split('\n') {
            let (class, next) = self.classify(line, state);
            state = next;
            if class == LineClass::Substitutable {
                let (rewritten, count) = self.substitute_line(line);
                total += count;
                lines.push(rewritten);
            } else {
                lines.push(line.to_string());
            }
        }

        (lines.join("\n"), total)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Word boundary between two adjacent characters (`None` is a text edge).
fn is_boundary(before: Option<char>, after: Option<char>) -> bool {
    before.is_some_and(is_word_char) != after.is_some_and(is_word_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(protect: bool) -> SubstitutionStage {
        SubstitutionStage::new(&SubstitutionConfig::default(), protect)
    }

    #[test]
    fn reserved_words_are_whole_words_only() {
        let stage = stage(true);
        let cases = [
            ("color: Colors.text,", "color: theme.text,"),
            ("const base = Colors.light;", "const base = Colors.light;"),
            ("bg: Colors.dark.background,", "bg: Colors.dark.background,"),
            ("bg: Colors.lightBackground,", "bg: theme.lightBackground,"),
            ("bg: Colors.darker,", "bg: theme.darker,"),
            ("bg: Colors.light_mode,", "bg: theme.light_mode,"),
            ("a: Colors.light", "a: Colors.light"),
            ("x(Colors.primary, Colors.dark)", "x(theme.primary, Colors.dark)"),
            ("MyColors.text", "Mytheme.text"),
        ];

        for (input, expected) in cases {
            assert_eq!(stage.substitute_line(input).0, expected, "input: {input}");
        }
    }

    #[test]
    fn substitution_counts_rewrites() {
        let (line, count) = stage(true).substitute_line("[Colors.a, Colors.light, Colors.b]");
        assert_eq!(line, "[theme.a, Colors.light, theme.b]");
        assert_eq!(count, 2);
    }

    #[test]
    fn transition_table() {
        let stage = stage(true);
        use BlockState::*;
        use LineClass::*;

        let cases = [
            ("import { Colors } from \"@/constants/Colors\";", Outside, RegistryImport, Outside),
            (
                "import { Colors } from \"@/constants/Colors\";",
                InsideGlobalConfig,
                RegistryImport,
                InsideGlobalConfig,
            ),
            ("  const theme = Colors[colorScheme];", Outside, ThemeBinding, Outside),
            ("const STATUS_CONFIG = {", Outside, BlockStart, InsideGlobalConfig),
            ("const STATUS_CONFIG = {", InsideGlobalConfig, BlockStart, InsideGlobalConfig),
            ("};", InsideGlobalConfig, BlockEnd, Outside),
            (
                "  done: { color: Colors.green },",
                InsideGlobalConfig,
                InsideBlock,
                InsideGlobalConfig,
            ),
            ("};", Outside, Substitutable, Outside),
            ("color: Colors.text,", Outside, Substitutable, Outside),
        ];

        for (line, state, class, next) in cases {
            assert_eq!(stage.classify(line, state), (class, next), "line: {line}");
        }
    }

    #[test]
    fn global_block_is_left_alone_when_protected() {
        let input = "const STATUS_CONFIG = {\n  done: { color: Colors.green },\n  todo: {\n    color: Colors.gray,\n  },\n};\nconst x = Colors.red;";

        let (output, count) = stage(true).apply(input);
        assert_eq!(count, 1);
        assert_eq!(
            output,
            "const STATUS_CONFIG = {\n  done: { color: Colors.green },\n  todo: {\n    color: Colors.gray,\n  },\n};\nconst x = theme.red;"
        );

        let (output, count) = stage(false).apply(input);
        assert_eq!(count, 3);
        assert!(!output.contains("Colors.green"));
    }

    #[test]
    fn nested_closing_brace_ends_block_early() {
        let input = "const STATUS_CONFIG = {\n  a: { c: Colors.x };\n  b: Colors.y,\n};";
        let (output, _) = stage(true).apply(input);
        assert_eq!(
            output,
            "const STATUS_CONFIG = {\n  a: { c: Colors.x };\n  b: theme.y,\n};"
        );
    }

    #[test]
    fn protected_lines_keep_registry_references() {
        let input = "import { Colors } from \"@/constants/Colors\";\n  const theme = Colors[colorScheme];\n  const c = Colors.text;\n";
        let (output, count) = stage(true).apply(input);
        assert_eq!(count, 1);
        assert_eq!(
            output,
            "import { Colors } from \"@/constants/Colors\";\n  const theme = Colors[colorScheme];\n  const c = theme.text;\n"
        );
    }

    #[test]
    fn import_keyword_in_a_comment_protects_the_line() {
        let input = "const c = Colors.text; // import helper later\nconst d = Colors.text;";
        let (output, count) = stage(true).apply(input);
        assert_eq!(count, 1);
        assert_eq!(
            output,
            "const c = Colors.text; // import helper later\nconst d = theme.text;"
        );
    }
}
