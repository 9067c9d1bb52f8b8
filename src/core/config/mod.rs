//! Configuration types and management for retheme.
//!
//! The defaults target an Expo Router project: sources under `app/`, a
//! `Colors` registry and a `STATUS_CONFIG` block. A YAML file can override
//! any subset of fields.

pub mod validation;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, RethemeError};

pub use validation::{validate_non_empty, validate_non_empty_list};

/// File names probed in the working directory when no `--config` is given.
pub const IMPLICIT_CONFIG_FILES: [&str; 2] = [".retheme.yml", ".retheme.yaml"];

/// Main configuration for a rewrite run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RethemeConfig {
    /// Where to look for source files
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Import augmentation settings
    #[serde(default)]
    pub imports: ImportConfig,

    /// Style-sheet declaration rewrite
    #[serde(default)]
    pub styles: StyleConfig,

    /// Lines injected after the component declaration
    #[serde(default)]
    pub boilerplate: BoilerplateConfig,

    /// Registry token substitution
    #[serde(default)]
    pub substitution: SubstitutionConfig,
}

/// Configuration I/O and validation for [`RethemeConfig`].
impl RethemeConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RethemeError::io_at("read configuration file", path, e))?;

        serde_yaml::from_str(&content).map_err(|e| {
            RethemeError::config(format!(
                "Failed to parse configuration {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)
            .map_err(|e| RethemeError::io_at("write configuration file", path, e))
    }

    /// Look for one of the implicit configuration files under `dir`.
    pub fn find_implicit(dir: &Path) -> Option<PathBuf> {
        IMPLICIT_CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    }

    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.discovery.validate()?;
        self.imports.validate()?;
        self.styles.validate()?;
        self.boilerplate.validate()?;
        self.substitution.validate()?;
        Ok(())
    }
}

/// Source discovery settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Root directory walked recursively
    #[serde(default = "DiscoveryConfig::default_root")]
    pub root: PathBuf,

    /// File name suffixes that select a file
    #[serde(default = "DiscoveryConfig::default_suffixes")]
    pub suffixes: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            root: Self::default_root(),
            suffixes: Self::default_suffixes(),
        }
    }
}

impl DiscoveryConfig {
    fn default_root() -> PathBuf {
        PathBuf::from("app")
    }

    fn default_suffixes() -> Vec<String> {
        vec![".tsx".to_string(), ".ts".to_string()]
    }

    /// Validate discovery settings
    pub fn validate(&self) -> Result<()> {
        if self.root.as_os_str().is_empty() {
            return Err(RethemeError::validation_field(
                "discovery.root must not be empty",
                "discovery.root",
            ));
        }
        validate_non_empty_list(&self.suffixes, "discovery.suffixes")
    }
}

/// Import augmentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Module the hook is imported from
    #[serde(default = "ImportConfig::default_module")]
    pub module: String,

    /// Symbol that must end up imported
    #[serde(default = "ImportConfig::default_symbol")]
    pub symbol: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            module: Self::default_module(),
            symbol: Self::default_symbol(),
        }
    }
}

impl ImportConfig {
    fn default_module() -> String {
        "react-native".to_string()
    }

    fn default_symbol() -> String {
        "useColorScheme".to_string()
    }

    /// Validate import settings
    pub fn validate(&self) -> Result<()> {
        validate_non_empty(&self.module, "imports.module")?;
        validate_non_empty(&self.symbol, "imports.symbol")
    }
}

/// Style-sheet declaration rewrite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Static declaration opener, matched verbatim
    #[serde(default = "StyleConfig::default_opener")]
    pub opener: String,

    /// Parameterized replacement
    #[serde(default = "StyleConfig::default_replacement")]
    pub replacement: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            opener: Self::default_opener(),
            replacement: Self::default_replacement(),
        }
    }
}

impl StyleConfig {
    fn default_opener() -> String {
        "const styles = StyleSheet.create({".to_string()
    }

    fn default_replacement() -> String {
        "const createStyles = (theme: any) => StyleSheet.create({".to_string()
    }

    /// Validate style settings
    pub fn validate(&self) -> Result<()> {
        validate_non_empty(&self.opener, "styles.opener")?;
        validate_non_empty(&self.replacement, "styles.replacement")
    }
}

/// Lines injected after the first component declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoilerplateConfig {
    /// Injected lines, in order, indentation included
    #[serde(default = "BoilerplateConfig::default_lines")]
    pub lines: Vec<String>,

    /// Marker of a superseded local style declaration (refined variant drops these)
    #[serde(default = "BoilerplateConfig::default_superseded_marker")]
    pub superseded_marker: String,
}

impl Default for BoilerplateConfig {
    fn default() -> Self {
        Self {
            lines: Self::default_lines(),
            superseded_marker: Self::default_superseded_marker(),
        }
    }
}

impl BoilerplateConfig {
    fn default_lines() -> Vec<String> {
        vec![
            r#"  const colorScheme = useColorScheme() ?? "light";"#.to_string(),
            "  const theme = Colors[colorScheme];".to_string(),
            "  const styles = createStyles(theme);".to_string(),
        ]
    }

    fn default_superseded_marker() -> String {
        "const styles = ".to_string()
    }

    /// Validate boilerplate settings
    pub fn validate(&self) -> Result<()> {
        validate_non_empty_list(&self.lines, "boilerplate.lines")?;
        validate_non_empty(&self.superseded_marker, "boilerplate.superseded_marker")
    }
}

/// Registry token substitution settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstitutionConfig {
    /// Name of the colour registry object
    #[serde(default = "SubstitutionConfig::default_registry_token")]
    pub registry_token: String,

    /// Name of the per-component theme binding
    #[serde(default = "SubstitutionConfig::default_theme_token")]
    pub theme_token: String,

    /// Words that, right after the registry prefix, mark a scheme index
    #[serde(default = "SubstitutionConfig::default_reserved_words")]
    pub reserved_words: Vec<String>,

    /// Text of the line that defines the theme binding
    #[serde(default = "SubstitutionConfig::default_theme_binding")]
    pub theme_binding: String,

    /// Name of the module-level configuration block left untouched
    #[serde(default = "SubstitutionConfig::default_global_block_marker")]
    pub global_block_marker: String,

    /// Token that closes the excluded block
    #[serde(default = "SubstitutionConfig::default_block_terminator")]
    pub block_terminator: String,
}

impl Default for SubstitutionConfig {
    fn default() -> Self {
        Self {
            registry_token: Self::default_registry_token(),
            theme_token: Self::default_theme_token(),
            reserved_words: Self::default_reserved_words(),
            theme_binding: Self::default_theme_binding(),
            global_block_marker: Self::default_global_block_marker(),
            block_terminator: Self::default_block_terminator(),
        }
    }
}

impl SubstitutionConfig {
    fn default_registry_token() -> String {
        "Colors".to_string()
    }

    fn default_theme_token() -> String {
        "theme".to_string()
    }

    fn default_reserved_words() -> Vec<String> {
        vec!["light".to_string(), "dark".to_string()]
    }

    fn default_theme_binding() -> String {
        "const theme =".to_string()
    }

    fn default_global_block_marker() -> String {
        "STATUS_CONFIG".to_string()
    }

    fn default_block_terminator() -> String {
        "};".to_string()
    }

    /// Registry access prefix, e.g. `Colors.`
    pub fn registry_prefix(&self) -> String {
        format!("{}.", self.registry_token)
    }

    /// Theme access prefix, e.g. `theme.`
    pub fn theme_prefix(&self) -> String {
        format!("{}.", self.theme_token)
    }

    /// Validate substitution settings
    pub fn validate(&self) -> Result<()> {
        validate_non_empty(&self.registry_token, "substitution.registry_token")?;
        validate_non_empty(&self.theme_token, "substitution.theme_token")?;
        validate_non_empty(&self.theme_binding, "substitution.theme_binding")?;
        validate_non_empty(&self.global_block_marker, "substitution.global_block_marker")?;
        validate_non_empty(&self.block_terminator, "substitution.block_terminator")?;
        for word in &self.reserved_words {
            validate_non_empty(word, "substitution.reserved_words")?;
        }
        Ok(())
    }
}
