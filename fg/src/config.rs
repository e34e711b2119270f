//! Configuration for flowgen
//!
//! The template table lives here: which base names are looked up, which
//! extension they carry and which placeholder tokens they contain. Adding a
//! template is a config change, not a code change.

use log::debug;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{GenError, Result};

/// One known template and its substitution metadata
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TemplateDef {
    /// Base name without extension (e.g. `go_flow`)
    pub name: String,

    /// File extension without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Placeholder tokens, paired in order with the data, result and prepare names
    #[serde(default = "default_placeholders")]
    pub placeholders: Vec<String>,
}

impl TemplateDef {
    pub fn new(name: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extension: extension.into(),
            placeholders: default_placeholders(),
        }
    }

    /// File name as found in the source and output directories
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.extension)
    }
}

/// Namespace declaration rewritten by `--package`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamespaceConfig {
    /// Exact declaration text to look for
    #[serde(default = "default_declaration")]
    pub declaration: String,

    /// Prefix prepended to the override name
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self {
            declaration: default_declaration(),
            prefix: default_prefix(),
        }
    }
}

impl NamespaceConfig {
    /// Declaration line for an overriding package name
    pub fn render(&self, package: &str) -> String {
        format!("{}{}", self.prefix, package)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Templates looked up in the source directory, in generation order
    #[serde(default = "default_templates")]
    pub templates: Vec<TemplateDef>,

    #[serde(default)]
    pub namespace: NamespaceConfig,
}

fn default_extension() -> String {
    crate::DEFAULT_EXTENSION.to_string()
}

fn default_placeholders() -> Vec<String> {
    vec!["_Data".to_string(), "_Result".to_string(), "_PrepareInput".to_string()]
}

fn default_templates() -> Vec<TemplateDef> {
    vec![
        TemplateDef::new("go_flow", crate::DEFAULT_EXTENSION),
        TemplateDef::new("structure", crate::DEFAULT_EXTENSION),
    ]
}

fn default_declaration() -> String {
    crate::DEFAULT_DECLARATION.to_string()
}

fn default_prefix() -> String {
    crate::DEFAULT_DECLARATION_PREFIX.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates: default_templates(),
            namespace: NamespaceConfig::default(),
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::from_file(config_path);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("flowgen").join("flowgen.yml")),
            Some(PathBuf::from("flowgen.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.is_file() {
                return Self::from_file(path);
            }
        }

        debug!("Config::load: no config file found, using defaults");
        Ok(Config::default())
    }

    fn from_file(path: &Path) -> Result<Self> {
        debug!("Config::from_file: path={}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| GenError::io(path, e))?;
        let config: Config = serde_yaml::from_str(&content).map_err(|source| GenError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the template table for names that cannot be generated
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for def in &self.templates {
            if def.name.trim().is_empty() {
                return Err(GenError::Config("template name must not be empty".to_string()));
            }
            if def.extension.trim().is_empty() {
                return Err(GenError::Config(format!("template '{}' has no extension", def.name)));
            }
            if def.name.contains(['/', '\\']) || def.name == ".." {
                return Err(GenError::Config(format!(
                    "template name '{}' must be a plain file name",
                    def.name
                )));
            }
            if def.extension.contains(['/', '\\']) {
                return Err(GenError::Config(format!(
                    "template '{}' extension '{}' must not contain path separators",
                    def.name, def.extension
                )));
            }
            if def.placeholders.len() > 3 {
                return Err(GenError::Config(format!(
                    "template '{}' lists {} placeholders, at most 3 are supported",
                    def.name,
                    def.placeholders.len()
                )));
            }
            if !seen.insert(def.file_name()) {
                return Err(GenError::Config(format!("duplicate template '{}'", def.file_name())));
            }
        }
        if self.namespace.declaration.is_empty() {
            return Err(GenError::Config("namespace declaration must not be empty".to_string()));
        }
        Ok(())
    }
}
