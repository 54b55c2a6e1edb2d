use serde::{Deserialize, Serialize};
use std::path::Path;

use super::consts::{DEFAULT_DATE_FORMAT, DEFAULT_TEMPLATES_DIR};
use crate::error::{Result, ScenegenError};

/// scenegen.toml schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub project: ProjectConfig,
    pub author: AuthorConfig,
    #[serde(default)]
    pub templates: TemplatesConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Xcode project/module name, used in `@testable import` lines
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorConfig {
    pub developer: String,
    pub company: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplatesConfig {
    /// User template root, relative to the project root
    #[serde(default = "default_templates_dir")]
    pub dir: String,
    /// chrono format string for the header date
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            dir: default_templates_dir(),
            date_format: default_date_format(),
        }
    }
}

fn default_templates_dir() -> String {
    DEFAULT_TEMPLATES_DIR.to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Config {
    pub fn new(
        project: impl Into<String>,
        developer: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            project: ProjectConfig {
                name: project.into(),
            },
            author: AuthorConfig {
                developer: developer.into(),
                company: company.into(),
            },
            templates: TemplatesConfig::default(),
        }
    }

    /// Read scenegen.toml
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ScenegenError::ConfigParseError(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ScenegenError::ConfigInvalid(e.to_string()))
    }

    /// Write scenegen.toml
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ScenegenError::ConfigParseError(e.to_string()))?;

        std::fs::write(path.as_ref(), content)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[project]
name = "iTool"

[author]
developer = "Tuan Truong"
company = "Framgia"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.project.name, "iTool");
        assert_eq!(config.author.developer, "Tuan Truong");
        assert_eq!(config.templates.dir, "templates");
        assert_eq!(config.templates.date_format, "%-m/%-d/%y");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[project]
name = "iTool"

[author]
developer = "Tuan Truong"
company = "Framgia"

[templates]
dir = "scaffold"
date_format = "%Y-%m-%d"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.templates.dir, "scaffold");
        assert_eq!(config.templates.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_missing_author_is_invalid() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("scenegen.toml");
        std::fs::write(&path, "[project]\nname = \"iTool\"\n").unwrap();

        let result = Config::from_file(&path);
        assert!(matches!(result, Err(ScenegenError::ConfigInvalid(_))));
    }

    #[test]
    fn test_missing_file_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let result = Config::from_file(temp.path().join("missing.toml"));
        assert!(matches!(result, Err(ScenegenError::ConfigParseError(_))));
    }

    #[test]
    fn test_config_roundtrip_through_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("scenegen.toml");
        let config = Config::new("iTool", "Tuan Truong", "Framgia");

        config.to_file(&path).unwrap();
        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
