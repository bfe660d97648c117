//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use arezou_sdk::arezou_core::RenderConfig;
use serde::{Deserialize, Serialize};

/// File names searched for, in order, in each directory.
pub const CONFIG_NAMES: &[&str] = &["arezou.toml", ".arezou.toml", "arezou.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Page render settings.
    #[serde(default)]
    pub page: RenderConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content, is_json(path))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse config text as TOML, or JSON when `json` is set.
    pub fn parse(content: &str, json: bool) -> Result<Self> {
        if json {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(toml::from_str(content)?)
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Generate a default arezou.toml config file.
pub fn generate_default_config() -> String {
    let page = RenderConfig::default();
    format!(
        r#"# Are-zōu product page configuration

[page]
title = "{title}"
canonical_path = "{canonical}"
# trace, debug, info, warn or error
log_level = "{level}"
# json or human
log_format = "{format}"
"#,
        title = page.title,
        canonical = page.canonical_path,
        level = page.log_level,
        format = page.log_format,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config = CliConfig::parse(&generate_default_config(), false).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = CliConfig::parse("[page]\nlog_level = \"debug\"\n", false).unwrap();
        assert_eq!(config.page.log_level, "debug");
        assert_eq!(config.page.title, RenderConfig::default().title);
    }

    #[test]
    fn test_json_config() {
        let config =
            CliConfig::parse(r#"{"page": {"log_format": "human"}}"#, true).unwrap();
        assert_eq!(config.page.log_format, "human");
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(CliConfig::parse("", false).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_bad_toml_is_error() {
        assert!(CliConfig::parse("[page\n", false).is_err());
    }
}
