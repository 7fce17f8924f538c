//! Configuration management for `lumen.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── head       # [site.head]
//! │   ├── schema     # [site.schema]
//! │   └── sitemap    # [sitemap]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! └── mod.rs         # LumenConfig (this file)
//! ```
//!
//! A missing config file is not an error: the built-in Light SaaS defaults
//! are used instead. The loaded config is immutable and passed by reference.

pub mod section;
pub mod types;

pub use section::{
    HeadDefaults, IconLink, SchemaDefaults, SiteDefaults, SitemapConfig, SocialConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const CONFIG_FILE: &str = "lumen.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing lumen.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LumenConfig {
    /// Absolute path to the config file, empty when running on defaults
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site-wide metadata defaults
    #[serde(default)]
    pub site: SiteDefaults,

    /// Sitemap output settings
    #[serde(default)]
    pub sitemap: SitemapConfig,
}

impl LumenConfig {
    /// Load configuration, searching upward from cwd for `config_name`.
    ///
    /// Falls back to built-in defaults when no file is found.
    pub fn load(config_name: &Path) -> Result<Self> {
        let mut config = match find_config_file(config_name) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                debug!("config"; "loaded {}", path.display());
                config.config_path = path;
                config
            }
            None => {
                debug!("config"; "{} not found, using built-in defaults", config_name.display());
                Self::default()
            }
        };

        config.validate()?;
        config.normalize();
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Run all section validators.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Canonicalize values that have more than one accepted spelling.
    fn normalize(&mut self) {
        let trimmed = self.site.base_url.trim_end_matches('/').len();
        self.site.base_url.truncate(trimmed);
    }

    /// Resolve `path` against the directory holding the config file.
    ///
    /// Absolute paths, and every path when running on built-in defaults,
    /// are returned unchanged.
    pub fn root_join(&self, path: &Path) -> PathBuf {
        match self.config_path.parent() {
            Some(root) if !path.is_absolute() => root.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Default config rendered as TOML, written by `lumen init`.
    pub fn template() -> Result<String, ConfigError> {
        let body = toml::to_string_pretty(&Self::default())?;
        Ok(format!("# lumen site metadata configuration\n\n{body}"))
    }
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }
        current = current.parent()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_str_empty_uses_defaults() {
        let config = LumenConfig::from_str("").unwrap();
        assert_eq!(config.site, SiteDefaults::default());
        assert_eq!(config.sitemap.path, PathBuf::from("sitemap.xml"));
    }

    #[test]
    fn test_from_str_partial_override() {
        let config = LumenConfig::from_str(
            r##"
[site]
brand_name = "Acme"
title_template = "%s · Acme"
base_url = "https://acme.test"

[site.verification]
bing = "msvalidate-token"

[site.head]
theme_color = "#000000"
"##,
        )
        .unwrap();

        assert_eq!(config.site.brand_name, "Acme");
        assert_eq!(config.site.page_title("Docs"), "Docs · Acme");
        assert_eq!(config.site.head.theme_color, "#000000");
        // untouched fields keep defaults
        assert_eq!(config.site.head.viewport, HeadDefaults::default().viewport);
        assert_eq!(config.site.verification.len(), 1);
        assert_eq!(config.site.verification["bing"], "msvalidate-token");
    }

    #[test]
    fn test_parse_with_ignored_reports_unknown_fields() {
        let (_, ignored) = LumenConfig::parse_with_ignored(
            r#"
[site]
brand = "typo"
"#,
        )
        .unwrap();
        assert_eq!(ignored, vec!["site.brand".to_string()]);
    }

    #[test]
    fn test_from_path_and_validate() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[site]\nbase_url = \"not a url\"").unwrap();

        let config = LumenConfig::from_path(file.path()).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Diagnostics(ref d) if d.len() == 1));
    }

    #[test]
    fn test_load_absolute_path_normalizes_base_url() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[site]\nbase_url = \"https://light-saas.com/\"").unwrap();

        let config = LumenConfig::load(file.path()).unwrap();
        assert_eq!(config.site.base_url, "https://light-saas.com");
        assert_eq!(config.config_path, file.path());
    }

    #[test]
    fn test_root_join() {
        let config = LumenConfig {
            config_path: PathBuf::from("/srv/site/lumen.toml"),
            ..LumenConfig::default()
        };
        assert_eq!(
            config.root_join(Path::new("public/sitemap.xml")),
            PathBuf::from("/srv/site/public/sitemap.xml")
        );
        assert_eq!(
            config.root_join(Path::new("/tmp/sitemap.xml")),
            PathBuf::from("/tmp/sitemap.xml")
        );
        assert_eq!(
            LumenConfig::default().root_join(Path::new("sitemap.xml")),
            PathBuf::from("sitemap.xml")
        );
    }

    #[test]
    fn test_template_round_trips() {
        let template = LumenConfig::template().unwrap();
        let parsed = LumenConfig::from_str(&template).unwrap();
        assert_eq!(parsed, LumenConfig::default());
    }
}
