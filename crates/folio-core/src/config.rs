//! Site configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for folio.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Build settings.
    #[serde(default)]
    pub build: BuildConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Base URL for the site (e.g., "https://example.com").
    pub base_url: String,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,

    /// Site author name.
    #[serde(default)]
    pub author: Option<String>,

    /// Language code written to the `<html lang>` attribute.
    #[serde(default = "default_language")]
    pub language: String,
}

/// Build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Output directory for generated site.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Whether code samples are syntax highlighted.
    #[serde(default = "default_true")]
    pub highlight: bool,

    /// Syntax highlighting theme name.
    #[serde(default = "default_syntax_theme")]
    pub syntax_theme: String,

    /// Whether to write `sitemap.xml`.
    #[serde(default = "default_true")]
    pub sitemap: bool,
}

fn default_site_title() -> String {
    "folio".to_string()
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_output_dir() -> String {
    "public".to_string()
}

fn default_syntax_theme() -> String {
    "base16-ocean.dark".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_site_title(),
            base_url: default_base_url(),
            description: None,
            author: None,
            language: default_language(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            highlight: true,
            syntax_theme: default_syntax_theme(),
            sitemap: true,
        }
    }
}

/// Prefix of environment overrides, e.g. `FOLIO__SITE__TITLE`.
pub const ENV_PREFIX: &str = "FOLIO";

impl Config {
    /// Load configuration from a TOML file, with `FOLIO__SECTION__KEY`
    /// environment variables layered over it. The file must exist.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        Self::layered(Some(path), ENV_PREFIX)
    }

    /// Like [`Config::load_with_env`], but falls back to built-in defaults
    /// when the file does not exist. Environment overrides apply either way,
    /// and a file that exists but fails to parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_with_env(path)
        } else {
            tracing::info!(path = %path.display(), "no configuration file, using defaults");
            Self::layered(None, ENV_PREFIX)
        }
    }

    fn layered(path: Option<&Path>, env_prefix: &str) -> Result<Self> {
        let defaults = SiteConfig::default();
        let mut builder = config::Config::builder()
            .set_default("site.title", defaults.title)?
            .set_default("site.base_url", defaults.base_url)?;

        if let Some(path) = path {
            let content = std::fs::read_to_string(path)?;
            content.parse::<toml::Table>().map_err(|e| {
                CoreError::config_with_source(
                    format!("Failed to parse config file: {}", path.display()),
                    e,
                )
            })?;
            builder = builder.add_source(config::File::from_str(&content, config::FileFormat::Toml));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix(env_prefix).separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        tracing::debug!(env_prefix, "configuration loaded");
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        Ok(())
    }

    /// Get the full URL for a path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.site.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn create_test_config() -> String {
        r#"
[site]
title = "Essays"
base_url = "https://example.com"
description = "Notes on functional programming"
author = "Someone"
language = "en-US"

[build]
output_dir = "dist"
highlight = false
syntax_theme = "InspiredGitHub"
sitemap = false
"#
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("folio.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = Config::load_with_env(&config_path).expect("load config");

        assert_eq!(config.site.title, "Essays");
        assert_eq!(config.site.base_url, "https://example.com");
        assert_eq!(
            config.site.description.as_deref(),
            Some("Notes on functional programming")
        );
        assert_eq!(config.site.author.as_deref(), Some("Someone"));
        assert_eq!(config.site.language, "en-US");
        assert_eq!(config.build.output_dir, "dist");
        assert!(!config.build.highlight);
        assert_eq!(config.build.syntax_theme, "InspiredGitHub");
        assert!(!config.build.sitemap);
    }

    #[test]
    fn test_config_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("folio.toml");
        let minimal_config = r#"
[site]
title = "Minimal Site"
base_url = "https://example.com"
"#;
        std::fs::write(&config_path, minimal_config).expect("write");

        let config = Config::load_with_env(&config_path).expect("load config");

        assert_eq!(config.site.language, "en");
        assert_eq!(config.build.output_dir, "public");
        assert!(config.build.highlight);
        assert_eq!(config.build.syntax_theme, "base16-ocean.dark");
        assert!(config.build.sitemap);
    }

    #[test]
    fn test_url_for() {
        let config = Config {
            site: SiteConfig {
                base_url: "https://example.com/".to_string(),
                ..SiteConfig::default()
            },
            ..Config::default()
        };

        assert_eq!(
            config.url_for("/side-effects-complect/"),
            "https://example.com/side-effects-complect/"
        );
        assert_eq!(config.url_for("about"), "https://example.com/about");
    }

    #[test]
    fn test_config_validation_empty_title() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("folio.toml");
        let config_content = r#"
[site]
title = ""
base_url = "https://example.com"
"#;
        std::fs::write(&config_path, config_content).expect("write");

        let result = Config::load_with_env(&config_path);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("title cannot be empty")
        );
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load_with_env(Path::new("/nonexistent/folio.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default(Path::new("/nonexistent/folio.toml"))
            .expect("defaults");
        assert_eq!(config.site.title, "folio");
        assert_eq!(config.build.output_dir, "public");
    }

    #[test]
    fn test_load_or_default_invalid_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("folio.toml");
        std::fs::write(&config_path, "[site\ntitle = ").expect("write");

        assert!(Config::load_or_default(&config_path).is_err());
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("folio.toml");
        std::fs::write(&config_path, create_test_config()).expect("write");

        // A dedicated prefix keeps parallel tests from seeing these variables.
        // SAFETY: no other thread reads variables with this prefix.
        unsafe {
            std::env::set_var("FOLIOFILE__SITE__TITLE", "From Env");
            std::env::set_var("FOLIOFILE__BUILD__SITEMAP", "true");
        }

        let config = Config::layered(Some(&config_path), "FOLIOFILE").expect("load config");
        assert_eq!(config.site.title, "From Env");
        assert!(config.build.sitemap);
        assert_eq!(config.build.output_dir, "dist");
        assert_eq!(config.site.base_url, "https://example.com");
    }

    #[test]
    fn test_env_overrides_defaults_without_file() {
        // SAFETY: no other thread reads variables with this prefix.
        unsafe {
            std::env::set_var("FOLIONOFILE__BUILD__OUTPUT_DIR", "dist-env");
            std::env::set_var("FOLIONOFILE__BUILD__HIGHLIGHT", "false");
        }

        let config = Config::layered(None, "FOLIONOFILE").expect("load config");
        assert_eq!(config.site.title, "folio");
        assert_eq!(config.build.output_dir, "dist-env");
        assert!(!config.build.highlight);
        assert!(config.build.sitemap);
    }

    #[test]
    fn test_load_or_default_reads_existing_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("folio.toml");
        std::fs::write(&config_path, create_test_config()).expect("write");

        let config = Config::load_or_default(&config_path).expect("load config");
        assert_eq!(config.site.title, "Essays");
        assert_eq!(config.build.output_dir, "dist");
    }
}
