//! Configuration for the Folio CLI.
//!
//! Provides the [`FolioConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `FOLIO_CONFIG` environment variable
//! 3. XDG default: `~/.config/folio/config.toml`
//! 4. Built-in defaults
//!
//! `FOLIO_*` environment variables (`FOLIO_PROJECT_NAME`,
//! `FOLIO_CONTENT_PATH`, `FOLIO_PALETTE_BASE_COLOR`, ...) override file values.

use confyg::{Confygery, env};
use folio_core::traits::{ConfigProvider, DEFAULT_CONTENT_EXTENSION};
use folio_core::util::paths::{expand_tilde, resolve_against};
use folio_core::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// Items per page when neither the flag nor the config sets one.
pub const DEFAULT_PER_PAGE: usize = 5;

/// Base color used when the config does not set one.
pub const DEFAULT_BASE_COLOR: &str = "#3b82f6";

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the Folio CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Project name, shown in CLI output.
    pub project_name: String,

    /// Site checkout root. Defaults to the working directory.
    pub base_path: Option<String>,

    /// Project content settings.
    pub content: ContentConfig,

    /// Palette settings.
    pub palette: PaletteConfig,

    /// Static export settings.
    pub export: ExportConfig,
}

/// Project content settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Content directory, relative to `base_path` unless absolute.
    pub path: Option<String>,

    /// Extension of project files, without dot.
    pub extension: String,

    /// Default page size for `projects list`.
    #[serde(deserialize_with = "number_or_string")]
    pub per_page: usize,
}

/// Palette settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Brand color the shade ramps are derived from.
    pub base_color: String,
}

/// Static export settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Listing output file, relative to `base_path` unless absolute.
    pub output: Option<String>,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            project_name: "folio".to_string(),
            base_path: None,
            content: ContentConfig::default(),
            palette: PaletteConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path: None,
            extension: DEFAULT_CONTENT_EXTENSION.to_string(),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            base_color: DEFAULT_BASE_COLOR.to_string(),
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl FolioConfig {
    /// Load configuration from file, environment, and defaults.
    ///
    /// A config path that does not exist is skipped, so a fresh checkout runs
    /// on defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            } else {
                log::debug!("No config file at {}, using defaults", path.display());
            }
        }

        let mut env_opts = env::Options::with_top_level("FOLIO");
        env_opts.add_section("content");
        env_opts.add_section("palette");
        env_opts.add_section("export");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(expand_tilde(path));
        }

        if let Ok(path) = std::env::var("FOLIO_CONFIG") {
            return Some(expand_tilde(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("folio").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Where `export` writes the listing.
    ///
    /// `explicit` (the `--output` flag) wins over `[export] output`; both are
    /// resolved against `base_path`. The default is `out/api/projects.json`.
    pub fn export_path(&self, explicit: Option<&str>) -> Result<PathBuf> {
        let base = self.base_path()?;
        Ok(match explicit.or(self.export.output.as_deref()) {
            Some(path) => resolve_against(&base, path),
            None => base.join("out").join("api").join("projects.json"),
        })
    }
}

// ============================================================================
// ConfigProvider implementation
// ============================================================================

impl ConfigProvider for FolioConfig {
    fn project_name(&self) -> &str {
        &self.project_name
    }

    fn base_path(&self) -> Result<PathBuf> {
        match &self.base_path {
            Some(p) => Ok(expand_tilde(p)),
            None => std::env::current_dir()
                .map_err(|e| Error::config(format!("Could not determine base path: {e}"))),
        }
    }

    fn content_root(&self) -> Result<PathBuf> {
        let base = self.base_path()?;
        Ok(match &self.content.path {
            Some(path) => resolve_against(&base, path),
            None => base.join("content").join("projects"),
        })
    }

    fn content_extension(&self) -> &str {
        &self.content.extension
    }
}

/// Environment overrides arrive as strings.
fn number_or_string<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(usize),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

// ============================================================================
// Tests
// ============================================================================
