//! Site configuration management for `seo.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── social     # [social]
//! │   ├── image      # [image]
//! │   ├── not_found  # [not_found]
//! │   ├── head       # [head]
//! │   └── content    # [content]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # Config discovery, URL checks
//! └── mod.rs         # SeoConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section       | Purpose                                            |
//! |---------------|----------------------------------------------------|
//! | `[site]`      | Base URL, site name, locale, title template        |
//! | `[social]`    | Twitter site handle and card type                  |
//! | `[image]`     | Default Open Graph image and its dimensions        |
//! | `[not_found]` | Title/description for slugs without content        |
//! | `[head]`      | Site-wide head extras (robots, icons, alternates)  |
//! | `[content]`   | Content directory used by the CLI lookup           |
//!
//! Every field has a default, so an empty (or missing) `seo.toml` is a valid
//! configuration.

pub mod section;
pub mod types;
mod util;

pub use section::{
    CardType, ContentConfig, HeadConfig, IconLink, ImageConfig, NotFoundConfig, RobotsConfig,
    SiteInfoConfig, SocialConfig, ThemeColor, VerificationConfig, at_handle,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::{find_config_file, find_config_file_from};

use crate::log;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

/// Default config file name.
pub const CONFIG_FILE: &str = "seo.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `seo.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    pub site: SiteInfoConfig,
    pub social: SocialConfig,
    pub image: ImageConfig,
    pub not_found: NotFoundConfig,
    pub head: HeadConfig,
    pub content: ContentConfig,
}

impl SeoConfig {
    /// Load and validate configuration.
    ///
    /// Searches upward from cwd for `config_name`. A missing file is not an
    /// error: defaults are used with cwd as the project root.
    pub fn load(config_name: &Path) -> Result<Self> {
        let Some(config_path) = find_config_file(config_name) else {
            log!("config"; "{} not found, using defaults", config_name.display());
            let mut config = Self::default();
            config.root =
                std::env::current_dir().context("Failed to get current working directory")?;
            return Ok(config);
        };

        let mut config = Self::from_path(&config_path)?;
        config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.config_path = config_path;
        crate::debug!("config"; "loaded {}", config.config_path.display());

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
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

    /// Validate every section, printing warnings and failing on errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let diag = self.diagnose();
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Collect diagnostics for every section without printing.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.social.validate(&mut diag);
        self.image.validate(&mut diag);
        self.head.validate(&mut diag);
        diag
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Content directory, resolved against the project root.
    pub fn content_dir(&self) -> PathBuf {
        self.root.join(&self.content.dir)
    }
}

impl FromStr for SeoConfig {
    type Err = ConfigError;

    /// Parse configuration from a TOML string (unknown fields are ignored).
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(content)?)
    }
}

// ============================================================================
// tests
// ============================================================================
