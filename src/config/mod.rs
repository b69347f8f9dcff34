//! Importer configuration from `badge-import.toml`.
//!
//! The file is optional; every field has a default matching the usual
//! project layout:
//!
//! ```text
//! <root>/
//! ├── badge-import.toml            (optional)
//! ├── BadgeImages/                 [paths] source
//! │   ├── Countries/               [country] source
//! │   └── Provinces/               [province] source
//! └── Footprint/Assets.xcassets/   [paths] assets
//!     ├── CountryBadges/           [country] target
//!     └── ProvinceBadges/          [province] target
//! ```
//!
//! # Sections
//!
//! | Section      | Purpose                                        |
//! |--------------|------------------------------------------------|
//! | `[paths]`    | Source root and asset catalog, relative to root |
//! | `[country]`  | Overrides for country badges                    |
//! | `[province]` | Overrides for province badges                   |

mod error;

pub use error::ConfigError;

use crate::cli::Cli;
use crate::core::{Category, CategoryProfile};
use crate::utils::path::{find_upward, normalize_path, resolve_config_path};
use crate::{debug, log};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing badge-import.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportConfig {
    /// Config file that was loaded, if any (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root directory (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Source and destination roots
    #[serde(default)]
    pub paths: PathsConfig,

    /// Country badge overrides
    #[serde(default)]
    pub country: CategoryOverride,

    /// Province badge overrides
    #[serde(default)]
    pub province: CategoryOverride,
}

/// `[paths]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding one subdirectory of images per category.
    pub source: PathBuf,
    /// The `.xcassets` catalog receiving the imagesets.
    pub assets: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("BadgeImages"),
            assets: PathBuf::from("Footprint/Assets.xcassets"),
        }
    }
}

/// `[country]` / `[province]` sections. Unset fields keep the built-in value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CategoryOverride {
    pub source: Option<String>,
    pub target: Option<String>,
    pub prefix: Option<String>,
}

/// Fully resolved locations for importing one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPaths {
    pub category: Category,
    /// Source root (e.g. `<root>/BadgeImages`)
    pub source_root: PathBuf,
    /// Directory scanned for images
    pub source_dir: PathBuf,
    /// Directory receiving the imagesets
    pub target_dir: PathBuf,
    pub prefix: String,
}

impl ImportConfig {
    /// Load configuration for the given CLI arguments.
    ///
    /// Searches upward from the root (or cwd) for the config file. The project
    /// root is `--root` if given, else the config file's directory, else cwd.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let start = cli.root.as_ref().map_or_else(|| cwd.clone(), |root| cwd.join(root));

        let config_path = find_upward(&start, &cli.config);
        let mut config = match &config_path {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };

        let root = match (&cli.root, &config_path) {
            (Some(_), _) => start,
            (None, Some(path)) => path.parent().map(Path::to_path_buf).unwrap_or(cwd),
            (None, None) => cwd,
        };
        config.root = normalize_path(&root);
        config.config_path = config_path;

        match &config.config_path {
            Some(path) => debug!("config"; "using {}", path.display()),
            None => debug!("config"; "no {} found, using defaults", cli.config.display()),
        }
        debug!("config"; "project root: {}", config.root.display());

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored);
        }
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
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
    fn print_unknown_fields_warning(fields: &[String]) {
        log!("warning"; "unknown fields in config, ignoring:");
        for field in fields {
            crate::logger::plain(&format!("- {field}"));
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Check directory names and prefixes of both categories.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for category in Category::ALL {
            let profile = self.profile(category);
            let section = category.name();

            for (field, value) in [("source", &profile.source), ("target", &profile.target)] {
                if value.trim().is_empty() {
                    return Err(ConfigError::Validation(format!(
                        "[{section}] {field} must not be empty"
                    )));
                }
            }

            if profile.prefix.contains(['/', '\\']) {
                return Err(ConfigError::Validation(format!(
                    "[{section}] prefix `{}` must not contain path separators",
                    profile.prefix
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // resolution
    // ========================================================================

    fn overrides(&self, category: Category) -> &CategoryOverride {
        match category {
            Category::Country => &self.country,
            Category::Province => &self.province,
        }
    }

    /// Built-in profile with this config's overrides applied.
    pub fn profile(&self, category: Category) -> CategoryProfile {
        let mut profile = category.default_profile();
        let overrides = self.overrides(category);
        if let Some(source) = &overrides.source {
            profile.source.clone_from(source);
        }
        if let Some(target) = &overrides.target {
            profile.target.clone_from(target);
        }
        if let Some(prefix) = &overrides.prefix {
            profile.prefix.clone_from(prefix);
        }
        profile
    }

    /// Source root resolved against the project root.
    pub fn source_root(&self) -> PathBuf {
        resolve_config_path(&self.paths.source, &self.root)
    }

    /// Asset catalog resolved against the project root.
    pub fn assets_dir(&self) -> PathBuf {
        resolve_config_path(&self.paths.assets, &self.root)
    }

    /// All paths needed to import one category.
    pub fn category_paths(&self, category: Category) -> CategoryPaths {
        let profile = self.profile(category);
        let source_root = self.source_root();
        CategoryPaths {
            category,
            source_dir: source_root.join(&profile.source),
            source_root,
            target_dir: self.assets_dir().join(&profile.target),
            prefix: profile.prefix,
        }
    }
}

/// Parse a test config, asserting it has no unknown fields.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> ImportConfig {
    let (parsed, ignored) = ImportConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}
