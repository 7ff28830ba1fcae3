//! Site configuration management for `blog.toml`.
//!
//! # Sections
//!
//! | Section      | Purpose                                        |
//! |--------------|------------------------------------------------|
//! | `[base]`     | Site metadata (title, url, language)           |
//! | `[build]`    | Content and output directories                 |
//! | `[listing]`  | Page size, sort direction, display formatting  |
//! | `[[nav]]`    | Site navigation entries                        |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "My Blog"
//! url = "https://example.com"
//!
//! [build]
//! content = "content"
//! output = "public"
//!
//! [listing]
//! page_size = 10
//!
//! [[nav]]
//! text = "Blog"
//! link = "/blog/"
//! ```
//!
//! The config is loaded once, adjusted with CLI overrides, validated, and
//! then only ever borrowed immutably.

mod base;
mod build;
pub mod defaults;
mod error;
mod listing;
mod nav;

pub use listing::{ListingConfig, SortDirection};
pub use nav::NavItem;

use base::BaseConfig;
use build::BuildConfig;
use error::ConfigError;

use crate::{cli::Cli, utils::date::is_valid_format};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing blog.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Input/output paths
    #[serde(default)]
    pub build: BuildConfig,

    /// Pagination and display settings
    #[serde(default)]
    pub listing: ListingConfig,

    /// Site navigation, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nav: Vec<NavItem>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());

        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());
        Self::update_option(&mut self.listing.page_size, cli.page_size.as_ref());

        self.update_path_with_root(&root, &cli.config);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve all paths against the root directory and make them absolute
    fn update_path_with_root(&mut self, root: &Path, config_file: &Path) {
        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(config_file));
        self.build.content = Self::normalize_path(&root.join(&self.build.content));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration values.
    ///
    /// Invalid values are rejected, never coerced.
    pub fn validate(&self) -> Result<()> {
        if self.listing.page_size == 0 {
            bail!(ConfigError::Validation(
                "[listing.page_size] must be at least 1".into()
            ));
        }

        if !is_valid_format(&self.listing.date_format) {
            bail!(ConfigError::Validation(format!(
                "[listing.date_format] `{}` is not a valid strftime pattern",
                self.listing.date_format
            )));
        }

        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        if let Some(index) = self.nav.iter().position(|item| item.text.trim().is_empty()) {
            bail!(ConfigError::Validation(format!(
                "[[nav]] entry {} has an empty `text`",
                index + 1
            )));
        }

        Ok(())
    }

    /// Validate that the content directory exists (needed by build/list).
    pub fn validate_content_dir(&self) -> Result<()> {
        if !self.build.content.is_dir() {
            bail!(ConfigError::Validation(format!(
                "[build.content] `{}` is not a directory",
                self.build.content.display()
            )));
        }
        Ok(())
    }

    /// Absolute URL for a post path, or the path itself without `[base.url]`.
    pub fn post_url(&self, path: &str) -> String {
        match self.base.url.as_deref() {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/')),
            None => path.to_owned(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
