//! `[build]` section configuration.
//!
//! Contains the content source and output directories.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in blog.toml - input and output paths.
///
/// # Example
/// ```toml
/// [build]
/// content = "content"      # Markdown posts
/// output = "public"        # Listing JSON output
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Markdown source directory.
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Listing output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.build.root, None);
        assert_eq!(config.build.content, PathBuf::from("content"));
        assert_eq!(config.build.output, PathBuf::from("public"));
    }

    #[test]
    fn test_build_config_custom_paths() {
        let config = r#"
            [build]
            content = "docs/blog"
            output = "dist"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.content, PathBuf::from("docs/blog"));
        assert_eq!(config.build.output, PathBuf::from("dist"));
    }

    #[test]
    fn test_build_config_unknown_field() {
        let result: Result<SiteConfig, _> = toml::from_str("[build]\nminify = true");
        assert!(result.is_err());
    }
}
