//! Site initialization module.
//!
//! Writes a default `blog.toml` and creates the content directory.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore"];

/// Create the default config and content directory under the config's root.
pub fn new_site(config: &SiteConfig) -> Result<()> {
    let root = config.get_root();

    if config.config_path.exists() {
        bail!(
            "Config file `{}` already exists. Remove it manually or init in a different path.",
            config.config_path.display()
        );
    }

    fs::create_dir_all(&config.build.content)
        .with_context(|| format!("Failed to create {}", config.build.content.display()))?;
    init_config_file(config)?;

    let output = config
        .build
        .output
        .strip_prefix(root)
        .unwrap_or(&config.build.output);
    init_ignored_files(root, &[output])?;

    log!("init"; "created {}", config.config_path.display());
    Ok(())
}

/// Write the effective configuration, with `[build]` paths relative to root.
///
/// CLI overrides given to `init` (content, output, page size) end up in the
/// file, so the next run sees the same layout.
fn init_config_file(config: &SiteConfig) -> Result<()> {
    let root = config.get_root();
    let mut written = config.clone();
    written.build.root = None;
    for path in [&mut written.build.content, &mut written.build.output] {
        if let Ok(relative) = path.strip_prefix(root) {
            *path = relative.to_path_buf();
        }
    }

    let content = toml::to_string_pretty(&written)?;
    let path = &config.config_path;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Initialize ignore files with specified paths, leaving existing files alone
fn init_ignored_files(root: &Path, paths: &[&Path]) -> Result<()> {
    let content = paths
        .iter()
        .filter_map(|p| p.to_str())
        .collect::<Vec<_>>()
        .join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn config_in(root: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.set_root(root);
        config.config_path = root.join("blog.toml");
        config.build.content = root.join("content");
        config.build.output = root.join("public");
        config
    }

    #[test]
    fn test_new_site_creates_layout() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        new_site(&config).unwrap();

        assert!(dir.path().join("content").is_dir());
        let written = SiteConfig::from_path(&dir.path().join("blog.toml")).unwrap();
        assert_eq!(written.listing.page_size, 10);
        assert_eq!(
            fs::read_to_string(dir.path().join(".gitignore")).unwrap(),
            "public"
        );
    }

    #[test]
    fn test_new_site_keeps_cli_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let init = Cli::parse_from([
            "blog-index", "--root", root, "--content", "posts", "--page-size", "3", "init",
        ]);
        let mut config = SiteConfig::default();
        config.update_with_cli(&init);
        new_site(&config).unwrap();

        let text = fs::read_to_string(dir.path().join("blog.toml")).unwrap();
        assert!(text.contains("content = \"posts\""));
        assert!(!text.contains(root));

        let build = Cli::parse_from(["blog-index", "--root", root, "build"]);
        let mut reloaded = SiteConfig::from_path(&dir.path().join("blog.toml")).unwrap();
        reloaded.update_with_cli(&build);

        assert_eq!(reloaded.listing.page_size, 3);
        assert!(reloaded.validate().is_ok());
        assert!(reloaded.validate_content_dir().is_ok());
        assert_eq!(reloaded.build.content, config.build.content);
    }

    #[test]
    fn test_new_site_refuses_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.config_path, "").unwrap();

        assert!(new_site(&config).is_err());
    }

    #[test]
    fn test_ignore_file_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "target").unwrap();

        init_ignored_files(dir.path(), &[Path::new("public")]).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join(".gitignore")).unwrap(),
            "target"
        );
    }
}
