use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading or checking `blog.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file is not valid TOML")]
    Toml(#[from] toml::de::Error),

    /// A value that parsed but is out of range; the message names the key.
    #[error("invalid config: {0}")]
    Validation(String),
}
