//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ordered, paginated listings for a markdown blog
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Config file name (default: blog.toml)
    #[arg(short = 'C', long, default_value = "blog.toml")]
    pub config: PathBuf,

    /// Posts per listing page (overrides `[listing.page_size]`)
    #[arg(long = "page-size")]
    pub page_size: Option<usize>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a default blog.toml and content directory
    Init,

    /// Write every listing page as JSON into the output directory
    Build,

    /// Print one listing page
    List {
        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init)
    }
}
