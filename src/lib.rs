//! blog-index - ordered, paginated listings for a markdown blog.
//!
//! The [`listing`] module is the core: a deterministic post order (newest
//! first, undated last, ties by path) and fixed-size pagination over it.
//! [`content`] loads posts from markdown front-matter, and [`build`] writes
//! rendered pages as JSON for the site's templating layer.

pub mod build;
pub mod cli;
pub mod config;
pub mod content;
pub mod init;
pub mod list;
pub mod listing;
pub mod utils;
