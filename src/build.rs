//! Listing build: content → sorted posts → JSON page documents.
//!
//! # Output Layout
//!
//! | File | Contents |
//! |------|----------|
//! | `<output>/page/<n>.json` | One [`PageView`](crate::listing::PageView) per listing page |
//! | `<output>/posts.json` | Every [`PostView`], in listing order |
//! | `<output>/site.json` | Site metadata and navigation |
//!
//! An empty listing has no pages, so `page/` is not created.

use crate::{
    config::{NavItem, SiteConfig},
    content::load_posts,
    listing::{Post, PostView, paginate_all, render_page, sort_posts},
    log,
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::{fs, path::Path};

/// Directory (under output) holding one JSON file per page.
pub const PAGE_DIR: &str = "page";
pub const POSTS_FILE: &str = "posts.json";
pub const SITE_FILE: &str = "site.json";

/// Site metadata exposed next to the listing pages.
#[derive(Debug, Serialize)]
struct SiteData<'a> {
    title: &'a str,
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    language: &'a str,
    nav: &'a [NavItem],
}

/// Summary of a listing build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub posts: usize,
    pub pages: usize,
}

/// Load posts from the content directory in listing order.
pub fn load_sorted_posts(config: &SiteConfig) -> Result<Vec<Post>> {
    let mut posts = load_posts(&config.build.content).with_context(|| {
        format!(
            "Failed to load posts from {}",
            config.build.content.display()
        )
    })?;
    sort_posts(&mut posts);
    Ok(posts)
}

/// Build every listing page and write it to the output directory.
///
/// Stale page files from a previous build are removed first.
pub fn build_listing(config: &SiteConfig) -> Result<BuildSummary> {
    let posts = load_sorted_posts(config)?;
    let pages = paginate_all(&posts, config.listing.page_size)?;

    let output = &config.build.output;
    let page_dir = output.join(PAGE_DIR);
    if page_dir.exists() {
        fs::remove_dir_all(&page_dir)
            .with_context(|| format!("Failed to clear {}", page_dir.display()))?;
    }

    let dir = if pages.is_empty() { output } else { &page_dir };
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    // Pages only borrow the sorted slice, so they render independently
    pages.par_iter().try_for_each(|page| {
        let view = render_page(page, &config.listing);
        write_json(&page_dir.join(format!("{}.json", page.page_index)), &view)
    })?;

    let views: Vec<PostView> = posts
        .iter()
        .map(|post| PostView::from_post(post, &config.listing))
        .collect();
    write_json(&output.join(POSTS_FILE), &views)?;
    write_json(&output.join(SITE_FILE), &site_data(config))?;

    let summary = BuildSummary {
        posts: posts.len(),
        pages: pages.len(),
    };
    log!(
        "build";
        "{} posts, {} pages of {} → {}",
        summary.posts,
        summary.pages,
        config.listing.page_size,
        output.display()
    );
    Ok(summary)
}

fn site_data(config: &SiteConfig) -> SiteData<'_> {
    SiteData {
        title: &config.base.title,
        description: &config.base.description,
        url: config.base.url.as_deref(),
        language: &config.base.language,
        nav: &config.nav,
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}
