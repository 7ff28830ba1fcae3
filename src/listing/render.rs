//! Display data for one page of the listing.
//!
//! This is the boundary to the templating layer: views are plain
//! serializable data, no HTML is produced here.

use super::{paginate::Page, post::Post};
use crate::{
    config::ListingConfig,
    utils::slug::{kebab_case, title_from_path},
};
use serde::Serialize;

/// Display data for a single post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostView {
    pub path: String,
    /// Front-matter title, or one derived from `path`.
    pub title_label: String,
    /// `None` for undated posts; templates must handle it.
    pub formatted_date: Option<String>,
    /// Categories joined by the configured separator, `""` when none.
    pub category_label: String,
    pub category_slugs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}

impl PostView {
    pub fn from_post(post: &Post, config: &ListingConfig) -> Self {
        let title_label = post
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map_or_else(|| title_from_path(&post.path), str::to_owned);

        let formatted_date = post
            .parsed_date()
            .and_then(|dt| dt.format(&config.date_format));

        Self {
            path: post.path.clone(),
            title_label,
            formatted_date,
            category_label: join_categories(&post.categories, &config.category_separator),
            category_slugs: post.categories.iter().map(|c| kebab_case(c)).collect(),
            excerpt: post.description.clone(),
        }
    }
}

/// Display data for one page, including neighbour links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub page_index: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub prev: Option<usize>,
    pub next: Option<usize>,
    pub posts: Vec<PostView>,
}

/// Render every post of `page` into display data.
pub fn render_page(page: &Page<'_>, config: &ListingConfig) -> PageView {
    PageView {
        page_index: page.page_index,
        total_pages: page.total_pages,
        page_size: page.page_size,
        prev: page.prev(),
        next: page.next(),
        posts: page
            .items
            .iter()
            .map(|post| PostView::from_post(post, config))
            .collect(),
    }
}

/// Join categories with `separator`, skipping blank entries.
pub fn join_categories(categories: &[String], separator: &str) -> String {
    categories
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}
