//! `list` command: print one listing page to the terminal.

use crate::{
    build::load_sorted_posts,
    config::SiteConfig,
    listing::{PostView, paginate, render_page},
    log,
};
use anyhow::Result;

/// Placeholder shown in place of a missing date.
const UNDATED: &str = "undated";

/// Print page `page_index` of the listing.
///
/// A page past the end prints a notice; it is not an error.
pub fn list_page(config: &SiteConfig, page_index: usize) -> Result<()> {
    let posts = load_sorted_posts(config)?;
    let page = paginate(&posts, page_index, config.listing.page_size)?;

    if page.is_empty() {
        log!(
            "list";
            "page {} is empty ({} pages, {} posts)",
            page.page_index,
            page.total_pages,
            posts.len()
        );
        return Ok(());
    }

    let view = render_page(&page, &config.listing);
    log!("list"; "{} · page {}/{}", config.base.title, view.page_index, view.total_pages);
    for post in &view.posts {
        log!("list"; "{}", format_line(post, &config.post_url(&post.path)));
    }

    Ok(())
}

/// One terminal line per post: `date  title  [categories]  url`.
fn format_line(post: &PostView, url: &str) -> String {
    let date = post.formatted_date.as_deref().unwrap_or(UNDATED);
    if post.category_label.is_empty() {
        format!("{date}  {}  {url}", post.title_label)
    } else {
        format!("{date}  {}  [{}]  {url}", post.title_label, post.category_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::ListingConfig, listing::Post};
    use std::fs;

    #[test]
    fn test_format_line_dated_with_categories() {
        let post = Post::new("/a/")
            .with_title("Hello")
            .with_date("2020-02-16")
            .with_categories(["Rust", "Actix"]);
        let view = PostView::from_post(&post, &ListingConfig::default());

        assert_eq!(
            format_line(&view, "/a/"),
            "February 16, 2020  Hello  [Rust, Actix]  /a/"
        );
    }

    #[test]
    fn test_format_line_undated() {
        let view = PostView::from_post(&Post::new("/hello-world/"), &ListingConfig::default());
        assert_eq!(
            format_line(&view, "/hello-world/"),
            "undated  Hello World  /hello-world/"
        );
    }

    #[test]
    fn test_list_page_out_of_range_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.build.content = dir.path().to_path_buf();
        fs::write(dir.path().join("a.md"), "text").unwrap();

        assert!(list_page(&config, 1).is_ok());
        assert!(list_page(&config, 9).is_ok());
    }

    #[test]
    fn test_list_page_zero_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.build.content = dir.path().to_path_buf();

        let err = list_page(&config, 0).unwrap_err();
        assert!(err.to_string().contains("page_index"));
    }
}
