//! Fixed-size pagination over an already sorted post slice.

use super::{error::ListingError, post::Post};

/// One page of the listing: a borrowed slice plus paging metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a> {
    /// Posts on this page, in listing order. Empty past the last page.
    pub items: &'a [Post],
    /// 1-based page index as requested.
    pub page_index: usize,
    pub page_size: usize,
    /// `ceil(total / page_size)`, 0 for an empty listing.
    pub total_pages: usize,
}

impl Page<'_> {
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the previous page, if it exists.
    pub const fn prev(&self) -> Option<usize> {
        if self.page_index > 1 && self.page_index - 1 <= self.total_pages {
            Some(self.page_index - 1)
        } else {
            None
        }
    }

    /// Index of the next page, if it exists.
    pub const fn next(&self) -> Option<usize> {
        if self.page_index < self.total_pages {
            Some(self.page_index + 1)
        } else {
            None
        }
    }
}

/// Number of pages needed for `count` posts.
pub const fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Slice one page out of `posts`.
///
/// `posts` must already be in listing order (see [`super::sort_posts`]).
/// A `page_index` past the last page yields an empty page, not an error.
///
/// # Errors
///
/// [`ListingError::InvalidArgument`] if `page_index` or `page_size` is 0.
pub fn paginate(posts: &[Post], page_index: usize, page_size: usize) -> Result<Page<'_>, ListingError> {
    let page_index = ListingError::require_positive("page_index", page_index)?;
    let page_size = ListingError::require_positive("page_size", page_size)?;

    let count = posts.len();
    let start = (page_index - 1).saturating_mul(page_size);
    let items = if start >= count {
        &posts[..0]
    } else {
        let end = start.saturating_add(page_size).min(count);
        &posts[start..end]
    };

    Ok(Page {
        items,
        page_index,
        page_size,
        total_pages: total_pages(count, page_size),
    })
}

/// Every page from 1 to `total_pages`. Empty for an empty listing.
///
/// # Errors
///
/// [`ListingError::InvalidArgument`] if `page_size` is 0.
pub fn paginate_all(posts: &[Post], page_size: usize) -> Result<Vec<Page<'_>>, ListingError> {
    let page_size = ListingError::require_positive("page_size", page_size)?;
    (1..=total_pages(posts.len(), page_size))
        .map(|index| paginate(posts, index, page_size))
        .collect()
}
