//! Total order over posts.

use super::post::{Post, SortKey, extract_key};
use std::cmp::Ordering;

/// Compare two posts for listing order (newest first).
///
/// - Dated posts come before undated posts
/// - Dated posts are ordered by timestamp, descending
/// - Equal timestamps (or both undated) fall back to ascending `path`
pub fn compare(a: &Post, b: &Post) -> Ordering {
    compare_keys(&extract_key(a), &extract_key(b))
}

fn compare_keys(a: &SortKey<'_>, b: &SortKey<'_>) -> Ordering {
    let by_date = match (a.timestamp, b.timestamp) {
        (Some(ts_a), Some(ts_b)) => ts_b.cmp(&ts_a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_date.then_with(|| a.path.cmp(b.path))
}

/// Sort posts in place into listing order.
///
/// Keys are extracted once per post, so each date string is parsed once.
pub fn sort_posts(posts: &mut Vec<Post>) {
    let mut keyed: Vec<(Option<i64>, Post)> = posts
        .drain(..)
        .map(|post| (post.timestamp(), post))
        .collect();

    keyed.sort_by(|(ts_a, a), (ts_b, b)| {
        compare_keys(
            &SortKey {
                timestamp: *ts_a,
                path: &a.path,
            },
            &SortKey {
                timestamp: *ts_b,
                path: &b.path,
            },
        )
    });

    posts.extend(keyed.into_iter().map(|(_, post)| post));
}
