//! `[[nav]]` entries: the site navigation list.

use serde::{Deserialize, Serialize};

/// One navigation link.
///
/// # Example
/// ```toml
/// [[nav]]
/// text = "Blog"
/// link = "/blog/"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavItem {
    pub text: String,
    pub link: String,
}
