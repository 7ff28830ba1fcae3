//! `[listing]` section configuration.
//!
//! Controls pagination and how posts are rendered into display data.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// Listing sort direction.
///
/// Only newest-first is supported; the option exists so the direction is
/// named in config rather than implied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Most recent first, undated posts last.
    #[default]
    Desc,
}

/// `[listing]` section in blog.toml.
///
/// # Example
/// ```toml
/// [listing]
/// page_size = 5
/// sort = "desc"
/// date_format = "%b %e, %Y"
/// category_separator = " · "
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ListingConfig {
    /// Posts per page. Must be at least 1.
    #[serde(default = "defaults::listing::page_size")]
    #[educe(Default = defaults::listing::page_size())]
    pub page_size: usize,

    #[serde(default = "defaults::listing::sort")]
    #[educe(Default = defaults::listing::sort())]
    pub sort: SortDirection,

    /// chrono strftime pattern for `formatted_date`.
    #[serde(default = "defaults::listing::date_format")]
    #[educe(Default = defaults::listing::date_format())]
    pub date_format: String,

    #[serde(default = "defaults::listing::category_separator")]
    #[educe(Default = defaults::listing::category_separator())]
    pub category_separator: String,
}
