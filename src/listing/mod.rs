//! Post ordering and pagination for the blog listing page.
//!
//! # Pipeline
//!
//! ```text
//! Vec<Post>  (from content loader)
//!     │
//!     ├── sort_posts()      newest first, undated last, ties by path
//!     │
//!     ├── paginate()        one page, 1-based index
//!     │   paginate_all()    every page 1..=total_pages
//!     │
//!     └── render_page()     PageView { posts: Vec<PostView>, .. }
//! ```
//!
//! Everything here is pure: inputs are borrowed immutably, nothing is cached,
//! and pages can be computed concurrently over the same sorted slice.

mod error;
mod order;
mod paginate;
mod post;
mod render;

pub use error::ListingError;
pub use order::{compare, sort_posts};
pub use paginate::{Page, paginate, paginate_all, total_pages};
pub use post::{Post, SortKey, extract_key};
pub use render::{PageView, PostView, join_categories, render_page};
