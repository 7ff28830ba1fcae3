//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn title() -> String {
        "My Blog".into()
    }

    pub fn url() -> Option<String> {
        None
    }

    pub fn language() -> String {
        "en-US".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn content() -> PathBuf {
        "content".into()
    }

    pub fn output() -> PathBuf {
        "public".into()
    }
}

// ============================================================================
// [listing] Section Defaults
// ============================================================================

pub mod listing {
    use super::super::SortDirection;

    pub fn page_size() -> usize {
        10
    }

    pub fn sort() -> SortDirection {
        SortDirection::default()
    }

    pub fn date_format() -> String {
        "%B %-d, %Y".into()
    }

    pub fn category_separator() -> String {
        ", ".into()
    }
}
