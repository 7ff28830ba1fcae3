//! Slug and label helpers.
//!
//! Converts category names to URL-safe slugs and derives display titles
//! from post paths.

use deunicode::deunicode;

/// Title used for the site root (`/`), which has no path segment.
const ROOT_TITLE: &str = "Home";

/// File extensions stripped from the last path segment before titling.
const STRIPPED_EXTENSIONS: &[&str] = &[".html", ".md"];

// ============================================================================
// Slugification
// ============================================================================

/// Convert text to kebab-case ASCII.
///
/// Non-ASCII text is transliterated first (e.g. "Café Rust" → "cafe-rust"),
/// then every run of non-alphanumeric characters collapses into one `-`.
pub fn kebab_case(text: &str) -> String {
    let ascii = deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

// ============================================================================
// Titles
// ============================================================================

/// Derive a display title from a post path.
///
/// | Path | Title |
/// |------|-------|
/// | `/posts/hello-world/` | `Hello World` |
/// | `/notes/rust_tips.html` | `Rust Tips` |
/// | `/` | `Home` |
pub fn title_from_path(path: &str) -> String {
    let Some(segment) = path.split('/').rev().find(|s| !s.is_empty()) else {
        return ROOT_TITLE.to_owned();
    };

    let stem = STRIPPED_EXTENSIONS
        .iter()
        .find_map(|ext| segment.strip_suffix(ext))
        .unwrap_or(segment);

    stem.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
