//! YAML front-matter parsing for markdown posts.
//!
//! ```markdown
//! ---
//! title: Email Verification
//! date: 2020-02-16
//! categories: [Rust, Actix]
//! description: Verify new users by email
//! ---
//!
//! Body text...
//! ```

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

/// Marker separating the excerpt from the rest of a post body.
pub const MORE_MARKER: &str = "<!-- more -->";

/// Recognised front-matter keys. Unknown keys are ignored since the same
/// block is read by other site tooling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(deserialize_with = "scalar_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub date: Option<String>,
    #[serde(alias = "category", deserialize_with = "one_or_many")]
    pub categories: Vec<String>,
    #[serde(alias = "excerpt", deserialize_with = "scalar_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub permalink: Option<String>,
    pub draft: bool,
}

/// A parsed markdown document.
#[derive(Debug)]
pub struct Document<'a> {
    pub front_matter: FrontMatter,
    pub body: &'a str,
}

impl Document<'_> {
    /// Description from front-matter, else the text before [`MORE_MARKER`].
    pub fn excerpt(&self) -> Option<String> {
        self.front_matter
            .description
            .clone()
            .or_else(|| excerpt_from_body(self.body).map(str::to_owned))
    }

    /// Title from front-matter, else the first `# ` heading of the body.
    pub fn title(&self) -> Option<String> {
        self.front_matter
            .title
            .clone()
            .or_else(|| first_heading(self.body).map(str::to_owned))
    }
}

/// Parse a markdown source into front-matter and body.
///
/// A source without a complete `---` block has default front-matter and the
/// whole source as its body.
pub fn parse_document(source: &str) -> Result<Document<'_>, serde_yaml::Error> {
    let Some((yaml, body)) = split_front_matter(source) else {
        return Ok(Document {
            front_matter: FrontMatter::default(),
            body: source,
        });
    };

    let front_matter = if yaml.trim().is_empty() {
        FrontMatter::default()
    } else {
        serde_yaml::from_str(yaml)?
    };

    Ok(Document { front_matter, body })
}

/// Split `---`-delimited front-matter from the body.
///
/// The block must start on the first line; it closes at the next `---` (or
/// `...`) line. Returns `None` if either delimiter is missing.
pub fn split_front_matter(source: &str) -> Option<(&str, &str)> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let rest = source.strip_prefix("---")?;
    let rest = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed == "---" || trimmed == "..." {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

fn excerpt_from_body(body: &str) -> Option<&str> {
    let (before, _) = body.split_once(MORE_MARKER)?;
    Some(before.trim()).filter(|s| !s.is_empty())
}

fn first_heading(body: &str) -> Option<&str> {
    body.lines()
        .find_map(|line| line.trim_start().strip_prefix("# "))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

// ============================================================================
// Lenient scalar handling
// ============================================================================

/// Stringify a YAML scalar (`date: 2020` is a number, not a string).
fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_string(Value::deserialize(deserializer)?))
}

/// Accept `category: Rust` as well as `categories: [Rust, Web]`.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Sequence(items) => items.into_iter().filter_map(scalar_to_string).collect(),
        other => scalar_to_string(other).into_iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_front_matter() {
        let src = "---\ntitle: Hi\n---\nbody\n";
        assert_eq!(split_front_matter(src), Some(("title: Hi\n", "body\n")));
    }

    #[test]
    fn test_split_front_matter_crlf_and_bom() {
        let src = "\u{feff}---\r\ntitle: Hi\r\n---\r\nbody";
        assert_eq!(split_front_matter(src), Some(("title: Hi\r\n", "body")));
    }

    #[test]
    fn test_split_front_matter_missing() {
        assert_eq!(split_front_matter("# Title\n\nbody"), None);
        assert_eq!(split_front_matter("---\ntitle: unterminated\n"), None);
        assert_eq!(split_front_matter("----\n---\n"), None);
    }

    #[test]
    fn test_parse_document_full() {
        let src = "---\ntitle: Email Verification\ndate: 2020-02-16\ncategories:\n  - Rust\n  - Actix\ndescription: Verify users\n---\ntext";
        let doc = parse_document(src).unwrap();

        assert_eq!(doc.front_matter.title.as_deref(), Some("Email Verification"));
        assert_eq!(doc.front_matter.date.as_deref(), Some("2020-02-16"));
        assert_eq!(doc.front_matter.categories, ["Rust", "Actix"]);
        assert_eq!(doc.front_matter.description.as_deref(), Some("Verify users"));
        assert!(!doc.front_matter.draft);
        assert_eq!(doc.body, "text");
    }

    #[test]
    fn test_parse_document_aliases_and_single_category() {
        let src = "---\ncategory: Rust\nexcerpt: Short\npermalink: /custom/\ndraft: true\nlayout: post\n---\n";
        let fm = parse_document(src).unwrap().front_matter;

        assert_eq!(fm.categories, ["Rust"]);
        assert_eq!(fm.description.as_deref(), Some("Short"));
        assert_eq!(fm.permalink.as_deref(), Some("/custom/"));
        assert!(fm.draft);
    }

    #[test]
    fn test_parse_document_numeric_scalars() {
        let src = "---\ntitle: 404\ndate: 2020\ncategories: [2020, Rust]\n---\n";
        let fm = parse_document(src).unwrap().front_matter;

        assert_eq!(fm.title.as_deref(), Some("404"));
        assert_eq!(fm.date.as_deref(), Some("2020"));
        assert_eq!(fm.categories, ["2020", "Rust"]);
    }

    #[test]
    fn test_parse_document_empty_block() {
        let doc = parse_document("---\n---\nbody").unwrap();
        assert_eq!(doc.front_matter, FrontMatter::default());
        assert_eq!(doc.body, "body");
    }

    #[test]
    fn test_parse_document_invalid_yaml() {
        assert!(parse_document("---\ntitle: [unclosed\n---\n").is_err());
    }

    #[test]
    fn test_excerpt_from_more_marker() {
        let doc = parse_document("---\ntitle: T\n---\n\nIntro paragraph.\n\n<!-- more -->\n\nRest").unwrap();
        assert_eq!(doc.excerpt().as_deref(), Some("Intro paragraph."));
    }

    #[test]
    fn test_excerpt_prefers_description() {
        let doc = parse_document("---\ndescription: Given\n---\nIntro\n<!-- more -->\n").unwrap();
        assert_eq!(doc.excerpt().as_deref(), Some("Given"));
    }

    #[test]
    fn test_excerpt_absent() {
        let doc = parse_document("no marker here").unwrap();
        assert_eq!(doc.excerpt(), None);
    }

    #[test]
    fn test_title_from_heading() {
        let doc = parse_document("---\ndate: 2020-01-01\n---\n\n# How to Create a REST API\n\ntext").unwrap();
        assert_eq!(doc.title().as_deref(), Some("How to Create a REST API"));
    }

    #[test]
    fn test_title_ignores_subheadings() {
        let doc = parse_document("## Not a title\ntext").unwrap();
        assert_eq!(doc.title(), None);
    }
}
