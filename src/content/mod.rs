//! Content loading: markdown files → [`Post`] records.
//!
//! # Path Mapping
//!
//! | Source (relative to content dir) | Post path |
//! |----------------------------------|-----------|
//! | `posts/hello.md` | `/posts/hello/` |
//! | `posts/hello/README.md` | `/posts/hello/` |
//! | `posts/hello/index.md` | `/posts/hello/` |
//! | `README.md` | `/` |
//!
//! A `permalink` in front-matter replaces the derived path.

mod frontmatter;

use frontmatter::parse_document;

use crate::{listing::Post, log};
use rayon::prelude::*;
use std::{
    collections::HashMap,
    fs,
    path::{Component, Path, PathBuf},
};
use thiserror::Error;
use walkdir::WalkDir;

/// File stems that stand for their parent directory.
const INDEX_STEMS: &[&str] = &["readme", "index"];

/// Content loading errors
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to walk content directory")]
    Walk(#[from] walkdir::Error),

    #[error("invalid front-matter in `{0}`")]
    FrontMatter(PathBuf, #[source] serde_yaml::Error),

    #[error("duplicate post path `{path}` in `{}` and `{}`", .first.display(), .second.display())]
    DuplicatePath {
        path: String,
        first: PathBuf,
        second: PathBuf,
    },
}

/// Load every non-draft markdown post under `content_dir`.
///
/// Files are parsed in parallel; the returned order follows the sorted
/// directory walk and is not the listing order.
pub fn load_posts(content_dir: &Path) -> Result<Vec<Post>, ContentError> {
    let files = markdown_files(content_dir)?;

    let loaded = files
        .par_iter()
        .map(|file| load_post(content_dir, file).map(|post| post.map(|p| (file, p))))
        .collect::<Result<Vec<_>, _>>()?;

    let mut seen: HashMap<String, &PathBuf> = HashMap::with_capacity(loaded.len());
    let mut posts = Vec::with_capacity(loaded.len());

    for (file, post) in loaded.into_iter().flatten() {
        if let Some(first) = seen.insert(post.path.clone(), file) {
            return Err(ContentError::DuplicatePath {
                path: post.path,
                first: first.clone(),
                second: file.clone(),
            });
        }
        posts.push(post);
    }

    log!("content"; "loaded {} posts from {}", posts.len(), content_dir.display());
    Ok(posts)
}

/// All `.md` files under `dir`, in sorted walk order.
fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>, ContentError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        let is_markdown = entry
            .path()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
        if entry.file_type().is_file() && is_markdown {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Load one post. Returns `Ok(None)` for drafts.
fn load_post(content_dir: &Path, file: &Path) -> Result<Option<Post>, ContentError> {
    let source = fs::read_to_string(file).map_err(|err| ContentError::Io(file.to_path_buf(), err))?;
    let doc = parse_document(&source).map_err(|err| ContentError::FrontMatter(file.to_path_buf(), err))?;

    let relative = file.strip_prefix(content_dir).unwrap_or(file);
    if doc.front_matter.draft {
        log!("content"; "skip draft {}", relative.display());
        return Ok(None);
    }

    let path = match doc.front_matter.permalink.as_deref() {
        Some(permalink) => normalize_permalink(permalink),
        None => path_from_relative(relative),
    };

    Ok(Some(Post {
        path,
        title: doc.title(),
        date: doc.front_matter.date.clone(),
        categories: doc.front_matter.categories.clone(),
        description: doc.excerpt(),
    }))
}

/// Derive a post path from a source path relative to the content dir.
pub fn path_from_relative(relative: &Path) -> String {
    let mut segments: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if let Some(last) = segments.pop() {
        let stem = Path::new(&last)
            .file_stem()
            .map_or_else(|| last.clone(), |s| s.to_string_lossy().into_owned());
        let is_index = INDEX_STEMS
            .iter()
            .any(|index| stem.eq_ignore_ascii_case(index));
        if !is_index {
            segments.push(stem);
        }
    }

    if segments.is_empty() {
        "/".to_owned()
    } else {
        format!("/{}/", segments.join("/"))
    }
}

/// Ensure a front-matter permalink starts with `/`.
fn normalize_permalink(permalink: &str) -> String {
    let permalink = permalink.trim();
    if permalink.starts_with('/') {
        permalink.to_owned()
    } else {
        format!("/{permalink}")
    }
}
