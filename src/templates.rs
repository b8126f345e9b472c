//! Template discovery.
//!
//! The templates directory holds exactly one file per role, each named
//! `<role>.<ext><suffix>` where `<ext>` is the extension of the file it
//! renders to:
//!
//! ```text
//! templates/
//! ├── index.html.spybgt          → build/index.html
//! ├── article.html.spybgt        → build/arts/<article>.html
//! └── article_short.html.spybgt  → one entry of the index list
//! ```
//!
//! Roles are matched with glob patterns (`index.*`, `article.*`,
//! `article_short.*`) against file names directly inside the directory.
//! `article.*.spybgt` does not match `article_short.html.spybgt`, since the
//! literal `.` after `article` has to match.

use crate::config::Config;
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const INDEX_PATTERN: &str = "index.*";
pub const ARTICLE_PATTERN: &str = "article.*";
pub const ARTICLE_SHORT_PATTERN: &str = "article_short.*";

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid template pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("No template matching {pattern} found in: {}", .dir.display())]
    NotFound { pattern: String, dir: PathBuf },
    #[error("Multiple templates match {pattern}: {found:?}")]
    Ambiguous { pattern: String, found: Vec<PathBuf> },
}

/// The three resolved template files for a run.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSet {
    pub index_path: PathBuf,
    pub article_path: PathBuf,
    pub article_short_path: PathBuf,
    suffix: String,
}

/// Template contents, read once before any article is rendered.
#[derive(Debug, Clone)]
pub struct LoadedTemplates {
    pub index: String,
    pub article: String,
    pub article_short: String,
}

impl TemplateSet {
    /// Locate all three templates. Fails on the first role with zero or
    /// several candidates.
    pub fn locate(config: &Config) -> Result<Self, TemplateError> {
        let dir = config.templates_dir();
        let suffix = config.template_suffix();
        Ok(Self {
            index_path: find(&dir, INDEX_PATTERN, suffix)?,
            article_path: find(&dir, ARTICLE_PATTERN, suffix)?,
            article_short_path: find(&dir, ARTICLE_SHORT_PATTERN, suffix)?,
            suffix: suffix.to_string(),
        })
    }

    pub fn load(&self) -> Result<LoadedTemplates, TemplateError> {
        Ok(LoadedTemplates {
            index: fs::read_to_string(&self.index_path)?,
            article: fs::read_to_string(&self.article_path)?,
            article_short: fs::read_to_string(&self.article_short_path)?,
        })
    }

    /// File name the generated index is written under:
    /// `index.html.spybgt` → `index.html`.
    pub fn output_index_name(&self) -> String {
        let name = basename(&self.index_path.to_string_lossy()).to_string();
        strip_suffix(&name, &self.suffix).to_string()
    }

    /// Extension (with the dot) appended to rendered article names:
    /// `article.html.spybgt` → `.html`.
    pub fn article_extension(&self) -> String {
        let name = basename(&self.article_path.to_string_lossy()).to_string();
        extension(strip_suffix(&name, &self.suffix)).to_string()
    }
}

/// Find the single file in `dir` whose name matches `<pattern><suffix>`.
pub fn find(dir: &Path, pattern: &str, suffix: &str) -> Result<PathBuf, TemplateError> {
    let full_pattern = format!("{}{}", pattern, Pattern::escape(suffix));
    let matcher = Pattern::new(&full_pattern)?;

    let mut found: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|_| TemplateError::NotFound {
            pattern: full_pattern.clone(),
            dir: dir.to_path_buf(),
        })?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.file_name()
                    .map(|n| matcher.matches(&n.to_string_lossy()))
                    .unwrap_or(false)
        })
        .collect();
    found.sort();

    match found.len() {
        0 => Err(TemplateError::NotFound {
            pattern: full_pattern,
            dir: dir.to_path_buf(),
        }),
        1 => Ok(found.remove(0)),
        _ => Err(TemplateError::Ambiguous {
            pattern: full_pattern,
            found,
        }),
    }
}

/// Last path component, splitting on both `/` and `\`.
fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

fn strip_suffix<'a>(name: &'a str, suffix: &str) -> &'a str {
    name.strip_suffix(suffix).unwrap_or(name)
}

/// Trailing `.ext` of a file name, empty if there is none.
/// Leading dots do not start an extension (`.profile` has none).
fn extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(pos) if name[..pos].chars().any(|c| c != '.') => &name[pos..],
        _ => "",
    }
}
