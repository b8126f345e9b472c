//! Shared test utilities for the spybg test suite.
//!
//! Builds throwaway input roots in a temp directory, with the output
//! directory redirected inside the same temp directory so tests never write
//! to the working directory.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let site = SiteFixture::classic();
//! site.article("post1.md", &article_source("Hello", "# Hi"));
//!
//! generate(&site.config()).unwrap();
//! assert_eq!(site.read_output("arts/post1.html"), "<h1>Hello</h1><h1>Hi</h1>");
//! ```

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::config::Config;

pub const CLASSIC_INDEX: &str = "<ul>%SPYBG_ARTICLES_LIST%</ul>";
pub const CLASSIC_ARTICLE: &str = "<h1>%article.title%</h1>%article.content%";
pub const CLASSIC_ARTICLE_SHORT: &str = "<li>%article.title%</li>";

// =========================================================================
// Fixture setup
// =========================================================================

/// A temporary input root with `templates/` and `articles/`.
pub struct SiteFixture {
    tmp: TempDir,
}

impl SiteFixture {
    /// `.html` templates with the classic list/heading markup.
    pub fn classic() -> Self {
        Self::new(CLASSIC_INDEX, CLASSIC_ARTICLE, CLASSIC_ARTICLE_SHORT)
    }

    /// `.html` templates with the given contents.
    pub fn new(index: &str, article: &str, article_short: &str) -> Self {
        let site = Self::empty();
        site.template("index.html.spybgt", index);
        site.template("article.html.spybgt", article);
        site.template("article_short.html.spybgt", article_short);
        site
    }

    /// Classic template contents under custom file names.
    pub fn with_names(index: &str, article: &str, article_short: &str) -> Self {
        let site = Self::empty();
        site.template(index, CLASSIC_INDEX);
        site.template(article, CLASSIC_ARTICLE);
        site.template(article_short, CLASSIC_ARTICLE_SHORT);
        site
    }

    fn empty() -> Self {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("input/templates")).unwrap();
        fs::create_dir_all(tmp.path().join("input/articles")).unwrap();
        Self { tmp }
    }

    pub fn root(&self) -> PathBuf {
        self.tmp.path().join("input")
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.root().join("templates")
    }

    pub fn articles_dir(&self) -> PathBuf {
        self.root().join("articles")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.tmp.path().join("build")
    }

    /// Stock config for the root, writing into [`Self::output_dir`].
    pub fn config(&self) -> Config {
        Config::new(self.root()).with_output_dir(self.output_dir().to_string_lossy())
    }

    pub fn template(&self, name: &str, contents: &str) {
        fs::write(self.templates_dir().join(name), contents).unwrap();
    }

    pub fn article(&self, name: &str, contents: &str) {
        fs::write(self.articles_dir().join(name), contents).unwrap();
    }

    /// Read a generated file, relative to the output directory. Panics with
    /// the directory listing if it is missing.
    pub fn read_output(&self, relative: &str) -> String {
        let path = self.output_dir().join(relative);
        fs::read_to_string(&path).unwrap_or_else(|e| {
            panic!(
                "output '{relative}' unreadable ({e}). Present: {:?}",
                list_files(&self.output_dir())
            )
        })
    }
}

fn list_files(dir: &std::path::Path) -> Vec<String> {
    let mut files = Vec::new();
    let Ok(entries) = fs::read_dir(dir) else {
        return files;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            files.extend(list_files(&path));
        } else {
            files.push(path.to_string_lossy().to_string());
        }
    }
    files.sort();
    files
}

// =========================================================================
// Article sources
// =========================================================================

/// Article text with the given title, a fixed date and short, and `body`.
pub fn article_source(title: &str, body: &str) -> String {
    format!("{{\ntitle: {title}\ndate: 2024-01-01\nshort: s\n}}{body}")
}
