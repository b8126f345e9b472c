//! Site generation.
//!
//! Runs the whole pipeline for one input root:
//!
//! ```text
//! 1. Locate   templates/  →  TemplateSet        (fails before any output)
//! 2. List     articles/   →  index list entries (short template)
//! 3. Render   articles/   →  build/arts/*.<ext> (article template)
//! 4. Index    list        →  build/<index name> (index template)
//! ```
//!
//! Steps 2 and 3 each list and parse the articles directory on their own;
//! nothing is cached between them. Articles are visited in lexicographic
//! file-name order, so the index list order is stable across platforms.
//!
//! There is no partial-success mode. The first failing article aborts the
//! run, and files already written stay where they are.

use crate::article::{Article, ArticleError};
use crate::config::{Config, ConfigError};
use crate::render;
use crate::templates::{LoadedTemplates, TemplateError, TemplateSet};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
    #[error("Article {}: {source}", .path.display())]
    Article { path: PathBuf, source: ArticleError },
}

/// What a completed run wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateReport {
    pub index_path: PathBuf,
    pub articles: Vec<GeneratedArticle>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedArticle {
    pub title: String,
    pub source: PathBuf,
    pub output: PathBuf,
}

/// Both renderings of one article.
#[derive(Debug, Clone)]
pub struct RenderedArticle {
    pub article: Article,
    pub full: String,
    pub short: String,
}

/// Generate the index and every article page for `config`.
pub fn generate(config: &Config) -> Result<GenerateReport, GenerateError> {
    let templates = TemplateSet::locate(config)?;
    debug!(
        "templates: {}, {}, {}",
        templates.index_path.display(),
        templates.article_path.display(),
        templates.article_short_path.display()
    );
    let loaded = templates.load()?;

    let articles_list = build_articles_list(&config.articles_dir(), &loaded.article_short)?;
    let articles = generate_articles(config, &templates, &loaded)?;
    let index_path = generate_index(config, &templates, &loaded.index, &articles_list)?;

    info!(
        "generated {} and {} article(s)",
        index_path.display(),
        articles.len()
    );
    Ok(GenerateReport {
        index_path,
        articles,
    })
}

/// Regular files directly under `dir`, sorted by name. Dot-files are skipped.
pub fn list_articles(dir: &Path) -> Result<Vec<PathBuf>, GenerateError> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && !p
                    .file_name()
                    .map(|n| n.to_string_lossy().starts_with('.'))
                    .unwrap_or(true)
        })
        .collect();

    paths.sort();
    Ok(paths)
}

/// Concatenated short renderings of every article, in listing order.
pub fn build_articles_list(
    articles_dir: &Path,
    short_template: &str,
) -> Result<String, GenerateError> {
    let mut list = String::new();
    for path in list_articles(articles_dir)? {
        let article = load_article(&path)?;
        list.push_str(&render::render_article_short(short_template, &article));
    }
    Ok(list)
}

/// Parse one article and render it through both article templates.
pub fn render_article(
    article_path: &Path,
    article_template: &str,
    article_short_template: &str,
) -> Result<RenderedArticle, GenerateError> {
    let article = load_article(article_path)?;
    let full = render::render_article_full(article_template, &article);
    let short = render::render_article_short(article_short_template, &article);
    Ok(RenderedArticle {
        article,
        full,
        short,
    })
}

/// Render and write every article page.
pub fn generate_articles(
    config: &Config,
    templates: &TemplateSet,
    loaded: &LoadedTemplates,
) -> Result<Vec<GeneratedArticle>, GenerateError> {
    let extension = templates.article_extension();
    let mut generated = Vec::new();

    for path in list_articles(&config.articles_dir())? {
        let rendered = render_article(&path, &loaded.article, &loaded.article_short)?;
        let output =
            config.output_article_path(&format!("{}{}", rendered.article.filename, extension));
        write_with_dirs(&output, &rendered.full)?;
        debug!("{} → {}", path.display(), output.display());

        generated.push(GeneratedArticle {
            title: rendered.article.metadata.title,
            source: path,
            output,
        });
    }

    Ok(generated)
}

/// Fill the index template with the articles list and write it.
pub fn generate_index(
    config: &Config,
    templates: &TemplateSet,
    index_template: &str,
    articles_list: &str,
) -> Result<PathBuf, GenerateError> {
    let index = render::render_index(index_template, articles_list);
    let path = config.output_index_path(&templates.output_index_name());
    write_with_dirs(&path, &index)?;
    Ok(path)
}

fn load_article(path: &Path) -> Result<Article, GenerateError> {
    Article::load(path).map_err(|source| GenerateError::Article {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `contents` to `path`, creating missing parent directories first.
fn write_with_dirs(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)
}
