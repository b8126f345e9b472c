//! Article source parsing.
//!
//! An article file carries a metadata block followed by its Markdown body:
//!
//! ```text
//! {
//! title: Hello
//! date: 2024-01-01
//! short: A first post
//! }
//! # Hi
//!
//! Body text, which may itself contain { braces }.
//! ```
//!
//! The block runs from the first `{` to the first `}` in the file. There is
//! no brace matching: a `}` inside a metadata value ends the block early.
//! Everything after that first `}` is body, leading newline included.
//!
//! ## Key/value lines
//!
//! Each non-blank line is split on `:`. The key is the first segment and the
//! value the second, both trimmed. Any further segments are dropped, so
//! `time: 10:30` yields `10`. Later duplicates overwrite earlier ones.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const REQUIRED_KEYS: [&str; 3] = ["title", "date", "short"];

#[derive(Error, Debug)]
pub enum ArticleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("No {{...}} metadata block found")]
    MalformedMetadataBlock,
    #[error("Metadata line has no key/value separator: {0:?}")]
    MalformedMetadataLine(String),
    #[error("Missing required metadata key: {0}")]
    MissingMetadataKey(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleMetadata {
    pub title: String,
    pub date: String,
    pub short: String,
}

/// One article source file, parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    /// Source file name without its extension (`post1.md` → `post1`).
    pub filename: String,
    pub metadata: ArticleMetadata,
    /// Raw Markdown following the metadata block.
    pub body: String,
}

impl Article {
    pub fn load(path: &Path) -> Result<Self, ArticleError> {
        let raw = fs::read_to_string(path)?;
        let (metadata, body) = parse(&raw)?;
        let filename = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        Ok(Self {
            filename,
            metadata,
            body: body.to_string(),
        })
    }
}

/// Split raw article text into its metadata and body.
pub fn parse(raw: &str) -> Result<(ArticleMetadata, &str), ArticleError> {
    let (open, close) = metadata_bounds(raw)?;
    let fields = parse_block(&raw[open + 1..close])?;

    let take = |key: &'static str| {
        fields
            .get(key)
            .cloned()
            .ok_or(ArticleError::MissingMetadataKey(key))
    };
    let metadata = ArticleMetadata {
        title: take(REQUIRED_KEYS[0])?,
        date: take(REQUIRED_KEYS[1])?,
        short: take(REQUIRED_KEYS[2])?,
    };

    Ok((metadata, &raw[close + 1..]))
}

/// Byte positions of the first `{` and the first `}`.
fn metadata_bounds(raw: &str) -> Result<(usize, usize), ArticleError> {
    match (raw.find('{'), raw.find('}')) {
        (Some(open), Some(close)) if open < close => Ok((open, close)),
        _ => Err(ArticleError::MalformedMetadataBlock),
    }
}

/// Parse `key: value` lines into a map.
pub fn parse_block(block: &str) -> Result<BTreeMap<String, String>, ArticleError> {
    let mut fields = BTreeMap::new();
    for line in block.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let mut segments = line.split(':');
        let key = segments.next().unwrap_or_default();
        let value = segments
            .next()
            .ok_or_else(|| ArticleError::MalformedMetadataLine(line.to_string()))?;
        fields.insert(key.trim().to_string(), value.trim().to_string());
    }
    Ok(fields)
}
