//! Build configuration and path resolution.
//!
//! Every run is driven by a single input root. All other locations are
//! derived from it plus a handful of directory names that default to the
//! classic layout:
//!
//! ```text
//! blog/                        # Input root (CLI positional argument)
//! ├── spybg.toml               # Optional overrides
//! ├── templates/
//! │   ├── index.html.spybgt
//! │   ├── article.html.spybgt
//! │   └── article_short.html.spybgt
//! └── articles/
//!     ├── first-post.md
//!     └── second-post.md
//!
//! build/                       # Output root (relative to the working directory)
//! ├── index.html
//! └── arts/
//!     ├── first-post.html
//!     └── second-post.html
//! ```
//!
//! ## Config File
//!
//! `spybg.toml` in the input root is optional. It is sparse: stock defaults
//! are merged underneath it, so it only needs the keys it changes.
//!
//! ```toml
//! output_dir = "build"
//! templates_dir = "templates"
//! articles_dir = "articles"
//! articles_output_dir = "arts"
//! template_suffix = ".spybgt"
//! rss_feed_path = "rss.xml"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the optional config file looked up in the input root.
pub const CONFIG_FILE_NAME: &str = "spybg.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings read from `spybg.toml`.
///
/// All fields have defaults matching the classic layout. Unknown keys are
/// rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Where generated files go, relative to the working directory.
    pub output_dir: String,
    /// Templates directory name inside the input root.
    pub templates_dir: String,
    /// Articles directory name inside the input root.
    pub articles_dir: String,
    /// Subdirectory of `output_dir` receiving rendered articles.
    pub articles_output_dir: String,
    /// Suffix every template file name ends with.
    pub template_suffix: String,
    /// Reserved location of a feed file. Nothing writes it.
    pub rss_feed_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output_dir: "build".to_string(),
            templates_dir: "templates".to_string(),
            articles_dir: "articles".to_string(),
            articles_output_dir: "arts".to_string(),
            template_suffix: ".spybgt".to_string(),
            rss_feed_path: "rss.xml".to_string(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are usable as path components and suffixes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("output_dir", &self.output_dir),
            ("templates_dir", &self.templates_dir),
            ("articles_dir", &self.articles_dir),
            ("articles_output_dir", &self.articles_output_dir),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        if !self.template_suffix.starts_with('.') || self.template_suffix.len() < 2 {
            return Err(ConfigError::Validation(format!(
                "template_suffix must start with '.' and name an extension, got {:?}",
                self.template_suffix
            )));
        }
        Ok(())
    }
}

/// Resolved configuration for one run.
///
/// Built once at process entry and passed by reference to every stage.
/// Path accessors are pure: nothing here touches the filesystem.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input_dir: PathBuf,
    pub site: SiteConfig,
}

impl Config {
    /// Configuration with stock settings for `input_dir`.
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            site: SiteConfig::default(),
        }
    }

    /// Load `spybg.toml` from `input_dir` (if any) on top of stock defaults.
    pub fn load(input_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let input_dir = input_dir.into();
        let site = load_config(&input_dir)?;
        Ok(Self { input_dir, site })
    }

    /// Replace the output directory, e.g. from a CLI flag.
    pub fn with_output_dir(mut self, output_dir: impl Into<String>) -> Self {
        self.site.output_dir = output_dir.into();
        self
    }

    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(&self.site.output_dir)
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.input_dir.join(&self.site.templates_dir)
    }

    pub fn articles_dir(&self) -> PathBuf {
        self.input_dir.join(&self.site.articles_dir)
    }

    /// Location of the generated index page named `name`.
    pub fn output_index_path(&self, name: &str) -> PathBuf {
        self.output_dir().join(name)
    }

    /// Location of a rendered article whose file name is `filename`.
    pub fn output_article_path(&self, filename: &str) -> PathBuf {
        self.output_dir()
            .join(&self.site.articles_output_dir)
            .join(filename)
    }

    pub fn template_suffix(&self) -> &str {
        &self.site.template_suffix
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `spybg.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge user values over stock defaults, reject unknown keys, validate.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let merged = match load_raw_config(dir)? {
        Some(overlay) => merge_toml(stock_defaults_value(), overlay),
        None => stock_defaults_value(),
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully commented stock `spybg.toml`.
///
/// Printed by `spybg --print-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# spybg configuration
# ===================
# Place this file as spybg.toml in the input directory.
# All settings are optional; values below are the defaults.
# Unknown keys cause an error.

# Output root, relative to the directory spybg runs from.
output_dir = "build"

# Directory (inside the input root) holding the three templates:
#   index.<ext>.spybgt, article.<ext>.spybgt, article_short.<ext>.spybgt
templates_dir = "templates"

# Directory (inside the input root) holding one file per article.
articles_dir = "articles"

# Subdirectory of output_dir receiving rendered articles.
articles_output_dir = "arts"

# Suffix stripped from template names to get output names.
template_suffix = ".spybgt"

# Reserved for a feed file. Not generated.
rss_feed_path = "rss.xml"
"##
}
