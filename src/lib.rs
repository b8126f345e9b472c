//! # spybg
//!
//! A minimal static blog generator. An input directory holds three templates
//! and a flat directory of Markdown articles; spybg writes one page per
//! article and an index page listing them all.
//!
//! # Pipeline
//!
//! ```text
//! 1. Config     <input>/spybg.toml      →  Config        (paths, suffix)
//! 2. Templates  <input>/templates/      →  TemplateSet   (exactly one per role)
//! 3. Articles   <input>/articles/*      →  Article       (metadata + Markdown body)
//! 4. Output     templates + articles    →  build/        (index + arts/*)
//! ```
//!
//! Every stage is synchronous and runs once per invocation. There is no
//! cache and no incremental rebuild: each run re-reads everything.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Input/output path resolution and optional `spybg.toml` loading |
//! | [`templates`] | Locates the `index`, `article` and `article_short` templates |
//! | [`article`] | Parses the `{ key: value }` metadata block and body of an article |
//! | [`render`] | Literal `%token%` substitution and Markdown → HTML |
//! | [`generate`] | Runs the pipeline and writes the output tree |
//! | [`output`] | CLI output formatting for `--verbose` runs |
//!
//! # Design Decisions
//!
//! ## Literal Tokens Over a Template Engine
//!
//! Templates are whatever text the author wants with `%token%` markers in
//! it. Replacement is plain substring replacement, so templates can be HTML,
//! XML, or anything else, and the output extension is taken from the
//! template's own file name.
//!
//! ## Errors Are Fatal
//!
//! Any missing or ambiguous template, unparsable article or I/O failure
//! stops the run and surfaces as a non-zero exit. Templates are resolved
//! before anything is written, so template mistakes never leave a half-built
//! output directory behind.

pub mod article;
pub mod config;
pub mod generate;
pub mod output;
pub mod render;
pub mod templates;

#[cfg(test)]
pub(crate) mod test_helpers;
