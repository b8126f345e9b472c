//! CLI output formatting.
//!
//! A run is silent unless `--verbose` is given, in which case it prints an
//! inventory of what was written:
//!
//! ```text
//! Index → build/index.html
//!
//! Articles
//! 001 Hello → build/arts/post1.html
//!     Source: post1.md
//! 002 Second post → build/arts/post2.html
//!     Source: post2.md
//!
//! Generated 1 index, 2 articles
//! ```
//!
//! `format_*` functions are pure and return lines for testability; `print_*`
//! wrappers write them to stdout.

use crate::generate::GenerateReport;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = vec![format!("Index → {}", report.index_path.display())];

    if !report.articles.is_empty() {
        lines.push(String::new());
        lines.push("Articles".to_string());
        for (i, article) in report.articles.iter().enumerate() {
            lines.push(format!(
                "{} {} → {}",
                format_index(i + 1),
                article.title,
                article.output.display()
            ));
            let source = article
                .source
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            lines.push(format!("    Source: {}", source));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated 1 index, {}",
        plural(report.articles.len(), "article")
    ));
    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}
