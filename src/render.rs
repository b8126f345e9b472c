//! Template substitution and Markdown conversion.
//!
//! Templates are plain text with literal `%token%` placeholders. There is no
//! template language: every occurrence of a token is replaced verbatim, and
//! tokens the current template does not use are simply absent.
//!
//! | Template        | Tokens |
//! |-----------------|--------|
//! | article         | `%article.title%`, `%article.date%`, `%article.content%` |
//! | article_short   | `%article.title%`, `%article.data%`, `%article.short%` |
//! | index           | `%SPYBG_ARTICLES_LIST%` |
//!
//! The short template's date token really is `%article.data%`. Existing
//! template files depend on that spelling.

use crate::article::Article;
use pulldown_cmark::{Options, Parser, html as md_html};

pub const TITLE_TOKEN: &str = "%article.title%";
pub const DATE_TOKEN: &str = "%article.date%";
pub const SHORT_DATE_TOKEN: &str = "%article.data%";
pub const CONTENT_TOKEN: &str = "%article.content%";
pub const SHORT_TOKEN: &str = "%article.short%";
pub const ARTICLES_LIST_TOKEN: &str = "%SPYBG_ARTICLES_LIST%";

/// Replace every occurrence of each token with its value.
pub fn substitute(template: &str, replacements: &[(&str, &str)]) -> String {
    replacements
        .iter()
        .fold(template.to_string(), |acc, &(token, value)| {
            acc.replace(token, value)
        })
}

/// Convert Markdown to HTML. Fenced code blocks are part of CommonMark and
/// always recognised. Trailing newlines are dropped.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty());
    let mut html = String::new();
    md_html::push_html(&mut html, parser);
    let trimmed_len = html.trim_end_matches('\n').len();
    html.truncate(trimmed_len);
    html
}

/// Full article page.
pub fn render_article_full(template: &str, article: &Article) -> String {
    let content = markdown_to_html(&article.body);
    substitute(
        template,
        &[
            (TITLE_TOKEN, article.metadata.title.as_str()),
            (DATE_TOKEN, article.metadata.date.as_str()),
            (CONTENT_TOKEN, content.as_str()),
        ],
    )
}

/// Index list entry for one article.
pub fn render_article_short(template: &str, article: &Article) -> String {
    substitute(
        template,
        &[
            (TITLE_TOKEN, article.metadata.title.as_str()),
            (SHORT_DATE_TOKEN, article.metadata.date.as_str()),
            (SHORT_TOKEN, article.metadata.short.as_str()),
        ],
    )
}

pub fn render_index(template: &str, articles_list: &str) -> String {
    substitute(template, &[(ARTICLES_LIST_TOKEN, articles_list)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::ArticleMetadata;

    fn article(body: &str) -> Article {
        Article {
            filename: "post".to_string(),
            metadata: ArticleMetadata {
                title: "Hello".to_string(),
                date: "2024-01-01".to_string(),
                short: "A short one".to_string(),
            },
            body: body.to_string(),
        }
    }

    #[test]
    fn substitute_single_token_changes_nothing_else() {
        let out = substitute("<p>%X%</p> 100% sure", &[("%X%", "value")]);
        assert_eq!(out, "<p>value</p> 100% sure");
    }

    #[test]
    fn substitute_replaces_every_occurrence() {
        let out = substitute("%a% and %a%", &[("%a%", "x")]);
        assert_eq!(out, "x and x");
    }

    #[test]
    fn substitute_is_case_sensitive() {
        let out = substitute("%ARTICLE.TITLE%", &[(TITLE_TOKEN, "x")]);
        assert_eq!(out, "%ARTICLE.TITLE%");
    }

    #[test]
    fn markdown_heading() {
        assert_eq!(markdown_to_html("# Hi"), "<h1>Hi</h1>");
    }

    #[test]
    fn markdown_fenced_code_block() {
        let html = markdown_to_html("```rust\nfn main() {}\n```\n");
        assert!(html.contains("<pre><code class=\"language-rust\">"));
        assert!(html.contains("fn main() {}"));
    }

    #[test]
    fn markdown_inline_formatting() {
        let html = markdown_to_html("This is **bold** and *italic*.");
        assert_eq!(html, "<p>This is <strong>bold</strong> and <em>italic</em>.</p>");
    }

    #[test]
    fn full_render_uses_date_token() {
        let template = "<h1>%article.title%</h1><time>%article.date%</time>%article.content%";
        let out = render_article_full(template, &article("# Hi"));
        assert_eq!(out, "<h1>Hello</h1><time>2024-01-01</time><h1>Hi</h1>");
    }

    #[test]
    fn full_render_leaves_short_tokens_alone() {
        let out = render_article_full("%article.short% %article.data%", &article(""));
        assert_eq!(out, "%article.short% %article.data%");
    }

    #[test]
    fn short_render_uses_data_token() {
        let template = "<li>%article.title% (%article.data%) %article.short%</li>";
        let out = render_article_short(template, &article("ignored"));
        assert_eq!(out, "<li>Hello (2024-01-01) A short one</li>");
    }

    #[test]
    fn short_render_ignores_full_date_token() {
        let out = render_article_short("%article.date%", &article(""));
        assert_eq!(out, "%article.date%");
    }

    #[test]
    fn index_render() {
        let out = render_index("<ul>%SPYBG_ARTICLES_LIST%</ul>", "<li>a</li><li>b</li>");
        assert_eq!(out, "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn metadata_is_not_html_escaped() {
        let mut a = article("");
        a.metadata.title = "<em>raw</em>".to_string();
        assert_eq!(render_article_short("%article.title%", &a), "<em>raw</em>");
    }
}
