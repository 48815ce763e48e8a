//! # chatmark
//!
//! Fallback Markdown-to-HTML renderer for chat message bubbles.
//!
//! Handles a small subset: fenced code blocks, `**strong**`, `*emphasis*`,
//! `-`/`*` bullet lists and line paragraphs. Everything outside a code fence
//! is HTML-escaped before any markup is added, so the output is safe to insert
//! into a message bubble as-is.
//!
//! ## Example
//!
//! ```
//! let html = chatmark::render("**Note:**\n- one\n- two");
//! assert_eq!(
//!     html,
//!     "<p><strong>Note:</strong></p>\n<ul>\n<li>one</li>\n<li>two</li>\n</ul>"
//! );
//! ```

pub mod core;
pub mod error;
pub mod parser;
pub mod render;

pub use crate::core::ast::{BlockNode, DocumentAst};
pub use error::{Error, Result};
pub use parser::MarkdownParser;
pub use render::{escape_html, escape_html_attr, HtmlRenderer, Renderer};

/// Options for rendering a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// How bullet lines and emphasis delimiters are recognised.
    pub bullets: BulletStyle,
    /// Whether a fence language tag becomes a `language-*` class on `<code>`.
    pub language_classes: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            bullets: BulletStyle::Strict,
            language_classes: true,
        }
    }
}

/// Specifies how list markers are told apart from emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BulletStyle {
    /// A marker run must be followed by whitespace or end of line, and
    /// emphasis delimiters must touch non-whitespace text.
    #[default]
    Strict,
    /// Any leading run of whitespace and `-`/`*` containing a marker is a
    /// bullet, and emphasis matches any `*...*` pair.
    Lenient,
}

/// Renders `text` with default options.
pub fn render(text: &str) -> String {
    render_with_options(text, &RenderOptions::default())
}

/// Renders `text` with the given options.
pub fn render_with_options(text: &str, options: &RenderOptions) -> String {
    let document = MarkdownParser::new(*options).parse(text);
    HtmlRenderer::new(options.language_classes).render(&document)
}

// Python bindings (only when 'python' feature is enabled)
#[cfg(feature = "python")]
mod python_bindings {
    use super::{render_with_options, BulletStyle, RenderOptions};
    use pyo3::prelude::*;

    /// Renders chat message Markdown to safe HTML.
    #[pyfunction]
    #[pyo3(signature = (text, strict_bullets = true, language_classes = true))]
    fn render_markdown(text: &str, strict_bullets: bool, language_classes: bool) -> String {
        let options = RenderOptions {
            bullets: if strict_bullets {
                BulletStyle::Strict
            } else {
                BulletStyle::Lenient
            },
            language_classes,
        };
        render_with_options(text, &options)
    }

    /// A Python module implemented in Rust.
    #[pymodule]
    pub fn chatmark(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(render_markdown, m)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{render, render_with_options, BulletStyle, RenderOptions};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input_is_empty_paragraph() {
        assert_eq!(render(""), "<p></p>");
    }

    #[test]
    fn test_strong() {
        assert_eq!(render("**bold**"), "<p><strong>bold</strong></p>");
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(render("*it*"), "<p><em>it</em></p>");
    }

    #[test]
    fn test_list_items_in_order() {
        assert_eq!(render("- a\n- b"), "<ul>\n<li>a</li>\n<li>b</li>\n</ul>");
    }

    #[test]
    fn test_code_block_escaped_and_untouched() {
        assert_eq!(
            render("```code<x>```"),
            "<pre><code>code&lt;x&gt;</code></pre>"
        );
        assert_eq!(
            render("```\n* a *b*\n```"),
            "<pre><code>* a *b*</code></pre>"
        );
    }

    #[test]
    fn test_mixed_paragraph_list_paragraph() {
        assert_eq!(
            render("text\n- item\nmore text"),
            "<p>text</p>\n<ul>\n<li>item</li>\n</ul>\n<p>more text</p>"
        );
    }

    #[test]
    fn test_markup_outside_code_is_escaped() {
        assert_eq!(
            render("<img src=x onerror=alert(1)> & co"),
            "<p>&lt;img src=x onerror=alert(1)&gt; &amp; co</p>"
        );
    }

    #[test]
    fn test_bullet_with_no_text_is_empty_item() {
        assert_eq!(render("-"), "<ul>\n<li></li>\n</ul>");
    }

    #[test]
    fn test_whitespace_only_line_by_style() {
        assert_eq!(render("a\n   \nb"), "<p>a</p>\n<p></p>\n<p>b</p>");
        let lenient = RenderOptions {
            bullets: BulletStyle::Lenient,
            ..Default::default()
        };
        assert_eq!(
            render_with_options("a\n   \nb", &lenient),
            "<p>a</p>\n<p></p>\n<p>b</p>"
        );
    }

    #[test]
    fn test_star_bullet_with_trailing_emphasis() {
        assert_eq!(
            render("* one *two*"),
            "<ul>\n<li>one <em>two</em></li>\n</ul>"
        );
    }

    #[test]
    fn test_render_is_idempotent_per_input() {
        let input = "- a\n```py\nprint(1)\n```\n**b**";
        assert_eq!(render(input), render(input));
    }

    #[test]
    fn test_language_class_option() {
        let plain = RenderOptions {
            language_classes: false,
            ..Default::default()
        };
        assert_eq!(
            render("```rust\nlet x = 1;\n```"),
            "<pre><code class=\"language-rust\">let x = 1;</code></pre>"
        );
        assert_eq!(
            render_with_options("```rust\nlet x = 1;\n```", &plain),
            "<pre><code>let x = 1;</code></pre>"
        );
    }
}
