use crate::core::ast::{BlockNode, DocumentAst};
use crate::render::{escape_html, escape_html_attr, Renderer};

/// Serializes a [`DocumentAst`] into the markup inserted into a message bubble.
#[derive(Debug, Clone, Copy)]
pub struct HtmlRenderer {
    language_classes: bool,
}

impl HtmlRenderer {
    pub fn new(language_classes: bool) -> Self {
        Self { language_classes }
    }

    fn render_code(&self, language: Option<&str>, code: &str) -> String {
        match language {
            Some(lang) if self.language_classes => format!(
                "<pre><code class=\"language-{}\">{}</code></pre>",
                escape_html_attr(lang),
                escape_html(code)
            ),
            _ => format!("<pre><code>{}</code></pre>", escape_html(code)),
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, document: &DocumentAst) -> String {
        let mut lines = Vec::with_capacity(document.blocks.len());

        for block in &document.blocks {
            match block {
                BlockNode::Paragraph(html) => lines.push(format!("<p>{}</p>", html)),
                BlockNode::List(items) => {
                    lines.push("<ul>".to_string());
                    for item in items {
                        lines.push(format!("<li>{}</li>", item));
                    }
                    lines.push("</ul>".to_string());
                }
                BlockNode::CodeBlock { language, code } => {
                    lines.push(self.render_code(language.as_deref(), code));
                }
            }
        }

        lines.join("\n")
    }
}
