mod escape;
mod html;

use crate::core::ast::DocumentAst;

pub use escape::{escape_html, escape_html_attr};
pub use html::HtmlRenderer;

pub trait Renderer {
    fn render(&self, document: &DocumentAst) -> String;
}
