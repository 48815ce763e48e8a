//! Line classification and list grouping.

use crate::core::ast::{BlockNode, DocumentAst};
use crate::BulletStyle;
use regex::Regex;
use std::sync::LazyLock;

static STRICT_BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]+(?:\s+|$)").unwrap());
static LENIENT_BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*][\s\-*]*").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind<'a> {
    ListItem(&'a str),
    Text(&'a str),
    Blank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    NotInList,
    InList,
}

fn classify(line: &str, style: BulletStyle) -> LineKind<'_> {
    let bullet = match style {
        BulletStyle::Strict => &*STRICT_BULLET_RE,
        BulletStyle::Lenient => &*LENIENT_BULLET_RE,
    };
    if let Some(marker) = bullet.find(line) {
        return LineKind::ListItem(&line[marker.end()..]);
    }
    if line.trim().is_empty() {
        LineKind::Blank
    } else {
        LineKind::Text(line)
    }
}

/// Builds the block list for one message, one line at a time.
///
/// Consecutive bullet lines share a list; any paragraph or code block closes it.
#[derive(Debug)]
pub struct BlockBuilder {
    style: BulletStyle,
    state: ListState,
    blocks: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new(style: BulletStyle) -> Self {
        Self {
            style,
            state: ListState::NotInList,
            blocks: Vec::new(),
        }
    }

    /// Classifies every line of an already inline-transformed prose segment.
    pub fn push_prose(&mut self, html: &str) {
        for line in html.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            match classify(line, self.style) {
                LineKind::ListItem(item) => self.push_item(item),
                LineKind::Text(text) => self.push_paragraph(text),
                LineKind::Blank => self.push_paragraph(""),
            }
        }
    }

    pub fn push_code(&mut self, language: Option<String>, code: String) {
        self.close_list();
        self.blocks.push(BlockNode::CodeBlock { language, code });
    }

    pub fn finish(mut self) -> DocumentAst {
        self.close_list();
        DocumentAst {
            blocks: self.blocks,
        }
    }

    fn push_item(&mut self, item: &str) {
        if self.state == ListState::InList {
            if let Some(BlockNode::List(items)) = self.blocks.last_mut() {
                items.push(item.to_string());
                return;
            }
        }
        self.blocks.push(BlockNode::List(vec![item.to_string()]));
        self.state = ListState::InList;
    }

    fn push_paragraph(&mut self, text: &str) {
        self.close_list();
        self.blocks.push(BlockNode::Paragraph(text.to_string()));
    }

    fn close_list(&mut self) {
        self.state = ListState::NotInList;
    }
}
