//! Parsing pipeline from raw message text to [`DocumentAst`].
//!
//! Stages run in a fixed order: fence extraction, escaping and emphasis on
//! the remaining prose, then line classification.

mod fence;
mod inline;
mod lines;

use crate::core::ast::DocumentAst;
use crate::RenderOptions;

pub use self::fence::{split_fences, Segment};
pub use self::inline::transform_inline;
pub use self::lines::BlockBuilder;

/// Parses chat message text into blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownParser {
    options: RenderOptions,
}

impl MarkdownParser {
    /// Creates a new parser with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Creates a new parser with default options.
    pub fn with_defaults() -> Self {
        Self::new(RenderOptions::default())
    }

    /// Parses `text` into a document. Never fails; malformed markup is kept
    /// as literal text.
    pub fn parse(&self, text: &str) -> DocumentAst {
        let style = self.options.bullets;
        let mut builder = BlockBuilder::new(style);

        for segment in split_fences(text) {
            match segment {
                Segment::Prose(prose) => builder.push_prose(&transform_inline(prose, style)),
                Segment::Code { language, code } => {
                    tracing::trace!(
                        language = language.unwrap_or(""),
                        len = code.len(),
                        "Extracted code block"
                    );
                    builder.push_code(language.map(str::to_owned), code.to_owned());
                }
            }
        }

        let document = builder.finish();
        tracing::debug!(
            input_len = text.len(),
            blocks = document.blocks.len(),
            "Parsed message"
        );
        document
    }
}
