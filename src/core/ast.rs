/// Block structure of one rendered chat message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentAst {
    pub blocks: Vec<BlockNode>,
}

/// Paragraph and list item strings hold inline HTML that is already escaped.
/// Code block bodies are raw and get escaped on output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockNode {
    Paragraph(String),
    List(Vec<String>),
    CodeBlock {
        language: Option<String>,
        code: String,
    },
}
