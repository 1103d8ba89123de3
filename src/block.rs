/// A list (ordered or unordered) whose items are already inline-processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub ordered: bool,
    pub items: Vec<String>,
}

/// Block-level elements parsed from Markdown.
///
/// Text fields of headings, paragraphs and list items hold the output of
/// the inline transformer, so they already contain HTML fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        level: usize,
        text: String,
    },
    Paragraph {
        text: String,
    },
    List(List),
    CodeBlock {
        language: Option<String>,
        /// Raw lines joined with `\n`, never inline-processed
        code: String,
    },
    /// Not produced by the parser; renders as a standalone anchor.
    Link {
        text: String,
        url: String,
    },
    /// Not produced by the parser; renders as a standalone `<code>`.
    InlineCode {
        code: String,
    },
}
