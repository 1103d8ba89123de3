use crate::block::{Block, List};
use crate::config::RenderConfig;

/// Convert blocks to HTML, one element per line
pub fn blocks_to_html(blocks: &[Block], config: &RenderConfig) -> String {
    let mut out = String::new();

    for block in blocks {
        emit_block(block, config, &mut out);
        out.push_str(&config.line_terminator);
    }

    out
}

fn emit_block(block: &Block, config: &RenderConfig, out: &mut String) {
    match block {
        Block::Heading { level, text } => {
            out.push_str(&format!("<h{level}>{text}</h{level}>"));
        }
        Block::Paragraph { text } => {
            out.push_str("<p>");
            out.push_str(text);
            out.push_str("</p>");
        }
        Block::List(list) => {
            list_to_html(list, out);
        }
        Block::CodeBlock { language, code } => {
            out.push_str("<pre><code");
            if let Some(lang) = language {
                out.push_str(" class=\"");
                out.push_str(&config.language_class_prefix);
                out.push_str(lang);
                out.push('"');
            }
            out.push('>');
            out.push_str(code);
            out.push_str("</code></pre>");
        }
        Block::Link { text, url } => {
            out.push_str(&format!("<a href=\"{url}\">{text}</a>"));
        }
        Block::InlineCode { code } => {
            out.push_str("<code>");
            out.push_str(code);
            out.push_str("</code>");
        }
    }
}

fn list_to_html(list: &List, out: &mut String) {
    let tag = if list.ordered { "ol" } else { "ul" };

    out.push_str(&format!("<{tag}>"));
    for item in &list.items {
        out.push_str("<li>");
        out.push_str(item);
        out.push_str("</li>");
    }
    out.push_str(&format!("</{tag}>"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{markdown_to_html, render};
    use pretty_assertions::assert_eq;

    #[test]
    fn heading() {
        assert_eq!(markdown_to_html("### Title"), "<h3>Title</h3>\n");
    }

    #[test]
    fn heading_level_is_not_clamped() {
        let blocks = [Block::Heading {
            level: 7,
            text: "Deep".to_string(),
        }];
        assert_eq!(render(&blocks), "<h7>Deep</h7>\n");
    }

    #[test]
    fn paragraph() {
        assert_eq!(
            markdown_to_html("line one\nline two\n"),
            "<p>line one line two</p>\n"
        );
    }

    #[test]
    fn unordered_list() {
        assert_eq!(markdown_to_html("- a\n- b"), "<ul><li>a</li><li>b</li></ul>\n");
    }

    #[test]
    fn ordered_list() {
        assert_eq!(
            markdown_to_html("1. one\n2. two"),
            "<ol><li>one</li><li>two</li></ol>\n"
        );
    }

    #[test]
    fn empty_list() {
        let blocks = [Block::List(List {
            ordered: false,
            items: Vec::new(),
        })];
        assert_eq!(render(&blocks), "<ul></ul>\n");
    }

    #[test]
    fn code_block_with_language() {
        assert_eq!(
            markdown_to_html("```go\nx := 1\n```"),
            "<pre><code class=\"language-go\">x := 1</code></pre>\n"
        );
    }

    #[test]
    fn code_block_without_language() {
        assert_eq!(
            markdown_to_html("```\na\nb"),
            "<pre><code>a\nb</code></pre>\n"
        );
    }

    #[test]
    fn content_is_not_escaped() {
        assert_eq!(
            markdown_to_html("<b>&amp;</b>\n\n```\n<script>\n```"),
            "<p><b>&amp;</b></p>\n<pre><code><script></code></pre>\n"
        );
    }

    #[test]
    fn standalone_link_and_inline_code() {
        let blocks = [
            Block::Link {
                text: "home".to_string(),
                url: "/".to_string(),
            },
            Block::InlineCode {
                code: "x".to_string(),
            },
        ];
        assert_eq!(render(&blocks), "<a href=\"/\">home</a>\n<code>x</code>\n");
    }

    #[test]
    fn custom_config() {
        let config = RenderConfig {
            line_terminator: "\r\n".to_string(),
            language_class_prefix: "lang-".to_string(),
        };
        let blocks = [
            Block::Paragraph {
                text: "p".to_string(),
            },
            Block::CodeBlock {
                language: Some("rs".to_string()),
                code: "fn".to_string(),
            },
        ];
        assert_eq!(
            blocks_to_html(&blocks, &config),
            "<p>p</p>\r\n<pre><code class=\"lang-rs\">fn</code></pre>\r\n"
        );
    }

    #[test]
    fn one_line_per_block() {
        let markdown = "# A\n\ntext\nmore\n\n- x\n\n1. y\n```\ncode\n\nstill code\n```\n## B";
        let blocks = crate::parse(&crate::lines_of(markdown));
        let html = render(&blocks);

        assert_eq!(blocks.len(), 6);
        assert_eq!(html.matches('\n').count() - 2, blocks.len());
        assert!(html.ends_with("<h2>B</h2>\n"));
    }

    #[test]
    fn empty_document() {
        assert_eq!(markdown_to_html(""), "");
        assert_eq!(markdown_to_html("\n\n  \n"), "");
    }
}
