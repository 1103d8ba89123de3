use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::block::{Block, List};
use crate::inline::transform;

static ORDERED_ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\. ").expect("ordered item regex"));

const FENCE: &str = "```";

/// The structural marker a trimmed line starts with, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Heading,
    Fence,
    UnorderedItem,
    OrderedItem,
}

impl Marker {
    /// Classify a trimmed line. Order matters: a line like `#- x` is a heading.
    fn of(line: &str) -> Option<Self> {
        if line.starts_with('#') {
            Some(Marker::Heading)
        } else if line.starts_with(FENCE) {
            Some(Marker::Fence)
        } else if line.starts_with("- ") || line.starts_with("* ") {
            Some(Marker::UnorderedItem)
        } else if ORDERED_ITEM_REGEX.is_match(line) {
            Some(Marker::OrderedItem)
        } else {
            None
        }
    }
}

/// Parse document lines into a list of blocks
pub fn parse<S: AsRef<str>>(lines: &[S]) -> Vec<Block> {
    let lines: Vec<&str> = lines.iter().map(AsRef::as_ref).collect();
    let mut blocks = Vec::new();
    let mut cursor = 0;

    while cursor < lines.len() {
        let rest = &lines[cursor..];
        let line = rest[0].trim();

        if line.is_empty() {
            cursor += 1;
            continue;
        }

        let (block, consumed) = match Marker::of(line) {
            Some(Marker::Heading) => parse_heading(rest),
            Some(Marker::Fence) => parse_code_block(rest),
            Some(Marker::UnorderedItem | Marker::OrderedItem) => parse_list(rest),
            None => parse_paragraph(rest),
        };

        if let Some(block) = block {
            trace!(line = cursor + 1, consumed, ?block, "parsed block");
            blocks.push(block);
        }
        cursor += consumed.max(1);
    }

    debug!(lines = lines.len(), blocks = blocks.len(), "parsed document");
    blocks
}

/// Parse a heading from the first line. Always consumes exactly one line.
pub fn parse_heading(lines: &[&str]) -> (Option<Block>, usize) {
    let Some(first) = lines.first() else {
        return (None, 0);
    };
    let line = first.trim();
    let text = line.trim_start_matches('#');
    let level = line.len() - text.len();

    let block = Block::Heading {
        level,
        text: transform(text.trim()),
    };
    (Some(block), 1)
}

/// Parse a fenced code block opened by the first line.
///
/// Body lines are kept verbatim. The closing fence is consumed but not kept;
/// without one the block runs to the end of the input.
pub fn parse_code_block(lines: &[&str]) -> (Option<Block>, usize) {
    let Some(first) = lines.first() else {
        return (None, 0);
    };
    let tag = first.trim().strip_prefix(FENCE).unwrap_or_default().trim();
    let language = (!tag.is_empty()).then(|| tag.to_string());

    let body = &lines[1..];
    let (code_lines, consumed) = match body.iter().position(|line| line.trim() == FENCE) {
        Some(close) => (&body[..close], close + 2),
        None => (body, lines.len()),
    };

    let block = Block::CodeBlock {
        language,
        code: code_lines.join("\n"),
    };
    (Some(block), consumed)
}

/// Parse a run of list items of the same kind as the first line.
///
/// Blank lines between items are consumed without ending the list. The run
/// stops before the first line that is not an item of the same kind; that
/// line is left for the caller.
pub fn parse_list(lines: &[&str]) -> (Option<Block>, usize) {
    let Some(first) = lines.first() else {
        return (None, 0);
    };
    let ordered = ORDERED_ITEM_REGEX.is_match(first.trim());
    let mut items = Vec::new();
    let mut consumed = 0;

    for raw in lines {
        let line = raw.trim();
        if line.is_empty() {
            consumed += 1;
            continue;
        }

        let item = match Marker::of(line) {
            Some(Marker::UnorderedItem) if !ordered => &line[2..],
            Some(Marker::OrderedItem) if ordered => match ORDERED_ITEM_REGEX.find(line) {
                Some(marker) => &line[marker.end()..],
                None => break,
            },
            _ => break,
        };
        items.push(transform(item));
        consumed += 1;
    }

    (Some(Block::List(List { ordered, items })), consumed)
}

/// Parse a paragraph: consecutive lines up to a blank line or a line that
/// opens another block, trimmed and joined with single spaces.
pub fn parse_paragraph(lines: &[&str]) -> (Option<Block>, usize) {
    let paragraph_lines: Vec<&str> = lines
        .iter()
        .map(|line| line.trim())
        .take_while(|line| !line.is_empty() && Marker::of(line).is_none())
        .collect();

    if paragraph_lines.is_empty() {
        return (None, 1);
    }

    let consumed = paragraph_lines.len();
    let block = Block::Paragraph {
        text: transform(&paragraph_lines.join(" ")),
    };
    (Some(block), consumed)
}
