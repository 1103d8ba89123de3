use std::sync::LazyLock;

use regex::Regex;

static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("inline code regex"));

static LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link regex"));

static BOLD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("bold regex"));

static ITALIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*").expect("italic regex"));

/// Rewrite inline code, links, bold and italic markers into HTML.
///
/// Each substitution runs over the output of the previous one. Code spans go
/// first so their content is not re-read as emphasis, and bold goes before
/// italic so `**` is never taken as two italic markers. Markup produced by an
/// earlier step is not protected: an `*` inside a generated `href` can still
/// be picked up by the emphasis passes.
pub fn transform(text: &str) -> String {
    let text = CODE_REGEX.replace_all(text, "<code>${1}</code>");
    let text = LINK_REGEX.replace_all(&text, "<a href=\"${2}\">${1}</a>");
    let text = BOLD_REGEX.replace_all(&text, "<strong>${1}</strong>");
    let text = ITALIC_REGEX.replace_all(&text, "<em>${1}</em>");
    text.into_owned()
}
