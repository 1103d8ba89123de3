mod block;
mod config;
mod error;
mod html;
mod inline;
mod parser;
mod source;

pub use block::{Block, List};
pub use config::{Config, RenderConfig};
pub use error::Error;
pub use inline::transform;
pub use parser::{parse, parse_code_block, parse_heading, parse_list, parse_paragraph};
pub use source::{lines_of, read_lines};

use std::path::Path;

/// Render blocks to HTML using the compiled default config.
pub fn render(blocks: &[Block]) -> String {
    render_with_config(blocks, &Config::compiled().render)
}

/// Render blocks to HTML with custom render settings.
pub fn render_with_config(blocks: &[Block], config: &RenderConfig) -> String {
    html::blocks_to_html(blocks, config)
}

/// Convert markdown to HTML using default config.
pub fn markdown_to_html(markdown: &str) -> String {
    markdown_to_html_with_config(markdown, Config::compiled())
}

/// Convert markdown to HTML with custom config.
pub fn markdown_to_html_with_config(markdown: &str, config: &Config) -> String {
    let blocks = parse(&lines_of(markdown));
    render_with_config(&blocks, &config.render)
}

/// Read a markdown file and convert it to HTML.
///
/// The file is decoded as UTF-8; invalid byte sequences become U+FFFD, so
/// non-UTF-8 bytes are not preserved in the output.
pub fn convert_file(path: &Path, config: &Config) -> Result<String, Error> {
    let lines = read_lines(path)?;
    let blocks = parse(&lines);
    Ok(render_with_config(&blocks, &config.render))
}
