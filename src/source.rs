use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::Error;

/// Split an in-memory document into lines, dropping `\n` and any `\r` before it.
pub fn lines_of(text: &str) -> Vec<&str> {
    text.lines().collect()
}

/// Read a document from disk as a list of lines.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_lines(path: &Path) -> Result<Vec<String>, Error> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read document");

    let text = String::from_utf8_lossy(&bytes);
    Ok(text.lines().map(str::to_string).collect())
}
