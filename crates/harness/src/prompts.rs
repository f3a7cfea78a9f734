//! Prompt set loading.

use std::fs;
use std::path::Path;

/// Load prompts from a newline-delimited text file.
///
/// Each line is trimmed of surrounding whitespace; blank lines are
/// discarded; order is preserved. A missing or unreadable file is reported
/// as a diagnostic and yields an empty vector, so one bad prompt file never
/// aborts the whole benchmark run.
pub fn load_prompts(path: impl AsRef<Path>) -> Vec<String> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read prompt file");
            return Vec::new();
        }
    };

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
