mod html;
mod unified;

pub use html::{format_html, HtmlTable};
pub use unified::{hunk_header, ToPatch};

use crate::options::DiffOptions;
use crate::text::{text_hunks, ByteView};

/// Unified diff of two texts, byte-exact.
pub fn unified_bytes(
    x: impl Into<ByteView>,
    y: impl Into<ByteView>,
    options: &DiffOptions,
) -> Vec<u8> {
    text_hunks(x, y, options).to_patch()
}

/// Unified diff of two texts. Identical inputs give an empty string.
///
/// Lossless whenever both inputs are UTF-8; invalid sequences in byte input
/// are replaced with U+FFFD. Use [`unified_bytes`] to keep them.
///
/// # Examples
///
/// ```
/// use seqdiff::{unified, DiffOptions};
///
/// let options = DiffOptions::default();
/// let patch = unified("line1\nline2\nline3", "line1\nmodified\nline3", &options);
/// assert_eq!(
///     patch,
///     "@@ -1,3 +1,3 @@\n line1\n-line2\n+modified\n line3\n\\ No newline at end of file\n"
/// );
/// ```
pub fn unified(
    x: impl Into<ByteView>,
    y: impl Into<ByteView>,
    options: &DiffOptions,
) -> String {
    match String::from_utf8(unified_bytes(x, y, options)) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

/// HTML table fragment for two texts. Identical inputs give an empty string.
pub fn html_table(
    x: impl Into<ByteView>,
    y: impl Into<ByteView>,
    options: &DiffOptions,
) -> String {
    format_html(&text_hunks(x, y, options))
}
