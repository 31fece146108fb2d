//! Line diffs over UTF-8 text or raw bytes.
//!
//! Every line keeps its terminator, so a line without `\n` (only ever the
//! last one) differs from the same content with one. That is what lets the
//! formatters mark a missing newline and keeps reconstruction byte-exact.

mod lines;
mod view;

pub use lines::{split_lines, Lines};
pub use view::ByteView;

use crate::edit::{self, Edit};
use crate::myers::{self, Alignment};
use crate::normalize;
use crate::options::DiffOptions;
use crate::patch::{self, Hunk};
use tracing::trace;

pub type TextEdit = Edit<ByteView>;
pub type TextHunk = Hunk<ByteView>;

/// Both texts split into lines and aligned.
///
/// This is the result to keep when the missing-terminator flags matter:
/// [`text_edits`] and [`text_hunks`] return only the edits, while
/// `x.missing_terminator` and `y.missing_terminator` say whether each input
/// ended without a newline.
#[derive(Debug, Clone)]
pub struct TextDiff {
    pub x: Lines,
    pub y: Lines,
    pub alignment: Alignment,
}

impl TextDiff {
    pub fn new(x: impl Into<ByteView>, y: impl Into<ByteView>, options: &DiffOptions) -> Self {
        let x = split_lines(&x.into());
        let y = split_lines(&y.into());
        trace!(x_lines = x.lines.len(), y_lines = y.lines.len(), "diffing text");
        let ids = normalize::normalize(&x.lines, &y.lines);
        let alignment = myers::align(&ids.x, &ids.y, options.max_edit_distance);
        TextDiff { x, y, alignment }
    }

    pub fn edits(&self) -> Vec<TextEdit> {
        edit::build(&self.x.lines, &self.y.lines, &self.alignment)
    }

    pub fn hunks(&self, options: &DiffOptions) -> Vec<TextHunk> {
        patch::assemble(&self.x.lines, &self.y.lines, &self.alignment, options)
    }
}

/// Line edit script from `x` to `y`. Build a [`TextDiff`] instead to also
/// get the missing-terminator flags.
///
/// # Examples
///
/// ```
/// use seqdiff::{text_edits, ByteView, Edit};
///
/// let line = |s: &str| ByteView::from(s);
/// let edits = text_edits("a\nb\n", "a\nc\n");
/// assert_eq!(edits[0], Edit::Match(line("a\n"), line("a\n")));
/// assert_eq!(edits[1], Edit::Delete(line("b\n")));
/// assert_eq!(edits[2], Edit::Insert(line("c\n")));
/// ```
pub fn text_edits(x: impl Into<ByteView>, y: impl Into<ByteView>) -> Vec<TextEdit> {
    TextDiff::new(x, y, &DiffOptions::default()).edits()
}

/// Line hunks from `x` to `y`. Equivalent to
/// `TextDiff::new(x, y, options).hunks(options)`, minus the flags on
/// [`TextDiff`].
pub fn text_hunks(
    x: impl Into<ByteView>,
    y: impl Into<ByteView>,
    options: &DiffOptions,
) -> Vec<TextHunk> {
    TextDiff::new(x, y, options).hunks(options)
}
