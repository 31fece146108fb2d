use crate::edit::Edit;
use std::ops::Range;

/// A group of changes with the unchanged elements around it.
///
/// `pos_x..end_x` and `pos_y..end_y` delimit the changed span, from the first
/// to the last modified position. `edits` also carries `leading` context
/// matches before that span and `trailing` ones after it, so the edits cover
/// [`span_x`](Hunk::span_x) and [`span_y`](Hunk::span_y).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<T> {
    pub pos_x: usize,
    pub end_x: usize,
    pub pos_y: usize,
    pub end_y: usize,
    pub leading: usize,
    pub trailing: usize,
    pub edits: Vec<Edit<T>>,
}

impl<T> Hunk<T> {
    /// Range of the old sequence covered by `edits`, context included.
    pub fn span_x(&self) -> Range<usize> {
        self.pos_x - self.leading..self.end_x + self.trailing
    }

    /// Range of the new sequence covered by `edits`, context included.
    pub fn span_y(&self) -> Range<usize> {
        self.pos_y - self.leading..self.end_y + self.trailing
    }
}
