mod types;
pub use types::*;

use crate::myers::{self, Alignment};
use crate::normalize;
use std::convert::Infallible;
use std::hash::Hash;
use std::ops::Range;

/// Computes the full edit script turning `x` into `y`.
///
/// # Examples
///
/// ```
/// use seqdiff::{edits, Edit};
///
/// let result = edits(&[1, 2, 3], &[1, 3, 4]);
/// assert_eq!(result, vec![
///     Edit::Match(1, 1),
///     Edit::Delete(2),
///     Edit::Match(3, 3),
///     Edit::Insert(4),
/// ]);
/// ```
pub fn edits<T: Hash + Eq + Clone>(x: &[T], y: &[T]) -> Vec<Edit<T>> {
    let ids = normalize::normalize(x, y);
    let alignment = myers::align(&ids.x, &ids.y, None);
    build(x, y, &alignment)
}

/// Edit script under a caller-supplied equality. See [`normalize::normalize_by`]
/// for the cost of custom predicates.
pub fn edits_by<T, F>(x: &[T], y: &[T], mut eq: F) -> Vec<Edit<T>>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    try_edits_by(x, y, |a, b| Ok::<_, Infallible>(eq(a, b)))
        .unwrap_or_else(|never| match never {})
}

/// Edit script under a fallible equality; the first predicate error is
/// returned unchanged.
pub fn try_edits_by<T, E, F>(x: &[T], y: &[T], eq: F) -> Result<Vec<Edit<T>>, E>
where
    T: Clone,
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    let ids = normalize::try_normalize_by(x, y, eq)?;
    let alignment = myers::align(&ids.x, &ids.y, None);
    Ok(build(x, y, &alignment))
}

/// Turns an alignment into the ordered edit script covering both sequences.
pub fn build<T: Clone>(x: &[T], y: &[T], alignment: &Alignment) -> Vec<Edit<T>> {
    build_range(x, y, alignment, 0..x.len(), 0..y.len())
}

/// Builds the edits for a sub-range of both sequences. The ranges must hold
/// the same number of unmodified positions.
///
/// Within each gap between matches, deletions come before insertions.
pub(crate) fn build_range<T: Clone>(
    x: &[T],
    y: &[T],
    alignment: &Alignment,
    x_range: Range<usize>,
    y_range: Range<usize>,
) -> Vec<Edit<T>> {
    let mut edits = Vec::with_capacity(x_range.len() + y_range.len());
    let (mut s, mut t) = (x_range.start, y_range.start);
    while s < x_range.end || t < y_range.end {
        let before = (s, t);
        while s < x_range.end && alignment.x[s] {
            edits.push(Edit::Delete(x[s].clone()));
            s += 1;
        }
        while t < y_range.end && alignment.y[t] {
            edits.push(Edit::Insert(y[t].clone()));
            t += 1;
        }
        while s < x_range.end && t < y_range.end && !alignment.x[s] && !alignment.y[t] {
            edits.push(Edit::Match(x[s].clone(), y[t].clone()));
            s += 1;
            t += 1;
        }
        // Unbalanced ranges: what is left cannot be paired.
        if (s, t) == before {
            break;
        }
    }
    edits
}

/// Rebuilds the old sequence from the Match and Delete edits.
pub fn reconstruct_old<T: Clone>(edits: &[Edit<T>]) -> Vec<T> {
    edits.iter().filter_map(Edit::old_element).cloned().collect()
}

/// Rebuilds the new sequence from the Match and Insert edits.
pub fn reconstruct_new<T: Clone>(edits: &[Edit<T>]) -> Vec<T> {
    edits.iter().filter_map(Edit::new_element).cloned().collect()
}
