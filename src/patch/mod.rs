mod types;
pub use types::*;

use crate::edit::{self, Edit};
use crate::error::{DiffError, Result};
use crate::myers::{self, Alignment};
use crate::normalize;
use crate::options::DiffOptions;
use std::convert::Infallible;
use std::hash::Hash;
use std::ops::Range;
use tracing::debug;

/// Computes the hunks turning `x` into `y`.
///
/// Identical inputs give no hunks. When one side is empty the result is a
/// single hunk holding only inserts or only deletes.
///
/// # Examples
///
/// ```
/// use seqdiff::{hunks, DiffOptions};
///
/// let x = ['a', 'b', 'c', 'd', 'e'];
/// let y = ['a', 'x', 'c', 'd', 'e'];
/// let result = hunks(&x, &y, &DiffOptions::default());
/// assert_eq!(result.len(), 1);
/// assert_eq!((result[0].pos_x, result[0].end_x), (1, 2));
/// assert_eq!((result[0].pos_y, result[0].end_y), (1, 2));
/// ```
pub fn hunks<T: Hash + Eq + Clone>(x: &[T], y: &[T], options: &DiffOptions) -> Vec<Hunk<T>> {
    let ids = normalize::normalize(x, y);
    let alignment = myers::align(&ids.x, &ids.y, options.max_edit_distance);
    assemble(x, y, &alignment, options)
}

pub fn hunks_by<T, F>(x: &[T], y: &[T], mut eq: F, options: &DiffOptions) -> Vec<Hunk<T>>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    try_hunks_by(x, y, |a, b| Ok::<_, Infallible>(eq(a, b)), options)
        .unwrap_or_else(|never| match never {})
}

/// Hunks under a fallible equality; the first predicate error is returned
/// unchanged.
pub fn try_hunks_by<T, E, F>(
    x: &[T],
    y: &[T],
    eq: F,
    options: &DiffOptions,
) -> std::result::Result<Vec<Hunk<T>>, E>
where
    T: Clone,
    F: FnMut(&T, &T) -> std::result::Result<bool, E>,
{
    let ids = normalize::try_normalize_by(x, y, eq)?;
    let alignment = myers::align(&ids.x, &ids.y, options.max_edit_distance);
    Ok(assemble(x, y, &alignment, options))
}

/// Groups an alignment into context-padded hunks.
///
/// Changes separated by at most `2 * context` unchanged positions share a
/// hunk. With `merge_dense_changes` on, an alignment where more than half of
/// the shorter sequence changed becomes one hunk over both whole sequences;
/// this trades precise hunks for fewer, larger ones on heavily edited input.
pub fn assemble<T: Clone>(
    x: &[T],
    y: &[T],
    alignment: &Alignment,
    options: &DiffOptions,
) -> Vec<Hunk<T>> {
    if alignment.is_unchanged() {
        return vec![];
    }
    let dense = 2 * alignment.changed() > x.len().min(y.len());
    if x.is_empty() || y.is_empty() || (options.merge_dense_changes && dense) {
        debug!(x_len = x.len(), y_len = y.len(), "single hunk over both sequences");
        return vec![Hunk {
            pos_x: 0,
            end_x: x.len(),
            pos_y: 0,
            end_y: y.len(),
            leading: 0,
            trailing: 0,
            edits: edit::build(x, y, alignment),
        }];
    }

    let mut builder = HunkBuilder::new(x, y, alignment, options.context);
    for region in Regions::new(alignment) {
        builder.process(region);
    }
    let hunks = builder.finish();
    debug!(hunks = hunks.len(), context = options.context, "assembled hunks");
    hunks
}

/// A maximal run of modified positions, with the matching ranges on both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Region {
    x: Range<usize>,
    y: Range<usize>,
}

/// Iterates the changed regions of an alignment in order.
struct Regions<'a> {
    alignment: &'a Alignment,
    s: usize,
    t: usize,
}

impl<'a> Regions<'a> {
    fn new(alignment: &'a Alignment) -> Self {
        Regions {
            alignment,
            s: 0,
            t: 0,
        }
    }
}

impl Iterator for Regions<'_> {
    type Item = Region;

    fn next(&mut self) -> Option<Region> {
        let (x, y) = (&self.alignment.x, &self.alignment.y);
        while self.s < x.len() && self.t < y.len() && !x[self.s] && !y[self.t] {
            self.s += 1;
            self.t += 1;
        }
        let (s0, t0) = (self.s, self.t);
        while self.s < x.len() && x[self.s] {
            self.s += 1;
        }
        while self.t < y.len() && y[self.t] {
            self.t += 1;
        }
        if (self.s, self.t) == (s0, t0) {
            return None;
        }
        Some(Region {
            x: s0..self.s,
            y: t0..self.t,
        })
    }
}

struct HunkBuilder<'a, T> {
    x: &'a [T],
    y: &'a [T],
    alignment: &'a Alignment,
    context: usize,
    current: Option<Region>,
    previous_end: usize,
    hunks: Vec<Hunk<T>>,
}

impl<'a, T: Clone> HunkBuilder<'a, T> {
    fn new(x: &'a [T], y: &'a [T], alignment: &'a Alignment, context: usize) -> Self {
        HunkBuilder {
            x,
            y,
            alignment,
            context,
            current: None,
            previous_end: 0,
            hunks: vec![],
        }
    }

    fn process(&mut self, region: Region) {
        match self.current {
            Some(ref mut open) if region.x.start - open.x.end <= 2 * self.context => {
                open.x.end = region.x.end;
                open.y.end = region.y.end;
            }
            _ => {
                if let Some(open) = self.current.take() {
                    self.close(open, region.x.start);
                }
                self.current = Some(region);
            }
        }
    }

    /// Closes `open`; `next_start` is where the following change begins in
    /// `x`, or the end of `x`.
    fn close(&mut self, open: Region, next_start: usize) {
        let leading = self.context.min(open.x.start - self.previous_end);
        let trailing = self.context.min(next_start - open.x.end);
        let edits = edit::build_range(
            self.x,
            self.y,
            self.alignment,
            open.x.start - leading..open.x.end + trailing,
            open.y.start - leading..open.y.end + trailing,
        );
        self.previous_end = open.x.end;
        self.hunks.push(Hunk {
            pos_x: open.x.start,
            end_x: open.x.end,
            pos_y: open.y.start,
            end_y: open.y.end,
            leading,
            trailing,
            edits,
        });
    }

    fn finish(mut self) -> Vec<Hunk<T>> {
        if let Some(open) = self.current.take() {
            let end = self.x.len();
            self.close(open, end);
        }
        self.hunks
    }
}

/// Rebuilds the new sequence from `old` and the hunks of a diff.
///
/// Matched and deleted elements are checked against `old`, so hunks computed
/// for a different sequence are rejected instead of silently misapplied.
pub fn apply<T: PartialEq + Clone>(old: &[T], hunks: &[Hunk<T>]) -> Result<Vec<T>> {
    let mut result = Vec::with_capacity(old.len());
    let mut cursor = 0;

    for hunk in hunks {
        let span = hunk.span_x();
        if span.start < cursor {
            return Err(DiffError::HunkOutOfOrder {
                pos_x: span.start,
                cursor,
            });
        }
        if span.end > old.len() {
            return Err(DiffError::HunkOutOfRange {
                end: span.end,
                len: old.len(),
            });
        }
        result.extend_from_slice(&old[cursor..span.start]);
        cursor = span.start;

        for change in &hunk.edits {
            match change {
                Edit::Match(expected, new) => {
                    check(old, cursor, expected)?;
                    result.push(new.clone());
                    cursor += 1;
                }
                Edit::Delete(expected) => {
                    check(old, cursor, expected)?;
                    cursor += 1;
                }
                Edit::Insert(new) => result.push(new.clone()),
            }
        }
    }

    result.extend_from_slice(&old[cursor.min(old.len())..]);
    Ok(result)
}

fn check<T: PartialEq>(old: &[T], position: usize, expected: &T) -> Result<()> {
    match old.get(position) {
        Some(actual) if actual == expected => Ok(()),
        Some(_) => Err(DiffError::ContextMismatch { position }),
        None => Err(DiffError::HunkOutOfRange {
            end: position + 1,
            len: old.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::Op;
    use proptest::prelude::*;

    fn sparse(context: usize) -> DiffOptions {
        DiffOptions::default()
            .with_context(context)
            .with_dense_merge(false)
    }

    proptest! {
        #[test]
        fn test_all_changes_covered(
            old in prop::collection::vec(0u8..6, 0..20),
            new in prop::collection::vec(0u8..6, 0..20),
            context in 0usize..4,
        ) {
            let full = edit::edits(&old, &new);
            let result = hunks(&old, &new, &sparse(context));

            let changed = |e: &&Edit<u8>| !e.is_match();
            let all_hunk_changes: Vec<Edit<u8>> = result
                .iter()
                .flat_map(|h| h.edits.iter().filter(changed).cloned())
                .collect();
            let expected: Vec<Edit<u8>> = full.iter().filter(changed).cloned().collect();
            prop_assert_eq!(all_hunk_changes, expected);
        }

        #[test]
        fn test_apply_roundtrip(
            old in prop::collection::vec(".*", 0..20usize),
            new in prop::collection::vec(".*", 0..20usize),
            context in 0usize..4,
            dense in any::<bool>(),
        ) {
            let options = DiffOptions::default().with_context(context).with_dense_merge(dense);
            let hunks = hunks(&old, &new, &options);
            prop_assert_eq!(apply(&old, &hunks), Ok(new));
        }

        #[test]
        fn test_hunks_are_ordered_and_disjoint(
            old in prop::collection::vec(0u8..6, 0..30),
            new in prop::collection::vec(0u8..6, 0..30),
            context in 0usize..4,
        ) {
            let result = hunks(&old, &new, &sparse(context));
            for pair in result.windows(2) {
                prop_assert!(pair[0].span_x().end < pair[1].span_x().start);
                prop_assert!(pair[0].span_y().end < pair[1].span_y().start);
            }
            for hunk in &result {
                prop_assert!(hunk.leading <= context && hunk.trailing <= context);
                prop_assert_eq!(
                    edit::reconstruct_old(&hunk.edits),
                    old[hunk.span_x()].to_vec()
                );
                prop_assert_eq!(
                    edit::reconstruct_new(&hunk.edits),
                    new[hunk.span_y()].to_vec()
                );
            }
        }
    }

    #[test]
    fn test_context_window() {
        let x = ['a', 'b', 'c', 'd', 'e'];
        let y = ['a', 'x', 'c', 'd', 'e'];
        let result = hunks(&x, &y, &DiffOptions::default());
        assert_eq!(
            result,
            vec![Hunk {
                pos_x: 1,
                end_x: 2,
                pos_y: 1,
                end_y: 2,
                leading: 1,
                trailing: 3,
                edits: vec![
                    Edit::Match('a', 'a'),
                    Edit::Delete('b'),
                    Edit::Insert('x'),
                    Edit::Match('c', 'c'),
                    Edit::Match('d', 'd'),
                    Edit::Match('e', 'e'),
                ],
            }]
        );
        assert_eq!(result[0].span_x(), 0..5);
    }

    #[test]
    fn test_two_hunks() {
        // two changes far apart, should produce two hunks
        let old = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let new = vec![99, 2, 3, 4, 5, 6, 7, 8, 9, 99];
        let expected_hunks = vec![
            Hunk {
                pos_x: 0,
                end_x: 1,
                pos_y: 0,
                end_y: 1,
                leading: 0,
                trailing: 3,
                edits: vec![
                    Edit::Delete(1),
                    Edit::Insert(99),
                    Edit::Match(2, 2),
                    Edit::Match(3, 3),
                    Edit::Match(4, 4),
                ],
            },
            Hunk {
                pos_x: 9,
                end_x: 10,
                pos_y: 9,
                end_y: 10,
                leading: 3,
                trailing: 0,
                edits: vec![
                    Edit::Match(7, 7),
                    Edit::Match(8, 8),
                    Edit::Match(9, 9),
                    Edit::Delete(10),
                    Edit::Insert(99),
                ],
            },
        ];
        assert_eq!(hunks(&old, &new, &DiffOptions::default()), expected_hunks);
    }

    #[test]
    fn test_nearby_changes_merge() {
        let old = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let new = vec![1, 2, 99, 4, 5, 6, 7, 99, 9, 10];
        let result = hunks(&old, &new, &DiffOptions::default());
        assert_eq!(result.len(), 1);
        let hunk = &result[0];
        assert_eq!((hunk.pos_x, hunk.end_x, hunk.pos_y, hunk.end_y), (2, 8, 2, 8));
        assert_eq!((hunk.leading, hunk.trailing), (2, 2));
        assert_eq!(hunk.edits.len(), 12);
    }

    #[test]
    fn test_zero_context() {
        let old = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let new = vec![1, 2, 99, 4, 5, 6, 7, 99, 9, 10];
        let result = hunks(&old, &new, &sparse(0));
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].edits, vec![Edit::Delete(3), Edit::Insert(99)]);
        assert_eq!(result[1].edits, vec![Edit::Delete(8), Edit::Insert(99)]);
        assert_eq!((result[1].pos_x, result[1].end_x), (7, 8));
    }

    #[test]
    fn test_dense_changes_become_one_hunk() {
        let old = vec![1, 2, 3];
        let new = vec![4, 2, 6];
        let result = hunks(&old, &new, &DiffOptions::default().with_context(0));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].span_x(), 0..3);
        assert_eq!(result[0].span_y(), 0..3);
        let ops: Vec<Op> = result[0].edits.iter().map(Edit::op).collect();
        assert_eq!(
            ops,
            vec![Op::Delete, Op::Insert, Op::Match, Op::Delete, Op::Insert]
        );

        assert_eq!(hunks(&old, &new, &sparse(0)).len(), 2);
    }

    #[test]
    fn test_dense_trigger_is_strict() {
        // 2 * 2 changes == min(4, 4): stays a windowed hunk
        let result = hunks(&[1, 2, 3, 4], &[1, 9, 3, 4], &DiffOptions::default().with_context(0));
        assert_eq!(result.len(), 1);
        let hunk = &result[0];
        assert_eq!((hunk.pos_x, hunk.end_x, hunk.pos_y, hunk.end_y), (1, 2, 1, 2));
        assert_eq!((hunk.leading, hunk.trailing), (0, 0));

        // 2 * 2 changes > min(3, 3)
        let result = hunks(&[1, 2, 3], &[1, 9, 3], &DiffOptions::default().with_context(0));
        assert_eq!(result.len(), 1);
        assert_eq!((result[0].pos_x, result[0].end_x), (0, 3));
        assert_eq!((result[0].pos_y, result[0].end_y), (0, 3));

        // 2 * 3 changes > min(5, 4)
        let result = hunks(&[1, 2, 3, 4, 5], &[1, 9, 3, 4], &DiffOptions::default().with_context(0));
        assert_eq!(result.len(), 1);
        assert_eq!((result[0].pos_x, result[0].end_x), (0, 5));
        assert_eq!((result[0].pos_y, result[0].end_y), (0, 4));
        assert_eq!(result[0].edits.len(), 6);
    }

    #[test]
    fn test_no_changes() {
        let old = vec![1, 2, 3, 4, 5];
        assert_eq!(hunks(&old, &old, &DiffOptions::default()), vec![]);
    }

    #[test]
    fn test_empty_side() {
        let y = vec!["a", "b", "c"];
        let result = hunks(&[], &y, &DiffOptions::default());
        assert_eq!(
            result,
            vec![Hunk {
                pos_x: 0,
                end_x: 0,
                pos_y: 0,
                end_y: 3,
                leading: 0,
                trailing: 0,
                edits: vec![Edit::Insert("a"), Edit::Insert("b"), Edit::Insert("c")],
            }]
        );

        let result = hunks(&y, &[], &DiffOptions::default());
        assert_eq!(result.len(), 1);
        assert_eq!((result[0].end_x, result[0].end_y), (3, 0));
        assert!(result[0].edits.iter().all(|e| e.op() == Op::Delete));

        assert_eq!(hunks::<u8>(&[], &[], &DiffOptions::default()), vec![]);
    }

    #[test]
    fn test_hunks_by_custom_equality() {
        let old = ["Alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta"];
        let new = ["alpha", "BETA", "gamma", "DELTA", "epsilon", "zeta", "eta", "iota"];
        let result = hunks_by(
            &old,
            &new,
            |a, b| a.eq_ignore_ascii_case(b),
            &DiffOptions::default(),
        );
        assert_eq!(result.len(), 1);
        assert_eq!((result[0].pos_x, result[0].end_x), (7, 8));
        assert_eq!(result[0].edits[0], Edit::Match("epsilon", "epsilon"));
    }

    #[test]
    fn test_try_hunks_by_error() {
        let result = try_hunks_by(
            &[1, 2],
            &[3],
            |_, _| Err::<bool, _>("unsupported"),
            &DiffOptions::default(),
        );
        assert_eq!(result, Err("unsupported"));
    }

    #[test]
    fn test_apply_multiple_hunks() {
        let old = vec!["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];
        let new = vec!["X", "b", "c", "d", "e", "f", "g", "h", "i", "Y"];
        let hunks = hunks(&old, &new, &DiffOptions::default());
        assert_eq!(hunks.len(), 2);
        assert_eq!(apply(&old, &hunks), Ok(new));
    }

    #[test]
    fn test_apply_invalid_patch() {
        let old = vec!["a", "b", "c"];
        let bad_hunk = Hunk {
            pos_x: 1,
            end_x: 2,
            pos_y: 1,
            end_y: 2,
            leading: 1,
            trailing: 0,
            edits: vec![
                Edit::Match("x", "x"), // but old[0] is "a", mismatch!
                Edit::Delete("b"),
                Edit::Insert("z"),
            ],
        };
        assert_eq!(
            apply(&old, &[bad_hunk]),
            Err(DiffError::ContextMismatch { position: 0 })
        );
    }

    #[test]
    fn test_apply_out_of_order() {
        let old = vec![1, 2, 3, 4];
        let new = vec![1, 9, 3, 4];
        let hunk = hunks(&old, &new, &sparse(0)).remove(0);
        assert_eq!(
            apply(&old, &[hunk.clone(), hunk]),
            Err(DiffError::HunkOutOfOrder { pos_x: 1, cursor: 2 })
        );
    }

    #[test]
    fn test_apply_out_of_range() {
        let hunk = Hunk {
            pos_x: 2,
            end_x: 5,
            pos_y: 2,
            end_y: 2,
            leading: 0,
            trailing: 0,
            edits: vec![Edit::Delete(3), Edit::Delete(4), Edit::Delete(5)],
        };
        assert_eq!(
            apply(&[1, 2, 3], &[hunk]),
            Err(DiffError::HunkOutOfRange { end: 5, len: 3 })
        );
    }
}
