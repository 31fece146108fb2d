//! Maps sequence elements to small integer ids so the alignment core only
//! ever compares `usize`s.
//!
//! Ids are handed out in first-seen order, scanning `x` and then `y`. They are
//! only meaningful within one call.
//!
//! # Cost
//!
//! With the default `Hash + Eq` equality the table is a `HashMap` and
//! normalization is O(N) amortized. A caller-supplied predicate cannot be
//! hashed, so every element is compared against each distinct element seen so
//! far: O(N·U) predicate calls where U is the number of distinct elements.
//! For large inputs with many distinct elements this dominates the whole diff.

use std::collections::HashMap;
use std::convert::Infallible;
use std::hash::Hash;

/// Both sequences rewritten as ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub x: Vec<usize>,
    pub y: Vec<usize>,
    /// Number of distinct elements across both sequences.
    pub uniques: usize,
}

pub fn normalize<T: Hash + Eq>(x: &[T], y: &[T]) -> Normalized {
    let mut table: HashMap<&T, usize> = HashMap::with_capacity(x.len() + y.len());
    let mut x_ids = Vec::with_capacity(x.len());
    for e in x {
        let next = table.len();
        x_ids.push(*table.entry(e).or_insert(next));
    }
    let mut y_ids = Vec::with_capacity(y.len());
    for e in y {
        let next = table.len();
        y_ids.push(*table.entry(e).or_insert(next));
    }
    Normalized {
        x: x_ids,
        y: y_ids,
        uniques: table.len(),
    }
}

/// Normalizes with a custom equality. `eq` must be an equivalence relation;
/// it is called as `eq(seen, candidate)`.
pub fn normalize_by<T, F>(x: &[T], y: &[T], mut eq: F) -> Normalized
where
    F: FnMut(&T, &T) -> bool,
{
    try_normalize_by(x, y, |a, b| Ok::<_, Infallible>(eq(a, b)))
        .unwrap_or_else(|never| match never {})
}

/// Like [`normalize_by`] but the predicate may fail. The first error stops
/// normalization and is returned as-is.
pub fn try_normalize_by<T, E, F>(x: &[T], y: &[T], mut eq: F) -> Result<Normalized, E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    let mut uniques: Vec<&T> = Vec::new();
    let mut x_ids = Vec::with_capacity(x.len());
    for e in x {
        x_ids.push(lookup(&mut uniques, e, &mut eq)?);
    }
    let mut y_ids = Vec::with_capacity(y.len());
    for e in y {
        y_ids.push(lookup(&mut uniques, e, &mut eq)?);
    }
    Ok(Normalized {
        x: x_ids,
        y: y_ids,
        uniques: uniques.len(),
    })
}

fn lookup<'a, T, E, F>(uniques: &mut Vec<&'a T>, e: &'a T, eq: &mut F) -> Result<usize, E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    for (id, &seen) in uniques.iter().enumerate() {
        if eq(seen, e)? {
            return Ok(id);
        }
    }
    uniques.push(e);
    Ok(uniques.len() - 1)
}
