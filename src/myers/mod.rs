//! Shortest edit script search over the edit graph (Myers, O(N·D)).
//!
//! The search is iterative: the furthest-reaching point of every diagonal is
//! kept in a flat array indexed by diagonal offset and each round is appended
//! to an arena, so large edit distances never grow the call stack.

pub mod types;
pub use types::*;

use tracing::{debug, trace, warn};

/// Furthest-reaching x per diagonal `k = x - y`, indexed by `k + offset`.
struct V {
    data: Vec<usize>,
    offset: isize,
}

impl V {
    fn new(size: usize) -> Self {
        V {
            data: vec![0; 2 * size + 2],
            offset: size as isize,
        }
    }

    fn get(&self, k: isize) -> usize {
        self.data[(k + self.offset) as usize]
    }

    fn set(&mut self, k: isize, val: usize) {
        self.data[(k + self.offset) as usize] = val;
    }

    fn round(&self, d: isize) -> &[usize] {
        let lo = (self.offset - d) as usize;
        let hi = (self.offset + d) as usize;
        &self.data[lo..=hi]
    }
}

/// Every finished round of the search. Round `d` covers diagonals `-d..=d`
/// and starts at offset `d * d`.
#[derive(Default)]
struct Trace {
    data: Vec<usize>,
}

impl Trace {
    fn push(&mut self, v: &V, d: isize) {
        self.data.extend_from_slice(v.round(d));
    }

    fn get(&self, d: isize, k: isize) -> usize {
        self.data[(d * d + k + d) as usize]
    }
}

/// Whether the point on diagonal `k` in round `d` is reached by a vertical
/// step from `k + 1` rather than a horizontal step from `k - 1`. Equal reach
/// goes to the horizontal step.
fn steps_down(k: isize, d: isize, reach: impl Fn(isize) -> usize) -> bool {
    k == -d || (k != d && reach(k - 1) < reach(k + 1))
}

/// Aligns `x` against `y`, marking the positions outside the common
/// subsequence.
///
/// With `max_edit_distance` set, the search gives up once the distance
/// exceeds it: the common prefix and suffix are kept and everything between
/// them is reported as deleted from `x` and inserted into `y`.
///
/// # Examples
///
/// ```
/// use seqdiff::myers::align;
///
/// let alignment = align(&[1, 2, 3], &[1, 3, 4], None);
/// assert_eq!(alignment.x, vec![false, true, false]);
/// assert_eq!(alignment.y, vec![false, false, true]);
/// ```
pub fn align<T: Eq>(x: &[T], y: &[T], max_edit_distance: Option<usize>) -> Alignment {
    let mut alignment = Alignment::new(x.len(), y.len());
    if x.is_empty() || y.is_empty() {
        alignment.x.fill(true);
        alignment.y.fill(true);
        return alignment;
    }

    trace!(x_len = x.len(), y_len = y.len(), "searching edit graph");
    let limit = max_edit_distance.unwrap_or(usize::MAX);
    // `y` is laid out along the horizontal axis of the search. Together with
    // the tie rule in `steps_down` this picks one canonical script among the
    // shortest ones.
    match shortest_edit(y, x, &mut alignment.y, &mut alignment.x, limit) {
        Some(distance) => debug!(distance, "shortest edit script found"),
        None => {
            warn!(limit, "edit distance limit exceeded, reporting one replaced block");
            let prefix = x.iter().zip(y).take_while(|(a, b)| a == b).count();
            let suffix = x[prefix..]
                .iter()
                .rev()
                .zip(y[prefix..].iter().rev())
                .take_while(|(a, b)| a == b)
                .count();
            alignment.x[prefix..x.len() - suffix].fill(true);
            alignment.y[prefix..y.len() - suffix].fill(true);
        }
    }
    alignment
}

/// Runs the forward search with `a` horizontal and `b` vertical. Horizontal
/// steps mark `a_mod`, vertical steps mark `b_mod`. Returns the edit distance,
/// or `None` when it is larger than `limit`.
fn shortest_edit<T: Eq>(
    a: &[T],
    b: &[T],
    a_mod: &mut [bool],
    b_mod: &mut [bool],
    limit: usize,
) -> Option<usize> {
    let n = a.len();
    let m = b.len();
    let maxi = n + m;
    let mut v = V::new(maxi);
    let mut trace = Trace::default();

    for d in 0..=limit.min(maxi) as isize {
        for k in (-d..=d).step_by(2) {
            let mut x = if steps_down(k, d, |k| v.get(k)) {
                v.get(k + 1)
            } else {
                v.get(k - 1) + 1
            };
            let mut y = (x as isize - k) as usize;
            while x < n && y < m && a[x] == b[y] {
                x += 1;
                y += 1;
            }
            v.set(k, x);
            if x >= n && y >= m {
                traceback(&trace, n, m, d, a_mod, b_mod);
                return Some(d as usize);
            }
        }
        trace.push(&v, d);
    }
    None
}

/// Walks from `(n, m)` back to the origin, one edit per round. Snakes are
/// skipped over since matched positions stay unmarked.
fn traceback(
    trace: &Trace,
    n: usize,
    m: usize,
    distance: isize,
    a_mod: &mut [bool],
    b_mod: &mut [bool],
) {
    let mut x = n as isize;
    let mut y = m as isize;
    for d in (1..=distance).rev() {
        let k = x - y;
        let down = steps_down(k, d, |k| trace.get(d - 1, k));
        let prev_k = if down { k + 1 } else { k - 1 };
        let prev_x = trace.get(d - 1, prev_k) as isize;
        let prev_y = prev_x - prev_k;
        if down {
            b_mod[prev_y as usize] = true;
        } else {
            a_mod[prev_x as usize] = true;
        }
        x = prev_x;
        y = prev_y;
    }
}
