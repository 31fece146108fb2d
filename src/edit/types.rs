/// One step of an edit script.
///
/// `Match` carries the element from both sides: they are equal under the
/// equality used for the diff, not necessarily identical values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Edit<T> {
    Match(T, T),
    Delete(T),
    Insert(T),
}

/// The kind of an [`Edit`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Match,
    Delete,
    Insert,
}

impl<T> Edit<T> {
    pub fn op(&self) -> Op {
        match self {
            Edit::Match(..) => Op::Match,
            Edit::Delete(_) => Op::Delete,
            Edit::Insert(_) => Op::Insert,
        }
    }

    /// The element taken from the old sequence, if any.
    pub fn old_element(&self) -> Option<&T> {
        match self {
            Edit::Match(x, _) | Edit::Delete(x) => Some(x),
            Edit::Insert(_) => None,
        }
    }

    /// The element taken from the new sequence, if any.
    pub fn new_element(&self) -> Option<&T> {
        match self {
            Edit::Match(_, y) | Edit::Insert(y) => Some(y),
            Edit::Delete(_) => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Edit::Match(..))
    }
}
