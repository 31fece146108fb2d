/// One flag per input position, `true` where the position is not part of the
/// common subsequence.
pub type ModifiedVector = Vec<bool>;

/// Result of the Myers search: which positions of `x` were deleted and which
/// positions of `y` were inserted. Everything else matches, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alignment {
    pub x: ModifiedVector,
    pub y: ModifiedVector,
}

impl Alignment {
    pub fn new(x_len: usize, y_len: usize) -> Self {
        Alignment {
            x: vec![false; x_len],
            y: vec![false; y_len],
        }
    }

    /// Deleted plus inserted positions.
    pub fn changed(&self) -> usize {
        self.x.iter().chain(&self.y).filter(|m| **m).count()
    }

    pub fn is_unchanged(&self) -> bool {
        !self.x.iter().chain(&self.y).any(|m| *m)
    }
}
