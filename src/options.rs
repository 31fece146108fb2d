use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTEXT: usize = 3;

/// Knobs shared by the hunk and text entry points.
///
/// Deserializable so a host can keep them in its own configuration file;
/// missing fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Unchanged elements kept around each change. Zero is allowed.
    pub context: usize,
    /// Upper bound on the edit distance explored by the Myers search.
    ///
    /// Past it the engine stops searching and reports everything between the
    /// common prefix and suffix as one delete+insert block. `None` searches
    /// until the shortest script is found, which is O(N²) on unrelated inputs.
    pub max_edit_distance: Option<usize>,
    /// Emit one hunk covering both sequences when more than half of the
    /// shorter one changed, instead of many small fragments.
    pub merge_dense_changes: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions {
            context: DEFAULT_CONTEXT,
            max_edit_distance: None,
            merge_dense_changes: true,
        }
    }
}

impl DiffOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(mut self, context: usize) -> Self {
        self.context = context;
        self
    }

    pub fn with_max_edit_distance(mut self, max: usize) -> Self {
        self.max_edit_distance = Some(max);
        self
    }

    pub fn with_dense_merge(mut self, enabled: bool) -> Self {
        self.merge_dense_changes = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = DiffOptions::default();
        assert_eq!(options.context, 3);
        assert_eq!(options.max_edit_distance, None);
        assert!(options.merge_dense_changes);
    }

    #[test]
    fn test_partial_config() {
        let options: DiffOptions = serde_json::from_str(r#"{"context": 0}"#).unwrap();
        assert_eq!(options, DiffOptions::default().with_context(0));
    }

    #[test]
    fn test_full_config() {
        let json = r#"{"context": 5, "max_edit_distance": 100, "merge_dense_changes": false}"#;
        let options: DiffOptions = serde_json::from_str(json).unwrap();
        assert_eq!(
            options,
            DiffOptions::new()
                .with_context(5)
                .with_max_edit_distance(100)
                .with_dense_merge(false)
        );
    }
}
