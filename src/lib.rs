//! Sequence and text differencing built on the Myers O(N·D) shortest edit
//! script search.
//!
//! The pipeline is the same for every input: elements are [`normalize`]d to
//! integer ids, [`myers::align`] marks the positions outside the common
//! subsequence, and the [`edit`] and [`patch`] builders turn those marks into
//! an edit script or context-padded hunks. The [`text`] module feeds lines of
//! UTF-8 text or raw bytes through the same pipeline, and [`format`] renders
//! the result as a unified diff or an HTML table.
//!
//! ```
//! use seqdiff::{html_table, unified, DiffOptions};
//!
//! let old = "title\nbody\n";
//! let new = "title\nnew body\n";
//! let options = DiffOptions::default();
//! assert!(unified(old, new, &options).contains("-body\n+new body\n"));
//! assert!(html_table(old, new, &options).starts_with("<table class=\"diff\">"));
//! ```
//!
//! Every call is independent: no state is shared, so the functions can be
//! used from any number of threads. The search is O(N²) in time and memory on
//! unrelated inputs; set [`DiffOptions::max_edit_distance`] or bound the input
//! size upstream when diffing untrusted data.

pub mod edit;
pub mod error;
pub mod format;
pub mod myers;
pub mod normalize;
pub mod options;
pub mod patch;
pub mod text;

pub use edit::{edits, edits_by, try_edits_by, Edit, Op};
pub use error::{DiffError, Result};
pub use format::{html_table, unified, unified_bytes};
pub use options::DiffOptions;
pub use patch::{apply, hunks, hunks_by, try_hunks_by, Hunk};
pub use text::{text_edits, text_hunks, ByteView, TextEdit, TextHunk};
