use crate::edit::Edit;
use crate::patch::Hunk;
use crate::text::{TextEdit, TextHunk};

const NO_NEWLINE: &[u8] = b"\\ No newline at end of file\n";

/// Serialization into unified diff text.
pub trait ToPatch {
    fn write_patch(&self, out: &mut Vec<u8>);

    fn to_patch(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.write_patch(&mut out);
        out
    }
}

impl ToPatch for TextEdit {
    fn write_patch(&self, out: &mut Vec<u8>) {
        let (prefix, line) = match self {
            Edit::Match(x, _) => (b' ', x),
            Edit::Delete(x) => (b'-', x),
            Edit::Insert(y) => (b'+', y),
        };
        out.push(prefix);
        out.extend_from_slice(line.as_bytes());
        if !line.has_terminator() {
            out.push(b'\n');
            out.extend_from_slice(NO_NEWLINE);
        }
    }
}

impl ToPatch for TextHunk {
    fn write_patch(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(hunk_header(self).as_bytes());
        out.push(b'\n');
        for edit in &self.edits {
            edit.write_patch(out);
        }
    }
}

impl ToPatch for [TextHunk] {
    fn write_patch(&self, out: &mut Vec<u8>) {
        for hunk in self {
            hunk.write_patch(out);
        }
    }
}

/// `@@ -a,b +c,d @@` over the context-padded spans. An empty range is
/// numbered after the line it follows, as GNU diff does.
pub fn hunk_header<T>(hunk: &Hunk<T>) -> String {
    let x = hunk.span_x();
    let y = hunk.span_y();
    format!(
        "@@ -{} +{} @@",
        range(x.start, x.len()),
        range(y.start, y.len())
    )
}

fn range(start: usize, len: usize) -> String {
    if len == 0 {
        format!("{},0", start)
    } else {
        format!("{},{}", start + 1, len)
    }
}
