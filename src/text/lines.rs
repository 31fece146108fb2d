use super::ByteView;

/// A text split into lines, terminators included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lines {
    pub lines: Vec<ByteView>,
    /// The last line has no trailing `\n`.
    pub missing_terminator: bool,
}

impl Lines {
    /// Concatenates the lines back into the original text.
    pub fn join(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.lines.iter().map(ByteView::len).sum());
        for line in &self.lines {
            out.extend_from_slice(line.as_bytes());
        }
        out
    }
}

/// Splits `text` after every `\n`. The pieces share the buffer of `text`.
///
/// Empty input has no lines. Input that does not end in `\n` gets a last
/// line without terminator and `missing_terminator` set.
pub fn split_lines(text: &ByteView) -> Lines {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'\n' {
            lines.push(text.slice(start..i + 1));
            start = i + 1;
        }
    }
    let missing_terminator = start < bytes.len();
    if missing_terminator {
        lines.push(text.slice(start..bytes.len()));
    }
    Lines {
        lines,
        missing_terminator,
    }
}
