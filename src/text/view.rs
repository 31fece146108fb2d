use crate::error::Result;
use bytes::Bytes;
use std::borrow::Cow;
use std::fmt;
use std::ops::Range;

/// Read-only view over text or raw bytes.
///
/// Both construction paths end up in the same representation, so equality,
/// hashing and slicing do not depend on where the data came from. Slicing
/// shares the underlying buffer instead of copying it.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteView(Bytes);

impl ByteView {
    pub fn from_text(text: impl Into<String>) -> Self {
        ByteView(Bytes::from(text.into()))
    }

    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        ByteView(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Checked conversion to `&str`.
    pub fn as_str(&self) -> Result<&str> {
        Ok(std::str::from_utf8(&self.0)?)
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the view ends with a line terminator.
    pub fn has_terminator(&self) -> bool {
        self.0.last() == Some(&b'\n')
    }

    /// The view without its trailing `\n` or `\r\n`.
    pub fn trim_terminator(&self) -> ByteView {
        let mut end = self.0.len();
        if self.has_terminator() {
            end -= 1;
            if end > 0 && self.0[end - 1] == b'\r' {
                end -= 1;
            }
        }
        self.slice(0..end)
    }

    /// Sub-range view sharing the same buffer.
    pub fn slice(&self, range: Range<usize>) -> ByteView {
        ByteView(self.0.slice(range))
    }
}

impl fmt::Debug for ByteView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(&self.0) {
            Ok(text) => fmt::Debug::fmt(text, f),
            Err(_) => fmt::Debug::fmt(&self.0, f),
        }
    }
}

impl fmt::Display for ByteView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl AsRef<[u8]> for ByteView {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<&str> for ByteView {
    fn from(text: &str) -> Self {
        ByteView::from_text(text)
    }
}

impl From<String> for ByteView {
    fn from(text: String) -> Self {
        ByteView::from_text(text)
    }
}

impl From<&[u8]> for ByteView {
    fn from(bytes: &[u8]) -> Self {
        ByteView(Bytes::copy_from_slice(bytes))
    }
}

impl From<Vec<u8>> for ByteView {
    fn from(bytes: Vec<u8>) -> Self {
        ByteView::from_bytes(bytes)
    }
}

impl From<Bytes> for ByteView {
    fn from(bytes: Bytes) -> Self {
        ByteView(bytes)
    }
}
