//! Side-by-side friendly HTML table for embedding in a page.
//!
//! Every hunk is its own `<tbody>`, opened by a header row. Each edit is one
//! row with the old and new line numbers, the operation as both a class and a
//! `data-op` attribute, and the escaped line without its terminator. The first
//! and last row of every run of unchanged lines carry `diff-block-start` and
//! `diff-block-end` so a stylesheet can collapse long runs.

use std::fmt::{self, Write};

use super::unified::hunk_header;
use crate::edit::{Edit, Op};
use crate::text::TextHunk;

pub fn format_html(hunks: &[TextHunk]) -> String {
    if hunks.is_empty() {
        return String::new();
    }
    HtmlTable(hunks).to_string()
}

/// Renders hunks as a table through [`fmt::Display`]. Unlike [`format_html`],
/// an empty slice still renders the empty table.
pub struct HtmlTable<'a>(pub &'a [TextHunk]);

impl fmt::Display for HtmlTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<table class=\"diff\">\n")?;
        for hunk in self.0 {
            write_hunk(f, hunk)?;
        }
        f.write_str("</table>\n")
    }
}

fn write_hunk<W: Write>(out: &mut W, hunk: &TextHunk) -> fmt::Result {
    out.write_str("<tbody class=\"diff-hunk\">\n")?;
    writeln!(
        out,
        "<tr class=\"diff-header\"><td colspan=\"3\">{}</td></tr>",
        hunk_header(hunk)
    )?;

    let mut line_x = hunk.span_x().start + 1;
    let mut line_y = hunk.span_y().start + 1;
    for (i, edit) in hunk.edits.iter().enumerate() {
        let (number_x, number_y) = match edit {
            Edit::Match(..) => (Some(line_x), Some(line_y)),
            Edit::Delete(_) => (Some(line_x), None),
            Edit::Insert(_) => (None, Some(line_y)),
        };
        if number_x.is_some() {
            line_x += 1;
        }
        if number_y.is_some() {
            line_y += 1;
        }

        let mut classes = vec![op_class(edit.op())];
        if edit.is_match() {
            if i == 0 || !hunk.edits[i - 1].is_match() {
                classes.push("diff-block-start");
            }
            if !matches!(hunk.edits.get(i + 1), Some(next) if next.is_match()) {
                classes.push("diff-block-end");
            }
        }
        let line = match edit {
            Edit::Match(x, _) | Edit::Delete(x) => x,
            Edit::Insert(y) => y,
        };
        if !line.has_terminator() {
            classes.push("diff-no-newline");
        }

        writeln!(
            out,
            "<tr class=\"{}\" data-op=\"{}\"><td class=\"diff-line-x\">{}</td><td class=\"diff-line-y\">{}</td><td class=\"diff-text\">{}</td></tr>",
            classes.join(" "),
            op_name(edit.op()),
            LineNumber(number_x),
            LineNumber(number_y),
            escape(&line.trim_terminator().to_string_lossy()),
        )?;
    }
    out.write_str("</tbody>\n")
}

fn op_name(op: Op) -> &'static str {
    match op {
        Op::Match => "match",
        Op::Delete => "delete",
        Op::Insert => "insert",
    }
}

fn op_class(op: Op) -> &'static str {
    match op {
        Op::Match => "diff-match",
        Op::Delete => "diff-delete",
        Op::Insert => "diff-insert",
    }
}

struct LineNumber(Option<usize>);

impl fmt::Display for LineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(n) => write!(f, "{}", n),
            None => Ok(()),
        }
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
