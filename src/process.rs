//! Format whole documents by replaying keystrokes.
//!
//! Every line is visited once with the caret parked where typing would
//! trigger a wrap, and the notification is fed through
//! [`AutoFormatter::handle`]. The result is what the document would look like
//! had every line been typed with the formatter bound.

use log::debug;

use crate::{
    buffer::{MemoryEditor, TripleQuoteStyler},
    dispatch::{AutoFormatter, Outcome},
    host::{Host, HostError, KeyEvent},
    profile::LanguageProfile,
};

/// Format `text` as the contents of `filename`.
///
/// Unsupported file types are returned unchanged. Line endings and a trailing
/// newline are preserved.
///
/// # Errors
/// Returns a [`HostError`] if the in-memory editor rejects an edit.
///
/// # Examples
///
/// ```
/// use commentwrap::{AutoFormatter, format_text};
///
/// let text = format!("# {}\nx = 1\n", "word ".repeat(20).trim_end());
/// let out = format_text(&text, "demo.py", &AutoFormatter::default()).unwrap();
/// assert!(out.lines().all(|l| l.len() <= 72));
/// assert!(out.ends_with("x = 1\n"));
/// ```
pub fn format_text(
    text: &str,
    filename: &str,
    formatter: &AutoFormatter,
) -> Result<String, HostError> {
    let Some(profile) = formatter.registry().resolve_filename(filename) else {
        return Ok(text.to_string());
    };
    let mut editor = MemoryEditor::new(filename, text);
    if let Some(doc) = profile.docstring() {
        editor = editor.with_styler(TripleQuoteStyler::new(doc.style));
    }

    let mut index = 0;
    let mut wrapped = 0;
    while index < editor.line_count() {
        let (caret, key) = replay_point(&editor, index, profile)?;
        editor.set_caret(caret)?;
        match formatter.handle(&mut editor, key)? {
            Outcome::Rewrapped { lines, .. } => {
                wrapped += 1;
                index += lines.max(1);
            }
            _ => index += 1,
        }
    }
    debug!("{filename}: wrapped {wrapped} lines");
    Ok(editor.text())
}

/// Format a slice of lines, joining them with `\n`.
///
/// # Errors
/// Returns a [`HostError`] if the in-memory editor rejects an edit.
pub fn format_lines(
    lines: &[String],
    filename: &str,
    formatter: &AutoFormatter,
) -> Result<Vec<String>, HostError> {
    let text = format_text(&lines.join("\n"), filename, formatter)?;
    Ok(text.split('\n').map(str::to_string).collect())
}

/// Caret position and key to replay for `line`.
///
/// Lines ending in a docstring closer are replayed as a space typed just
/// before the closer, since a caret after the closer is outside the
/// docstring. Every other line is replayed as its last character typed at
/// the end of the line.
fn replay_point(
    editor: &MemoryEditor,
    line: usize,
    profile: &LanguageProfile,
) -> Result<(usize, KeyEvent), HostError> {
    let text = editor.line_text(line)?;
    let end = editor.line_end_offset(line)?;
    let closer = profile
        .docstring()
        .map(|doc| doc.closer.as_str())
        .filter(|closer| !closer.is_empty());
    if let Some(closer) = closer
        && text.ends_with(closer)
    {
        return Ok((end - closer.chars().count(), KeyEvent::new(KeyEvent::SPACE)));
    }
    let last = text.chars().last().unwrap_or(' ');
    Ok((end, KeyEvent::from_char(last)))
}
