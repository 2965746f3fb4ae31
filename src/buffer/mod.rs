//! In-memory [`Host`] used by the batch formatter and the tests.
//!
//! [`MemoryEditor`] keeps the document in a [`Rope`] plus a caret and mirrors
//! the editing semantics a Scintilla-style editor offers: offsets count
//! characters, line terminators occupy offsets of their own, and replacing a
//! line pulls a caret inside it back to the line start.

use std::cell::OnceCell;

use ropey::{Rope, RopeSlice};

use crate::{
    host::{Host, HostError, KeyEvent},
    profile::StyleTag,
};

mod styles;

use styles::StyleMap;
pub use styles::TripleQuoteStyler;

/// Line terminator of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }

    /// `CrLf` when `text` contains any CRLF sequence, `Lf` otherwise.
    #[must_use]
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::CrLf
        } else {
            Self::Lf
        }
    }

    /// Rewrite every line break in `text` to this ending.
    fn normalize(self, text: &str) -> String {
        match self {
            Self::Lf => text.to_string(),
            Self::CrLf => text.replace("\r\n", "\n").replace('\n', "\r\n"),
        }
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Number of chars taken by the terminator at the end of `line`.
fn terminator_len(line: RopeSlice<'_>) -> usize {
    let len = line.len_chars();
    if len == 0 || line.char(len - 1) != '\n' {
        0
    } else if len >= 2 && line.char(len - 2) == '\r' {
        2
    } else {
        1
    }
}

/// A document with a caret, editable through [`Host`].
#[derive(Debug, Clone)]
pub struct MemoryEditor {
    filename: String,
    text: Rope,
    line_ending: LineEnding,
    caret: usize,
    styler: Option<TripleQuoteStyler>,
    styles: OnceCell<StyleMap>,
}

impl MemoryEditor {
    /// Create an editor for `filename` holding `text`, caret at the start.
    ///
    /// The line ending is detected from `text`.
    #[must_use]
    pub fn new(filename: &str, text: &str) -> Self {
        Self {
            filename: filename.to_string(),
            text: Rope::from_str(text),
            line_ending: LineEnding::detect(text),
            caret: 0,
            styler: None,
            styles: OnceCell::new(),
        }
    }

    /// Style triple-quoted regions with `styler`.
    #[must_use]
    pub fn with_styler(mut self, styler: TripleQuoteStyler) -> Self {
        self.styler = Some(styler);
        self.styles.take();
        self
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.text.to_string()
    }

    /// Every line without its terminator.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        (0..self.line_count())
            .map(|line| self.line_slice(line).to_string())
            .collect()
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.text.len_lines()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len_chars()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Place the caret at `offset`.
    ///
    /// # Errors
    /// Returns [`HostError::OffsetOutOfRange`] past the end of the document.
    pub fn set_caret(&mut self, offset: usize) -> Result<(), HostError> {
        self.check_offset(offset)?;
        self.caret = offset;
        Ok(())
    }

    /// Insert `ch` at the caret as if typed and return the notification the
    /// editor would deliver. A newline inserts the document's line ending.
    ///
    /// # Errors
    /// Propagates failures from the insertion.
    pub fn type_char(&mut self, ch: char) -> Result<KeyEvent, HostError> {
        let mut buf = [0; 4];
        self.insert_text_at_caret(ch.encode_utf8(&mut buf))?;
        Ok(KeyEvent::from_char(ch))
    }

    fn check_offset(&self, offset: usize) -> Result<(), HostError> {
        let len = self.len();
        if offset > len {
            return Err(HostError::OffsetOutOfRange { offset, len });
        }
        Ok(())
    }

    fn check_line(&self, line: usize) -> Result<(), HostError> {
        let line_count = self.line_count();
        if line >= line_count {
            return Err(HostError::LineOutOfRange { line, line_count });
        }
        Ok(())
    }

    /// End of `line` in chars, excluding its terminator. `line` must exist.
    fn line_end_char(&self, line: usize) -> usize {
        self.text.line_to_char(line + 1) - terminator_len(self.text.line(line))
    }

    /// Text of `line` without its terminator. `line` must exist.
    fn line_slice(&self, line: usize) -> RopeSlice<'_> {
        let start = self.text.line_to_char(line);
        self.text.slice(start..self.line_end_char(line))
    }

    /// Drop the cached styles after the text changed.
    fn edited(&mut self) {
        self.styles.take();
    }
}

impl Host for MemoryEditor {
    fn current_filename(&self) -> String {
        self.filename.clone()
    }

    fn caret_offset(&self) -> usize {
        self.caret
    }

    fn line_index_of_offset(&self, offset: usize) -> Result<usize, HostError> {
        self.check_offset(offset)?;
        // Offsets on the terminator belong to the line it ends.
        Ok(self.text.char_to_line(offset))
    }

    fn line_start_offset(&self, line: usize) -> Result<usize, HostError> {
        self.check_line(line)?;
        Ok(self.text.line_to_char(line))
    }

    fn line_end_offset(&self, line: usize) -> Result<usize, HostError> {
        self.check_line(line)?;
        Ok(self.line_end_char(line))
    }

    fn line_text(&self, line: usize) -> Result<String, HostError> {
        self.check_line(line)?;
        Ok(self.line_slice(line).to_string())
    }

    fn style_at(&self, offset: usize) -> Result<StyleTag, HostError> {
        self.check_offset(offset)?;
        let Some(styler) = self.styler else {
            return Ok(StyleTag::DEFAULT);
        };
        let styles = self
            .styles
            .get_or_init(|| styler.scan(&self.text.to_string()));
        Ok(styles.style_at(offset))
    }

    fn line_ending(&self) -> &str {
        self.line_ending.as_str()
    }

    fn replace_line_text(&mut self, line: usize, text: &str) -> Result<(), HostError> {
        let start = self.line_start_offset(line)?;
        let end = self.line_end_char(line);
        let text = self.line_ending.normalize(text);
        self.text.remove(start..end);
        self.text.insert(start, &text);
        self.edited();
        if (start..=end).contains(&self.caret) {
            self.caret = start;
        } else if self.caret > end {
            self.caret = self.caret - (end - start) + char_len(&text);
        }
        Ok(())
    }

    fn insert_text_at_caret(&mut self, text: &str) -> Result<(), HostError> {
        self.check_offset(self.caret)?;
        let text = self.line_ending.normalize(text);
        self.text.insert(self.caret, &text);
        self.edited();
        self.caret += char_len(&text);
        Ok(())
    }

    fn move_caret_to_line_end(&mut self) -> Result<(), HostError> {
        let line = self.line_index_of_offset(self.caret)?;
        self.caret = self.line_end_char(line);
        Ok(())
    }

    fn move_caret_left(&mut self, chars: usize) -> Result<(), HostError> {
        self.caret = self.caret.saturating_sub(chars);
        Ok(())
    }
}
