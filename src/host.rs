//! Interface to the host editor.
//!
//! The formatter never owns the buffer. Every read and write goes through
//! [`Host`], which the editor integration implements. Offsets are character
//! offsets into the document and line text never includes the terminator.

use thiserror::Error;

use crate::profile::StyleTag;

/// Failure reported by a host accessor.
///
/// The formatter has no recovery strategy for an inconsistent buffer view,
/// so these errors are propagated to the caller unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("line {line} is out of range (buffer has {line_count} lines)")]
    LineOutOfRange { line: usize, line_count: usize },
    #[error("offset {offset} is out of range (buffer length {len})")]
    OffsetOutOfRange { offset: usize, len: usize },
    #[error("host failure: {0}")]
    Other(String),
}

/// Character-added notification delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key_code: u32,
}

impl KeyEvent {
    pub const NEWLINE: u32 = 10;
    pub const SPACE: u32 = 32;

    #[must_use]
    pub fn new(key_code: u32) -> Self {
        Self { key_code }
    }

    #[must_use]
    pub fn from_char(ch: char) -> Self {
        Self::new(u32::from(ch))
    }

    #[must_use]
    pub fn is_newline(self) -> bool {
        self.key_code == Self::NEWLINE
    }

    /// The typed character, if the key code maps to one.
    #[must_use]
    pub fn as_char(self) -> Option<char> {
        char::from_u32(self.key_code)
    }
}

/// Operations the formatter needs from the editor.
///
/// Implementations must apply writes synchronously: after
/// [`Host::replace_line_text`] returns, subsequent reads observe the change.
pub trait Host {
    /// Name of the file in the active view.
    fn current_filename(&self) -> String;

    /// Caret position as a character offset into the document.
    fn caret_offset(&self) -> usize;

    /// # Errors
    /// Returns [`HostError::OffsetOutOfRange`] past the end of the document.
    fn line_index_of_offset(&self, offset: usize) -> Result<usize, HostError>;

    /// # Errors
    /// Returns [`HostError::LineOutOfRange`] for a missing line.
    fn line_start_offset(&self, line: usize) -> Result<usize, HostError>;

    /// Offset just past the last character of `line`, before its terminator.
    ///
    /// # Errors
    /// Returns [`HostError::LineOutOfRange`] for a missing line.
    fn line_end_offset(&self, line: usize) -> Result<usize, HostError>;

    /// # Errors
    /// Returns [`HostError::LineOutOfRange`] for a missing line.
    fn line_text(&self, line: usize) -> Result<String, HostError>;

    /// Lexical style the host's tokenizer assigns at `offset`.
    ///
    /// # Errors
    /// Returns [`HostError::OffsetOutOfRange`] past the end of the document.
    fn style_at(&self, offset: usize) -> Result<StyleTag, HostError>;

    /// Terminator used when a single line is replaced by several.
    fn line_ending(&self) -> &str;

    /// Replace the content of `line`, keeping its terminator.
    ///
    /// A caret inside the replaced text, or at its end, lands at the start of
    /// the line.
    ///
    /// # Errors
    /// Returns [`HostError::LineOutOfRange`] for a missing line.
    fn replace_line_text(&mut self, line: usize, text: &str) -> Result<(), HostError>;

    /// Insert `text` at the caret and move the caret past it.
    ///
    /// # Errors
    /// Propagates host write failures.
    fn insert_text_at_caret(&mut self, text: &str) -> Result<(), HostError>;

    /// # Errors
    /// Propagates host caret failures.
    fn move_caret_to_line_end(&mut self) -> Result<(), HostError>;

    /// # Errors
    /// Propagates host caret failures.
    fn move_caret_left(&mut self, chars: usize) -> Result<(), HostError>;
}

/// Snapshot of the caret line taken at the start of one handler call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorLineView {
    pub index: usize,
    pub text: String,
    pub caret: usize,
    pub at_line_end: bool,
    pub style_at_caret: StyleTag,
}

impl EditorLineView {
    /// Read the caret line from `host`.
    ///
    /// # Errors
    /// Propagates any [`HostError`] from the underlying queries.
    pub fn capture<H: Host + ?Sized>(host: &H) -> Result<Self, HostError> {
        let caret = host.caret_offset();
        let index = host.line_index_of_offset(caret)?;
        let text = host.line_text(index)?;
        let at_line_end = caret == host.line_end_offset(index)?;
        let style_at_caret = host.style_at(caret)?;
        Ok(Self {
            index,
            text,
            caret,
            at_line_end,
            style_at_caret,
        })
    }
}
