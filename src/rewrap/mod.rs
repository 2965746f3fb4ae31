//! Greedy re-wrapping of a single over-long comment or docstring line.
//!
//! [`rewrap`] rebuilds a paragraph from one line: the words are packed onto
//! as many lines as needed, each starting with the original indentation and
//! the marker. Lengths are counted in characters and a line is only split
//! when it is strictly longer than the limit.

use std::num::NonZeroUsize;

use crate::{classify::WrapKind, profile::LanguageProfile};

mod line_buffer;

use line_buffer::LineBuffer;

/// Keystroke context that decides whether a wrap may run at all.
///
/// Wrapping only happens while appending at the end of the line, or when a
/// space is typed in the middle of it. Editing inside a word elsewhere in
/// the line must not reflow text under the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapTrigger {
    pub at_line_end: bool,
    pub typed_space: bool,
}

impl WrapTrigger {
    #[must_use]
    pub fn new(at_line_end: bool, typed: Option<char>) -> Self {
        Self {
            at_line_end,
            typed_space: typed == Some(' '),
        }
    }

    /// Trigger for a caret parked at the end of the line.
    #[must_use]
    pub fn line_end() -> Self {
        Self {
            at_line_end: true,
            typed_space: false,
        }
    }

    fn permits_wrap(self) -> bool {
        self.at_line_end || self.typed_space
    }
}

/// Parameters for one wrap attempt, derived from a profile and a [`WrapKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapParams<'a> {
    pub column_limit: NonZeroUsize,
    /// Marker re-synthesised at the start of every output line. Empty for
    /// docstrings.
    pub marker: &'a str,
    /// Closing delimiter that the caret should stay in front of.
    pub closer: Option<&'a str>,
}

impl<'a> WrapParams<'a> {
    /// Select the parameters for `kind`.
    ///
    /// Returns `None` when the profile has no docstring mode and a docstring
    /// wrap was requested.
    #[must_use]
    pub fn for_kind(profile: &'a LanguageProfile, kind: WrapKind) -> Option<Self> {
        match kind {
            WrapKind::Comment => Some(Self {
                column_limit: profile.comment_column_limit(),
                marker: profile.comment_marker(),
                closer: None,
            }),
            WrapKind::Docstring => profile.docstring().map(|doc| Self {
                column_limit: doc.column_limit,
                marker: doc.marker.as_str(),
                closer: Some(doc.closer.as_str()).filter(|c| !c.is_empty()),
            }),
        }
    }
}

/// Lines produced by [`rewrap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphBlock {
    lines: Vec<String>,
    ends_with_closer: bool,
}

impl ParagraphBlock {
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether the final line ends with the docstring closing delimiter.
    #[must_use]
    pub fn ends_with_closer(&self) -> bool {
        self.ends_with_closer
    }

    /// Join the block with `line_ending` for writing back into the buffer.
    #[must_use]
    pub fn join(&self, line_ending: &str) -> String {
        self.lines.join(line_ending)
    }
}

/// Re-wrap `line` so no output line exceeds `params.column_limit`.
///
/// Returns `None` when nothing should change: the trigger does not permit a
/// wrap, the line already fits, or fewer than two words remain once the
/// marker is removed. A single word longer than the limit is never split; it
/// keeps a line of its own.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
///
/// use commentwrap::{WrapParams, WrapTrigger, rewrap};
///
/// let params = WrapParams {
///     column_limit: NonZeroUsize::new(16).unwrap(),
///     marker: "#",
///     closer: None,
/// };
/// let block = rewrap("  # wrap this comment please", WrapTrigger::line_end(), &params).unwrap();
/// assert_eq!(block.lines(), ["  # wrap this", "  # comment", "  # please"]);
/// ```
#[must_use]
pub fn rewrap(line: &str, trigger: WrapTrigger, params: &WrapParams<'_>) -> Option<ParagraphBlock> {
    if !trigger.permits_wrap() {
        return None;
    }
    let limit = params.column_limit.get();
    if line.trim_end().chars().count() <= limit {
        return None;
    }

    let body = line.trim_start();
    if body.is_empty() {
        return None;
    }
    let indent = &line[..line.len() - body.len()];

    let mut words: Vec<&str> = body.split_whitespace().collect();
    if words.first() == Some(&params.marker) {
        words.remove(0);
    }
    if words.len() <= 1 {
        return None;
    }
    if !params.marker.is_empty()
        && let Some(rest) = words[0].strip_prefix(params.marker)
    {
        words[0] = rest;
    }

    let prefix = if params.marker.is_empty() {
        indent.to_string()
    } else {
        format!("{indent}{} ", params.marker)
    };

    let lines = pack_words(&words, &prefix, limit);
    let ends_with_closer = params
        .closer
        .is_some_and(|closer| lines.last().is_some_and(|last| last.ends_with(closer)));
    Some(ParagraphBlock {
        lines,
        ends_with_closer,
    })
}

fn pack_words(words: &[&str], prefix: &str, limit: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut buf = LineBuffer::new(prefix);
    for word in words {
        let word_len = word.chars().count();
        // An over-long line holding a single word is closed as-is; the word
        // is never split.
        if !buf.is_empty() && buf.len_with(word_len) > limit {
            buf.flush_into(&mut lines);
        }
        buf.push_word(word, word_len);
    }
    buf.flush_into(&mut lines);
    lines
}
