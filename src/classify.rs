//! Decide whether a line qualifies for wrapping.
//!
//! Comment detection is a prefix heuristic rather than a lexer: a string
//! literal that starts a line with the comment marker is treated as a comment
//! too. Docstring detection defers entirely to the host's lexical styling.

use crate::profile::{LanguageProfile, StyleTag};

/// Which kind of text a wrap attempt targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapKind {
    Comment,
    Docstring,
}

/// Return `true` when `line`, ignoring leading whitespace, starts with `marker`.
///
/// # Examples
///
/// ```
/// use commentwrap::is_wrappable_comment;
/// assert!(is_wrappable_comment("    # note", "#"));
/// assert!(!is_wrappable_comment("x = 1  # note", "#"));
/// ```
#[must_use]
pub fn is_wrappable_comment(line: &str, marker: &str) -> bool {
    line.trim_start().starts_with(marker)
}

/// Return `true` when the host styles the caret position as a docstring.
///
/// Profiles without a docstring mode never match.
#[must_use]
pub fn is_docstring_context(style_at_caret: StyleTag, profile: &LanguageProfile) -> bool {
    profile
        .docstring()
        .is_some_and(|doc| doc.style == style_at_caret)
}
