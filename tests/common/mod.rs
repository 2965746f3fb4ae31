//! Utility helpers shared across integration tests.

use std::num::NonZeroUsize;

use commentwrap::{AutoFormatter, Host, MemoryEditor, Outcome, ProfileRegistry};

/// Build a `Vec<String>` from a list of string slices.
macro_rules! lines_vec {
    ($($line:expr),* $(,)?) => {
        vec![$($line.to_string()),*]
    };
}

/// Formatter using the built-in profiles with every limit set to `limit`.
pub fn formatter_with_limit(limit: usize) -> AutoFormatter {
    let limit = NonZeroUsize::new(limit).expect("limit must be non-zero");
    AutoFormatter::new(ProfileRegistry::builtin().with_limits(Some(limit), Some(limit)))
}

/// Editor holding `text` with the caret at the end of the document.
pub fn editor_at_end(filename: &str, text: &str) -> MemoryEditor {
    let mut editor = MemoryEditor::new(filename, text);
    let end = editor.len();
    editor.set_caret(end).expect("end of document is a valid caret");
    editor
}

/// Type `text` one character at a time, notifying `formatter` after each.
pub fn type_text(editor: &mut MemoryEditor, formatter: &AutoFormatter, text: &str) -> Vec<Outcome> {
    text.chars()
        .map(|ch| {
            let key = editor.type_char(ch).expect("typing succeeds");
            formatter.handle(&mut *editor, key).expect("handler succeeds")
        })
        .collect()
}

/// Assert wrapped comment expectations.
///
/// Every line starts with `prefix` and stays within `limit` unless it holds a
/// single word.
pub fn assert_wrapped_comment(lines: &[String], prefix: &str, limit: usize) {
    assert!(!lines.is_empty(), "output slice is empty");
    for line in lines {
        assert!(line.starts_with(prefix), "{line:?} lost prefix {prefix:?}");
        let words = line[prefix.len()..].split_whitespace().count();
        assert!(
            line.chars().count() <= limit || words == 1,
            "{line:?} exceeds {limit} columns"
        );
    }
}

/// Text and caret of `editor`, for detecting mutations.
pub fn snapshot(editor: &MemoryEditor) -> (String, usize) {
    (editor.text(), editor.caret_offset())
}
