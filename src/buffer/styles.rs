//! Minimal lexical styling for [`super::MemoryEditor`].
//!
//! Real editors classify text with their own tokenizer. The in-memory editor
//! walks Python-like source token by token so that comments and ordinary
//! string literals are skipped, and only genuine `"""` strings receive the
//! docstring tag. `'''` strings are recognised so their contents cannot open
//! a region, but they keep the default style.

use std::sync::LazyLock;

use regex::Regex;

use crate::profile::StyleTag;

const DOCSTRING_QUOTE: &str = "\"\"\"";

// Alternatives are tried in order at each position, so triple quotes win
// over the single-quoted forms that share their first character.
static TOKEN_RE: LazyLock<Regex> = crate::lazy_regex!(
    r#"(?s)"""(?:[^\\]|\\.?)*?(?:"""|\z)|'''(?:[^\\]|\\.?)*?(?:'''|\z)|#[^\n]*|"(?:[^"\\\n]|\\.?)*"?|'(?:[^'\\\n]|\\.?)*'?"#,
    "python token pattern regex should compile",
);

/// Tags every offset inside a `"""` string with one style.
///
/// A closed region covers its opening delimiter up to, but not including,
/// the offset after the closing delimiter. An unterminated region extends to
/// the end of the document inclusive, so a caret appending to it is inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripleQuoteStyler {
    tag: StyleTag,
}

impl TripleQuoteStyler {
    #[must_use]
    pub fn new(tag: StyleTag) -> Self {
        Self { tag }
    }

    /// Find the docstring regions of `text`.
    pub(crate) fn scan(self, text: &str) -> StyleMap {
        let mut regions = Vec::new();
        let mut byte = 0;
        let mut chars = 0;
        for token in TOKEN_RE.find_iter(text) {
            let body = token.as_str();
            if !body.starts_with(DOCSTRING_QUOTE) {
                continue;
            }
            chars += text[byte..token.start()].chars().count();
            let len = body.chars().count();
            regions.push(Region {
                start: chars,
                end: chars + len,
                closed: len >= 2 * DOCSTRING_QUOTE.len() && body.ends_with(DOCSTRING_QUOTE),
            });
            chars += len;
            byte = token.end();
        }
        StyleMap {
            tag: self.tag,
            regions,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Region {
    start: usize,
    end: usize,
    closed: bool,
}

/// Docstring regions of one version of a document, ordered by offset.
#[derive(Debug, Clone)]
pub(crate) struct StyleMap {
    tag: StyleTag,
    regions: Vec<Region>,
}

impl StyleMap {
    /// Style at the character `offset`.
    pub(crate) fn style_at(&self, offset: usize) -> StyleTag {
        let before = self.regions.partition_point(|region| region.start <= offset);
        match self.regions[..before].last() {
            Some(region) if offset < region.end || (!region.closed && offset == region.end) => {
                self.tag
            }
            _ => StyleTag::DEFAULT,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const DOC: StyleTag = StyleTag(7);

    fn style(text: &str, offset: usize) -> StyleTag {
        TripleQuoteStyler::new(DOC).scan(text).style_at(offset)
    }

    #[rstest]
    #[case("x = 1", 2, false)]
    #[case("\"\"\"doc\"\"\"", 0, true)]
    #[case("\"\"\"doc\"\"\"", 5, true)]
    #[case("\"\"\"doc\"\"\"", 8, true)]
    #[case("\"\"\"doc\"\"\"", 9, false)]
    #[case("\"\"\"open and typing", 18, true)]
    #[case("a \"\"\"b\"\"\" c", 1, false)]
    #[case("a \"\"\"b\"\"\" c", 10, false)]
    #[case("'''doc'''", 4, false)]
    #[case("'''open and typing", 18, false)]
    fn triple_quoted_regions(#[case] text: &str, #[case] offset: usize, #[case] inside: bool) {
        let expected = if inside { DOC } else { StyleTag::DEFAULT };
        assert_eq!(style(text, offset), expected);
    }

    #[rstest]
    #[case("# write \"\"\" to open one\ncode = 1")]
    #[case("mark = '\"\"\"'\ncode = 1")]
    #[case("mark = \"say \\\"\\\"\\\" twice\"\ncode = 1")]
    #[case("sql = '''\nquote \"\"\" inside\n'''\ncode = 1")]
    fn quotes_inside_other_tokens_open_nothing(#[case] text: &str) {
        let end = text.chars().count();
        for offset in 0..=end {
            assert_eq!(style(text, offset), StyleTag::DEFAULT, "offset {offset} of {text:?}");
        }
    }

    #[test]
    fn hash_inside_docstring_is_not_a_comment() {
        let text = "\"\"\"Use # freely.\n\"\"\"\nx = 1";
        assert_eq!(style(text, 10), DOC);
        assert_eq!(style(text, 17), DOC);
        assert_eq!(style(text, text.chars().count()), StyleTag::DEFAULT);
    }

    #[test]
    fn escaped_quotes_do_not_close_docstring() {
        let text = "\"\"\"a \\\"\"\" b\"\"\" c";
        let b = text.find('b').expect("b present");
        assert_eq!(style(text, b), DOC);
        assert_eq!(style(text, text.chars().count()), StyleTag::DEFAULT);
    }

    #[test]
    fn multi_line_docstring_covers_middle_lines() {
        let text = "def f():\n    \"\"\"Summary.\n\n    Body text\n    \"\"\"\nx = 1";
        let body = text.find("Body").expect("body present");
        let body_offset = text[..body].chars().count();
        assert_eq!(style(text, body_offset), DOC);
        assert_eq!(style(text, text.chars().count()), StyleTag::DEFAULT);
        assert_eq!(style(text, 2), StyleTag::DEFAULT);
    }

    #[test]
    fn four_quotes_do_not_close() {
        assert_eq!(style("\"\"\"\"", 4), DOC);
    }

    #[test]
    fn offsets_count_characters() {
        let text = "# héllo\n\"\"\"ünï";
        assert_eq!(style(text, 8), DOC);
        assert_eq!(style(text, 14), DOC);
        assert_eq!(style(text, 7), StyleTag::DEFAULT);
    }
}
