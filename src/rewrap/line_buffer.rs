//! Line buffer used by [`super::rewrap`].
//!
//! Accumulates words behind a fixed prefix and tracks the running length in
//! characters so the packing loop never rescans the line.

pub(super) struct LineBuffer<'a> {
    prefix: &'a str,
    prefix_len: usize,
    text: String,
    len: usize,
    words: usize,
}

impl<'a> LineBuffer<'a> {
    pub(super) fn new(prefix: &'a str) -> Self {
        Self {
            prefix,
            prefix_len: prefix.chars().count(),
            text: String::new(),
            len: 0,
            words: 0,
        }
    }

    pub(super) fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Length the line would reach if `word_len` more characters were
    /// appended after a separating space.
    pub(super) fn len_with(&self, word_len: usize) -> usize {
        if self.words == 0 {
            self.prefix_len + word_len
        } else {
            self.len + 1 + word_len
        }
    }

    pub(super) fn push_word(&mut self, word: &str, word_len: usize) {
        if self.words == 0 {
            self.text.push_str(self.prefix);
            self.len = self.prefix_len;
        } else {
            self.text.push(' ');
            self.len += 1;
        }
        self.text.push_str(word);
        self.len += word_len;
        self.words += 1;
    }

    pub(super) fn flush_into(&mut self, lines: &mut Vec<String>) {
        if self.words == 0 {
            return;
        }
        lines.push(std::mem::take(&mut self.text));
        self.len = 0;
        self.words = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_word_follows_prefix_without_separator() {
        let mut buf = LineBuffer::new("  # ");
        assert_eq!(buf.len_with(3), 7);
        buf.push_word("one", 3);
        assert_eq!(buf.len_with(3), 11);
        buf.push_word("two", 3);
        let mut lines = Vec::new();
        buf.flush_into(&mut lines);
        assert_eq!(lines, vec!["  # one two".to_string()]);
        assert!(buf.is_empty());
    }

    #[test]
    fn flushing_empty_buffer_is_noop() {
        let mut buf = LineBuffer::new("# ");
        let mut lines = Vec::new();
        buf.flush_into(&mut lines);
        assert!(lines.is_empty());
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let mut buf = LineBuffer::new("# ");
        buf.push_word("héllo", 5);
        assert_eq!(buf.len_with(0), 8);
    }
}
