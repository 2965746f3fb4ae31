//! Carry the comment marker onto a freshly inserted line.

use log::{debug, trace};

use crate::{
    classify::is_wrappable_comment,
    host::{Host, HostError},
    profile::LanguageProfile,
};

/// Build the replacement for the new line, or `None` to leave it untouched.
///
/// The marker is continued when the line above is a comment and either the
/// line two above is also a comment or the new line already holds text that
/// was pushed past the caret by the newline. The second clause means a single
/// comment line followed by enter in the middle of its text is continued.
///
/// # Examples
///
/// ```
/// use commentwrap::continuation_line;
/// let line = continuation_line("    # first", Some("    # zeroth"), "", "#");
/// assert_eq!(line.as_deref(), Some("    # "));
/// assert_eq!(continuation_line("    # only", None, "", "#"), None);
/// ```
#[must_use]
pub fn continuation_line(
    above: &str,
    two_above: Option<&str>,
    current: &str,
    marker: &str,
) -> Option<String> {
    if !is_wrappable_comment(above, marker) {
        return None;
    }
    let trailing = current.trim();
    let two_above_is_comment = two_above.is_some_and(|line| is_wrappable_comment(line, marker));
    if !two_above_is_comment && trailing.is_empty() {
        return None;
    }
    let indent = &above[..above.len() - above.trim_start().len()];
    Some(format!("{indent}{marker} {trailing}"))
}

/// Continue the comment onto the caret line after a newline was committed.
///
/// Returns `true` when the line was rewritten.
///
/// # Errors
/// Propagates any [`HostError`] from reading or writing the buffer.
pub fn on_newline<H: Host + ?Sized>(
    host: &mut H,
    profile: &LanguageProfile,
) -> Result<bool, HostError> {
    let line = host.line_index_of_offset(host.caret_offset())?;
    let Some(above_index) = line.checked_sub(1) else {
        trace!("newline on first line; nothing to continue");
        return Ok(false);
    };
    let above = host.line_text(above_index)?;
    let two_above = match above_index.checked_sub(1) {
        Some(index) => Some(host.line_text(index)?),
        None => None,
    };
    let current = host.line_text(line)?;

    let Some(replacement) = continuation_line(
        &above,
        two_above.as_deref(),
        &current,
        profile.comment_marker(),
    ) else {
        trace!("line {line} does not continue a comment");
        return Ok(false);
    };

    host.replace_line_text(line, &replacement)?;
    host.move_caret_to_line_end()?;
    debug!("continued comment onto line {line}");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn two_comment_lines_continue_with_empty_remainder() {
        assert_eq!(
            continuation_line("  # b", Some("  # a"), "", "#").as_deref(),
            Some("  # ")
        );
    }

    #[test]
    fn trailing_text_continues_after_single_comment() {
        // Deliberately preserved: one comment line plus carried-over text is
        // enough to continue the marker.
        assert_eq!(
            continuation_line("\t# start of", Some("x = 1"), "  foo  ", "#").as_deref(),
            Some("\t# foo")
        );
        assert_eq!(
            continuation_line("# start of", None, "foo", "#").as_deref(),
            Some("# foo")
        );
    }

    #[rstest]
    #[case("x = 1", Some("# a"), "")]
    #[case("x = 1", Some("# a"), "trailing")]
    #[case("# a", Some("x = 1"), "")]
    #[case("# a", None, "   ")]
    #[case("", Some("# a"), "")]
    fn negative_decisions_leave_line_alone(
        #[case] above: &str,
        #[case] two_above: Option<&str>,
        #[case] current: &str,
    ) {
        assert_eq!(continuation_line(above, two_above, current, "#"), None);
    }

    #[test]
    fn indentation_comes_from_line_above() {
        assert_eq!(
            continuation_line("        // deep", Some("// shallow"), "", "//").as_deref(),
            Some("        // ")
        );
    }

    #[test]
    fn marker_glued_to_text_still_counts_as_comment() {
        assert_eq!(
            continuation_line("#tight", Some("#also"), "", "#").as_deref(),
            Some("# ")
        );
    }
}
