//! Route character-added notifications to the formatter components.
//!
//! [`AutoFormatter::handle`] is the single entry point the host calls for
//! every typed character. It resolves the profile from the active file name,
//! continues comments on newline, and otherwise attempts a docstring wrap
//! followed by a comment wrap. All checks run before the first write, so a
//! handler call either edits the buffer once or not at all.

use log::{debug, trace};

use crate::{
    classify::{WrapKind, is_docstring_context, is_wrappable_comment},
    continuation::on_newline,
    host::{EditorLineView, Host, HostError, KeyEvent},
    profile::{LanguageProfile, ProfileRegistry},
    rewrap::{ParagraphBlock, WrapParams, WrapTrigger, rewrap},
};

/// Result of handling one notification.
///
/// Every variant other than [`Outcome::Continued`] and
/// [`Outcome::Rewrapped`] leaves the buffer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The active file type has no profile.
    Unsupported,
    /// The line did not qualify for formatting.
    NoOp,
    /// The comment marker was carried onto the new line.
    Continued,
    /// The caret line was replaced by `lines` wrapped lines.
    Rewrapped { kind: WrapKind, lines: usize },
}

impl Outcome {
    #[must_use]
    pub fn edited(self) -> bool {
        matches!(self, Self::Continued | Self::Rewrapped { .. })
    }
}

/// A caret line that passed classification for one [`WrapKind`].
#[derive(Debug, Clone)]
pub struct WrapRequest<'a> {
    pub line: EditorLineView,
    pub profile: &'a LanguageProfile,
    pub kind: WrapKind,
}

impl<'a> WrapRequest<'a> {
    /// Classify `line`; `None` when it is not a comment or docstring of `kind`.
    #[must_use]
    pub fn classify(
        line: EditorLineView,
        profile: &'a LanguageProfile,
        kind: WrapKind,
    ) -> Option<Self> {
        let matches = match kind {
            WrapKind::Comment => is_wrappable_comment(&line.text, profile.comment_marker()),
            WrapKind::Docstring => is_docstring_context(line.style_at_caret, profile),
        };
        matches.then_some(Self {
            line,
            profile,
            kind,
        })
    }

    #[must_use]
    pub fn params(&self) -> Option<WrapParams<'a>> {
        WrapParams::for_kind(self.profile, self.kind)
    }

    /// Run the re-wrapper for the key that was just typed.
    #[must_use]
    pub fn rewrap(&self, event: KeyEvent) -> Option<ParagraphBlock> {
        let params = self.params()?;
        let trigger = WrapTrigger::new(self.line.at_line_end, event.as_char());
        rewrap(&self.line.text, trigger, &params)
    }
}

/// Event dispatcher holding the only long-lived state: the profile registry.
#[derive(Debug, Clone)]
pub struct AutoFormatter {
    registry: ProfileRegistry,
}

impl Default for AutoFormatter {
    fn default() -> Self {
        Self::new(ProfileRegistry::builtin())
    }
}

impl AutoFormatter {
    #[must_use]
    pub fn new(registry: ProfileRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn registry(&self) -> &ProfileRegistry {
        &self.registry
    }

    /// Handle one character-added notification.
    ///
    /// # Errors
    /// Propagates any [`HostError`] raised by the host while the line is read
    /// or rewritten.
    pub fn handle<H: Host + ?Sized>(
        &self,
        host: &mut H,
        event: KeyEvent,
    ) -> Result<Outcome, HostError> {
        let filename = host.current_filename();
        let Some(profile) = self.registry.resolve_filename(&filename) else {
            trace!("{filename}: unsupported file type");
            return Ok(Outcome::Unsupported);
        };

        if event.is_newline() {
            return Ok(if on_newline(host, profile)? {
                Outcome::Continued
            } else {
                Outcome::NoOp
            });
        }

        // At most one of these can match: the docstring check keys on the
        // host's style tag, the comment check on the marker prefix.
        let mut outcome = Outcome::NoOp;
        if profile.docstring().is_some()
            && let Some(done) = wrap_caret_line(host, profile, WrapKind::Docstring, event)?
        {
            outcome = done;
        }
        if let Some(done) = wrap_caret_line(host, profile, WrapKind::Comment, event)? {
            outcome = done;
        }
        Ok(outcome)
    }
}

fn wrap_caret_line<H: Host + ?Sized>(
    host: &mut H,
    profile: &LanguageProfile,
    kind: WrapKind,
    event: KeyEvent,
) -> Result<Option<Outcome>, HostError> {
    let view = EditorLineView::capture(host)?;
    let index = view.index;
    let Some(request) = WrapRequest::classify(view, profile, kind) else {
        return Ok(None);
    };
    let Some(block) = request.rewrap(event) else {
        trace!("line {index}: {kind:?} does not need wrapping");
        return Ok(None);
    };

    let text = block.join(host.line_ending());
    host.replace_line_text(index, "")?;
    host.insert_text_at_caret(&text)?;
    host.move_caret_to_line_end()?;
    if block.ends_with_closer()
        && let Some(closer) = request.params().and_then(|p| p.closer)
    {
        host.move_caret_left(closer.chars().count())?;
    }

    let lines = block.lines().len();
    debug!("line {index}: wrapped {kind:?} into {lines} lines");
    Ok(Some(Outcome::Rewrapped { kind, lines }))
}
