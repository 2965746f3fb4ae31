//! Library for wrapping comments and docstrings as they are typed.
//!
//! The host editor delivers every character-added notification to
//! [`AutoFormatter::handle`]. Over-long comment and docstring lines are
//! re-wrapped to the column limit of the file's [`LanguageProfile`], and a
//! newline inside a comment block carries the comment marker onto the new
//! line. All editor access goes through the [`Host`] trait.

#[macro_use]
mod macros;

pub mod binding;
pub mod buffer;
pub mod classify;
pub mod continuation;
pub mod dispatch;
pub mod host;
pub mod io;
pub mod process;
pub mod profile;
pub mod rewrap;
#[doc(hidden)]
pub mod test_utils;

pub use binding::{Binding, NotificationSource, Registration};
pub use buffer::{LineEnding, MemoryEditor, TripleQuoteStyler};
pub use classify::{WrapKind, is_docstring_context, is_wrappable_comment};
pub use continuation::{continuation_line, on_newline};
pub use dispatch::{AutoFormatter, Outcome, WrapRequest};
pub use host::{EditorLineView, Host, HostError, KeyEvent};
pub use io::{RewriteError, format_file, rewrite};
pub use process::{format_lines, format_text};
pub use profile::{DocstringMode, LanguageProfile, ProfileRegistry, StyleTag, extension_of};
pub use rewrap::{ParagraphBlock, WrapParams, WrapTrigger, rewrap};
