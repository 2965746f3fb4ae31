//! Language profiles keyed by file extension.
//!
//! A [`LanguageProfile`] carries everything the formatter needs to know about
//! a language: the comment marker, the column limits, and the optional
//! docstring mode. Nothing outside this module branches on extension names;
//! supporting a new language means adding an entry to the registry.

use std::{collections::HashMap, num::NonZeroUsize, path::Path};

/// Opaque lexical style reported by the host at a buffer offset.
///
/// The numeric payload belongs to the host's tokenizer. The formatter only
/// compares tags for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleTag(pub u32);

impl StyleTag {
    /// Style reported for text the host did not classify.
    pub const DEFAULT: Self = Self(0);
}

/// Optional docstring mode of a language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocstringMode {
    /// Style tag the host assigns to docstring text.
    pub style: StyleTag,
    /// Column limit applied to docstring lines.
    pub column_limit: NonZeroUsize,
    /// Prefix repeated on every wrapped docstring line after the indentation.
    pub marker: String,
    /// Closing delimiter; the caret is parked before it after wrapping.
    pub closer: String,
}

/// Formatting parameters for one file type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageProfile {
    file_extension: String,
    comment_marker: String,
    comment_column_limit: NonZeroUsize,
    docstring: Option<DocstringMode>,
}

impl LanguageProfile {
    /// Create a profile without a docstring mode.
    ///
    /// The extension is stored lowercased and must include the leading dot.
    #[must_use]
    pub fn new(
        file_extension: &str,
        comment_marker: &str,
        comment_column_limit: NonZeroUsize,
    ) -> Self {
        Self {
            file_extension: file_extension.to_lowercase(),
            comment_marker: comment_marker.to_string(),
            comment_column_limit,
            docstring: None,
        }
    }

    /// Attach a docstring mode to the profile.
    #[must_use]
    pub fn with_docstring(mut self, docstring: DocstringMode) -> Self {
        self.docstring = Some(docstring);
        self
    }

    /// Return a copy of the profile with a different comment limit.
    #[must_use]
    pub fn with_comment_limit(mut self, limit: NonZeroUsize) -> Self {
        self.comment_column_limit = limit;
        self
    }

    /// Return a copy of the profile with a different docstring limit.
    ///
    /// Profiles without a docstring mode are returned unchanged.
    #[must_use]
    pub fn with_docstring_limit(mut self, limit: NonZeroUsize) -> Self {
        if let Some(docstring) = self.docstring.as_mut() {
            docstring.column_limit = limit;
        }
        self
    }

    #[must_use]
    pub fn file_extension(&self) -> &str {
        &self.file_extension
    }

    #[must_use]
    pub fn comment_marker(&self) -> &str {
        &self.comment_marker
    }

    #[must_use]
    pub fn comment_column_limit(&self) -> NonZeroUsize {
        self.comment_column_limit
    }

    #[must_use]
    pub fn docstring(&self) -> Option<&DocstringMode> {
        self.docstring.as_ref()
    }
}

/// Extract the lowercased extension of `filename`, including the leading dot.
///
/// Dotfiles such as `.bashrc` have no extension, matching the usual
/// `splitext` convention.
///
/// # Examples
///
/// ```
/// use commentwrap::extension_of;
/// assert_eq!(extension_of("src/Main.PY").as_deref(), Some(".py"));
/// assert_eq!(extension_of(".bashrc"), None);
/// ```
#[must_use]
pub fn extension_of(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
}

/// Static table of [`LanguageProfile`]s looked up by extension.
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: HashMap<String, LanguageProfile>,
}

const PYTHON_DOCSTRING_STYLE: StyleTag = StyleTag(7);
const DEFAULT_LIMIT: NonZeroUsize = NonZeroUsize::new(72).unwrap();

impl ProfileRegistry {
    /// An empty registry; every lookup reports the file as unsupported.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in profiles for Python and C.
    #[must_use]
    pub fn builtin() -> Self {
        let python = LanguageProfile::new(".py", "#", DEFAULT_LIMIT).with_docstring(DocstringMode {
            style: PYTHON_DOCSTRING_STYLE,
            column_limit: DEFAULT_LIMIT,
            marker: String::new(),
            closer: "\"\"\"".to_string(),
        });
        let c = LanguageProfile::new(".c", "//", DEFAULT_LIMIT);
        [python, c].into_iter().collect()
    }

    /// Add or replace the profile for its extension.
    pub fn insert(&mut self, profile: LanguageProfile) {
        self.profiles
            .insert(profile.file_extension().to_string(), profile);
    }

    /// Look up a profile by extension, ignoring case.
    ///
    /// Returns `None` for unsupported file types; callers treat that as a
    /// silent no-op.
    #[must_use]
    pub fn resolve(&self, file_extension: &str) -> Option<&LanguageProfile> {
        self.profiles.get(&file_extension.to_lowercase())
    }

    /// Resolve the profile for a file name.
    #[must_use]
    pub fn resolve_filename(&self, filename: &str) -> Option<&LanguageProfile> {
        extension_of(filename).and_then(|ext| self.resolve(&ext))
    }

    /// Override the column limits of every profile.
    #[must_use]
    pub fn with_limits(
        self,
        comment_limit: Option<NonZeroUsize>,
        docstring_limit: Option<NonZeroUsize>,
    ) -> Self {
        self.profiles
            .into_values()
            .map(|mut profile| {
                if let Some(limit) = comment_limit {
                    profile = profile.with_comment_limit(limit);
                }
                if let Some(limit) = docstring_limit {
                    profile = profile.with_docstring_limit(limit);
                }
                profile
            })
            .collect()
    }
}

impl FromIterator<LanguageProfile> for ProfileRegistry {
    fn from_iter<I: IntoIterator<Item = LanguageProfile>>(iter: I) -> Self {
        let mut registry = Self::empty();
        for profile in iter {
            registry.insert(profile);
        }
        registry
    }
}
