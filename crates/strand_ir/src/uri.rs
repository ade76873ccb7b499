//! Owned URI strings.

use std::fmt;
use std::path::Path;

/// An owned URI string.
///
/// No validation is performed beyond what the constructors state; the
/// serializer copies these around as base URIs and namespace names, and
/// backends decide how to render them.
#[derive(Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uri(String);

impl Uri {
    /// Create a URI from any string-like value.
    pub fn new(uri: impl Into<String>) -> Self {
        Uri(uri.into())
    }

    /// Derive a `file:` URI from a filesystem path.
    ///
    /// Relative paths are resolved against the current directory first.
    /// Returns `None` if the path cannot be made absolute or has no URI form.
    pub fn from_file_path(path: &Path) -> Option<Self> {
        let absolute = std::path::absolute(path).ok()?;
        let url = url::Url::from_file_path(absolute).ok()?;
        Some(Uri(String::from(url)))
    }

    /// The URI as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the URI string in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the URI string is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Uri {
    fn from(s: &str) -> Self {
        Uri(s.to_owned())
    }
}

impl From<String> for Uri {
    fn from(s: String) -> Self {
        Uri(s)
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
