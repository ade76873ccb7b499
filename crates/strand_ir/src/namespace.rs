//! Namespace declarations.

use crate::Uri;

/// A namespace URI bound to an optional prefix.
///
/// An empty prefix is stored as `None` (the default namespace).
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Namespace {
    uri: Uri,
    prefix: Option<String>,
}

impl Namespace {
    /// Create a namespace declaration.
    pub fn new(uri: impl Into<Uri>, prefix: Option<&str>) -> Self {
        Namespace {
            uri: uri.into(),
            prefix: prefix.filter(|p| !p.is_empty()).map(str::to_owned),
        }
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }
}
