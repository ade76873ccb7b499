//! Registered syntax descriptors.

use std::fmt;

use crate::backend::{BackendFactory, Hooks};

/// Public identity of an output syntax.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyntaxInfo {
    name: String,
    label: String,
    mime_type: Option<String>,
    alias: Option<String>,
    uri: Option<String>,
}

impl SyntaxInfo {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        SyntaxInfo {
            name: name.into(),
            label: label.into(),
            mime_type: None,
            alias: None,
            uri: None,
        }
    }

    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Secondary lookup key.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// URI identifying the syntax itself.
    #[must_use]
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Unique registry key.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }
}

/// A registered syntax: identity plus the factory that creates backends.
pub struct Descriptor {
    info: SyntaxInfo,
    hooks: Hooks,
    factory: Box<dyn BackendFactory>,
}

impl Descriptor {
    pub(crate) fn new(info: SyntaxInfo, factory: Box<dyn BackendFactory>) -> Self {
        let hooks = factory.hooks();
        Descriptor {
            info,
            hooks,
            factory,
        }
    }

    pub fn info(&self) -> &SyntaxInfo {
        &self.info
    }

    pub fn name(&self) -> &str {
        self.info.name()
    }

    /// Optional hooks, captured from the factory at registration.
    pub fn hooks(&self) -> Hooks {
        self.hooks
    }

    /// Whether `key` is this descriptor's name or alias.
    pub fn matches(&self, key: &str) -> bool {
        self.info.name() == key || self.info.alias() == Some(key)
    }

    pub(crate) fn factory(&self) -> &dyn BackendFactory {
        self.factory.as_ref()
    }

    pub(crate) fn finish(&mut self) {
        self.factory.finish();
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("info", &self.info)
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}

/// Handle given to a registration initializer.
///
/// The initializer inspects the syntax identity and installs the factory.
/// A registration whose initializer installs nothing fails.
pub struct DescriptorBuilder<'a> {
    info: &'a SyntaxInfo,
    factory: Option<Box<dyn BackendFactory>>,
}

impl<'a> DescriptorBuilder<'a> {
    pub(crate) fn new(info: &'a SyntaxInfo) -> Self {
        DescriptorBuilder {
            info,
            factory: None,
        }
    }

    pub fn info(&self) -> &SyntaxInfo {
        self.info
    }

    /// Install the factory, replacing any installed earlier.
    pub fn install<F: BackendFactory + 'static>(&mut self, factory: F) {
        self.factory = Some(Box::new(factory));
    }

    pub(crate) fn into_factory(self) -> Option<Box<dyn BackendFactory>> {
        self.factory
    }
}
