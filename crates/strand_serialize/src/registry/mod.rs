//! Serializer factory registry.
//!
//! Owns one [`Descriptor`] per registered syntax. Names are unique; aliases
//! are secondary keys. Lookup by name or alias goes through a hash index
//! where the earliest registration claiming a key wins, so an alias can
//! never shadow a name registered before it.
//!
//! Registration is expected to happen once at start-up; the registry has no
//! internal locking.

use rustc_hash::FxHashMap;

use crate::backend::{BackendFactory, BackendResult};
use crate::descriptor::{Descriptor, DescriptorBuilder, SyntaxInfo};
use crate::error::{BackendError, Result, SerializeError};

/// Catalog of registered output syntaxes.
#[derive(Default)]
pub struct FactoryRegistry {
    descriptors: Vec<Descriptor>,
    /// Name or alias -> index into `descriptors`.
    index: FxHashMap<Box<str>, usize>,
}

impl FactoryRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        FactoryRegistry::default()
    }

    /// Register a syntax backed by `factory`.
    pub fn register<F: BackendFactory + 'static>(
        &mut self,
        info: SyntaxInfo,
        factory: F,
    ) -> Result<&Descriptor> {
        self.register_factory(info, |builder| {
            builder.install(factory);
            Ok(())
        })
    }

    /// Register a syntax whose factory is installed by `initializer`.
    ///
    /// Fails with `DuplicateRegistration` if the name is taken. If the
    /// initializer fails or installs no factory, nothing is registered.
    pub fn register_factory<I>(&mut self, info: SyntaxInfo, initializer: I) -> Result<&Descriptor>
    where
        I: FnOnce(&mut DescriptorBuilder<'_>) -> BackendResult,
    {
        tracing::debug!(
            name = info.name(),
            label = info.label(),
            alias = info.alias(),
            mime_type = info.mime_type(),
            "registering serializer"
        );

        if self.descriptors.iter().any(|d| d.name() == info.name()) {
            tracing::error!(name = info.name(), "serializer already registered");
            return Err(SerializeError::DuplicateRegistration {
                name: info.name().to_string(),
            });
        }

        let mut builder = DescriptorBuilder::new(&info);
        let outcome = initializer(&mut builder);
        let factory = match (outcome, builder.into_factory()) {
            (Ok(()), Some(factory)) => factory,
            (Err(source), _) => {
                return Err(SerializeError::RegistrationFailed {
                    name: info.name().to_string(),
                    source,
                });
            }
            (Ok(()), None) => {
                return Err(SerializeError::RegistrationFailed {
                    name: info.name().to_string(),
                    source: BackendError::new("initializer installed no backend"),
                });
            }
        };

        let slot = self.descriptors.len();
        self.index.entry(Box::from(info.name())).or_insert(slot);
        if let Some(alias) = info.alias() {
            self.index.entry(Box::from(alias)).or_insert(slot);
        }
        let descriptor = Descriptor::new(info, factory);
        tracing::debug!(
            name = descriptor.name(),
            hooks = ?descriptor.hooks(),
            "serializer registered"
        );
        self.descriptors.push(descriptor);
        Ok(&self.descriptors[slot])
    }

    /// Find a descriptor by name or alias; `None` picks the first registered.
    pub fn lookup(&self, name: Option<&str>) -> Result<&Descriptor> {
        let Some(name) = name else {
            return self.descriptors.first().ok_or_else(|| {
                tracing::debug!("no (default) serializers registered");
                SerializeError::NotFound { name: None }
            });
        };
        self.index
            .get(name)
            .and_then(|&slot| self.descriptors.get(slot))
            .ok_or_else(|| {
                tracing::debug!(name, "no serializer with this name");
                SerializeError::NotFound {
                    name: Some(name.to_string()),
                }
            })
    }

    /// Public identity of the `index`-th registered syntax.
    pub fn enumerate(&self, index: usize) -> Result<&SyntaxInfo> {
        self.descriptors
            .get(index)
            .map(Descriptor::info)
            .ok_or(SerializeError::IndexOutOfRange {
                index,
                count: self.descriptors.len(),
            })
    }

    /// Whether `name` is a registered name or alias.
    pub fn is_syntax_name(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Registered descriptors, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Descriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Finish every factory and drop all descriptors.
    ///
    /// Safe to call more than once; also runs on drop.
    pub fn teardown(&mut self) {
        if self.descriptors.is_empty() {
            return;
        }
        tracing::debug!(count = self.descriptors.len(), "tearing down serializers");
        for descriptor in &mut self.descriptors {
            descriptor.finish();
        }
        self.descriptors.clear();
        self.index.clear();
    }
}

impl Drop for FactoryRegistry {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for FactoryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactoryRegistry")
            .field(
                "syntaxes",
                &self.descriptors.iter().map(Descriptor::name).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}
