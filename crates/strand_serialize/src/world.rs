//! Library context owning the serializer registry.

use crate::builtins::register_builtins;
use crate::error::Result;
use crate::registry::FactoryRegistry;
use crate::serializer::Serializer;

/// Owns the serializer registry for its lifetime.
///
/// Serializers borrow the world, so it cannot be torn down while any of
/// them is alive.
#[derive(Debug, Default)]
pub struct World {
    serializers: FactoryRegistry,
}

impl World {
    /// Create a world with the builtin serializers registered.
    pub fn new() -> Result<Self> {
        let mut world = World::empty();
        tracing::debug!("registering builtin serializers");
        register_builtins(&mut world.serializers)?;
        tracing::debug!(count = world.serializers.len(), "builtin serializers registered");
        Ok(world)
    }

    /// Create a world with no serializers registered.
    pub fn empty() -> Self {
        World::default()
    }

    pub fn serializers(&self) -> &FactoryRegistry {
        &self.serializers
    }

    /// Mutable registry, for registering additional syntaxes.
    pub fn serializers_mut(&mut self) -> &mut FactoryRegistry {
        &mut self.serializers
    }

    /// Create a serializer for `name`, or the default syntax.
    pub fn new_serializer<'s>(&self, name: Option<&str>) -> Result<Serializer<'_, 's>> {
        Serializer::new(&self.serializers, name)
    }

    /// Tear down the registry. Idempotent; also runs on drop.
    pub fn teardown(&mut self) {
        self.serializers.teardown();
    }
}
