//! Backends registered by [`World::new`](crate::World::new).

mod ntriples;

pub use ntriples::NTriplesFactory;

use crate::error::Result;
use crate::registry::FactoryRegistry;

/// Register every builtin serializer, in default-first order.
pub fn register_builtins(registry: &mut FactoryRegistry) -> Result<()> {
    registry.register(NTriplesFactory::syntax_info(), NTriplesFactory)?;
    Ok(())
}
