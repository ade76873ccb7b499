//! Strand serializers: a registry of output syntaxes, their option surface,
//! and the lifecycle of a serializer session.
//!
//! # Overview
//!
//! - [`FactoryRegistry`] maps syntax names and aliases to registered
//!   [`Descriptor`]s; a [`World`] owns one and fills it with the builtins.
//! - A [`Serializer`] is created from a descriptor, bound to a sink with
//!   `start`, fed namespaces and statements, and closed with `end`.
//! - Backends implement [`BackendFactory`] and [`SyntaxBackend`]. Optional
//!   hooks are declared with [`Hooks`] and only called when present.
//! - Options are identified by [`OptionId`], described by the static catalog
//!   in [`options`], and stored per serializer in [`SerializerOptions`].
//!
//! ```text
//! let world = World::new()?;
//! let mut out = Vec::new();
//! let mut serializer = world.new_serializer(Some("ntriples"))?;
//! serializer.start_to_buffer(&mut out, None)?;
//! serializer.serialize_statement(&statement)?;
//! serializer.end()?;
//! ```
//!
//! # Tracing
//!
//! Call [`init_tracing`] and set `RUST_LOG=strand_serialize=debug` to see
//! registration and session events.

mod backend;
mod builtins;
mod descriptor;
mod error;
mod locator;
pub mod options;
mod registry;
mod serializer;
mod settings;
mod tracing_setup;
mod world;

pub use backend::{BackendFactory, BackendResult, EmitContext, Hooks, InitContext, SyntaxBackend};
pub use builtins::{register_builtins, NTriplesFactory};
pub use descriptor::{Descriptor, DescriptorBuilder, SyntaxInfo};
pub use error::{BackendError, Hook, Result, SerializeError};
pub use locator::Locator;
pub use options::{OptionArea, OptionDef, OptionId, OptionKind, SerializerOptions};
pub use registry::FactoryRegistry;
pub use serializer::{SessionState, Serializer};
pub use settings::OptionSetting;
pub use tracing_setup::init_tracing;
pub use world::World;

pub use strand_ir::{Namespace, Statement, Term, Uri};
pub use strand_sink::{Sink, SinkBinding, SinkKind};
