//! Backend contract.
//!
//! A syntax is provided by two pieces:
//!
//! - a [`BackendFactory`], registered once per syntax and owned by the
//!   registry; it declares which optional hooks exist and creates per-session
//!   state
//! - a [`SyntaxBackend`], the strongly-typed state of one serializer, driven
//!   through the lifecycle hooks
//!
//! `serialize_statement` and `terminate` are mandatory. `start`, `end` and the
//! two namespace hooks are only called when the factory lists them in
//! [`BackendFactory::hooks`].

use std::io::Write;

use bitflags::bitflags;
use strand_ir::{Namespace, Statement, Uri};

use crate::error::BackendError;
use crate::locator::Locator;
use crate::options::SerializerOptions;

/// Result of a backend hook.
pub type BackendResult<T = ()> = Result<T, BackendError>;

bitflags! {
    /// Optional hooks a backend implements.
    #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
    pub struct Hooks: u8 {
        const START = 1;
        const DECLARE_NAMESPACE = 1 << 1;
        const DECLARE_NAMESPACE_FROM_NAMESPACE = 1 << 2;
        const END = 1 << 3;
    }
}

/// Per-syntax factory held by the registry.
pub trait BackendFactory {
    /// Optional hooks implemented by backends from this factory.
    fn hooks(&self) -> Hooks {
        Hooks::empty()
    }

    /// Create the state for one serializer (the init hook).
    fn create(&self, cx: &InitContext<'_>) -> BackendResult<Box<dyn SyntaxBackend>>;

    /// Called once when the registry is torn down.
    fn finish(&mut self) {}
}

/// Lifecycle hooks of one serializer.
pub trait SyntaxBackend {
    /// Begin a session. Called when [`Hooks::START`] is declared.
    fn start(&mut self, cx: &mut EmitContext<'_>) -> BackendResult {
        let _ = cx;
        Ok(())
    }

    /// Declare a namespace. Called when [`Hooks::DECLARE_NAMESPACE`] is declared.
    fn declare_namespace(
        &mut self,
        cx: &mut EmitContext<'_>,
        uri: &Uri,
        prefix: Option<&str>,
    ) -> BackendResult {
        let _ = (cx, uri, prefix);
        Ok(())
    }

    /// Declare a namespace object. Called when
    /// [`Hooks::DECLARE_NAMESPACE_FROM_NAMESPACE`] is declared.
    fn declare_namespace_from_namespace(
        &mut self,
        cx: &mut EmitContext<'_>,
        namespace: &Namespace,
    ) -> BackendResult {
        let _ = (cx, namespace);
        Ok(())
    }

    /// Write one statement.
    fn serialize_statement(
        &mut self,
        cx: &mut EmitContext<'_>,
        statement: &Statement,
    ) -> BackendResult;

    /// Finish a session. Called when [`Hooks::END`] is declared.
    fn end(&mut self, cx: &mut EmitContext<'_>) -> BackendResult {
        let _ = cx;
        Ok(())
    }

    /// Release backend resources; called exactly once when the serializer
    /// is destroyed.
    fn terminate(&mut self);
}

/// What a factory sees when creating backend state.
#[derive(Debug)]
pub struct InitContext<'a> {
    /// Registered name of the syntax.
    pub syntax: &'a str,
    /// The serializer's options (defaults at construction time).
    pub options: &'a SerializerOptions,
}

/// What a hook sees while a session is running.
pub struct EmitContext<'a> {
    sink: &'a mut dyn Write,
    options: &'a SerializerOptions,
    base_uri: Option<&'a Uri>,
    locator: &'a mut Locator,
}

impl<'a> EmitContext<'a> {
    pub(crate) fn new(
        sink: &'a mut dyn Write,
        options: &'a SerializerOptions,
        base_uri: Option<&'a Uri>,
        locator: &'a mut Locator,
    ) -> Self {
        EmitContext {
            sink,
            options,
            base_uri,
            locator,
        }
    }

    /// The bound sink.
    pub fn sink(&mut self) -> &mut dyn Write {
        &mut *self.sink
    }

    pub fn options(&self) -> &SerializerOptions {
        self.options
    }

    pub fn base_uri(&self) -> Option<&Uri> {
        self.base_uri
    }

    /// Output position, advanced by the backend as it writes.
    pub fn locator(&mut self) -> &mut Locator {
        &mut *self.locator
    }
}
