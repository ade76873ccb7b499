//! Serializer sessions.
//!
//! A [`Serializer`] drives one backend through its lifecycle:
//!
//! ```text
//! new ──► Constructed ──start──► Started ──end──► Ended ──start──► Started ...
//!                                  │  ▲
//!                                  └──┘ declare_namespace / serialize_statement
//! ```
//!
//! Exactly one sink is bound between `start` and `end`. `end` always releases
//! an owned sink, even when the backend's end hook fails. Dropping the
//! serializer (or calling [`Serializer::destroy`]) terminates the backend
//! from any state.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use strand_ir::{Namespace, Statement, Uri};
use strand_sink::{Sink, SinkBinding};

use crate::backend::{EmitContext, Hooks, InitContext, SyntaxBackend};
use crate::descriptor::Descriptor;
use crate::error::{Hook, Result, SerializeError};
use crate::locator::Locator;
use crate::options::{OptionId, SerializerOptions};
use crate::registry::FactoryRegistry;
use crate::settings::OptionSetting;

/// Lifecycle state of a serializer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SessionState {
    /// Constructed; no sink has been bound yet.
    Constructed,
    /// A sink is bound.
    Started,
    /// The last session ended; the serializer may start again.
    Ended,
}

enum NamespaceDecl<'a> {
    Parts(&'a Uri, Option<&'a str>),
    Object(&'a Namespace),
}

/// One serializer bound to a registered syntax.
///
/// `'w` borrows the registry that owns the descriptor; `'s` bounds the
/// caller-provided sinks (streams, buffers, handles).
pub struct Serializer<'w, 's> {
    descriptor: &'w Descriptor,
    backend: Box<dyn SyntaxBackend>,
    options: SerializerOptions,
    base_uri: Option<Uri>,
    locator: Locator,
    sink: Option<Sink<'s>>,
    state: SessionState,
}

impl<'w, 's> Serializer<'w, 's> {
    /// Create a serializer for `name` (name or alias), or the first
    /// registered syntax when `name` is `None`.
    ///
    /// Options start at their defaults before the backend is initialized.
    pub fn new(registry: &'w FactoryRegistry, name: Option<&str>) -> Result<Self> {
        let descriptor = registry.lookup(name)?;
        let options = SerializerOptions::default();
        let cx = InitContext {
            syntax: descriptor.name(),
            options: &options,
        };
        let backend = descriptor.factory().create(&cx).map_err(|source| {
            SerializeError::InitFailure {
                syntax: descriptor.name().to_string(),
                source,
            }
        })?;
        tracing::debug!(syntax = descriptor.name(), "serializer created");
        Ok(Serializer {
            descriptor,
            backend,
            options,
            base_uri: None,
            locator: Locator::default(),
            sink: None,
            state: SessionState::Constructed,
        })
    }

    /// Bind a sink and begin a session.
    ///
    /// A `Path` binding derives the base URI from the path and ignores
    /// `base_uri`; other bindings copy `base_uri`. If the sink cannot be
    /// opened nothing changes. If the backend's start hook fails, the new
    /// sink is discarded (a memory buffer is not published) and the state,
    /// base URI and locator are restored.
    pub fn start(&mut self, binding: SinkBinding<'s>, base_uri: Option<&Uri>) -> Result<()> {
        if self.sink.is_some() {
            return Err(SerializeError::SinkAlreadyBound {
                syntax: self.syntax_name().to_string(),
            });
        }

        let target = binding.describe();
        let base_uri = match binding.path() {
            Some(path) => Some(Uri::from_file_path(path).ok_or_else(|| {
                SerializeError::SinkOpen {
                    target: target.clone(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        "path has no file URI form",
                    ),
                }
            })?),
            None => base_uri.cloned(),
        };
        let sink = Sink::open(binding).map_err(|source| SerializeError::SinkOpen {
            target: target.clone(),
            source,
        })?;

        let previous_state = self.state;
        let previous_base_uri = std::mem::replace(&mut self.base_uri, base_uri);
        let previous_locator =
            std::mem::replace(&mut self.locator, Locator::reset(self.base_uri.clone()));
        let sink = self.sink.insert(sink);
        self.state = SessionState::Started;
        tracing::debug!(
            syntax = self.descriptor.name(),
            %target,
            base_uri = self.base_uri.as_ref().map(Uri::as_str),
            "serialization started"
        );

        if !self.descriptor.hooks().contains(Hooks::START) {
            return Ok(());
        }
        let mut cx = EmitContext::new(
            sink,
            &self.options,
            self.base_uri.as_ref(),
            &mut self.locator,
        );
        if let Err(source) = self.backend.start(&mut cx) {
            if let Some(sink) = self.sink.take() {
                if let Err(err) = sink.discard() {
                    tracing::warn!(%err, "failed to release sink after start failure");
                }
            }
            self.state = previous_state;
            self.base_uri = previous_base_uri;
            self.locator = previous_locator;
            return Err(self.hook_error(Hook::Start, source));
        }
        Ok(())
    }

    /// Start writing to a caller-owned stream.
    pub fn start_to_stream(
        &mut self,
        stream: &'s mut dyn Write,
        base_uri: Option<&Uri>,
    ) -> Result<()> {
        self.start(SinkBinding::Stream(stream), base_uri)
    }

    /// Start writing to a new file at `path`.
    pub fn start_to_path(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        self.start(SinkBinding::Path(path.into()), None)
    }

    /// Start writing to memory; `dest` receives the output when the session ends.
    pub fn start_to_buffer(
        &mut self,
        dest: &'s mut Vec<u8>,
        base_uri: Option<&Uri>,
    ) -> Result<()> {
        self.start(SinkBinding::Buffer(dest), base_uri)
    }

    /// Start writing to an open file, which is left open at end.
    pub fn start_to_handle(&mut self, file: &'s File, base_uri: Option<&Uri>) -> Result<()> {
        self.start(SinkBinding::Handle(file), base_uri)
    }

    /// Declare a namespace URI with an optional prefix (`""` means none).
    ///
    /// Falls back to the backend's namespace-object hook when it has no
    /// URI/prefix hook.
    pub fn declare_namespace(&mut self, uri: &Uri, prefix: Option<&str>) -> Result<()> {
        let prefix = prefix.filter(|p| !p.is_empty());
        let hooks = self.descriptor.hooks();
        if hooks.contains(Hooks::DECLARE_NAMESPACE) {
            self.emit_namespace(NamespaceDecl::Parts(uri, prefix))
        } else if hooks.contains(Hooks::DECLARE_NAMESPACE_FROM_NAMESPACE) {
            let namespace = Namespace::new(uri.clone(), prefix);
            self.emit_namespace(NamespaceDecl::Object(&namespace))
        } else {
            Err(self.not_supported())
        }
    }

    /// Declare a namespace object.
    ///
    /// Prefers the backend's namespace-object hook, otherwise uses the
    /// URI/prefix hook.
    pub fn declare_namespace_from(&mut self, namespace: &Namespace) -> Result<()> {
        let hooks = self.descriptor.hooks();
        if hooks.contains(Hooks::DECLARE_NAMESPACE_FROM_NAMESPACE) {
            self.emit_namespace(NamespaceDecl::Object(namespace))
        } else if hooks.contains(Hooks::DECLARE_NAMESPACE) {
            self.emit_namespace(NamespaceDecl::Parts(namespace.uri(), namespace.prefix()))
        } else {
            Err(self.not_supported())
        }
    }

    fn emit_namespace(&mut self, decl: NamespaceDecl<'_>) -> Result<()> {
        let Some(sink) = self.sink.as_mut() else {
            return Err(self.no_active_sink());
        };
        let mut cx = EmitContext::new(
            sink,
            &self.options,
            self.base_uri.as_ref(),
            &mut self.locator,
        );
        let (hook, result) = match decl {
            NamespaceDecl::Parts(uri, prefix) => (
                Hook::DeclareNamespace,
                self.backend.declare_namespace(&mut cx, uri, prefix),
            ),
            NamespaceDecl::Object(namespace) => (
                Hook::DeclareNamespaceFromNamespace,
                self.backend.declare_namespace_from_namespace(&mut cx, namespace),
            ),
        };
        result.map_err(|source| self.hook_error(hook, source))
    }

    /// Write one statement to the bound sink.
    pub fn serialize_statement(&mut self, statement: &Statement) -> Result<()> {
        let Some(sink) = self.sink.as_mut() else {
            return Err(self.no_active_sink());
        };
        tracing::trace!(syntax = self.descriptor.name(), ?statement, "serialize statement");
        let mut cx = EmitContext::new(
            sink,
            &self.options,
            self.base_uri.as_ref(),
            &mut self.locator,
        );
        self.backend
            .serialize_statement(&mut cx, statement)
            .map_err(|source| self.hook_error(Hook::SerializeStatement, source))
    }

    /// End the session.
    ///
    /// The sink is released whatever the end hook returns. The hook's
    /// failure is reported first; a close failure is reported only when the
    /// hook succeeded.
    pub fn end(&mut self) -> Result<()> {
        let Some(mut sink) = self.sink.take() else {
            return Err(self.no_active_sink());
        };

        let hook_result = if self.descriptor.hooks().contains(Hooks::END) {
            let mut cx = EmitContext::new(
                &mut sink,
                &self.options,
                self.base_uri.as_ref(),
                &mut self.locator,
            );
            self.backend.end(&mut cx)
        } else {
            Ok(())
        };

        let written = sink.bytes_written();
        let kind = sink.kind();
        let close_result = sink.close();
        self.state = SessionState::Ended;
        tracing::debug!(
            syntax = self.descriptor.name(),
            %kind,
            written,
            "serialization ended"
        );

        match (hook_result, close_result) {
            (Ok(()), Ok(())) => Ok(()),
            (Ok(()), Err(source)) => Err(SerializeError::SinkClose {
                syntax: self.syntax_name().to_string(),
                source,
            }),
            (Err(source), close_result) => {
                if let Err(err) = close_result {
                    tracing::warn!(
                        syntax = self.descriptor.name(),
                        %kind,
                        %err,
                        "failed to close sink after end hook failure"
                    );
                }
                Err(self.hook_error(Hook::End, source))
            }
        }
    }

    /// Destroy the serializer, terminating the backend.
    ///
    /// Equivalent to dropping it. A sink still bound is dropped without
    /// being closed: file and handle wrappers flush on a best-effort basis,
    /// and a memory buffer is discarded without reaching its destination.
    pub fn destroy(self) {
        drop(self);
    }

    /// Set a numeric option.
    pub fn set_numeric(&mut self, option: OptionId, value: i64) -> Result<()> {
        self.options.set_numeric(option, value)
    }

    /// Set an option from a string.
    pub fn set_string(&mut self, option: OptionId, value: &str) -> Result<()> {
        self.options.set_string(option, value)
    }

    pub fn get_numeric(&self, option: OptionId) -> Result<u32> {
        self.options.get_numeric(option)
    }

    pub fn get_string(&self, option: OptionId) -> Result<Option<&str>> {
        self.options.get_string(option)
    }

    /// Apply one `name=value` setting.
    pub fn apply_setting(&mut self, setting: &OptionSetting) -> Result<()> {
        self.options.set_string(setting.option(), setting.value())
    }

    /// Apply settings in order, stopping at the first failure.
    pub fn apply_settings<'a, I>(&mut self, settings: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a OptionSetting>,
    {
        settings
            .into_iter()
            .try_for_each(|setting| self.apply_setting(setting))
    }

    pub fn options(&self) -> &SerializerOptions {
        &self.options
    }

    pub fn descriptor(&self) -> &'w Descriptor {
        self.descriptor
    }

    pub fn syntax_name(&self) -> &str {
        self.descriptor.name()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Base URI of the current or last session.
    pub fn base_uri(&self) -> Option<&Uri> {
        self.base_uri.as_ref()
    }

    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    /// The bound sink, if a session is active.
    pub fn sink(&mut self) -> Option<&mut Sink<'s>> {
        self.sink.as_mut()
    }

    fn hook_error(&self, hook: Hook, source: crate::error::BackendError) -> SerializeError {
        tracing::debug!(syntax = self.descriptor.name(), %hook, %source, "backend hook failed");
        SerializeError::Hook {
            syntax: self.syntax_name().to_string(),
            hook,
            source,
        }
    }

    fn no_active_sink(&self) -> SerializeError {
        SerializeError::NoActiveSink {
            syntax: self.syntax_name().to_string(),
        }
    }

    fn not_supported(&self) -> SerializeError {
        SerializeError::NotSupported {
            syntax: self.syntax_name().to_string(),
        }
    }
}

impl Drop for Serializer<'_, '_> {
    fn drop(&mut self) {
        self.backend.terminate();
        if self.sink.is_some() {
            tracing::debug!(
                syntax = self.descriptor.name(),
                "serializer dropped with an active session"
            );
        }
    }
}

impl std::fmt::Debug for Serializer<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Serializer")
            .field("syntax", &self.descriptor.name())
            .field("state", &self.state)
            .field("base_uri", &self.base_uri)
            .field("sink", &self.sink)
            .finish_non_exhaustive()
    }
}
