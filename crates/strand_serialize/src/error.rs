//! Error types for registration, option handling and sessions.

use std::fmt;
use std::io;

use thiserror::Error;

/// Result of a serializer operation.
pub type Result<T, E = SerializeError> = std::result::Result<T, E>;

/// A backend hook, named in hook failures.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Hook {
    Start,
    DeclareNamespace,
    DeclareNamespaceFromNamespace,
    SerializeStatement,
    End,
}

impl Hook {
    pub fn as_str(self) -> &'static str {
        match self {
            Hook::Start => "start",
            Hook::DeclareNamespace => "declare_namespace",
            Hook::DeclareNamespaceFromNamespace => "declare_namespace_from_namespace",
            Hook::SerializeStatement => "serialize_statement",
            Hook::End => "end",
        }
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure reported by a backend from one of its hooks.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct BackendError {
    message: String,
    #[source]
    source: Option<io::Error>,
}

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        BackendError {
            message: message.into(),
            source: None,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<io::Error> for BackendError {
    fn from(err: io::Error) -> Self {
        BackendError {
            message: "sink write failed".to_string(),
            source: Some(err),
        }
    }
}

/// Errors surfaced by the registry, the option surface and sessions.
///
/// Construction-time errors leave nothing behind; session-time errors leave
/// the session as it was so the caller can decide to continue or end it.
#[derive(Debug, Error)]
pub enum SerializeError {
    /// A serializer with this name is already registered.
    #[error("serializer `{name}` already registered")]
    DuplicateRegistration { name: String },

    /// The registration initializer failed or installed no backend.
    #[error("registration of serializer `{name}` failed")]
    RegistrationFailed {
        name: String,
        #[source]
        source: BackendError,
    },

    /// No serializer matched (`None`: the registry is empty).
    #[error("{}", describe_missing(.name))]
    NotFound { name: Option<String> },

    /// Enumeration went past the last registered serializer.
    #[error("no serializer at index {index} ({count} registered)")]
    IndexOutOfRange { index: usize, count: usize },

    /// Memory ran out while copying an option value.
    #[error("out of memory storing option `{option}`")]
    AllocFailure { option: &'static str },

    /// The backend rejected construction.
    #[error("serializer `{syntax}` failed to initialize")]
    InitFailure {
        syntax: String,
        #[source]
        source: BackendError,
    },

    /// The sink for a session could not be created.
    #[error("cannot open output `{target}`")]
    SinkOpen {
        target: String,
        #[source]
        source: io::Error,
    },

    /// An owned sink failed while being closed.
    #[error("serializer `{syntax}` failed to close its output")]
    SinkClose {
        syntax: String,
        #[source]
        source: io::Error,
    },

    /// `start` was called while a sink is still bound.
    #[error("serializer `{syntax}` is already writing; end the session first")]
    SinkAlreadyBound { syntax: String },

    /// A statement or `end` arrived without a started session.
    #[error("serializer `{syntax}` has no active output")]
    NoActiveSink { syntax: String },

    /// Unknown option, wrong area, wrong kind or out-of-range value.
    #[error("invalid option `{option}`: {reason}")]
    InvalidOption { option: String, reason: &'static str },

    /// The backend implements neither namespace hook.
    #[error("serializer `{syntax}` does not support namespace declarations")]
    NotSupported { syntax: String },

    /// A backend hook failed mid-session.
    #[error("serializer `{syntax}` {hook} hook failed")]
    Hook {
        syntax: String,
        hook: Hook,
        #[source]
        source: BackendError,
    },
}

fn describe_missing(name: &Option<String>) -> String {
    match name {
        Some(name) => format!("no serializer named `{name}`"),
        None => "no serializers registered".to_string(),
    }
}

impl SerializeError {
    pub(crate) fn invalid_option(option: impl Into<String>, reason: &'static str) -> Self {
        SerializeError::InvalidOption {
            option: option.into(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::error::Error as _;

    #[test]
    fn test_not_found_messages() {
        let named = SerializeError::NotFound {
            name: Some("rdfxml".to_string()),
        };
        assert_eq!(named.to_string(), "no serializer named `rdfxml`");
        let empty = SerializeError::NotFound { name: None };
        assert_eq!(empty.to_string(), "no serializers registered");
        let past_end = SerializeError::IndexOutOfRange { index: 5, count: 1 };
        assert_eq!(past_end.to_string(), "no serializer at index 5 (1 registered)");
    }

    #[test]
    fn test_hook_error_chain() {
        let err = SerializeError::Hook {
            syntax: "ntriples".to_string(),
            hook: Hook::SerializeStatement,
            source: BackendError::from(io::Error::other("disk full")),
        };
        assert_eq!(
            err.to_string(),
            "serializer `ntriples` serialize_statement hook failed"
        );
        let backend = err.source().map(ToString::to_string);
        assert_eq!(backend.as_deref(), Some("sink write failed"));
        let io = err.source().and_then(|e| e.source()).map(ToString::to_string);
        assert_eq!(io.as_deref(), Some("disk full"));
    }
}
