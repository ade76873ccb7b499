//! Sink bindings accepted when a session starts.

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The kind of a sink binding.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SinkKind {
    /// Caller-owned stream.
    Stream,
    /// File created from a path.
    Path,
    /// In-memory buffer.
    Buffer,
    /// Already-open file handle.
    Handle,
}

impl SinkKind {
    /// Whether a sink of this kind is released by the session at end.
    ///
    /// Only borrowed streams stay with the caller. A handle binding owns its
    /// buffered wrapper even though the underlying file is never closed.
    pub fn is_owned(self) -> bool {
        !matches!(self, SinkKind::Stream)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SinkKind::Stream => "stream",
            SinkKind::Path => "path",
            SinkKind::Buffer => "buffer",
            SinkKind::Handle => "handle",
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a session writes its output.
pub enum SinkBinding<'s> {
    /// Write to a caller-owned stream.
    Stream(&'s mut dyn Write),
    /// Create (truncate) the file at this path.
    Path(PathBuf),
    /// Collect output in memory; the destination is replaced at close.
    Buffer(&'s mut Vec<u8>),
    /// Write to an already-open file without closing it.
    Handle(&'s File),
}

impl SinkBinding<'_> {
    pub fn kind(&self) -> SinkKind {
        match self {
            SinkBinding::Stream(_) => SinkKind::Stream,
            SinkBinding::Path(_) => SinkKind::Path,
            SinkBinding::Buffer(_) => SinkKind::Buffer,
            SinkBinding::Handle(_) => SinkKind::Handle,
        }
    }

    /// The path of a `Path` binding.
    pub fn path(&self) -> Option<&Path> {
        match self {
            SinkBinding::Path(path) => Some(path.as_path()),
            _ => None,
        }
    }

    /// Human-readable target, used in error messages and logs.
    pub fn describe(&self) -> String {
        match self {
            SinkBinding::Path(path) => path.display().to_string(),
            other => format!("<{}>", other.kind()),
        }
    }
}

impl fmt::Debug for SinkBinding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SinkBinding")
            .field(&self.kind())
            .field(&self.describe())
            .finish()
    }
}
