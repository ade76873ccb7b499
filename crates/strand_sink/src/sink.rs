//! Opened sinks.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::{SinkBinding, SinkKind};

/// An opened sink bound to one session.
///
/// Implements [`Write`]; every byte accepted is counted. Release with
/// [`Sink::close`], which applies the binding's ownership rule.
pub struct Sink<'s> {
    inner: Inner<'s>,
    written: u64,
}

enum Inner<'s> {
    Stream(&'s mut dyn Write),
    File {
        path: PathBuf,
        writer: BufWriter<File>,
    },
    Buffer {
        buf: Vec<u8>,
        dest: &'s mut Vec<u8>,
    },
    Handle(BufWriter<&'s File>),
}

impl<'s> Sink<'s> {
    /// Open a binding.
    ///
    /// Only `Path` bindings can fail here (file creation).
    pub fn open(binding: SinkBinding<'s>) -> io::Result<Self> {
        let kind = binding.kind();
        let inner = match binding {
            SinkBinding::Stream(stream) => Inner::Stream(stream),
            SinkBinding::Path(path) => {
                let file = File::create(&path)?;
                Inner::File {
                    path,
                    writer: BufWriter::new(file),
                }
            }
            SinkBinding::Buffer(dest) => Inner::Buffer {
                buf: Vec::new(),
                dest,
            },
            SinkBinding::Handle(file) => Inner::Handle(BufWriter::new(file)),
        };
        tracing::debug!(%kind, "sink opened");
        Ok(Sink { inner, written: 0 })
    }

    pub fn kind(&self) -> SinkKind {
        match self.inner {
            Inner::Stream(_) => SinkKind::Stream,
            Inner::File { .. } => SinkKind::Path,
            Inner::Buffer { .. } => SinkKind::Buffer,
            Inner::Handle(_) => SinkKind::Handle,
        }
    }

    /// Whether closing this sink releases anything.
    pub fn is_owned(&self) -> bool {
        self.kind().is_owned()
    }

    /// Total bytes accepted so far.
    pub fn bytes_written(&self) -> u64 {
        self.written
    }

    /// Release the sink.
    ///
    /// - borrowed stream: nothing is flushed or closed
    /// - file: buffered bytes are flushed and the file is closed
    /// - buffer: the collected bytes replace the caller's destination
    /// - handle: the wrapper is flushed; the file stays open
    ///
    /// The sink is consumed even when flushing fails.
    pub fn close(self) -> io::Result<()> {
        self.release(true)
    }

    /// Release the sink without publishing a memory buffer.
    ///
    /// The caller's destination keeps its previous contents. File and handle
    /// wrappers are still flushed.
    pub fn discard(self) -> io::Result<()> {
        self.release(false)
    }

    fn release(self, publish: bool) -> io::Result<()> {
        let kind = self.kind();
        let written = self.written;
        let result = match self.inner {
            Inner::Stream(_) => Ok(()),
            Inner::File { path, mut writer } => writer.flush().map_err(|err| {
                tracing::warn!(path = %path.display(), %err, "failed to flush file sink");
                err
            }),
            Inner::Buffer { buf, dest } => {
                if publish {
                    *dest = buf;
                }
                Ok(())
            }
            Inner::Handle(mut writer) => writer.flush(),
        };
        tracing::debug!(%kind, written, publish, ok = result.is_ok(), "sink released");
        result
    }
}

impl Write for Sink<'_> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let n = match &mut self.inner {
            Inner::Stream(stream) => stream.write(data)?,
            Inner::File { writer, .. } => writer.write(data)?,
            Inner::Buffer { buf, .. } => {
                buf.extend_from_slice(data);
                data.len()
            }
            Inner::Handle(writer) => writer.write(data)?,
        };
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.inner {
            Inner::Stream(stream) => stream.flush(),
            Inner::File { writer, .. } => writer.flush(),
            Inner::Buffer { .. } => Ok(()),
            Inner::Handle(writer) => writer.flush(),
        }
    }
}

impl fmt::Debug for Sink<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Sink");
        s.field("kind", &self.kind());
        if let Inner::File { path, .. } = &self.inner {
            s.field("path", path);
        }
        s.field("written", &self.written).finish()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
