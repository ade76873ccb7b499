//! Output sinks for the strand serializers.
//!
//! A serializer session writes to exactly one sink at a time. The sink is
//! chosen by a [`SinkBinding`] and opened into a [`Sink`]:
//!
//! - `Stream`: a caller-owned writer, never closed here
//! - `Path`: a file created from a path, owned and closed at session end
//! - `Buffer`: an owned memory buffer, published to the caller's `Vec` at close
//! - `Handle`: an already-open file; the buffered wrapper is owned, the file is not
//!
//! Whoever opened an owned sink is responsible for calling [`Sink::close`].

mod binding;
mod sink;

pub use binding::{SinkBinding, SinkKind};
pub use sink::Sink;
