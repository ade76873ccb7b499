//! Strand IR - value types that flow through the serializers.
//!
//! This crate contains the data handed to output backends:
//! - `Uri` for base URIs, namespace URIs and IRIs
//! - `Term` for the three node kinds (IRI, blank node, literal)
//! - `Statement` for a subject/predicate/object triple
//! - `Namespace` for a URI/prefix declaration
//!
//! The serializer layer treats these as opaque; only backends look inside.

mod namespace;
mod term;
mod uri;

pub use namespace::Namespace;
pub use term::{Statement, Term};
pub use uri::Uri;
