//! Terms and statements.

use crate::Uri;

/// One node of a statement.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Term {
    /// A resource named by an IRI.
    Iri(Uri),
    /// A blank node, identified by its local label (without `_:`).
    BlankNode(String),
    /// A literal value, optionally typed or language-tagged.
    Literal {
        value: String,
        datatype: Option<Uri>,
        language: Option<String>,
    },
}

impl Term {
    /// Create an IRI term.
    pub fn iri(uri: impl Into<Uri>) -> Self {
        Term::Iri(uri.into())
    }

    /// Create a blank node term.
    pub fn blank(label: impl Into<String>) -> Self {
        Term::BlankNode(label.into())
    }

    /// Create a plain literal.
    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal {
            value: value.into(),
            datatype: None,
            language: None,
        }
    }

    /// Create a datatyped literal.
    pub fn typed_literal(value: impl Into<String>, datatype: impl Into<Uri>) -> Self {
        Term::Literal {
            value: value.into(),
            datatype: Some(datatype.into()),
            language: None,
        }
    }

    /// Create a language-tagged literal.
    pub fn lang_literal(value: impl Into<String>, language: impl Into<String>) -> Self {
        Term::Literal {
            value: value.into(),
            datatype: None,
            language: Some(language.into()),
        }
    }

    /// Check if this term is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal { .. })
    }
}

/// A subject/predicate/object statement.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statement {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
}

impl Statement {
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Statement {
            subject,
            predicate,
            object,
        }
    }
}

#[cfg(test)]
mod tests;
