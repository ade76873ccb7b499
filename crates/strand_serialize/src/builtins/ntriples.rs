//! N-Triples: one statement per line, absolute IRIs, no namespaces.

use std::fmt::Write as _;

use strand_ir::{Statement, Term, Uri};

use crate::backend::{BackendFactory, BackendResult, EmitContext, InitContext, SyntaxBackend};
use crate::descriptor::SyntaxInfo;

/// Factory for the builtin `ntriples` serializer.
#[derive(Copy, Clone, Debug, Default)]
pub struct NTriplesFactory;

impl NTriplesFactory {
    pub fn syntax_info() -> SyntaxInfo {
        SyntaxInfo::new("ntriples", "N-Triples")
            .with_alias("nt")
            .with_mime_type("application/n-triples")
            .with_uri("http://www.w3.org/ns/formats/N-Triples")
    }
}

impl BackendFactory for NTriplesFactory {
    fn create(&self, _: &InitContext<'_>) -> BackendResult<Box<dyn SyntaxBackend>> {
        Ok(Box::new(NTriplesBackend::default()))
    }
}

#[derive(Default)]
struct NTriplesBackend {
    /// Reused for each line.
    line: String,
}

impl SyntaxBackend for NTriplesBackend {
    fn serialize_statement(
        &mut self,
        cx: &mut EmitContext<'_>,
        statement: &Statement,
    ) -> BackendResult {
        self.line.clear();
        format_statement(&mut self.line, statement);
        cx.sink().write_all(self.line.as_bytes())?;
        cx.locator().newline();
        Ok(())
    }

    fn terminate(&mut self) {
        self.line = String::new();
    }
}

/// Append one N-Triples line (with trailing newline) for `statement`.
pub(crate) fn format_statement(out: &mut String, statement: &Statement) {
    format_term(out, &statement.subject);
    out.push(' ');
    format_term(out, &statement.predicate);
    out.push(' ');
    format_term(out, &statement.object);
    out.push_str(" .\n");
}

fn format_term(out: &mut String, term: &Term) {
    match term {
        Term::Iri(uri) => format_iri(out, uri),
        Term::BlankNode(label) => {
            out.push_str("_:");
            out.push_str(label);
        }
        Term::Literal {
            value,
            datatype,
            language,
        } => {
            out.push('"');
            escape_string(out, value);
            out.push('"');
            if let Some(language) = language {
                out.push('@');
                out.push_str(language);
            } else if let Some(datatype) = datatype {
                out.push_str("^^");
                format_iri(out, datatype);
            }
        }
    }
}

fn format_iri(out: &mut String, uri: &Uri) {
    out.push('<');
    for c in uri.as_str().chars() {
        match c {
            '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' => push_uchar(out, c),
            c if c <= ' ' => push_uchar(out, c),
            c => out.push(c),
        }
    }
    out.push('>');
}

/// Escape a literal's lexical form.
pub(crate) fn escape_string(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => push_uchar(out, c),
            c => out.push(c),
        }
    }
}

fn push_uchar(out: &mut String, c: char) {
    let code = u32::from(c);
    let _ = if code > 0xFFFF {
        write!(out, "\\U{code:08X}")
    } else {
        write!(out, "\\u{code:04X}")
    };
}
