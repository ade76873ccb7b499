use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_literal_constructors() {
    assert_eq!(
        Term::typed_literal("1", "http://www.w3.org/2001/XMLSchema#integer"),
        Term::Literal {
            value: "1".to_string(),
            datatype: Some(Uri::new("http://www.w3.org/2001/XMLSchema#integer")),
            language: None,
        }
    );
    assert_eq!(
        Term::lang_literal("chat", "fr"),
        Term::Literal {
            value: "chat".to_string(),
            datatype: None,
            language: Some("fr".to_string()),
        }
    );
    assert!(Term::literal("x").is_literal());
    assert!(!Term::blank("b0").is_literal());
}

#[test]
fn test_statement_new_keeps_positions() {
    let st = Statement::new(
        Term::iri("http://example.org/s"),
        Term::iri("http://example.org/p"),
        Term::blank("b1"),
    );
    assert_eq!(st.subject, Term::Iri(Uri::new("http://example.org/s")));
    assert_eq!(st.predicate, Term::Iri(Uri::new("http://example.org/p")));
    assert_eq!(st.object, Term::BlankNode("b1".to_string()));
}
