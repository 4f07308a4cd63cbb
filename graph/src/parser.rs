//! Turtle and N-Triples parsing via `sophia_turtle`.

use sophia_api::source::TripleSource;
use sophia_api::term::{Term as _, TermKind};
use sophia_api::triple::Triple as _;
use sophia_turtle::parser::{nt, turtle};

use crate::graph::Graph;
use crate::model::{Literal, Term, Triple};
use crate::namespaces::iris;

/// Errors produced while reading RDF text.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The input is not well-formed.
    #[error("RDF syntax error: {0}")]
    Syntax(String),
    /// The input used a term shape this model does not carry
    /// (quoted triples, variables, literal predicates).
    #[error("unsupported term in {position}: {detail}")]
    Unsupported {
        /// Which triple position held the term.
        position: &'static str,
        /// Debug rendering of the offending term.
        detail: String,
    },
}

/// Parses a Turtle document into a new [`Graph`].
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] on malformed input and
/// [`ParseError::Unsupported`] for RDF-star or generalized terms.
pub fn parse_turtle(text: &str) -> Result<Graph, ParseError> {
    let mut graph = Graph::new();
    load_turtle(text, &mut graph)?;
    Ok(graph)
}

/// Parses an N-Triples document into a new [`Graph`].
///
/// # Errors
///
/// Same as [`parse_turtle`].
pub fn parse_ntriples(text: &str) -> Result<Graph, ParseError> {
    let mut graph = Graph::new();
    load_ntriples(text, &mut graph)?;
    Ok(graph)
}

/// Adds the triples of a Turtle document to `graph`.
///
/// # Errors
///
/// Same as [`parse_turtle`]. On error `graph` may hold a prefix of the input.
pub fn load_turtle(text: &str, graph: &mut Graph) -> Result<(), ParseError> {
    let mut pending = Vec::new();
    turtle::parse_str(text)
        .for_each_triple(|t| pending.push(convert(t.s(), t.p(), t.o())))
        .map_err(|e| ParseError::Syntax(e.to_string()))?;
    for t in pending {
        graph.insert_triple(t?);
    }
    Ok(())
}

/// Adds the triples of an N-Triples document to `graph`.
///
/// # Errors
///
/// Same as [`load_turtle`].
pub fn load_ntriples(text: &str, graph: &mut Graph) -> Result<(), ParseError> {
    let mut pending = Vec::new();
    nt::parse_str(text)
        .for_each_triple(|t| pending.push(convert(t.s(), t.p(), t.o())))
        .map_err(|e| ParseError::Syntax(e.to_string()))?;
    for t in pending {
        graph.insert_triple(t?);
    }
    Ok(())
}

fn convert<T: sophia_api::term::Term>(s: T, p: T, o: T) -> Result<Triple, ParseError> {
    let subject = term(s, "subject")?;
    let predicate = match term(p, "predicate")? {
        Term::Iri(iri) => iri,
        other => {
            return Err(ParseError::Unsupported {
                position: "predicate",
                detail: format!("{other:?}"),
            })
        }
    };
    let object = term(o, "object")?;
    Ok(Triple::new(subject, predicate, object))
}

fn term<T: sophia_api::term::Term>(t: T, position: &'static str) -> Result<Term, ParseError> {
    match t.kind() {
        TermKind::Iri => t
            .iri()
            .map(|iri| Term::Iri(iri.as_str().to_owned()))
            .ok_or_else(|| unsupported(position, "IRI without text")),
        TermKind::BlankNode => t
            .bnode_id()
            .map(|id| Term::Blank(id.as_str().to_owned()))
            .ok_or_else(|| unsupported(position, "blank node without label")),
        TermKind::Literal => {
            let lexical = t
                .lexical_form()
                .map(|lex| (*lex).to_owned())
                .ok_or_else(|| unsupported(position, "literal without lexical form"))?;
            let language = t.language_tag().map(|tag| tag.as_str().to_owned());
            let datatype = t
                .datatype()
                .map(|dt| dt.as_str().to_owned())
                .filter(|dt| dt != iris::XSD_STRING && dt != iris::RDF_LANG_STRING);
            Ok(Term::Literal(Literal {
                lexical,
                datatype,
                language,
            }))
        }
        other => Err(unsupported(position, &format!("{other:?}"))),
    }
}

fn unsupported(position: &'static str, detail: &str) -> ParseError {
    ParseError::Unsupported {
        position,
        detail: detail.to_owned(),
    }
}
