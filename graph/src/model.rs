//! Core RDF model types: terms, literals and triples.

use std::fmt;

/// An RDF literal: lexical form plus optional datatype or language tag.
///
/// Plain `xsd:string` literals are stored with `datatype: None` so that a
/// literal parsed from Turtle compares equal to one built by the mapper.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// Lexical form, unescaped.
    pub lexical: String,
    /// Datatype IRI, `None` for plain strings.
    pub datatype: Option<String>,
    /// Language tag, only set for `rdf:langString` literals.
    pub language: Option<String>,
}

impl Literal {
    /// Creates a plain (untyped) literal.
    pub fn plain(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            language: None,
        }
    }

    /// Creates a typed literal. `None` yields a plain literal.
    pub fn typed(lexical: impl Into<String>, datatype: Option<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype,
            language: None,
        }
    }
}

/// A node in an RDF graph.
///
/// Variant order is significant: IRIs sort before blank nodes, which sort
/// before literals.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// An absolute IRI.
    Iri(String),
    /// A blank node label, without the `_:` prefix.
    Blank(String),
    /// A literal value.
    Literal(Literal),
}

impl Term {
    /// Creates an IRI term.
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    /// Creates a blank node term.
    pub fn blank(label: impl Into<String>) -> Self {
        Term::Blank(label.into())
    }

    /// Creates a plain literal term.
    pub fn literal(lexical: impl Into<String>) -> Self {
        Term::Literal(Literal::plain(lexical))
    }

    /// Creates a typed literal term.
    pub fn typed_literal(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Term::Literal(Literal::typed(lexical, Some(datatype.into())))
    }

    /// Returns true for blank nodes.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Term::Blank(_))
    }

    /// Returns true for IRIs.
    #[must_use]
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    /// Returns the IRI text if this term is an IRI.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the literal if this term is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Returns the lexical form of a literal, or the IRI text of an IRI.
    #[must_use]
    pub fn lexical(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            Term::Literal(lit) => Some(&lit.lexical),
            Term::Blank(_) => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serializer::ntriples::term(self))
    }
}

/// A single RDF statement. Predicates are always IRIs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    /// Subject (IRI or blank node).
    pub subject: Term,
    /// Predicate IRI.
    pub predicate: String,
    /// Object.
    pub object: Term,
}

impl Triple {
    /// Creates a triple.
    pub fn new(subject: Term, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(crate::serializer::ntriples::statement(self).trim_end())
    }
}
