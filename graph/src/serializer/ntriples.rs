//! N-Triples serializer.
//!
//! Produces one statement per line with absolute IRIs, sorted so that two
//! equal graphs with the same blank labels serialize identically. Used for
//! cache images and comparison reports.

use super::escape_string;
use crate::model::{Literal, Term, Triple};
use crate::Graph;

/// Serializes `graph` to a sorted N-Triples document.
#[must_use]
pub fn to_ntriples(graph: &Graph) -> String {
    let mut lines: Vec<String> = graph.iter().map(statement).collect();
    lines.sort();
    lines.concat()
}

/// Renders one statement, newline-terminated.
#[must_use]
pub fn statement(t: &Triple) -> String {
    let mut out = String::new();
    triple(&mut out, &term(&t.subject), &t.predicate, &term(&t.object));
    out
}

/// Renders a single term in N-Triples syntax.
#[must_use]
pub fn term(t: &Term) -> String {
    match t {
        Term::Iri(i) => iri(i),
        Term::Blank(label) => format!("_:{label}"),
        Term::Literal(l) => lit(l),
    }
}

fn triple(out: &mut String, subj: &str, pred: &str, obj: &str) {
    out.push_str(subj);
    out.push_str(" <");
    out.push_str(pred);
    out.push_str("> ");
    out.push_str(obj);
    out.push_str(" .\n");
}

fn iri(s: &str) -> String {
    format!("<{}>", s)
}

fn lit(l: &Literal) -> String {
    let escaped = escape_string(&l.lexical);
    match (&l.language, &l.datatype) {
        (Some(lang), _) => format!("\"{}\"@{}", escaped, lang),
        (None, Some(dt)) => format!("\"{}\"^^<{}>", escaped, dt),
        (None, None) => format!("\"{}\"", escaped),
    }
}
