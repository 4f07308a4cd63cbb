//! Turtle 1.1 serializer.
//!
//! Writes the graph's prefix table, then one block per top-level subject.
//! A blank node referenced exactly once is written inline as `[ ... ]`
//! beneath its referrer; every other blank node gets its own `_:label` block.

use std::collections::{BTreeMap, BTreeSet};

use super::escape_string;
use crate::model::{Literal, Term};
use crate::namespaces::{iris, Namespaces};
use crate::Graph;

/// Serializes `graph` to a Turtle string.
#[must_use]
pub fn to_turtle(graph: &Graph) -> String {
    let mut out = String::with_capacity(64 * graph.len() + 512);
    let ns = graph.namespaces();

    // Prefix declarations
    let width = ns.iter().map(|(p, _)| p.len()).max().unwrap_or(0);
    for (prefix, iri) in ns.iter() {
        let pad = " ".repeat(width - prefix.len());
        out.push_str(&format!("@prefix {prefix}:{pad} <{iri}> .\n"));
    }
    out.push('\n');

    let counts = graph.blank_reference_counts();
    let nested = |t: &Term| t.is_blank() && counts.get(t) == Some(&1);

    let mut roots: Vec<&Term> = graph.subjects().into_iter().filter(|s| !nested(s)).collect();

    let mut inline: BTreeSet<&Term> = BTreeSet::new();
    let mut stack = roots.clone();
    while let Some(subject) = stack.pop() {
        for t in graph.about(subject) {
            if nested(&t.object) && inline.insert(&t.object) {
                stack.push(&t.object);
            }
        }
    }
    // Singly-referenced blanks on a cycle are unreachable from any root.
    for subject in graph.subjects() {
        if nested(subject) && !inline.contains(subject) {
            roots.push(subject);
        }
    }

    let writer = Writer {
        graph,
        ns,
        inline: &inline,
    };
    for subject in roots {
        out.push_str(&writer.subject(subject));
        out.push('\n');
        out.push_str(&writer.predicate_list(subject, 1));
        out.push_str(" .\n\n");
    }
    out
}

struct Writer<'a> {
    graph: &'a Graph,
    ns: &'a Namespaces,
    inline: &'a BTreeSet<&'a Term>,
}

impl Writer<'_> {
    fn subject(&self, t: &Term) -> String {
        match t {
            Term::Iri(i) => self.iri(i),
            Term::Blank(label) => format!("_:{label}"),
            Term::Literal(l) => self.literal(l),
        }
    }

    fn predicate_list(&self, subject: &Term, depth: usize) -> String {
        let indent = "    ".repeat(depth);
        let mut by_predicate: BTreeMap<&str, Vec<&Term>> = BTreeMap::new();
        for t in self.graph.about(subject) {
            by_predicate.entry(t.predicate.as_str()).or_default().push(&t.object);
        }
        let types = by_predicate.remove(iris::RDF_TYPE);

        let mut lines = Vec::with_capacity(by_predicate.len() + 1);
        if let Some(objects) = types {
            lines.push(format!("{indent}a {}", self.object_list(&objects, depth)));
        }
        for (predicate, objects) in by_predicate {
            lines.push(format!(
                "{indent}{} {}",
                self.iri(predicate),
                self.object_list(&objects, depth)
            ));
        }
        lines.join(" ;\n")
    }

    fn object_list(&self, objects: &[&Term], depth: usize) -> String {
        objects
            .iter()
            .map(|o| self.object(o, depth))
            .collect::<Vec<_>>()
            .join(" , ")
    }

    fn object(&self, t: &Term, depth: usize) -> String {
        match t {
            Term::Blank(_) if self.inline.contains(t) => {
                if self.graph.about(t).next().is_none() {
                    return "[]".to_owned();
                }
                format!(
                    "[\n{}\n{}]",
                    self.predicate_list(t, depth + 1),
                    "    ".repeat(depth)
                )
            }
            other => self.subject(other),
        }
    }

    fn iri(&self, iri: &str) -> String {
        self.ns.compact(iri).unwrap_or_else(|| format!("<{}>", iri))
    }

    fn literal(&self, l: &Literal) -> String {
        let quoted = turtle_string(&l.lexical);
        match (&l.language, &l.datatype) {
            (Some(lang), _) => format!("{quoted}@{lang}"),
            (None, Some(dt)) => format!("{quoted}^^{}", self.iri(dt)),
            (None, None) => quoted,
        }
    }
}

fn turtle_string(s: &str) -> String {
    format!("\"{}\"", escape_string(s))
}
