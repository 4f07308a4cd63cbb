//! Ordered in-memory triple set.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{Term, Triple};
use crate::namespaces::Namespaces;

/// An in-memory RDF graph.
///
/// Triples are kept in `(subject, predicate, object)` order, so all
/// statements about one subject are contiguous and iteration is
/// deterministic. Each graph owns its [`Namespaces`] table.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    triples: BTreeSet<Triple>,
    blank_labels: BTreeSet<String>,
    next_blank: usize,
    namespaces: Namespaces,
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.triples == other.triples
    }
}

impl Eq for Graph {}

impl Graph {
    /// Creates an empty graph with the standard FHIR prefixes bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a triple. Returns true if it was not already present.
    pub fn insert(&mut self, subject: Term, predicate: impl Into<String>, object: Term) -> bool {
        self.insert_triple(Triple::new(subject, predicate, object))
    }

    /// Adds an already built triple.
    pub fn insert_triple(&mut self, triple: Triple) -> bool {
        for term in [&triple.subject, &triple.object] {
            if let Term::Blank(label) = term {
                if !self.blank_labels.contains(label) {
                    self.blank_labels.insert(label.clone());
                }
            }
        }
        self.triples.insert(triple)
    }

    /// Removes a triple. Returns true if it was present.
    pub fn remove(&mut self, triple: &Triple) -> bool {
        self.triples.remove(triple)
    }

    /// Keeps only the triples `keep` accepts. Returns how many were dropped.
    pub fn retain(&mut self, mut keep: impl FnMut(&Triple) -> bool) -> usize {
        let before = self.triples.len();
        self.triples.retain(|t| keep(t));
        before - self.triples.len()
    }

    /// True if the exact triple is present.
    #[must_use]
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Number of triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// True when the graph holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterates all triples in order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Mints a blank node label not yet used in this graph.
    pub fn fresh_blank(&mut self) -> Term {
        loop {
            let label = format!("fb{}", self.next_blank);
            self.next_blank += 1;
            if self.blank_labels.insert(label.clone()) {
                return Term::Blank(label);
            }
        }
    }

    /// All triples whose subject is `subject`.
    pub fn about<'a>(&'a self, subject: &Term) -> impl Iterator<Item = &'a Triple> + 'a {
        let subject = subject.clone();
        let lower = Triple::new(subject.clone(), String::new(), Term::Iri(String::new()));
        self.triples
            .range(lower..)
            .take_while(move |t| t.subject == subject)
    }

    /// Objects of `(subject, predicate, ?)`.
    pub fn objects<'a>(
        &'a self,
        subject: &Term,
        predicate: &str,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        let predicate = predicate.to_owned();
        self.about(subject)
            .filter(move |t| t.predicate == predicate)
            .map(|t| &t.object)
    }

    /// First object of `(subject, predicate, ?)`, if any.
    #[must_use]
    pub fn value(&self, subject: &Term, predicate: &str) -> Option<&Term> {
        self.objects(subject, predicate).next()
    }

    /// Subjects of `(?, predicate, object)`.
    pub fn subjects_with<'a>(
        &'a self,
        predicate: &str,
        object: &Term,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        let predicate = predicate.to_owned();
        let object = object.clone();
        self.triples
            .iter()
            .filter(move |t| t.predicate == predicate && t.object == object)
            .map(|t| &t.subject)
    }

    /// Distinct subjects, in order.
    #[must_use]
    pub fn subjects(&self) -> BTreeSet<&Term> {
        self.triples.iter().map(|t| &t.subject).collect()
    }

    /// Number of triples referencing each blank node as object.
    #[must_use]
    pub fn blank_reference_counts(&self) -> BTreeMap<&Term, usize> {
        let mut counts = BTreeMap::new();
        for t in &self.triples {
            if t.object.is_blank() {
                *counts.entry(&t.object).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Blank subjects that no triple references: the roots of anonymous trees.
    #[must_use]
    pub fn anonymous_roots(&self) -> Vec<&Term> {
        let referenced = self.blank_reference_counts();
        self.subjects()
            .into_iter()
            .filter(|s| s.is_blank() && !referenced.contains_key(s))
            .collect()
    }

    /// Adds every triple of `other` to this graph.
    ///
    /// Blank node labels are taken as is, so both graphs must share one
    /// label space (for example, fragments extracted from the same graph).
    pub fn extend(&mut self, other: &Graph) {
        for t in other.iter() {
            self.insert_triple(t.clone());
        }
    }

    /// The namespace table used when serializing this graph.
    #[must_use]
    pub fn namespaces(&self) -> &Namespaces {
        &self.namespaces
    }

    /// Mutable access to the namespace table.
    pub fn namespaces_mut(&mut self) -> &mut Namespaces {
        &mut self.namespaces
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut graph = Graph::new();
        for t in iter {
            graph.insert_triple(t);
        }
        graph
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::collections::btree_set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Graph, Term, Term) {
        let mut g = Graph::new();
        let s = Term::iri("http://a/s");
        let b = g.fresh_blank();
        g.insert(s.clone(), "http://a/p", b.clone());
        g.insert(s.clone(), "http://a/q", Term::literal("x"));
        g.insert(b.clone(), "http://a/v", Term::literal("y"));
        (g, s, b)
    }

    #[test]
    fn about_is_limited_to_subject() {
        let (g, s, b) = sample();
        assert_eq!(g.about(&s).count(), 2);
        assert_eq!(g.about(&b).count(), 1);
        assert_eq!(g.about(&Term::iri("http://a/none")).count(), 0);
    }

    #[test]
    fn value_and_objects() {
        let (g, s, b) = sample();
        assert_eq!(g.value(&s, "http://a/p"), Some(&b));
        assert_eq!(g.objects(&s, "http://a/q").count(), 1);
        assert_eq!(g.value(&s, "http://a/none"), None);
    }

    #[test]
    fn fresh_blank_skips_used_labels() {
        let mut g = Graph::new();
        g.insert(Term::blank("fb0"), "http://a/p", Term::literal("x"));
        assert_eq!(g.fresh_blank(), Term::blank("fb1"));
    }

    #[test]
    fn anonymous_roots_have_no_incoming_edge() {
        let (mut g, _, b) = sample();
        let root = g.fresh_blank();
        g.insert(root.clone(), "http://a/p", Term::literal("z"));
        assert_eq!(g.anonymous_roots(), vec![&root]);
        assert_eq!(g.blank_reference_counts().get(&b), Some(&1));
    }

    #[test]
    fn equality_ignores_namespaces() {
        let (g, _, _) = sample();
        let mut other = g.clone();
        other.namespaces_mut().bind("ex", "http://a/");
        assert_eq!(g, other);
    }
}
