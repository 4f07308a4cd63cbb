//! Skolemization: anonymous nodes renamed after the path that reaches them.
//!
//! Two mappings of the same document differ only in blank node labels, so
//! they are compared after every blank node has been replaced by an IRI
//! built from its parent's name, the predicate and its `fhir:index`.

use std::collections::{BTreeMap, BTreeSet};

use fhirrdf_graph::serializer::ntriples;
use fhirrdf_graph::{iris, Graph, Term};

/// IRI standing in for the anonymous object of `predicate` on `subject`:
/// `subject.<last path segment of predicate>[_<index>]`.
#[must_use]
pub fn skolem_uri(subject: &str, predicate: &str, index: Option<&str>) -> String {
    let local = predicate.rsplit('/').next().unwrap_or(predicate);
    match index {
        Some(index) => format!("{subject}.{local}_{index}"),
        None => format!("{subject}.{local}"),
    }
}

/// Names every anonymous node reachable from `starts` and copies the
/// statements about the start nodes and those anonymous nodes into `out`.
///
/// Pending nodes are taken in name order, and a child's name extends its
/// parent's, so an anonymous node reached along several paths keeps the
/// smallest of their names and is expanded once. Edges are written after
/// naming, pointing at each node's final name.
fn name_from(source: &Graph, starts: Vec<(String, Term)>, out: &mut Graph) {
    let mut names: BTreeMap<Term, String> = BTreeMap::new();
    let mut expanded: Vec<(String, Term)> = Vec::new();
    let mut pending: BTreeSet<(String, Term)> = starts.into_iter().collect();
    while let Some((name, node)) = pending.pop_first() {
        if node.is_blank() {
            if names.contains_key(&node) {
                continue;
            }
            names.insert(node.clone(), name.clone());
        }
        for t in source.about(&node) {
            if t.object.is_blank() && !names.contains_key(&t.object) {
                let index = source
                    .value(&t.object, iris::FHIR_INDEX)
                    .and_then(Term::lexical);
                pending.insert((skolem_uri(&name, &t.predicate, index), t.object.clone()));
            }
        }
        expanded.push((name, node));
    }

    for (name, node) in expanded {
        let subject = Term::iri(name);
        for t in source.about(&node) {
            let object = match names.get(&t.object) {
                Some(target) => Term::iri(target.clone()),
                None => t.object.clone(),
            };
            out.insert(subject.clone(), t.predicate.clone(), object);
        }
    }
}

fn tree_of(graph: &Graph, root: &Term, name: &str) -> Graph {
    let mut tree = Graph::new();
    name_from(graph, vec![(name.to_owned(), root.clone())], &mut tree);
    tree
}

/// The anonymous roots of `graph` paired with their skolem names.
///
/// A single root is named `fhir:treeRoot`. Several roots are named
/// `fhir:treeRoot_<i>`, numbered in the order of their skolemized content
/// so that the numbering does not depend on blank node labels.
#[must_use]
pub fn anonymous_root_names(graph: &Graph) -> Vec<(&Term, String)> {
    let mut roots: Vec<(String, &Term)> = graph
        .anonymous_roots()
        .into_iter()
        .map(|root| {
            let content = ntriples::to_ntriples(&tree_of(graph, root, iris::FHIR_TREE_ROOT));
            (content, root)
        })
        .collect();
    roots.sort();
    let numbered = roots.len() > 1;
    roots
        .into_iter()
        .enumerate()
        .map(|(i, (_, root))| {
            let name = if numbered {
                format!("{}_{i}", iris::FHIR_TREE_ROOT)
            } else {
                iris::FHIR_TREE_ROOT.to_owned()
            };
            (root, name)
        })
        .collect()
}

/// Replaces every blank node of `graph` with a path-derived IRI.
///
/// IRI subjects keep their names; anonymous roots are named as by
/// [`anonymous_root_names`]. An anonymous node shared by several paths
/// takes the smallest path name. Blank nodes unreachable from either
/// (pure anonymous cycles) are dropped.
#[must_use]
pub fn skolemize(graph: &Graph) -> Graph {
    let mut starts: Vec<(String, Term)> = anonymous_root_names(graph)
        .into_iter()
        .map(|(root, name)| (name, root.clone()))
        .collect();
    starts.extend(
        graph
            .subjects()
            .into_iter()
            .filter_map(|s| s.as_iri().map(|iri| (iri.to_owned(), s.clone()))),
    );
    let mut out = Graph::new();
    name_from(graph, starts, &mut out);
    *out.namespaces_mut() = graph.namespaces().clone();
    out
}

/// `subject` plus everything reachable from it through anonymous objects.
#[must_use]
pub fn complete_definition(subject: &Term, graph: &Graph) -> Graph {
    let mut out = Graph::new();
    let mut seen = BTreeSet::new();
    let mut pending = vec![subject.clone()];
    while let Some(node) = pending.pop() {
        if !seen.insert(node.clone()) {
            continue;
        }
        for t in graph.about(&node) {
            if t.object.is_blank() {
                pending.push(t.object.clone());
            }
            out.insert_triple(t.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fhirrdf_graph::parser::parse_turtle;

    fn ttl(text: &str) -> Graph {
        parse_turtle(&format!("@prefix fhir: <http://hl7.org/fhir/> .\n{text}"))
            .expect("test Turtle parses")
    }

    #[test]
    fn skolem_uris() {
        assert_eq!(
            skolem_uri(
                "http://hl7.org/fhir/Patient/f201",
                "http://hl7.org/fhir/Patient.identifier",
                Some("0")
            ),
            "http://hl7.org/fhir/Patient/f201.Patient.identifier_0"
        );
        assert_eq!(
            skolem_uri("http://x/a", "http://hl7.org/fhir/Identifier.use", None),
            "http://x/a.Identifier.use"
        );
        assert_eq!(skolem_uri("s", "local", None), "s.local");
    }

    #[test]
    fn nested_nodes_are_named_by_path() {
        let graph = ttl(
            "<http://x/p> fhir:Patient.name [ fhir:index 0 ; fhir:HumanName.family [ fhir:value \"D\" ] ] .",
        );
        let out = skolemize(&graph);
        let name = Term::iri("http://x/p.Patient.name_0");
        assert_eq!(
            out.value(&Term::iri("http://x/p"), "http://hl7.org/fhir/Patient.name"),
            Some(&name)
        );
        assert_eq!(
            out.value(
                &Term::iri("http://x/p.Patient.name_0.HumanName.family"),
                iris::FHIR_VALUE
            ),
            Some(&Term::literal("D"))
        );
        assert!(out.iter().all(|t| !t.subject.is_blank() && !t.object.is_blank()));
    }

    #[test]
    fn single_anonymous_root_is_tree_root() {
        let out = skolemize(&ttl("_:r fhir:value \"a\" ."));
        assert_eq!(
            out.value(&Term::iri(iris::FHIR_TREE_ROOT), iris::FHIR_VALUE),
            Some(&Term::literal("a"))
        );
    }

    #[test]
    fn several_roots_are_numbered_by_content() {
        let forward = ttl("_:x fhir:value \"b\" . _:y fhir:value \"a\" .");
        let backward = ttl("_:x fhir:value \"a\" . _:y fhir:value \"b\" .");
        let out = skolemize(&forward);
        assert_eq!(out, skolemize(&backward));
        assert_eq!(
            out.value(&Term::iri("http://hl7.org/fhir/treeRoot_0"), iris::FHIR_VALUE),
            Some(&Term::literal("a"))
        );
    }

    #[test]
    fn cycles_are_cut() {
        let graph = ttl("<http://x/s> fhir:next _:a . _:a fhir:next _:b . _:b fhir:next _:a .");
        let out = skolemize(&graph);
        assert_eq!(out.len(), 3);
        assert!(out.contains(&fhirrdf_graph::Triple::new(
            Term::iri("http://x/s.next.next"),
            "http://hl7.org/fhir/next",
            Term::iri("http://x/s.next"),
        )));
    }

    #[test]
    fn shared_nodes_are_expanded_once() {
        let levels = 24;
        let mut text = String::from("<http://x/s> fhir:p _:b0 .\n");
        for i in 0..levels {
            text.push_str(&format!("_:b{i} fhir:p _:b{n} ; fhir:q _:b{n} .\n", n = i + 1));
        }
        let graph = ttl(&text);
        let out = skolemize(&graph);
        assert_eq!(out.len(), graph.len());
        let deepest = format!("http://x/s{}", ".p".repeat(levels + 1));
        assert!(out
            .iter()
            .any(|t| t.object == Term::iri(deepest.as_str())));
        assert!(out.iter().all(|t| !t.subject.is_blank() && !t.object.is_blank()));
    }

    #[test]
    fn shared_nodes_take_the_smallest_path_name() {
        let graph = ttl(
            "<http://x/s> fhir:b _:n ; fhir:a [ fhir:c _:n ] . _:n fhir:value \"v\" .",
        );
        let out = skolemize(&graph);
        assert_eq!(
            out.value(&Term::iri("http://x/s.a.c"), iris::FHIR_VALUE),
            Some(&Term::literal("v"))
        );
        assert_eq!(
            out.value(&Term::iri("http://x/s"), "http://hl7.org/fhir/b"),
            Some(&Term::iri("http://x/s.a.c"))
        );
    }

    #[test]
    fn deep_chains_do_not_recurse() {
        let depth = 5_000;
        let mut graph = Graph::new();
        graph.insert(Term::iri("http://x/s"), "http://x/p", Term::blank("n0"));
        for i in 0..depth {
            graph.insert(
                Term::blank(format!("n{i}")),
                "http://x/p",
                Term::blank(format!("n{}", i + 1)),
            );
        }
        let out = skolemize(&graph);
        assert_eq!(out.len(), graph.len());
        assert!(out.iter().all(|t| !t.object.is_blank()));
    }

    #[test]
    fn definitions_stop_at_named_nodes() {
        let graph = ttl(
            "<http://x/a> fhir:p [ fhir:q <http://x/b> ] . <http://x/b> fhir:r \"not included\" .",
        );
        let def = complete_definition(&Term::iri("http://x/a"), &graph);
        assert_eq!(def.len(), 2);
        assert!(def.about(&Term::iri("http://x/b")).next().is_none());
    }
}
