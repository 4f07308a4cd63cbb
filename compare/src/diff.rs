//! Per-subject graph comparison.

use std::collections::BTreeMap;

use fhirrdf_graph::{iris, Graph, Term};
use tracing::debug;

use crate::report::{CompareReport, SubjectDifference, SubjectListing};
use crate::skolem::{anonymous_root_names, complete_definition, skolemize};

/// Comparison switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompareOptions {
    /// Drop `owl:versionIRI` statements of each primary subject.
    pub ignore_owl_version: bool,
    /// Drop `rdf:type` arcs from anonymous nodes to IRIs (concept codes).
    pub ignore_type_arcs: bool,
}

/// Adjusts a subject's `(both, first, second)` split after differencing.
pub type CompareFilter<'a> = &'a dyn Fn(&mut Graph, &mut Graph, &mut Graph);

/// IRI subjects keyed by themselves, anonymous roots by their skolem names.
fn primary_subjects(graph: &Graph) -> BTreeMap<String, &Term> {
    let mut subjects: BTreeMap<String, &Term> = graph
        .subjects()
        .into_iter()
        .filter_map(|s| s.as_iri().map(|iri| (iri.to_owned(), s)))
        .collect();
    for (root, name) in anonymous_root_names(graph) {
        subjects.insert(name, root);
    }
    subjects
}

fn subject_graph(graph: &Graph, subject: &Term, options: CompareOptions) -> Graph {
    let mut closure = complete_definition(subject, graph);
    if options.ignore_type_arcs {
        closure.retain(|t| {
            !(t.subject.is_blank() && t.predicate == iris::RDF_TYPE && t.object.is_iri())
        });
    }
    if options.ignore_owl_version {
        closure.retain(|t| !(&t.subject == subject && t.predicate == iris::OWL_VERSION_IRI));
    }
    skolemize(&closure)
}

fn statements(graph: &Graph) -> Vec<String> {
    let mut lines: Vec<String> = graph.iter().map(ToString::to_string).collect();
    lines.sort();
    lines
}

fn listing(subject: &str, graph: &Graph, node: &Term) -> SubjectListing {
    SubjectListing {
        subject: subject.to_owned(),
        statements: statements(&complete_definition(node, graph)),
    }
}

/// Compares `expected` with `actual` subject by subject.
///
/// Primary subjects (IRI subjects and anonymous roots) present on one side
/// only are listed with their complete definitions. Shared subjects have
/// their definitions skolemized and set-differenced; `filter`, if given,
/// may then move equivalent statements back into the common part.
#[must_use]
pub fn rdf_compare(
    expected: &Graph,
    actual: &Graph,
    options: CompareOptions,
    filter: Option<CompareFilter<'_>>,
) -> CompareReport {
    let first_subjects = primary_subjects(expected);
    let second_subjects = primary_subjects(actual);
    let mut report = CompareReport::new();

    for (key, node) in &first_subjects {
        if !second_subjects.contains_key(key) {
            report.only_in_expected.push(listing(key, expected, node));
        }
    }
    for (key, node) in &second_subjects {
        if !first_subjects.contains_key(key) {
            report.only_in_actual.push(listing(key, actual, node));
        }
    }

    for (key, first_node) in &first_subjects {
        let Some(second_node) = second_subjects.get(key) else {
            continue;
        };
        let first = subject_graph(expected, first_node, options);
        let second = subject_graph(actual, second_node, options);
        let mut both: Graph = first.iter().filter(|t| second.contains(t)).cloned().collect();
        let mut only_first: Graph = first.iter().filter(|t| !second.contains(t)).cloned().collect();
        let mut only_second: Graph = second.iter().filter(|t| !first.contains(t)).cloned().collect();
        if let Some(filter) = filter {
            filter(&mut both, &mut only_first, &mut only_second);
        }
        if !only_first.is_empty() || !only_second.is_empty() {
            report.differences.push(SubjectDifference {
                subject: key.clone(),
                expected: statements(&only_first),
                actual: statements(&only_second),
            });
        }
    }

    debug!(
        expected_subjects = first_subjects.len(),
        actual_subjects = second_subjects.len(),
        differing = report.subject_count(),
        "graphs compared"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::decimal_filter;
    use fhirrdf_graph::parser::parse_turtle;

    fn ttl(text: &str) -> Graph {
        parse_turtle(&format!(
            "@prefix fhir: <http://hl7.org/fhir/> .\n@prefix owl: <http://www.w3.org/2002/07/owl#> .\n{text}"
        ))
        .expect("test Turtle parses")
    }

    #[test]
    fn identical_graphs_match() {
        let g = ttl("<http://x/a> fhir:p [ fhir:value \"1\" ] .");
        assert!(rdf_compare(&g, &g, CompareOptions::default(), None).is_empty());
    }

    #[test]
    fn blank_labels_do_not_matter() {
        let a = ttl("<http://x/a> fhir:p _:one . _:one fhir:value \"1\" .");
        let b = ttl("<http://x/a> fhir:p _:two . _:two fhir:value \"1\" .");
        assert!(rdf_compare(&a, &b, CompareOptions::default(), None).is_empty());
    }

    #[test]
    fn one_sided_subjects_are_listed() {
        let a = ttl("<http://x/a> fhir:p \"1\" . <http://x/b> fhir:p [ fhir:value \"2\" ] .");
        let b = ttl("<http://x/a> fhir:p \"1\" .");
        let report = rdf_compare(&a, &b, CompareOptions::default(), None);
        assert_eq!(report.only_in_expected.len(), 1);
        assert_eq!(report.only_in_expected[0].subject, "http://x/b");
        assert_eq!(report.only_in_expected[0].statements.len(), 2);
        assert!(report.only_in_actual.is_empty());
        assert!(report.differences.is_empty());
    }

    #[test]
    fn changed_values_are_differences() {
        let a = ttl("<http://x/a> fhir:p [ fhir:value \"1\" ] .");
        let b = ttl("<http://x/a> fhir:p [ fhir:value \"2\" ] .");
        let report = rdf_compare(&a, &b, CompareOptions::default(), None);
        assert_eq!(report.differences.len(), 1);
        assert_eq!(
            report.differences[0].expected,
            vec!["<http://x/a.p> <http://hl7.org/fhir/value> \"1\" .".to_owned()]
        );
        assert_eq!(
            report.differences[0].actual,
            vec!["<http://x/a.p> <http://hl7.org/fhir/value> \"2\" .".to_owned()]
        );
    }

    #[test]
    fn version_and_type_arcs_can_be_ignored() {
        let a = ttl(
            "<http://x/a.ttl> owl:versionIRI <http://x/a.ttl/_history/1> .
             <http://x/a> fhir:c [ a <http://loinc.org/owl#1> ; fhir:value \"1\" ] .",
        );
        let b = ttl(
            "<http://x/a.ttl> owl:versionIRI <http://x/a.ttl/_history/2> .
             <http://x/a> fhir:c [ fhir:value \"1\" ] .",
        );
        assert_eq!(
            rdf_compare(&a, &b, CompareOptions::default(), None).differences.len(),
            2
        );
        let options = CompareOptions {
            ignore_owl_version: true,
            ignore_type_arcs: true,
        };
        assert!(rdf_compare(&a, &b, options, None).is_empty());
    }

    #[test]
    fn anonymous_roots_compare_by_skolem_name() {
        let a = ttl("_:r fhir:value \"1\" .");
        let b = ttl("_:s fhir:value \"1\" .");
        assert!(rdf_compare(&a, &b, CompareOptions::default(), None).is_empty());
    }

    #[test]
    fn filters_see_the_split() {
        let a = ttl("<http://x/a> fhir:q [ fhir:value 2.00 ] .");
        let b = ttl("<http://x/a> fhir:q [ fhir:value 2.0 ] .");
        assert!(!rdf_compare(&a, &b, CompareOptions::default(), None).is_empty());
        assert!(rdf_compare(&a, &b, CompareOptions::default(), Some(&decimal_filter)).is_empty());
    }
}
