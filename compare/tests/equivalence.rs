//! Mapped fixtures compared against their expected Turtle.

use fhirrdf_compare::{
    complete_definition, decimal_filter, rdf_compare, skolemize, CompareOptions,
};
use fhirrdf_graph::{iris, Graph, Term, Triple};
use fhirrdf_loader::{MapOptions, ResourceMapper};
use fhirrdf_test_helpers::{fixtures, json, turtle, vocabulary};

const BASE: &str = "http://hl7.org/fhir/";

fn map(doc: &str, options: MapOptions) -> Graph {
    let mut graph = Graph::new();
    ResourceMapper::new(vocabulary(), BASE, options)
        .map(&json(doc), &mut graph)
        .expect("fixture maps");
    graph
}

fn headerless() -> MapOptions {
    MapOptions {
        add_ontology_header: false,
        ..MapOptions::default()
    }
}

#[test]
fn patient_matches_expected_turtle() {
    let actual = map(fixtures::PATIENT_JSON, MapOptions::default());
    let expected = turtle(fixtures::PATIENT_TTL);
    let report = rdf_compare(&expected, &actual, CompareOptions::default(), None);
    assert!(report.is_empty(), "{report}");
}

#[test]
fn observation_matches_expected_turtle() {
    let actual = map(fixtures::OBSERVATION_JSON, headerless());
    let expected = turtle(fixtures::OBSERVATION_TTL);
    let report = rdf_compare(&expected, &actual, CompareOptions::default(), None);
    assert!(report.is_empty(), "{report}");
}

#[test]
fn bundle_matches_expected_turtle() {
    let actual = map(fixtures::BUNDLE_JSON, headerless());
    let expected = turtle(fixtures::BUNDLE_TTL);
    let report = rdf_compare(&expected, &actual, CompareOptions::default(), None);
    assert!(report.is_empty(), "{report}");
}

#[test]
fn mapping_twice_gives_no_differences() {
    let first = map(fixtures::PATIENT_EXTENSIONS_JSON, MapOptions::default());
    let second = map(fixtures::PATIENT_EXTENSIONS_JSON, MapOptions::default());
    let report = rdf_compare(&first, &second, CompareOptions::default(), None);
    assert!(report.is_empty(), "{report}");
    assert_eq!(report.split(), (String::new(), String::new()));
    assert_eq!(skolemize(&first), skolemize(&second));
}

#[test]
fn ontology_version_differences_can_be_ignored() {
    let expected = map(fixtures::PATIENT_JSON, MapOptions::default());
    let ontology = Term::iri("http://hl7.org/fhir/Patient/pat1.ttl");
    let mut actual = expected.clone();
    actual.remove(&Triple::new(
        ontology.clone(),
        iris::OWL_VERSION_IRI,
        Term::iri("http://hl7.org/fhir/Patient/pat1.ttl/_history/2"),
    ));
    actual.insert(
        ontology,
        iris::OWL_VERSION_IRI,
        Term::iri("http://hl7.org/fhir/Patient/pat1.ttl/_history/9"),
    );

    let strict = rdf_compare(&expected, &actual, CompareOptions::default(), None);
    assert_eq!(strict.differences.len(), 1);
    assert_eq!(strict.differences[0].subject, "http://hl7.org/fhir/Patient/pat1.ttl");

    let lenient = CompareOptions {
        ignore_owl_version: true,
        ..CompareOptions::default()
    };
    assert!(rdf_compare(&expected, &actual, lenient, None).is_empty());
}

#[test]
fn concept_type_arcs_can_be_ignored() {
    let expected = turtle(fixtures::OBSERVATION_TTL);
    let mut actual = map(fixtures::OBSERVATION_JSON, headerless());
    actual.retain(|t| !(t.subject.is_blank() && t.predicate == iris::RDF_TYPE));

    let strict = rdf_compare(&expected, &actual, CompareOptions::default(), None);
    assert_eq!(strict.differences.len(), 1);
    assert_eq!(strict.differences[0].expected.len(), 4);
    assert!(strict.differences[0].actual.is_empty());

    let lenient = CompareOptions {
        ignore_type_arcs: true,
        ..CompareOptions::default()
    };
    assert!(rdf_compare(&expected, &actual, lenient, None).is_empty());
}

#[test]
fn decimal_spelling_differences_are_filtered() {
    let respelled = fixtures::OBSERVATION_JSON.replace("67.50", "67.5");
    let actual = map(&respelled, headerless());
    let expected = turtle(fixtures::OBSERVATION_TTL);

    let strict = rdf_compare(&expected, &actual, CompareOptions::default(), None);
    let (only_expected, only_actual) = strict.split();
    assert!(only_expected.contains("\"67.50\"^^<http://www.w3.org/2001/XMLSchema#decimal>"));
    assert!(only_actual.contains("\"67.5\"^^<http://www.w3.org/2001/XMLSchema#decimal>"));

    let filtered = rdf_compare(
        &expected,
        &actual,
        CompareOptions::default(),
        Some(&decimal_filter),
    );
    assert!(filtered.is_empty(), "{filtered}");
}

#[test]
fn missing_resources_are_reported_wholesale() {
    let expected = turtle(fixtures::BUNDLE_TTL);
    let mut actual = map(fixtures::BUNDLE_JSON, headerless());
    let organization = Term::iri("http://example.org/fhir/Organization/o");
    let dropped = complete_definition(&organization, &actual);
    for t in &dropped {
        actual.remove(t);
    }

    let report = rdf_compare(&expected, &actual, CompareOptions::default(), None);
    assert_eq!(report.only_in_expected.len(), 1);
    assert_eq!(report.only_in_expected[0].subject, "http://example.org/fhir/Organization/o");
    assert!(report.only_in_actual.is_empty());
    assert!(report
        .render()
        .contains("===== Subjects in Graph 1 but not Graph 2: "));
}
